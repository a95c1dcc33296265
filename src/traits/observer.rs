/// Receives percent-complete notifications from a processing run.
///
/// Called synchronously on the run's task, once per item, before the
/// inter-item wait. Any `Fn(u8)` closure is an observer.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, percent: u8);
}

impl<F> ProgressObserver for F
where
    F: Fn(u8) + Send + Sync,
{
    fn on_progress(&self, percent: u8) {
        self(percent)
    }
}
