pub mod observer;
pub mod processor;

pub use observer::ProgressObserver;
pub use processor::Processor;
