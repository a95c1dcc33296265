pub mod options;
pub mod outcome;
pub mod paced;
pub mod progress;
pub mod sequence;
pub mod wait;
#[cfg(test)]
pub mod integration_tests;

pub use options::ProcessOptions;
pub use outcome::RunOutcome;
pub use paced::SequenceProcessor;
pub use progress::percent_complete;
pub use sequence::Sequence;
pub use wait::{wait_or_cancel, WaitOutcome};
