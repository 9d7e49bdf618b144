pub mod history;
pub mod processor;
pub mod timestamp;

pub use history::LoginHistory;
pub use processor::LogProcessor;
pub use timestamp::{to_epoch_seconds, TimestampError};
