pub mod event;

pub use event::{Detection, LogLine, RunSummary};
