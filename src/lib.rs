pub mod config;
pub mod detection;
pub mod input;
pub mod lookup;
pub mod models;

// Re-export commonly used types
pub use config::{Config, DetectionConfig, FetchConfig, LookupConfig};
pub use detection::{LogProcessor, LoginHistory};
pub use input::{HttpFetcher, UrlParts};
pub use lookup::load_lookup;
pub use models::{Detection, LogLine, RunSummary};
