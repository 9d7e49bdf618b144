use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a LoginSentry run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Transport settings for the log download
    pub fetch: FetchConfig,
    /// Detection rule settings
    pub detection: DetectionConfig,
    /// Lookup-list file locations
    pub lookups: LookupConfig,
}

/// Transport settings for the log download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Read timeout in seconds on the response stream
    pub read_timeout_secs: u64,
}

/// Detection rule settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Frequency window in seconds
    pub window_seconds: i64,
    /// More than this many logins inside the window is a violation
    pub burst_threshold: usize,
    /// Year assumed for all log timestamps (the log format carries none).
    /// Log sets spanning a year boundary are not supported.
    pub log_year: i32,
}

/// Lookup-list file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// File of whitespace-separated banned IP addresses
    pub banned_ips: PathBuf,
    /// File of whitespace-separated authorized user names
    pub authorized_users: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fetch: FetchConfig {
                connect_timeout_secs: 10,
                read_timeout_secs: 30,
            },
            detection: DetectionConfig {
                window_seconds: 20,
                burst_threshold: 3,
                log_year: 2021,
            },
            lookups: LookupConfig {
                banned_ips: PathBuf::from("banned_ips.txt"),
                authorized_users: PathBuf::from("authorized_users.txt"),
            },
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn to_file(&self, path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
