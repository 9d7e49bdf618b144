//! Per-line detection pipeline
//!
//! Routes each log line through the two rules: the banned-IP check
//! first, and only if that passes, login-frequency tracking. A line is
//! never flagged by both rules.

use std::collections::HashSet;
use std::io::{self, BufRead, Write};

use crate::config::DetectionConfig;
use crate::detection::timestamp::to_epoch_seconds;
use crate::detection::LoginHistory;
use crate::models::{Detection, LogLine, RunSummary};

/// Applies the detection rules to a stream of log lines.
///
/// The lookup sets are loaded once by the caller and stay immutable;
/// the only mutable state is the per-user [`LoginHistory`], which lives
/// for one run.
pub struct LogProcessor {
    banned_ips: HashSet<String>,
    authorized_users: HashSet<String>,
    config: DetectionConfig,
    history: LoginHistory,
}

impl LogProcessor {
    pub fn new(
        banned_ips: HashSet<String>,
        authorized_users: HashSet<String>,
        config: DetectionConfig,
    ) -> Self {
        LogProcessor {
            banned_ips,
            authorized_users,
            config,
            history: LoginHistory::new(),
        }
    }

    /// Classify one log line and update detection state.
    ///
    /// A banned-IP hit bypasses frequency tracking entirely. Lines
    /// whose timestamp cannot be parsed still pass through the
    /// banned-IP rule but are excluded from frequency tracking.
    pub fn process_line(&mut self, line: &str) -> Detection {
        let parsed = LogLine::parse(line);

        if self.banned_ips.contains(parsed.ip) {
            return Detection::BannedIp;
        }

        let timestamp = format!("{} {} {}", parsed.month, parsed.day, parsed.time);
        match to_epoch_seconds(&timestamp, self.config.log_year) {
            Ok(seconds) => {
                self.history.record(parsed.user, seconds);
                if self.history.is_frequency_violation(
                    parsed.user,
                    &self.authorized_users,
                    self.config.window_seconds,
                    self.config.burst_threshold,
                ) {
                    return Detection::Frequency;
                }
            }
            Err(e) => {
                log::debug!("Line excluded from frequency tracking: {}", e);
            }
        }

        Detection::NotFlagged
    }

    /// Process every line of the stream, echoing flagged lines to `out`
    /// and returning the run totals.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, out: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        for line in reader.lines() {
            let line = line?;
            match self.process_line(&line) {
                Detection::BannedIp => {
                    writeln!(out, "Hacking due to banned IP. Line: {}", line)?;
                    summary.hacks += 1;
                }
                Detection::Frequency => {
                    writeln!(out, "Hacking due to frequency. Line: {}", line)?;
                    summary.hacks += 1;
                }
                Detection::NotFlagged => {}
            }
            summary.lines += 1;
        }
        Ok(summary)
    }

    /// Login history accumulated so far
    pub fn history(&self) -> &LoginHistory {
        &self.history
    }
}
