//! Per-user login history and the frequency rule
//!
//! Tracks the timestamps of every login seen for each user and answers
//! whether the latest login completes a burst: more than
//! `burst_threshold` logins whose most recent `burst_threshold + 1`
//! entries span at most `window_seconds`.

use std::collections::{HashMap, HashSet};

/// Per-user ordered login timestamps.
///
/// Log lines are assumed chronological, so each user's sequence is
/// append-only and ascending; it is never re-sorted. State lives for
/// one run only.
#[derive(Debug, Default)]
pub struct LoginHistory {
    logins: HashMap<String, Vec<i64>>,
}

impl LoginHistory {
    pub fn new() -> Self {
        LoginHistory {
            logins: HashMap::new(),
        }
    }

    /// Append a login timestamp for a user, creating the entry on the
    /// user's first login.
    pub fn record(&mut self, user: &str, timestamp: i64) {
        self.logins
            .entry(user.to_string())
            .or_default()
            .push(timestamp);
    }

    /// Check the frequency rule for a user's just-recorded login.
    ///
    /// Authorized users are exempt. Otherwise a violation is reported
    /// when the user has more than `burst_threshold` logins and the
    /// newest one is within `window_seconds` of the login
    /// `burst_threshold` places before it. Only that trailing window is
    /// inspected, not every possible window in the history, so a
    /// persisting burst re-flags on each subsequent line.
    pub fn is_frequency_violation(
        &self,
        user: &str,
        authorized_users: &HashSet<String>,
        window_seconds: i64,
        burst_threshold: usize,
    ) -> bool {
        if authorized_users.contains(user) {
            return false;
        }
        let seq = match self.logins.get(user) {
            Some(seq) => seq,
            None => return false,
        };
        if seq.len() <= burst_threshold {
            return false;
        }
        let newest = seq[seq.len() - 1];
        let window_start = seq[seq.len() - 1 - burst_threshold];
        newest - window_start <= window_seconds
    }

    /// Number of logins recorded for a user
    pub fn login_count(&self, user: &str) -> usize {
        self.logins.get(user).map(Vec::len).unwrap_or(0)
    }
}
