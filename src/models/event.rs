/// Parsed view of one auth-log line.
///
/// The log format is a fixed syslog-style column layout:
/// `<Month> <Day> <HH:MM:SS> <host> <proc>[<pid>]: ... <user> ... <ip>`
/// with the user in field 9 and the source IP in field 11.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine<'a> {
    pub month: &'a str,
    pub day: &'a str,
    pub time: &'a str,
    pub user: &'a str,
    pub ip: &'a str,
}

impl<'a> LogLine<'a> {
    /// Extract fields from a raw log line, best effort.
    ///
    /// Missing fields come back as empty strings rather than an error;
    /// a truncated or garbage line must never abort the run.
    pub fn parse(line: &'a str) -> Self {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("");
        LogLine {
            month: field(0),
            day: field(1),
            time: field(2),
            user: field(8),
            ip: field(10),
        }
    }
}

/// Per-line detection outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    NotFlagged,
    /// The source IP is on the banned list.
    BannedIp,
    /// The user tripped the login-frequency rule.
    Frequency,
}

impl Detection {
    pub fn is_flagged(self) -> bool {
        !matches!(self, Detection::NotFlagged)
    }
}

/// Totals accumulated over one full run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of input lines consumed.
    pub lines: u64,
    /// Number of lines flagged by either rule.
    pub hacks: u64,
}
