use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Directory name format for a workspace (`YYYY-MM-DD`).
pub const WORKSPACE_FORMAT: &str = "%Y-%m-%d";

const WORKSPACE_NAME_LEN: usize = 10;

/// Calendar date identifying a daily workspace directory.
///
/// Guarantees:
/// - The directory name is exactly `YYYY-MM-DD`, zero padded
/// - The date is a valid calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkspaceDate(NaiveDate);

impl WorkspaceDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Workspace for the calendar day of `now`.
    pub fn on(now: NaiveDateTime) -> Self {
        Self(now.date())
    }

    /// Parse a directory name. Returns `None` for anything that is not a
    /// canonical workspace name.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        if name.len() != WORKSPACE_NAME_LEN {
            return None;
        }
        let date = NaiveDate::parse_from_str(name, WORKSPACE_FORMAT).ok()?;
        let workspace = Self(date);
        // chrono accepts unpadded fields and signed years; only the canonical spelling counts.
        (workspace.dir_name() == name).then_some(workspace)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn dir_name(&self) -> String {
        self.0.format(WORKSPACE_FORMAT).to_string()
    }

    /// Time elapsed between local midnight of this day and `now`.
    pub fn age_at(&self, now: NaiveDateTime) -> TimeDelta {
        now - self.0.and_time(NaiveTime::MIN)
    }
}

impl fmt::Display for WorkspaceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
