use chrono::TimeDelta;

use super::AppError;

/// Default retention window in days.
pub const DEFAULT_DEADLINE_DAYS: i64 = 7;

/// How long a workspace is kept before prune removes it.
///
/// Built from a raw deadline in days:
/// - `-1` never prunes
/// - `0` prunes every workspace
/// - `N > 0` prunes workspaces at least `N` days old
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionPolicy {
    Disabled,
    PruneAll,
    MaxAgeDays(u64),
}

impl RetentionPolicy {
    pub fn from_deadline(days: i64) -> Result<Self, AppError> {
        match days {
            -1 => Ok(Self::Disabled),
            0 => Ok(Self::PruneAll),
            n if n > 0 => Ok(Self::MaxAgeDays(n.unsigned_abs())),
            _ => Err(AppError::InvalidDeadline(days)),
        }
    }

    /// Raw deadline value this policy was built from.
    pub fn deadline(&self) -> i64 {
        match self {
            Self::Disabled => -1,
            Self::PruneAll => 0,
            Self::MaxAgeDays(days) => i64::try_from(*days).unwrap_or(i64::MAX),
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Whether a workspace of the given age should be removed.
    pub fn is_expired(&self, age: TimeDelta) -> bool {
        match self {
            Self::Disabled => false,
            Self::PruneAll => true,
            // Windows longer than TimeDelta can represent never expire.
            Self::MaxAgeDays(days) => i64::try_from(*days)
                .ok()
                .and_then(TimeDelta::try_days)
                .is_some_and(|window| age >= window),
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::MaxAgeDays(DEFAULT_DEADLINE_DAYS.unsigned_abs())
    }
}
