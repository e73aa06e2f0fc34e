//! Default values shared between config structs and their serde defaults.

use crate::constants;

/// Candidate window: ideas touched within the last day.
pub const DEFAULT_TIME_WINDOW_HOURS: i64 = 24;

pub const DEFAULT_MAX_RECENT_DEVELOPMENTS: usize = constants::MAX_RECENT_DEVELOPMENTS;

pub const DEFAULT_MAX_KEYWORDS: usize = constants::MAX_KEYWORDS;
