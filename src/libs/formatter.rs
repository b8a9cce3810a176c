//! Duration and overstay formatting for tables and status lines.
//!
//! ## Format Specifications
//!
//! - [`format_duration`]: `HH:MM`, hours zero-padded to at least two digits,
//!   seconds dropped, negative durations shown as `00:00`.
//! - [`format_minutes`]: compact human form, `45 min` below an hour and
//!   `1h 05m` above.
//! - [`format_overstay`]: status column text for a session.
//!
//! ```rust
//! use playdesk::libs::formatter::{format_duration, format_minutes};
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
//! assert_eq!(format_minutes(65), "1h 05m");
//! ```

use crate::libs::overstay::OverstayStatus;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A session row with every time value already rendered for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedSession {
    /// Barcode or ticket code.
    pub code: String,
    /// Start time, `HH:MM`, or `-` when unknown.
    pub start: String,
    /// Effective scheduled end, `HH:MM`.
    pub end: String,
    /// Overstay status text, see [`format_overstay`].
    pub status: String,
}

/// Formats a chrono::Duration into a standardized "HH:MM" string.
///
/// ```rust
/// use playdesk::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::hours(8)), "08:00");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a whole number of minutes, e.g. `25 min` or `2h 00m`.
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}

pub fn format_overstay(status: &OverstayStatus) -> String {
    match status {
        OverstayStatus::OnTime => "on time".to_string(),
        OverstayStatus::Overstayed(minutes) => format!("+{} overstay", format_minutes(*minutes)),
        OverstayStatus::Completed { overstay: 0 } => "completed".to_string(),
        OverstayStatus::Completed { overstay } => format!("completed, +{}", format_minutes(*overstay)),
    }
}
