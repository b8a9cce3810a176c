//! Display text for every [`Message`].
//!
//! All user-facing wording lives here so the rest of the crate only deals in
//! typed messages.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigApiMissing => format!(
                "API is not configured. Run `playdesk config --api-url <URL>` or set {}",
                crate::libs::config::ENV_API_URL
            ),
            Message::ConfigEnvIgnored(var, value) => format!("Ignoring {}='{}': not a number", var, value),
            Message::ConfigShow(json) => json.clone(),

            // === LIST MESSAGES ===
            Message::ListLoadFailed(resource) => format!("Failed to load {}", resource),
            Message::ListEmpty(resource) => format!("No {} found", resource),
            Message::ListPageInfo {
                page,
                total_pages,
                total_count,
            } => format!("Page {} of {} ({} total)", page, total_pages, total_count),
            Message::ListExported(rows, resource) => format!("Exported {} {} row(s)", rows, resource),

            // === SESSION TIME MESSAGES ===
            Message::EndTime(time) => format!("Session ends at {}", time),
            Message::OverstayMinutes(minutes) => format!("Overstay: {} minute(s)", minutes),
            Message::OverstayNone => "No overstay".to_string(),
            Message::InvalidTimeInput(reason) => format!("Invalid time input: {}", reason),
        };

        write!(f, "{}", text)
    }
}
