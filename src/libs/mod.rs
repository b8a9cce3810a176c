//! Core library modules for playdesk.
//!
//! ## Features
//!
//! - **Session Timing**: End times, effective scheduled ends, overstay minutes
//! - **List Control**: Paginated, filtered, cancel-on-supersede remote lists
//! - **Infrastructure**: Configuration, data storage, session context, messaging
//! - **User Interface**: Duration formatting and console tables
//!
//! ## Usage
//!
//! ```rust
//! use playdesk::libs::overstay::compute_end_time;
//!
//! let end = compute_end_time("2024-05-01T10:00:00", 60.0, 0.0)?;
//! assert_eq!(end, "11:00");
//! # Ok::<(), playdesk::libs::error::PlaydeskError>(())
//! ```

pub mod cancel;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod list;
pub mod messages;
pub mod overstay;
pub mod params;
pub mod session;
pub mod view;
