//! # Playdesk
//!
//! Core of a play-venue admin dashboard: barcode session timing, overstay
//! tracking and paginated access to the venue's REST backend.
//!
//! ## Features
//!
//! - **Session Timing**: End times from start + duration + extra minutes
//! - **Overstay Tracking**: Effective end after extensions, minutes past it
//! - **List Controllers**: Filtered, paginated lists with stale response suppression
//! - **REST Transport**: reqwest client for reservations, barcodes, products, pricing
//! - **Console Front End**: Tables and time checks from the command line
//!
//! ## Usage
//!
//! ```rust,no_run
//! use playdesk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
