//! Backend resources listed on the dashboard and their row types.

use crate::libs::overstay::{self, Clock, OverstayStatus, SessionRecord};
use crate::libs::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A paginated resource exposed by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Reservations,
    Barcodes,
    Products,
    Pricing,
    Customers,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Reservations,
        Resource::Barcodes,
        Resource::Products,
        Resource::Pricing,
        Resource::Customers,
    ];

    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Reservations => "reservations",
            Resource::Barcodes => "barcodes",
            Resource::Products => "products",
            Resource::Pricing => "pricing",
            Resource::Customers => "customers/history",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Reservations => "reservations",
            Resource::Barcodes => "barcodes",
            Resource::Products => "products",
            Resource::Pricing => "pricing",
            Resource::Customers => "customers",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown resource '{}'", s))
    }
}

/// A ticket booked for a time slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Start of the reserved slot as sent by the backend.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Booked play time in minutes.
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
}

impl Reservation {
    /// Scheduled end as `HH:MM`, when start and duration are both known.
    pub fn end_time(&self) -> Option<Result<String>> {
        match (&self.start_time, self.duration) {
            (Some(start), Some(duration)) => Some(overstay::compute_end_time(start, duration, 0.0)),
            _ => None,
        }
    }
}

/// A scanned wristband/ticket barcode with its play session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barcode {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub branch_id: Option<i64>,
    #[serde(flatten)]
    pub session: SessionRecord,
}

impl Barcode {
    pub fn overstay(&self, clock: &impl Clock) -> Result<OverstayStatus> {
        overstay::overstay_status(&self.session, clock)
    }
}

impl From<Barcode> for SessionRecord {
    fn from(barcode: Barcode) -> Self {
        barcode.session
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// A play-time tariff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    pub id: i64,
    pub name: String,
    /// Minutes of play included.
    pub duration: u32,
    pub price: f64,
    /// Charge per started overstay minute, if the tariff has one.
    #[serde(default)]
    pub overtime_price: Option<f64>,
}

impl Pricing {
    /// Overstay charge for `minutes` late, 0 when the tariff has none.
    pub fn overtime_charge(&self, minutes: i64) -> f64 {
        self.overtime_price.unwrap_or(0.0) * minutes.max(0) as f64
    }
}

/// One visit in a customer's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerVisit {
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub visited_at: Option<String>,
    #[serde(default)]
    pub amount: f64,
}

fn default_active() -> bool {
    true
}
