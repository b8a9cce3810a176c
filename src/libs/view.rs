use crate::api::resources::{Barcode, CustomerVisit, Pricing, Product, Reservation};
use crate::libs::formatter::{format_overstay, FormattedSession};
use crate::libs::overstay::{effective_scheduled_end, parse_timestamp, Clock};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Barcode sessions with their live overstay status.
    pub fn barcodes(barcodes: &[Barcode], clock: &impl Clock) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "CODE", "START", "END", "STATUS"]);
        for barcode in barcodes {
            let session = Self::format_session(barcode, clock);
            table.add_row(row![barcode.id, session.code, session.start, session.end, session.status]);
        }
        table
    }

    pub fn format_session(barcode: &Barcode, clock: &impl Clock) -> FormattedSession {
        let end = effective_scheduled_end(&barcode.session);
        let status = match barcode.overstay(clock) {
            Ok(status) => format_overstay(&status),
            Err(e) => e.to_string(),
        };

        FormattedSession {
            code: barcode.code.clone(),
            start: barcode
                .start_time
                .as_deref()
                .and_then(|s| parse_timestamp(s).ok())
                .map_or_else(|| "-".to_string(), |t| t.format("%H:%M").to_string()),
            end: format!("{:02}:{:02}", end.hour, end.minute),
            status,
        }
    }

    pub fn reservations(reservations: &[Reservation]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "CUSTOMER", "PHONE", "START", "END", "STATUS"]);
        for r in reservations {
            let end = match r.end_time() {
                Some(Ok(end)) => end,
                Some(Err(_)) | None => "-".to_string(),
            };
            table.add_row(row![
                r.id,
                r.customer_name,
                r.phone.as_deref().unwrap_or("-"),
                r.start_time.as_deref().unwrap_or("-"),
                end,
                r.status.as_deref().unwrap_or("-")
            ]);
        }
        table
    }

    pub fn products(products: &[Product]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CATEGORY", "PRICE", "ACTIVE"]);
        for p in products {
            table.add_row(row![
                p.id,
                p.name,
                p.category.as_deref().unwrap_or("-"),
                format!("{:.2}", p.price),
                if p.is_active { "yes" } else { "no" }
            ]);
        }
        table
    }

    pub fn pricing(pricing: &[Pricing]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "MINUTES", "PRICE", "OVERTIME/MIN"]);
        for p in pricing {
            table.add_row(row![
                p.id,
                p.name,
                p.duration,
                format!("{:.2}", p.price),
                p.overtime_price.map_or_else(|| "-".to_string(), |o| format!("{:.2}", o))
            ]);
        }
        table
    }

    pub fn customers(visits: &[CustomerVisit]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "CUSTOMER", "PHONE", "VISITED", "AMOUNT"]);
        for v in visits {
            table.add_row(row![
                v.id,
                v.customer_name,
                v.phone.as_deref().unwrap_or("-"),
                v.visited_at.as_deref().unwrap_or("-"),
                format!("{:.2}", v.amount)
            ]);
        }
        table
    }
}
