#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use playdesk::api::resources::{Barcode, Pricing, Product, Reservation, Resource};
    use playdesk::api::Page;
    use playdesk::libs::overstay::{effective_scheduled_end, FixedClock, OverstayStatus, ScheduledEnd, SessionRecord};
    use playdesk::libs::view::View;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn barcode_json() -> &'static str {
        r#"{
            "id": 12,
            "code": "PD-0012",
            "start_time": "2024-05-01T13:00:00",
            "branch_id": 2,
            "endHour": 14,
            "endMin": 0,
            "extensions": [{"endHour": 14, "endMin": 30}],
            "completedAt": null
        }"#
    }

    #[test]
    fn test_resource_from_str() {
        assert_eq!("barcodes".parse::<Resource>().unwrap(), Resource::Barcodes);
        assert_eq!(" Customers ".parse::<Resource>().unwrap(), Resource::Customers);
        assert!("tickets".parse::<Resource>().is_err());
    }

    #[test]
    fn test_resource_names_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(resource.to_string().parse::<Resource>().unwrap(), resource);
        }
        assert_eq!(Resource::Customers.path(), "customers/history");
        assert_eq!(Resource::Pricing.path(), "pricing");
    }

    #[test]
    fn test_page_from_data_and_total() {
        let page: Page<Product> = serde_json::from_str(
            r#"{"data": [{"id": 1, "name": "Socks", "price": 2.5}], "total": 31}"#,
        )
        .unwrap();

        assert_eq!(page.total_count, 31);
        assert_eq!(page.rows.len(), 1);
        assert!(page.rows[0].is_active);
        assert_eq!(page.rows[0].category, None);
    }

    #[test]
    fn test_page_from_results_and_count() {
        let page: Page<Pricing> = serde_json::from_str(
            r#"{"results": [{"id": 3, "name": "Hour", "duration": 60, "price": 10.0}], "count": 4}"#,
        )
        .unwrap();

        assert_eq!(page.total_count, 4);
        assert_eq!(page.rows[0].duration, 60);
    }

    #[test]
    fn test_page_missing_fields() {
        let page: Page<Product> = serde_json::from_str("{}").unwrap();
        assert_eq!(page, Page::empty());
    }

    #[test]
    fn test_barcode_carries_session() {
        let barcode: Barcode = serde_json::from_str(barcode_json()).unwrap();

        assert_eq!(barcode.code, "PD-0012");
        assert_eq!(barcode.branch_id, Some(2));
        assert_eq!(effective_scheduled_end(&barcode.session), ScheduledEnd { hour: 14, minute: 30 });
        assert_eq!(barcode.overstay(&FixedClock(at(14, 45))).unwrap(), OverstayStatus::Overstayed(15));
        assert_eq!(barcode.overstay(&FixedClock(at(14, 10))).unwrap(), OverstayStatus::OnTime);

        let record: SessionRecord = barcode.into();
        assert_eq!(record.extensions.len(), 1);
        assert_eq!(record.completed_at, None);
    }

    #[test]
    fn test_reservation_end_time() {
        let reservation: Reservation = serde_json::from_str(
            r#"{"id": 5, "customer_name": "Anna", "start_time": "2024-05-01 10:15", "duration": 120}"#,
        )
        .unwrap();
        assert_eq!(reservation.end_time().unwrap().unwrap(), "12:15");

        let undated: Reservation = serde_json::from_str(r#"{"id": 6}"#).unwrap();
        assert!(undated.end_time().is_none());
    }

    #[test]
    fn test_pricing_overtime_charge() {
        let pricing = Pricing {
            id: 1,
            name: "Hour".to_string(),
            duration: 60,
            price: 10.0,
            overtime_price: Some(0.5),
        };
        assert_eq!(pricing.overtime_charge(20), 10.0);
        assert_eq!(pricing.overtime_charge(-5), 0.0);

        let flat = Pricing { overtime_price: None, ..pricing };
        assert_eq!(flat.overtime_charge(20), 0.0);
    }

    #[test]
    fn test_view_barcodes() {
        let barcode: Barcode = serde_json::from_str(barcode_json()).unwrap();
        let clock = FixedClock(at(15, 0));

        let session = View::format_session(&barcode, &clock);
        assert_eq!(session.start, "13:00");
        assert_eq!(session.end, "14:30");
        assert_eq!(session.status, "+30 min overstay");

        let table = View::barcodes(&[barcode], &clock);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_view_tables_have_header() {
        assert_eq!(View::reservations(&[]).len(), 1);
        assert_eq!(View::products(&[]).len(), 1);
        assert_eq!(View::pricing(&[]).len(), 1);
        assert_eq!(View::customers(&[]).len(), 1);
    }
}
