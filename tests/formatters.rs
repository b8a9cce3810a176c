#[cfg(test)]
mod tests {
    use chrono::Duration;
    use playdesk::libs::formatter::{format_duration, format_minutes, format_overstay};
    use playdesk::libs::overstay::OverstayStatus;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(5))), "02:05");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-30)), "00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00");
    }

    #[test]
    fn test_format_duration_seconds_dropped() {
        assert_eq!(format_duration(&(Duration::minutes(30) + Duration::seconds(59))), "00:30");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(25), "25 min");
        assert_eq!(format_minutes(60), "1h 00m");
        assert_eq!(format_minutes(125), "2h 05m");
        assert_eq!(format_minutes(-3), "0 min");
    }

    #[test]
    fn test_format_overstay() {
        assert_eq!(format_overstay(&OverstayStatus::OnTime), "on time");
        assert_eq!(format_overstay(&OverstayStatus::Overstayed(25)), "+25 min overstay");
        assert_eq!(format_overstay(&OverstayStatus::Completed { overstay: 0 }), "completed");
        assert_eq!(format_overstay(&OverstayStatus::Completed { overstay: 70 }), "completed, +1h 10m");
    }
}
