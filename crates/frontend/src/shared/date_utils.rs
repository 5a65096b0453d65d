/// Utilities for date formatting on the confirmation page
use chrono::{DateTime, Utc};

/// Format an order timestamp as DD.MM.YYYY
/// Example: 2024-03-15T14:02:26Z -> "15.03.2024"
pub fn format_order_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_order_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_order_date(&date), "15.03.2024");
    }

    #[test]
    fn test_format_order_date_pads_fields() {
        let date = Utc.with_ymd_and_hms(2023, 1, 5, 7, 9, 0).unwrap();
        assert_eq!(format_order_date(&date), "05.01.2023");
    }
}
