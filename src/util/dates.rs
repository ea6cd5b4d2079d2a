use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// `31 Aug` — trailing date on a completed row.
pub fn format_day_month(dt: NaiveDateTime) -> String {
    dt.format("%d %b").to_string()
}

/// `31 Aug 2025 14:05` — completion timestamp in the detail view.
pub fn format_completed(dt: NaiveDateTime) -> String {
    dt.format("%d %b %Y %H:%M").to_string()
}

/// `2025/08/31 14:05` — "updated at" stamp under the notes field.
pub fn format_updated(dt: NaiveDateTime) -> String {
    dt.format("%Y/%m/%d %H:%M").to_string()
}

/// `Sunday 31 Aug` — header of the today section.
pub fn format_today_label(date: NaiveDate) -> String {
    date.format("%A %d %b").to_string()
}

/// `August 2025` — header of the completed-this-month section.
pub fn format_month_year(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_formats() {
        let stamp = dt(2025, 8, 31, 14, 5);
        assert_eq!(format_day_month(stamp), "31 Aug");
        assert_eq!(format_completed(stamp), "31 Aug 2025 14:05");
        assert_eq!(format_updated(stamp), "2025/08/31 14:05");
        let date = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        assert_eq!(format_today_label(date), "Sunday 31 Aug");
        assert_eq!(format_month_year(date), "August 2025");
    }
}
