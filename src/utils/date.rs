use chrono::Local;

/// Local time stamp used in output file names (`YYYYMMDD_HHMMSS`).
pub fn file_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// `YYYY-MM-DD` for a calendar cell; the day is taken as scraped, not validated.
pub fn calendar_date(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

