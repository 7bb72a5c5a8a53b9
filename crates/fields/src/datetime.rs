use chrono::{NaiveDate, NaiveTime};

/// Time shapes bills actually carry, tried in order for AM/PM-marked strings.
pub const TIME_FORMATS: [&str; 5] = ["%I:%M %p", "%H:%M", "%I:%M%p", "%I.%M %p", "%I.%M%p"];

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parses a wall-clock time as reported on a bill. Strings carrying an AM/PM
/// marker try the 12-hour formats in order; everything else is read as
/// 24-hour `hh:mm`.
pub fn parse_time_of_day(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    if time.is_empty() {
        return None;
    }
    let upper = time.to_uppercase();
    if upper.contains("AM") || upper.contains("PM") {
        TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(time, fmt).ok())
    } else {
        NaiveTime::parse_from_str(time, "%H:%M").ok()
    }
}

/// Re-renders a time as `hh:mm AA` (e.g. "08:30 PM"). Empty stays empty;
/// unparsable values are dropped with a warning rather than passed through.
pub fn normalize_time(time: &str) -> String {
    if time.trim().is_empty() {
        return String::new();
    }
    match parse_time_of_day(time) {
        Some(t) => t.format("%I:%M %p").to_string(),
        None => {
            tracing::warn!(value = %time, "unparsable bill time, dropping");
            String::new()
        }
    }
}

/// Best-effort `mm/dd/yyyy` normalization: parseable dates are re-rendered
/// with leading zeros, anything else passes through unchanged.
pub fn normalize_date(date: &str) -> String {
    let trimmed = date.trim();
    match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        Ok(d) => d.format(DATE_FORMAT).to_string(),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_24_hour_times() {
        let t = parse_time_of_day("20:30").unwrap();
        assert_eq!((t.hour(), t.minute()), (20, 30));
        assert_eq!(parse_time_of_day("4:59").unwrap().hour(), 4);
    }

    #[test]
    fn parses_12_hour_variants() {
        assert_eq!(parse_time_of_day("10:30 PM").unwrap().hour(), 22);
        assert_eq!(parse_time_of_day("07:15 AM").unwrap().hour(), 7);
        assert_eq!(parse_time_of_day("7:15pm").unwrap().hour(), 19);
        assert_eq!(parse_time_of_day("7.15 pm").unwrap().hour(), 19);
        assert_eq!(parse_time_of_day("7.15pm").unwrap().hour(), 19);
    }

    #[test]
    fn twelve_am_is_midnight() {
        assert_eq!(parse_time_of_day("12:05 AM").unwrap().hour(), 0);
        assert_eq!(parse_time_of_day("12:05 PM").unwrap().hour(), 12);
    }

    #[test]
    fn empty_and_garbage_do_not_parse() {
        assert!(parse_time_of_day("").is_none());
        assert!(parse_time_of_day("   ").is_none());
        assert!(parse_time_of_day("noon").is_none());
        assert!(parse_time_of_day("25:99").is_none());
    }

    #[test]
    fn normalize_time_renders_hh_mm_aa() {
        assert_eq!(normalize_time("20:30"), "08:30 PM");
        assert_eq!(normalize_time("7:15 am"), "07:15 AM");
        assert_eq!(normalize_time("10:30 PM"), "10:30 PM");
    }

    #[test]
    fn normalize_time_drops_what_it_cannot_read() {
        assert_eq!(normalize_time(""), "");
        assert_eq!(normalize_time("midnightish"), "");
    }

    #[test]
    fn normalize_date_pads_mm_dd_yyyy() {
        assert_eq!(normalize_date("3/6/2025"), "03/06/2025");
        assert_eq!(normalize_date("03/06/2025"), "03/06/2025");
        assert_eq!(normalize_date("12/31/2024"), "12/31/2024");
    }

    #[test]
    fn normalize_date_passes_through_other_shapes() {
        assert_eq!(normalize_date("2025-03-06"), "2025-03-06");
        assert_eq!(normalize_date("6 March 2025"), "6 March 2025");
        assert_eq!(normalize_date(""), "");
    }
}
