use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Date-only layouts accepted for launch dates, interpreted as midnight UTC.
const DATE_FORMATS: [&str; 4] = ["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d %B %Y"];
/// Date-time layouts without offset, interpreted as UTC.
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a launch date as entered by a user or delivered by the launch catalog.
///
/// Timestamps with an offset (RFC 3339, RFC 2822) keep their instant. Naive timestamps and
/// plain calendar dates such as `"January 4, 2028"` are taken as UTC.
///
/// # Returns
/// `None` if `raw` is not a real calendar date in any accepted layout.
pub fn parse_launch_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw).or_else(|_| DateTime::parse_from_rfc2822(raw)) {
        return Some(zoned.with_timezone(&Utc));
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}
