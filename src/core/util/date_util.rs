use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

/// Wire format used for absolute `start` / `end` query values (UTC, no offset).
pub const UTC_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub struct DateUtil;

impl DateUtil {
    /// Parse a query datetime as UTC.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DDTHH:MM:SS[.fff]` and `YYYY-MM-DD`.
    pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }

        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }

    /// Normalize a query datetime into the UTC wire format.
    #[inline]
    pub fn to_utc_wire(raw: &str) -> Option<String> {
        Self::parse_utc(raw).map(|dt| dt.format(UTC_WIRE_FORMAT).to_string())
    }
}

/// Interpret a wire datetime as UTC and express it in the local timezone.
pub fn get_utc_to_local_date_object(raw: &str) -> Option<DateTime<Local>> {
    DateUtil::parse_utc(raw).map(|dt| dt.with_timezone(&Local))
}
