use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Utc};

/// Anything that can be reduced to a calendar day.
///
/// Time-of-day and timezone offset are discarded: a `DateTime` keeps the date
/// its own wall clock shows, it is not converted to UTC first. Strings accept
/// `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS` and RFC 3339.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, NaiveDate};
/// use weather_panel::AnyDate;
///
/// let late = DateTime::parse_from_rfc3339("2024-06-01T23:30:00-07:00").unwrap();
/// assert_eq!(late.calendar_day(), NaiveDate::from_ymd_opt(2024, 6, 1));
/// assert_eq!("2024-06-01".calendar_day(), NaiveDate::from_ymd_opt(2024, 6, 1));
/// assert_eq!("yesterday".calendar_day(), None);
/// ```
pub trait AnyDate {
    fn calendar_day(self) -> Option<NaiveDate>;
}

impl AnyDate for NaiveDate {
    fn calendar_day(self) -> Option<NaiveDate> {
        Some(self)
    }
}

impl AnyDate for NaiveDateTime {
    fn calendar_day(self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl AnyDate for DateTime<Utc> {
    fn calendar_day(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl AnyDate for DateTime<Local> {
    fn calendar_day(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl AnyDate for DateTime<FixedOffset> {
    fn calendar_day(self) -> Option<NaiveDate> {
        Some(self.date_naive())
    }
}

impl<T: AnyDate> AnyDate for Option<T> {
    fn calendar_day(self) -> Option<NaiveDate> {
        self.and_then(AnyDate::calendar_day)
    }
}

impl AnyDate for &str {
    fn calendar_day(self) -> Option<NaiveDate> {
        let trimmed = self.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return datetime.calendar_day();
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return naive.calendar_day();
        }
        None
    }
}

impl AnyDate for String {
    fn calendar_day(self) -> Option<NaiveDate> {
        self.as_str().calendar_day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_naive_datetime_drops_time() {
        let dt = june_first().and_hms_opt(23, 59, 59).unwrap();
        assert_eq!(dt.calendar_day(), Some(june_first()));
    }

    #[test]
    fn test_offset_is_discarded_not_converted() {
        // 23:30 at -07:00 is already the 2nd in UTC.
        let dt = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 23, 30, 0)
            .unwrap();
        assert_eq!(dt.calendar_day(), Some(june_first()));

        let east = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 1, 0, 15, 0)
            .unwrap();
        assert_eq!(east.calendar_day(), Some(june_first()));
    }

    #[test]
    fn test_utc_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(dt.calendar_day(), Some(june_first()));
    }

    #[test]
    fn test_string_forms() {
        assert_eq!("2024-06-01".calendar_day(), Some(june_first()));
        assert_eq!(" 2024-06-01 ".calendar_day(), Some(june_first()));
        assert_eq!("2024-06-01T18:45:00".calendar_day(), Some(june_first()));
        assert_eq!(
            "2024-06-01T18:45:00+02:00".to_string().calendar_day(),
            Some(june_first())
        );
        assert_eq!("".calendar_day(), None);
        assert_eq!("2024-13-01".calendar_day(), None);
    }

    #[test]
    fn test_option() {
        assert_eq!(Some(june_first()).calendar_day(), Some(june_first()));
        assert_eq!(None::<NaiveDate>.calendar_day(), None);
    }
}
