use crate::types::measurement::Measurement;
use chrono::NaiveDate;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use weather_panel::LatLon;
///
/// let de_bilt = LatLon(52.1009, 5.1776);
/// assert_eq!(de_bilt.0, 52.1009); // Latitude
/// assert_eq!(de_bilt.1, 5.1776); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The parameters of one outbound forecast request.
///
/// Built from the panel input when a fetch is triggered. `start_date <= end_date`
/// is not checked here, the provider rejects inverted ranges itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub location: LatLon,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Query {
    pub fn new(location: LatLon, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            location,
            start_date,
            end_date,
        }
    }

    /// The query string of the forecast request, in request order.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weather_panel::{LatLon, Query};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    /// let pairs = Query::new(LatLon(52.5, 13.4), day, day).query_pairs();
    /// assert_eq!(pairs[2], ("start_date", "2024-01-05".to_string()));
    /// assert_eq!(pairs[5], ("temperature_unit", "celsius".to_string()));
    /// ```
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.0.to_string()),
            ("longitude", self.location.1.to_string()),
            ("start_date", self.start_date.format("%Y-%m-%d").to_string()),
            ("end_date", self.end_date.format("%Y-%m-%d").to_string()),
            ("daily", Measurement::daily_parameter()),
            ("temperature_unit", "celsius".to_string()),
        ]
    }

    /// Number of calendar days the request spans, inclusive. Zero for an
    /// inverted range.
    pub fn day_count(&self) -> usize {
        let days = (self.end_date - self.start_date).num_days() + 1;
        usize::try_from(days).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let query = Query::new(
            LatLon(-33.87, 151.21),
            NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        );
        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("latitude", "-33.87".to_string()),
                ("longitude", "151.21".to_string()),
                ("start_date", "2023-12-30".to_string()),
                ("end_date", "2024-01-02".to_string()),
                ("daily", Measurement::daily_parameter()),
                ("temperature_unit", "celsius".to_string()),
            ]
        );
        assert_eq!(query.day_count(), 4);
    }

    #[test]
    fn test_inverted_range_counts_zero_days() {
        let query = Query::new(
            LatLon(0.0, 0.0),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        assert_eq!(query.day_count(), 0);
    }
}
