//! The raw values the user typed into the panel form.

use crate::error::ValidationError;
use crate::types::query::{LatLon, Query};
use crate::types::traits::any_date::AnyDate;
use chrono::NaiveDate;

/// Form fields as entered.
///
/// Coordinates are kept as text, exactly as a numeric input hands them over,
/// and only parsed when a [`Query`] is requested. Dates are already reduced
/// to calendar days by the setters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelInput {
    pub latitude: String,
    pub longitude: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl PanelInput {
    pub fn set_latitude(&mut self, value: impl Into<String>) {
        self.latitude = value.into();
    }

    pub fn set_longitude(&mut self, value: impl Into<String>) {
        self.longitude = value.into();
    }

    /// Sets the start date. Values that do not resolve to a calendar day clear it.
    pub fn set_start_date(&mut self, value: impl AnyDate) {
        self.start_date = value.calendar_day();
    }

    /// Sets the end date. Values that do not resolve to a calendar day clear it.
    pub fn set_end_date(&mut self, value: impl AnyDate) {
        self.end_date = value.calendar_day();
    }

    /// Reads the current fields into a [`Query`].
    ///
    /// # Errors
    ///
    /// [`ValidationError::IncompleteInput`] if a coordinate is empty or not a
    /// number, or if either date is missing. Coordinate ranges are not checked.
    pub fn to_query(&self) -> Result<Query, ValidationError> {
        let latitude = parse_coordinate(&self.latitude)?;
        let longitude = parse_coordinate(&self.longitude)?;
        let start_date = self.start_date.ok_or(ValidationError::IncompleteInput)?;
        let end_date = self.end_date.ok_or(ValidationError::IncompleteInput)?;
        Ok(Query::new(LatLon(latitude, longitude), start_date, end_date))
    }
}

fn parse_coordinate(raw: &str) -> Result<f64, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::IncompleteInput);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::IncompleteInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PanelInput {
        let mut input = PanelInput::default();
        input.set_latitude("52.52");
        input.set_longitude("13.41");
        input.set_start_date("2024-05-01");
        input.set_end_date("2024-05-07T22:10:00+02:00");
        input
    }

    #[test]
    fn test_complete_input_builds_query() {
        let query = filled().to_query().unwrap();
        assert_eq!(query.location, LatLon(52.52, 13.41));
        assert_eq!(query.start_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(query.end_date, NaiveDate::from_ymd_opt(2024, 5, 7).unwrap());
    }

    #[test]
    fn test_zero_is_a_valid_coordinate() {
        let mut input = filled();
        input.set_latitude("0");
        input.set_longitude("-0.0");
        assert!(input.to_query().is_ok());
    }

    #[test]
    fn test_empty_latitude_is_incomplete() {
        let mut input = filled();
        input.set_latitude("   ");
        assert_eq!(input.to_query(), Err(ValidationError::IncompleteInput));
    }

    #[test]
    fn test_non_numeric_longitude_is_incomplete() {
        let mut input = filled();
        input.set_longitude("east");
        assert_eq!(input.to_query(), Err(ValidationError::IncompleteInput));
        input.set_longitude("NaN");
        assert_eq!(input.to_query(), Err(ValidationError::IncompleteInput));
    }

    #[test]
    fn test_missing_dates_are_incomplete() {
        let mut input = filled();
        input.set_start_date(None::<NaiveDate>);
        assert_eq!(input.to_query(), Err(ValidationError::IncompleteInput));

        let mut input = filled();
        input.set_end_date("not a date");
        assert_eq!(input.end_date, None);
        assert_eq!(input.to_query(), Err(ValidationError::IncompleteInput));
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        let mut input = filled();
        input.set_latitude("123.0");
        assert_eq!(input.to_query().unwrap().location.0, 123.0);
    }
}
