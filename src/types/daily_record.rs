use crate::types::measurement::Measurement;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of temperature statistics, in degrees Celsius.
///
/// Every measurement is optional: the provider may report `null` for a day,
/// or omit a column altogether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,                   // time
    pub temp_max: Option<f64>,             // temperature_2m_max
    pub temp_min: Option<f64>,             // temperature_2m_min
    pub temp_mean: Option<f64>,            // temperature_2m_mean
    pub apparent_temp_max: Option<f64>,    // apparent_temperature_max
    pub apparent_temp_min: Option<f64>,    // apparent_temperature_min
    pub apparent_temp_mean: Option<f64>,   // apparent_temperature_mean
}

impl DailyRecord {
    /// A record for `date` with every measurement absent.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            temp_max: None,
            temp_min: None,
            temp_mean: None,
            apparent_temp_max: None,
            apparent_temp_min: None,
            apparent_temp_mean: None,
        }
    }

    pub fn value(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::TempMax => self.temp_max,
            Measurement::TempMin => self.temp_min,
            Measurement::TempMean => self.temp_mean,
            Measurement::ApparentTempMax => self.apparent_temp_max,
            Measurement::ApparentTempMin => self.apparent_temp_min,
            Measurement::ApparentTempMean => self.apparent_temp_mean,
        }
    }

    pub(crate) fn set_value(&mut self, measurement: Measurement, value: Option<f64>) {
        let slot = match measurement {
            Measurement::TempMax => &mut self.temp_max,
            Measurement::TempMin => &mut self.temp_min,
            Measurement::TempMean => &mut self.temp_mean,
            Measurement::ApparentTempMax => &mut self.apparent_temp_max,
            Measurement::ApparentTempMin => &mut self.apparent_temp_min,
            Measurement::ApparentTempMean => &mut self.apparent_temp_mean,
        };
        *slot = value;
    }
}

/// The rows of one successful fetch, one per day, ascending by date.
///
/// The order is whatever the provider returned and is never re-sorted. A
/// series is built once by the fetch pipeline and only read afterwards; a new
/// fetch replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSeries {
    records: Vec<DailyRecord>,
}

impl WeatherSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The label axis: every row's date, in row order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// All values of one measurement, positionally aligned with [`Self::dates`].
    pub fn values(&self, measurement: Measurement) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.value(measurement)).collect()
    }

    /// First and last date, or `None` for an empty series.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }
}

impl From<Vec<DailyRecord>> for WeatherSeries {
    fn from(records: Vec<DailyRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_value_and_set_value_cover_every_measurement() {
        let mut record = DailyRecord::empty(day(1));
        for (i, m) in Measurement::ALL.iter().enumerate() {
            assert_eq!(record.value(*m), None);
            record.set_value(*m, Some(i as f64));
        }
        for (i, m) in Measurement::ALL.iter().enumerate() {
            assert_eq!(record.value(*m), Some(i as f64));
        }
    }

    #[test]
    fn test_series_accessors_keep_row_order() {
        let mut a = DailyRecord::empty(day(2));
        a.temp_max = Some(10.5);
        let b = DailyRecord::empty(day(3));
        let series = WeatherSeries::new(vec![a, b]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.dates(), vec![day(2), day(3)]);
        assert_eq!(series.values(Measurement::TempMax), vec![Some(10.5), None]);
        assert_eq!(series.date_range(), Some((day(2), day(3))));
    }

    #[test]
    fn test_empty_series_has_no_range() {
        let series = WeatherSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.date_range(), None);
    }
}
