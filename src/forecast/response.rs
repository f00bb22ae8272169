//! Wire model of the forecast endpoint and its projection onto [`WeatherSeries`].
//!
//! The provider answers with one array per column, all index-aligned with the
//! `time` array. Rows are rebuilt by zipping the columns positionally, in
//! provider order.

use crate::forecast::error::FetchError;
use crate::types::daily_record::{DailyRecord, WeatherSeries};
use crate::types::measurement::Measurement;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub daily: DailyColumns,
}

/// The `daily` object. A column the provider left out stays `None` and yields
/// an absent value on every row.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DailyColumns {
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub temperature_2m_mean: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub apparent_temperature_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub apparent_temperature_min: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub apparent_temperature_mean: Option<Vec<Option<f64>>>,
}

/// Error body, e.g. `{"error": true, "reason": "Parameter 'start_date' is out of allowed range"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub reason: String,
}

impl DailyColumns {
    fn column(&self, measurement: Measurement) -> Option<&[Option<f64>]> {
        let column = match measurement {
            Measurement::TempMax => &self.temperature_2m_max,
            Measurement::TempMin => &self.temperature_2m_min,
            Measurement::TempMean => &self.temperature_2m_mean,
            Measurement::ApparentTempMax => &self.apparent_temperature_max,
            Measurement::ApparentTempMin => &self.apparent_temperature_min,
            Measurement::ApparentTempMean => &self.apparent_temperature_mean,
        };
        column.as_deref()
    }

    /// Transposes the columns into one [`DailyRecord`] per `time` entry.
    ///
    /// # Errors
    ///
    /// [`FetchError::ColumnLength`] if a present column is not exactly as long
    /// as `time`.
    pub fn into_series(self) -> Result<WeatherSeries, FetchError> {
        let expected = self.time.len();
        for measurement in Measurement::ALL {
            if let Some(values) = self.column(measurement) {
                if values.len() != expected {
                    return Err(FetchError::ColumnLength {
                        column: measurement,
                        expected,
                        found: values.len(),
                    });
                }
            }
        }

        let mut records: Vec<DailyRecord> =
            self.time.iter().copied().map(DailyRecord::empty).collect();
        for measurement in Measurement::ALL {
            if let Some(values) = self.column(measurement) {
                for (record, value) in records.iter_mut().zip(values) {
                    record.set_value(measurement, *value);
                }
            }
        }
        Ok(WeatherSeries::new(records))
    }
}
