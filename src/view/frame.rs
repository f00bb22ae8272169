//! Export of a [`WeatherSeries`] to a Polars [`DataFrame`].

use crate::types::daily_record::WeatherSeries;
use crate::types::measurement::Measurement;
use polars::prelude::*;

impl WeatherSeries {
    /// Builds a `DataFrame` with a `date` column followed by one `f64` column
    /// per measurement, named after the provider columns. Absent values become
    /// nulls and row order is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weather_panel::{DailyRecord, WeatherSeries};
    ///
    /// let mut record = DailyRecord::empty(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    /// record.temp_max = Some(3.5);
    /// let df = WeatherSeries::new(vec![record]).to_dataframe().unwrap();
    /// assert_eq!(df.shape(), (1, 7));
    /// ```
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(Measurement::ALL.len() + 1);
        columns.push(Column::new("date".into(), self.dates()));
        for measurement in Measurement::ALL {
            columns.push(Column::new(
                measurement.column_name().into(),
                self.values(measurement),
            ));
        }
        DataFrame::new(columns)
    }
}
