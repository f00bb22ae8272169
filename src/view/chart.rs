//! Line chart series derived from a [`WeatherSeries`] and the current [`Selection`].

use crate::types::daily_record::WeatherSeries;
use crate::types::measurement::{Measurement, Rgb};
use crate::types::selection::Selection;
use chrono::NaiveDate;
use serde::Serialize;

const FILL_ALPHA: f32 = 0.2;

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub measurement: Measurement,
    pub label: &'static str,
    /// One value per label, `None` where the provider had no value.
    pub values: Vec<Option<f64>>,
    pub color: Rgb,
    pub border_color: String,
    pub background_color: String,
}

/// Everything a line chart needs: the shared date axis and the visible series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<NaiveDate>,
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn dataset(&self, measurement: Measurement) -> Option<&ChartDataset> {
        self.datasets.iter().find(|d| d.measurement == measurement)
    }
}

/// Builds the chart for `rows`, one dataset per visible measurement in
/// canonical order.
///
/// Absent or empty rows give an empty chart. An empty selection still yields
/// the label axis.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use weather_panel::{build_chart_series, DailyRecord, Measurement, Selection, WeatherSeries};
///
/// let mut record = DailyRecord::empty(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// record.temp_max = Some(4.0);
/// let rows = WeatherSeries::new(vec![record]);
///
/// let chart = build_chart_series(Some(&rows), Selection::TEMP_MAX);
/// assert_eq!(chart.labels.len(), 1);
/// assert_eq!(chart.datasets.len(), 1);
/// assert_eq!(chart.datasets[0].values, vec![Some(4.0)]);
/// ```
pub fn build_chart_series(rows: Option<&WeatherSeries>, selection: Selection) -> ChartSeries {
    let Some(rows) = rows.filter(|r| !r.is_empty()) else {
        return ChartSeries::default();
    };

    let datasets = selection
        .measurements()
        .into_iter()
        .map(|measurement| {
            let color = measurement.color();
            ChartDataset {
                measurement,
                label: measurement.label(),
                values: rows.values(measurement),
                color,
                border_color: color.css(),
                background_color: color.css_with_alpha(FILL_ALPHA),
            }
        })
        .collect();

    ChartSeries {
        labels: rows.dates(),
        datasets,
    }
}
