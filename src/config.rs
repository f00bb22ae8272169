//! Panel configuration: where to fetch from, and which optional features of the
//! panel are enabled.

use crate::error::PanelError;
use crate::types::measurement::Measurement;
use crate::types::selection::Selection;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_PAGE_SIZES: [usize; 3] = [10, 20, 50];
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for a [`crate::WeatherPanel`].
///
/// Every field has a default, so `PanelConfig::default()` describes the plain
/// dashboard: Open-Meteo forecast endpoint, pages of 10/20/50 rows, the three
/// actual temperatures plotted and tabulated, and filter toggles shown.
///
/// # Examples
///
/// ```
/// use weather_panel::{Measurement, PanelConfig, Selection};
///
/// let config = PanelConfig::builder()
///     .page_sizes(vec![7, 14, 28])
///     .default_page_size(7)
///     .default_selection(Selection::all())
///     .table_columns(Measurement::ALL.to_vec())
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PanelConfig {
    /// Forecast endpoint. Overridable so tests can point at a local server.
    #[builder(into, default = DEFAULT_FORECAST_URL.to_string())]
    pub base_url: String,

    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,

    #[builder(into, default = format!("weather_panel/{}", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Allowed page sizes, in the order they are offered.
    #[builder(default = DEFAULT_PAGE_SIZES.to_vec())]
    pub page_sizes: Vec<usize>,

    #[builder(default = DEFAULT_PAGE_SIZES[0])]
    pub default_page_size: usize,

    /// Series plotted before the user touches any toggle.
    #[builder(default)]
    pub default_selection: Selection,

    /// Measurement columns of the table, after the date column.
    #[builder(default = vec![Measurement::TempMax, Measurement::TempMin, Measurement::TempMean])]
    pub table_columns: Vec<Measurement>,

    /// Whether the per-series filter toggles are offered to the user.
    #[builder(default = true)]
    pub show_filters: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig::builder().build()
    }
}

impl PanelConfig {
    /// # Errors
    ///
    /// [`PanelError::InvalidConfig`] for an empty or zero page size set, a
    /// default page size that is not offered, or an empty base URL.
    pub fn validate(&self) -> Result<(), PanelError> {
        if self.base_url.trim().is_empty() {
            return Err(PanelError::InvalidConfig("base URL is empty".to_string()));
        }
        if self.page_sizes.is_empty() {
            return Err(PanelError::InvalidConfig(
                "at least one page size is required".to_string(),
            ));
        }
        if self.page_sizes.contains(&0) {
            return Err(PanelError::InvalidConfig(
                "page sizes must be positive".to_string(),
            ));
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            return Err(PanelError::InvalidConfig(format!(
                "default page size {} is not one of {:?}",
                self.default_page_size, self.page_sizes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PanelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, DEFAULT_FORECAST_URL);
        assert_eq!(config.page_sizes, vec![10, 20, 50]);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.default_selection, Selection::ACTUAL);
        assert!(config.show_filters);
    }

    #[test]
    fn test_default_page_size_must_be_offered() {
        let config = PanelConfig::builder().default_page_size(25).build();
        assert!(matches!(
            config.validate(),
            Err(PanelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let config = PanelConfig::builder()
            .page_sizes(vec![0, 10])
            .default_page_size(10)
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_page_sizes_are_rejected() {
        let config = PanelConfig::builder().page_sizes(vec![]).build();
        assert!(config.validate().is_err());
    }
}
