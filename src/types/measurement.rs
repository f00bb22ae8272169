//! The six daily temperature statistics the panel requests, plots and tabulates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A color in the chart palette.
///
/// Rendered as an opaque CSS `rgb()` for the series line and as a translucent
/// `rgba()` for the area under it.
///
/// # Examples
///
/// ```
/// use weather_panel::Rgb;
///
/// let red = Rgb(255, 99, 132);
/// assert_eq!(red.css(), "rgb(255, 99, 132)");
/// assert_eq!(red.css_with_alpha(0.2), "rgba(255, 99, 132, 0.2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Opaque CSS color, used for the series line.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// CSS color with transparency, used for the area under the line.
    pub fn css_with_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

/// One of the daily temperature statistics offered by the provider.
///
/// The declaration order is the canonical order: requests, chart series and
/// table columns always list measurements in this order, whatever order the
/// user toggled them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Daily maximum air temperature at 2 m.
    TempMax,
    /// Daily minimum air temperature at 2 m.
    TempMin,
    /// Daily mean air temperature at 2 m.
    TempMean,
    /// Daily maximum "feels like" temperature.
    ApparentTempMax,
    /// Daily minimum "feels like" temperature.
    ApparentTempMin,
    /// Daily mean "feels like" temperature.
    ApparentTempMean,
}

impl Measurement {
    /// All measurements in canonical order.
    pub const ALL: [Measurement; 6] = [
        Measurement::TempMax,
        Measurement::TempMin,
        Measurement::TempMean,
        Measurement::ApparentTempMax,
        Measurement::ApparentTempMin,
        Measurement::ApparentTempMean,
    ];

    /// Column name used by the provider, both in the `daily` request parameter
    /// and as the key of the response array.
    pub fn column_name(&self) -> &'static str {
        match self {
            Measurement::TempMax => "temperature_2m_max",
            Measurement::TempMin => "temperature_2m_min",
            Measurement::TempMean => "temperature_2m_mean",
            Measurement::ApparentTempMax => "apparent_temperature_max",
            Measurement::ApparentTempMin => "apparent_temperature_min",
            Measurement::ApparentTempMean => "apparent_temperature_mean",
        }
    }

    /// Legend label of the chart series.
    pub fn label(&self) -> &'static str {
        match self {
            Measurement::TempMax => "Max Temperature (°C)",
            Measurement::TempMin => "Min Temperature (°C)",
            Measurement::TempMean => "Mean Temperature (°C)",
            Measurement::ApparentTempMax => "Apparent Max Temperature (°C)",
            Measurement::ApparentTempMin => "Apparent Min Temperature (°C)",
            Measurement::ApparentTempMean => "Apparent Mean Temperature (°C)",
        }
    }

    /// Shorter label used for table headers.
    pub fn short_label(&self) -> &'static str {
        match self {
            Measurement::TempMax => "Max Temp (°C)",
            Measurement::TempMin => "Min Temp (°C)",
            Measurement::TempMean => "Mean Temp (°C)",
            Measurement::ApparentTempMax => "Feels Max (°C)",
            Measurement::ApparentTempMin => "Feels Min (°C)",
            Measurement::ApparentTempMean => "Feels Mean (°C)",
        }
    }

    /// Fixed chart color. Independent of which other series are visible.
    pub fn color(&self) -> Rgb {
        match self {
            Measurement::TempMax => Rgb(255, 99, 132),
            Measurement::TempMin => Rgb(54, 162, 235),
            Measurement::TempMean => Rgb(75, 192, 192),
            Measurement::ApparentTempMax => Rgb(255, 159, 64),
            Measurement::ApparentTempMin => Rgb(153, 102, 255),
            Measurement::ApparentTempMean => Rgb(255, 205, 86),
        }
    }

    /// The comma separated `daily` request parameter for all six columns.
    pub(crate) fn daily_parameter() -> String {
        Measurement::ALL
            .iter()
            .map(Measurement::column_name)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_daily_parameter_lists_all_columns_in_order() {
        assert_eq!(
            Measurement::daily_parameter(),
            "temperature_2m_max,temperature_2m_min,temperature_2m_mean,\
             apparent_temperature_max,apparent_temperature_min,apparent_temperature_mean"
        );
    }

    #[test]
    fn test_colors_are_distinct() {
        let colors: HashSet<Rgb> = Measurement::ALL.iter().map(|m| m.color()).collect();
        assert_eq!(colors.len(), Measurement::ALL.len());
    }

    #[test]
    fn test_canonical_order_matches_ord() {
        let mut sorted = Measurement::ALL;
        sorted.sort();
        assert_eq!(sorted, Measurement::ALL);
    }
}
