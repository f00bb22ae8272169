use crate::types::measurement::Measurement;
use bitflags::bitflags;

bitflags! {
    /// Which measurements are plotted on the chart.
    ///
    /// Independent of the fetched data. Any subset is valid, including the
    /// empty one.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Selection: u8 {
        const TEMP_MAX           = 1 << 0;
        const TEMP_MIN           = 1 << 1;
        const TEMP_MEAN          = 1 << 2;
        const APPARENT_TEMP_MAX  = 1 << 3;
        const APPARENT_TEMP_MIN  = 1 << 4;
        const APPARENT_TEMP_MEAN = 1 << 5;

        /// The three actual (not "feels like") temperatures.
        const ACTUAL = Self::TEMP_MAX.bits()
                     | Self::TEMP_MIN.bits()
                     | Self::TEMP_MEAN.bits();

        /// The three apparent temperatures.
        const APPARENT = Self::APPARENT_TEMP_MAX.bits()
                       | Self::APPARENT_TEMP_MIN.bits()
                       | Self::APPARENT_TEMP_MEAN.bits();
    }
}

impl Selection {
    /// The flag for a single measurement.
    pub fn flag(measurement: Measurement) -> Selection {
        match measurement {
            Measurement::TempMax => Selection::TEMP_MAX,
            Measurement::TempMin => Selection::TEMP_MIN,
            Measurement::TempMean => Selection::TEMP_MEAN,
            Measurement::ApparentTempMax => Selection::APPARENT_TEMP_MAX,
            Measurement::ApparentTempMin => Selection::APPARENT_TEMP_MIN,
            Measurement::ApparentTempMean => Selection::APPARENT_TEMP_MEAN,
        }
    }

    pub fn is_visible(&self, measurement: Measurement) -> bool {
        self.contains(Selection::flag(measurement))
    }

    pub fn set_visible(&mut self, measurement: Measurement, visible: bool) {
        self.set(Selection::flag(measurement), visible);
    }

    pub fn toggle_measurement(&mut self, measurement: Measurement) {
        self.toggle(Selection::flag(measurement));
    }

    /// Visible measurements in canonical order.
    pub fn measurements(&self) -> Vec<Measurement> {
        Measurement::ALL
            .into_iter()
            .filter(|m| self.is_visible(*m))
            .collect()
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::ACTUAL
    }
}

impl FromIterator<Measurement> for Selection {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Selection::empty(), |acc, m| acc | Selection::flag(m))
    }
}
