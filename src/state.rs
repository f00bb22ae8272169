//! The panel's state machine.
//!
//! `Idle -> Loading` on every accepted submit, `Loading -> Loaded | Failed` when
//! the latest request completes. Data and error text are cleared when a fetch
//! starts, not when it ends, so stale rows never sit next to a loading
//! indicator. Each accepted submit gets a ticket; only the result for the most
//! recent ticket is applied.

use crate::config::PanelConfig;
use crate::error::{PanelError, ValidationError};
use crate::forecast::error::FetchError;
use crate::input::PanelInput;
use crate::types::daily_record::WeatherSeries;
use crate::types::measurement::{Measurement, Rgb};
use crate::types::query::Query;
use crate::types::selection::Selection;
use crate::types::traits::any_date::AnyDate;
use crate::view::chart::{build_chart_series, ChartSeries};
use crate::view::pagination::{paginate, Page, Pagination};
use crate::view::table::{table_headers, table_rows, TableRow};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelStatus {
    /// Nothing fetched yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// Rows from the latest request are present.
    Loaded,
    /// The latest request failed; no rows are present.
    Failed,
}

/// Handed out by [`PanelState::begin_fetch`]; must be given back to
/// [`PanelState::complete_fetch`] together with the result.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    id: u64,
    query: Query,
}

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// What happened to a completed fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result belonged to the latest submit and is now shown.
    Applied,
    /// A newer submit was issued in the meantime; the result was dropped.
    Superseded,
}

/// A filter checkbox as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesToggle {
    pub measurement: Measurement,
    pub label: &'static str,
    pub color: Rgb,
    pub visible: bool,
}

/// Snapshot of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub latitude: String,
    pub longitude: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: PanelStatus,
    pub error: Option<String>,
    /// Empty when filter toggles are disabled in the config.
    pub toggles: Vec<SeriesToggle>,
    pub chart: ChartSeries,
    pub table_headers: Vec<&'static str>,
    pub table_rows: Vec<TableRow>,
    pub page_index: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub page_sizes: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone)]
pub struct PanelState {
    config: PanelConfig,
    input: PanelInput,
    selection: Selection,
    pagination: Pagination,
    status: PanelStatus,
    series: Option<WeatherSeries>,
    error: Option<String>,
    latest_ticket: u64,
}

impl PanelState {
    /// # Errors
    ///
    /// [`PanelError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: PanelConfig) -> Result<Self, PanelError> {
        config.validate()?;
        Ok(Self {
            input: PanelInput::default(),
            selection: config.default_selection,
            pagination: Pagination::new(config.default_page_size),
            status: PanelStatus::Idle,
            series: None,
            error: None,
            latest_ticket: 0,
            config,
        })
    }

    /// The configuration the panel was created with.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Raw form contents, exactly as typed.
    pub fn input(&self) -> &PanelInput {
        &self.input
    }

    /// Which chart series are currently visible.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn status(&self) -> PanelStatus {
        self.status
    }

    /// `true` while the latest accepted submit has not completed.
    pub fn is_loading(&self) -> bool {
        self.status == PanelStatus::Loading
    }

    /// Rows of the latest successful fetch. `None` while loading, after a
    /// failure and before the first submit.
    pub fn series(&self) -> Option<&WeatherSeries> {
        self.series.as_ref()
    }

    /// Text to show next to the form, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Stores the latitude field. Parsed only on submit.
    pub fn set_latitude(&mut self, value: impl Into<String>) {
        self.input.set_latitude(value);
    }

    /// Stores the longitude field. Parsed only on submit.
    pub fn set_longitude(&mut self, value: impl Into<String>) {
        self.input.set_longitude(value);
    }

    /// Stores the start date, keeping only its calendar day.
    ///
    /// # Arguments
    ///
    /// * `value` - Anything implementing [`AnyDate`]. A value that is not a
    ///   date clears the field.
    pub fn set_start_date(&mut self, value: impl AnyDate) {
        self.input.set_start_date(value);
    }

    /// Stores the end date, keeping only its calendar day. See
    /// [`PanelState::set_start_date`].
    pub fn set_end_date(&mut self, value: impl AnyDate) {
        self.input.set_end_date(value);
    }

    /// Flips the visibility of one chart series. The table is not affected.
    pub fn toggle_measurement(&mut self, measurement: Measurement) {
        self.selection.toggle_measurement(measurement);
    }

    pub fn set_measurement_visible(&mut self, measurement: Measurement, visible: bool) {
        self.selection.set_visible(measurement, visible);
    }

    /// Replaces the whole series selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Switches the page size and returns to page 1.
    ///
    /// # Errors
    ///
    /// [`ValidationError::PageSize`] if `page_size` is not one of the configured
    /// sizes. Pagination is left untouched in that case.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ValidationError> {
        if !self.config.page_sizes.contains(&page_size) {
            return Err(ValidationError::PageSize {
                requested: page_size,
                allowed: self.config.page_sizes.clone(),
            });
        }
        self.pagination.set_page_size(page_size);
        Ok(())
    }

    /// Page count for the current rows and page size. At least one.
    pub fn total_pages(&self) -> usize {
        self.pagination
            .total_pages(self.series.as_ref().map_or(0, WeatherSeries::len))
    }

    /// Goes one page back. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous()
    }

    /// Goes one page forward, stopping at the last page. Returns whether the
    /// page changed.
    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.pagination.next(total)
    }

    /// Validates the input and, if it is complete, moves to `Loading`.
    ///
    /// On success the previous rows and error are discarded right away and a
    /// ticket for the new request is returned. Every earlier ticket becomes
    /// stale.
    ///
    /// # Errors
    ///
    /// [`ValidationError::IncompleteInput`]: the error text is shown, but status
    /// and rows are left as they were and no ticket is issued.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, ValidationError> {
        let query = match self.input.to_query() {
            Ok(query) => query,
            Err(e) => {
                info!("Rejected submit: {}", e);
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.latest_ticket += 1;
        self.series = None;
        self.error = None;
        self.status = PanelStatus::Loading;
        self.pagination.reset();
        debug!("Issued fetch ticket {} for {:?}", self.latest_ticket, query);

        Ok(FetchTicket {
            id: self.latest_ticket,
            query,
        })
    }

    /// Applies the result of the request behind `ticket`, unless a newer
    /// request has been started since.
    ///
    /// # Errors
    ///
    /// Hands the [`FetchError`] back when it was applied, i.e. the panel is now
    /// `Failed` because of it. Errors of superseded requests are dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<WeatherSeries, FetchError>,
    ) -> Result<FetchOutcome, FetchError> {
        if ticket.id != self.latest_ticket {
            debug!(
                "Discarding result of fetch ticket {}, latest is {}",
                ticket.id, self.latest_ticket
            );
            return Ok(FetchOutcome::Superseded);
        }

        self.pagination.reset();
        match result {
            Ok(series) => {
                info!("Loaded {} days", series.len());
                self.series = Some(series);
                self.error = None;
                self.status = PanelStatus::Loaded;
                Ok(FetchOutcome::Applied)
            }
            Err(e) => {
                warn!("Fetch ticket {} failed: {}", ticket.id, e);
                self.series = None;
                self.error = Some(FetchError::USER_MESSAGE.to_string());
                self.status = PanelStatus::Failed;
                Err(e)
            }
        }
    }

    /// Chart for the current rows and selection. Empty while loading or
    /// without data.
    pub fn chart(&self) -> ChartSeries {
        if self.is_loading() {
            return ChartSeries::default();
        }
        build_chart_series(self.series.as_ref(), self.selection)
    }

    /// The table page currently selected.
    pub fn page(&self) -> Page<'_> {
        let rows = self.series.as_ref().map_or(&[][..], WeatherSeries::records);
        paginate(rows, self.pagination)
    }

    pub fn view(&self) -> PanelView {
        let page = self.page();
        let columns = &self.config.table_columns;
        let toggles = if self.config.show_filters {
            Measurement::ALL
                .into_iter()
                .map(|measurement| SeriesToggle {
                    measurement,
                    label: measurement.label(),
                    color: measurement.color(),
                    visible: self.selection.is_visible(measurement),
                })
                .collect()
        } else {
            Vec::new()
        };

        PanelView {
            latitude: self.input.latitude.clone(),
            longitude: self.input.longitude.clone(),
            start_date: self.input.start_date,
            end_date: self.input.end_date,
            status: self.status,
            error: self.error.clone(),
            toggles,
            chart: self.chart(),
            table_headers: table_headers(columns),
            table_rows: table_rows(page.rows, columns),
            page_index: page.page_index,
            total_pages: page.total_pages,
            page_size: page.page_size,
            page_sizes: self.config.page_sizes.clone(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}
