//! The main entry point: a weather panel that owns its HTTP client and state.

use crate::config::PanelConfig;
use crate::error::PanelError;
use crate::forecast::client::ForecastClient;
use crate::state::{FetchOutcome, PanelState, PanelView};
use std::sync::Arc;
use tokio::sync::Mutex;

/// An input form, a fetch pipeline and the derived chart/table views, behind
/// one handle.
///
/// UI callbacks go through [`WeatherPanel::update`], the fetch through
/// [`WeatherPanel::submit`], and rendering reads [`WeatherPanel::view`].
///
/// The state lock is never held while a request is in flight. Overlapping
/// submits are allowed; whichever was submitted last decides what is shown,
/// regardless of the order in which responses arrive. The request runs on
/// its own task, so dropping a `submit` future (a timeout, a lost `select!`)
/// does not strand the panel in `Loading`.
///
/// # Examples
///
/// ```no_run
/// # use weather_panel::{PanelError, PanelStatus, WeatherPanel};
/// # #[tokio::main]
/// # async fn main() -> Result<(), PanelError> {
/// let panel = WeatherPanel::default_config()?;
/// panel
///     .update(|state| {
///         state.set_latitude("52.52");
///         state.set_longitude("13.41");
///         state.set_start_date("2024-07-01");
///         state.set_end_date("2024-07-31");
///     })
///     .await;
///
/// panel.submit().await?;
/// let view = panel.view().await;
/// assert_eq!(view.status, PanelStatus::Loaded);
/// println!("page {} of {}", view.page_index, view.total_pages);
/// # Ok(())
/// # }
/// ```
pub struct WeatherPanel {
    client: ForecastClient,
    state: Arc<Mutex<PanelState>>,
}

impl WeatherPanel {
    /// # Errors
    ///
    /// [`PanelError::InvalidConfig`] for an inconsistent config,
    /// [`PanelError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: PanelConfig) -> Result<Self, PanelError> {
        let client = ForecastClient::from_config(&config)?;
        let state = PanelState::new(config)?;
        Ok(Self {
            client,
            state: Arc::new(Mutex::new(state)),
        })
    }

    /// A panel against the public Open-Meteo endpoint with the default
    /// [`PanelConfig`].
    pub fn default_config() -> Result<Self, PanelError> {
        Self::new(PanelConfig::default())
    }

    /// Runs a callback hook (field edit, toggle, paging) against the state.
    pub async fn update<R>(&self, f: impl FnOnce(&mut PanelState) -> R) -> R {
        let mut state = self.state.lock().await;
        f(&mut state)
    }

    /// Snapshot of everything there is to draw right now.
    pub async fn view(&self) -> PanelView {
        self.state.lock().await.view()
    }

    /// Validates the input, fetches once and applies the result.
    ///
    /// # Errors
    ///
    /// - [`PanelError::Validation`] if the input is incomplete; nothing is sent.
    /// - [`PanelError::Fetch`] if the request failed and it was still the latest
    ///   one. The panel is then in `Failed` state.
    ///
    /// - [`PanelError::FetchTask`] if the fetch task panicked.
    ///
    /// A failure of a superseded request is only logged and reported as
    /// `Ok(FetchOutcome::Superseded)`.
    ///
    /// Once the input is accepted the fetch is completed on a spawned task,
    /// whether or not this future is still being polled.
    pub async fn submit(&self) -> Result<FetchOutcome, PanelError> {
        let ticket = {
            let mut state = self.state.lock().await;
            state.begin_fetch()?
        };

        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            let result = client.fetch_weather(ticket.query()).await;
            let mut state = state.lock().await;
            state.complete_fetch(&ticket, result)
        });

        Ok(task.await.map_err(PanelError::FetchTask)??)
    }
}
