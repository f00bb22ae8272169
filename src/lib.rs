mod config;
mod error;
mod forecast;
mod input;
mod panel;
mod state;
mod types;
mod view;

pub use config::{PanelConfig, DEFAULT_FORECAST_URL, DEFAULT_PAGE_SIZES, DEFAULT_TIMEOUT};
pub use error::{PanelError, ValidationError};
pub use input::PanelInput;
pub use panel::WeatherPanel;
pub use state::{FetchOutcome, FetchTicket, PanelState, PanelStatus, PanelView, SeriesToggle};

pub use forecast::client::ForecastClient;
pub use forecast::error::FetchError;

pub use types::daily_record::{DailyRecord, WeatherSeries};
pub use types::measurement::{Measurement, Rgb};
pub use types::query::{LatLon, Query};
pub use types::selection::Selection;
pub use types::traits::any_date::AnyDate;

pub use view::chart::{build_chart_series, ChartDataset, ChartSeries};
pub use view::pagination::{paginate, total_pages, Page, Pagination};
pub use view::table::{table_headers, table_rows, TableRow};
