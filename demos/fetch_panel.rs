//! demos/fetch_panel.rs
//!
//! Fills the panel form, fetches a week of daily temperatures for Berlin from
//! Open-Meteo and prints the chart series and the first table page.
//!
//! To run this demo:
//! RUST_LOG=info cargo run --example fetch_panel

use chrono::{Duration, Local};
use std::error::Error;
use weather_panel::{Measurement, PanelStatus, WeatherPanel};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let panel = WeatherPanel::default_config()?;
    let today = Local::now();

    panel
        .update(|state| {
            state.set_latitude("52.52");
            state.set_longitude("13.41");
            state.set_start_date(today - Duration::days(6));
            state.set_end_date(today);
            state.toggle_measurement(Measurement::ApparentTempMean);
            state.set_page_size(20)
        })
        .await?;

    if let Err(e) = panel.submit().await {
        eprintln!("Error: {}", e);
    }

    let view = panel.view().await;
    if view.status != PanelStatus::Loaded {
        println!("{}", view.error.unwrap_or_default());
        return Ok(());
    }

    println!("Chart ({} days):", view.chart.labels.len());
    for dataset in &view.chart.datasets {
        let values: Vec<String> = dataset
            .values
            .iter()
            .map(|v| v.map_or("-".to_string(), |v| format!("{v:.1}")))
            .collect();
        println!("  {} [{}]: {}", dataset.label, dataset.border_color, values.join(", "));
    }

    println!();
    println!("{}", view.table_headers.join(" | "));
    for row in &view.table_rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|v| v.map_or("-".to_string(), |v| format!("{v:.1}")))
            .collect();
        println!("{} | {}", row.date, cells.join(" | "));
    }
    println!("page {} of {}", view.page_index, view.total_pages);

    Ok(())
}
