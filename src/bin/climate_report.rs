//! Summarises the climate projections of every registered location and prints
//! the yearly tables. Built with `--features plotting` it also opens one chart
//! per variable.
//!
//! Set RUST_LOG=info (or debug) to follow the fetches.

use meteo_climate::{ClimateClient, ClimateError};

#[tokio::main]
async fn main() -> Result<(), ClimateError> {
    env_logger::init();

    let client = ClimateClient::new()?;
    let report = client.yearly_all().await;

    for summary in &report.summaries {
        println!("{}:\n{}", summary.name, summary.yearly.frame);
    }
    for failure in &report.failures {
        eprintln!("{}: {}", failure.name, failure.error);
    }

    if report.summaries.is_empty() {
        return Err(ClimateError::NoSummaries(report.failures.len()));
    }

    #[cfg(feature = "plotting")]
    meteo_climate::plot_summaries(&report.summaries).map_err(ClimateError::Render)?;

    Ok(())
}
