//! One run: fetch, filter, write.

use chrono::{NaiveDate, Utc};
use log::{error, info};

use crate::api::{RawSchedule, ScheduleClient};
use crate::catalog::write_catalog;
use crate::config::PipelineConfig;
use crate::errors::LiveError;
use crate::pipeline::{process_schedule, CatalogReport, PipelineContext};
use crate::timezone::converter_for;

/// Filters a schedule that is already in memory
pub fn build_catalog(schedule: &RawSchedule, config: &PipelineConfig, today: NaiveDate) -> CatalogReport {
    let converter = converter_for(config);
    let ctx = PipelineContext {
        config,
        converter: &*converter,
        today,
    };
    process_schedule(schedule, &ctx)
}

/// Fetches the schedule, builds the catalog and writes it.
/// A fetch or decode failure returns before anything is written, so the previous catalog stays in place.
pub async fn run(config: &PipelineConfig) -> Result<CatalogReport, LiveError> {
    let client = ScheduleClient::new(config);
    let schedule = client.fetch_schedule().await?;

    let report = build_catalog(&schedule, config, Utc::now().date_naive());
    info!(
        "{} of {} events passed the filters",
        report.included(),
        report.total_events
    );

    write_catalog(&config.output_file, &report.events)?;
    Ok(report)
}

/// Top-level entry: never fails, every error ends as a log line
pub async fn run_and_report(config: &PipelineConfig) -> Option<CatalogReport> {
    match run(config).await {
        Ok(report) => {
            for line in report.summary_lines(&config.output_file) {
                println!("{}", line);
            }
            Some(report)
        }
        Err(e) => {
            error!("{}", e);
            error!("{}", e.diagnostics());
            None
        }
    }
}
