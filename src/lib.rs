pub mod api;
pub mod app;
pub mod catalog;
pub mod category;
pub mod channels;
pub mod classifier;
pub mod config;
pub mod errors;
pub mod flex_id;
pub mod logging;
pub mod logo;
pub mod parser;
pub mod pipeline;
pub mod sports;
pub mod timezone;

#[cfg(test)]
mod tests {
    use crate::api::RawSchedule;
    use crate::app::build_catalog;
    use crate::config::PipelineConfig;
    use chrono::NaiveDate;

    #[test]
    fn test_build_catalog_empty_schedule() {
        let schedule = RawSchedule::from_json_str("{}").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let report = build_catalog(&schedule, &PipelineConfig::default(), today);
        assert_eq!(report.total_events, 0);
        assert!(report.events.is_empty());
        assert!(report.category_tally.is_empty());
    }
}
