use chrono::NaiveDate;
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::api::{RawEvent, RawSchedule};
use crate::catalog::{build_event_id, format_event_start, NormalizedEvent};
use crate::category::{has_tennis_tour, map_category, Competition};
use crate::channels::resolve_streams;
use crate::classifier::{clean_category_label, CategoryRule, Classification};
use crate::config::PipelineConfig;
use crate::logo::resolve_logo;
use crate::parser::{event_datetime, extract_event_title};
use crate::timezone::TimeConverter;

/// Everything a run needs besides the schedule itself
pub struct PipelineContext<'a> {
    pub config: &'a PipelineConfig,
    pub converter: &'a dyn TimeConverter,
    /// Source of default date fields
    pub today: NaiveDate,
}

/// Why an event did not make it into the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotAnEvent,
    BlankTitle,
    CategoryNotWhitelisted,
    NoInlineCompetition,
    TennisWithoutTour,
    UnknownMotorClass,
    NoStreams,
}

impl SkipReason {
    pub fn description(&self) -> &'static str {
        match self {
            SkipReason::NotAnEvent => "record is not an object",
            SkipReason::BlankTitle => "blank event text",
            SkipReason::CategoryNotWhitelisted => "category not whitelisted",
            SkipReason::NoInlineCompetition => "soccer event without a whitelisted competition",
            SkipReason::TennisWithoutTour => "tennis event without ATP/WTA",
            SkipReason::UnknownMotorClass => "motor sports event that is neither F1 nor MotoGP",
            SkipReason::NoStreams => "no usable channel left",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    Included(NormalizedEvent),
    Skipped(SkipReason),
}

/// Decision taken for one raw record, with its location in the schedule
#[derive(Debug, Clone, PartialEq)]
pub struct EventDecision {
    pub day_label: String,
    pub category_label: String,
    pub text: Option<String>,
    pub outcome: EventOutcome,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleEvaluation {
    pub decisions: Vec<EventDecision>,
    /// Cleaned category label -> raw event count, summed over days
    pub category_tally: BTreeMap<String, usize>,
}

/// Result of a run, ready for writing and reporting
#[derive(Debug, Clone, Default)]
pub struct CatalogReport {
    pub events: Vec<NormalizedEvent>,
    pub total_events: usize,
    pub category_tally: BTreeMap<String, usize>,
}

impl CatalogReport {
    pub fn included(&self) -> usize {
        self.events.len()
    }

    /// Operator-facing summary: counts, then the sorted category listing
    pub fn summary_lines(&self, output: &Path) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Created {} dynamic events (out of {} examined) -> {}",
                self.included(),
                self.total_events,
                output.display()
            ),
            "Categories seen (after cleaning):".to_string(),
        ];
        for (label, count) in &self.category_tally {
            lines.push(format!(" - {}: {} raw events", label, count));
        }
        lines
    }
}

/// Runs one event through the filter and normalizer
pub fn normalize_event(
    ctx: &PipelineContext,
    day_label: &str,
    rule: &CategoryRule,
    raw: &RawEvent,
) -> EventOutcome {
    let Some(text) = raw.text() else {
        return EventOutcome::Skipped(SkipReason::BlankTitle);
    };

    let effective = match rule.classify(text) {
        Classification::Effective(label) => label,
        Classification::NotWhitelisted => {
            return EventOutcome::Skipped(SkipReason::CategoryNotWhitelisted)
        }
        Classification::NoInlineCompetition => {
            return EventOutcome::Skipped(SkipReason::NoInlineCompetition)
        }
    };
    let Some(competition) = Competition::from_label(&effective) else {
        return EventOutcome::Skipped(SkipReason::CategoryNotWhitelisted);
    };

    if competition == Competition::Tennis && !has_tennis_tour(text) {
        return EventOutcome::Skipped(SkipReason::TennisWithoutTour);
    }
    let Some(category) = map_category(competition, text) else {
        return EventOutcome::Skipped(SkipReason::UnknownMotorClass);
    };

    let naive_start = event_datetime(day_label, raw.time.as_deref(), ctx.today);
    let start = ctx.converter.to_utc(naive_start);
    let title = extract_event_title(text);

    let streams = resolve_streams(ctx.config, &raw.channels, &title, &effective);
    if streams.is_empty() {
        return EventOutcome::Skipped(SkipReason::NoStreams);
    }

    EventOutcome::Included(NormalizedEvent {
        id: build_event_id(&title, start),
        logo: resolve_logo(ctx.config, competition, text, &title),
        description: format!("{} {}", effective, ctx.converter.display(start)),
        name: title,
        streams,
        category,
        event_start: format_event_start(start),
    })
}

fn evaluate_record(ctx: &PipelineContext, day_label: &str, rule: &CategoryRule, record: &Value) -> (Option<String>, EventOutcome) {
    match RawEvent::from_value(record) {
        Some(raw) => {
            let outcome = normalize_event(ctx, day_label, rule, &raw);
            (raw.text().map(str::to_string), outcome)
        }
        None => (None, EventOutcome::Skipped(SkipReason::NotAnEvent)),
    }
}

/// Walks the schedule in document order (day, category, event) and records every decision
pub fn evaluate_schedule(schedule: &RawSchedule, ctx: &PipelineContext) -> ScheduleEvaluation {
    let mut evaluation = ScheduleEvaluation::default();

    for day in schedule.days() {
        if !day.is_well_formed() {
            debug!("Skipping day '{}': not an object", day.label);
            continue;
        }
        for category in day.categories() {
            let label = clean_category_label(category.raw_label);
            *evaluation.category_tally.entry(label.clone()).or_insert(0) += category.event_count();

            let Some(records) = category.events else {
                continue;
            };
            let rule = CategoryRule::for_label(&label);
            for record in records {
                let (text, outcome) = evaluate_record(ctx, day.label, &rule, record);
                if let EventOutcome::Skipped(reason) = &outcome {
                    debug!("Skipped [{}] {:?}: {}", label, text.as_deref().unwrap_or(""), reason.description());
                }
                evaluation.decisions.push(EventDecision {
                    day_label: day.label.to_string(),
                    category_label: label.clone(),
                    text,
                    outcome,
                });
            }
        }
    }

    evaluation
}

/// Filters and normalizes a whole schedule, preserving traversal order
pub fn process_schedule(schedule: &RawSchedule, ctx: &PipelineContext) -> CatalogReport {
    let evaluation = evaluate_schedule(schedule, ctx);
    let total_events = evaluation.decisions.len();
    let events = evaluation
        .decisions
        .into_iter()
        .filter_map(|d| match d.outcome {
            EventOutcome::Included(event) => Some(event),
            EventOutcome::Skipped(_) => None,
        })
        .collect();

    CatalogReport {
        events,
        total_events,
        category_tally: evaluation.category_tally,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::OutputCategory;
    use crate::timezone::{ChronoTzConverter, UtcFallback};
    use serde_json::json;

    const DAY: &str = "Monday 1st January 2024 - Schedule Time UK GMT";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn run(event: Value, category: &str) -> EventOutcome {
        let config = PipelineConfig::default();
        let converter = ChronoTzConverter::uk_to_rome();
        let ctx = PipelineContext { config: &config, converter: &converter, today: today() };
        let raw = RawEvent::from_value(&event).unwrap();
        normalize_event(&ctx, DAY, &CategoryRule::for_label(category), &raw)
    }

    fn included(outcome: EventOutcome) -> NormalizedEvent {
        match outcome {
            EventOutcome::Included(event) => event,
            EventOutcome::Skipped(reason) => panic!("unexpected skip: {:?}", reason),
        }
    }

    #[test]
    fn test_serie_a_event() {
        let event = included(run(
            json!({"event": "AS Roma vs FC Internazionale", "time": "20:00",
                   "channels": [{"channel_id": "877", "channel_name": "DAZN 1"}]}),
            "Italy - Serie A",
        ));
        assert_eq!(event.name, "AS Roma vs FC Internazionale");
        assert_eq!(event.id, "as-roma-vs-fc-internazionale-20240101");
        assert_eq!(event.category, OutputCategory::SerieA);
        assert_eq!(event.event_start, "2024-01-01T20:00:00Z");
        assert_eq!(event.description, "Italy - Serie A 01/01 21:00");
        assert_eq!(
            event.logo.as_deref(),
            Some("https://raw.githubusercontent.com/qwertyuiop8899/logo/main/Roma_vs_Inter.png")
        );
    }

    #[test]
    fn test_time_prefixed_title_keeps_text_after_first_colon() {
        let event = included(run(
            json!({"event": "20:00: AS Roma vs FC Internazionale", "time": "20:00",
                   "channels": [{"channel_id": "877", "channel_name": "DAZN 1"}]}),
            "Italy - Serie A",
        ));
        assert_eq!(event.name, "00: AS Roma vs FC Internazionale");
        assert_eq!(event.id, "00-as-roma-vs-fc-internazionale-20240101");
        assert_eq!(
            event.logo.as_deref(),
            Some("https://raw.githubusercontent.com/qwertyuiop8899/logo/main/00:_As_Roma_vs_Inter.png")
        );
    }

    #[test]
    fn test_tennis_gate() {
        let channels = json!([{"channel_id": 1, "channel_name": "SuperTennis"}]);
        assert_eq!(
            run(json!({"event": "Roland Garros Qualifying", "time": "10:00", "channels": channels}), "Tennis"),
            EventOutcome::Skipped(SkipReason::TennisWithoutTour)
        );
        let event = included(run(
            json!({"event": "ATP Rome: Sinner vs Ruud", "time": "10:00", "channels": channels}),
            "Tennis",
        ));
        assert_eq!(event.category, OutputCategory::Tennis);
    }

    #[test]
    fn test_motor_sports_neither_series() {
        assert_eq!(
            run(json!({"event": "WRC Rally Italia", "time": "10:00", "channels": [{"channel_id": 1}]}), "motor sports"),
            EventOutcome::Skipped(SkipReason::UnknownMotorClass)
        );
    }

    #[test]
    fn test_youth_channel_drops_event() {
        assert_eq!(
            run(
                json!({"event": "Juventus vs Torino", "time": "15:00",
                       "channels": [{"channel_id": 9, "channel_name": "Youth League TV"}]}),
                "Italy - Serie A"
            ),
            EventOutcome::Skipped(SkipReason::NoStreams)
        );
    }

    #[test]
    fn test_blank_and_excluded() {
        assert_eq!(run(json!({"event": "  "}), "Tennis"), EventOutcome::Skipped(SkipReason::BlankTitle));
        assert_eq!(
            run(json!({"event": "NBA: Lakers vs Celtics", "channels": [{"channel_id": 1}]}), "Basketball"),
            EventOutcome::Skipped(SkipReason::CategoryNotWhitelisted)
        );
    }

    #[test]
    fn test_fallback_converter_description() {
        let config = PipelineConfig::default();
        let ctx = PipelineContext { config: &config, converter: &UtcFallback, today: today() };
        let raw = RawEvent::from_value(&json!({
            "event": "MotoGP: Mugello Race", "time": "13:00",
            "channels": [{"channel_id": 5, "channel_name": "Sky Sport MotoGP"}]
        }))
        .unwrap();
        let event = included(normalize_event(&ctx, "Sunday 2nd June 2024", &CategoryRule::for_label("motorsports"), &raw));
        assert_eq!(event.event_start, "2024-06-02T13:00:00Z");
        assert_eq!(event.description, "motorsports 02/06 13:00 UTC");
        assert_eq!(event.category, OutputCategory::MotoGp);
        assert!(event.logo.unwrap().ends_with("/MotoGP.png"));
    }

    #[test]
    fn test_tally_and_counts() {
        let schedule = RawSchedule::from_value(json!({
            DAY: {
                "Tennis</span>": [
                    {"event": "WTA Madrid", "time": "11:00", "channels": [{"channel_id": 2}]},
                    {"event": "Exhibition", "time": "12:00", "channels": [{"channel_id": 2}]}
                ],
                "Darts": [{"event": "PDC", "time": "19:00", "channels": [{"channel_id": 3}]}],
                "Cricket": "broken"
            },
            "Tuesday 2nd January 2024 - Schedule Time UK GMT": {
                "Tennis": ["not an event"]
            }
        }))
        .unwrap();
        let config = PipelineConfig::default();
        let converter = ChronoTzConverter::uk_to_rome();
        let ctx = PipelineContext { config: &config, converter: &converter, today: today() };
        let report = process_schedule(&schedule, &ctx);
        assert_eq!(report.total_events, 4);
        assert_eq!(report.included(), 1);
        assert_eq!(report.category_tally.get("Tennis"), Some(&3));
        assert_eq!(report.category_tally.get("Darts"), Some(&1));
        assert_eq!(report.category_tally.get("Cricket"), Some(&0));

        let lines = report.summary_lines(Path::new("config/dynamic_channels.json"));
        assert_eq!(lines[0], "Created 1 dynamic events (out of 4 examined) -> config/dynamic_channels.json");
        assert_eq!(lines[2], " - Cricket: 0 raw events");
    }
}
