use anyhow::Context;
use chrono::Utc;

use live_events_lib::api::RawSchedule;
use live_events_lib::config::PipelineConfig;
use live_events_lib::pipeline::{evaluate_schedule, EventOutcome, PipelineContext};
use live_events_lib::timezone::converter_for;

fn main() -> Result<(), anyhow::Error> {
    let path = std::env::args()
        .nth(1)
        .context("usage: inspect_schedule <schedule.json>")?;
    let body = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let schedule = RawSchedule::from_json_str(&body).with_context(|| format!("decoding {}", path))?;

    let config = PipelineConfig::default();
    let converter = converter_for(&config);
    let ctx = PipelineContext {
        config: &config,
        converter: &*converter,
        today: Utc::now().date_naive(),
    };

    let evaluation = evaluate_schedule(&schedule, &ctx);
    let mut current_day = "";
    for decision in &evaluation.decisions {
        if decision.day_label != current_day {
            current_day = &decision.day_label;
            println!("== {}", current_day);
        }
        let text = decision.text.as_deref().unwrap_or("<no text>");
        match &decision.outcome {
            EventOutcome::Included(event) => println!(
                "  + [{}] {} -> {} {} ({} streams)",
                decision.category_label,
                text,
                event.category.as_str(),
                event.event_start,
                event.streams.len()
            ),
            EventOutcome::Skipped(reason) => println!(
                "  - [{}] {}: {}",
                decision.category_label,
                text,
                reason.description()
            ),
        }
    }

    let included = evaluation
        .decisions
        .iter()
        .filter(|d| matches!(d.outcome, EventOutcome::Included(_)))
        .count();
    println!("{} of {} events would be included", included, evaluation.decisions.len());
    Ok(())
}
