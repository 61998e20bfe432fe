//! Wall-clock to UTC conversion.
//!
//! The feed publishes UK wall-clock times and the description shows Italian
//! wall-clock times. When zone data cannot be resolved the pipeline keeps
//! running with [`UtcFallback`], which takes every naive time as UTC. That is
//! a known approximation: it shifts events by the UK offset (0 or 1 hour).

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::config::PipelineConfig;

/// Capability used by the pipeline for every time-zone decision
pub trait TimeConverter {
    /// Interprets a naive feed time in the source zone and returns the UTC instant
    fn to_utc(&self, naive: NaiveDateTime) -> DateTime<Utc>;

    /// Human-readable local time for descriptions
    fn display(&self, instant: DateTime<Utc>) -> String;
}

/// Zone-aware conversion backed by chrono-tz
#[derive(Debug, Clone, Copy)]
pub struct ChronoTzConverter {
    source: Tz,
    display: Tz,
}

impl ChronoTzConverter {
    pub fn new(source: Tz, display: Tz) -> Self {
        Self { source, display }
    }

    /// UK feed, Italian audience
    pub fn uk_to_rome() -> Self {
        Self::new(chrono_tz::Europe::London, chrono_tz::Europe::Rome)
    }
}

impl TimeConverter for ChronoTzConverter {
    fn to_utc(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        match self.source.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            // Autumn fold: take the standard-time reading, which is the later instant
            LocalResult::Ambiguous(_, latest) => latest.with_timezone(&Utc),
            // Spring gap: apply the offset in force just before the gap
            LocalResult::None => {
                let before = naive - Duration::hours(1);
                match self.source.from_local_datetime(&before).earliest() {
                    Some(dt) => (dt + Duration::hours(1)).with_timezone(&Utc),
                    None => Utc.from_utc_datetime(&naive),
                }
            }
        }
    }

    fn display(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.display).format("%d/%m %H:%M").to_string()
    }
}

/// No-op strategy: naive times are already UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcFallback;

impl TimeConverter for UtcFallback {
    fn to_utc(&self, naive: NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&naive)
    }

    fn display(&self, instant: DateTime<Utc>) -> String {
        instant.format("%d/%m %H:%M UTC").to_string()
    }
}

/// Picks the converter for a run. Unknown zone names degrade to [`UtcFallback`].
pub fn converter_for(config: &PipelineConfig) -> Box<dyn TimeConverter> {
    if !config.timezone_support {
        warn!("Time zone support disabled: feed times are treated as UTC");
        return Box::new(UtcFallback);
    }
    let source = config.source_timezone.parse::<Tz>();
    let display = config.display_timezone.parse::<Tz>();
    match (source, display) {
        (Ok(source), Ok(display)) => Box::new(ChronoTzConverter::new(source, display)),
        _ => {
            warn!(
                "Unknown time zone ({} / {}): feed times are treated as UTC",
                config.source_timezone, config.display_timezone
            );
            Box::new(UtcFallback)
        }
    }
}
