use once_cell::sync::Lazy;
use regex::Regex;

use crate::category::{detect_motor_class, Competition};
use crate::config::PipelineConfig;
use crate::sports::matchup_logo_file;

static SALERNITANA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)salernitana").unwrap());

/// Logo file name for an event, or None. A missing logo never drops the event.
///
/// `raw_text` is the event text as published (token tests), `title` the
/// extracted title (team split).
pub fn logo_file(competition: Competition, raw_text: &str, title: &str) -> Option<String> {
    match competition {
        Competition::Cup(cup) => Some(cup.logo_file().to_string()),
        Competition::MotorSports => detect_motor_class(raw_text).map(|c| c.logo_file().to_string()),
        Competition::Tennis => Some("Tennis.png".to_string()),
        Competition::SerieA | Competition::SerieB => matchup_logo_file(title),
        Competition::SerieC => SALERNITANA_RE
            .is_match(raw_text)
            .then(|| "Salernitana.png".to_string()),
    }
}

/// Absolute logo URL under the configured logo base
pub fn resolve_logo(
    config: &PipelineConfig,
    competition: Competition,
    raw_text: &str,
    title: &str,
) -> Option<String> {
    logo_file(competition, raw_text, title).map(|file| config.logo_url(&file))
}
