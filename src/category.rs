use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category values understood by the downstream add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputCategory {
    SerieA,
    SerieB,
    SerieC,
    Coppe,
    Tennis,
    F1,
    MotoGp,
}

impl OutputCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputCategory::SerieA => "seriea",
            OutputCategory::SerieB => "serieb",
            OutputCategory::SerieC => "seriec",
            OutputCategory::Coppe => "coppe",
            OutputCategory::Tennis => "tennis",
            OutputCategory::F1 => "f1",
            OutputCategory::MotoGp => "motogp",
        }
    }
}

/// Cup competitions sharing the `coppe` category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cup {
    ChampionsLeague,
    EuropaLeague,
    ConferenceLeague,
    CoppaItalia,
}

impl Cup {
    pub fn logo_file(&self) -> &'static str {
        match self {
            Cup::ChampionsLeague => "UEFA_Champions_League.png",
            Cup::EuropaLeague => "UEFA_Europa_League.png",
            Cup::ConferenceLeague => "Conference_League.png",
            Cup::CoppaItalia => "Coppa_Italia.png",
        }
    }
}

/// What an effective category label stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Competition {
    SerieA,
    SerieB,
    SerieC,
    Cup(Cup),
    Tennis,
    MotorSports,
}

/// Whitelisted labels, matched exactly
pub const COMPETITION_LABELS: &[(&str, Competition)] = &[
    ("Italy - Serie A", Competition::SerieA),
    ("Italy - Serie B", Competition::SerieB),
    ("Italy - Serie C", Competition::SerieC),
    ("UEFA Champions League", Competition::Cup(Cup::ChampionsLeague)),
    ("UEFA Europa League", Competition::Cup(Cup::EuropaLeague)),
    ("Conference League", Competition::Cup(Cup::ConferenceLeague)),
    ("Coppa Italia", Competition::Cup(Cup::CoppaItalia)),
    ("Tennis", Competition::Tennis),
    ("motor sports", Competition::MotorSports),
    ("motorsports", Competition::MotorSports),
];

impl Competition {
    pub fn from_label(label: &str) -> Option<Competition> {
        COMPETITION_LABELS
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, competition)| *competition)
    }
}

/// Motor racing series recognised in event titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorClass {
    MotoGp,
    F1,
}

impl MotorClass {
    pub fn category(&self) -> OutputCategory {
        match self {
            MotorClass::MotoGp => OutputCategory::MotoGp,
            MotorClass::F1 => OutputCategory::F1,
        }
    }

    pub fn logo_file(&self) -> &'static str {
        match self {
            MotorClass::MotoGp => "MotoGP.png",
            MotorClass::F1 => "F1.png",
        }
    }
}

// Checked in order; a title naming both series is MotoGP.
static MOTOR_TOKENS: Lazy<Vec<(Regex, MotorClass)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)\bmotogp\b").unwrap(), MotorClass::MotoGp),
        (Regex::new(r"(?i)\b(?:f1|formula 1)\b").unwrap(), MotorClass::F1),
    ]
});

static TENNIS_TOUR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:ATP|WTA)\b").unwrap());

pub fn detect_motor_class(text: &str) -> Option<MotorClass> {
    MOTOR_TOKENS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, class)| *class)
}

pub fn has_tennis_tour(text: &str) -> bool {
    TENNIS_TOUR_RE.is_match(text)
}

/// Output category for an event; None when a motor-sports title names no known series
pub fn map_category(competition: Competition, text: &str) -> Option<OutputCategory> {
    match competition {
        Competition::SerieA => Some(OutputCategory::SerieA),
        Competition::SerieB => Some(OutputCategory::SerieB),
        Competition::SerieC => Some(OutputCategory::SerieC),
        Competition::Cup(_) => Some(OutputCategory::Coppe),
        Competition::Tennis => Some(OutputCategory::Tennis),
        Competition::MotorSports => detect_motor_class(text).map(|c| c.category()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(Competition::from_label("Italy - Serie A"), Some(Competition::SerieA));
        assert_eq!(Competition::from_label("motorsports"), Some(Competition::MotorSports));
        assert_eq!(Competition::from_label("tennis"), None);
        assert_eq!(Competition::from_label("Italy - Serie A "), None);
        assert_eq!(Competition::from_label("Soccer"), None);
    }

    #[test]
    fn test_motor_tokens() {
        assert_eq!(detect_motor_class("F1 Grand Prix of Monaco"), Some(MotorClass::F1));
        assert_eq!(detect_motor_class("Formula 1: Practice 2"), Some(MotorClass::F1));
        assert_eq!(detect_motor_class("motogp - Mugello"), Some(MotorClass::MotoGp));
        assert_eq!(detect_motor_class("F1 and MotoGP weekend"), Some(MotorClass::MotoGp));
        assert_eq!(detect_motor_class("F12 Championship"), None);
        assert_eq!(detect_motor_class("NASCAR Cup Series"), None);
    }

    #[test]
    fn test_tennis_tour_is_whole_word() {
        assert!(has_tennis_tour("ATP Rome: Sinner vs Ruud"));
        assert!(has_tennis_tour("wta Madrid"));
        assert!(!has_tennis_tour("ATPTour exhibition"));
        assert!(!has_tennis_tour("Davis Cup"));
    }

    #[test]
    fn test_map_category() {
        assert_eq!(map_category(Competition::Cup(Cup::CoppaItalia), "x"), Some(OutputCategory::Coppe));
        assert_eq!(map_category(Competition::MotorSports, "Formula 1 Race"), Some(OutputCategory::F1));
        assert_eq!(map_category(Competition::MotorSports, "WRC Rally"), None);
    }

    #[test]
    fn test_output_category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OutputCategory::MotoGp).unwrap(), "\"motogp\"");
        assert_eq!(serde_json::to_string(&OutputCategory::SerieA).unwrap(), "\"seriea\"");
        assert_eq!(OutputCategory::F1.as_str(), "f1");
    }
}
