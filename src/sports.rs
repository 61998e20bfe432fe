use once_cell::sync::Lazy;
use regex::Regex;

static CLUB_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:A\.S\.|AS|A\.C\.|AC|SSC|S\.S\.C\.|SS|U\.S\.|US|U\.C\.|UC|F\.C\.|FC)\s+").unwrap()
});

static MATCH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bvs\b| - ").unwrap());

/// Words dropped from club names
const CLEAN_WORDS: &[&str] = &["calcio"];

/// Known club spellings -> canonical name
const TEAM_ALIASES: &[(&str, &str)] = &[
    ("internazionale", "inter"),
    ("inter", "inter"),
    ("juventus", "juventus"),
    ("as roma", "roma"),
    ("a.s. roma", "roma"),
    ("roma", "roma"),
    ("ssc napoli", "napoli"),
    ("s.s.c. napoli", "napoli"),
    ("napoli", "napoli"),
    ("ss lazio", "lazio"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

/// Splits "Team A vs Team B" (or "Team A - Team B"). Exactly two non-empty sides are required.
pub fn extract_teams(title: &str) -> Option<Matchup> {
    let parts: Vec<&str> = MATCH_SPLIT_RE.split(title).map(str::trim).collect();
    match parts.as_slice() {
        [home, away] if !home.is_empty() && !away.is_empty() => Some(Matchup {
            home: home.to_string(),
            away: away.to_string(),
        }),
        _ => None,
    }
}

/// Removes one club-form prefix (AS, SSC, F.C., ...) and the word "calcio"
pub fn strip_prefixes(team: &str) -> String {
    let stripped = CLUB_PREFIX_RE.replace(team.trim(), "");
    stripped
        .split_whitespace()
        .filter(|w| !CLEAN_WORDS.contains(&w.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Canonical lower-case team name
pub fn normalize_team(team: &str) -> String {
    let key = strip_prefixes(team).to_lowercase();
    TEAM_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(key)
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_is_letter = false;
    for c in name.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

/// "Roma_vs_Inter.png" style file name for a match title
pub fn matchup_logo_file(title: &str) -> Option<String> {
    let matchup = extract_teams(title)?;
    let home = title_case(&normalize_team(&matchup.home));
    let away = title_case(&normalize_team(&matchup.away));
    Some(format!("{}_vs_{}.png", home, away).replace(' ', "_"))
}
