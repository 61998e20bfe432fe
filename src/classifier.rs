use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Labels treated as containers of mixed competitions
const SOCCER_CONTAINERS: &[&str] = &["soccer"];

// Checked in order, first match wins.
static INLINE_COMPETITIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bChampions League\b", "UEFA Champions League"),
        (r"(?i)\bEuropa League\b", "UEFA Europa League"),
        (r"(?i)\bConference League\b", "Conference League"),
        (r"(?i)\bCoppa Italia\b", "Coppa Italia"),
        (r"(?i)Italy\s*-\s*Serie A", "Italy - Serie A"),
        (r"(?i)Italy\s*-\s*Serie B", "Italy - Serie B"),
        (r"(?i)Italy\s*-\s*Serie C", "Italy - Serie C"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

/// How the events of one category label are handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRule {
    /// Generic soccer block: each event names its own competition
    Container,
    /// Whitelisted label, used as is
    Whitelisted(String),
    /// Every event of this label is out of scope
    Excluded,
}

/// Per-event result of classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Effective category label for downstream steps
    Effective(String),
    NotWhitelisted,
    NoInlineCompetition,
}

/// Drops HTML fragments the feed leaks into labels, e.g. a stray `</span>`
pub fn clean_category_label(raw: &str) -> String {
    let without_span = raw.replace("</span>", "");
    TAG_RE.replace_all(&without_span, "").trim().to_string()
}

pub fn detect_inline_competition(text: &str) -> Option<&'static str> {
    INLINE_COMPETITIONS
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, label)| *label)
}

impl CategoryRule {
    /// `label` must already be cleaned
    pub fn for_label(label: &str) -> CategoryRule {
        if SOCCER_CONTAINERS.contains(&label.to_lowercase().as_str()) {
            CategoryRule::Container
        } else if crate::category::Competition::from_label(label).is_some() {
            CategoryRule::Whitelisted(label.to_string())
        } else {
            CategoryRule::Excluded
        }
    }

    pub fn classify(&self, event_text: &str) -> Classification {
        match self {
            CategoryRule::Container => match detect_inline_competition(event_text) {
                Some(label) => Classification::Effective(label.to_string()),
                None => Classification::NoInlineCompetition,
            },
            CategoryRule::Whitelisted(label) => Classification::Effective(label.clone()),
            CategoryRule::Excluded => Classification::NotWhitelisted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_category_label() {
        assert_eq!(clean_category_label("Tennis</span>"), "Tennis");
        assert_eq!(clean_category_label("<b>Italy - Serie A</b> "), "Italy - Serie A");
        assert_eq!(clean_category_label("motor sports"), "motor sports");
    }

    #[test]
    fn test_rules_for_labels() {
        assert_eq!(CategoryRule::for_label("Soccer"), CategoryRule::Container);
        assert_eq!(CategoryRule::for_label("SOCCER"), CategoryRule::Container);
        assert_eq!(
            CategoryRule::for_label("Coppa Italia"),
            CategoryRule::Whitelisted("Coppa Italia".to_string())
        );
        assert_eq!(CategoryRule::for_label("Basketball"), CategoryRule::Excluded);
        assert_eq!(CategoryRule::for_label("Motor Sports"), CategoryRule::Excluded);
    }

    #[test]
    fn test_container_reclassifies_serie_a() {
        let rule = CategoryRule::for_label("Soccer");
        assert_eq!(
            rule.classify("Italy - Serie A: Juventus vs Napoli"),
            Classification::Effective("Italy - Serie A".to_string())
        );
        assert_eq!(
            rule.classify("Premier League: Arsenal vs Chelsea"),
            Classification::NoInlineCompetition
        );
    }

    #[test]
    fn test_inline_priority_order() {
        assert_eq!(
            detect_inline_competition("Coppa Italia / Champions League double header"),
            Some("UEFA Champions League")
        );
        assert_eq!(detect_inline_competition("italy-serie b: Bari vs Pisa"), Some("Italy - Serie B"));
        assert_eq!(detect_inline_competition("Europa Leagues"), None);
    }

    #[test]
    fn test_excluded_label_never_effective() {
        assert_eq!(CategoryRule::Excluded.classify("Italy - Serie A: Roma vs Lazio"), Classification::NotWhitelisted);
    }
}
