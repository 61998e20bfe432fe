use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

const SCHEDULE_SUFFIX: &str = " - Schedule Time UK GMT";

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

static ORDINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)(?:st|nd|rd|th)").unwrap());
static TIME_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{1,2}:\d{2}:").unwrap());

/// Date fields read from a day label. Any field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParsedDay {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl ParsedDay {
    /// Fills missing fields from `today`. An impossible date falls back to `today`.
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        let year = self.year.unwrap_or(today.year());
        let month = self.month.unwrap_or(today.month());
        let day = self.day.unwrap_or(today.day());
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
    }
}

/// Removes the schedule suffix and ordinal markers: "Monday 1st January 2024 - Schedule Time UK GMT" -> "Monday 1 January 2024"
pub fn clean_day_label(label: &str) -> String {
    let without_suffix = label.replace(SCHEDULE_SUFFIX, "");
    ORDINAL_RE.replace_all(&without_suffix, "$1").trim().to_string()
}

pub fn month_number(name: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == name).map(|i| i as u32 + 1)
}

fn positive<T: std::str::FromStr + Default + PartialOrd>(token: &str) -> Option<T> {
    token.parse::<T>().ok().filter(|v| *v > T::default())
}

/// Accepts `Weekday Month Day Year` and `Weekday Day Month Year`.
/// Month names are case-sensitive English; zero values count as missing.
pub fn parse_day_label(label: &str) -> ParsedDay {
    let cleaned = clean_day_label(label);
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    if parts.len() < 4 {
        return ParsedDay::default();
    }

    if let Some(month) = month_number(parts[1]) {
        ParsedDay {
            month: Some(month),
            day: positive(parts[2]),
            year: positive(parts[3]),
        }
    } else if let Some(month) = month_number(parts[2]) {
        ParsedDay {
            month: Some(month),
            day: positive(parts[1]),
            year: positive(parts[3]),
        }
    } else {
        ParsedDay::default()
    }
}

/// "HH:MM"; anything else, including out-of-range values, is midnight
pub fn parse_time(raw: Option<&str>) -> NaiveTime {
    raw.and_then(|t| {
        let (h, m) = t.split_once(':')?;
        if m.contains(':') {
            return None;
        }
        let hour: u32 = h.trim().parse().ok()?;
        let minute: u32 = m.trim().parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    })
    .unwrap_or(NaiveTime::default())
}

/// Naive feed timestamp for an event
pub fn event_datetime(day_label: &str, time: Option<&str>, today: NaiveDate) -> NaiveDateTime {
    let date = parse_day_label(day_label).resolve(today);
    NaiveDateTime::new(date, parse_time(time))
}

/// When the text opens with a "H:MM:" / "HH:MM:" time prefix, keeps what follows
/// the first colon: "20:00: Juventus vs Napoli" -> "00: Juventus vs Napoli".
pub fn extract_event_title(raw: &str) -> String {
    if TIME_PREFIX_RE.is_match(raw) {
        if let Some((_, rest)) = raw.split_once(':') {
            return rest.trim().to_string();
        }
    }
    raw.trim().to_string()
}
