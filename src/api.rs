use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::PipelineConfig;
use crate::errors::LiveError;
use crate::flex_id::ChannelId;

/// The schedule document: day label -> category label -> event list.
/// Keys keep document order, which fixes the traversal order of a run.
#[derive(Debug, Clone, Default)]
pub struct RawSchedule {
    days: Map<String, Value>,
}

impl RawSchedule {
    pub fn from_json_str(body: &str) -> Result<Self, LiveError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| LiveError::ParseError(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, LiveError> {
        match value {
            Value::Object(days) => Ok(Self { days }),
            other => Err(LiveError::ParseError(format!(
                "expected a JSON object of days, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = ScheduleDay<'_>> {
        self.days.iter().map(|(label, value)| ScheduleDay {
            label: label.as_str(),
            categories: value.as_object(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// One day of the schedule. `categories` is None when the day value is not an object.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleDay<'a> {
    pub label: &'a str,
    categories: Option<&'a Map<String, Value>>,
}

impl<'a> ScheduleDay<'a> {
    pub fn is_well_formed(&self) -> bool {
        self.categories.is_some()
    }

    pub fn categories(&self) -> impl Iterator<Item = ScheduleCategory<'a>> + 'a {
        self.categories
            .into_iter()
            .flat_map(|cats| cats.iter())
            .map(|(raw_label, value)| ScheduleCategory {
                raw_label: raw_label.as_str(),
                events: value.as_array(),
            })
    }
}

/// A category block. `events` is None when the feed put something other than a list there.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleCategory<'a> {
    pub raw_label: &'a str,
    pub events: Option<&'a Vec<Value>>,
}

impl ScheduleCategory<'_> {
    pub fn event_count(&self) -> usize {
        self.events.map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEvent {
    /// May embed a leading time prefix: "20:00: Team A vs Team B"
    pub event: Option<String>,
    /// "HH:MM" in the feed's zone
    pub time: Option<String>,
    pub channels: Vec<RawChannel>,
}

impl RawEvent {
    /// Reads an event record leniently. Returns None when the record is not an object.
    pub fn from_value(value: &Value) -> Option<RawEvent> {
        let obj = value.as_object()?;
        let channels = obj
            .get("channels")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(RawChannel::from_value).collect())
            .unwrap_or_default();
        Some(RawEvent {
            event: obj.get("event").and_then(Value::as_str).map(str::to_string),
            time: obj.get("time").and_then(Value::as_str).map(str::to_string),
            channels,
        })
    }

    /// The event text with surrounding whitespace removed; None when blank
    pub fn text(&self) -> Option<&str> {
        self.event.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawChannel {
    pub channel_id: ChannelId,
    pub channel_name: Option<String>,
}

impl RawChannel {
    /// Non-object entries are ignored
    pub fn from_value(value: &Value) -> Option<RawChannel> {
        let obj = value.as_object()?;
        let channel_id = obj
            .get("channel_id")
            .map(|v| serde_json::from_value::<ChannelId>(v.clone()).unwrap_or_default())
            .unwrap_or_default();
        Some(RawChannel {
            channel_id,
            channel_name: obj.get("channel_name").and_then(Value::as_str).map(str::to_string),
        })
    }

    /// Explicit name when non-empty, else `CH-<id>`
    pub fn display_name(&self) -> String {
        match self.channel_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("CH-{}", self.channel_id),
        }
    }
}

/// Downloads the schedule document
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl ScheduleClient {
    pub fn new(config: &PipelineConfig) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("HTTP client setup failed ({}), using defaults without the configured user agent", e);
                reqwest::Client::new()
            });

        Self {
            url: config.schedule_url.clone(),
            timeout,
            client,
        }
    }

    /// Single GET, no retries
    pub async fn fetch_schedule(&self) -> Result<RawSchedule, LiveError> {
        info!("Downloading schedule from {}", self.url);
        let resp = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LiveError::Network(self.url.clone(), e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LiveError::ServerError(status.as_u16(), self.url.clone()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LiveError::Network(self.url.clone(), e.to_string()))?;
        debug!("Schedule body: {} bytes", body.len());
        RawSchedule::from_json_str(&body)
    }
}
