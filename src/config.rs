use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::LiveError;

pub const DEFAULT_SCHEDULE_URL: &str =
    "https://raw.githubusercontent.com/ciccioxm3/STRTV/main/daddyliveSchedule.json";
pub const DEFAULT_OUTPUT_FILE: &str = "config/dynamic_channels.json";
pub const DEFAULT_LOGO_BASE: &str = "https://raw.githubusercontent.com/qwertyuiop8899/logo/main";
pub const DEFAULT_STREAM_TEMPLATE: &str = "https://thedaddy.click/stream/stream-{id}.php";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 25;

/// Run settings. Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    pub schedule_url: String,
    pub output_file: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub logo_base_url: String,
    /// `{id}` is replaced by the channel identifier
    pub stream_url_template: String,
    /// Zone the feed's wall-clock times are expressed in
    pub source_timezone: String,
    /// Zone used for the human-readable description
    pub display_timezone: String,
    /// When false, feed times are taken as UTC and descriptions carry a `UTC` suffix
    pub timezone_support: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            schedule_url: DEFAULT_SCHEDULE_URL.to_string(),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36".to_string(),
            logo_base_url: DEFAULT_LOGO_BASE.to_string(),
            stream_url_template: DEFAULT_STREAM_TEMPLATE.to_string(),
            source_timezone: "Europe/London".to_string(),
            display_timezone: "Europe/Rome".to_string(),
            timezone_support: true,
        }
    }
}

impl PipelineConfig {
    /// Loads settings from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, LiveError> {
        let Some(path) = path else {
            return Ok(PipelineConfig::default());
        };
        let content = fs::read_to_string(path)
            .map_err(|e| LiveError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
            .map_err(|e| LiveError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn stream_url(&self, channel_id: &str) -> String {
        self.stream_url_template.replace("{id}", channel_id)
    }

    pub fn logo_url(&self, filename: &str) -> String {
        format!("{}/{}", self.logo_base_url.trim_end_matches('/'), filename)
    }
}
