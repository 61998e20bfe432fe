use std::path::PathBuf;
use thiserror::Error;

/// Stage of a run at which an error surfaced, used for operator diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunStage {
    /// Reading the optional configuration file
    Configuration,
    /// Downloading the schedule document
    Fetch,
    /// Decoding the schedule document
    Decode,
    /// Writing the catalog file
    Write,
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl RunStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            RunStage::Configuration => "Configuration",
            RunStage::Fetch => "Schedule Fetch",
            RunStage::Decode => "Schedule Decode",
            RunStage::Write => "Catalog Write",
        }
    }

    /// Get actionable suggestion for fixing the issue at this stage
    pub fn suggestion(&self) -> &'static str {
        match self {
            RunStage::Configuration => "Check the config file path and that it contains a JSON object.",
            RunStage::Fetch => "The schedule host is unreachable or slow. The previous catalog was left untouched; try again later.",
            RunStage::Decode => "The schedule host returned something that is not a schedule document. Try again later.",
            RunStage::Write => "Check that the output directory is writable.",
        }
    }
}

/// Errors that end a run
#[derive(Debug, Error, Clone)]
pub enum LiveError {
    /// Transport failure, including the request timeout
    #[error("Request to {0} failed: {1}")]
    Network(String, String),

    /// Schedule host answered with a non-2xx status
    #[error("Server returned {0} for {1}")]
    ServerError(u16, String),

    /// Body is not a JSON object shaped like a schedule
    #[error("Failed to parse schedule: {0}")]
    ParseError(String),

    /// Config file unreadable or invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Catalog file could not be written
    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, String),
}

impl LiveError {
    pub fn stage(&self) -> RunStage {
        match self {
            LiveError::Network(..) | LiveError::ServerError(..) => RunStage::Fetch,
            LiveError::ParseError(_) => RunStage::Decode,
            LiveError::Config(_) => RunStage::Configuration,
            LiveError::Write(..) => RunStage::Write,
        }
    }

    /// Get detailed diagnostic information about the error
    pub fn diagnostics(&self) -> String {
        let stage = self.stage();
        match self {
            LiveError::Network(url, source) => {
                format!("{} Error\nURL: {}\nError: {}\nSuggestion: {}", stage, url, source, stage.suggestion())
            }
            LiveError::ServerError(status, url) => {
                format!("{} Error\nURL: {}\nStatus: {}\nSuggestion: {}", stage, url, status, stage.suggestion())
            }
            LiveError::ParseError(source) | LiveError::Config(source) => {
                format!("{} Error\nError: {}\nSuggestion: {}", stage, source, stage.suggestion())
            }
            LiveError::Write(path, source) => {
                format!("{} Error\nPath: {}\nError: {}\nSuggestion: {}", stage, path.display(), source, stage.suggestion())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_mapping() {
        assert_eq!(LiveError::ServerError(404, "x".into()).stage(), RunStage::Fetch);
        assert_eq!(LiveError::ParseError("eof".into()).stage(), RunStage::Decode);
        assert_eq!(LiveError::Write(PathBuf::from("a.json"), "denied".into()).stage(), RunStage::Write);
    }

    #[test]
    fn test_diagnostics_mentions_status() {
        let text = LiveError::ServerError(503, "https://host/schedule.json".into()).diagnostics();
        assert!(text.contains("503"));
        assert!(text.contains("https://host/schedule.json"));
        assert!(text.starts_with("Schedule Fetch Error"));
    }
}
