use serde::{Deserialize, Serialize};

use crate::api::RawChannel;
use crate::config::PipelineConfig;

/// Case-insensitive substrings that disqualify a channel
pub const EXCLUDE_KEYWORDS: &[&str] = &["college", "youth"];

/// One playable stream of an output event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub url: String,
    pub title: String,
}

pub fn is_excluded_text(text: &str) -> bool {
    let lower = text.to_lowercase();
    EXCLUDE_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Builds the stream list for an event, keeping feed order.
/// A channel is dropped when it has no usable id, or when its name, the
/// event title or the category label carries an excluded keyword.
pub fn resolve_streams(
    config: &PipelineConfig,
    channels: &[RawChannel],
    title: &str,
    category_label: &str,
) -> Vec<StreamEntry> {
    channels
        .iter()
        .filter_map(|channel| {
            let id = channel.channel_id.to_string_value()?;
            let name = channel.display_name();
            if is_excluded_text(&format!("{} {} {}", name, title, category_label)) {
                return None;
            }
            Some(StreamEntry {
                url: config.stream_url(&id),
                title: name,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flex_id::ChannelId;

    fn channel(id: ChannelId, name: Option<&str>) -> RawChannel {
        RawChannel {
            channel_id: id,
            channel_name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_streams_keep_order_and_fallback_name() {
        let config = PipelineConfig::default();
        let streams = resolve_streams(
            &config,
            &[
                channel(ChannelId::Number(877), Some("Sky Sport Uno")),
                channel(ChannelId::String("301".into()), None),
            ],
            "Roma vs Lazio",
            "Italy - Serie A",
        );
        assert_eq!(streams.len(), 2);
        assert_eq!(streams[0].url, "https://thedaddy.click/stream/stream-877.php");
        assert_eq!(streams[0].title, "Sky Sport Uno");
        assert_eq!(streams[1].title, "CH-301");
    }

    #[test]
    fn test_excluded_channel_dropped_alone() {
        let config = PipelineConfig::default();
        let streams = resolve_streams(
            &config,
            &[
                channel(ChannelId::Number(1), Some("Rai Sport YOUTH")),
                channel(ChannelId::Number(2), Some("DAZN 1")),
            ],
            "Roma vs Lazio",
            "Italy - Serie A",
        );
        assert_eq!(streams.len(), 1);
        assert_eq!(streams[0].title, "DAZN 1");
    }

    #[test]
    fn test_title_keyword_drops_every_channel() {
        let config = PipelineConfig::default();
        let streams = resolve_streams(
            &config,
            &[channel(ChannelId::Number(1), Some("DAZN 1"))],
            "College Cup: Roma vs Lazio",
            "Coppa Italia",
        );
        assert!(streams.is_empty());
    }

    #[test]
    fn test_unusable_ids_skipped() {
        let config = PipelineConfig::default();
        let streams = resolve_streams(
            &config,
            &[
                channel(ChannelId::Null, Some("No Id")),
                channel(ChannelId::Number(0), Some("Zero")),
            ],
            "Roma vs Lazio",
            "Italy - Serie A",
        );
        assert!(streams.is_empty());
    }
}
