use serde::{Deserialize, Deserializer};
use std::fmt;

/// A channel identifier as published by the schedule feed.
/// The feed mixes numbers and strings for the same field, and sometimes
/// sends null or nothing at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChannelId {
    Number(i64),
    Float(f64),
    String(String),
    Bool(bool),
    #[default]
    Null,
}

impl ChannelId {
    /// True when the identifier can be embedded in a stream URL.
    /// Zero, empty strings, false and null are all treated as absent.
    pub fn is_usable(&self) -> bool {
        match self {
            ChannelId::Number(n) => *n != 0,
            ChannelId::Float(f) => *f != 0.0,
            ChannelId::String(s) => !s.is_empty(),
            ChannelId::Bool(b) => *b,
            ChannelId::Null => false,
        }
    }

    /// Textual form used in URLs and fallback channel names
    pub fn to_string_value(&self) -> Option<String> {
        if !self.is_usable() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelId::Number(n) => write!(f, "{}", n),
            ChannelId::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{:.1}", v),
            ChannelId::Float(v) => write!(f, "{}", v),
            ChannelId::String(s) => write!(f, "{}", s),
            ChannelId::Bool(true) => write!(f, "True"),
            ChannelId::Bool(false) => write!(f, "False"),
            ChannelId::Null => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for ChannelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ChannelIdVisitor;

        impl<'de> Visitor<'de> for ChannelIdVisitor {
            type Value = ChannelId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, string, or null")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::Number(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match i64::try_from(v) {
                    Ok(n) => Ok(ChannelId::Number(n)),
                    Err(_) => Ok(ChannelId::String(v.to_string())),
                }
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::Float(v))
            }

            // Strings stay verbatim: "007" must not become 7 in the URL.
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::String(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::String(v))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::Null)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(ChannelId::Null)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(ChannelId::Null)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
                Ok(ChannelId::Null)
            }
        }

        deserializer.deserialize_any(ChannelIdVisitor)
    }
}
