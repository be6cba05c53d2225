//! Tag vocabulary and vocabulary search.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// A categorical label from the fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Telemetry,
    Ephemeris,
    Comms,
    Payload,
    Ground,
    Ops,
    Sim,
    Json,
    Flatbuffers,
}

impl Tag {
    /// The vocabulary in declared order.
    pub const ALL: [Tag; 9] = [
        Tag::Telemetry,
        Tag::Ephemeris,
        Tag::Comms,
        Tag::Payload,
        Tag::Ground,
        Tag::Ops,
        Tag::Sim,
        Tag::Json,
        Tag::Flatbuffers,
    ];

    /// Lowercase display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Telemetry => "telemetry",
            Tag::Ephemeris => "ephemeris",
            Tag::Comms => "comms",
            Tag::Payload => "payload",
            Tag::Ground => "ground",
            Tag::Ops => "ops",
            Tag::Sim => "sim",
            Tag::Json => "json",
            Tag::Flatbuffers => "flatbuffers",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted)
            .ok_or_else(|| ShellError::UnknownTag(s.to_string()))
    }
}

/// Returns the vocabulary entries containing `query`, case-insensitively.
///
/// An empty query yields the whole vocabulary. Results always keep the
/// declared vocabulary order.
pub fn filter_tags(query: &str) -> Vec<Tag> {
    if query.is_empty() {
        return Tag::ALL.to_vec();
    }

    let needle = query.to_lowercase();
    Tag::ALL
        .into_iter()
        .filter(|tag| tag.as_str().to_lowercase().contains(&needle))
        .collect()
}
