//! Catalog entries and the card filter.

use serde::{Deserialize, Serialize};

use crate::tags::Tag;

/// One browsable standard, rendered as a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Card title, also used as the render key.
    pub title: String,

    /// Category tag.
    pub tag: Tag,

    /// Short description.
    pub description: String,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(title: impl Into<String>, tag: Tag, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag,
            description: description.into(),
        }
    }

    /// Whether `needle` (already lowercased) occurs in the title,
    /// description or tag label.
    fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tag.as_str().contains(needle)
    }
}

/// The fixed seed set shown on every load.
pub fn seed_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "Telemetry (v1)",
            Tag::Telemetry,
            "Canonical spacecraft telemetry frame with channels and timestamps.",
        ),
        CatalogEntry::new(
            "Ephemeris (v1)",
            Tag::Ephemeris,
            "States in ECI with attitude quaternion.",
        ),
        CatalogEntry::new(
            "Comms Packet (v1)",
            Tag::Comms,
            "Downlink frame with FEC and interleaving.",
        ),
        CatalogEntry::new(
            "Payload Image (v1)",
            Tag::Payload,
            "Image tiles with calibration metadata.",
        ),
        CatalogEntry::new(
            "Ground Command (v1)",
            Tag::Ground,
            "Command envelope and routing.",
        ),
    ]
}

/// Derives the visible cards from the current query and active tag.
///
/// The tag gate is an exact match and runs first; the text gate is a
/// case-insensitive substring match over title, description and tag.
/// Seed order is preserved.
pub fn filter_catalog(
    entries: &[CatalogEntry],
    query: &str,
    active_tag: Option<Tag>,
) -> Vec<CatalogEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| active_tag.is_none_or(|tag| entry.tag == tag))
        .filter(|entry| needle.is_empty() || entry.mentions(&needle))
        .cloned()
        .collect()
}

/// Message shown on the trailing "create new" card.
pub fn empty_state_message(visible: usize) -> &'static str {
    if visible == 0 {
        "No standards match."
    } else {
        "Nothing else matches."
    }
}
