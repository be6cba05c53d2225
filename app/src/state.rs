//! Filter state owned by the top-level shell.

use crate::{
    catalog::{CatalogEntry, filter_catalog},
    tags::{Tag, filter_tags},
};

/// Selecting the active tag again clears it; any other tag replaces it.
pub fn toggle_tag(current: Option<Tag>, selected: Tag) -> Option<Tag> {
    if current == Some(selected) {
        None
    } else {
        Some(selected)
    }
}

/// Free-text query plus at most one active tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub active_tag: Option<Tag>,
}

impl FilterState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Applies the toggle rule and returns the new active tag.
    pub fn select_tag(&mut self, tag: Tag) -> Option<Tag> {
        self.active_tag = toggle_tag(self.active_tag, tag);
        log::debug!("active tag: {:?}", self.active_tag);
        self.active_tag
    }

    pub fn is_active(&self, tag: Tag) -> bool {
        self.active_tag == Some(tag)
    }

    /// Tags offered in the sidebar for the current query.
    pub fn visible_tags(&self) -> Vec<Tag> {
        filter_tags(&self.query)
    }

    /// Cards visible for the current query and tag.
    pub fn visible_entries(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        filter_catalog(entries, &self.query, self.active_tag)
    }
}

/// Interactions that affect the narrow-viewport sidebar overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The top bar menu trigger.
    MenuTrigger,
    /// The overlay's close button.
    CloseButton,
    /// A navigation link inside the overlay.
    Navigate,
    /// Escape pressed anywhere in the window.
    Escape,
    /// A click on the backdrop behind the panel.
    Backdrop,
}

/// Open/closed state of the sidebar overlay.
///
/// Only the menu trigger opens it; every other interaction closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarOverlay {
    open: bool,
}

impl SidebarOverlay {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Applies `event` and returns whether the overlay is now open.
    pub fn apply(&mut self, event: OverlayEvent) -> bool {
        self.open = matches!(event, OverlayEvent::MenuTrigger);
        log::debug!("sidebar overlay {event:?}: open = {}", self.open);
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_catalog;

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert!(state.query.is_empty());
        assert_eq!(state.active_tag, None);
        assert_eq!(state.visible_entries(&seed_catalog()).len(), 5);
    }

    #[test]
    fn test_select_same_tag_twice_clears() {
        let mut state = FilterState::default();
        assert_eq!(state.select_tag(Tag::Ops), Some(Tag::Ops));
        assert!(state.is_active(Tag::Ops));
        assert_eq!(state.select_tag(Tag::Ops), None);
        assert!(!state.is_active(Tag::Ops));
    }

    #[test]
    fn test_select_other_tag_replaces() {
        let mut state = FilterState {
            query: String::new(),
            active_tag: Some(Tag::Comms),
        };
        state.select_tag(Tag::Ground);
        assert_eq!(state.active_tag, Some(Tag::Ground));
        assert!(!state.is_active(Tag::Comms));
    }

    #[test]
    fn test_toggle_round_trip_for_every_tag() {
        for tag in Tag::ALL {
            for start in std::iter::once(None).chain(Tag::ALL.into_iter().map(Some)) {
                let once = toggle_tag(start, tag);
                assert_eq!(once, if start == Some(tag) { None } else { Some(tag) });
                if start.is_none() {
                    assert_eq!(toggle_tag(once, tag), None);
                }
            }
        }
    }

    #[test]
    fn test_query_drives_tags_and_entries() {
        let mut state = FilterState::default();
        state.set_query("eci");
        assert!(state.visible_tags().is_empty());
        let entries = state.visible_entries(&seed_catalog());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Ephemeris (v1)");
    }

    #[test]
    fn test_scenarios() {
        let seed = seed_catalog();

        let telemetry = FilterState {
            query: String::new(),
            active_tag: Some(Tag::Telemetry),
        }
        .visible_entries(&seed);
        assert_eq!(telemetry.len(), 1);
        assert_eq!(telemetry[0].title, "Telemetry (v1)");

        let none = FilterState {
            query: "comms".to_string(),
            active_tag: Some(Tag::Payload),
        }
        .visible_entries(&seed);
        assert!(none.is_empty());
    }

    #[test]
    fn test_overlay_starts_closed() {
        assert!(!SidebarOverlay::default().is_open());
    }

    #[test]
    fn test_overlay_opens_only_from_trigger() {
        for event in [
            OverlayEvent::CloseButton,
            OverlayEvent::Navigate,
            OverlayEvent::Escape,
            OverlayEvent::Backdrop,
        ] {
            let mut overlay = SidebarOverlay::default();
            assert!(!overlay.apply(event), "{event:?} opened the overlay");
        }
        let mut overlay = SidebarOverlay::default();
        assert!(overlay.apply(OverlayEvent::MenuTrigger));
        assert!(overlay.apply(OverlayEvent::MenuTrigger));
    }

    #[test]
    fn test_overlay_closes_on_every_dismissal() {
        for event in [
            OverlayEvent::CloseButton,
            OverlayEvent::Navigate,
            OverlayEvent::Escape,
            OverlayEvent::Backdrop,
        ] {
            let mut overlay = SidebarOverlay::default();
            overlay.apply(OverlayEvent::MenuTrigger);
            assert!(overlay.is_open());
            overlay.apply(event);
            assert!(!overlay.is_open(), "{event:?} left the overlay open");
        }
    }
}
