//! SpaceDataStandards catalog shell.
//!
//! A client-side rendered Leptos front end: a sidebar with search and tag
//! filters, a top bar with a theme switch and an actions menu, a hero
//! banner, a filtered card grid and a footer.
//!
//! The filtering and theme logic lives in plain modules ([`tags`],
//! [`catalog`], [`state`], [`theme`]) so it can be exercised without a
//! browser; [`components`] wires it into Leptos signals.

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod tags;
pub mod theme;

pub use catalog::{CatalogEntry, filter_catalog, seed_catalog};
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use state::{FilterState, OverlayEvent, SidebarOverlay, toggle_tag};
pub use tags::{Tag, filter_tags};
pub use theme::{BrowserHost, ThemeHost, ThemePreference, ThemeState};

use components::{ContentGrid, Footer, Hero, Sidebar, Topbar, on_escape};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

/// Top-level shell. Owns the filter, theme and overlay state.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = ShellConfig::embedded();
    provide_context(config.clone());

    let filter = RwSignal::new(FilterState::default());
    let overlay = RwSignal::new(SidebarOverlay::default());
    let overlay_event = move |event: OverlayEvent| {
        overlay.update(|o| {
            o.apply(event);
        });
    };

    let theme = StoredValue::new(ThemeState::init(
        BrowserHost::new(config.theme.storage_key.clone()),
        config.theme.default_dark,
    ));
    let dark = RwSignal::new(theme.with_value(|state| state.is_dark()));
    let set_dark = move |next: bool| {
        theme.update_value(|state| state.set(ThemePreference::from_dark(next)));
        dark.set(next);
    };

    on_escape(move || {
        if overlay.get_untracked().is_open() {
            overlay_event(OverlayEvent::Escape);
        }
    });

    view! {
      <Title text=config.brand.name.clone() />

      <div class="sds-shell">
        <div class="sds-frame">
          // Mobile sidebar
          <Show when=move || overlay.with(|o| o.is_open())>
            <div class="sds-overlay">
              <div
                class="sds-backdrop"
                on:click=move |_| overlay_event(OverlayEvent::Backdrop)
              ></div>
              <div class="sds-overlay-panel">
                <button
                  type="button"
                  class="sds-overlay-close"
                  aria-label="Close sidebar"
                  on:click=move |_| overlay_event(OverlayEvent::CloseButton)
                >
                  "\u{d7}"
                </button>
                <Sidebar
                  filter=filter
                  on_navigate=move |_: ()| overlay_event(OverlayEvent::Navigate)
                  mobile=true
                />
              </div>
            </div>
          </Show>

          // Static sidebar (desktop)
          <Sidebar filter=filter on_navigate=move |_: ()| {} class="sds-sidebar-desktop" />

          <div class="sds-column">
            <Topbar
              on_open_sidebar=move |_: ()| overlay_event(OverlayEvent::MenuTrigger)
              dark=dark
              on_dark_change=set_dark
              filter=filter
            />

            <main class="sds-main">
              <div class="sds-main-inner">
                <Hero />
                <ContentGrid filter=filter />
              </div>
            </main>

            <Footer />
          </div>
        </div>
      </div>
    }
}
