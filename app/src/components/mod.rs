//! Leptos components for the catalog shell.
//!
//! # Components
//!
//! - [`Sidebar`] - Search input, navigation links and tag filters
//! - [`Topbar`] - Mobile menu trigger, quick search, theme switch, actions menu
//! - [`ThemeToggle`] - Controlled dark/light switch
//! - [`Hero`] - Banner with a tab strip
//! - [`ContentGrid`] - Card grid filtered by query and tag
//! - [`Footer`] - Copyright line and policy links

pub mod content_grid;
pub mod footer;
pub mod hero;
pub mod sidebar;
pub mod theme_toggle;
pub mod topbar;

pub use content_grid::{CatalogCard, ContentGrid};
pub use footer::Footer;
pub use hero::Hero;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
pub use topbar::Topbar;

use leptos::prelude::*;

/// Runs `on_escape` whenever Escape is pressed anywhere in the window.
pub fn on_escape(on_escape: impl Fn() + 'static) {
    let mut on_escape = Some(on_escape);
    Effect::new(move |_| {
        use wasm_bindgen::{JsCast, prelude::*};

        let Some(on_escape) = on_escape.take() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        let handler =
            Closure::<dyn Fn(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    on_escape();
                }
            });

        if let Err(err) =
            window.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())
        {
            log::warn!("registering escape handler failed: {err:?}");
        }

        // Lives as long as the page
        handler.forget();
    });
}
