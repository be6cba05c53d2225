//! Top navigation bar.

use leptos::prelude::*;

use super::{ThemeToggle, on_escape};
use crate::{config::ShellConfig, state::FilterState};

/// Actions menu entries: (label, anchor).
pub const ACTIONS: [(&str, &str); 3] = [
    ("New Standard", "#new-standard"),
    ("Upload to S3", "#upload"),
    ("Generate SDK", "#sdk"),
];

/// Top bar component.
#[component]
pub fn Topbar(
    /// Opens the mobile sidebar overlay.
    #[prop(into)]
    on_open_sidebar: Callback<()>,
    /// Whether the dark theme is active.
    #[prop(into)]
    dark: Signal<bool>,
    /// Receives theme change requests.
    #[prop(into)]
    on_dark_change: Callback<bool>,
    /// Shared filter state, used only when quick search is wired.
    filter: RwSignal<FilterState>,
) -> impl IntoView {
    let config = expect_context::<ShellConfig>();
    let wired = config.search.quick_search_filters;
    let local_query = RwSignal::new(String::new());
    let menu_open = RwSignal::new(false);
    on_escape(move || {
        if menu_open.get_untracked() {
            menu_open.set(false);
        }
    });

    let quick_value = move || {
        if wired {
            filter.with(|f| f.query.clone())
        } else {
            local_query.get()
        }
    };

    view! {
      <div class="sds-topbar">
        <button
          type="button"
          class="sds-menu-trigger"
          aria-label="Open sidebar"
          on:click=move |_| on_open_sidebar.run(())
        >
          "\u{2630}"
        </button>

        <div class="sds-quick-search">
          <div class="sds-search-box">
            <span class="sds-icon" aria-hidden="true">
              "\u{2315}"
            </span>
            <input
              type="text"
              class="sds-search-input"
              placeholder=config.search.quick_search_placeholder.clone()
              prop:value=quick_value
              on:input=move |ev| {
                let value = event_target_value(&ev);
                if wired {
                  filter.update(|f| f.set_query(value));
                } else {
                  local_query.set(value);
                }
              }
            />
          </div>
        </div>

        <div class="sds-topbar-actions">
          <ThemeToggle checked=dark on_change=on_dark_change />
          <div class="sds-menu">
            <button
              type="button"
              class="sds-menu-button"
              aria-haspopup="menu"
              aria-expanded=move || menu_open.get().to_string()
              on:click=move |_| menu_open.update(|open| *open = !*open)
            >
              <span class="sds-menu-label">"Actions"</span>
              <span class="sds-icon" aria-hidden="true">
                "\u{25be}"
              </span>
            </button>
            <Show when=move || menu_open.get()>
              <div class="sds-menu-items" role="menu">
                {ACTIONS
                  .iter()
                  .map(move |(label, href)| {
                    view! {
                      <a
                        href=*href
                        role="menuitem"
                        class="sds-menu-item"
                        on:click=move |_| menu_open.set(false)
                      >
                        {*label}
                      </a>
                    }
                  })
                  .collect_view()}
              </div>
            </Show>
          </div>
        </div>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actions_are_anchors() {
        assert!(ACTIONS.iter().all(|(_, href)| href.starts_with('#')));
        assert_eq!(ACTIONS[2], ("Generate SDK", "#sdk"));
    }
}
