//! Sidebar with search, navigation and tag filters.

use leptos::prelude::*;

use crate::{config::ShellConfig, state::FilterState};

/// Sidebar navigation entries: (label, anchor, glyph).
pub const NAV: [(&str, &str, &str); 5] = [
    ("Home", "#home", "\u{1f680}"),
    ("Standards", "#standards", "\u{25a4}"),
    ("Playground", "#playground", "</>"),
    ("Storage", "#storage", "\u{2601}"),
    ("Registry", "#registry", "\u{26c1}"),
];

/// Sidebar component.
///
/// Reports query edits and tag selections into `filter`; it owns no filter
/// state itself. `on_navigate` fires for every navigation link so the
/// mobile overlay can close itself.
#[component]
pub fn Sidebar(
    /// Shared filter state.
    filter: RwSignal<FilterState>,
    /// Called when a navigation link is activated.
    #[prop(into)]
    on_navigate: Callback<()>,
    /// Rendered inside the narrow-viewport overlay.
    #[prop(optional)]
    mobile: bool,
    /// Extra classes for the container.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let config = expect_context::<ShellConfig>();
    let tags = Memo::new(move |_| filter.with(FilterState::visible_tags));

    view! {
      <aside class=format!("sds-sidebar {class}") class:mobile=mobile>
        <div class="sds-sidebar-brand">
          <span class="sds-brand-mark" aria-hidden="true">
            "\u{25a3}"
          </span>
          <span class="sds-brand-name">{config.brand.name.clone()}</span>
          <span class="sds-badge">{config.brand.version_label.clone()}</span>
        </div>

        <div class="sds-sidebar-search">
          <div class="sds-search-box">
            <span class="sds-icon" aria-hidden="true">
              "\u{2315}"
            </span>
            <input
              type="text"
              class="sds-search-input"
              placeholder=config.search.placeholder.clone()
              prop:value=move || filter.with(|f| f.query.clone())
              on:input=move |ev| {
                let value = event_target_value(&ev);
                filter.update(|f| f.set_query(value));
              }
            />
          </div>
        </div>

        <nav class="sds-nav" aria-label="Main navigation">
          {NAV
            .iter()
            .map(move |(label, href, glyph)| {
              view! {
                <a href=*href class="sds-nav-link" on:click=move |_| on_navigate.run(())>
                  <span class="sds-icon" aria-hidden="true">
                    {*glyph}
                  </span>
                  {*label}
                </a>
              }
            })
            .collect_view()}
        </nav>

        <div class="sds-tags">
          <h4 class="sds-tags-title">"Tags"</h4>
          <div class="sds-tag-list">
            <For
              each=move || tags.get()
              key=|tag| *tag
              children=move |tag| {
                let is_active = Memo::new(move |_| filter.with(|f| f.is_active(tag)));
                view! {
                  <button
                    type="button"
                    class="sds-tag"
                    class:active=is_active
                    aria-pressed=move || is_active.get().to_string()
                    on:click=move |_| {
                      filter.update(|f| {
                        f.select_tag(tag);
                      });
                    }
                  >
                    {tag.as_str()}
                  </button>
                }
              }
            />

          </div>
        </div>

        <div class="sds-sidebar-footer">
          <div class="sds-callout">
            <p>
              "Connected to S3 and on-device cache for blazing search. Configure in "
              <strong>"Settings"</strong>
              "."
            </p>
            <a href="#settings" class="sds-callout-link" on:click=move |_| on_navigate.run(())>
              "\u{2699} Open Settings"
            </a>
          </div>
          <a
            href=config.links.repository_url.clone()
            target="_blank"
            rel="noreferrer"
            class="sds-repo-link"
            aria-label="Source repository"
          >
            "GitHub"
          </a>
        </div>
      </aside>
    }
}
