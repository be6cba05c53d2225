//! Card grid of catalog entries.

use leptos::prelude::*;

use crate::{
    catalog::{CatalogEntry, empty_state_message, seed_catalog},
    state::FilterState,
};

/// Per-card actions: (label, anchor).
pub const CARD_ACTIONS: [(&str, &str); 3] = [("View", "#view"), ("IDL", "#idl"), ("Generate", "#generate")];

/// Responsive grid of the entries visible under `filter`.
///
/// The trailing "create new" card is always present and becomes the only
/// card when nothing matches.
#[component]
pub fn ContentGrid(
    /// Current query and active tag.
    #[prop(into)]
    filter: Signal<FilterState>,
) -> impl IntoView {
    let catalog = StoredValue::new(seed_catalog());
    let cards =
        Memo::new(move |_| filter.with(|f| catalog.with_value(|entries| f.visible_entries(entries))));

    view! {
      <section class="sds-grid">
        <For
          each=move || cards.get()
          key=|entry| entry.title.clone()
          children=move |entry| {
            view! { <CatalogCard entry=entry /> }
          }
        />

        <article class="sds-card sds-card-empty" class:alone=move || cards.with(|c| c.is_empty())>
          <div class="sds-card-empty-body">
            <p class="sds-card-empty-message">
              {move || cards.with(|c| empty_state_message(c.len()))}
            </p>
            <a href="#new" class="sds-button">
              "\u{1f680} Create a new standard"
            </a>
          </div>
        </article>
      </section>
    }
}

/// A single catalog card.
#[component]
pub fn CatalogCard(
    /// The entry to display.
    entry: CatalogEntry,
) -> impl IntoView {
    view! {
      <article class="sds-card">
        <div class="sds-card-header">
          <div class="sds-card-icon" aria-hidden="true">
            "\u{25a4}"
          </div>
          <div class="sds-card-heading">
            <h3 class="sds-card-title">{entry.title.clone()}</h3>
            <p class="sds-card-tag">{entry.tag.as_str()}</p>
          </div>
        </div>
        <p class="sds-card-description">{entry.description.clone()}</p>
        <div class="sds-card-actions">
          {CARD_ACTIONS
            .iter()
            .map(|(label, href)| {
              view! {
                <a href=*href class="sds-button">
                  {*label}
                </a>
              }
            })
            .collect_view()}
        </div>
      </article>
    }
}
