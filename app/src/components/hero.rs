//! Hero banner.

use leptos::prelude::*;

use crate::config::ShellConfig;

/// Hero tabs: (label, uses the alternate accent).
pub const TABS: [(&str, bool); 3] = [("Standards", false), ("Playground", false), ("Storage", true)];

/// Banner with heading, tagline and a purely visual tab strip.
#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<ShellConfig>();
    let selected = RwSignal::new(0usize);

    view! {
      <section class="sds-hero">
        <div class="sds-hero-body">
          <div class="sds-hero-text">
            <h1 class="sds-hero-title">
              {config.brand.name.clone()}
              <span class="sds-muted">" " {config.brand.hero_suffix.clone()}</span>
            </h1>
            <p class="sds-hero-tagline">{config.brand.tagline.clone()}</p>
          </div>
          <div class="sds-tab-list" role="tablist">
            {TABS
              .iter()
              .enumerate()
              .map(move |(index, (label, alt))| {
                let is_selected = move || selected.get() == index;
                view! {
                  <button
                    type="button"
                    role="tab"
                    class="sds-hero-tab"
                    class:alt=*alt
                    class:selected=is_selected
                    aria-selected=move || is_selected().to_string()
                    on:click=move |_| selected.set(index)
                  >
                    {*label}
                  </button>
                }
              })
              .collect_view()}
          </div>
        </div>
      </section>
    }
}
