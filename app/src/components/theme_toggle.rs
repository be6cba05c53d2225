//! Controlled dark/light switch.

use leptos::prelude::*;

/// The value the switch requests when activated.
pub fn toggle_intent(checked: bool) -> bool {
    !checked
}

/// Two-state theme switch.
///
/// Holds no state: it renders `checked` and reports the negated value
/// through `on_change`.
#[component]
pub fn ThemeToggle(
    /// Whether the dark theme is active.
    #[prop(into)]
    checked: Signal<bool>,
    /// Receives the requested value.
    #[prop(into)]
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
      <div class="sds-theme-toggle">
        <span class="sds-icon" aria-hidden="true">
          "\u{2600}"
        </span>
        <button
          type="button"
          role="switch"
          class="sds-switch"
          class:on=move || checked.get()
          aria-checked=move || checked.get().to_string()
          aria-label="Toggle dark mode"
          on:click=move |_| on_change.run(toggle_intent(checked.get_untracked()))
        >
          <span class="sds-sr-only">"Toggle theme"</span>
          <span class="sds-switch-thumb" aria-hidden="true"></span>
        </button>
        <span class="sds-icon" aria-hidden="true">
          "\u{263e}"
        </span>
      </div>
    }
}
