//! Page footer.

use leptos::prelude::*;

use crate::config::ShellConfig;

/// Footer policy links: (label, anchor).
pub const LINKS: [(&str, &str); 3] = [("Terms", "#terms"), ("Privacy", "#privacy"), ("Status", "#status")];

/// Copyright notice for the given brand and year.
pub fn copyright_line(brand: &str, year: u32) -> String {
    format!("\u{a9} {year} {brand}.org. All rights reserved.")
}

/// Footer with the copyright line and policy links.
#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<ShellConfig>();
    let year = js_sys::Date::new_0().get_full_year();
    let links = LINKS.iter().enumerate().map(|(index, (label, href))| {
        let separator = (index > 0).then(|| {
            view! {
              <span class="sds-muted" aria-hidden="true">
                "\u{2022}"
              </span>
            }
        });
        view! {
          {separator}
          <a href=*href class="sds-footer-link">
            {*label}
          </a>
        }
    });

    view! {
      <footer class="sds-footer">
        <div class="sds-footer-body">
          <p class="sds-footer-copy">{copyright_line(&config.brand.name, year)}</p>
          <div class="sds-footer-links">{links.collect_view()}</div>
        </div>
      </footer>
    }
}
