//! Browser tests for the mounted shell. Run with `wasm-pack test --headless --firefox app`.

#![cfg(target_arch = "wasm32")]

use app::App;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().unwrap()
}

fn mount_shell() -> HtmlElement {
    let document = window().document().unwrap();
    let root: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&root).unwrap();
    std::mem::forget(leptos::mount::mount_to(root.clone(), App));
    root
}

/// Waits for a macrotask so pending effects and DOM updates have run.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn find(root: &HtmlElement, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn click(root: &HtmlElement, selector: &str) {
    find(root, selector)
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn overlay_open(root: &HtmlElement) -> bool {
    find(root, ".sds-overlay").is_some()
}

async fn open_overlay(root: &HtmlElement) {
    assert!(!overlay_open(root));
    click(root, ".sds-menu-trigger");
    settle().await;
    assert!(overlay_open(root));
}

fn press_escape() {
    let init = web_sys::KeyboardEventInit::new();
    init.set_key("Escape");
    let ev = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    window().dispatch_event(&ev).unwrap();
}

fn grid_cards(root: &HtmlElement) -> Vec<Element> {
    let list = root.query_selector_all(".sds-grid > article").unwrap();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}

#[wasm_bindgen_test]
async fn test_overlay_closes_on_navigation() {
    let root = mount_shell();
    settle().await;

    open_overlay(&root).await;
    click(&root, ".sds-overlay .sds-nav-link");
    settle().await;
    assert!(!overlay_open(&root));
}

#[wasm_bindgen_test]
async fn test_overlay_closes_on_settings_link() {
    let root = mount_shell();
    settle().await;

    open_overlay(&root).await;
    click(&root, ".sds-overlay .sds-callout-link");
    settle().await;
    assert!(!overlay_open(&root));
}

#[wasm_bindgen_test]
async fn test_overlay_closes_on_close_button() {
    let root = mount_shell();
    settle().await;

    open_overlay(&root).await;
    click(&root, ".sds-overlay-close");
    settle().await;
    assert!(!overlay_open(&root));
}

#[wasm_bindgen_test]
async fn test_overlay_closes_on_backdrop() {
    let root = mount_shell();
    settle().await;

    open_overlay(&root).await;
    click(&root, ".sds-backdrop");
    settle().await;
    assert!(!overlay_open(&root));
}

#[wasm_bindgen_test]
async fn test_overlay_closes_on_escape() {
    let root = mount_shell();
    settle().await;

    open_overlay(&root).await;
    press_escape();
    settle().await;
    assert!(!overlay_open(&root));
}

#[wasm_bindgen_test]
async fn test_grid_shows_every_seed_card() {
    let root = mount_shell();
    settle().await;

    let cards = grid_cards(&root);
    assert_eq!(cards.len(), 6);
    let trailing = cards.last().unwrap();
    assert!(trailing.class_list().contains("sds-card-empty"));
    assert!(!trailing.class_list().contains("alone"));
}

#[wasm_bindgen_test]
async fn test_empty_state_card_is_alone_when_nothing_matches() {
    let root = mount_shell();
    settle().await;

    // Select the tag first: the query below hides the payload button.
    let tags = root
        .query_selector_all(".sds-sidebar-desktop .sds-tag")
        .unwrap();
    let payload = (0..tags.length())
        .filter_map(|i| tags.get(i))
        .find(|node| node.text_content().as_deref() == Some("payload"))
        .expect("payload tag button");
    payload.unchecked_into::<HtmlElement>().click();
    settle().await;

    let input: HtmlInputElement = find(&root, ".sds-sidebar-desktop .sds-search-input")
        .unwrap()
        .unchecked_into();
    input.set_value("comms");
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let ev = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&ev).unwrap();
    settle().await;

    let cards = grid_cards(&root);
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert!(card.class_list().contains("sds-card-empty"));
    assert!(card.class_list().contains("alone"));
    assert!(
        card.text_content()
            .unwrap_or_default()
            .contains("No standards match.")
    );
}
