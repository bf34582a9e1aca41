//! In-browser component tests. Run with `wasm-pack test --headless --firefox`.

use gloo_timers::future::TimeoutFuture;
use sf_behavior::storage::{KeyValueStore, MemoryStore};
use sf_behavior::toast::ToastKind;
use sf_behavior::reveal::ObserverOptions;
use sf_behavior::view_mode::ViewMode;
use sf_scheduler::{ManualScheduler, Scheduler, SharedScheduler};
use std::cell::Cell;
use std::rc::Rc;
use storefront_wasm::animation::ScrollReveal;
use storefront_wasm::cart::CartFeedback;
use storefront_wasm::catalog::ViewModeToggle;
use storefront_wasm::dashboard::TabController;
use storefront_wasm::diagnostics::Diagnostics;
use storefront_wasm::dom::{self, QuantityControl};
use storefront_wasm::events::Component;
use storefront_wasm::forms::{self, FormValidator};
use storefront_wasm::nav::Navigation;
use storefront_wasm::rtl::DirectionToggle;
use storefront_wasm::search::SearchFields;
use storefront_wasm::timers::BrowserScheduler;
use storefront_wasm::{feedback, state};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{DocumentReadyState, Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

struct Fixture {
    root: Element,
}

impl Fixture {
    fn new(html: &str) -> Fixture {
        let root = dom::create_element("div").unwrap();
        root.set_inner_html(html);
        dom::document().body().unwrap().append_child(&root).unwrap();
        Fixture { root }
    }

    fn all(&self, selector: &str) -> Vec<Element> {
        dom::query_all_within(&self.root, selector)
    }

    fn one(&self, selector: &str) -> Element {
        dom::query_within(&self.root, selector).unwrap()
    }

    fn click(&self, selector: &str) {
        self.one(selector).unchecked_into::<HtmlElement>().click();
    }

    fn input(&self, selector: &str) -> HtmlInputElement {
        self.one(selector).unchecked_into()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn manual() -> (Rc<ManualScheduler>, SharedScheduler) {
    let manual = Rc::new(ManualScheduler::new());
    let shared: SharedScheduler = manual.clone();
    (manual, shared)
}

fn fire(target: &Element, kind: &str, cancelable: bool) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(cancelable);
    let event = Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

#[wasm_bindgen_test]
fn mobile_menu_toggles_and_closes_on_outside_click() {
    let page = Fixture::new(
        r##"
        <button id="menu-btn">Menu</button>
        <nav id="menu" class="hidden"><a class="inside">Shop</a></nav>
        <p id="outside">Elsewhere</p>
        <a class="jump" href="#no-such-section">Jump</a>
        "##,
    );
    let menu = page.one("#menu");
    let _nav = Navigation::bind(Some(&page.one("#menu-btn")), Some(&menu), &page.all(".jump"));

    page.click("#menu-btn");
    assert!(!dom::has_class(&menu, "hidden"));
    page.click(".inside");
    assert!(!dom::has_class(&menu, "hidden"), "clicks inside the menu keep it open");
    page.click("#outside");
    assert!(dom::has_class(&menu, "hidden"));

    page.click("#menu-btn");
    page.click("#menu-btn");
    assert!(dom::has_class(&menu, "hidden"));

    let scrolled = gloo_utils::window().scroll_y().unwrap();
    assert!(!fire(&page.one(".jump"), "click", true), "default jump is prevented");
    assert_eq!(gloo_utils::window().scroll_y().unwrap(), scrolled);
}

#[wasm_bindgen_test]
fn view_mode_buttons_swap_styles_and_container_layout() {
    let page = Fixture::new(
        r#"
        <button id="grid" class="bg-primary text-white">Grid</button>
        <button id="list" class="text-gray-400 hover:bg-gray-100">List</button>
        <div id="products" class="grid md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-8"></div>
        "#,
    );
    let (grid, list, products) = (page.one("#grid"), page.one("#list"), page.one("#products"));
    let _view = ViewModeToggle::bind(Some(&grid), Some(&list), Some(&products)).unwrap();

    page.click("#list");
    assert!(dom::has_class(&list, "bg-primary") && dom::has_class(&list, "text-white"));
    assert!(!dom::has_class(&list, "text-gray-400"));
    assert!(dom::has_class(&grid, "text-gray-400") && dom::has_class(&grid, "hover:bg-gray-100"));
    assert!(!dom::has_class(&grid, "bg-primary"));
    assert_eq!(products.class_name(), "grid grid-cols-1 gap-4");

    page.click("#grid");
    assert!(dom::has_class(&grid, "bg-primary"));
    assert!(!dom::has_class(&list, "bg-primary"));
    assert_eq!(products.class_name(), ViewMode::Grid.container_classes());
}

#[wasm_bindgen_test]
fn cards_lift_on_hover_and_settle_on_leave() {
    let page = Fixture::new(r#"<div class="product-card">Lamp</div>"#);
    let cards: Vec<HtmlElement> = page.all(".product-card").into_iter().map(|e| e.unchecked_into()).collect();
    let _reveal = ScrollReveal::bind(&[], &cards, ObserverOptions::default());

    fire(&page.one(".product-card"), "mouseenter", false);
    assert_eq!(dom::style_value(&cards[0], "transform"), "translateY(-4px)");
    fire(&page.one(".product-card"), "mouseleave", false);
    let rest = dom::style_value(&cards[0], "transform");
    assert!(rest.starts_with("translateY(0"), "unexpected resting transform {rest}");
}

#[wasm_bindgen_test]
fn clicking_a_tab_shows_only_its_panel() {
    let page = Fixture::new(
        r#"
        <button class="dashboard-tab active" data-tab="orders"><svg class="text-primary"></svg><span class="text-primary">Orders</span></button>
        <button class="dashboard-tab" data-tab="wishlist"><svg class="text-gray-400"></svg><span class="text-gray-600">Wishlist</span></button>
        <button class="dashboard-tab" data-tab="missing"><span class="text-gray-600">Nowhere</span></button>
        <section id="orders" class="dashboard-content"></section>
        <section id="wishlist" class="dashboard-content hidden"></section>
        "#,
    );
    let _tabs = TabController::bind(page.all(".dashboard-tab"), page.all(".dashboard-content")).unwrap();

    page.click(r#"[data-tab="wishlist"]"#);
    let panels = page.all(".dashboard-content");
    assert!(dom::has_class(&panels[0], "hidden"));
    assert!(!dom::has_class(&panels[1], "hidden"));
    let tabs = page.all(".dashboard-tab");
    assert!(!dom::has_class(&tabs[0], "active"));
    assert!(dom::has_class(&tabs[1], "active"));
    assert!(dom::has_class(&page.one(r#"[data-tab="wishlist"] span"#), "text-primary"));
    assert!(dom::has_class(&page.one(r#"[data-tab="orders"] svg"#), "text-gray-400"));

    page.click(r#"[data-tab="missing"]"#);
    assert!(page.all(".dashboard-content").iter().all(|p| dom::has_class(p, "hidden")));
}

#[wasm_bindgen_test]
fn invalid_submission_is_cancelled_and_annotated() {
    let page = Fixture::new(
        r#"
        <form>
          <input id="name" required>
          <input id="email" type="email" required>
          <input id="phone" type="tel">
        </form>
        "#,
    );
    let form: HtmlFormElement = page.one("form").unchecked_into();
    let _validator = FormValidator::bind(std::slice::from_ref(&form));

    page.input("#email").set_value("a@b");
    assert!(!fire(&form, "submit", true), "submit should be prevented");
    let name = page.one("#name");
    let email = page.one("#email");
    assert_eq!(
        forms::error_annotation(&name).and_then(|n| n.text_content()).as_deref(),
        Some("This field is required")
    );
    assert_eq!(
        forms::error_annotation(&email).and_then(|n| n.text_content()).as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(dom::has_class(&email, "border-red-500"));

    // Typing clears without re-validating.
    fire(&email, "input", false);
    assert!(forms::error_annotation(&email).is_none());
    assert!(!dom::has_class(&email, "border-red-500"));

    page.input("#name").set_value("Ada");
    page.input("#email").set_value("a@b.co");
    assert!(fire(&form, "submit", true), "valid submit proceeds");
    assert!(page.all(".field-error").is_empty());
}

#[wasm_bindgen_test]
fn blur_checks_optional_phone_fields() {
    let page = Fixture::new(r#"<form><input id="phone" type="tel"></form>"#);
    let form: HtmlFormElement = page.one("form").unchecked_into();
    let _validator = FormValidator::bind(std::slice::from_ref(&form));
    let phone = page.one("#phone");

    fire(&phone, "blur", false);
    assert!(forms::error_annotation(&phone).is_none());

    page.input("#phone").set_value("abc");
    fire(&phone, "blur", false);
    assert_eq!(page.all(".field-error").len(), 1);
    fire(&phone, "blur", false);
    assert_eq!(page.all(".field-error").len(), 1, "annotations never stack");
}

#[wasm_bindgen_test]
fn quantity_steppers_hold_the_floor_and_pulse_totals() {
    let page = Fixture::new(
        r#"
        <div class="quantity-control">
          <button class="quantity-minus">-</button>
          <input class="quantity-input" value="1">
          <button class="quantity-plus">+</button>
        </div>
        <span class="cart-total">$10</span>
        "#,
    );
    let (clock, scheduler) = manual();
    let controls: Vec<QuantityControl> = page
        .all(".quantity-control")
        .iter()
        .filter_map(QuantityControl::within)
        .collect();
    let totals: Vec<HtmlElement> = page.all(".cart-total").into_iter().map(|e| e.unchecked_into()).collect();
    let _cart = CartFeedback::bind(&[], &controls, Vec::new(), totals.clone(), scheduler);

    page.click(".quantity-minus");
    assert_eq!(page.input(".quantity-input").value(), "1");
    assert_eq!(dom::style_value(&totals[0], "transform"), "", "no-op click does not pulse");

    page.click(".quantity-plus");
    assert_eq!(page.input(".quantity-input").value(), "2");
    assert_eq!(dom::style_value(&totals[0], "transform"), "scale(1.05)");
    clock.advance(200);
    assert_eq!(dom::style_value(&totals[0], "transform"), "scale(1)");

    page.input(".quantity-input").set_value("-3");
    fire(&page.one(".quantity-input"), "change", false);
    assert_eq!(page.input(".quantity-input").value(), "1");
}

#[wasm_bindgen_test]
fn add_to_cart_flashes_label_and_counts_badge() {
    let page = Fixture::new(
        r#"
        <button class="add">Add to Cart</button>
        <span class="cart-count">2</span>
        "#,
    );
    let (clock, scheduler) = manual();
    let buttons: Vec<HtmlElement> = page.all(".add").into_iter().map(|e| e.unchecked_into()).collect();
    let _cart = CartFeedback::bind(&buttons, &[], page.all(".cart-count"), Vec::new(), scheduler);

    page.click(".add");
    page.click(".add");
    assert_eq!(page.one(".add").text_content().as_deref(), Some("Added!"));
    assert!(dom::has_class(&page.one(".add"), "bg-green-600"));
    assert_eq!(page.one(".cart-count").text_content().as_deref(), Some("4"));

    clock.advance(1500);
    assert_eq!(page.one(".add").text_content().as_deref(), Some("Add to Cart"));
    assert!(!dom::has_class(&page.one(".add"), "bg-green-600"));
}

#[wasm_bindgen_test]
fn direction_toggle_persists_and_restores() {
    let page = Fixture::new(r#"<button id="rtl">RTL</button><div class="flex flex-row"></div>"#);
    let store = Rc::new(MemoryStore::new());
    let (clock, scheduler) = manual();
    let toggle: HtmlElement = page.one("#rtl").unchecked_into();
    let root = dom::create_element("div").unwrap();

    let first = DirectionToggle::bind(Some(&toggle), &root, store.clone(), scheduler.clone()).unwrap();
    assert_eq!(root.get_attribute("dir"), None);

    toggle.click();
    assert_eq!(root.get_attribute("dir").as_deref(), Some("rtl"));
    assert_eq!(store.raw("rtl").as_deref(), Some("true"));
    let flex: HtmlElement = page.one(".flex").unchecked_into();
    assert_eq!(dom::style_value(&flex, "flex-direction"), "row-reverse");
    assert_eq!(dom::style_value(&toggle, "transform"), "scale(0.9)");
    clock.advance(150);
    assert_eq!(dom::style_value(&toggle, "transform"), "scale(1)");
    drop(first);

    // A fresh page load restores the saved direction.
    let restored_root = dom::create_element("div").unwrap();
    let second = DirectionToggle::bind(Some(&toggle), &restored_root, store.clone(), scheduler).unwrap();
    assert_eq!(restored_root.get_attribute("dir").as_deref(), Some("rtl"));

    toggle.click();
    assert_eq!(restored_root.get_attribute("dir").as_deref(), Some("ltr"));
    assert_eq!(store.raw("rtl").as_deref(), Some("false"));
    assert_eq!(dom::style_value(&flex, "flex-direction"), "");
    drop(second);
}

#[wasm_bindgen_test]
fn search_dispatches_once_after_typing_settles() {
    let page = Fixture::new(r#"<input type="search" class="q">"#);
    let (clock, scheduler) = manual();
    let inputs = vec![page.input(".q")];
    let _search = SearchFields::bind(inputs, scheduler);
    let field: HtmlElement = page.one(".q").unchecked_into();

    for typed in ["s", "so", "sof", "sofa"] {
        page.input(".q").set_value(typed);
        fire(&page.one(".q"), "input", false);
        clock.advance(100);
    }
    assert_eq!(dom::style_value(&field, "border-color"), "");
    clock.advance(200);
    assert_ne!(dom::style_value(&field, "border-color"), "");
    clock.advance(1000);
    assert_eq!(dom::style_value(&field, "border-color"), "");

    page.input(".q").set_value("so");
    fire(&page.one(".q"), "input", false);
    clock.run_until_idle();
    assert_eq!(dom::style_value(&field, "border-color"), "");
}

#[wasm_bindgen_test]
async fn toast_slides_in_and_is_removed() {
    let scheduler: SharedScheduler = Rc::new(BrowserScheduler::default());
    let toast = feedback::show_toast(&scheduler, "Saved", ToastKind::Success).unwrap();
    assert!(toast.is_connected());
    assert!(dom::has_class(&toast, "bg-green-600"));
    assert!(dom::has_class(&toast, "translate-x-full"));

    TimeoutFuture::new(150).await;
    assert!(!dom::has_class(&toast, "translate-x-full"));

    TimeoutFuture::new(3300).await;
    assert!(!toast.is_connected());
}

#[wasm_bindgen_test]
fn storage_exports_round_trip_json() {
    let value = js_sys::JSON::parse(r#"{"items":[1,2],"note":"hi"}"#).unwrap();
    storefront_wasm::save_to_local_storage("sf-test", value);
    let loaded = storefront_wasm::load_from_local_storage("sf-test");
    assert_eq!(
        js_sys::JSON::stringify(&loaded).unwrap().as_string().as_deref(),
        Some(r#"{"items":[1,2],"note":"hi"}"#)
    );
    assert!(storefront_wasm::load_from_local_storage("sf-test-absent").is_null());
    assert!(state::store().get_item("sf-test").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn cancelled_timers_release_their_task() {
    let scheduler = BrowserScheduler::default();
    let ran = Rc::new(Cell::new(false));

    let captured = ran.clone();
    let id = scheduler.schedule(10, Box::new(move || captured.set(true)));
    assert_eq!(Rc::strong_count(&ran), 2);
    assert!(scheduler.cancel(id));
    assert_eq!(Rc::strong_count(&ran), 1, "cancel drops the task");
    assert_eq!(scheduler.pending(), 0);
    assert!(!scheduler.cancel(id));

    let fired = ran.clone();
    scheduler.schedule(10, Box::new(move || fired.set(true)));
    TimeoutFuture::new(50).await;
    assert!(ran.get());
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(Rc::strong_count(&ran), 1);
}

#[wasm_bindgen_test]
async fn diagnostics_skip_the_load_listener_after_load() {
    for _ in 0..50 {
        if dom::document().ready_state() == DocumentReadyState::Complete {
            break;
        }
        TimeoutFuture::new(20).await;
    }
    assert_eq!(dom::document().ready_state(), DocumentReadyState::Complete);

    let diagnostics = Diagnostics::install();
    assert_eq!(diagnostics.listeners().len(), 1, "only the error listener is attached");
}
