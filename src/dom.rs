//! DOM Accessors
//!
//! Every lookup and mutation against the server-rendered page goes through here.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, NodeList};

use crate::claim;
use crate::models::FoodCard;

pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const NO_RESULTS_ID: &str = "noResults";
pub const FOOD_CONTAINER_ID: &str = "foodContainer";
pub const CARD_SELECTOR: &str = ".food-card";
pub const NAME_ATTR: &str = "data-food-name";
pub const LOCATION_ATTR: &str = "data-location";
pub const CLAIM_BUTTON_SELECTOR: &str = "[id^='claim-btn-']";
pub const CLEAR_SEARCH_SELECTOR: &str = "[data-action='clear-search']";
pub const DONATE_FORM_SELECTOR: &str = ".donate-form";
pub const PLACEHOLDER_SELECTOR: &str = ".no-food";

const SLIDE_IN: &str = "slideIn 0.3s ease-out";

const SLIDE_OUT_KEYFRAMES: &str = "
    @keyframes slideOut {
        from {
            opacity: 1;
            transform: translateY(0);
        }
        to {
            opacity: 0;
            transform: translateY(-20px);
        }
    }
";

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

fn collect_nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(collect_nodes::<T>)
        .unwrap_or_default()
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(collect_nodes::<T>)
        .unwrap_or_default()
}

pub fn search_input(document: &Document) -> Option<HtmlInputElement> {
    by_id(document, SEARCH_INPUT_ID)
}

pub fn no_results(document: &Document) -> Option<HtmlElement> {
    by_id(document, NO_RESULTS_ID)
}

pub fn food_container(document: &Document) -> Option<HtmlElement> {
    by_id(document, FOOD_CONTAINER_ID)
}

pub fn claim_button(document: &Document, id: &str) -> Option<HtmlButtonElement> {
    by_id(document, &claim::button_id(id))
}

/// Read the searchable attributes of a card element
pub fn read_card(el: &HtmlElement) -> FoodCard {
    FoodCard {
        name: el.get_attribute(NAME_ATTR).unwrap_or_default(),
        location: el.get_attribute(LOCATION_ATTR).unwrap_or_default(),
    }
}

/// All cards on the page with their parsed attributes
pub fn food_cards(document: &Document) -> Vec<(HtmlElement, FoodCard)> {
    query_all::<HtmlElement>(document, CARD_SELECTOR)
        .into_iter()
        .map(|el| {
            let card = read_card(&el);
            (el, card)
        })
        .collect()
}

pub fn is_hidden(el: &HtmlElement) -> bool {
    el.style()
        .get_property_value("display")
        .map(|v| v == "none")
        .unwrap_or(false)
}

pub fn set_shown(el: &HtmlElement, shown: bool) {
    let _ = el
        .style()
        .set_property("display", if shown { "block" } else { "none" });
}

pub fn set_animation(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("animation", value);
}

pub fn set_card_visible(el: &HtmlElement, visible: bool) {
    set_shown(el, visible);
    if visible {
        set_animation(el, SLIDE_IN);
    }
}

pub fn mark_claim_pending(button: &HtmlButtonElement, label: &str) {
    button.set_disabled(true);
    button.set_text_content(Some(label));
    let _ = button.class_list().add_1("loading");
}

pub fn mark_claim_done(button: &HtmlButtonElement, label: &str) {
    button.set_text_content(Some(label));
    let _ = button.class_list().remove_1("loading");
    let _ = button.class_list().add_1("claimed");
}

pub fn reset_claim_button(button: &HtmlButtonElement, label: &str) {
    button.set_disabled(false);
    button.set_text_content(Some(label));
    let _ = button.class_list().remove_1("loading");
}

/// The `.food-card` that contains `el`
pub fn card_of(el: &Element) -> Option<HtmlElement> {
    el.closest(CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|card| card.dyn_into::<HtmlElement>().ok())
}

/// Trimmed value of a form control; missing or unknown elements read as empty
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    let raw = if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    };
    raw.trim().to_string()
}

/// Add the exit keyframes the server stylesheet lacks
pub fn install_keyframes(document: &Document) {
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_text_content(Some(SLIDE_OUT_KEYFRAMES));
    let _ = head.append_child(&style);
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
    cb.forget();
}

pub fn js_error_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}
