//! Empty-State Sentinel
//!
//! Swaps the listing container for a placeholder once no card is visible.

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::dom;

pub fn needs_placeholder(visible_cards: usize, placeholder_present: bool) -> bool {
    visible_cards == 0 && !placeholder_present
}

#[component]
pub fn EmptyState(#[prop(into)] donate_url: String) -> impl IntoView {
    view! {
        <div class="no-food">
            <p>"No food donations available at the moment."</p>
            <a href=donate_url class="donate-link">"Be the first to donate!"</a>
        </div>
    }
}

/// Replace the container content if no visible card remains.
/// Returns true when the placeholder was mounted by this call.
pub fn apply(container: &HtmlElement, donate_url: &str) -> bool {
    let visible = dom::query_all_in::<HtmlElement>(container, dom::CARD_SELECTOR)
        .iter()
        .filter(|card| !dom::is_hidden(card))
        .count();
    let present = container
        .query_selector(dom::PLACEHOLDER_SELECTOR)
        .ok()
        .flatten()
        .is_some();

    if !needs_placeholder(visible, present) {
        return false;
    }

    container.set_inner_html("");
    let donate_url = donate_url.to_string();
    leptos::mount::mount_to(container.clone(), move || view! { <EmptyState donate_url=donate_url /> })
        .forget();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_only_when_nothing_visible() {
        assert!(needs_placeholder(0, false));
        assert!(!needs_placeholder(1, false));
    }

    #[test]
    fn test_placeholder_applied_once() {
        assert!(!needs_placeholder(0, true));
    }
}
