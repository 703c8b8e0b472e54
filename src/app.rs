//! ShareBite Page Controller
//!
//! Binds search, claim, and donation-form behaviour onto the server-rendered page.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::task::spawn_local;
use web_sys::{Document, HtmlButtonElement, HtmlElement};

use crate::claim::{self, ClaimBook, ClaimOutcome};
use crate::config::UiConfig;
use crate::dom;
use crate::empty_state;
use crate::form_guard::DonationDraft;
use crate::models::{FoodCard, Notification};
use crate::notify;
use crate::schedule::{self, ExitPhase, TaskRegistry};
use crate::search;

struct Inner {
    config: UiConfig,
    claims: RefCell<ClaimBook>,
    removals: RefCell<TaskRegistry>,
}

/// Page-wide state shared by every handler
#[derive(Clone)]
pub struct ShareBite {
    inner: Rc<Inner>,
}

impl ShareBite {
    pub fn new(config: UiConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                claims: RefCell::new(ClaimBook::new()),
                removals: RefCell::new(TaskRegistry::new()),
            }),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.inner.config
    }

    /// Bind all handlers once the DOM is parsed
    pub fn boot() {
        let Some(document) = dom::document() else {
            return;
        };

        if document.ready_state() == "loading" {
            dom::listen(&document, "DOMContentLoaded", move |_| Self::start());
        } else {
            Self::start();
        }
    }

    fn start() {
        let Some(document) = dom::document() else {
            return;
        };

        schedule::init_executor();
        let app = Self::new(UiConfig::load(&document));
        dom::install_keyframes(&document);
        app.bind_search(&document);
        app.bind_claim_buttons(&document);
        app.bind_donate_form(&document);

        web_sys::console::log_1(&"ShareBite app loaded successfully!".into());
    }

    fn bind_search(&self, document: &Document) {
        if let Some(input) = dom::search_input(document) {
            let app = self.clone();
            let doc = document.clone();
            dom::listen(&input, "input", move |_| app.filter(&doc));
        }

        for control in dom::query_all::<HtmlElement>(document, dom::CLEAR_SEARCH_SELECTOR) {
            let app = self.clone();
            let doc = document.clone();
            dom::listen(&control, "click", move |_| app.clear_search(&doc));
        }
    }

    fn bind_claim_buttons(&self, document: &Document) {
        for button in dom::query_all::<HtmlButtonElement>(document, dom::CLAIM_BUTTON_SELECTOR) {
            let Some(id) = claim::parse_button_id(&button.id()).map(str::to_string) else {
                continue;
            };
            let app = self.clone();
            let doc = document.clone();
            dom::listen(&button, "click", move |_| app.claim(&doc, &id));
        }
    }

    fn bind_donate_form(&self, document: &Document) {
        let Ok(Some(form)) = document.query_selector(dom::DONATE_FORM_SELECTOR) else {
            return;
        };
        let app = self.clone();
        let doc = document.clone();
        dom::listen(&form, "submit", move |ev| {
            let draft = DonationDraft::read(&doc);
            if let Err(e) = draft.validate(app.config().min_food_name_len) {
                ev.prevent_default();
                app.notify(Notification::error(e.to_string()));
            }
        });
    }

    pub fn notify(&self, notification: Notification) {
        notify::show(self.config(), notification);
    }

    /// Apply the current search query to every card
    pub fn filter(&self, document: &Document) {
        let query = dom::search_input(document)
            .map(|input| input.value())
            .unwrap_or_default();

        let (elements, cards): (Vec<HtmlElement>, Vec<FoodCard>) =
            dom::food_cards(document).into_iter().unzip();
        let outcome = search::filter_cards(&query, &cards);

        for (el, visible) in elements.iter().zip(&outcome.visible) {
            dom::set_card_visible(el, *visible);
        }
        if let Some(indicator) = dom::no_results(document) {
            dom::set_shown(&indicator, outcome.show_no_results);
        }
    }

    pub fn clear_search(&self, document: &Document) {
        if let Some(input) = dom::search_input(document) {
            input.set_value("");
            self.filter(document);
        }
    }

    /// Claim listing `id`; ignored while a request for it is pending
    pub fn claim(&self, document: &Document, id: &str) {
        let Some(button) = dom::claim_button(document, id) else {
            return;
        };
        if button.disabled() || !self.inner.claims.borrow_mut().begin(id) {
            return;
        }

        dom::mark_claim_pending(&button, &self.config().labels.pending);

        let app = self.clone();
        let id = id.to_string();
        let doc = document.clone();
        spawn_local(async move {
            let url = claim::claim_url(&app.config().claim_endpoint, &id);
            let result = claim::send_claim(&url).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[Claim] Error claiming food {}: {}", id, e).into());
            }

            let outcome = ClaimOutcome::from_result(&result);
            app.inner.claims.borrow_mut().settle(&id, &outcome);
            app.finish_claim(&doc, &id, &button, outcome);
        });
    }

    fn finish_claim(&self, document: &Document, id: &str, button: &HtmlButtonElement, outcome: ClaimOutcome) {
        let labels = &self.config().labels;
        match outcome {
            ClaimOutcome::Claimed => {
                dom::mark_claim_done(button, &labels.claimed);
                let card = dom::card_of(button);
                if let Some(card) = &card {
                    let _ = card.class_list().add_1("claimed-card");
                }
                self.notify(outcome.notification(&self.config().messages));
                if let Some(card) = card {
                    self.schedule_removal(document, id, card);
                }
            }
            ClaimOutcome::Rejected { .. } | ClaimOutcome::Failed => {
                dom::reset_claim_button(button, &labels.idle);
                self.notify(outcome.notification(&self.config().messages));
            }
        }
    }

    fn schedule_removal(&self, document: &Document, id: &str, card: HtmlElement) {
        let config = self.config();
        let token = self.inner.removals.borrow_mut().register(id);
        let app = self.clone();
        let doc = document.clone();
        let id = id.to_string();
        let exit_animation = config.slide_out();

        schedule::spawn_chain(
            schedule::exit_chain(config.removal_delay_ms, config.exit_animation_ms),
            token,
            move |phase| match phase {
                ExitPhase::Leave => dom::set_animation(&card, &exit_animation),
                ExitPhase::Detach => {
                    app.inner.removals.borrow_mut().complete(&id);
                    app.inner.claims.borrow_mut().forget(&id);
                    if card.is_connected() {
                        card.remove();
                    }
                    app.check_empty_state(&doc);
                }
            },
        );
    }

    /// Show the placeholder if the last visible card is gone
    pub fn check_empty_state(&self, document: &Document) {
        let Some(container) = dom::food_container(document) else {
            return;
        };
        if empty_state::apply(&container, &self.config().donate_url) {
            let cancelled = self.drop_pending_removals();
            if cancelled > 0 {
                web_sys::console::log_1(&format!("[EmptyState] Cancelled {} pending removals", cancelled).into());
            }
        }
    }

    /// Cancel removal chains whose cards went away with the old container content
    fn drop_pending_removals(&self) -> usize {
        let ids = self.inner.removals.borrow_mut().cancel_all();
        let mut claims = self.inner.claims.borrow_mut();
        for id in &ids {
            claims.forget(id);
        }
        ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimState;

    #[test]
    fn test_placeholder_swap_forgets_claimed_items() {
        let app = ShareBite::new(UiConfig::default());
        {
            let mut claims = app.inner.claims.borrow_mut();
            claims.begin("1");
            claims.settle("1", &ClaimOutcome::Claimed);
            claims.begin("2");
            claims.settle("2", &ClaimOutcome::Claimed);
        }
        let first = app.inner.removals.borrow_mut().register("1");
        let second = app.inner.removals.borrow_mut().register("2");

        assert_eq!(app.drop_pending_removals(), 2);
        assert!(first.is_cancelled() && second.is_cancelled());
        assert_eq!(app.inner.claims.borrow().state("1"), ClaimState::Idle);
        assert_eq!(app.inner.claims.borrow().state("2"), ClaimState::Idle);
        assert_eq!(app.drop_pending_removals(), 0);
    }

    #[test]
    fn test_pending_claim_survives_placeholder_swap() {
        let app = ShareBite::new(UiConfig::default());
        app.inner.claims.borrow_mut().begin("3");
        app.drop_pending_removals();
        assert_eq!(app.inner.claims.borrow().state("3"), ClaimState::Pending);
    }
}
