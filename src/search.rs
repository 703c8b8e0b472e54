//! Search Filter
//!
//! Case-insensitive substring match of the query against card name and location.

use crate::models::FoodCard;

/// Result of filtering a card list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// One flag per input card, same order
    pub visible: Vec<bool>,
    /// Whether `#noResults` should be shown
    pub show_no_results: bool,
}

impl FilterOutcome {
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

/// Check a single card against an already lower-cased query
pub fn card_matches(query: &str, card: &FoodCard) -> bool {
    if query.is_empty() {
        return true;
    }
    card.name.to_lowercase().contains(query) || card.location.to_lowercase().contains(query)
}

/// Decide visibility for every card and the empty-results indicator
pub fn filter_cards(query: &str, cards: &[FoodCard]) -> FilterOutcome {
    let query = query.to_lowercase();
    let visible: Vec<bool> = cards.iter().map(|card| card_matches(&query, card)).collect();
    let any_visible = visible.iter().any(|v| *v);

    FilterOutcome {
        visible,
        show_no_results: !any_visible && !query.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cards() -> Vec<FoodCard> {
        vec![
            FoodCard::new("Banana Bread", "Downtown"),
            FoodCard::new("Apple Pie", "Banana Street"),
            FoodCard::new("Rice", "Midtown"),
        ]
    }

    #[test]
    fn test_banana_matches_name_and_location() {
        let outcome = filter_cards("banana", &sample_cards());
        assert_eq!(outcome.visible, vec![true, true, false]);
        assert!(!outcome.show_no_results);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let outcome = filter_cards("MIDTOWN", &sample_cards());
        assert_eq!(outcome.visible, vec![false, false, true]);
    }

    #[test]
    fn test_no_match_shows_indicator() {
        let outcome = filter_cards("pizza", &sample_cards());
        assert_eq!(outcome.visible_count(), 0);
        assert!(outcome.show_no_results);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let outcome = filter_cards("", &sample_cards());
        assert_eq!(outcome.visible_count(), 3);
        assert!(!outcome.show_no_results);

        // No cards at all with an empty query still keeps the indicator hidden
        let outcome = filter_cards("", &[]);
        assert!(!outcome.show_no_results);
    }

    #[test]
    fn test_clearing_restores_and_is_idempotent() {
        let cards = sample_cards();
        let first = filter_cards("town", &cards);
        let second = filter_cards("town", &cards);
        assert_eq!(first, second);
        assert_eq!(first.visible, vec![true, false, true]);

        let cleared = filter_cards("", &cards);
        assert!(cleared.visible.iter().all(|v| *v));
        assert!(!cleared.show_no_results);
    }

    #[test]
    fn test_visibility_matches_substring_rule() {
        let cards = sample_cards();
        for query in ["", "a", "an", "ice", "street", "x", "Bread", " "] {
            let outcome = filter_cards(query, &cards);
            let q = query.to_lowercase();
            for (card, shown) in cards.iter().zip(&outcome.visible) {
                let expected = q.is_empty()
                    || card.name.to_lowercase().contains(&q)
                    || card.location.to_lowercase().contains(&q);
                assert_eq!(*shown, expected, "query {:?} card {:?}", query, card.name);
            }
            assert_eq!(outcome.show_no_results, outcome.visible_count() == 0 && !q.is_empty());
        }
    }
}
