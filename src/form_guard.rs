//! Donation Form Guard
//!
//! Required-field checks before the donation form may post. The server
//! validates again; this only saves a round trip.

use thiserror::Error;
use web_sys::Document;

use crate::dom;

pub const FOOD_NAME_ID: &str = "food_name";
pub const QUANTITY_ID: &str = "quantity";
pub const LOCATION_ID: &str = "location";
pub const CONTACT_INFO_ID: &str = "contact_info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Food name must be at least {min} characters long.")]
    NameTooShort { min: usize },
}

/// Trimmed donation form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationDraft {
    pub food_name: String,
    pub quantity: String,
    pub location: String,
    pub contact_info: String,
}

impl DonationDraft {
    pub fn new(food_name: &str, quantity: &str, location: &str, contact_info: &str) -> Self {
        Self {
            food_name: food_name.trim().to_string(),
            quantity: quantity.trim().to_string(),
            location: location.trim().to_string(),
            contact_info: contact_info.trim().to_string(),
        }
    }

    pub fn read(document: &Document) -> Self {
        Self {
            food_name: dom::field_value(document, FOOD_NAME_ID),
            quantity: dom::field_value(document, QUANTITY_ID),
            location: dom::field_value(document, LOCATION_ID),
            contact_info: dom::field_value(document, CONTACT_INFO_ID),
        }
    }

    pub fn validate(&self, min_name_len: usize) -> Result<(), FormError> {
        let fields = [&self.food_name, &self.quantity, &self.location, &self.contact_info];
        if fields.iter().any(|f| f.is_empty()) {
            return Err(FormError::MissingFields);
        }
        if self.food_name.chars().count() < min_name_len {
            return Err(FormError::NameTooShort { min: min_name_len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_form_passes() {
        let draft = DonationDraft::new("Rice", "2 kg", "Midtown", "555-0100");
        assert_eq!(draft.validate(3), Ok(()));
    }

    #[test]
    fn test_empty_contact_blocks() {
        let draft = DonationDraft::new("Rice", "2 kg", "Midtown", "");
        let err = draft.validate(3).unwrap_err();
        assert_eq!(err, FormError::MissingFields);
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let draft = DonationDraft::new("Rice", "   ", "Midtown", "555-0100");
        assert_eq!(draft.validate(3), Err(FormError::MissingFields));
    }

    #[test]
    fn test_missing_fields_checked_before_length() {
        let draft = DonationDraft::new("Ri", "", "Midtown", "555-0100");
        assert_eq!(draft.validate(3), Err(FormError::MissingFields));
    }

    #[test]
    fn test_short_name_after_trim() {
        let draft = DonationDraft::new("  Pi  ", "1", "Downtown", "me@example.com");
        let err = draft.validate(3).unwrap_err();
        assert_eq!(err, FormError::NameTooShort { min: 3 });
        assert_eq!(err.to_string(), "Food name must be at least 3 characters long.");
    }

    #[test]
    fn test_name_length_counts_characters() {
        let draft = DonationDraft::new("粥饭面", "1", "Downtown", "me@example.com");
        assert_eq!(draft.validate(3), Ok(()));
    }
}
