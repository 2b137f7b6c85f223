//! Field declarations and validation for the item entry form.

use crate::forms::csrf::CsrfGuard;
use crate::models::item::{MAX_TEXT_LEN, NewItem};
use serde::Deserialize;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_NOT_INTEGER: &str = "Not a valid integer value.";

/// Raw values as posted by the browser. Every field is kept as text so a
/// malformed quantity is reported on the form instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// Field-level error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Vec<String>,
    pub quantity: Vec<String>,
    pub description: Vec<String>,
    pub csrf_token: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.quantity.is_empty()
            && self.description.is_empty()
            && self.csrf_token.is_empty()
    }
}

/// Values that passed validation, ready to be stamped and stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidItem {
    pub name: String,
    pub quantity: i64,
    pub description: String,
}

impl ValidItem {
    pub fn into_new_item(self) -> NewItem {
        NewItem::stamped(self.name, self.quantity, self.description)
    }
}

impl ItemForm {
    pub fn validate(&self, csrf: &CsrfGuard) -> Result<ValidItem, FormErrors> {
        let mut errors = FormErrors::default();

        check_text(&self.name, &mut errors.name);
        check_text(&self.description, &mut errors.description);

        let quantity = match self.quantity.trim().parse::<i64>() {
            Ok(q) => Some(q),
            Err(_) => {
                errors.quantity.push(MSG_NOT_INTEGER.to_string());
                None
            }
        };

        if let Err(e) = csrf.verify(&self.csrf_token) {
            errors.csrf_token.push(e.to_string());
        }

        match quantity {
            Some(quantity) if errors.is_empty() => Ok(ValidItem {
                name: self.name.clone(),
                quantity,
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Required, at most MAX_TEXT_LEN characters. A blank value only reports
/// the "required" message.
fn check_text(value: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(MSG_REQUIRED.to_string());
        return;
    }
    if value.chars().count() > MAX_TEXT_LEN {
        errors.push(format!(
            "Field cannot be longer than {} characters.",
            MAX_TEXT_LEN
        ));
    }
}
