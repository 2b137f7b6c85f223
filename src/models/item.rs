use chrono::{DateTime, Local};
use serde::Serialize;

/// Maximum length (in characters) of the `name` and `description` columns.
pub const MAX_TEXT_LEN: usize = 256;

/// One stored inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,                             // ⇔ items.id (INTEGER PRIMARY KEY)
    pub name: String,                        // ⇔ items.name (VARCHAR(256))
    pub quantity: i64,                       // ⇔ items.quantity (INTEGER)
    pub description: String,                 // ⇔ items.description (VARCHAR(256))
    pub date_added: Option<DateTime<Local>>, // ⇔ items.date_added (TEXT, RFC 3339; NULL in old rows)
}

/// An item that has passed form validation but has no row yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: i64,
    pub description: String,
    pub date_added: DateTime<Local>,
}

impl NewItem {
    /// Build a row stamped with the server clock at this instant.
    pub fn stamped(name: String, quantity: i64, description: String) -> Self {
        Self {
            name,
            quantity,
            description,
            date_added: Local::now(),
        }
    }
}

impl Item {
    pub fn as_listing_tuple(&self) -> (&str, i64, &str) {
        (&self.name, self.quantity, &self.description)
    }
}
