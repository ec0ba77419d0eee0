use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Identifier of an item within one list. Unique, assigned at add time,
/// never reassigned afterwards.
pub type ItemId = u64;

/// A named, priced entry in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: i64,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Raw form contents as read from a view. Both fields are untrimmed,
/// unvalidated user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub price: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }

    /// True when either field is empty after trimming. Submitting an add
    /// with an incomplete form is a no-op, not an error.
    pub fn is_incomplete(&self) -> bool {
        self.name.trim().is_empty() || self.price.trim().is_empty()
    }
}

/// Parse a raw price string into an integer amount.
///
/// Rejects non-numeric input instead of coercing it, so validation happens
/// before any state is touched.
pub fn parse_price(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidPrice(raw.trim().to_string()))
}
