//! Shopping list item model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::ItemError;

/// The full ordered list of items, insertion order preserved
pub type Collection = Vec<Item>;

/// A named, quantified entry in the shopping list.
///
/// Fields other than `name` and `quantity` are kept in `extra` and written
/// back untouched. `quantity` stays a JSON number so `2` is not turned into `2.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub quantity: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Create an item without extra fields
    pub fn new(name: impl Into<String>, quantity: impl Into<Number>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            extra: Map::new(),
        }
    }

    /// Build an item from an arbitrary JSON value, applying the validation rules.
    ///
    /// The value must be an object with a non-empty string `name` and a
    /// numeric `quantity` strictly greater than zero. Every other key is kept.
    pub fn from_json(value: Value) -> Result<Self, ItemError> {
        let Value::Object(mut fields) = value else {
            return Err(ItemError::NotAnObject);
        };

        let name = match fields.shift_remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            _ => return Err(ItemError::InvalidName),
        };

        let quantity = match fields.shift_remove("quantity") {
            Some(Value::Number(quantity)) if is_positive(&quantity) => quantity,
            _ => return Err(ItemError::InvalidQuantity),
        };

        Ok(Self {
            name,
            quantity,
            extra: fields,
        })
    }

    /// Check the item invariants
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.name.is_empty() {
            return Err(ItemError::InvalidName);
        }
        validate_quantity(&self.quantity)
    }
}

/// Check that a quantity is strictly greater than zero
pub fn validate_quantity(quantity: &Number) -> Result<(), ItemError> {
    if is_positive(quantity) {
        Ok(())
    } else {
        Err(ItemError::InvalidQuantity)
    }
}

fn is_positive(quantity: &Number) -> bool {
    quantity.as_f64().is_some_and(|q| q > 0.0)
}
