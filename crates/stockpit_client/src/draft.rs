//! The creation-form draft and its coercion into a wire payload.

use thiserror::Error;

use crate::types::NewProduct;

/// Raw text captured from the creation form, one entry per input.
///
/// Every field stays an unparsed string while the user types, including the
/// numeric ones. Coercion happens in [`ProductDraft::to_payload`] at
/// submission time, so intermediate states like `"1."` or `""` are legal to
/// hold and only fail when submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
}

/// Names one draft field so a single input can be replaced without
/// restating the rest of the draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Price,
    Quantity,
}

/// A draft field that could not be coerced to its wire type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftParseError {
    #[error("price {0:?} is not a decimal number")]
    Price(String),
    #[error("quantity {0:?} is not a whole number")]
    Quantity(String),
}

impl ProductDraft {
    /// Replace one field, leaving the others untouched.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Name => self.name = value,
            DraftField::Description => self.description = value,
            DraftField::Price => self.price = value,
            DraftField::Quantity => self.quantity = value,
        }
    }

    /// Build the creation payload: text fields copied verbatim, `price`
    /// parsed as a decimal number and `quantity` as a non-negative integer.
    pub fn to_payload(&self) -> Result<NewProduct, DraftParseError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| DraftParseError::Price(self.price.clone()))?;
        let quantity = self
            .quantity
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftParseError::Quantity(self.quantity.clone()))?;

        Ok(NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            quantity,
        })
    }
}
