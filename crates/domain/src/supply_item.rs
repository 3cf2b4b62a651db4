//! Supply item — a single inventory row (name, quantity, unit) plus the
//! name-based merge policy used by the stock view.

use serde::{Deserialize, Serialize};

use crate::error::{StockError, ValidationError};
use crate::id::ItemId;

/// One tracked supply, e.g. flour in grams or butter in kilograms.
///
/// Serialized with the Spanish field names the backend has always spoken
/// (`nombre`, `cantidad`, `unidad`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyItem {
    pub id: ItemId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "unidad")]
    pub unit: String,
}

impl SupplyItem {
    /// Create a builder for constructing a [`SupplyItem`].
    #[must_use]
    pub fn builder() -> SupplyItemBuilder {
        SupplyItemBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Validation`] when `name` is empty or
    /// `quantity` is not positive.
    pub fn validate(&self) -> Result<(), StockError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.quantity <= 0 {
            return Err(ValidationError::NonPositiveQuantity.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`SupplyItem`].
#[derive(Debug, Default)]
pub struct SupplyItemBuilder {
    id: Option<ItemId>,
    name: Option<String>,
    quantity: Option<i64>,
    unit: Option<String>,
}

impl SupplyItemBuilder {
    #[must_use]
    pub fn id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Consume the builder, validate, and return a [`SupplyItem`].
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Validation`] if `name` is missing or empty,
    /// or `quantity` is missing or not positive.
    pub fn build(self) -> Result<SupplyItem, StockError> {
        let item = SupplyItem {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            quantity: self.quantity.unwrap_or_default(),
            unit: self.unit.unwrap_or_default(),
        };
        item.validate()?;
        Ok(item)
    }
}

/// Direction of a stock adjustment submitted through the view forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Add the submitted amount to an existing quantity.
    Add,
    /// Subtract the submitted amount from an existing quantity.
    ///
    /// The result is not clamped at zero; the backend rejects a
    /// non-positive total instead.
    Subtract,
}

impl Adjustment {
    /// Compute the new total for an existing item.
    #[must_use]
    pub fn apply(self, current: i64, amount: i64) -> i64 {
        match self {
            Self::Add => current + amount,
            Self::Subtract => current - amount,
        }
    }
}

/// Look up an item by exact name match.
///
/// This is the merge policy of the stock view: a match means "the same
/// supply", so the submitted amount is folded into the existing row
/// instead of creating a duplicate. At most one item per distinct name
/// is assumed; the first match wins.
#[must_use]
pub fn find_by_name<'a>(items: &'a [SupplyItem], name: &str) -> Option<&'a SupplyItem> {
    items.iter().find(|item| item.name == name)
}
