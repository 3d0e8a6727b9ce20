//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain: products, discount strategies and the events the cart
//! emits while it is being mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::helpers::{discounted_price, format_amount};

// =============================================================================
// Product
// =============================================================================

/// A priced catalog entry with tax and shipping components
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    name: String,
    category: String,
    price: f64,
    tax_rate: f64,
    shipping_cost: f64,
}

impl Product {
    /// Creates a product. Values are taken as-is; nothing is validated.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        tax_rate: f64,
        shipping_cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
            tax_rate,
            shipping_cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn shipping_cost(&self) -> f64 {
        self.shipping_cost
    }

    /// Price plus tax plus shipping, computed from the current price.
    pub fn total_cost(&self) -> f64 {
        self.price + (self.price * self.tax_rate) + self.shipping_cost
    }

    /// Overwrites the price unconditionally.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Captures the current state of the product for display.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price,
            tax_rate: self.tax_rate,
            shipping_cost: self.shipping_cost,
            total_cost: self.total_cost(),
        }
    }
}

/// Read-only view of a product, including its derived total cost
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub tax_rate: f64,
    pub shipping_cost: f64,
    pub total_cost: f64,
}

// =============================================================================
// Discount Strategies
// =============================================================================

/// A rule that reduces a product's price
///
/// Rates are fractions and are not range-checked: a rate of `1.0` zeroes the
/// price and anything above it makes the price negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DiscountStrategy {
    /// Discounts products whose category matches exactly (case-sensitive)
    Category { category: String, rate: f64 },

    /// Discounts every product. The code is kept for display only and is
    /// never matched against anything.
    Promotion { code: String, rate: f64 },
}

impl DiscountStrategy {
    pub fn category(category: impl Into<String>, rate: f64) -> Self {
        Self::Category {
            category: category.into(),
            rate,
        }
    }

    pub fn promotion(code: impl Into<String>, rate: f64) -> Self {
        Self::Promotion {
            code: code.into(),
            rate,
        }
    }

    pub fn kind(&self) -> DiscountKind {
        match self {
            Self::Category { .. } => DiscountKind::Category,
            Self::Promotion { .. } => DiscountKind::Promotion,
        }
    }

    pub fn rate(&self) -> f64 {
        match self {
            Self::Category { rate, .. } | Self::Promotion { rate, .. } => *rate,
        }
    }

    /// Applies the discount to `product` in place.
    ///
    /// Returns the notification event when the price was changed, `None`
    /// when the strategy does not target this product.
    pub fn apply_discount(&self, product: &mut Product) -> Option<CartEvent> {
        if let Self::Category { category, .. } = self {
            if product.category() != category.as_str() {
                return None;
            }
        }

        let new_price = discounted_price(product.price(), self.rate());
        product.set_price(new_price);

        Some(CartEvent::DiscountApplied {
            name: product.name().to_string(),
            kind: self.kind(),
            new_price,
        })
    }
}

/// Which flavour of discount produced an event
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DiscountKind {
    Category,
    Promotion,
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountKind::Category => write!(f, "category"),
            DiscountKind::Promotion => write!(f, "promotion"),
        }
    }
}

// =============================================================================
// Events
// =============================================================================

/// Notification emitted when the cart changes
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum CartEvent {
    ProductAdded {
        name: String,
    },
    #[serde(rename_all = "camelCase")]
    DiscountApplied {
        name: String,
        kind: DiscountKind,
        new_price: f64,
    },
}

impl fmt::Display for CartEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartEvent::ProductAdded { name } => write!(f, "{} added to cart.", name),
            CartEvent::DiscountApplied {
                name,
                kind,
                new_price,
            } => write!(
                f,
                "{} has {} discount applied: new price {}",
                name,
                kind,
                format_amount(*new_price)
            ),
        }
    }
}
