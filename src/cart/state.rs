//! Shopping Cart State Management
//!
//! This module owns the single in-memory cart: its products, its discount
//! strategies and the discount-application loop.

use super::helpers::get_or_create_cart_id;
use super::models::{CartEvent, DiscountStrategy, Product, ProductSnapshot};
use tracing::{debug, info};

// =============================================================================
// Cart
// =============================================================================

/// The aggregate owning products and active discount strategies
///
/// Both collections are append-only and keep insertion order.
#[derive(Debug, Clone)]
pub struct Cart {
    /// Identifier used to correlate log records
    id: String,

    products: Vec<Product>,

    /// Every strategy is re-applied on each call to [`Cart::apply_discounts`]
    strategies: Vec<DiscountStrategy>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates an empty cart with a freshly generated identifier
    pub fn new() -> Self {
        Self::with_id(get_or_create_cart_id(None))
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            products: Vec::new(),
            strategies: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn discount_strategies(&self) -> &[DiscountStrategy] {
        &self.strategies
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Appends a product and returns the `ProductAdded` notification
    pub fn add_product(&mut self, product: Product) -> CartEvent {
        let event = CartEvent::ProductAdded {
            name: product.name().to_string(),
        };
        self.products.push(product);

        info!(cart_id = %self.id, products = self.products.len(), "{}", event);
        event
    }

    /// Appends a discount strategy. Nothing is applied until
    /// [`Cart::apply_discounts`] runs.
    pub fn add_discount_strategy(&mut self, strategy: DiscountStrategy) {
        debug!(cart_id = %self.id, ?strategy, "discount strategy registered");
        self.strategies.push(strategy);
    }

    /// Applies every strategy to every product, products outer, strategies inner.
    ///
    /// Prices are mutated in place, so calling this again compounds the
    /// discounts. Events are returned in application order.
    pub fn apply_discounts(&mut self) -> Vec<CartEvent> {
        let mut events = Vec::new();

        for product in self.products.iter_mut() {
            for strategy in &self.strategies {
                if let Some(event) = strategy.apply_discount(product) {
                    info!(cart_id = %self.id, "{}", event);
                    events.push(event);
                }
            }
        }

        events
    }

    /// Sum of every product's total cost; `0.0` for an empty cart
    pub fn total_cost(&self) -> f64 {
        self.products.iter().map(Product::total_cost).sum()
    }

    pub fn list_products(&self) -> Vec<ProductSnapshot> {
        self.products.iter().map(Product::snapshot).collect()
    }
}
