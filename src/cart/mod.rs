//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Product, DiscountStrategy, events)
//! - Business logic helpers (discount math, formatting)
//! - Cart state and the discount-application loop
//! - Command dispatch

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::{handle_command, Command, CommandOutput};
pub use models::{CartEvent, DiscountKind, DiscountStrategy, Product, ProductSnapshot};
pub use state::Cart;
