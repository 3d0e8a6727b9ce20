//! Discount Cart Library
//!
//! This library provides the core functionality of a single-user shopping
//! cart: products, category and promotion discounts, totals, and the
//! interactive text session that drives them.

// Domain modules
pub mod cart;
pub mod session;

// Infrastructure
pub mod config;
pub mod telemetry;
