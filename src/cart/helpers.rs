//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::ProductSnapshot;
use uuid::Uuid;

/// Significant digits used when rendering amounts, same as default stream output.
const AMOUNT_SIGNIFICANT_DIGITS: i32 = 6;

/// Returns the provided `cart_id` or creates a new UUID string when `None`.
///
/// This guarantees that every cart works with a non-empty identifier.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Price after taking `rate` off. No bounds: rates above one go negative.
pub fn discounted_price(price: f64, rate: f64) -> f64 {
    price * (1.0 - rate)
}

/// Renders an amount with at most six significant digits, trailing zeros trimmed.
///
/// Example output: `115`, `0.1`, `33.3333`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (AMOUNT_SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    let rendered = format!("{:.*}", decimals, value);

    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

/// Produces the one-line listing for a product.
///
/// Example output:
/// `"Product: Widget, Category: Tools, Price: 100, Tax Rate: 0.1, Shipping Cost: 5, Total Cost: 115"`.
pub fn format_product_line(product: &ProductSnapshot) -> String {
    format!(
        "Product: {}, Category: {}, Price: {}, Tax Rate: {}, Shipping Cost: {}, Total Cost: {}",
        product.name,
        product.category,
        format_amount(product.price),
        format_amount(product.tax_rate),
        format_amount(product.shipping_cost),
        format_amount(product.total_cost)
    )
}
