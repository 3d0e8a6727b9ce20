//! Command dispatch for shopping cart operations
//!
//! Every user action reaches the cart as a parsed [`Command`] and comes back
//! as a [`CommandOutput`] for the front end to render. Input parsing never
//! happens here.

use super::{models::*, state::Cart};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A fully parsed user action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    AddProduct { product: Product },
    /// Registers `strategy` (if any) and then re-applies every strategy in the cart
    ApplyDiscounts { strategy: Option<DiscountStrategy> },
    ShowTotal,
    ListProducts,
    Exit,
}

impl Command {
    /// Short name used in log records
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddProduct { .. } => "add_product",
            Command::ApplyDiscounts { .. } => "apply_discounts",
            Command::ShowTotal => "show_total",
            Command::ListProducts => "list_products",
            Command::Exit => "exit",
        }
    }
}

/// Display payload produced by a command
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "output", content = "data", rename_all = "camelCase")]
pub enum CommandOutput {
    Events(Vec<CartEvent>),
    Total(f64),
    Products(Vec<ProductSnapshot>),
    Exit,
}

/// Runs `command` against `cart`.
pub fn handle_command(cart: &mut Cart, command: Command) -> CommandOutput {
    info!(cart_id = %cart.id(), command = command.name(), "dispatching command");

    match command {
        Command::AddProduct { product } => CommandOutput::Events(vec![cart.add_product(product)]),
        Command::ApplyDiscounts { strategy } => handle_apply_discounts(cart, strategy),
        Command::ShowTotal => CommandOutput::Total(cart.total_cost()),
        Command::ListProducts => CommandOutput::Products(cart.list_products()),
        Command::Exit => CommandOutput::Exit,
    }
}

fn handle_apply_discounts(cart: &mut Cart, strategy: Option<DiscountStrategy>) -> CommandOutput {
    if let Some(strategy) = strategy {
        cart.add_discount_strategy(strategy);
    }

    CommandOutput::Events(cart.apply_discounts())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_product_reports_event() {
        let mut cart = Cart::new();
        let output = handle_command(
            &mut cart,
            Command::AddProduct {
                product: Product::new("Widget", "Tools", 100.0, 0.1, 5.0),
            },
        );

        assert_eq!(
            output,
            CommandOutput::Events(vec![CartEvent::ProductAdded {
                name: "Widget".into()
            }])
        );
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn apply_without_new_strategy_reapplies_existing_ones() {
        let mut cart = Cart::new();
        cart.add_product(Product::new("Widget", "Tools", 100.0, 0.0, 0.0));
        handle_command(
            &mut cart,
            Command::ApplyDiscounts {
                strategy: Some(DiscountStrategy::category("Tools", 0.5)),
            },
        );
        let output = handle_command(&mut cart, Command::ApplyDiscounts { strategy: None });

        assert_eq!(cart.discount_strategies().len(), 1);
        assert_eq!(cart.products()[0].price(), 25.0);
        match output {
            CommandOutput::Events(events) => assert_eq!(events.len(), 1),
            other => panic!("unexpected output: {other:?}"),
        }
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut cart = Cart::new();
        cart.add_product(Product::new("Widget", "Tools", 10.0, 0.0, 2.0));

        assert_eq!(handle_command(&mut cart, Command::ShowTotal), CommandOutput::Total(12.0));
        let listed = handle_command(&mut cart, Command::ListProducts);
        assert_eq!(listed, CommandOutput::Products(cart.list_products()));
        assert_eq!(handle_command(&mut cart, Command::Exit), CommandOutput::Exit);
        assert_eq!(cart.products()[0].price(), 10.0);
    }
}
