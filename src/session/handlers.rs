//! Interactive session handlers
//!
//! Reads menu choices and field values from any buffered reader, turns them
//! into cart commands and writes the rendered results back out.

use super::{error::SessionError, helpers::*, models::*};
use crate::cart::{handle_command, Cart, Command, CommandOutput, DiscountStrategy, Product};
use std::io::{BufRead, Write};
use tracing::{debug, info, info_span, warn};

/// A menu-driven session over one cart
pub struct Session<R, W> {
    cart: Cart,
    input: TokenReader<R>,
    output: W,

    /// When false, menus and prompts are not written; result lines still are
    show_prompts: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session around a fresh, empty cart
    pub fn new(input: R, output: W, show_prompts: bool) -> Self {
        Self::with_cart(Cart::new(), input, output, show_prompts)
    }

    pub fn with_cart(cart: Cart, input: R, output: W, show_prompts: bool) -> Self {
        Self {
            cart,
            input: TokenReader::new(input),
            output,
            show_prompts,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Consumes the session, handing back the cart and the writer
    pub fn into_parts(self) -> (Cart, W) {
        (self.cart, self.output)
    }

    /// Runs until the user exits or the input ends.
    ///
    /// Invalid choices and malformed numbers are reported to the user and the
    /// loop continues. Only I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<(), SessionError> {
        let span = info_span!("session", cart_id = %self.cart.id());
        let _guard = span.enter();
        info!("session started");

        loop {
            let command = match self.read_command() {
                Ok(Some(command)) => command,
                Ok(None) => {
                    writeln!(self.output, "{}", INVALID_CHOICE)?;
                    continue;
                }
                Err(SessionError::EndOfInput) => {
                    info!("input ended, closing session");
                    return Ok(());
                }
                Err(err @ SessionError::InvalidNumber { .. }) => {
                    warn!(error = %err, "rejected input");
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let output = handle_command(&mut self.cart, command);
            for line in render_output(&output) {
                writeln!(self.output, "{}", line)?;
            }
            self.output.flush()?;

            if matches!(output, CommandOutput::Exit) {
                info!(products = self.cart.len(), "session finished");
                return Ok(());
            }
        }
    }

    /// Reads one menu selection and its fields.
    ///
    /// `Ok(None)` means the selection itself was not recognised.
    fn read_command(&mut self) -> Result<Option<Command>, SessionError> {
        let token = self.ask(MAIN_MENU)?;
        let Some(choice) = MenuChoice::parse(&token) else {
            warn!(choice = %token, "unknown menu choice");
            return Ok(None);
        };
        debug!(?choice, "menu choice");

        let command = match choice {
            MenuChoice::AddProduct => Command::AddProduct {
                product: self.read_product()?,
            },
            MenuChoice::ApplyDiscounts => Command::ApplyDiscounts {
                strategy: self.read_discount_strategy()?,
            },
            MenuChoice::ShowTotal => Command::ShowTotal,
            MenuChoice::ListProducts => Command::ListProducts,
            MenuChoice::Exit => Command::Exit,
        };

        Ok(Some(command))
    }

    /// Every field is read before any is parsed, so a malformed number
    /// never leaves the remaining fields to be taken as menu choices.
    fn read_product(&mut self) -> Result<Product, SessionError> {
        let name = self.ask(PROMPT_PRODUCT_NAME)?;
        let category = self.ask(PROMPT_PRODUCT_CATEGORY)?;
        let price = self.ask(PROMPT_PRODUCT_PRICE)?;
        let tax_rate = self.ask(PROMPT_TAX_RATE)?;
        let shipping_cost = self.ask(PROMPT_SHIPPING_COST)?;

        Ok(Product::new(
            name,
            category,
            parse_number("price", &price)?,
            parse_number("tax rate", &tax_rate)?,
            parse_number("shipping cost", &shipping_cost)?,
        ))
    }

    /// An unknown discount type yields `None`; the cart still re-applies
    /// the strategies it already holds.
    fn read_discount_strategy(&mut self) -> Result<Option<DiscountStrategy>, SessionError> {
        let token = self.ask(DISCOUNT_MENU)?;

        let strategy = match DiscountChoice::parse(&token) {
            Some(DiscountChoice::Category) => {
                let category = self.ask(PROMPT_DISCOUNT_CATEGORY)?;
                let rate = self.ask_rate()?;
                Some(DiscountStrategy::category(category, rate))
            }
            Some(DiscountChoice::Promotion) => {
                let code = self.ask(PROMPT_PROMOTION_CODE)?;
                let rate = self.ask_rate()?;
                Some(DiscountStrategy::promotion(code, rate))
            }
            None => {
                warn!(choice = %token, "unknown discount type, re-applying existing discounts");
                None
            }
        };

        Ok(strategy)
    }

    /// Writes `prompt` (unless prompts are off) and reads the next token.
    fn ask(&mut self, prompt: &str) -> Result<String, SessionError> {
        if self.show_prompts {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
        }

        self.input.next_token()?.ok_or(SessionError::EndOfInput)
    }

    /// The rate is the last field of a discount, so nothing is left unread
    /// when it fails to parse.
    fn ask_rate(&mut self) -> Result<f64, SessionError> {
        let token = self.ask(PROMPT_DISCOUNT_RATE)?;
        parse_number("discount rate", &token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_quiet(script: &str) -> (Cart, String) {
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), false);
        session.run().expect("session should not fail");
        let (cart, output) = session.into_parts();
        (cart, String::from_utf8(output).unwrap())
    }

    #[test]
    fn exit_stops_reading() {
        let (cart, output) = run_quiet("5\n1 Widget Tools 1 0 0\n");
        assert!(cart.is_empty());
        assert_eq!(output, "Exiting...\n");
    }

    #[test]
    fn end_of_input_mid_product_adds_nothing() {
        let (cart, output) = run_quiet("1 Widget Tools 100\n");
        assert!(cart.is_empty());
        assert_eq!(output, "");
    }

    #[test]
    fn unknown_discount_type_reapplies_existing() {
        let (cart, _) = run_quiet("1 Widget Tools 100 0 0\n2 1 Tools 0.5\n2 9\n5\n");
        assert_eq!(cart.discount_strategies().len(), 1);
        assert_eq!(cart.products()[0].price(), 25.0);
    }

    #[test]
    fn malformed_shipping_cost_consumes_whole_product() {
        let (cart, output) = run_quiet("1\nWidget\nTools\n100\n0.1\nfree\n3\n5\n");
        assert!(cart.is_empty());
        assert_eq!(output, "Invalid shipping cost: 'free'\nTotal cost: 0\nExiting...\n");
    }

    #[test]
    fn prompts_are_written_when_enabled() {
        let mut session = Session::new(Cursor::new("3\n5\n"), Vec::new(), true);
        session.run().unwrap();
        let (_, output) = session.into_parts();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with(MAIN_MENU));
        assert!(output.contains("Enter your choice: Total cost: 0\n"));
        assert!(output.ends_with("Exiting...\n"));
    }
}
