//! Session Input and Rendering Helpers
//!
//! Tokenizing user input, parsing numeric fields and turning command
//! outputs into display lines.

use super::error::SessionError;
use crate::cart::{
    handlers::CommandOutput,
    helpers::{format_amount, format_product_line},
};
use std::{collections::VecDeque, io::BufRead};

/// Splits a line-oriented reader into whitespace-delimited tokens.
///
/// Tokens may be spread over several lines or share a single line.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next token, or `None` once the reader is exhausted.
    pub fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Parses a numeric field. Any value `f64` accepts is taken, including
/// negatives and exponents. No range checks.
pub fn parse_number(field: &'static str, input: &str) -> Result<f64, SessionError> {
    input
        .parse::<f64>()
        .map_err(|_| SessionError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}

/// Produces the display lines for a command output.
pub fn render_output(output: &CommandOutput) -> Vec<String> {
    match output {
        CommandOutput::Events(events) => events.iter().map(ToString::to_string).collect(),
        CommandOutput::Total(total) => vec![format!("Total cost: {}", format_amount(*total))],
        CommandOutput::Products(products) => products.iter().map(format_product_line).collect(),
        CommandOutput::Exit => vec![super::models::EXITING.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn tokens_cross_line_boundaries() {
        let mut reader = TokenReader::new(Cursor::new("1 Widget\n\n  Tools 100\n"));
        let mut tokens = Vec::new();
        while let Some(token) = reader.next_token().unwrap() {
            tokens.push(token);
        }
        assert_eq!(tokens, vec!["1", "Widget", "Tools", "100"]);
    }

    #[test]
    fn parse_number_reports_field() {
        assert_eq!(parse_number("price", "-2.5").unwrap(), -2.5);
        let err = parse_number("price", "ten").unwrap_err();
        assert_eq!(err.to_string(), "Invalid price: 'ten'");
    }

    #[test]
    fn renders_total_and_exit() {
        assert_eq!(render_output(&CommandOutput::Total(0.0)), vec!["Total cost: 0"]);
        assert_eq!(render_output(&CommandOutput::Exit), vec!["Exiting..."]);
        assert!(render_output(&CommandOutput::Events(Vec::new())).is_empty());
    }
}
