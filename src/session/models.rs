//! Session Menus and Prompts
//!
//! This module contains the menu choices and the fixed prompt text of the
//! interactive session.

// =============================================================================
// Prompt Text
// =============================================================================

/// Main menu, printed before every choice
pub const MAIN_MENU: &str = "1. Add product\n2. Apply discounts\n3. Calculate total cost\n4. List products\n5. Exit\nEnter your choice: ";
/// Discount type sub-menu
pub const DISCOUNT_MENU: &str =
    "Choose discount type:\n1. Category Discount\n2. Promotion Discount\nEnter your choice: ";

pub const PROMPT_PRODUCT_NAME: &str = "Enter product name: ";
pub const PROMPT_PRODUCT_CATEGORY: &str = "Enter product category: ";
pub const PROMPT_PRODUCT_PRICE: &str = "Enter product price: ";
pub const PROMPT_TAX_RATE: &str = "Enter tax rate (decimal): ";
pub const PROMPT_SHIPPING_COST: &str = "Enter shipping cost: ";
pub const PROMPT_DISCOUNT_CATEGORY: &str = "Enter category for discount: ";
pub const PROMPT_PROMOTION_CODE: &str = "Enter promotion code: ";
pub const PROMPT_DISCOUNT_RATE: &str = "Enter discount rate (decimal): ";

pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const EXITING: &str = "Exiting...";

// =============================================================================
// Menu Choices
// =============================================================================

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddProduct,
    ApplyDiscounts,
    ShowTotal,
    ListProducts,
    Exit,
}

impl MenuChoice {
    /// Maps a whole input token to a menu entry
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::AddProduct),
            "2" => Some(Self::ApplyDiscounts),
            "3" => Some(Self::ShowTotal),
            "4" => Some(Self::ListProducts),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Entries of the discount type sub-menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountChoice {
    Category,
    Promotion,
}

impl DiscountChoice {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Category),
            "2" => Some(Self::Promotion),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_tokens_must_match_exactly() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddProduct));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("12"), None);
        assert_eq!(MenuChoice::parse("x"), None);
    }

    #[test]
    fn discount_tokens() {
        assert_eq!(DiscountChoice::parse("2"), Some(DiscountChoice::Promotion));
        assert_eq!(DiscountChoice::parse("3"), None);
    }
}
