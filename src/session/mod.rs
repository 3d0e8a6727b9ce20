//! Interactive Session Module
//!
//! The text front end of the cart, including:
//! - Menu choices and prompt text
//! - Input tokenizing, number parsing and output rendering
//! - The session loop driving the command dispatcher

pub mod error;
pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types
pub use error::SessionError;
pub use handlers::Session;
