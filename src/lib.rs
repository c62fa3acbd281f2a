//! Automath Lexer Library
//!
//! Tokenizes Automath proof notation into classified spans for syntax
//! highlighting. Rendering the tokens is left to the caller.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{AutomathError, AutomathResult};
pub use lexer::{tokenize, Assignment, Category, Dialect, Lexer, RuleSet, Span, Token};
