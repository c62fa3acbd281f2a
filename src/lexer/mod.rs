//! Lexical analysis module for Automath notation.
//!
//! This module splits Automath source text into classified tokens for syntax
//! highlighting. It is driven by a flat, ordered rule table: at each position
//! the first rule that matches wins, and characters no rule recognizes become
//! single-character error tokens so lexing always runs to the end of input.

#[allow(clippy::module_inception)]
mod lexer;
pub mod metadata;
mod rules;
mod token;

pub use lexer::{format_tokens, tokenize, tokenize_with, Lexer};
pub use rules::{Assignment, Dialect, Rule, RuleSet, RuleSetBuilder};
pub use token::{Category, Span, Token};
