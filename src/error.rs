//! Error types for rule-table construction and diagnostics for
//! unrecognized input.
//!
//! Tokenization itself never fails: characters no rule matches are emitted
//! as [`Category::Error`] tokens. Callers that want to report them can turn
//! them into `codespan-reporting` diagnostics with
//! [`unrecognized_diagnostics`].

use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

use crate::lexer::{Category, Token};

/// Errors raised while building a [`RuleSet`](crate::lexer::RuleSet).
#[derive(Error, Debug, Clone)]
pub enum AutomathError {
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("rule `{pattern}` has {groups} capture groups but assigns {assigned} categories")]
    GroupCountMismatch {
        pattern: String,
        groups: usize,
        assigned: usize,
    },

    #[error("rule set contains no rules")]
    EmptyRuleSet,
}

pub type AutomathResult<T> = Result<T, AutomathError>;

/// One error diagnostic per unrecognized character in `tokens`.
pub fn unrecognized_diagnostics<FileId: Copy>(
    file_id: FileId,
    tokens: &[Token<'_>],
) -> Vec<Diagnostic<FileId>> {
    tokens
        .iter()
        .filter(|token| token.category == Category::Error)
        .map(|token| {
            Diagnostic::error()
                .with_message(format!("unrecognized character {:?}", token.text))
                .with_labels(vec![Label::primary(file_id, token.span.clone())
                    .with_message("no rule matches here")])
        })
        .collect()
}
