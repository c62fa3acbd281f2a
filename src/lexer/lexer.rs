//! The rule-driven lexer.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::rules::{Dialect, RuleSet};
use super::token::{Category, Token};

/// Lexer over a single Automath document.
///
/// Produces tokens lazily. Every character of the input ends up in exactly
/// one token, so the token texts concatenate back to the input. A lexer is
/// consumed once; lex the text again with a fresh instance.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    rules: RuleSet,
    cursor: usize,
    pending: VecDeque<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer using the standard rule table.
    pub fn new(input: &'a str) -> Self {
        Self::with_rules(input, RuleSet::default())
    }

    pub fn with_dialect(input: &'a str, dialect: Dialect) -> Self {
        Self::with_rules(input, RuleSet::for_dialect(dialect).clone())
    }

    pub fn with_rules(input: &'a str, rules: RuleSet) -> Self {
        Self {
            input,
            rules,
            cursor: 0,
            pending: VecDeque::new(),
        }
    }

    /// Byte offset of the next unlexed character.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.pop_front() {
            return Some(token);
        }
        if self.cursor >= self.input.len() {
            return None;
        }

        self.advance();
        self.pending.pop_front()
    }

    /// Collect all remaining tokens.
    pub fn collect_tokens(self) -> Vec<Token<'a>> {
        self.collect()
    }

    fn advance(&mut self) {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(len) = rule.try_match(self.input, self.cursor, &mut self.pending) {
                log::trace!(
                    "rule {} `{}` matched {}..{}",
                    index,
                    rule.pattern(),
                    self.cursor,
                    self.cursor + len
                );
                self.cursor += len;
                return;
            }
        }

        // No rule matched: emit one character as an error token.
        let start = self.cursor;
        let Some(ch) = self.input[start..].chars().next() else {
            return;
        };
        let end = start + ch.len_utf8();
        log::debug!("unrecognized character {:?} at offset {}", ch, start);
        self.pending
            .push_back(Token::new(Category::Error, start..end, &self.input[start..end]));
        self.cursor = end;
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every token is non-empty.
        let remaining = self.input.len() - self.cursor;
        let lower = self.pending.len() + usize::from(remaining > 0);
        (lower, Some(self.pending.len() + remaining))
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenize source text with the standard rule table.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Tokenize source text with a custom rule table.
pub fn tokenize_with<'a>(input: &'a str, rules: &RuleSet) -> Vec<Token<'a>> {
    Lexer::with_rules(input, rules.clone()).collect()
}

/// For debugging: render a token stream one token per line.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|t| format!("{} @ {:?}: {:?}", t.category, t.span, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
