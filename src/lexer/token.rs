//! Token model: categories, spans and classified tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range of a token in the input text.
pub type Span = std::ops::Range<usize>;

/// Semantic class assigned to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Generic text: whitespace, newlines and bracketed binders
    Text,
    Operator,
    ClassName,
    PseudoKeyword,
    FunctionName,
    VariableName,
    /// `#` line comment
    Comment,
    /// `{ ... }` block comment
    MultilineComment,
    /// A character no rule could classify
    Error,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Text,
        Category::Operator,
        Category::ClassName,
        Category::PseudoKeyword,
        Category::FunctionName,
        Category::VariableName,
        Category::Comment,
        Category::MultilineComment,
        Category::Error,
    ];

    /// Dotted token type name used by Pygments-style highlighters.
    pub fn pygments_name(self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Operator => "Operator",
            Category::ClassName => "Name.Class",
            Category::PseudoKeyword => "Keyword.Pseudo",
            Category::FunctionName => "Name.Function",
            Category::VariableName => "Name.Variable",
            Category::Comment => "Comment",
            Category::MultilineComment => "Comment.Multiline",
            Category::Error => "Error",
        }
    }

    /// Short CSS class used by HTML highlighters. Plain text has none.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Text => "",
            Category::Operator => "o",
            Category::ClassName => "nc",
            Category::PseudoKeyword => "kp",
            Category::FunctionName => "nf",
            Category::VariableName => "nv",
            Category::Comment => "c",
            Category::MultilineComment => "cm",
            Category::Error => "err",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pygments_name())
    }
}

/// A classified slice of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub category: Category,
    pub span: Span,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub(crate) fn new(category: Category, span: Span, text: &'a str) -> Self {
        debug_assert_eq!(span.len(), text.len());
        Self {
            category,
            span,
            text,
        }
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.category == Category::Error
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.category, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(Category::ClassName.to_string(), "Name.Class");
        assert_eq!(Category::PseudoKeyword.pygments_name(), "Keyword.Pseudo");
        assert_eq!(Category::MultilineComment.css_class(), "cm");
        assert_eq!(Category::Text.css_class(), "");
    }

    #[test]
    fn test_css_classes_are_distinct() {
        let mut classes: Vec<_> = Category::ALL.iter().map(|c| c.css_class()).collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), Category::ALL.len());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(Category::VariableName, 4..7, "imp");
        assert_eq!(token.to_string(), "Name.Variable \"imp\"");
        assert_eq!(token.len(), 3);
        assert!(!token.is_error());
    }
}
