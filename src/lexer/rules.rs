//! Ordered pattern/category rule tables.
//!
//! A [`RuleSet`] is a flat list of rules tried in declaration order at the
//! lexer cursor. The first rule whose pattern matches starting exactly at the
//! cursor wins; there is no longest-match re-ordering.

use regex::Regex;
use std::collections::VecDeque;
use std::sync::{Arc, LazyLock};

use super::token::{Category, Token};
use crate::error::{AutomathError, AutomathResult};

const IDENTIFIER: &str = r"([a-zA-Z0-9_'`-]+)";
const TYPE_IDENTIFIER: &str = r"([a-zA-Z0-9_'`\[\]:,-]+)";
const SEPARATOR: &str = r"('E'|;|:)";
const ASSIGNMENT: &str = r"(:=)";
// ASCII whitespace only: [ \t\n\v\f\r]
const SPACE: &str = r"(?-u:\s)";
const WS: &str = r"((?-u:\s)*)";

/// How the categories of a rule are spread over its match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    /// The whole match becomes a single token.
    WholeMatch(Category),
    /// One category per capture group, in group order.
    Groups(Vec<Category>),
}

/// Built-in rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    Standard,
    /// Standard plus a `+`/`-` operator at the start of a line
    Signed,
}

/// A compiled rule.
#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    regex: Regex,
    assignment: Assignment,
    line_start: bool,
}

impl Rule {
    fn compile(source: String, assignment: Assignment, line_start: bool) -> AutomathResult<Self> {
        // Anchor at the start of the remaining input.
        let regex = Regex::new(&format!(r"\A(?:{})", source)).map_err(|err| {
            AutomathError::InvalidPattern {
                pattern: source.clone(),
                source: err,
            }
        })?;

        if let Assignment::Groups(categories) = &assignment {
            let groups = regex.captures_len() - 1;
            if groups != categories.len() {
                return Err(AutomathError::GroupCountMismatch {
                    pattern: source,
                    groups,
                    assigned: categories.len(),
                });
            }
        }

        Ok(Self {
            source,
            regex,
            assignment,
            line_start,
        })
    }

    /// The pattern as written, without the cursor anchor.
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// Whether the rule only applies at offset 0 or right after a newline.
    pub fn is_line_start(&self) -> bool {
        self.line_start
    }

    /// Try the rule at `offset`, pushing the produced tokens onto `out`.
    ///
    /// Returns the length of the whole match. Empty matches count as no match
    /// so the caller always makes progress.
    pub(crate) fn try_match<'a>(
        &self,
        input: &'a str,
        offset: usize,
        out: &mut VecDeque<Token<'a>>,
    ) -> Option<usize> {
        if self.line_start && offset > 0 && input.as_bytes()[offset - 1] != b'\n' {
            return None;
        }

        let rest = &input[offset..];
        match &self.assignment {
            Assignment::WholeMatch(category) => {
                let m = self.regex.find(rest)?;
                if m.is_empty() {
                    return None;
                }
                out.push_back(Token::new(
                    *category,
                    offset..offset + m.end(),
                    m.as_str(),
                ));
                Some(m.end())
            }
            Assignment::Groups(categories) => {
                let captures = self.regex.captures(rest)?;
                let whole = captures.get(0)?;
                if whole.is_empty() {
                    return None;
                }

                let mut push = |category: Category, start: usize, end: usize| {
                    out.push_back(Token::new(
                        category,
                        offset + start..offset + end,
                        &rest[start..end],
                    ));
                };

                // Text not covered by any group is emitted as plain text so
                // the token stream still reproduces the input.
                let mut pos = 0;
                for (index, category) in categories.iter().enumerate() {
                    let Some(group) = captures.get(index + 1) else {
                        continue;
                    };
                    // Skip empty and nested groups.
                    if group.is_empty() || group.start() < pos {
                        continue;
                    }
                    if group.start() > pos {
                        push(Category::Text, pos, group.start());
                    }
                    push(*category, group.start(), group.end());
                    pos = group.end();
                }
                if pos < whole.end() {
                    push(Category::Text, pos, whole.end());
                }

                Some(whole.end())
            }
        }
    }
}

/// An immutable, cheaply clonable rule table.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Arc<[Rule]>,
}

static STANDARD: LazyLock<RuleSet> = LazyLock::new(|| {
    automath_rules(false)
        .build()
        .expect("built-in standard rule table must compile")
});

static SIGNED: LazyLock<RuleSet> = LazyLock::new(|| {
    automath_rules(true)
        .build()
        .expect("built-in signed rule table must compile")
});

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// The shared, lazily compiled table for a dialect.
    pub fn for_dialect(dialect: Dialect) -> &'static RuleSet {
        match dialect {
            Dialect::Standard => &STANDARD,
            Dialect::Signed => &SIGNED,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::for_dialect(Dialect::default()).clone()
    }
}

impl<'r> IntoIterator for &'r RuleSet {
    type Item = &'r Rule;
    type IntoIter = std::slice::Iter<'r, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects uncompiled rules in priority order.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    pending: Vec<(String, Assignment, bool)>,
}

impl RuleSetBuilder {
    pub fn rule(mut self, pattern: impl Into<String>, assignment: Assignment) -> Self {
        self.pending.push((pattern.into(), assignment, false));
        self
    }

    /// Add a rule that only matches at the start of a line.
    pub fn line_start_rule(mut self, pattern: impl Into<String>, assignment: Assignment) -> Self {
        self.pending.push((pattern.into(), assignment, true));
        self
    }

    pub fn build(self) -> AutomathResult<RuleSet> {
        if self.pending.is_empty() {
            return Err(AutomathError::EmptyRuleSet);
        }

        let rules = self
            .pending
            .into_iter()
            .map(|(source, assignment, line_start)| Rule::compile(source, assignment, line_start))
            .collect::<AutomathResult<Vec<_>>>()?;

        log::debug!("compiled rule set with {} rules", rules.len());
        Ok(RuleSet {
            rules: rules.into(),
        })
    }
}

fn automath_rules(signed: bool) -> RuleSetBuilder {
    use Category::*;

    let mut builder = RuleSet::builder()
        .rule(
            format!(r"\[{SPACE}*{IDENTIFIER}{SPACE}*[:,]{SPACE}*{IDENTIFIER}{SPACE}*\]"),
            Assignment::WholeMatch(Text),
        )
        .rule(r"[*@]", Assignment::WholeMatch(Operator));

    if signed {
        builder = builder.line_start_rule(r"[+-]", Assignment::WholeMatch(Operator));
    }

    builder
        // a : prop := PRIM
        .rule(
            format!("{IDENTIFIER}{WS}{SEPARATOR}{WS}{TYPE_IDENTIFIER}{WS}{ASSIGNMENT}{WS}{IDENTIFIER}"),
            Assignment::Groups(vec![
                ClassName,
                Text,
                Operator,
                Text,
                PseudoKeyword,
                Text,
                Operator,
                Text,
                FunctionName,
            ]),
        )
        // b := PRIM : prop
        .rule(
            format!("{IDENTIFIER}{WS}{ASSIGNMENT}{WS}{IDENTIFIER}{WS}{SEPARATOR}{WS}{TYPE_IDENTIFIER}"),
            Assignment::Groups(vec![
                ClassName,
                Text,
                Operator,
                Text,
                FunctionName,
                Text,
                Operator,
                Text,
                PseudoKeyword,
            ]),
        )
        .rule(IDENTIFIER, Assignment::WholeMatch(VariableName))
        .rule(r"\n", Assignment::WholeMatch(Text))
        .rule(format!("{SPACE}+"), Assignment::WholeMatch(Text))
        .rule(r"#[^\n]*\n?", Assignment::WholeMatch(Comment))
        .rule(r"\{[^}]*\}", Assignment::WholeMatch(MultilineComment))
}
