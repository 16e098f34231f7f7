//! Non-empty token runs.
//!
//! Whenever the grammar needs "a run of tokens with a span" (a date, a
//! payee, a directive argument) it collects consecutive tokens into a
//! [`Group`]. Groups are non-empty by construction: [`GroupBuilder::build`]
//! returns `None` for an empty run, which removes the empty-span class of
//! bugs from span derivation. The one constructor that bypasses the check is
//! [`Group::from_tokens_unchecked`]; call sites must be able to justify
//! non-emptiness.

use text_size::TextRange;

use super::token::Token;

/// A non-empty run of consecutive tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> Group<'src> {
    /// Builds a group from a run already known to be non-empty.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `tokens` is empty.
    pub(crate) fn from_tokens_unchecked(tokens: Vec<Token<'src>>) -> Self {
        debug_assert!(!tokens.is_empty(), "a Group is never empty");
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    pub fn first(&self) -> Token<'src> {
        self.tokens[0]
    }

    pub fn last(&self) -> Token<'src> {
        self.tokens[self.tokens.len() - 1]
    }

    /// Combined span of the inner texts: start of the first token's inner
    /// text to the end of the last token's.
    pub fn span(&self) -> TextRange {
        TextRange::new(self.first().span().start(), self.last().span().end())
    }

    /// Span including the group's outermost whitespace.
    pub fn outer_span(&self) -> TextRange {
        TextRange::new(self.first().outer_span().start(), self.last().outer_span().end())
    }

    /// The group's text with leading/trailing whitespace trimmed at the ends
    /// only; whitespace between interior tokens is preserved.
    pub fn inner_text(&self, source: &'src str) -> &'src str {
        &source[std::ops::Range::<usize>::from(self.span())]
    }

    /// The group's text including its outermost whitespace.
    pub fn outer_text(&self, source: &'src str) -> &'src str {
        &source[std::ops::Range::<usize>::from(self.outer_span())]
    }
}

/// Accumulates tokens into a [`Group`], refusing to produce an empty one.
#[derive(Debug, Default)]
pub struct GroupBuilder<'src> {
    tokens: Vec<Token<'src>>,
}

impl<'src> GroupBuilder<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token<'src>) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `None` if nothing was pushed.
    pub fn build(self) -> Option<Group<'src>> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(Group::from_tokens_unchecked(self.tokens))
        }
    }
}
