//! Token kinds and whitespace-carrying tokens.
//!
//! `TokenKind` doubles as the logos rule table: the lexer's token rules are
//! the `#[token]`/`#[regex]` attributes below. Two rules cannot be expressed
//! as position-independent patterns and are produced by post-processing in
//! [`lex`](super::lexer::lex) instead: comments introduced by `# % * |` at
//! the start of a line, and the single-character `Symbol` fallback.
//!
//! A [`Token`] owns three views over one contiguous source slice: its leading
//! whitespace, its inner text, and its trailing whitespace. Whitespace never
//! appears as a token of its own in the cooked stream; it is always attached
//! to a neighbor. This is what makes `source == concat(outer_text)` hold for
//! every parse, and what lets the grammar ask "was there a hard space here?"
//! as a cheap query on a token instead of a look-back through a trivia list.

use logos::Logos;
use text_size::{TextRange, TextSize};

/// All token kinds. `Whitespace` is lexer-internal: it never survives into
/// the cooked stream. `Symbol` and `Eof` have no rule; they are synthesized
/// by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"[ \t]+")]
    Whitespace,

    /// `;` comments anywhere; `# % * |` open a comment only at the start of
    /// a line, handled in `lex()`.
    #[regex(r";[^\n]*", allow_greedy = true)]
    Comment,

    #[regex(r#""[^"\n]*""#)]
    Str,

    #[regex(r"[0-9]+(?:[.,][0-9]+)*")]
    Number,

    #[token("=")]
    Equals,

    #[token("~")]
    Tilde,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("-")]
    Hyphen,

    #[token("/")]
    Slash,

    #[token("*")]
    Star,

    #[token("!")]
    Bang,

    #[token(":")]
    Colon,

    #[token("@")]
    At,

    #[regex(r"[A-Za-z]+")]
    Ident,

    /// Any other single non-whitespace, non-newline character.
    Symbol,

    /// Virtual end-of-input marker, zero inner length. A trailing whitespace
    /// run in the buffer becomes its leading whitespace.
    Eof,
}

impl TokenKind {
    /// True for the kinds that terminate a line from the grammar's point of
    /// view.
    #[inline]
    pub fn is_line_end(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

/// A whitespace run counts as *hard* if it contains a tab or two or more
/// consecutive spaces. Hard spaces are grammar-level delimiters (account vs
/// amount, payee runs); a single space is *soft* and only separates tokens.
#[inline]
pub(crate) fn is_hard_space(ws: &str) -> bool {
    ws.contains('\t') || ws.contains("  ")
}

/// A token plus the whitespace attached to it.
///
/// The on-buffer bytes at `offset` are exactly
/// `leading_ws ++ inner_text ++ trailing_ws`, and `outer_text` is that
/// contiguous slice. Tokens are `Copy` and borrow from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    offset: TextSize,
    outer: &'src str,
    leading_len: usize,
    trailing_len: usize,
}

impl<'src> Token<'src> {
    pub(crate) fn new(
        kind: TokenKind,
        offset: usize,
        outer: &'src str,
        leading_len: usize,
        trailing_len: usize,
    ) -> Self {
        debug_assert!(leading_len + trailing_len <= outer.len());
        Self {
            kind,
            offset: TextSize::from(offset as u32),
            outer,
            leading_len,
            trailing_len,
        }
    }

    /// Byte offset of the first byte of the leading whitespace.
    #[inline]
    pub fn offset(&self) -> TextSize {
        self.offset
    }

    #[inline]
    pub fn leading_ws(&self) -> &'src str {
        &self.outer[..self.leading_len]
    }

    #[inline]
    pub fn trailing_ws(&self) -> &'src str {
        &self.outer[self.outer.len() - self.trailing_len..]
    }

    #[inline]
    pub fn inner_text(&self) -> &'src str {
        &self.outer[self.leading_len..self.outer.len() - self.trailing_len]
    }

    /// The token text with its attached whitespace.
    #[inline]
    pub fn outer_text(&self) -> &'src str {
        self.outer
    }

    #[inline]
    pub fn outer_len(&self) -> usize {
        self.outer.len()
    }

    /// Span of the inner text.
    pub fn span(&self) -> TextRange {
        let start = u32::from(self.offset) + self.leading_len as u32;
        let end = u32::from(self.offset) + (self.outer.len() - self.trailing_len) as u32;
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    /// Span including leading and trailing whitespace.
    pub fn outer_span(&self) -> TextRange {
        let start = u32::from(self.offset);
        TextRange::new(
            TextSize::from(start),
            TextSize::from(start + self.outer.len() as u32),
        )
    }

    #[inline]
    pub fn begins_with_space(&self) -> bool {
        self.leading_len > 0
    }

    #[inline]
    pub fn ends_with_space(&self) -> bool {
        self.trailing_len > 0
    }

    #[inline]
    pub fn begins_with_hard_space(&self) -> bool {
        is_hard_space(self.leading_ws())
    }

    #[inline]
    pub fn ends_with_hard_space(&self) -> bool {
        is_hard_space(self.trailing_ws())
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
