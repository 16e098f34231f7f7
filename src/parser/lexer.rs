//! Lexer for the journal language.
//!
//! Lexing runs in two passes:
//!
//! 1. A raw logos pass over [`TokenKind`]'s rule table, post-processed for
//!    the two context-sensitive rules: `# % * |` at the start of a line open
//!    a comment that runs to the end of the line (`Lexer::bump` extends the
//!    match), and characters no rule covers become one [`TokenKind::Symbol`]
//!    token each.
//! 2. A cooking pass that folds every `Whitespace` token into a neighbor:
//!    a run before the first token of the buffer becomes that token's
//!    leading whitespace, every other run becomes the trailing whitespace of
//!    the token before it. A run at the very end of the buffer becomes the
//!    leading whitespace of the virtual `Eof` token, so concatenating
//!    `outer_text` over the cooked stream reproduces the buffer exactly.
//!
//! The cooked stream therefore never contains whitespace tokens, and two
//! adjacent tokens share no bytes: whitespace between them belongs to the
//! first one.

use logos::Logos;
use std::ops::Range;

use super::token::{Token, TokenKind};

/// Comment introducers recognized only at the start of a line. `;` opens a
/// comment anywhere and is part of the regular rule table.
const LINE_COMMENT_STARTERS: [char; 4] = ['#', '%', '*', '|'];

fn at_line_start(source: &str, pos: usize) -> bool {
    pos == 0 || source.as_bytes()[pos - 1] == b'\n'
}

/// Extends the current match to the end of the line and returns the full
/// comment span.
fn extend_to_eol(lexer: &mut logos::Lexer<'_, TokenKind>, start: usize) -> Range<usize> {
    let rest = lexer.remainder();
    let stop = rest.find('\n').unwrap_or(rest.len());
    lexer.bump(stop);
    start..lexer.span().end
}

fn raw_tokens(source: &str) -> Vec<(TokenKind, Range<usize>)> {
    let mut out = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(TokenKind::Star) if at_line_start(source, span.start) => {
                out.push((TokenKind::Comment, extend_to_eol(&mut lexer, span.start)));
            }
            Ok(kind) => out.push((kind, span)),
            Err(()) => {
                let starts_comment = at_line_start(source, span.start)
                    && source[span.clone()]
                        .chars()
                        .next()
                        .is_some_and(|c| LINE_COMMENT_STARTERS.contains(&c));
                if starts_comment {
                    out.push((TokenKind::Comment, extend_to_eol(&mut lexer, span.start)));
                } else {
                    // One `Symbol` token per character.
                    for (i, c) in source[span.clone()].char_indices() {
                        let start = span.start + i;
                        out.push((TokenKind::Symbol, start..start + c.len_utf8()));
                    }
                }
            }
        }
    }
    out
}

fn cook(source: &str, raw: Vec<(TokenKind, Range<usize>)>) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut pending_ws: Option<Range<usize>> = None;
    let mut i = 0;
    while i < raw.len() {
        let (kind, span) = (raw[i].0, raw[i].1.clone());
        i += 1;
        if kind == TokenKind::Whitespace {
            // Runs are maximal, so two whitespace tokens are never adjacent.
            pending_ws = Some(span);
            continue;
        }
        let outer_start = pending_ws.take().map_or(span.start, |ws| ws.start);
        let leading_len = span.start - outer_start;
        let mut outer_end = span.end;
        let mut trailing_len = 0;
        if i < raw.len() && raw[i].0 == TokenKind::Whitespace {
            trailing_len = raw[i].1.len();
            outer_end = raw[i].1.end;
            i += 1;
        }
        out.push(Token::new(
            kind,
            outer_start,
            &source[outer_start..outer_end],
            leading_len,
            trailing_len,
        ));
    }
    let (eof_start, eof_leading) = match pending_ws {
        Some(ws) => (ws.start, ws.len()),
        None => (source.len(), 0),
    };
    out.push(Token::new(
        TokenKind::Eof,
        eof_start,
        &source[eof_start..],
        eof_leading,
        0,
    ));
    out
}

/// Tokenizes the whole buffer into the cooked stream, `Eof` included.
pub fn lex(source: &str) -> Vec<Token<'_>> {
    cook(source, raw_tokens(source))
}

/// Cursor over the cooked token stream with single-token lookahead and a
/// `previous` slot the grammar queries for space and indentation decisions.
///
/// Once the stream is exhausted, [`advance`](Lexer::advance) keeps returning
/// the `Eof` token. Iterating a `Lexer` yields every token up to and
/// including `Eof`, then terminates.
pub struct Lexer<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
    pos: usize,
    previous: Option<Token<'src>>,
    yielded_eof: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: lex(source),
            pos: 0,
            previous: None,
            yielded_eof: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The next token, without consuming it.
    pub fn peek(&self) -> Token<'src> {
        self.tokens[self.pos]
    }

    /// Consumes and returns the next token; at the end of the stream this
    /// returns the `Eof` token again and again.
    pub fn advance(&mut self) -> Token<'src> {
        let token = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        self.previous = Some(token);
        token
    }

    /// The most recently consumed token, if any.
    pub fn previous(&self) -> Option<Token<'src>> {
        self.previous
    }

    pub fn has_next(&self) -> bool {
        self.peek().kind != TokenKind::Eof
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        if self.yielded_eof {
            return None;
        }
        let token = self.advance();
        if token.kind == TokenKind::Eof {
            self.yielded_eof = true;
        }
        Some(token)
    }
}
