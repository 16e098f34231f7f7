//! Parser state and low-level primitives.
//!
//! The grammar productions (in [`grammar`](super::grammar)) are extensions
//! of [`Parser`] built from the primitives here. Every recoverable failure
//! is a [`Diagnostic`] travelling through [`Parse`]; sequencing fallible
//! steps is the `?` operator, so each production reads top-to-bottom like
//! its grammar rule. The only panics are impossible-branch assertions.

use text_size::TextRange;

use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};

use super::ast::File;
use super::group::{Group, GroupBuilder};
use super::lexer::Lexer;
use super::symbols::SymbolTable;
use super::token::{Token, TokenKind};

/// Result of a single production: a node, or the diagnostic that aborted it.
pub type Parse<T> = Result<T, Diagnostic>;

/// Everything a parse produces, moved out of the parser by
/// [`Parser::parse`].
#[derive(Debug)]
pub struct ParseResult<'src> {
    pub file: File<'src>,
    pub diagnostics: Diagnostics,
    pub accounts: SymbolTable<'src>,
    pub payees: SymbolTable<'src>,
}

/// Stateful facade over the lexer.
///
/// Owns the lexer, the diagnostics list, and the two symbol tables for the
/// duration of a parse; `parse()` consumes the parser and hands all of them
/// to the caller.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) lexer: Lexer<'src>,
    pub(super) diagnostics: Diagnostics,
    pub(super) accounts: SymbolTable<'src>,
    pub(super) payees: SymbolTable<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            diagnostics: Diagnostics::new(),
            accounts: SymbolTable::new(),
            payees: SymbolTable::new(),
        }
    }

    /// Parses the whole buffer, recovering from per-item errors.
    pub fn parse(mut self) -> ParseResult<'src> {
        let file = self.parse_file();
        ParseResult {
            file,
            diagnostics: self.diagnostics,
            accounts: self.accounts,
            payees: self.payees,
        }
    }

    // ── Lookahead ──────────────────────────────────────────────────────

    pub(super) fn peek(&self) -> Token<'src> {
        self.lexer.peek()
    }

    pub(super) fn next(&mut self) -> Token<'src> {
        self.lexer.advance()
    }

    pub(super) fn previous(&self) -> Option<Token<'src>> {
        self.lexer.previous()
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(super) fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.peek().kind)
    }

    /// True while the current line still has tokens before its newline (or
    /// the end of input).
    pub(super) fn line_has_next(&self) -> bool {
        !self.peek().kind.is_line_end()
    }

    /// True when the next token starts an indented continuation: we are at a
    /// line start (the previous token was a newline, or nothing has been
    /// consumed yet) and whitespace sits between the line break and the next
    /// token.
    pub(super) fn next_is_indented(&self) -> bool {
        if self.peek().is_eof() {
            return false;
        }
        let at_line_start = match self.previous() {
            None => true,
            Some(prev) => prev.kind == TokenKind::Newline,
        };
        if !at_line_start {
            return false;
        }
        self.previous().is_some_and(|prev| prev.ends_with_space())
            || self.peek().begins_with_space()
    }

    // ── Consuming ──────────────────────────────────────────────────────

    /// Consumes and returns the next token iff it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token<'src>> {
        if self.at(kind) {
            Some(self.next())
        } else {
            None
        }
    }

    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> Parse<Token<'src>> {
        self.expect_any(&[kind], what)
    }

    /// Consumes the next token; errs if its kind is not one of `kinds`.
    pub(super) fn expect_any(&mut self, kinds: &[TokenKind], what: &str) -> Parse<Token<'src>> {
        let token = self.next();
        if kinds.contains(&token.kind) {
            Ok(token)
        } else if token.is_eof() {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedEof,
                token.span(),
                format!("expected {what}, found end of input"),
            ))
        } else if token.kind == TokenKind::Newline {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                token.span(),
                format!("expected {what}, found end of line"),
            ))
        } else {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                token.span(),
                format!("expected {what}, found `{}`", token.inner_text()),
            ))
        }
    }

    /// Consumes an identifier and requires its text to be exactly `name`.
    pub(super) fn expect_identifier(&mut self, name: &str) -> Parse<Token<'src>> {
        let token = self.expect(TokenKind::Ident, &format!("`{name}`"))?;
        if token.inner_text() == name {
            Ok(token)
        } else {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                token.span(),
                format!("expected `{name}`, found `{}`", token.inner_text()),
            ))
        }
    }

    /// Consumes a number and requires it to be a plain decimal integer.
    pub(super) fn expect_integer(&mut self) -> Parse<Token<'src>> {
        let token = self.expect(TokenKind::Number, "an integer")?;
        if token.inner_text().bytes().all(|b| b.is_ascii_digit()) {
            Ok(token)
        } else {
            Err(Diagnostic::new(
                DiagnosticKind::InvalidInteger,
                token.span(),
                format!("`{}` is not an integer", token.inner_text()),
            ))
        }
    }

    /// Consumes the line terminator: a newline, or the end of input.
    pub(super) fn expect_end_of_line(&mut self) -> Parse<Token<'src>> {
        let token = self.next();
        if token.kind.is_line_end() {
            Ok(token)
        } else {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                token.span(),
                format!("expected end of line, found `{}`", token.inner_text()),
            ))
        }
    }

    /// Requires a hard space (tab or two-plus spaces) between the previous
    /// token and the next.
    pub(super) fn expect_hard_space(&mut self) -> Parse<()> {
        let hard = self
            .previous()
            .is_some_and(|prev| prev.ends_with_hard_space())
            || self.peek().begins_with_hard_space();
        if hard {
            Ok(())
        } else {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                self.peek().span(),
                "expected two or more spaces (or a tab)",
            ))
        }
    }

    /// Requires a space of any width between the previous token and the
    /// next, unless the line is already over.
    pub(super) fn inline_space(&mut self) -> Parse<()> {
        if !self.line_has_next() {
            return Ok(());
        }
        let spaced = self.previous().is_some_and(|prev| prev.ends_with_space())
            || self.peek().begins_with_space();
        if spaced {
            Ok(())
        } else {
            Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                self.peek().span(),
                format!("expected a space before `{}`", self.peek().inner_text()),
            ))
        }
    }

    // ── Slurping ───────────────────────────────────────────────────────

    /// Collects tokens up to (not including) any of `stops` or the end of
    /// the line. `None` if zero tokens were collected.
    pub(super) fn slurp_until(&mut self, stops: &[TokenKind]) -> Option<Group<'src>> {
        let mut builder = GroupBuilder::new();
        while self.line_has_next() && !self.at_any(stops) {
            builder.push(self.next());
        }
        builder.build()
    }

    /// Collects the rest of the line.
    pub(super) fn slurp(&mut self) -> Option<Group<'src>> {
        self.slurp_until(&[])
    }

    /// Collects tokens until one borders a hard space: stops *before* a
    /// token that begins with one, *after* a token that ends with one, and
    /// at the end of the line. `None` if zero tokens were collected.
    pub(super) fn slurp_until_hard_space(&mut self) -> Option<Group<'src>> {
        let mut builder = GroupBuilder::new();
        while self.line_has_next() {
            if self.peek().begins_with_hard_space() {
                break;
            }
            let token = self.next();
            let ends_hard = token.ends_with_hard_space();
            builder.push(token);
            if ends_hard {
                break;
            }
        }
        builder.build()
    }

    /// Collects tokens (newlines included) until a consecutive run of
    /// identifiers spelling `words` appears; the first lexical run wins,
    /// wherever it sits in a line. Returns the collected body and the
    /// terminator run. Errs with `UnexpectedEof` if the input ends first.
    pub(super) fn until_sequence(
        &mut self,
        words: &[&str],
    ) -> Parse<(Option<Group<'src>>, Vec<Token<'src>>)> {
        debug_assert!(!words.is_empty());
        let mut body = GroupBuilder::new();
        let mut run: Vec<Token<'src>> = Vec::new();
        loop {
            if self.peek().is_eof() {
                return Err(Diagnostic::new(
                    DiagnosticKind::UnexpectedEof,
                    self.peek().span(),
                    format!("expected `{}` before end of input", words.join(" ")),
                ));
            }
            let token = self.next();
            if token.kind == TokenKind::Ident && token.inner_text() == words[run.len()] {
                run.push(token);
                if run.len() == words.len() {
                    return Ok((body.build(), run));
                }
                continue;
            }
            // A partial match goes back into the body; the mismatching token
            // may itself restart the run.
            for matched in run.drain(..) {
                body.push(matched);
            }
            if token.kind == TokenKind::Ident && token.inner_text() == words[0] {
                run.push(token);
                if run.len() == words.len() {
                    return Ok((body.build(), run));
                }
            } else {
                body.push(token);
            }
        }
    }

    /// Runs `body` for each indented continuation line, requiring a line
    /// terminator after each.
    pub(super) fn while_indented<T>(
        &mut self,
        mut body: impl FnMut(&mut Self) -> Parse<T>,
    ) -> Parse<Vec<T>> {
        let mut items = Vec::new();
        while self.next_is_indented() {
            let item = body(self)?;
            self.expect_end_of_line()?;
            items.push(item);
        }
        Ok(items)
    }

    // ── Errors and recovery ────────────────────────────────────────────

    /// Diagnostic for "wanted `what`, but the next token blocks it": the
    /// end of the line or input reads as `UnexpectedEof`, anything else as
    /// `UnexpectedToken`. Used when a slurp comes back empty.
    pub(super) fn expected(&self, what: &str) -> Diagnostic {
        let token = self.peek();
        match token.kind {
            TokenKind::Eof => Diagnostic::new(
                DiagnosticKind::UnexpectedEof,
                token.span(),
                format!("expected {what}, found end of input"),
            ),
            TokenKind::Newline => Diagnostic::new(
                DiagnosticKind::UnexpectedEof,
                token.span(),
                format!("expected {what} before the end of the line"),
            ),
            _ => Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                token.span(),
                format!("expected {what}, found `{}`", token.inner_text()),
            ),
        }
    }

    /// Panic-mode resynchronization: records `error`, then advances to the
    /// next unindented line start (or the end of input).
    pub(super) fn synchronize(&mut self, error: Diagnostic) {
        self.diagnostics.push(error);
        while self.lexer.has_next() {
            let at_line_start = match self.previous() {
                None => true,
                Some(prev) => prev.kind == TokenKind::Newline,
            };
            if at_line_start && !self.next_is_indented() {
                break;
            }
            self.next();
        }
    }

    // ── Symbol declarations ────────────────────────────────────────────

    pub(super) fn declare_account(&mut self, name: &'src str, span: TextRange) {
        if !self.accounts.has(name) {
            self.accounts.add(name, span);
        }
    }

    pub(super) fn declare_payee(&mut self, name: &'src str, span: TextRange) {
        if !self.payees.has(name) {
            self.payees.add(name, span);
        }
    }
}
