//! Grammar productions, implemented as extensions of [`Parser`].
//!
//! Each production is a method returning [`Parse`]; the file-level loop
//! below is the only place errors are recorded and recovered from.

mod atoms;
mod directives;
mod transactions;

use text_size::TextRange;

use crate::diagnostics::{Diagnostic, DiagnosticKind};

use super::ast::{Comment, File, Item};
use super::core::{Parse, Parser};
use super::token::TokenKind;

impl<'src> Parser<'src> {
    /// Ready/Panic state machine over top-level items.
    ///
    /// Blank lines are consumed silently. An indented line at top level is a
    /// `LeadingSpace` error; any production failure records its diagnostic
    /// and resynchronizes at the next unindented line start, so one bad line
    /// never hides the items around it.
    pub(crate) fn parse_file(&mut self) -> File<'src> {
        let mut children = Vec::new();
        while self.lexer.has_next() {
            if self.at(TokenKind::Newline) {
                self.next();
                continue;
            }
            if self.next_is_indented() {
                let span = self.leading_space_span();
                self.synchronize(Diagnostic::new(
                    DiagnosticKind::LeadingSpace,
                    span,
                    "unexpected leading space at the start of a line",
                ));
                continue;
            }
            let result = match self.peek().kind {
                TokenKind::Number => self.parse_transaction().map(Item::Transaction),
                TokenKind::Comment => self.parse_file_comment().map(Item::Comment),
                TokenKind::Ident => self.parse_directive_item(),
                _ => {
                    let token = self.next();
                    Err(Diagnostic::new(
                        DiagnosticKind::UnexpectedToken,
                        token.span(),
                        format!("unexpected `{}`", token.inner_text()),
                    ))
                }
            };
            match result {
                Ok(item) => children.push(item),
                Err(error) => self.synchronize(error),
            }
        }
        File { children }
    }

    fn parse_file_comment(&mut self) -> Parse<Comment<'src>> {
        let comment = self.parse_comment_token()?;
        self.expect_end_of_line()?;
        Ok(comment)
    }

    /// Span of the offending whitespace run before the next token.
    fn leading_space_span(&self) -> TextRange {
        let next = self.peek();
        let start = match self.previous() {
            Some(prev) => prev.span().end(),
            None => next.offset(),
        };
        TextRange::new(start, next.span().start())
    }
}
