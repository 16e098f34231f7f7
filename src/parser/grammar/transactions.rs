//! Transaction headers and their posting lines.

use crate::diagnostics::{Diagnostic, DiagnosticKind};

use super::super::ast::{Posting, Transaction};
use super::super::core::{Parse, Parser};
use super::super::token::TokenKind;

impl<'src> Parser<'src> {
    /// Header line (date, aux date, flag, code, payee, comment) followed by
    /// indented posting and comment lines.
    pub(crate) fn parse_transaction(&mut self) -> Parse<Transaction<'src>> {
        let date = self.parse_date()?;
        let aux_date = if self.at(TokenKind::Equals) {
            Some(self.parse_aux_date()?)
        } else {
            None
        };
        self.inline_space()?;

        let cleared = self.eat(TokenKind::Star);
        let pending = if cleared.is_none() {
            self.eat(TokenKind::Bang)
        } else {
            None
        };
        // One flag only: `*!` and `!*` are rejected.
        if (cleared.is_some() || pending.is_some())
            && self.at_any(&[TokenKind::Star, TokenKind::Bang])
        {
            let found = self.peek();
            return Err(Diagnostic::new(
                DiagnosticKind::UnexpectedToken,
                found.span(),
                format!(
                    "unexpected `{}`: a transaction carries a single `*` or `!` flag",
                    found.inner_text()
                ),
            ));
        }
        self.inline_space()?;

        let code = if self.at(TokenKind::ParenOpen) {
            Some(self.parse_code()?)
        } else {
            None
        };
        self.inline_space()?;

        let payee = if self.line_has_next() && !self.at(TokenKind::Comment) {
            Some(self.parse_payee()?)
        } else {
            None
        };

        let mut comments = Vec::new();
        if self.at(TokenKind::Comment) {
            comments.push(self.parse_comment_token()?);
        }
        self.expect_end_of_line()?;

        let mut postings: Vec<Posting<'src>> = Vec::new();
        while self.next_is_indented() {
            if self.at(TokenKind::Comment) {
                let comment = self.parse_comment_token()?;
                self.expect_end_of_line()?;
                // A comment line belongs to the posting above it, or to the
                // transaction itself when no posting has been seen yet.
                match postings.last_mut() {
                    Some(posting) => posting.comments.push(comment),
                    None => comments.push(comment),
                }
            } else {
                let posting = self.parse_posting()?;
                self.expect_end_of_line()?;
                postings.push(posting);
            }
        }

        Ok(Transaction {
            date,
            aux_date,
            cleared,
            pending,
            code,
            payee,
            comments,
            postings,
        })
    }

    /// Account, then an amount if the line carries more than a comment.
    pub(crate) fn parse_posting(&mut self) -> Parse<Posting<'src>> {
        let account = self.parse_account()?;
        let amount = if self.line_has_next() && !self.at(TokenKind::Comment) {
            Some(self.parse_amount()?)
        } else {
            None
        };
        let mut comments = Vec::new();
        if self.at(TokenKind::Comment) {
            comments.push(self.parse_comment_token()?);
        }
        Ok(Posting {
            account,
            amount,
            comments,
        })
    }
}
