//! Leaf-level productions: dates, codes, amounts, accounts, payees,
//! comments.

use crate::diagnostics::{Diagnostic, DiagnosticKind};

use super::super::ast::{Account, Amount, AuxDate, Code, Comment, Date, Payee};
use super::super::core::{Parse, Parser};
use super::super::group::Group;
use super::super::token::TokenKind;

/// Tokens that end a commodity slurp on either side of the number.
const COMMODITY_STOPS: [TokenKind; 3] = [TokenKind::Hyphen, TokenKind::Number, TokenKind::Comment];

impl<'src> Parser<'src> {
    /// Two or three integers separated by `/` or `-`; both separators must
    /// agree. Component ranges are not checked.
    pub(crate) fn parse_date(&mut self) -> Parse<Date<'src>> {
        let mut tokens = Vec::new();
        tokens.push(self.expect_integer()?);
        let sep = self.expect_any(&[TokenKind::Slash, TokenKind::Hyphen], "`/` or `-`")?;
        tokens.push(sep);
        tokens.push(self.expect_integer()?);
        if let Some(second_sep) = self.eat(sep.kind) {
            tokens.push(second_sep);
            tokens.push(self.expect_integer()?);
        } else if self.at_any(&[TokenKind::Slash, TokenKind::Hyphen]) {
            let found = self.peek();
            return Err(Diagnostic::new(
                DiagnosticKind::InvalidDate,
                found.span(),
                format!(
                    "date separator `{}` does not match earlier `{}`",
                    found.inner_text(),
                    sep.inner_text()
                ),
            ));
        }
        // Non-empty: at least the three tokens pushed above.
        Ok(Date {
            tokens: Group::from_tokens_unchecked(tokens),
        })
    }

    pub(crate) fn parse_aux_date(&mut self) -> Parse<AuxDate<'src>> {
        let equal = self.expect(TokenKind::Equals, "`=`")?;
        let date = self.parse_date()?;
        Ok(AuxDate { equal, date })
    }

    pub(crate) fn parse_code(&mut self) -> Parse<Code<'src>> {
        let open = self.expect(TokenKind::ParenOpen, "`(`")?;
        let contents = self
            .slurp_until(&[TokenKind::ParenClose])
            .ok_or_else(|| self.expected("a transaction code"))?;
        let close = self.expect(TokenKind::ParenClose, "`)`")?;
        Ok(Code {
            open,
            contents,
            close,
        })
    }

    /// An amount after an account. The hard space is the delimiter that
    /// separates the two, so it is required up front.
    pub(crate) fn parse_amount(&mut self) -> Parse<Amount<'src>> {
        self.expect_hard_space()?;
        let mut minus = self.eat(TokenKind::Hyphen);
        let number;
        let mut pre_commodity = None;
        let mut post_commodity = None;
        if self.at(TokenKind::Number) {
            number = self.next();
            post_commodity = self.slurp_until(&COMMODITY_STOPS);
        } else if self.line_has_next() {
            pre_commodity = Some(
                self.slurp_until(&COMMODITY_STOPS)
                    .ok_or_else(|| self.expected("an amount"))?,
            );
            if minus.is_none() {
                minus = self.eat(TokenKind::Hyphen);
            }
            number = self.expect(TokenKind::Number, "an amount")?;
        } else {
            number = self.expect(TokenKind::Number, "an amount")?;
        }
        Ok(Amount {
            minus,
            number,
            pre_commodity,
            post_commodity,
        })
    }

    /// Bare account up to a hard space, or a virtual `(…)`/`[…]` form whose
    /// close must match its open.
    pub(crate) fn parse_account(&mut self) -> Parse<Account<'src>> {
        if self.at_any(&[TokenKind::ParenOpen, TokenKind::BracketOpen]) {
            let open = self.next();
            let (close_kind, close_what) = match open.kind {
                TokenKind::ParenOpen => (TokenKind::ParenClose, "`)`"),
                TokenKind::BracketOpen => (TokenKind::BracketClose, "`]`"),
                kind => unreachable!("account open token {kind:?} was checked above"),
            };
            let contents = self.slurp_until(&[close_kind]).ok_or_else(|| {
                Diagnostic::new(
                    DiagnosticKind::InvalidAccount,
                    self.peek().span(),
                    "expected an account name",
                )
            })?;
            let close = self.expect(close_kind, close_what)?;
            self.declare_account(contents.inner_text(self.source), contents.span());
            Ok(Account::Surrounded {
                open,
                contents,
                close,
            })
        } else {
            let Some(tokens) = self.slurp_until_hard_space() else {
                return Err(Diagnostic::new(
                    DiagnosticKind::InvalidAccount,
                    self.peek().span(),
                    "expected an account name",
                ));
            };
            self.declare_account(tokens.inner_text(self.source), tokens.span());
            Ok(Account::Plain(tokens))
        }
    }

    /// One or more hard-space-separated runs, concatenated into a single
    /// group and registered in the payee table.
    pub(crate) fn parse_payee(&mut self) -> Parse<Payee<'src>> {
        let mut tokens = Vec::new();
        match self.slurp_until_hard_space() {
            Some(run) => tokens.extend_from_slice(run.tokens()),
            None => return Err(self.expected("a payee")),
        }
        while self.line_has_next() && !self.at(TokenKind::Comment) {
            let Some(run) = self.slurp_until_hard_space() else {
                break;
            };
            tokens.extend_from_slice(run.tokens());
        }
        // Non-empty: the first run contributed at least one token.
        let tokens = Group::from_tokens_unchecked(tokens);
        self.declare_payee(tokens.inner_text(self.source), tokens.span());
        Ok(Payee { tokens })
    }

    /// A single comment token; the enclosing production decides whether a
    /// line terminator follows.
    pub(crate) fn parse_comment_token(&mut self) -> Parse<Comment<'src>> {
        let token = self.expect(TokenKind::Comment, "a comment")?;
        Ok(Comment { token })
    }
}
