//! Directive productions: `alias`, `apply`, `end`, comment blocks, and the
//! open-ended standard form with indented sub-directives.

use super::super::ast::{Alias, Apply, CommentBlock, Directive, End, Item, SubDirective};
use super::super::core::{Parse, Parser};
use super::super::token::TokenKind;

impl<'src> Parser<'src> {
    /// Dispatches on the identifier at the start of the line.
    pub(crate) fn parse_directive_item(&mut self) -> Parse<Item<'src>> {
        match self.peek().inner_text() {
            "alias" => self.parse_alias().map(Item::Alias),
            "apply" => self.parse_apply().map(Item::Apply),
            "end" => self.parse_end().map(Item::End),
            "comment" | "test" => self.parse_comment_block().map(Item::CommentBlock),
            _ => self.parse_standard_directive().map(Item::Directive),
        }
    }

    /// `alias <name>=<value>`; the value may contain further `=`.
    fn parse_alias(&mut self) -> Parse<Alias<'src>> {
        let alias = self.expect_identifier("alias")?;
        let name = self
            .slurp_until(&[TokenKind::Equals])
            .ok_or_else(|| self.expected("an alias name"))?;
        let equal = self.expect(TokenKind::Equals, "`=`")?;
        let value = self.slurp().ok_or_else(|| self.expected("an alias value"))?;
        self.expect_end_of_line()?;
        Ok(Alias {
            alias,
            name,
            equal,
            value,
        })
    }

    /// `apply <name> <args…>`.
    fn parse_apply(&mut self) -> Parse<Apply<'src>> {
        let apply = self.expect_identifier("apply")?;
        let name = self.expect(TokenKind::Ident, "a directive name after `apply`")?;
        let args = self.slurp();
        self.expect_end_of_line()?;
        Ok(Apply { apply, name, args })
    }

    /// `end <name>` or `end apply <name>`.
    fn parse_end(&mut self) -> Parse<End<'src>> {
        let end = self.expect_identifier("end")?;
        let apply = if self.at(TokenKind::Ident) && self.peek().inner_text() == "apply" {
            self.eat(TokenKind::Ident)
        } else {
            None
        };
        let name = self.expect(TokenKind::Ident, "a name after `end`")?;
        self.expect_end_of_line()?;
        Ok(End { end, apply, name })
    }

    /// `comment … end comment` / `test … end test`. The first lexical run
    /// spelling the terminator wins, wherever it sits in a line.
    fn parse_comment_block(&mut self) -> Parse<CommentBlock<'src>> {
        let name = self.expect(TokenKind::Ident, "`comment` or `test`")?;
        let newline = self.expect_end_of_line()?;
        let terminator = ["end", name.inner_text()];
        let (body, run) = self.until_sequence(&terminator)?;
        let mut run = run.into_iter();
        let (end, end_name) = match (run.next(), run.next()) {
            (Some(end), Some(end_name)) => (end, end_name),
            _ => unreachable!("until_sequence returns exactly the requested run"),
        };
        Ok(CommentBlock {
            name,
            newline,
            body,
            end,
            end_name,
        })
    }

    /// Any other identifier: name, optional argument, then indented
    /// `key value?` sub-directives.
    fn parse_standard_directive(&mut self) -> Parse<Directive<'src>> {
        let name = self.expect(TokenKind::Ident, "a directive name")?;
        let argument = self.slurp();
        self.expect_end_of_line()?;
        let sub_directives = self.while_indented(|p| p.parse_sub_directive())?;
        Ok(Directive {
            name,
            argument,
            sub_directives,
        })
    }

    fn parse_sub_directive(&mut self) -> Parse<SubDirective<'src>> {
        let key = self.expect(TokenKind::Ident, "a sub-directive key")?;
        let value = self.slurp();
        Ok(SubDirective { key, value })
    }
}
