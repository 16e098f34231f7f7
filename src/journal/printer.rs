//! Indented tree dump of a parsed journal.
//!
//! One node per line, `Kind "inner text"` leaves, two-space indentation.
//! The format is pinned by the grammar tests.

use std::fmt::Write;

use text_size::TextRange;

use crate::parser::{
    Alias, Amount, Apply, Comment, CommentBlock, Directive, End, Item, Posting, Transaction,
    VirtualKind,
};

use super::Journal;

pub struct JournalPrinter<'j, 'src> {
    journal: &'j Journal<'src>,
    spans: bool,
}

impl<'j, 'src> JournalPrinter<'j, 'src> {
    pub fn new(journal: &'j Journal<'src>) -> Self {
        Self {
            journal,
            spans: false,
        }
    }

    /// Append `@start..end` to every line.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "File")?;
        for item in &self.journal.file().children {
            self.format_item(item, 1, w)?;
        }
        Ok(())
    }

    fn line(
        &self,
        w: &mut impl Write,
        indent: usize,
        text: &str,
        span: TextRange,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        if self.spans {
            writeln!(
                w,
                "{prefix}{text} @{}..{}",
                u32::from(span.start()),
                u32::from(span.end())
            )
        } else {
            writeln!(w, "{prefix}{text}")
        }
    }

    fn format_item(&self, item: &Item<'src>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        match item {
            Item::Transaction(node) => self.format_transaction(node, indent, w),
            Item::Directive(node) => self.format_directive(node, indent, w),
            Item::Apply(node) => self.format_apply(node, indent, w),
            Item::End(node) => self.format_end(node, indent, w),
            Item::Alias(node) => self.format_alias(node, indent, w),
            Item::CommentBlock(node) => self.format_comment_block(node, indent, w),
            Item::Comment(node) => self.format_comment(node, indent, w),
        }
    }

    fn format_transaction(
        &self,
        node: &Transaction<'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(w, indent, "Transaction", node.span())?;
        self.line(
            w,
            indent + 1,
            &format!("Date {:?}", node.date.text(source)),
            node.date.span(),
        )?;
        if let Some(aux) = &node.aux_date {
            self.line(
                w,
                indent + 1,
                &format!("AuxDate {:?}", aux.date.text(source)),
                aux.span(),
            )?;
        }
        if let Some(cleared) = node.cleared {
            self.line(w, indent + 1, "Cleared \"*\"", cleared.span())?;
        }
        if let Some(pending) = node.pending {
            self.line(w, indent + 1, "Pending \"!\"", pending.span())?;
        }
        if let Some(code) = &node.code {
            self.line(
                w,
                indent + 1,
                &format!("Code {:?}", code.text(source)),
                code.span(),
            )?;
        }
        if let Some(payee) = &node.payee {
            self.line(
                w,
                indent + 1,
                &format!("Payee {:?}", payee.name(source)),
                payee.span(),
            )?;
        }
        for comment in &node.comments {
            self.format_comment(comment, indent + 1, w)?;
        }
        for posting in &node.postings {
            self.format_posting(posting, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_posting(
        &self,
        node: &Posting<'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(w, indent, "Posting", node.span())?;
        let account = &node.account;
        let label = match account.virtual_kind() {
            None => format!("Account {:?}", account.name(source)),
            Some(VirtualKind::Unbalanced) => {
                format!("Account {:?} (virtual)", account.name(source))
            }
            Some(VirtualKind::Balanced) => {
                format!("Account {:?} (balanced virtual)", account.name(source))
            }
        };
        self.line(w, indent + 1, &label, account.span())?;
        if let Some(amount) = &node.amount {
            self.format_amount(amount, indent + 1, w)?;
        }
        for comment in &node.comments {
            self.format_comment(comment, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_amount(
        &self,
        node: &Amount<'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(w, indent, "Amount", node.span())?;
        if let Some(minus) = node.minus {
            self.line(w, indent + 1, "Minus \"-\"", minus.span())?;
        }
        if let Some(commodity) = &node.pre_commodity {
            self.line(
                w,
                indent + 1,
                &format!("Commodity {:?} (pre)", commodity.inner_text(source)),
                commodity.span(),
            )?;
        }
        self.line(
            w,
            indent + 1,
            &format!("Number {:?}", node.number_text()),
            node.number.span(),
        )?;
        if let Some(commodity) = &node.post_commodity {
            self.line(
                w,
                indent + 1,
                &format!("Commodity {:?} (post)", commodity.inner_text(source)),
                commodity.span(),
            )?;
        }
        Ok(())
    }

    fn format_directive(
        &self,
        node: &Directive<'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(
            w,
            indent,
            &format!("Directive {:?}", node.name.inner_text()),
            node.span(),
        )?;
        if let Some(argument) = &node.argument {
            self.line(
                w,
                indent + 1,
                &format!("Argument {:?}", argument.inner_text(source)),
                argument.span(),
            )?;
        }
        for sub in &node.sub_directives {
            self.line(
                w,
                indent + 1,
                &format!("SubDirective {:?}", sub.key.inner_text()),
                sub.span(),
            )?;
            if let Some(value) = &sub.value {
                self.line(
                    w,
                    indent + 2,
                    &format!("Value {:?}", value.inner_text(source)),
                    value.span(),
                )?;
            }
        }
        Ok(())
    }

    fn format_apply(&self, node: &Apply<'src>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(
            w,
            indent,
            &format!("Apply {:?}", node.name.inner_text()),
            node.span(),
        )?;
        if let Some(args) = &node.args {
            self.line(
                w,
                indent + 1,
                &format!("Args {:?}", args.inner_text(source)),
                args.span(),
            )?;
        }
        Ok(())
    }

    fn format_end(&self, node: &End<'src>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let label = if node.apply.is_some() {
            format!("End {:?} (apply)", node.name.inner_text())
        } else {
            format!("End {:?}", node.name.inner_text())
        };
        self.line(w, indent, &label, node.span())
    }

    fn format_alias(&self, node: &Alias<'src>, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(w, indent, "Alias", node.span())?;
        self.line(
            w,
            indent + 1,
            &format!("Name {:?}", node.name.inner_text(source)),
            node.name.span(),
        )?;
        self.line(
            w,
            indent + 1,
            &format!("Value {:?}", node.value.inner_text(source)),
            node.value.span(),
        )
    }

    fn format_comment_block(
        &self,
        node: &CommentBlock<'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let source = self.journal.source();
        self.line(
            w,
            indent,
            &format!("CommentBlock {:?}", node.name.inner_text()),
            node.span(),
        )?;
        self.line(
            w,
            indent + 1,
            &format!("Body {:?}", node.body_text(source)),
            node.span(),
        )
    }

    fn format_comment(
        &self,
        node: &Comment<'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        self.line(
            w,
            indent,
            &format!("Comment {:?}", node.token.inner_text()),
            node.span(),
        )
    }
}
