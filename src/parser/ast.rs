//! Parse nodes.
//!
//! A closed sum of typed nodes, each owning the tokens and groups it was
//! parsed from and deriving its span from them. Nodes never hold parent
//! back-references; the tree is self-contained relative to the source
//! buffer, and every text accessor is a zero-copy slice of it.

use indexmap::IndexMap;
use text_size::{TextRange, TextSize};

use super::group::Group;
use super::token::{Token, TokenKind};

fn cover(span: TextRange, other: Option<TextRange>) -> TextRange {
    match other {
        Some(other) => span.cover(other),
        None => span,
    }
}

/// A calendar date as written: two or three integers separated by `/` or
/// `-`. Component ranges are not validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date<'src> {
    pub tokens: Group<'src>,
}

impl<'src> Date<'src> {
    pub fn span(&self) -> TextRange {
        self.tokens.span()
    }

    pub fn text(&self, source: &'src str) -> &'src str {
        self.tokens.inner_text(source)
    }
}

/// Secondary date following `=` on a transaction header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxDate<'src> {
    pub equal: Token<'src>,
    pub date: Date<'src>,
}

impl AuxDate<'_> {
    pub fn span(&self) -> TextRange {
        self.equal.span().cover(self.date.span())
    }
}

/// Parenthesized transaction code, e.g. `(101)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code<'src> {
    pub open: Token<'src>,
    pub contents: Group<'src>,
    pub close: Token<'src>,
}

impl<'src> Code<'src> {
    pub fn span(&self) -> TextRange {
        self.open.span().cover(self.close.span())
    }

    pub fn text(&self, source: &'src str) -> &'src str {
        self.contents.inner_text(source)
    }
}

/// A posting amount. Exactly one of the commodity slots is populated when a
/// commodity was written; which one records its placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount<'src> {
    pub minus: Option<Token<'src>>,
    pub number: Token<'src>,
    pub pre_commodity: Option<Group<'src>>,
    pub post_commodity: Option<Group<'src>>,
}

impl<'src> Amount<'src> {
    pub fn span(&self) -> TextRange {
        let mut span = self.number.span();
        span = cover(span, self.minus.map(|t| t.span()));
        span = cover(span, self.pre_commodity.as_ref().map(Group::span));
        span = cover(span, self.post_commodity.as_ref().map(Group::span));
        span
    }

    pub fn is_negative(&self) -> bool {
        self.minus.is_some()
    }

    pub fn number_text(&self) -> &'src str {
        self.number.inner_text()
    }

    pub fn commodity_text(&self, source: &'src str) -> Option<&'src str> {
        self.pre_commodity
            .as_ref()
            .or(self.post_commodity.as_ref())
            .map(|g| g.inner_text(source))
    }
}

/// Whether a virtual posting participates in balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKind {
    /// `(Account)`: excluded from balancing.
    Unbalanced,
    /// `[Account]`: must still balance.
    Balanced,
}

/// An account reference: either a bare run of tokens up to a hard space, or
/// a virtual form surrounded by `(…)` or `[…]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account<'src> {
    Plain(Group<'src>),
    Surrounded {
        open: Token<'src>,
        contents: Group<'src>,
        close: Token<'src>,
    },
}

impl<'src> Account<'src> {
    pub fn span(&self) -> TextRange {
        match self {
            Account::Plain(tokens) => tokens.span(),
            Account::Surrounded { open, close, .. } => open.span().cover(close.span()),
        }
    }

    pub fn name(&self, source: &'src str) -> &'src str {
        match self {
            Account::Plain(tokens) => tokens.inner_text(source),
            Account::Surrounded { contents, .. } => contents.inner_text(source),
        }
    }

    pub fn virtual_kind(&self) -> Option<VirtualKind> {
        match self {
            Account::Plain(_) => None,
            Account::Surrounded { open, .. } => match open.kind {
                TokenKind::ParenOpen => Some(VirtualKind::Unbalanced),
                TokenKind::BracketOpen => Some(VirtualKind::Balanced),
                kind => panic!("account opened by {kind:?}: the grammar only admits `(` and `[`"),
            },
        }
    }
}

/// Transaction payee; may span several hard-space-separated runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payee<'src> {
    pub tokens: Group<'src>,
}

impl<'src> Payee<'src> {
    pub fn span(&self) -> TextRange {
        self.tokens.span()
    }

    pub fn name(&self, source: &'src str) -> &'src str {
        self.tokens.inner_text(source)
    }
}

/// A comment, wherever it appears. The comment character is the first byte
/// of the token; the body is the rest.
///
/// Tag extraction (`:tag:`, `key: value`) is not implemented: [`tags`] and
/// [`typed_tags`] deterministically return empty maps.
///
/// [`tags`]: Comment::tags
/// [`typed_tags`]: Comment::typed_tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'src> {
    pub token: Token<'src>,
}

impl<'src> Comment<'src> {
    pub fn span(&self) -> TextRange {
        self.token.span()
    }

    /// The introducing character: one of `; # % * |`.
    pub fn comment_char(&self) -> char {
        self.token.inner_text().as_bytes()[0] as char
    }

    pub fn body(&self) -> &'src str {
        &self.token.inner_text()[1..]
    }

    pub fn tags(&self) -> IndexMap<&'src str, &'src str> {
        IndexMap::new()
    }

    pub fn typed_tags(&self) -> IndexMap<&'src str, &'src str> {
        IndexMap::new()
    }
}

/// An account/amount line inside a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting<'src> {
    pub account: Account<'src>,
    pub amount: Option<Amount<'src>>,
    pub comments: Vec<Comment<'src>>,
}

impl Posting<'_> {
    pub fn span(&self) -> TextRange {
        let mut span = self.account.span();
        span = cover(span, self.amount.as_ref().map(Amount::span));
        span = cover(span, self.comments.last().map(Comment::span));
        span
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<'src> {
    pub date: Date<'src>,
    pub aux_date: Option<AuxDate<'src>>,
    /// The `*` flag, mutually exclusive with `pending`.
    pub cleared: Option<Token<'src>>,
    /// The `!` flag, mutually exclusive with `cleared`.
    pub pending: Option<Token<'src>>,
    pub code: Option<Code<'src>>,
    pub payee: Option<Payee<'src>>,
    /// Comments on the header line or on lines before the first posting.
    pub comments: Vec<Comment<'src>>,
    pub postings: Vec<Posting<'src>>,
}

impl Transaction<'_> {
    pub fn span(&self) -> TextRange {
        let mut span = self.date.span();
        span = cover(span, self.aux_date.as_ref().map(AuxDate::span));
        span = cover(span, self.cleared.map(|t| t.span()));
        span = cover(span, self.pending.map(|t| t.span()));
        span = cover(span, self.code.as_ref().map(Code::span));
        span = cover(span, self.payee.as_ref().map(Payee::span));
        span = cover(span, self.comments.last().map(Comment::span));
        span = cover(span, self.postings.last().map(Posting::span));
        span
    }
}

/// `key value?` line nested under a standard directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDirective<'src> {
    pub key: Token<'src>,
    pub value: Option<Group<'src>>,
}

impl SubDirective<'_> {
    pub fn span(&self) -> TextRange {
        cover(self.key.span(), self.value.as_ref().map(Group::span))
    }
}

/// A standard directive: identifier, optional argument, indented
/// sub-directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'src> {
    pub name: Token<'src>,
    pub argument: Option<Group<'src>>,
    pub sub_directives: Vec<SubDirective<'src>>,
}

impl Directive<'_> {
    pub fn span(&self) -> TextRange {
        let mut span = self.name.span();
        span = cover(span, self.argument.as_ref().map(Group::span));
        span = cover(span, self.sub_directives.last().map(SubDirective::span));
        span
    }
}

/// `apply <name> <args…>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apply<'src> {
    pub apply: Token<'src>,
    pub name: Token<'src>,
    pub args: Option<Group<'src>>,
}

impl Apply<'_> {
    pub fn span(&self) -> TextRange {
        let span = self.apply.span().cover(self.name.span());
        cover(span, self.args.as_ref().map(Group::span))
    }
}

/// `end <name>` or `end apply <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct End<'src> {
    pub end: Token<'src>,
    pub apply: Option<Token<'src>>,
    pub name: Token<'src>,
}

impl End<'_> {
    pub fn span(&self) -> TextRange {
        self.end.span().cover(self.name.span())
    }
}

/// `alias <name>=<value>`. The value runs to the end of the line and may
/// itself contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias<'src> {
    pub alias: Token<'src>,
    pub name: Group<'src>,
    pub equal: Token<'src>,
    pub value: Group<'src>,
}

impl Alias<'_> {
    pub fn span(&self) -> TextRange {
        self.alias.span().cover(self.value.span())
    }
}

/// Multi-line comment bounded by `comment … end comment` (or `test … end
/// test`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock<'src> {
    pub name: Token<'src>,
    /// The newline that terminated the opening line; its trailing whitespace
    /// is the first slice of the body.
    pub newline: Token<'src>,
    pub body: Option<Group<'src>>,
    pub end: Token<'src>,
    pub end_name: Token<'src>,
}

impl<'src> CommentBlock<'src> {
    pub fn span(&self) -> TextRange {
        self.name.span().cover(self.end_name.span())
    }

    /// Everything between the opening line and the terminator.
    pub fn body_text(&self, source: &'src str) -> String {
        let mut text = String::from(self.newline.trailing_ws());
        if let Some(body) = &self.body {
            text.push_str(body.outer_text(source));
        }
        text
    }
}

/// A top-level item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item<'src> {
    Transaction(Transaction<'src>),
    Directive(Directive<'src>),
    Apply(Apply<'src>),
    End(End<'src>),
    Alias(Alias<'src>),
    CommentBlock(CommentBlock<'src>),
    Comment(Comment<'src>),
}

impl Item<'_> {
    pub fn span(&self) -> TextRange {
        match self {
            Item::Transaction(node) => node.span(),
            Item::Directive(node) => node.span(),
            Item::Apply(node) => node.span(),
            Item::End(node) => node.span(),
            Item::Alias(node) => node.span(),
            Item::CommentBlock(node) => node.span(),
            Item::Comment(node) => node.span(),
        }
    }
}

/// Root of the tree: the top-level items in source order. Items on either
/// side of a syntax error are still present; the error itself lives in the
/// diagnostics list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File<'src> {
    pub children: Vec<Item<'src>>,
}

impl File<'_> {
    pub fn span(&self) -> TextRange {
        match (self.children.first(), self.children.last()) {
            (Some(first), Some(last)) => first.span().cover(last.span()),
            _ => TextRange::empty(TextSize::from(0)),
        }
    }
}
