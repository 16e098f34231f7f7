//! Lossless, fault-tolerant parser for plain-text ledger journals.
//!
//! Given source text, parsing produces a concrete syntax tree, an ordered
//! diagnostics list, and symbol tables of declared accounts and payees.
//! Every byte of input is preserved (whitespace and comments live on
//! tokens), so spans are exact and the buffer can be reproduced from the
//! token stream. Parsing continues after errors: a malformed line becomes a
//! diagnostic and the items around it still parse.
//!
//! # Example
//!
//! ```
//! use ledger_parse::Journal;
//!
//! let journal = Journal::parse(
//!     "2024-06-12 Grocery Store\n  Expenses:Food  $50.23\n  Assets:Checking\n",
//! );
//!
//! assert!(journal.is_valid());
//! assert!(journal.accounts().has("Expenses:Food"));
//! assert!(journal.payees().has("Grocery Store"));
//! assert_eq!(journal.render(), journal.source());
//! ```

pub mod diagnostics;
pub mod journal;
pub mod parser;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use journal::{Journal, JournalPrinter};
pub use parser::{Lexer, ParseResult, Parser, SymbolTable, Token, TokenKind, lex};
