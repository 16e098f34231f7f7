//! High-level facade: parse a buffer once, query everything after.

mod printer;


pub use printer::JournalPrinter;

use crate::diagnostics::{Diagnostics, DiagnosticsPrinter};
use crate::parser::{File, Lexer, Parser, SymbolTable};

/// A parsed journal: the tree, the diagnostics, and the declaration tables,
/// all borrowing from the source buffer.
///
/// Parsing never fails as a whole; malformed lines become diagnostics and
/// the items around them still parse. [`is_valid`](Journal::is_valid) is the
/// one-call health check.
#[derive(Debug)]
pub struct Journal<'src> {
    source: &'src str,
    file: File<'src>,
    diagnostics: Diagnostics,
    accounts: SymbolTable<'src>,
    payees: SymbolTable<'src>,
}

impl<'src> Journal<'src> {
    pub fn parse(source: &'src str) -> Self {
        let result = Parser::new(source).parse();
        Self {
            source,
            file: result.file,
            diagnostics: result.diagnostics,
            accounts: result.accounts,
            payees: result.payees,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn file(&self) -> &File<'src> {
        &self.file
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn accounts(&self) -> &SymbolTable<'src> {
        &self.accounts
    }

    pub fn payees(&self) -> &SymbolTable<'src> {
        &self.payees
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Printer pre-loaded with this journal's source buffer.
    pub fn diagnostics_printer(&self) -> DiagnosticsPrinter<'_, '_> {
        self.diagnostics.printer().source(self.source)
    }

    /// Reproduces the buffer byte-for-byte by concatenating every token's
    /// outer text in lexer order.
    pub fn render(&self) -> String {
        Lexer::new(self.source).map(|token| token.outer_text()).collect()
    }

    pub fn printer(&self) -> JournalPrinter<'_, 'src> {
        JournalPrinter::new(self)
    }

    /// Indented tree dump; see [`JournalPrinter`].
    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
