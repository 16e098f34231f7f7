//! Diagnostic values.

use serde::Serialize;
use text_size::TextRange;
use thiserror::Error;

/// The closed set of parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    UnexpectedToken,
    UnexpectedEof,
    InvalidDate,
    InvalidAccount,
    InvalidInteger,
    LeadingSpace,
}

impl DiagnosticKind {
    /// Stable string code, usable as an editor diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::UnexpectedToken => "unexpected-token",
            DiagnosticKind::UnexpectedEof => "unexpected-eof",
            DiagnosticKind::InvalidDate => "invalid-date",
            DiagnosticKind::InvalidAccount => "invalid-account",
            DiagnosticKind::InvalidInteger => "invalid-integer",
            DiagnosticKind::LeadingSpace => "leading-space",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

fn range_repr(range: &TextRange) -> String {
    format!(
        "{}..{}",
        u32::from(range.start()),
        u32::from(range.end())
    )
}

/// A single parse error: kind, span, human message.
///
/// Syntax errors are values, not panics; productions return them through
/// `Result` and the file loop collects them. The `Display`/`Error` form is
/// the plain rendering used when no source buffer is at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("error[{kind}] at {}: {message}", range_repr(.range))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
        }
    }
}
