//! Tree builder errors.

use owl_diagnostic::{Diagnostic, ErrorCode};
use owl_ir::Position;

/// Unbalanced brackets. Building stops at the first one found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The outermost `(` that is never closed.
    #[error("unclosed delimiter `(` at {pos}")]
    UnclosedDelimiter { pos: Position },

    /// A `)` with no open group to close.
    #[error("unexpected closing delimiter `)` at {pos}")]
    UnexpectedClose { pos: Position },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnclosedDelimiter { .. } => ErrorCode::E1001,
            ParseError::UnexpectedClose { .. } => ErrorCode::E1002,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            ParseError::UnclosedDelimiter { pos } | ParseError::UnexpectedClose { pos } => *pos,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.code().description());
        match self {
            ParseError::UnclosedDelimiter { pos } => diag
                .with_label(*pos, "this `(` is never closed")
                .with_suggestion("add the missing `)`"),
            ParseError::UnexpectedClose { pos } => diag.with_label(*pos, "no matching `(`"),
        }
    }
}
