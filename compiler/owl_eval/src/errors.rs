//! Evaluation errors and control flow.

use owl_diagnostic::{Diagnostic, ErrorCode};
use owl_ir::{Expr, Position};

/// Errors that abort a program.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("`{name}` expects at least {expected} argument(s), got {got}")]
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
        /// The intrinsic's one-line description, shown as a note.
        usage: &'static str,
        pos: Position,
    },

    #[error("`{intrinsic}` expects a name, found `{found}`")]
    ExpectedName {
        intrinsic: &'static str,
        found: String,
        pos: Position,
    },

    #[error("division by zero in `{op}`")]
    DivisionByZero { op: &'static str, pos: Position },

    #[error("`{found}` does not name a function")]
    NotCallable { found: String, pos: Position },

    #[error("invalid function literal `{found}`")]
    InvalidFunctionLiteral { found: String, pos: Position },

    #[error("call depth exceeded the limit of {limit} frames")]
    FrameLimitExceeded { limit: usize, pos: Position },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::ArityMismatch { .. } => ErrorCode::E2001,
            EvalError::ExpectedName { .. } => ErrorCode::E2002,
            EvalError::DivisionByZero { .. } => ErrorCode::E2003,
            EvalError::NotCallable { .. } => ErrorCode::E2004,
            EvalError::InvalidFunctionLiteral { .. } => ErrorCode::E2005,
            EvalError::FrameLimitExceeded { .. } => ErrorCode::E2006,
        }
    }

    pub fn pos(&self) -> Position {
        match self {
            EvalError::ArityMismatch { pos, .. }
            | EvalError::ExpectedName { pos, .. }
            | EvalError::DivisionByZero { pos, .. }
            | EvalError::NotCallable { pos, .. }
            | EvalError::InvalidFunctionLiteral { pos, .. }
            | EvalError::FrameLimitExceeded { pos, .. } => *pos,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.pos(), self.code().description());
        match self {
            EvalError::ArityMismatch { name, usage, .. } => {
                diag.with_note(format!("`{name}`: {usage}"))
            }
            EvalError::InvalidFunctionLiteral { .. } => {
                diag.with_note("expected `(params body)` or `(name params body)`")
            }
            EvalError::NotCallable { .. } => {
                diag.with_suggestion("define it first with `defunc`, or pass an inline `(params body)`")
            }
            _ => diag,
        }
    }
}

/// Why evaluation stopped before producing a value.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// `return`, with its optional payload.
    Return(Option<Expr>),
    Error(EvalError),
}

impl ControlAction {
    /// Resolve at a boundary that consumes `return`: the payload becomes the
    /// value, errors keep propagating.
    pub fn catch_return(self) -> EvalResult {
        match self {
            ControlAction::Return(payload) => Ok(payload.unwrap_or_else(Expr::empty)),
            ControlAction::Error(err) => Err(ControlAction::Error(err)),
        }
    }
}

impl From<EvalError> for ControlAction {
    fn from(err: EvalError) -> Self {
        ControlAction::Error(err)
    }
}

pub type EvalResult = Result<Expr, ControlAction>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes() {
        let err = EvalError::DivisionByZero {
            op: "//",
            pos: Position::new(1, 2),
        };
        assert_eq!(err.code(), ErrorCode::E2003);
        assert_eq!(err.to_string(), "division by zero in `//`");
    }

    #[test]
    fn test_diagnostic_carries_position() {
        let err = EvalError::ArityMismatch {
            name: "=",
            expected: 2,
            got: 1,
            usage: "bind a name to a value",
            pos: Position::new(4, 7),
        };
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E2001);
        assert_eq!(diag.labels[0].pos, Position::new(4, 7));
        assert_eq!(
            diag.to_string(),
            "error[E2001]: `=` expects at least 2 argument(s), got 1\n  --> 4:7: too few arguments\n  = note: `=`: bind a name to a value"
        );
    }

    #[test]
    fn test_catch_return() {
        let caught = ControlAction::Return(Some(Expr::value("3"))).catch_return();
        assert_eq!(caught, Ok(Expr::value("3")));

        let caught = ControlAction::Return(None).catch_return();
        assert_eq!(caught, Ok(Expr::empty()));

        let err = EvalError::NotCallable {
            found: "x".into(),
            pos: Position::DUMMY,
        };
        assert_eq!(
            ControlAction::from(err.clone()).catch_return(),
            Err(ControlAction::Error(err))
        );
    }
}
