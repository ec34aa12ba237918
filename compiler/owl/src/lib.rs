//! Owl - a small dynamically typed expression language.
//!
//! The pipeline is `tokenize` → `build` → `execute`:
//!
//! ```
//! let mut machine = owl::reset();
//! let tokens = owl::tokenize("(defunc add2 (a b) (+ a b)) (add2 3 4)");
//! let program = owl::build(&tokens).unwrap_or_default();
//! let value = owl::execute(&mut machine, &program);
//! assert_eq!(value.map(|v| v.to_string()), Ok("7".to_string()));
//! ```
//!
//! [`run`] does all three and reports either kind of error as [`Error`].
//! A front end reads lines, calls [`run`] (or [`Machine::execute_in_base_frame`]
//! to keep definitions), prints the value and stops once
//! [`Machine::should_exit`] is set.

mod tracing_setup;

use tracing::debug;

pub use owl_diagnostic::{Diagnostic, ErrorCode, Label};
pub use owl_eval::{
    buffer_handler, builtin_table, silent_handler, stdout_handler, Call, ControlAction,
    EvalError, EvalMode, EvalResult, Intrinsic, IntrinsicFn, IntrinsicTable, Machine,
    MachineBuilder, Number, SharedPrintHandler,
};
pub use owl_ir::{literal, Expr, FunctionDef, Position, Token, TokenKind, TokenList};
pub use owl_lexer::tokenize;
pub use owl_parse::{build, build_span, ParseError};
pub use tracing_setup::init_tracing;

/// A machine with every built-in intrinsic registered and one base frame.
pub fn reset() -> Machine {
    owl_eval::reset()
}

/// Evaluate `root` in a fresh frame. See [`Machine::execute`].
pub fn execute(machine: &mut Machine, root: &Expr) -> Result<Expr, EvalError> {
    machine.execute(root)
}

/// Anything that can stop [`run`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Parse(err) => err.code(),
            Error::Eval(err) => err.code(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Parse(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
        }
    }
}

/// Tokenize, build and execute `source`. Nothing is evaluated if the
/// brackets do not balance.
pub fn run(machine: &mut Machine, source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source);
    debug!(tokens = tokens.len(), "tokenized");
    let program = build(&tokens)?;
    Ok(machine.execute(&program)?)
}
