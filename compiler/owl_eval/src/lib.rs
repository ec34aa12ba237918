//! Tree-walking evaluator for Owl.
//!
//! A [`Machine`] owns the frame stack ([`Environment`]), the intrinsic table
//! and the print handler. [`Machine::execute`] runs one program tree in a
//! fresh frame; [`reset`] builds a machine with every built-in registered.
//!
//! Evaluation returns [`EvalResult`]: `Ok` for a value, `Err` for a
//! [`ControlAction`], which is either an early `return` travelling up to the
//! nearest `loop`, function call or program boundary, or an [`EvalError`]
//! travelling all the way out.

mod environment;
mod errors;
pub mod intrinsics;
mod machine;
mod number;
mod print_handler;

pub use environment::{Entry, Environment, Frame, Resolved};
pub use errors::{ControlAction, EvalError, EvalResult};
pub use intrinsics::{builtin_table, Call, Intrinsic, IntrinsicFn, IntrinsicTable};
pub use machine::{EvalMode, Machine, MachineBuilder, ScopedMachine};
pub use number::Number;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};

/// A machine with all built-in intrinsics, printing to stdout.
pub fn reset() -> Machine {
    Machine::new()
}
