//! The evaluation machine.

mod builder;
mod eval;
mod scope_guard;

use owl_ir::Expr;

use crate::errors::{ControlAction, EvalError, EvalResult};
use crate::intrinsics::IntrinsicTable;
use crate::{Environment, PrintHandlerImpl, SharedPrintHandler};

pub use builder::MachineBuilder;
pub use eval::EvalMode;
pub use scope_guard::ScopedMachine;

/// Evaluation state: frames, intrinsics, output and the halt flag.
///
/// Build one with [`Machine::new`] for the defaults or
/// [`Machine::builder`] to choose the print handler, intrinsic table or a
/// frame limit.
pub struct Machine {
    pub(crate) env: Environment,
    intrinsics: IntrinsicTable,
    print_handler: SharedPrintHandler,
    halted: bool,
    frame_limit: Option<usize>,
}

impl Machine {
    /// All built-in intrinsics, output to stdout, no frame limit.
    pub fn new() -> Self {
        MachineBuilder::new().build()
    }

    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn intrinsics(&self) -> &IntrinsicTable {
        &self.intrinsics
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub(crate) fn printer(&self) -> &PrintHandlerImpl {
        &self.print_handler
    }

    pub fn frame_limit(&self) -> Option<usize> {
        self.frame_limit
    }

    /// Set by `exit`; the front end polls it between programs.
    pub fn should_exit(&self) -> bool {
        self.halted
    }

    pub fn halt(&mut self) {
        self.halted = true;
    }

    /// Drop every definition and clear the halt flag. The intrinsic table and
    /// print handler are kept.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn reset(&mut self) {
        self.env = Environment::new();
        self.halted = false;
    }

    /// Run a program in a fresh frame that is popped afterwards, so its
    /// definitions do not outlive it.
    ///
    /// A `return` reaching the program boundary supplies the result.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute(&mut self, program: &Expr) -> Result<Expr, EvalError> {
        let result = self.with_frame(|scoped| scoped.eval(program, EvalMode::Live));
        finish(result)
    }

    /// Run a program directly in the base frame, keeping its definitions for
    /// later programs. This is what a line-at-a-time front end wants.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn execute_in_base_frame(&mut self, program: &Expr) -> Result<Expr, EvalError> {
        let result = self.eval(program, EvalMode::Live);
        finish(result)
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

fn finish(result: EvalResult) -> Result<Expr, EvalError> {
    match result {
        Ok(value) => Ok(value),
        Err(ControlAction::Return(payload)) => Ok(payload.unwrap_or_else(Expr::empty)),
        Err(ControlAction::Error(err)) => Err(err),
    }
}
