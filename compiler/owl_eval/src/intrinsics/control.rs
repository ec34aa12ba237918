//! `?`, `loop` and `return`.

use owl_ir::{literal, Expr};

use super::{Call, Intrinsic, IntrinsicTable};
use crate::errors::{ControlAction, EvalResult};
use crate::{EvalMode, Machine};

pub(super) fn register(table: &mut IntrinsicTable) {
    table.register(Intrinsic::new(
        "?",
        2,
        "(? cond then [else]); else is taken when cond is 0",
        branch,
    ));
    table.register(Intrinsic::new(
        "loop",
        1,
        "repeat the body until it returns",
        repeat,
    ));
    table.register(Intrinsic::new(
        "return",
        0,
        "leave the nearest loop or function",
        ret,
    ));
}

/// Only the taken branch is evaluated.
fn branch(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let cond = machine.eval(&call.args[0], EvalMode::Live)?;
    let taken = if cond.atom_text() == Some(literal::FALSE) {
        call.args.get(2)
    } else {
        call.args.get(1)
    };
    match taken {
        Some(expr) => machine.eval(expr, EvalMode::Live),
        None => Ok(Expr::empty()),
    }
}

/// Runs the body expressions in order, over and over, in the caller's
/// frame, so bindings made by the body outlive the loop.
///
/// Ends on `return` (yielding its payload) or once `exit` has set the halt
/// flag (yielding empty).
fn repeat(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    loop {
        for expr in call.args {
            if let Err(action) = machine.eval(expr, EvalMode::Live) {
                return action.catch_return();
            }
            if machine.should_exit() {
                return Ok(Expr::empty());
            }
        }
    }
}

/// `(return)` or `(return value)`; extra arguments are ignored.
fn ret(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let payload = match call.args.first() {
        Some(expr) => Some(machine.eval(expr, EvalMode::Live)?),
        None => None,
    };
    Err(ControlAction::Return(payload))
}
