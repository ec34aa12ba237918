//! `=`, `defunc` and `quote`.

use std::rc::Rc;

use owl_ir::{Expr, FunctionDef};

use super::{as_name, expected_name, param_names, Call, Intrinsic, IntrinsicTable};
use crate::errors::EvalResult;
use crate::{EvalMode, Machine};

pub(super) fn register(table: &mut IntrinsicTable) {
    table.register(Intrinsic::new(
        "=",
        2,
        "bind a name to a value in the innermost frame",
        set,
    ));
    table.register(Intrinsic::new(
        "defunc",
        2,
        "define a named function: (defunc name params... body)",
        defunc,
    ));
    table.register(Intrinsic::new(
        "quote",
        1,
        "evaluate without dispatching intrinsics",
        quote,
    ));
}

/// `(= name value)`; yields the value.
fn set(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let name = as_name(&call.args[0])
        .cloned()
        .ok_or_else(|| expected_name(call, 0))?;
    let value = machine.eval(&call.args[1], EvalMode::Live)?;
    machine.env.bind(name, value.clone());
    Ok(value)
}

/// `(defunc name params... body)`; parameters may be bare atoms or grouped,
/// and the body is stored unevaluated.
fn defunc(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let name = as_name(&call.args[0])
        .cloned()
        .ok_or_else(|| expected_name(call, 0))?;

    let (body, param_exprs) = match call.args[1..].split_last() {
        Some(split) => split,
        None => return Err(expected_name(call, 1).into()),
    };

    let mut params = Vec::new();
    for (i, expr) in param_exprs.iter().enumerate() {
        if !param_names(expr, &mut params) {
            return Err(expected_name(call, i + 1).into());
        }
    }

    let def = Rc::new(FunctionDef::new(name, params, body.clone(), call.pos));
    machine.env.define_function(Rc::clone(&def));
    Ok(Expr::FunctionDef(def))
}

fn quote(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    machine.eval(&call.args[0], EvalMode::Quoted)
}
