//! `==`, `<` and `>`.
//!
//! If either operand is a literal string the undelimited texts are compared
//! lexicographically; otherwise both are compared as numbers.

use std::cmp::Ordering;

use owl_ir::Expr;

use super::{Call, Intrinsic, IntrinsicTable};
use crate::errors::{ControlAction, EvalResult};
use crate::{EvalMode, Machine, Number};

pub(super) fn register(table: &mut IntrinsicTable) {
    table.register(Intrinsic::new("==", 2, "1 if equal, else 0", equal));
    table.register(Intrinsic::new("<", 2, "1 if less, else 0", less));
    table.register(Intrinsic::new(">", 2, "1 if greater, else 0", greater));
}

/// Order two evaluated values. `None` only for incomparable floats.
fn ordering(lhs: &Expr, rhs: &Expr) -> Option<Ordering> {
    if lhs.is_literal() || rhs.is_literal() {
        Some(lhs.plain_text().cmp(&rhs.plain_text()))
    } else {
        Number::of(lhs).partial_cmp(&Number::of(rhs))
    }
}

fn compare(machine: &mut Machine, call: &Call<'_>) -> Result<Option<Ordering>, ControlAction> {
    let lhs = machine.eval(&call.args[0], EvalMode::Live)?;
    let rhs = machine.eval(&call.args[1], EvalMode::Live)?;
    Ok(ordering(&lhs, &rhs))
}

fn equal(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    Ok(Expr::truth(compare(machine, call)? == Some(Ordering::Equal)))
}

fn less(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    Ok(Expr::truth(compare(machine, call)? == Some(Ordering::Less)))
}

fn greater(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    Ok(Expr::truth(compare(machine, call)? == Some(Ordering::Greater)))
}
