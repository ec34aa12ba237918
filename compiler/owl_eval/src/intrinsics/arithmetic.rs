//! `+ - * / // modi`.
//!
//! Operands are evaluated left to right and read with [`Number::of`].

use std::ops::{Add, Mul, Sub};

use super::{Call, Intrinsic, IntrinsicTable};
use crate::errors::{ControlAction, EvalError, EvalResult};
use crate::{EvalMode, Machine, Number};

pub(super) fn register(table: &mut IntrinsicTable) {
    table.register(Intrinsic::new("+", 0, "sum; identity 0", add));
    table.register(Intrinsic::new(
        "-",
        0,
        "first argument minus the rest",
        sub,
    ));
    table.register(Intrinsic::new("*", 0, "product; identity 1", mul));
    table.register(Intrinsic::new(
        "/",
        0,
        "floating division of the first argument by the rest",
        div,
    ));
    table.register(Intrinsic::new(
        "//",
        0,
        "integer division truncating toward zero",
        int_div,
    ));
    table.register(Intrinsic::new(
        "modi",
        0,
        "integer remainder truncating toward zero",
        int_rem,
    ));
}

fn operands(machine: &mut Machine, call: &Call<'_>) -> Result<Vec<Number>, ControlAction> {
    call.args
        .iter()
        .map(|arg| machine.eval(arg, EvalMode::Live).map(|value| Number::of(&value)))
        .collect()
}

fn add(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let sum = operands(machine, call)?.into_iter().fold(Number::ZERO, Add::add);
    Ok(sum.into_expr())
}

fn mul(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let product = operands(machine, call)?.into_iter().fold(Number::ONE, Mul::mul);
    Ok(product.into_expr())
}

fn sub(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let nums = operands(machine, call)?;
    let result = match nums.split_first() {
        Some((&first, rest)) => rest.iter().copied().fold(first, Sub::sub),
        None => Number::ZERO,
    };
    Ok(result.into_expr())
}

fn div(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let nums = operands(machine, call)?;
    let Some((&first, rest)) = nums.split_first() else {
        return Ok(Number::ZERO.into_expr());
    };
    let mut acc = first;
    for (i, &divisor) in rest.iter().enumerate() {
        if divisor.is_zero() {
            return Err(division_by_zero(call, i + 1));
        }
        acc = acc / divisor;
    }
    Ok(acc.into_expr())
}

fn int_div(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    integer_fold(machine, call, Number::int_div)
}

fn int_rem(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    integer_fold(machine, call, Number::int_rem)
}

/// Fold with an integer operation that fails only on a zero divisor.
fn integer_fold(
    machine: &mut Machine,
    call: &Call<'_>,
    op: fn(Number, Number) -> Option<Number>,
) -> EvalResult {
    let nums = operands(machine, call)?;
    let Some((&first, rest)) = nums.split_first() else {
        return Ok(Number::ZERO.into_expr());
    };
    let mut acc = Number::Int(first.as_i64());
    for (i, &divisor) in rest.iter().enumerate() {
        acc = op(acc, divisor).ok_or_else(|| division_by_zero(call, i + 1))?;
    }
    Ok(acc.into_expr())
}

fn division_by_zero(call: &Call<'_>, index: usize) -> ControlAction {
    EvalError::DivisionByZero {
        op: call.name,
        pos: call.pos_of(index),
    }
    .into()
}
