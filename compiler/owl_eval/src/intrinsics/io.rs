//! `print`, `println` and `exit`.

use owl_ir::{literal, Expr};

use super::{Call, Intrinsic, IntrinsicTable};
use crate::errors::EvalResult;
use crate::{EvalMode, Machine};

pub(super) fn register(table: &mut IntrinsicTable) {
    table.register(Intrinsic::new(
        "exit",
        0,
        "stop the front end after this program",
        exit,
    ));
    table.register(Intrinsic::new(
        "print",
        0,
        "print each argument with no separator",
        print,
    ));
    table.register(Intrinsic::new(
        "println",
        0,
        "print each argument on its own line",
        println,
    ));
}

/// Output form: literal delimiters dropped and `\n` expanded.
fn printable(value: &Expr) -> String {
    literal::unescape_newlines(&value.plain_text()).into_owned()
}

fn exit(machine: &mut Machine, _call: &Call<'_>) -> EvalResult {
    machine.halt();
    Ok(Expr::empty())
}

fn print(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    for arg in call.args {
        let value = machine.eval(arg, EvalMode::Live)?;
        machine.printer().print(&printable(&value));
    }
    Ok(Expr::empty())
}

fn println(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    if call.args.is_empty() {
        machine.printer().println("");
    }
    for arg in call.args {
        let value = machine.eval(arg, EvalMode::Live)?;
        machine.printer().println(&printable(&value));
    }
    Ok(Expr::empty())
}
