//! `list`, `strjoin`, `map` and `reduce`.

use std::rc::Rc;

use owl_ir::{literal, Expr, FunctionDef, List, Position};

use super::{as_name, param_names, Call, Intrinsic, IntrinsicTable};
use crate::environment::Resolved;
use crate::errors::{ControlAction, EvalError, EvalResult};
use crate::{EvalMode, Machine};

pub(super) fn register(table: &mut IntrinsicTable) {
    table.register(Intrinsic::new(
        "list",
        0,
        "the list of evaluated arguments",
        list,
    ));
    table.register(Intrinsic::new(
        "strjoin",
        0,
        "concatenate argument texts into a literal",
        strjoin,
    ));
    table.register(Intrinsic::new(
        "map",
        2,
        "(map items fn); the list of results",
        map,
    ));
    table.register(Intrinsic::new(
        "reduce",
        2,
        "(reduce items [init] fn); left fold",
        reduce,
    ));
}

fn list(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let values = call
        .args
        .iter()
        .map(|arg| machine.eval(arg, EvalMode::Live))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Expr::list(values, call.pos))
}

fn strjoin(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let mut joined = String::new();
    for arg in call.args {
        let value = machine.eval(arg, EvalMode::Live)?;
        append_text(&value, &mut joined);
    }
    Ok(Expr::value(literal::quote(&joined)))
}

fn append_text(value: &Expr, out: &mut String) {
    match value {
        Expr::List(list) => list.items.iter().for_each(|item| append_text(item, out)),
        _ => out.push_str(&value.plain_text()),
    }
}

fn map(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let items = eval_items(machine, &call.args[0])?;
    let callable = Callable::resolve(machine, &call.args[1], call.pos_of(1))?;

    let mut results = Vec::with_capacity(items.len());
    for item in items {
        results.push(callable.call(machine, vec![item], call.pos)?);
    }
    Ok(Expr::list(results, call.pos))
}

/// `(reduce items fn)` folds from the first element; an empty list yields
/// empty. `(reduce items init fn)` folds from `init`.
fn reduce(machine: &mut Machine, call: &Call<'_>) -> EvalResult {
    let items = eval_items(machine, &call.args[0])?;
    let (init, func_index) = match call.args.get(2) {
        Some(_) => (Some(&call.args[1]), 2),
        None => (None, 1),
    };

    let mut items = items.into_iter();
    let mut acc = match init {
        Some(expr) => machine.eval(expr, EvalMode::Live)?,
        None => match items.next() {
            Some(first) => first,
            None => return Ok(Expr::empty()),
        },
    };

    let callable = Callable::resolve(machine, &call.args[func_index], call.pos_of(func_index))?;
    for item in items {
        acc = callable.call(machine, vec![acc, item], call.pos)?;
    }
    Ok(acc)
}

/// Elements of a collection argument: a list value's children, nothing for
/// empty, otherwise the single value.
fn eval_items(machine: &mut Machine, expr: &Expr) -> Result<Vec<Expr>, ControlAction> {
    Ok(match machine.eval_whole(expr)? {
        Expr::List(list) => list.items.to_vec(),
        value if value.is_empty_atom() => Vec::new(),
        value => vec![value],
    })
}

/// The function argument of `map` and `reduce`, with any fixed leading
/// arguments.
struct Callable {
    def: Rc<FunctionDef>,
    prefix: Vec<Expr>,
}

impl Callable {
    /// Accepts:
    /// - `f`, naming a function (or bound to a function value)
    /// - `(f a b)`, naming a function; `a b` are evaluated once and passed
    ///   before each element
    /// - `(params body)` or `(name params body)`, an inline function
    fn resolve(machine: &mut Machine, expr: &Expr, pos: Position) -> Result<Self, ControlAction> {
        match expr {
            Expr::Atom(atom) => match machine.env.lookup(&atom.text) {
                Some(Resolved::Function(def) | Resolved::Value(Expr::FunctionDef(def))) => {
                    Ok(Callable::plain(def))
                }
                _ => Err(EvalError::NotCallable {
                    found: atom.text.to_string(),
                    pos,
                }
                .into()),
            },
            Expr::List(list) => {
                if let Some(def) = named_head(machine, list) {
                    let prefix = list
                        .args()
                        .iter()
                        .map(|arg| machine.eval(arg, EvalMode::Live))
                        .collect::<Result<Vec<_>, _>>()?;
                    return Ok(Callable { def, prefix });
                }
                Ok(Callable::plain(inline_function(list, pos)?))
            }
            Expr::FunctionDef(def) => Ok(Callable::plain(Rc::clone(def))),
        }
    }

    fn plain(def: Rc<FunctionDef>) -> Self {
        Callable {
            def,
            prefix: Vec::new(),
        }
    }

    fn call(&self, machine: &mut Machine, args: Vec<Expr>, pos: Position) -> EvalResult {
        let args = if self.prefix.is_empty() {
            args
        } else {
            self.prefix.iter().cloned().chain(args).collect()
        };
        machine.call_function(&self.def, args, pos, EvalMode::Live)
    }
}

fn named_head(machine: &Machine, list: &List) -> Option<Rc<FunctionDef>> {
    let name = list.head().and_then(as_name)?;
    match machine.env.lookup(name) {
        Some(Resolved::Function(def)) => Some(def),
        _ => None,
    }
}

/// Build a temporary unnamed function from `(params body)` or
/// `(name (params...) body)`. The named form needs bracketed parameters.
fn inline_function(list: &List, pos: Position) -> Result<Rc<FunctionDef>, EvalError> {
    let invalid = || EvalError::InvalidFunctionLiteral {
        found: Expr::List(list.clone()).to_string(),
        pos,
    };

    let (name, params_expr, body) = match &list.items[..] {
        [params, body] => (Rc::from(""), params, body),
        // `(a b (+ a b))` would otherwise read as a function `a` of `b`.
        [name, params @ Expr::List(_), body] => {
            (as_name(name).cloned().ok_or_else(invalid)?, params, body)
        }
        _ => return Err(invalid()),
    };

    let mut params = Vec::new();
    if !param_names(params_expr, &mut params) {
        return Err(invalid());
    }
    Ok(Rc::new(FunctionDef::new(name, params, body.clone(), pos)))
}
