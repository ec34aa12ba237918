//! Built-in operations dispatched by head-atom name.
//!
//! An [`IntrinsicTable`] is a plain value: [`builtin_table`] builds the
//! standard one and a [`Machine`] receives it through its builder. Tables
//! are never mutated after a machine is built.

mod arithmetic;
mod binding;
mod compare;
mod control;
mod io;
mod iteration;

use std::fmt;
use std::rc::Rc;

use owl_ir::{Expr, Position};
use rustc_hash::FxHashMap;

use crate::errors::{EvalError, EvalResult};
use crate::Machine;

/// Native implementation of an intrinsic.
pub type IntrinsicFn = fn(&mut Machine, &Call<'_>) -> EvalResult;

/// A named native operation.
#[derive(Clone, Copy)]
pub struct Intrinsic {
    pub name: &'static str,
    /// Checked before dispatch; fewer arguments is an `ArityMismatch`.
    pub min_args: usize,
    /// One line of usage, shown with arity errors.
    pub description: &'static str,
    pub func: IntrinsicFn,
}

impl Intrinsic {
    pub const fn new(
        name: &'static str,
        min_args: usize,
        description: &'static str,
        func: IntrinsicFn,
    ) -> Self {
        Intrinsic {
            name,
            min_args,
            description,
            func,
        }
    }
}

impl fmt::Debug for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intrinsic")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .finish_non_exhaustive()
    }
}

/// One intrinsic invocation: the unevaluated arguments and where it happened.
#[derive(Clone, Copy, Debug)]
pub struct Call<'a> {
    pub name: &'static str,
    pub args: &'a [Expr],
    pub pos: Position,
}

impl Call<'_> {
    /// Position of argument `index`, falling back to the call's own.
    pub fn pos_of(&self, index: usize) -> Position {
        self.args
            .get(index)
            .map(Expr::pos)
            .filter(|pos| !pos.is_dummy())
            .unwrap_or(self.pos)
    }
}

/// Intrinsics by name, in registration order.
#[derive(Clone, Default)]
pub struct IntrinsicTable {
    entries: Vec<Intrinsic>,
    index: FxHashMap<&'static str, usize>,
}

impl IntrinsicTable {
    pub fn new() -> Self {
        IntrinsicTable {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add `intrinsic`. Registering a name again replaces the earlier entry
    /// in place.
    pub fn register(&mut self, intrinsic: Intrinsic) {
        match self.index.get(intrinsic.name) {
            Some(&slot) => self.entries[slot] = intrinsic,
            None => {
                self.index.insert(intrinsic.name, self.entries.len());
                self.entries.push(intrinsic);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Intrinsic> {
        self.index.get(name).map(|&slot| &self.entries[slot])
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|i| i.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for IntrinsicTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// The standard intrinsic table.
pub fn builtin_table() -> IntrinsicTable {
    let mut table = IntrinsicTable::new();

    // Output and lifecycle
    io::register(&mut table);

    // Numbers and comparison
    arithmetic::register(&mut table);
    compare::register(&mut table);

    // Names and functions
    binding::register(&mut table);

    // Control flow
    control::register(&mut table);

    // Lists and strings
    iteration::register(&mut table);

    table
}

/// A name position: a non-empty atom that is not a literal.
fn as_name(expr: &Expr) -> Option<&Rc<str>> {
    match expr {
        Expr::Atom(atom) if !atom.text.is_empty() && !atom.is_literal() => Some(&atom.text),
        _ => None,
    }
}

/// Parameter names from an atom or a (possibly nested) list of atoms.
fn param_names(expr: &Expr, out: &mut Vec<Rc<str>>) -> bool {
    match expr {
        Expr::List(list) => list.items.iter().all(|item| param_names(item, out)),
        _ => match as_name(expr) {
            Some(name) => {
                out.push(Rc::clone(name));
                true
            }
            None => false,
        },
    }
}

fn expected_name(call: &Call<'_>, index: usize) -> EvalError {
    EvalError::ExpectedName {
        intrinsic: call.name,
        found: call.args.get(index).map(ToString::to_string).unwrap_or_default(),
        pos: call.pos_of(index),
    }
}

#[cfg(test)]
mod tests;
