//! Expression evaluation and function invocation.

use std::rc::Rc;

use owl_ir::{Atom, Expr, FunctionDef, List, Position};
use owl_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Machine;
use crate::environment::Resolved;
use crate::errors::{ControlAction, EvalError, EvalResult};
use crate::intrinsics::{Call, Intrinsic};

/// Whether intrinsics are dispatched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Names are substituted and user functions still run, but intrinsic
    /// heads are left in place and lists are rebuilt whole.
    Quoted,
    /// Normal evaluation.
    Live,
}

/// What a structural list yields in `Live` mode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Collect {
    /// The last child's value.
    Last,
    /// A list of every child's value.
    Whole,
}

impl Machine {
    /// Evaluate `expr`.
    ///
    /// 1. A bare atom, or a list's head atom, is looked up. A function is
    ///    invoked in any mode; a bound value replaces a bare atom and is
    ///    itself evaluated when it is an atom.
    /// 2. In `Live` mode an intrinsic head receives the unevaluated
    ///    arguments.
    /// 3. Otherwise every child is evaluated left to right.
    pub fn eval(&mut self, expr: &Expr, mode: EvalMode) -> EvalResult {
        self.eval_collect(expr, mode, Collect::Last)
    }

    /// Like [`eval`](Self::eval) in `Live` mode, but a structural list
    /// yields all of its child values instead of the last one.
    pub fn eval_whole(&mut self, expr: &Expr) -> EvalResult {
        self.eval_collect(expr, EvalMode::Live, Collect::Whole)
    }

    fn eval_collect(&mut self, expr: &Expr, mode: EvalMode, collect: Collect) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            Expr::Atom(atom) => self.eval_atom(atom, mode),
            Expr::List(list) => self.eval_list(list, mode, collect),
            Expr::FunctionDef(_) => Ok(expr.clone()),
        })
    }

    fn eval_atom(&mut self, atom: &Atom, mode: EvalMode) -> EvalResult {
        self.resolve_atom(atom, mode, &mut Vec::new())
    }

    /// A bound atom is evaluated again, so `(= y x) (= x 5) y` reads `5`.
    /// `seen` holds the names already followed; a cycle stops at the first
    /// repeated name and yields its stored value. Other bound values are
    /// returned as stored.
    fn resolve_atom(
        &mut self,
        atom: &Atom,
        mode: EvalMode,
        seen: &mut Vec<Rc<str>>,
    ) -> EvalResult {
        if atom.is_literal() || atom.text.is_empty() {
            return Ok(Expr::Atom(atom.clone()));
        }

        match self.env.lookup(&atom.text) {
            Some(Resolved::Function(def)) => {
                return self.call_function(&def, Vec::new(), atom.pos, mode);
            }
            Some(Resolved::Value(Expr::Atom(bound))) if !seen.contains(&atom.text) => {
                seen.push(Rc::clone(&atom.text));
                return self.resolve_atom(&bound, mode, seen);
            }
            Some(Resolved::Value(value)) => return Ok(value),
            None => {}
        }

        if mode == EvalMode::Live {
            if let Some(intrinsic) = self.intrinsics.get(&atom.text).copied() {
                return self.dispatch(intrinsic, &[], atom.pos);
            }
        }

        Ok(Expr::Atom(atom.clone()))
    }

    fn eval_list(&mut self, list: &List, mode: EvalMode, collect: Collect) -> EvalResult {
        let Some(head) = list.head() else {
            return Ok(Expr::empty());
        };

        if let Some(name) = head.as_atom().filter(|a| !a.is_literal()).map(|a| &*a.text) {
            if let Some(Resolved::Function(def)) = self.env.lookup(name) {
                return self.invoke(&def, list.args(), list.pos, mode);
            }
            if mode == EvalMode::Live {
                if let Some(intrinsic) = self.intrinsics.get(name).copied() {
                    return self.dispatch(intrinsic, list.args(), list.pos);
                }
            }
        }

        match (mode, collect) {
            (EvalMode::Live, Collect::Last) => {
                let mut last = Expr::empty();
                for child in list.items.iter() {
                    last = self.eval(child, EvalMode::Live)?;
                }
                Ok(last)
            }
            (EvalMode::Live, Collect::Whole) | (EvalMode::Quoted, _) => {
                let values = list
                    .items
                    .iter()
                    .map(|child| self.eval(child, mode))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Expr::list(values, list.pos))
            }
        }
    }

    /// Evaluate `args` in the caller's frame, then call `def` with them.
    #[tracing::instrument(level = "debug", skip_all, fields(function = %def.name))]
    fn invoke(&mut self, def: &FunctionDef, args: &[Expr], pos: Position, mode: EvalMode) -> EvalResult {
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, EvalMode::Live)?);
        }
        self.call_function(def, values, pos, mode)
    }

    /// Call `def` with already evaluated arguments.
    ///
    /// Binds `min(params, args)` parameters in a fresh frame and evaluates
    /// the body there. A `return` from the body becomes the call's value.
    pub fn call_function(
        &mut self,
        def: &FunctionDef,
        args: Vec<Expr>,
        pos: Position,
        mode: EvalMode,
    ) -> EvalResult {
        if let Some(limit) = self.frame_limit {
            if self.env.depth() >= limit {
                return Err(EvalError::FrameLimitExceeded { limit, pos }.into());
            }
        }

        let bindings = def.params.iter().map(Rc::clone).zip(args);
        self.with_bindings(bindings, |scoped| {
            scoped
                .eval(&def.body, mode)
                .or_else(ControlAction::catch_return)
        })
    }

    fn dispatch(&mut self, intrinsic: Intrinsic, args: &[Expr], pos: Position) -> EvalResult {
        trace!(name = intrinsic.name, args = args.len(), "dispatch");
        if args.len() < intrinsic.min_args {
            return Err(EvalError::ArityMismatch {
                name: intrinsic.name,
                expected: intrinsic.min_args,
                got: args.len(),
                usage: intrinsic.description,
                pos,
            }
            .into());
        }
        let call = Call {
            name: intrinsic.name,
            args,
            pos,
        };
        (intrinsic.func)(self, &call)
    }
}
