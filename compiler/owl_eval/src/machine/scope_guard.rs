//! RAII frame management.
//!
//! [`ScopedMachine`] pushes a frame when created and pops it when dropped,
//! so every exit path (a value, `?` on a return signal or error, a panic
//! unwinding through) leaves the frame stack as it found it.

use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use owl_ir::Expr;

use super::Machine;

/// A machine with one extra frame, popped on drop.
pub struct ScopedMachine<'m> {
    machine: &'m mut Machine,
}

impl Drop for ScopedMachine<'_> {
    fn drop(&mut self) {
        self.machine.env.pop_frame();
    }
}

impl Deref for ScopedMachine<'_> {
    type Target = Machine;

    fn deref(&self) -> &Machine {
        self.machine
    }
}

impl DerefMut for ScopedMachine<'_> {
    fn deref_mut(&mut self) -> &mut Machine {
        self.machine
    }
}

impl Machine {
    /// Push a frame and return a guard that pops it.
    ///
    /// ```text
    /// {
    ///     let mut scoped = machine.scoped();
    ///     scoped.env.bind(name, value);
    ///     scoped.eval(body, EvalMode::Live)?;
    /// } // frame popped here
    /// ```
    pub fn scoped(&mut self) -> ScopedMachine<'_> {
        self.env.push_frame();
        ScopedMachine { machine: self }
    }

    /// Run `f` in a new frame.
    pub fn with_frame<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedMachine<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` in a new frame holding `bindings`.
    pub fn with_bindings<T, F, I>(&mut self, bindings: I, f: F) -> T
    where
        F: FnOnce(&mut ScopedMachine<'_>) -> T,
        I: IntoIterator<Item = (Rc<str>, Expr)>,
    {
        self.with_frame(|scoped| {
            for (name, value) in bindings {
                scoped.env.bind(name, value);
            }
            f(scoped)
        })
    }
}
