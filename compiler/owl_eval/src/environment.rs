//! Frames of named bindings and function definitions.
//!
//! The environment is a stack of [`Frame`]s over a base frame that is never
//! popped. Lookups search innermost to outermost; writes always go to the
//! innermost frame.

use std::fmt;
use std::iter;
use std::rc::Rc;

use owl_ir::{Expr, FunctionDef};

/// One named entry in a frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    /// `(= name value)`; the value is stored already evaluated.
    Binding { name: Rc<str>, value: Expr },
    /// `(defunc name ...)`.
    Function(Rc<FunctionDef>),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Binding { name, .. } => name,
            Entry::Function(def) => &def.name,
        }
    }
}

/// What a name resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Value(Expr),
    Function(Rc<FunctionDef>),
}

/// An insertion-ordered sequence of entries.
///
/// A binding and a function may share a name; whichever was added first wins
/// lookups in this frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    entries: Vec<Entry>,
}

impl Frame {
    pub fn new() -> Self {
        Frame {
            entries: Vec::new(),
        }
    }

    /// Overwrite the first binding named `name`, or append one.
    pub fn bind(&mut self, name: Rc<str>, value: Expr) {
        let existing = self.entries.iter_mut().find_map(|entry| match entry {
            Entry::Binding { name: n, value: v } if *n == name => Some(v),
            _ => None,
        });
        match existing {
            Some(slot) => *slot = value,
            None => self.entries.push(Entry::Binding { name, value }),
        }
    }

    /// Overwrite the first function with the same name, or append it.
    pub fn define_function(&mut self, def: Rc<FunctionDef>) {
        let existing = self
            .entries
            .iter_mut()
            .find(|entry| matches!(entry, Entry::Function(f) if f.name == def.name));
        match existing {
            Some(slot) => *slot = Entry::Function(def),
            None => self.entries.push(Entry::Function(def)),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<Resolved> {
        self.entries
            .iter()
            .find(|entry| entry.name() == name)
            .map(|entry| match entry {
                Entry::Binding { value, .. } => Resolved::Value(value.clone()),
                Entry::Function(def) => Resolved::Function(Rc::clone(def)),
            })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The frame stack.
#[derive(Clone, Default)]
pub struct Environment {
    base: Frame,
    frames: Vec<Frame>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            base: Frame::new(),
            frames: Vec::new(),
        }
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Pop the innermost frame. The base frame is never popped.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Number of frames, counting the base frame.
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    pub fn innermost(&self) -> &Frame {
        self.frames.last().unwrap_or(&self.base)
    }

    fn innermost_mut(&mut self) -> &mut Frame {
        self.frames.last_mut().unwrap_or(&mut self.base)
    }

    pub fn bind(&mut self, name: Rc<str>, value: Expr) {
        self.innermost_mut().bind(name, value);
    }

    pub fn define_function(&mut self, def: Rc<FunctionDef>) {
        self.innermost_mut().define_function(def);
    }

    /// Resolve `name`, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<Resolved> {
        self.frames
            .iter()
            .rev()
            .chain(iter::once(&self.base))
            .find_map(|frame| frame.lookup(name))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("depth", &self.depth())
            .field("innermost", &self.innermost().entries)
            .finish()
    }
}
