//! Expression trees.
//!
//! Equality is structural and ignores positions: `5` read from line 1 equals
//! `5` computed at runtime.

use std::fmt;
use std::rc::Rc;

use crate::literal;
use crate::Position;

/// A node of the program tree, and also the value type of evaluation.
#[derive(Clone, PartialEq)]
pub enum Expr {
    Atom(Atom),
    List(List),
    FunctionDef(Rc<FunctionDef>),
}

/// Leaf holding raw text.
#[derive(Clone, Debug)]
pub struct Atom {
    pub text: Rc<str>,
    pub pos: Position,
}

/// Ordered children. The head, when present, names what to apply.
#[derive(Clone, Debug)]
pub struct List {
    pub items: Rc<[Expr]>,
    pub pos: Position,
}

/// A stored named function.
#[derive(Clone)]
pub struct FunctionDef {
    pub name: Rc<str>,
    pub params: Vec<Rc<str>>,
    pub body: Expr,
    pub pos: Position,
}

impl Atom {
    pub fn new(text: impl Into<Rc<str>>, pos: Position) -> Self {
        Atom {
            text: text.into(),
            pos,
        }
    }

    #[inline]
    pub fn is_literal(&self) -> bool {
        literal::is_literal(&self.text)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl List {
    pub fn new(items: impl Into<Rc<[Expr]>>, pos: Position) -> Self {
        List {
            items: items.into(),
            pos,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First child.
    #[inline]
    pub fn head(&self) -> Option<&Expr> {
        self.items.first()
    }

    /// Every child after the head.
    #[inline]
    pub fn args(&self) -> &[Expr] {
        self.items.get(1..).unwrap_or(&[])
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl FunctionDef {
    pub fn new(
        name: impl Into<Rc<str>>,
        params: Vec<Rc<str>>,
        body: Expr,
        pos: Position,
    ) -> Self {
        FunctionDef {
            name: name.into(),
            params,
            body,
            pos,
        }
    }
}

impl PartialEq for FunctionDef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.body == other.body
    }
}

impl Expr {
    /// The empty-atom sentinel: result of `()`, of a `?` without else, and
    /// of every intrinsic with nothing to say.
    pub fn empty() -> Self {
        Expr::Atom(Atom::new("", Position::DUMMY))
    }

    pub fn atom(text: impl Into<Rc<str>>, pos: Position) -> Self {
        Expr::Atom(Atom::new(text, pos))
    }

    /// A runtime-created atom with no source position.
    pub fn value(text: impl Into<Rc<str>>) -> Self {
        Expr::Atom(Atom::new(text, Position::DUMMY))
    }

    pub fn list(items: impl Into<Rc<[Expr]>>, pos: Position) -> Self {
        Expr::List(List::new(items, pos))
    }

    /// `1` or `0`.
    pub fn truth(value: bool) -> Self {
        Expr::value(if value { literal::TRUE } else { literal::FALSE })
    }

    pub fn pos(&self) -> Position {
        match self {
            Expr::Atom(atom) => atom.pos,
            Expr::List(list) => list.pos,
            Expr::FunctionDef(def) => def.pos,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Expr::Atom(atom) => Some(atom),
            _ => None,
        }
    }

    /// Text of an atom, `None` for anything else.
    pub fn atom_text(&self) -> Option<&str> {
        self.as_atom().map(|atom| &*atom.text)
    }

    pub fn is_empty_atom(&self) -> bool {
        matches!(self, Expr::Atom(atom) if atom.text.is_empty())
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Expr::Atom(atom) if atom.is_literal())
    }

    /// Text as seen by comparisons and string operations: literal delimiters
    /// removed, lists in bracketed form.
    pub fn plain_text(&self) -> String {
        match self {
            Expr::Atom(atom) => literal::strip_quotes(&atom.text).to_owned(),
            _ => self.to_string(),
        }
    }
}

impl Default for Expr {
    fn default() -> Self {
        Expr::empty()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(atom) => f.write_str(&atom.text),
            Expr::List(list) => {
                f.write_str("(")?;
                for (i, item) in list.items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Expr::FunctionDef(def) => write!(f, "{def}"),
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Atom(atom) => write!(f, "Atom({:?} @ {:?})", atom.text, atom.pos),
            Expr::List(list) => f.debug_list().entries(list.items.iter()).finish(),
            Expr::FunctionDef(def) => write!(f, "{def:?}"),
        }
    }
}

impl fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(defunc {} (", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(param)?;
        }
        write!(f, ") {})", self.body)
    }
}

impl fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionDef({self})")
    }
}
