//! Owl IR - shared data types for the Owl interpreter.
//!
//! This crate contains the data structures every other Owl crate agrees on:
//! - `Position` for line/column source locations
//! - `Token` and `TokenList` for lexer output
//! - `Expr` trees for tree builder output and evaluation results
//! - Literal-string helpers (quote character, delimiter stripping, escapes)
//!
//! # Design Philosophy
//!
//! - **Atoms stay text**: numbers, identifiers and strings share one
//!   representation; meaning is inferred at use time.
//! - **Share, don't copy**: child lists and function definitions sit behind
//!   `Rc`, so storing a function body or binding a list value is a pointer
//!   copy.

mod expr;
pub mod literal;
mod position;
mod token;

pub use expr::{Atom, Expr, FunctionDef, List};
pub use position::Position;
pub use token::{Token, TokenKind, TokenList};
