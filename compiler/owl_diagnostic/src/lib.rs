//! Diagnostic system for Owl errors.
//!
//! Every parse and evaluation error converts into a [`Diagnostic`]:
//! - an error code for searchability
//! - a message saying what went wrong
//! - labeled positions saying where
//! - notes and suggestions for context

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
