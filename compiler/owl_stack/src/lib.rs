//! Stack growth for deeply nested programs.
//!
//! Tree building and evaluation both recurse once per bracket level, and
//! user functions recurse without bound. Every recursive entry point wraps
//! its body in [`ensure_sufficient_stack`] so nesting depth is limited by
//! memory rather than by the thread's initial stack.
//!
//! On wasm32 the call is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Runs `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
///
/// ```text
/// fn eval(&mut self, expr: &Expr) -> EvalResult {
///     ensure_sufficient_stack(|| match expr {
///         Expr::List(list) => self.eval_children(list),
///         _ => Ok(expr.clone()),
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
