//! Tree builder for Owl.
//!
//! Turns a flat token sequence into one rooted [`Expr`]. Brackets group,
//! everything else is an atom:
//!
//! - a single token is an `Atom` (so `(x)` builds to `x`)
//! - a run of tokens without brackets is a `List` of atoms, which lets a bare
//!   `print a b` line work without enclosing brackets
//! - anything else is a `List` whose children are the depth-0 atoms and the
//!   recursively built groups, in source order

mod error;

use owl_ir::{Expr, Position, Token, TokenKind, TokenList};
use owl_stack::ensure_sufficient_stack;
use tracing::trace;

pub use error::ParseError;

/// Build the expression tree for a whole token list.
///
/// An empty token list builds the empty `List`.
pub fn build(tokens: &TokenList) -> Result<Expr, ParseError> {
    build_tokens(tokens.as_slice())
}

/// Build the tokens `start..=end`.
///
/// Out-of-range or reversed bounds build the empty `List`.
pub fn build_span(tokens: &TokenList, start: usize, end: usize) -> Result<Expr, ParseError> {
    match tokens.as_slice().get(start..=end) {
        Some(span) => build_tokens(span),
        None => Ok(empty_list(Position::DUMMY)),
    }
}

fn build_tokens(tokens: &[Token]) -> Result<Expr, ParseError> {
    ensure_sufficient_stack(|| match tokens {
        [] => Ok(empty_list(Position::DUMMY)),
        [token] => single(token),
        _ if !tokens.iter().any(|t| t.kind.is_bracket()) => Ok(Expr::list(
            tokens.iter().map(atom).collect::<Vec<_>>(),
            tokens[0].pos,
        )),
        _ => grouped(tokens),
    })
}

fn single(token: &Token) -> Result<Expr, ParseError> {
    match token.kind {
        TokenKind::Open => Err(ParseError::UnclosedDelimiter { pos: token.pos }),
        TokenKind::Close => Err(ParseError::UnexpectedClose { pos: token.pos }),
        TokenKind::Literal | TokenKind::Word => Ok(atom(token)),
    }
}

/// Scan a span that contains brackets.
fn grouped(tokens: &[Token]) -> Result<Expr, ParseError> {
    let mut children = Vec::new();
    let mut depth = 0usize;
    let mut group_start = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Open => {
                if depth == 0 {
                    group_start = i;
                }
                depth += 1;
            }
            TokenKind::Close => {
                if depth == 0 {
                    return Err(ParseError::UnexpectedClose { pos: token.pos });
                }
                depth -= 1;
                if depth == 0 {
                    children.push(group(&tokens[group_start..=i])?);
                }
            }
            TokenKind::Literal | TokenKind::Word => {
                if depth == 0 {
                    children.push(atom(token));
                }
            }
        }
    }

    if depth != 0 {
        return Err(ParseError::UnclosedDelimiter {
            pos: tokens[group_start].pos,
        });
    }

    Ok(Expr::list(children, tokens[0].pos))
}

/// Build a balanced `( ... )` group from its inner tokens.
fn group(tokens: &[Token]) -> Result<Expr, ParseError> {
    let open = &tokens[0];
    let inner = &tokens[1..tokens.len() - 1];
    trace!(pos = %open.pos, len = inner.len(), "group");

    if inner.is_empty() {
        return Ok(empty_list(open.pos));
    }

    // Keep the group's own position on the built list.
    Ok(match build_tokens(inner)? {
        Expr::List(list) => Expr::list(list.items, open.pos),
        other => other,
    })
}

fn atom(token: &Token) -> Expr {
    Expr::atom(token.text.clone(), token.pos)
}

fn empty_list(pos: Position) -> Expr {
    Expr::list(Vec::new(), pos)
}

#[cfg(test)]
mod tests;
