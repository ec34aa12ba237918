use owl_diagnostic::ErrorCode;
use owl_ir::{Expr, List, Position};
use owl_lexer::tokenize;
use pretty_assertions::assert_eq;

use crate::{build, build_span, ParseError};

fn parse(source: &str) -> Result<Expr, ParseError> {
    build(&tokenize(source))
}

fn shape(source: &str) -> String {
    match parse(source) {
        Ok(expr) => expr.to_string(),
        Err(err) => panic!("unexpected parse error for {source:?}: {err}"),
    }
}

fn as_list(expr: &Expr) -> Option<&List> {
    match expr {
        Expr::List(list) => Some(list),
        _ => None,
    }
}

fn list_len(expr: &Expr) -> usize {
    as_list(expr).map_or(0, List::len)
}

#[test]
fn test_empty_input_is_empty_list() {
    let expr = parse("").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(expr, Expr::list(Vec::new(), Position::DUMMY));
}

#[test]
fn test_single_token_is_atom() {
    assert_eq!(parse("42"), Ok(Expr::value("42")));
    assert_eq!(parse("`hi there`"), Ok(Expr::value("`hi there`")));
}

#[test]
fn test_bare_line_is_list_of_atoms() {
    assert_eq!(shape("print a b"), "(print a b)");
}

#[test]
fn test_single_group_is_wrapped_in_root() {
    let expr = parse("(+ 1 2)").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(expr.to_string(), "((+ 1 2))");
    assert_eq!(list_len(&expr), 1);
}

#[test]
fn test_nested_groups() {
    assert_eq!(shape("(+ 1 (* 2 3))"), "((+ 1 (* 2 3)))");
    assert_eq!(shape("((a b))"), "(((a b)))");
}

#[test]
fn test_program_of_several_forms() {
    let expr = parse("(= x 5) x").unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(expr.to_string(), "((= x 5) x)");
    assert_eq!(list_len(&expr), 2);
}

#[test]
fn test_group_of_one_is_atom() {
    assert_eq!(shape("(f (x))"), "((f x))");
}

#[test]
fn test_empty_group_is_empty_list() {
    assert_eq!(shape("(a ())"), "((a ()))");
}

#[test]
fn test_group_position_is_open_bracket() {
    let expr = parse("\n  (a b)").unwrap_or_else(|e| panic!("{e}"));
    let root = as_list(&expr).unwrap_or_else(|| panic!("root is a list"));
    assert_eq!(root.items[0].pos(), Position::new(2, 3));
}

#[test]
fn test_unclosed_reports_outermost_open() {
    assert_eq!(
        parse("(a) (b (c)"),
        Err(ParseError::UnclosedDelimiter {
            pos: Position::new(1, 5)
        })
    );
}

#[test]
fn test_unexpected_close() {
    assert_eq!(
        parse("(a))"),
        Err(ParseError::UnexpectedClose {
            pos: Position::new(1, 4)
        })
    );
    assert_eq!(
        parse(")"),
        Err(ParseError::UnexpectedClose {
            pos: Position::new(1, 1)
        })
    );
}

#[test]
fn test_lone_open() {
    assert_eq!(
        parse("("),
        Err(ParseError::UnclosedDelimiter {
            pos: Position::new(1, 1)
        })
    );
}

#[test]
fn test_brackets_inside_literals_do_not_count() {
    assert_eq!(shape("(print `(`)"), "((print `(`))");
}

#[test]
fn test_build_span_inclusive() {
    let tokens = tokenize("(+ 1 2) (* 3 4)");
    let expr = build_span(&tokens, 5, 9).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(expr.to_string(), "((* 3 4))");

    let expr = build_span(&tokens, 1, 1).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(expr, Expr::value("+"));
}

#[test]
fn test_build_span_out_of_range() {
    let tokens = tokenize("a b");
    assert_eq!(
        build_span(&tokens, 1, 7),
        Ok(Expr::list(Vec::new(), Position::DUMMY))
    );
}

#[test]
fn test_diagnostics() {
    let err = ParseError::UnclosedDelimiter {
        pos: Position::new(3, 1),
    };
    assert_eq!(err.code(), ErrorCode::E1001);
    let diag = err.to_diagnostic();
    assert_eq!(diag.labels.first().map(|l| l.pos), Some(Position::new(3, 1)));
    assert!(diag.to_string().starts_with("error[E1001]: unclosed delimiter"));

    let err = ParseError::UnexpectedClose {
        pos: Position::new(1, 9),
    };
    assert_eq!(err.to_diagnostic().code, ErrorCode::E1002);
}

#[test]
fn test_deep_nesting() {
    let depth = 5_000;
    let source = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let mut expr = parse(&source).unwrap_or_else(|e| panic!("{e}"));

    // Every bracket level but the innermost `(x)` adds one list.
    let mut levels = 0;
    while let Expr::List(list) = expr {
        assert_eq!(list.len(), 1);
        expr = list.items[0].clone();
        levels += 1;
    }
    assert_eq!(levels, depth);
    assert_eq!(expr, Expr::value("x"));
}
