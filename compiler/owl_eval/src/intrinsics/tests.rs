use std::sync::Arc;

use owl_ir::Expr;

use super::*;
use crate::{buffer_handler, EvalError, Machine, SharedPrintHandler};

fn parse(source: &str) -> Expr {
    owl_parse::build(&owl_lexer::tokenize(source)).unwrap_or_else(|e| panic!("{e}"))
}

fn machine() -> (Machine, SharedPrintHandler) {
    let output = buffer_handler();
    let machine = Machine::builder()
        .print_handler(Arc::clone(&output))
        .build();
    (machine, output)
}

fn eval(source: &str) -> String {
    match machine().0.execute(&parse(source)) {
        Ok(value) => value.to_string(),
        Err(err) => panic!("{source:?} failed: {err}"),
    }
}

fn eval_err(source: &str) -> EvalError {
    match machine().0.execute(&parse(source)) {
        Ok(value) => panic!("{source:?} should fail, got {value}"),
        Err(err) => err,
    }
}

fn output(source: &str) -> String {
    let (mut machine, output) = machine();
    if let Err(err) = machine.execute(&parse(source)) {
        panic!("{source:?} failed: {err}");
    }
    output.get_output()
}

mod table {
    use super::*;
    use pretty_assertions::assert_eq;

    fn noop(_: &mut Machine, _: &Call<'_>) -> EvalResult {
        Ok(Expr::empty())
    }

    fn other(_: &mut Machine, _: &Call<'_>) -> EvalResult {
        Ok(Expr::value("other"))
    }

    #[test]
    fn test_builtins_registered() {
        let table = builtin_table();
        for name in [
            "exit", "print", "println", "+", "-", "*", "/", "//", "modi", "=", "defunc", "?",
            "==", "<", ">", "strjoin", "map", "reduce", "return", "loop", "list", "quote",
        ] {
            assert!(table.get(name).is_some(), "missing intrinsic `{name}`");
        }
        assert!(table.get("unknown").is_none());
    }

    #[test]
    fn test_builtins_have_descriptions() {
        let table = builtin_table();
        for name in table.names() {
            let description = table.get(name).map_or("", |i| i.description);
            assert!(!description.is_empty(), "`{name}` has no description");
        }
    }

    #[test]
    fn test_minimum_arities() {
        let table = builtin_table();
        let min = |name: &str| table.get(name).map(|i| i.min_args);
        assert_eq!(min("="), Some(2));
        assert_eq!(min("defunc"), Some(2));
        assert_eq!(min("?"), Some(2));
        assert_eq!(min("loop"), Some(1));
        assert_eq!(min("return"), Some(0));
        assert_eq!(min("+"), Some(0));
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        let mut table = IntrinsicTable::new();
        table.register(Intrinsic::new("a", 0, "first", noop));
        table.register(Intrinsic::new("b", 0, "second", noop));
        table.register(Intrinsic::new("a", 1, "replacement", other));

        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.get("a").map(|i| i.description), Some("replacement"));
    }

    #[test]
    fn test_custom_table() {
        let mut table = IntrinsicTable::new();
        table.register(Intrinsic::new("answer", 0, "always 42", |_, _| {
            Ok(Expr::value("42"))
        }));
        let mut machine = Machine::builder()
            .intrinsics(table)
            .print_handler(crate::silent_handler())
            .build();

        let value = machine.execute(&parse("(answer)"));
        assert_eq!(value, Ok(Expr::value("42")));
        // `+` is not registered, so the list is evaluated structurally.
        let value = machine.execute(&parse("(+ 1 2)"));
        assert_eq!(value, Ok(Expr::value("2")));
    }
}

mod io {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_print_strips_delimiters() {
        assert_eq!(output("(print `hello` ` ` world)"), "hello world");
    }

    #[test]
    fn test_print_unescapes_newlines() {
        assert_eq!(output("(print `a\\nb`)"), "a\nb");
    }

    #[test]
    fn test_println_each_argument() {
        assert_eq!(output("(println 1 (+ 1 1))"), "1\n2\n");
    }

    #[test]
    fn test_bare_println() {
        assert_eq!(output("(println)"), "\n");
        assert_eq!(output("println"), "\n");
    }

    #[test]
    fn test_print_lists() {
        assert_eq!(output("(print (list 1 `a`))"), "(1 `a`)");
    }
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_addition() {
        assert_eq!(eval("(+ 1 2)"), "3");
        assert_eq!(eval("(+ 1 2 3)"), "6");
        assert_eq!(eval("(+)"), "0");
        assert_eq!(eval("(+ 1.5 1)"), "2.5");
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(eval("(- 10 3 2)"), "5");
        assert_eq!(eval("(- 5)"), "5");
        assert_eq!(eval("(-)"), "0");
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(eval("(* 2 3 4)"), "24");
        assert_eq!(eval("(*)"), "1");
    }

    #[test]
    fn test_float_division() {
        assert_eq!(eval("(/ 7 2)"), "3.5");
        assert_eq!(eval("(/ 8 2)"), "4");
        assert_eq!(eval("(/ 8)"), "8");
        assert_eq!(eval("(/)"), "0");
    }

    #[test]
    fn test_integer_division() {
        assert_eq!(eval("(// 7 2)"), "3");
        assert_eq!(eval("(// -7 2)"), "-3");
        assert_eq!(eval("(// 7.9)"), "7");
        assert_eq!(eval("(modi 7 3)"), "1");
        assert_eq!(eval("(modi -7 3)"), "-1");
    }

    #[test]
    fn test_non_numeric_operands_are_zero() {
        assert_eq!(eval("(+ abc 2)"), "2");
        assert_eq!(eval("(+ `3` 2)"), "2");
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            eval_err("(/ 1 0)"),
            EvalError::DivisionByZero { op: "/", .. }
        ));
        assert!(matches!(
            eval_err("(// 1 0)"),
            EvalError::DivisionByZero { op: "//", .. }
        ));
        assert!(matches!(
            eval_err("(modi 1 zero)"),
            EvalError::DivisionByZero { op: "modi", .. }
        ));
    }

    #[test]
    fn test_nested() {
        assert_eq!(eval("(+ 1 (* 2 3) (- 10 4))"), "13");
    }
}

mod compare {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric() {
        assert_eq!(eval("(== 2 2)"), "1");
        assert_eq!(eval("(== 2 2.0)"), "1");
        assert_eq!(eval("(< 2 10)"), "1");
        assert_eq!(eval("(> 2 10)"), "0");
    }

    #[test]
    fn test_literals_compare_as_strings() {
        assert_eq!(eval("(< `2` `10`)"), "0");
        assert_eq!(eval("(== `a` `a`)"), "1");
        assert_eq!(eval("(> `b` `a`)"), "1");
        assert_eq!(eval("(== `5` 5)"), "1");
    }

    #[test]
    fn test_non_numeric_words_are_zero() {
        assert_eq!(eval("(== abc 0)"), "1");
    }
}

mod binding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_yields_value() {
        assert_eq!(eval("(= x (+ 2 3))"), "5");
    }

    #[test]
    fn test_set_requires_a_name() {
        assert!(matches!(
            eval_err("(= `x` 1)"),
            EvalError::ExpectedName { intrinsic: "=", .. }
        ));
        assert!(matches!(
            eval_err("(= (a b) 1)"),
            EvalError::ExpectedName { intrinsic: "=", .. }
        ));
    }

    #[test]
    fn test_defunc_parameter_shapes() {
        assert_eq!(eval("(defunc inc (x) (+ x 1)) (inc 4)"), "5");
        assert_eq!(eval("(defunc add a b (+ a b)) (add 1 2)"), "3");
        assert_eq!(eval("(defunc k () 7) (k)"), "7");
        assert_eq!(eval("(defunc k 7) (k)"), "7");
    }

    #[test]
    fn test_defunc_overwrites() {
        assert_eq!(eval("(defunc f () 1) (defunc f () 2) (f)"), "2");
    }

    #[test]
    fn test_defunc_rejects_literal_params() {
        assert!(matches!(
            eval_err("(defunc f (`a`) 1)"),
            EvalError::ExpectedName {
                intrinsic: "defunc",
                ..
            }
        ));
    }

    #[test]
    fn test_quote() {
        assert_eq!(eval("(quote (+ 1 2))"), "(+ 1 2)");
        assert_eq!(eval("(= n 4) (quote (+ n (* n 2)))"), "(+ 4 (* 4 2))");
    }

    #[test]
    fn test_quote_still_runs_user_functions() {
        assert_eq!(eval("(defunc two () 2) (quote (+ 1 (two)))"), "(+ 1 2)");
    }
}

mod control {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_branch() {
        assert_eq!(eval("(? 1 yes no)"), "yes");
        assert_eq!(eval("(? 0 yes no)"), "no");
        assert_eq!(eval("(? (== 1 2) yes no)"), "no");
        assert_eq!(eval("(? anything yes no)"), "yes");
    }

    #[test]
    fn test_branch_without_else() {
        assert_eq!(eval("(? 0 yes)"), "");
    }

    #[test]
    fn test_branch_evaluates_only_taken_side() {
        assert_eq!(output("(? 1 (print a) (print b))"), "a");
    }

    #[test]
    fn test_loop_runs_body_in_order() {
        let source = "
            (= i 0)
            (loop
                (print i)
                (= i (+ i 1))
                (? (== i 3) (return done)))";
        assert_eq!(output(source), "012");
        assert_eq!(eval(source), "done");
    }

    #[test]
    fn test_loop_accumulates_into_outer_binding() {
        assert_eq!(
            eval("(= n 0) (loop (= n (+ n 1)) (? (== n 3) (return))) n"),
            "3"
        );
    }

    #[test]
    fn test_loop_bindings_outlive_the_loop() {
        assert_eq!(eval("(loop (= tmp 1) (return)) tmp"), "1");
    }

    #[test]
    fn test_loop_pushes_no_frame() {
        let (mut machine, _) = machine();
        let program = parse("(= n 0) (loop (= n (+ n 1)) (? (== n 2) (return)))");
        machine
            .execute_in_base_frame(&program)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(machine.env().depth(), 1);
        assert_eq!(machine.env().innermost().len(), 1);
    }

    #[test]
    fn test_return_payload_is_evaluated() {
        assert_eq!(eval("(loop (return (+ 1 1)))"), "2");
    }

    #[test]
    fn test_return_inside_function_inside_loop() {
        let source = "
            (defunc early () (return 1))
            (= n 0)
            (loop (= n (+ n (early))) (? (== n 3) (return n)))";
        assert_eq!(eval(source), "3");
    }
}

mod iteration {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list() {
        assert_eq!(eval("(list 1 (+ 1 1))"), "(1 2)");
        assert_eq!(eval("(list)"), "()");
    }

    #[test]
    fn test_strjoin() {
        assert_eq!(eval("(strjoin `a` b (list 1 2))"), "`ab12`");
        assert_eq!(eval("(strjoin)"), "``");
    }

    #[test]
    fn test_map_inline() {
        assert_eq!(eval("(map (1 2 3) (x (* x 2)))"), "(2 4 6)");
        assert_eq!(eval("(map (1 2) (sq (x) (* x x)))"), "(1 4)");
    }

    #[test]
    fn test_map_named() {
        assert_eq!(
            eval("(defunc double (x) (* x 2)) (map (list 1 2) double)"),
            "(2 4)"
        );
    }

    #[test]
    fn test_map_named_with_prefix() {
        assert_eq!(
            eval("(defunc addn (n x) (+ n x)) (map (1 2) (addn (+ 5 5)))"),
            "(11 12)"
        );
    }

    #[test]
    fn test_map_over_bound_list() {
        assert_eq!(eval("(= xs (list 1 2 3)) (map xs (x (+ x 1)))"), "(2 3 4)");
    }

    #[test]
    fn test_map_single_value() {
        assert_eq!(eval("(map 5 (x (* x 2)))"), "(10)");
    }

    #[test]
    fn test_map_frames_are_popped() {
        let (mut machine, _) = machine();
        let value = machine.execute(&parse("(map (1 2) (x (= y x)))"));
        assert_eq!(value.map(|v| v.to_string()), Ok("(1 2)".to_string()));
        assert_eq!(machine.env().depth(), 1);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(eval("(reduce (1 2 3 4) ((a b) (+ a b)))"), "10");
        assert_eq!(eval("(reduce (1 2 3) 10 ((a b) (+ a b)))"), "16");
        assert_eq!(eval("(reduce (5) ((a b) (+ a b)))"), "5");
    }

    #[test]
    fn test_reduce_empty() {
        assert_eq!(eval("(reduce () ((a b) (+ a b)))"), "");
        assert_eq!(eval("(reduce () 7 ((a b) (+ a b)))"), "7");
    }

    #[test]
    fn test_reduce_named() {
        assert_eq!(
            eval("(defunc mul2 (a b) (* a b)) (reduce (1 2 3 4) mul2)"),
            "24"
        );
    }

    #[test]
    fn test_not_callable() {
        assert!(matches!(
            eval_err("(map (1 2) nothing)"),
            EvalError::NotCallable { .. }
        ));
    }

    #[test]
    fn test_invalid_function_literal() {
        assert!(matches!(
            eval_err("(map (1 2) (a b c d))"),
            EvalError::InvalidFunctionLiteral { .. }
        ));
        assert!(matches!(
            eval_err("(map (1 2) (`x` (+ x 1)))"),
            EvalError::InvalidFunctionLiteral { .. }
        ));
    }

    #[test]
    fn test_named_literal_needs_bracketed_params() {
        assert!(matches!(
            eval_err("(reduce (1 2 3) (a b (+ a b)))"),
            EvalError::InvalidFunctionLiteral { .. }
        ));
        assert_eq!(eval("(reduce (1 2 3) (add (a b) (+ a b)))"), "6");
    }
}
