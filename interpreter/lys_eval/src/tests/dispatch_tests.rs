//! Dispatch ordering: self-evaluation, symbol lookup, head-position rules.

use pretty_assertions::assert_eq;

use super::{define_expr, lambda_expr, setup, sym};
use crate::{EvalError, Expr};

#[test]
fn integers_and_booleans_self_evaluate() {
    let (interp, env) = setup();
    assert_eq!(interp.eval(&Expr::Int(7), &env).unwrap(), Expr::Int(7));
    assert_eq!(
        interp.eval(&Expr::Bool(true), &env).unwrap(),
        Expr::Bool(true)
    );
}

#[test]
fn closure_values_self_evaluate() {
    let (interp, env) = setup();
    let closure = interp
        .eval(&lambda_expr(&interp, &[], Expr::Int(1)), &env)
        .unwrap();
    // Already-evaluated data flowing back through `eval` returns itself,
    // same allocation included.
    assert_eq!(interp.eval(&closure, &env).unwrap(), closure);
}

#[test]
fn symbols_resolve_through_the_chain() {
    let (interp, env) = setup();
    let x = interp.interner().intern("x");
    env.define(x, Expr::Int(1)).unwrap();

    let inner = env.extend([]);
    assert_eq!(interp.eval(&Expr::Symbol(x), &inner).unwrap(), Expr::Int(1));
}

#[test]
fn unbound_symbol_reports_its_name() {
    let (interp, env) = setup();
    let err = interp.eval(&sym(&interp, "nowhere"), &env).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnboundSymbol {
            name: "nowhere".to_string()
        }
    );
}

#[test]
fn empty_list_is_not_callable() {
    let (interp, env) = setup();
    let err = interp.eval(&Expr::list(vec![]), &env).unwrap_err();
    assert_eq!(
        err,
        EvalError::NotCallable {
            got: "the empty list"
        }
    );
}

#[test]
fn non_closure_head_is_not_callable() {
    let (interp, env) = setup();
    let expr = Expr::list(vec![Expr::Int(1), Expr::Int(2)]);
    assert_eq!(
        interp.eval(&expr, &env).unwrap_err(),
        EvalError::NotCallable { got: "integer" }
    );
}

#[test]
fn symbol_bound_to_non_closure_is_not_callable() {
    let (interp, env) = setup();
    interp
        .eval(&define_expr(&interp, "n", Expr::Int(5)), &env)
        .unwrap();
    let call = Expr::list(vec![sym(&interp, "n")]);
    assert_eq!(
        interp.eval(&call, &env).unwrap_err(),
        EvalError::NotCallable { got: "integer" }
    );
}

#[test]
fn head_position_list_evaluating_to_closure_applies() {
    let (interp, env) = setup();
    let identity = lambda_expr(&interp, &["x"], sym(&interp, "x"));
    interp
        .eval(&define_expr(&interp, "f", identity), &env)
        .unwrap();

    // ((if #t f g) 10) - the head is itself evaluated; `g` stays untouched.
    let head = Expr::list(vec![
        sym(&interp, "if"),
        Expr::Bool(true),
        sym(&interp, "f"),
        sym(&interp, "g"),
    ]);
    let call = Expr::list(vec![head, Expr::Int(10)]);
    assert_eq!(interp.eval(&call, &env).unwrap(), Expr::Int(10));
}

#[test]
fn deeply_nested_expressions_do_not_overflow() {
    let (interp, env) = setup();
    let plus = sym(&interp, "+");

    // (+ 1 (+ 1 (+ 1 ... 0))), 10k levels deep.
    let mut expr = Expr::Int(0);
    for _ in 0..10_000 {
        expr = Expr::list(vec![plus.clone(), Expr::Int(1), expr]);
    }
    assert_eq!(interp.eval(&expr, &env).unwrap(), Expr::Int(10_000));
}
