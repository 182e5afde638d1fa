//! Evaluator behavior suites relocated from implementation files.
//!
//! The reader is an external collaborator, so these tests build expression
//! trees by hand; the helpers below keep that terse.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod dispatch_tests;

use crate::{Env, Expr, Interpreter};

/// Fresh interpreter and root environment.
fn setup() -> (Interpreter, Env) {
    (Interpreter::new(), Env::root())
}

/// Intern `name` through the interpreter and wrap it as a symbol.
fn sym(interp: &Interpreter, name: &str) -> Expr {
    Expr::Symbol(interp.interner().intern(name))
}

/// `(lambda (PARAM...) BODY)`, unevaluated.
fn lambda_expr(interp: &Interpreter, params: &[&str], body: Expr) -> Expr {
    let params = params.iter().map(|p| sym(interp, p)).collect();
    Expr::list(vec![sym(interp, "lambda"), Expr::list(params), body])
}

/// `(define NAME EXPR)`, unevaluated.
fn define_expr(interp: &Interpreter, name: &str, value: Expr) -> Expr {
    Expr::list(vec![sym(interp, "define"), sym(interp, name), value])
}

/// `(quote EXPR)`, unevaluated.
fn quoted(interp: &Interpreter, expr: Expr) -> Expr {
    Expr::list(vec![sym(interp, "quote"), expr])
}
