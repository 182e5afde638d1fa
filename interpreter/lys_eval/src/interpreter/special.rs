//! The four structural special forms: `quote`, `if`, `define`, `lambda`.
//!
//! These control what gets evaluated: each one leaves at least one operand
//! unevaluated, which is exactly what distinguishes them from the
//! primitives in `primitives.rs`.

use crate::environment::Env;
use crate::errors::{
    already_defined, invalid_param_list, not_a_symbol, wrong_operand_count, EvalResult,
};
use crate::expr::Expr;

use super::Interpreter;

impl Interpreter {
    /// `(quote X)` - return `X` unevaluated.
    pub(super) fn eval_quote(&self, operands: &[Expr]) -> EvalResult {
        let [quoted] = operands else {
            return Err(wrong_operand_count("quote", 1, operands.len()));
        };
        Ok(quoted.clone())
    }

    /// `(if COND THEN ELSE)`.
    ///
    /// Only boolean `false` selects the else branch; every other value,
    /// boolean or not, selects the then branch. The untaken branch is never
    /// evaluated.
    pub(super) fn eval_if(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let [cond, then_branch, else_branch] = operands else {
            return Err(wrong_operand_count("if", 3, operands.len()));
        };
        if matches!(self.eval_at(cond, env, depth)?, Expr::Bool(false)) {
            self.eval_at(else_branch, env, depth)
        } else {
            self.eval_at(then_branch, env, depth)
        }
    }

    /// `(define SYMBOL EXPR)` - evaluate `EXPR` here, then bind the result
    /// in the current frame's own table. Evaluates to the bound value.
    pub(super) fn eval_define(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let [target, init] = operands else {
            return Err(wrong_operand_count("define", 2, operands.len()));
        };
        let Expr::Symbol(name) = target else {
            return Err(not_a_symbol(target.type_name()));
        };
        let value = self.eval_at(init, env, depth)?;
        env.define(*name, value.clone())
            .map_err(|_| already_defined(self.interner.lookup(*name)))?;
        Ok(value)
    }

    /// `(lambda (PARAM...) BODY)` - build a closure over the current
    /// environment. The body is not evaluated here.
    pub(super) fn eval_lambda(&self, operands: &[Expr], env: &Env) -> EvalResult {
        let [params, body] = operands else {
            return Err(wrong_operand_count("lambda", 2, operands.len()));
        };
        let Expr::List(items) = params else {
            return Err(invalid_param_list(params.type_name()));
        };
        let mut names = Vec::with_capacity(items.len());
        for item in items.iter() {
            let Expr::Symbol(name) = item else {
                return Err(not_a_symbol(item.type_name()));
            };
            names.push(*name);
        }
        Ok(Expr::closure(names, body.clone(), env.clone()))
    }
}
