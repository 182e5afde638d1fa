//! Primitives: evaluate every operand, then compute.
//!
//! Unlike the special forms, all of these are strict - operands are
//! evaluated left-to-right in the current environment before the primitive
//! runs, with no short-circuiting. Operand *count* is syntactic and is
//! checked before any operand is evaluated.

use crate::environment::Env;
use crate::errors::{empty_list, type_mismatch, wrong_operand_count, EvalError, EvalResult};
use crate::expr::Expr;
use crate::operators::{evaluate_numeric, NumericOp};

use super::Interpreter;

impl Interpreter {
    /// Check for exactly one operand, then evaluate it.
    fn eval_one(
        &self,
        form: &'static str,
        operands: &[Expr],
        env: &Env,
        depth: usize,
    ) -> EvalResult {
        let [operand] = operands else {
            return Err(wrong_operand_count(form, 1, operands.len()));
        };
        self.eval_at(operand, env, depth)
    }

    /// Check for exactly two operands, then evaluate both left-to-right.
    fn eval_two(
        &self,
        form: &'static str,
        operands: &[Expr],
        env: &Env,
        depth: usize,
    ) -> Result<(Expr, Expr), EvalError> {
        let [first, second] = operands else {
            return Err(wrong_operand_count(form, 2, operands.len()));
        };
        let first = self.eval_at(first, env, depth)?;
        let second = self.eval_at(second, env, depth)?;
        Ok((first, second))
    }

    /// `(atom X)` - true iff `X` is not a list.
    pub(super) fn eval_atom(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let value = self.eval_one("atom", operands, env, depth)?;
        Ok(Expr::Bool(!matches!(value, Expr::List(_))))
    }

    /// `(eq A B)` - true iff both are atoms and equal.
    ///
    /// Two lists are never `eq`, even structurally identical ones. Atoms of
    /// different variants compare false; nothing is coerced.
    pub(super) fn eval_eq(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let (left, right) = self.eval_two("eq", operands, env, depth)?;
        let result = !matches!(left, Expr::List(_))
            && !matches!(right, Expr::List(_))
            && left == right;
        Ok(Expr::Bool(result))
    }

    /// `(cons A B)` - new list with `A` prepended to list `B`.
    pub(super) fn eval_cons(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let (item, rest) = self.eval_two("cons", operands, env, depth)?;
        match rest {
            Expr::List(rest) => {
                let mut items = Vec::with_capacity(rest.len() + 1);
                items.push(item);
                items.extend(rest.iter().cloned());
                Ok(Expr::list(items))
            }
            other => Err(type_mismatch("cons", "a list", other.type_name())),
        }
    }

    /// `(head L)` - first element of a non-empty list.
    pub(super) fn eval_head(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let value = self.eval_one("head", operands, env, depth)?;
        match value {
            Expr::List(items) => items.first().cloned().ok_or_else(|| empty_list("head")),
            other => Err(type_mismatch("head", "a list", other.type_name())),
        }
    }

    /// `(tail L)` - `L` minus its first element.
    pub(super) fn eval_tail(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let value = self.eval_one("tail", operands, env, depth)?;
        match value {
            Expr::List(items) => match items.split_first() {
                Some((_, rest)) => Ok(Expr::list(rest.to_vec())),
                None => Err(empty_list("tail")),
            },
            other => Err(type_mismatch("tail", "a list", other.type_name())),
        }
    }

    /// `(empty L)` - true iff `L` is the empty list.
    pub(super) fn eval_empty(&self, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let value = self.eval_one("empty", operands, env, depth)?;
        match value {
            Expr::List(items) => Ok(Expr::Bool(items.is_empty())),
            other => Err(type_mismatch("empty", "a list", other.type_name())),
        }
    }

    /// The numeric set `{+ - / * mod >}`.
    pub(super) fn eval_numeric_form(
        &self,
        op: NumericOp,
        operands: &[Expr],
        env: &Env,
        depth: usize,
    ) -> EvalResult {
        let (left, right) = self.eval_two(op.symbol(), operands, env, depth)?;
        evaluate_numeric(op, &left, &right)
    }
}
