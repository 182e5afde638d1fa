//! Closure application and argument binding.

use crate::environment::Env;
use crate::errors::{arity_mismatch, EvalError, EvalResult};
use crate::expr::{ClosureValue, Expr};

use super::Interpreter;

impl Interpreter {
    /// Apply a closure to operand expressions.
    ///
    /// Operands are evaluated left-to-right in the *caller's* environment;
    /// the evaluated arguments are then bound in a fresh frame extending
    /// the closure's *captured* environment, and the body is evaluated in
    /// that frame. This is the only place a new frame is created and the
    /// only place the application depth grows.
    pub(super) fn apply(
        &self,
        closure: &ClosureValue,
        operands: &[Expr],
        env: &Env,
        depth: usize,
    ) -> EvalResult {
        self.check_call_depth(depth)?;
        if operands.len() != closure.params.len() {
            return Err(arity_mismatch(closure.params.len(), operands.len()));
        }
        let args = self.eval_operands(operands, env, depth)?;
        let frame = closure.env.extend(closure.params.iter().copied().zip(args));
        self.eval_at(&closure.body, &frame, depth + 1)
    }

    /// Evaluate operand expressions left-to-right, stopping at the first
    /// error.
    pub(super) fn eval_operands(
        &self,
        operands: &[Expr],
        env: &Env,
        depth: usize,
    ) -> Result<Vec<Expr>, EvalError> {
        operands
            .iter()
            .map(|operand| self.eval_at(operand, env, depth))
            .collect()
    }
}
