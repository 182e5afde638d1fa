//! Lys Eval - the evaluation core of the Lys interpreter.
//!
//! Given a parsed expression tree and a lexical environment, produce a value
//! or a classified error. The reader, printer, and REPL are external
//! collaborators; this crate owns:
//!
//! - [`Expr`] - the homoiconic tagged union shared by expressions and
//!   runtime values
//! - [`Env`] - the chained variable scope supporting lexical closures
//! - [`Interpreter`] - the recursive dispatcher over special forms and
//!   function application
//!
//! # Evaluation at a glance
//!
//! ```
//! use lys_eval::{Env, Expr, Interpreter};
//!
//! let interp = Interpreter::new();
//! let env = Env::root();
//!
//! // (+ 1 2)
//! let plus = Expr::Symbol(interp.interner().intern("+"));
//! let expr = Expr::list(vec![plus, Expr::Int(1), Expr::Int(2)]);
//!
//! assert_eq!(interp.eval(&expr, &env), Ok(Expr::Int(3)));
//! ```

mod environment;
pub mod errors;
mod expr;
mod interpreter;
mod operators;
mod stack;

#[cfg(test)]
mod tests;

pub use environment::{AlreadyBound, Env};
pub use errors::{EvalError, EvalResult};
pub use expr::{ClosureValue, Expr, Heap};
pub use interpreter::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use operators::{evaluate_numeric, NumericOp};
pub use stack::ensure_sufficient_stack;
