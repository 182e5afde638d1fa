//! Tree-walking evaluator for Lys.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::eval`]. Helper modules carry
//! the per-form logic:
//!
//! - `special` - `quote`, `if`, `define`, `lambda`
//! - `apply` - closure application and argument binding
//! - `primitives` - `atom`/`eq`/`cons`/`head`/`tail`/`empty` and the
//!   numeric set
//!
//! Dispatch order, first match wins: self-evaluating atoms; symbol lookup;
//! then list handling - a closure value in head position applies directly,
//! a recognized form symbol dispatches structurally, and anything else has
//! its head evaluated and applied (or fails as not callable).
//!
//! The form set is syntactic: `define`-ing a symbol spelled like a form
//! binds it for operand use, but can never shadow call-position dispatch.

mod apply;
mod forms;
mod primitives;
mod special;

use lys_ir::{Name, SharedInterner, StringInterner};

use crate::environment::Env;
use crate::errors::{not_callable, recursion_limit, unbound_symbol, EvalError, EvalResult};
use crate::expr::Expr;
use crate::stack::ensure_sufficient_stack;
use forms::{Form, FormNames};

/// Default limit on nested closure applications.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// The Lys evaluator.
///
/// Holds no evaluation state of its own: the environment is passed
/// explicitly into [`eval`](Interpreter::eval), which keeps the evaluator
/// reentrant and testable in isolation.
pub struct Interpreter {
    /// Symbol interner, shareable with a host reader/printer.
    interner: SharedInterner,
    /// Pre-interned special-form names for hot-path dispatch.
    forms: FormNames,
    /// Application-depth limit; `None` disables the check.
    max_call_depth: Option<usize>,
}

impl Interpreter {
    /// Create an interpreter with a fresh interner and the default
    /// call-depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// The interner used for symbol names.
    ///
    /// A host reader interns symbols through this; a host printer resolves
    /// them back to text.
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Evaluate `expr` in `env`, producing a value or a classified error.
    pub fn eval(&self, expr: &Expr, env: &Env) -> EvalResult {
        self.eval_at(expr, env, 0)
    }

    /// One recursive evaluation step. `depth` counts closure applications,
    /// not expression nesting - nesting is handled by the stack growth
    /// wrapper alone.
    fn eval_at(&self, expr: &Expr, env: &Env, depth: usize) -> EvalResult {
        ensure_sufficient_stack(|| match expr {
            // Already-evaluated data flowing back through `eval` returns
            // itself; that includes closure values.
            Expr::Int(_) | Expr::Bool(_) | Expr::Closure(_) => Ok(expr.clone()),
            Expr::Symbol(name) => self.lookup_symbol(*name, env),
            Expr::List(items) => self.eval_list(items, env, depth),
        })
    }

    fn lookup_symbol(&self, name: Name, env: &Env) -> EvalResult {
        env.lookup(name)
            .ok_or_else(|| unbound_symbol(self.interner.lookup(name)))
    }

    fn eval_list(&self, items: &[Expr], env: &Env, depth: usize) -> EvalResult {
        let Some((head, operands)) = items.split_first() else {
            // `()` has nothing in head position.
            return Err(not_callable("the empty list"));
        };
        // A closure value in head position is a direct application.
        if let Expr::Closure(closure) = head {
            return self.apply(closure, operands, env, depth);
        }
        // A recognized form symbol dispatches structurally, regardless of
        // any binding of the same spelling.
        if let Expr::Symbol(name) = head {
            if let Some(form) = self.forms.get(*name) {
                return self.eval_form(form, operands, env, depth);
            }
        }
        // Everything else: evaluate the head and apply the result.
        match self.eval_at(head, env, depth)? {
            Expr::Closure(closure) => self.apply(&closure, operands, env, depth),
            other => Err(not_callable(other.type_name())),
        }
    }

    fn eval_form(&self, form: Form, operands: &[Expr], env: &Env, depth: usize) -> EvalResult {
        match form {
            Form::Quote => self.eval_quote(operands),
            Form::If => self.eval_if(operands, env, depth),
            Form::Define => self.eval_define(operands, env, depth),
            Form::Lambda => self.eval_lambda(operands, env),
            Form::Atom => self.eval_atom(operands, env, depth),
            Form::Eq => self.eval_eq(operands, env, depth),
            Form::Cons => self.eval_cons(operands, env, depth),
            Form::Head => self.eval_head(operands, env, depth),
            Form::Tail => self.eval_tail(operands, env, depth),
            Form::Empty => self.eval_empty(operands, env, depth),
            Form::Numeric(op) => self.eval_numeric_form(op, operands, env, depth),
        }
    }

    /// Check the application depth against the configured limit.
    fn check_call_depth(&self, depth: usize) -> Result<(), EvalError> {
        match self.max_call_depth {
            Some(limit) if depth >= limit => Err(recursion_limit(limit)),
            _ => Ok(()),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`Interpreter`].
pub struct InterpreterBuilder {
    interner: Option<SharedInterner>,
    max_call_depth: Option<usize>,
}

impl InterpreterBuilder {
    /// Start from the defaults.
    pub fn new() -> Self {
        InterpreterBuilder {
            interner: None,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }

    /// Share an interner with the host's reader, so symbols interned while
    /// parsing resolve inside the evaluator.
    #[must_use]
    pub fn interner(mut self, interner: SharedInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    /// Limit on nested closure applications. `None` disables the classified
    /// check; physical stack growth stays on either way.
    #[must_use]
    pub fn max_call_depth(mut self, limit: Option<usize>) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Build the interpreter, pre-interning the form names.
    pub fn build(self) -> Interpreter {
        let interner = self.interner.unwrap_or_default();
        let forms = FormNames::new(&interner);
        Interpreter {
            interner,
            forms,
            max_call_depth: self.max_call_depth,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
