//! Classified evaluation errors.
//!
//! Every failure mode the evaluator can produce is a distinct variant:
//! callers match on the variant, never parse message strings. Errors are
//! raised at the point of detection and propagate unmodified through every
//! enclosing `eval` call - no partial results, no retry, no default
//! substitution. Rendering them is the front end's job.
//!
//! Factory functions (e.g. [`division_by_zero`]) are the construction API;
//! they are `#[cold]` because every one of them sits on a failure path.

use std::fmt;

use crate::expr::Expr;

/// Result of evaluation.
pub type EvalResult = Result<Expr, EvalError>;

/// Classified evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalError {
    /// Symbol absent from the entire environment chain.
    UnboundSymbol { name: String },
    /// Wrong operand count for a special form or primitive.
    WrongOperandCount {
        form: &'static str,
        expected: usize,
        got: usize,
    },
    /// `lambda`'s parameter position was not a list.
    InvalidParamList { got: &'static str },
    /// A raw symbol was required (`define`'s target, a `lambda` parameter).
    NotASymbol { got: &'static str },
    /// Redefinition within the same environment frame.
    AlreadyDefined { name: String },
    /// Closure invoked with the wrong number of arguments.
    ArityMismatch { expected: usize, got: usize },
    /// `head` or `tail` applied to the empty list.
    EmptyList { operation: &'static str },
    /// Operand of the wrong type for a primitive.
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    /// Division by zero.
    DivisionByZero,
    /// Modulo by zero.
    ModuloByZero,
    /// Integer overflow in checked arithmetic.
    IntegerOverflow { operation: &'static str },
    /// Head position is neither a special form nor a closure.
    NotCallable { got: &'static str },
    /// Nested applications exceeded the configured limit.
    RecursionLimit { limit: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "unbound symbol: {name}"),
            Self::WrongOperandCount {
                form,
                expected,
                got,
            } => write!(f, "{form} expects {expected} operand(s), got {got}"),
            Self::InvalidParamList { got } => {
                write!(f, "lambda parameters must be a list of symbols, got {got}")
            }
            Self::NotASymbol { got } => write!(f, "expected a symbol, got {got}"),
            Self::AlreadyDefined { name } => {
                write!(f, "{name} is already defined in this scope")
            }
            Self::ArityMismatch { expected, got } => {
                write!(f, "wrong number of arguments: expected {expected}, got {got}")
            }
            Self::EmptyList { operation } => write!(f, "{operation} called on an empty list"),
            Self::TypeMismatch {
                operation,
                expected,
                got,
            } => write!(f, "{operation} expects {expected}, got {got}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulo by zero"),
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::NotCallable { got } => write!(f, "{got} is not callable"),
            Self::RecursionLimit { limit } => {
                write!(f, "maximum call depth exceeded (limit: {limit})")
            }
        }
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Symbol not found anywhere in the environment chain.
#[cold]
pub fn unbound_symbol(name: &str) -> EvalError {
    EvalError::UnboundSymbol {
        name: name.to_string(),
    }
}

/// Wrong operand count for a special form or primitive.
#[cold]
pub fn wrong_operand_count(form: &'static str, expected: usize, got: usize) -> EvalError {
    EvalError::WrongOperandCount {
        form,
        expected,
        got,
    }
}

/// `lambda` parameter position was not a list.
#[cold]
pub fn invalid_param_list(got: &'static str) -> EvalError {
    EvalError::InvalidParamList { got }
}

/// A raw symbol was required.
#[cold]
pub fn not_a_symbol(got: &'static str) -> EvalError {
    EvalError::NotASymbol { got }
}

/// Redefinition within the same frame.
#[cold]
pub fn already_defined(name: &str) -> EvalError {
    EvalError::AlreadyDefined {
        name: name.to_string(),
    }
}

/// Closure argument count does not match its parameter count.
#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalError::ArityMismatch { expected, got }
}

/// `head`/`tail` on the empty list.
#[cold]
pub fn empty_list(operation: &'static str) -> EvalError {
    EvalError::EmptyList { operation }
}

/// Operand of the wrong type for a primitive.
#[cold]
pub fn type_mismatch(
    operation: &'static str,
    expected: &'static str,
    got: &'static str,
) -> EvalError {
    EvalError::TypeMismatch {
        operation,
        expected,
        got,
    }
}

/// Division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

/// Modulo by zero.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::ModuloByZero
}

/// Integer overflow in checked arithmetic.
#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

/// Head position resolved to neither a special form nor a closure.
#[cold]
pub fn not_callable(got: &'static str) -> EvalError {
    EvalError::NotCallable { got }
}

/// Nested applications exceeded the configured limit.
#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::RecursionLimit { limit }
}
