//! The numeric primitive set: arithmetic and comparison on integers.
//!
//! Direct enum-based dispatch - the operator set is closed by the language,
//! so pattern matching is preferred over trait objects and gets us
//! exhaustiveness checking for free. All arithmetic is checked; unchecked
//! overflow never reaches a wrap.

use crate::errors::{
    division_by_zero, integer_overflow, modulo_by_zero, type_mismatch, EvalResult,
};
use crate::expr::Expr;

/// A numeric primitive. The set is closed: no other operators exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericOp {
    Add,
    Sub,
    Div,
    Mul,
    Mod,
    Gt,
}

impl NumericOp {
    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            NumericOp::Add => "+",
            NumericOp::Sub => "-",
            NumericOp::Div => "/",
            NumericOp::Mul => "*",
            NumericOp::Mod => "mod",
            NumericOp::Gt => ">",
        }
    }
}

/// Checked arithmetic with overflow classification.
#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult {
    result.map(Expr::Int).ok_or_else(|| integer_overflow(operation))
}

/// Apply a numeric primitive to two already-evaluated operands.
///
/// Both operands must be integers - booleans are not numbers and nothing is
/// coerced. `/` is truncating division and `mod` is the remainder consistent
/// with it, so `a == b * (a / b) + (a mod b)` whenever `b` is nonzero.
pub fn evaluate_numeric(op: NumericOp, left: &Expr, right: &Expr) -> EvalResult {
    let (a, b) = match (left, right) {
        (Expr::Int(a), Expr::Int(b)) => (*a, *b),
        (Expr::Int(_), other) | (other, _) => {
            return Err(type_mismatch(op.symbol(), "integer operands", other.type_name()));
        }
    };
    match op {
        NumericOp::Add => checked_arith(a.checked_add(b), "addition"),
        NumericOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        NumericOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        NumericOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            checked_arith(a.checked_div(b), "division")
        }
        NumericOp::Mod => {
            if b == 0 {
                return Err(modulo_by_zero());
            }
            checked_arith(a.checked_rem(b), "remainder")
        }
        NumericOp::Gt => Ok(Expr::Bool(a > b)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::errors::EvalError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_arithmetic() {
        assert_eq!(
            evaluate_numeric(NumericOp::Add, &Expr::Int(2), &Expr::Int(3)).unwrap(),
            Expr::Int(5)
        );
        assert_eq!(
            evaluate_numeric(NumericOp::Sub, &Expr::Int(5), &Expr::Int(3)).unwrap(),
            Expr::Int(2)
        );
        assert_eq!(
            evaluate_numeric(NumericOp::Mul, &Expr::Int(2), &Expr::Int(3)).unwrap(),
            Expr::Int(6)
        );
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(
            evaluate_numeric(NumericOp::Div, &Expr::Int(7), &Expr::Int(2)).unwrap(),
            Expr::Int(3)
        );
        assert_eq!(
            evaluate_numeric(NumericOp::Div, &Expr::Int(-7), &Expr::Int(2)).unwrap(),
            Expr::Int(-3)
        );
    }

    #[test]
    fn test_mod_is_consistent_with_division() {
        assert_eq!(
            evaluate_numeric(NumericOp::Mod, &Expr::Int(7), &Expr::Int(2)).unwrap(),
            Expr::Int(1)
        );
        // Truncating division means the remainder takes the dividend's sign.
        assert_eq!(
            evaluate_numeric(NumericOp::Mod, &Expr::Int(-7), &Expr::Int(2)).unwrap(),
            Expr::Int(-1)
        );
    }

    #[test]
    fn test_zero_divisors() {
        assert_eq!(
            evaluate_numeric(NumericOp::Div, &Expr::Int(1), &Expr::Int(0)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            evaluate_numeric(NumericOp::Mod, &Expr::Int(1), &Expr::Int(0)),
            Err(EvalError::ModuloByZero)
        );
    }

    #[test]
    fn test_overflow_is_classified() {
        assert_eq!(
            evaluate_numeric(NumericOp::Add, &Expr::Int(i64::MAX), &Expr::Int(1)),
            Err(EvalError::IntegerOverflow {
                operation: "addition"
            })
        );
        // i64::MIN / -1 is the one overflowing division.
        assert_eq!(
            evaluate_numeric(NumericOp::Div, &Expr::Int(i64::MIN), &Expr::Int(-1)),
            Err(EvalError::IntegerOverflow {
                operation: "division"
            })
        );
    }

    #[test]
    fn test_comparison_yields_boolean() {
        assert_eq!(
            evaluate_numeric(NumericOp::Gt, &Expr::Int(3), &Expr::Int(2)).unwrap(),
            Expr::Bool(true)
        );
        assert_eq!(
            evaluate_numeric(NumericOp::Gt, &Expr::Int(2), &Expr::Int(3)).unwrap(),
            Expr::Bool(false)
        );
    }

    #[test]
    fn test_non_integer_operands_rejected() {
        let err = evaluate_numeric(NumericOp::Add, &Expr::Bool(true), &Expr::Int(1));
        assert_eq!(
            err,
            Err(EvalError::TypeMismatch {
                operation: "+",
                expected: "integer operands",
                got: "boolean"
            })
        );
        // The right operand is reported when only it is wrong.
        let err = evaluate_numeric(NumericOp::Gt, &Expr::Int(1), &Expr::list(vec![]));
        assert_eq!(
            err,
            Err(EvalError::TypeMismatch {
                operation: ">",
                expected: "integer operands",
                got: "list"
            })
        );
    }
}
