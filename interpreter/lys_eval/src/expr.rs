//! Expressions and runtime values.
//!
//! Lys is homoiconic: the expression tree the reader produces and the values
//! the evaluator returns share one representation, the [`Expr`] tagged union.
//! A closed sum type keeps the evaluator's dispatch exhaustive - adding a
//! variant is a compile error everywhere it matters.
//!
//! # Heap Enforcement
//!
//! List and closure payloads are shared allocations. All of them go through
//! factory methods on `Expr`; the [`Heap`] wrapper has a crate-private
//! constructor, so external code cannot build one directly.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use lys_ir::Name;

use crate::environment::Env;

/// Shared heap allocation for list and closure payloads.
///
/// Wraps `Rc<T>` with a private constructor so all allocations go through
/// the `Expr` factory methods.
///
/// # Thread Safety
/// `Heap<T>` is NOT thread-safe. It uses `Rc`, which is faster than `Arc`
/// but cannot cross threads. The evaluator is single-threaded; a
/// multi-threaded host runs one interpreter per thread.
pub struct Heap<T>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap allocation. Crate-private: use the `Expr` factories.
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }

    /// Whether two handles point at the same allocation.
    pub fn ptr_eq(a: &Heap<T>, b: &Heap<T>) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A Lys expression, and equally a Lys runtime value.
#[derive(Clone, Debug)]
pub enum Expr {
    /// Integer. Arithmetic on it is checked; overflow is a classified error.
    Int(i64),
    /// Boolean.
    Bool(bool),
    /// Interned symbol.
    Symbol(Name),
    /// Ordered list. Shared on clone.
    List(Heap<Vec<Expr>>),
    /// User function value. Only the evaluator creates these.
    Closure(Heap<ClosureValue>),
}

/// A user function: parameter names, the unevaluated body, and the
/// environment captured at the definition site.
///
/// The environment is held by shared handle, not copied, so the closure
/// keeps seeing bindings added to its defining frame after creation.
/// Immutable once built.
#[derive(Clone, Debug)]
pub struct ClosureValue {
    /// Parameter names, in call order.
    pub params: Vec<Name>,
    /// Body expression, evaluated once per application.
    pub body: Expr,
    /// Defining environment.
    pub env: Env,
}

impl Expr {
    /// Allocate a list value.
    pub fn list(items: Vec<Expr>) -> Expr {
        Expr::List(Heap::new(items))
    }

    /// Allocate a closure value.
    pub fn closure(params: Vec<Name>, body: Expr, env: Env) -> Expr {
        Expr::Closure(Heap::new(ClosureValue { params, body, env }))
    }

    /// Human-readable name of this expression's variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Int(_) => "integer",
            Expr::Bool(_) => "boolean",
            Expr::Symbol(_) => "symbol",
            Expr::List(_) => "list",
            Expr::Closure(_) => "closure",
        }
    }
}

/// Structural equality for everything except closures, which compare by
/// allocation identity: two closures are equal iff they are the same value,
/// not merely textually identical lambdas.
impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Int(a), Expr::Int(b)) => a == b,
            (Expr::Bool(a), Expr::Bool(b)) => a == b,
            (Expr::Symbol(a), Expr::Symbol(b)) => a == b,
            (Expr::List(a), Expr::List(b)) => **a == **b,
            (Expr::Closure(a), Expr::Closure(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}
