//! Environment for variable scoping in the evaluator.
//!
//! A chain of reference-counted frames, innermost first. Frames are
//! extended, never copied: [`Env::extend`] builds a new frame whose parent
//! is the receiver, so closures sharing an ancestor keep seeing it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lys_ir::Name;
use rustc_hash::FxHashMap;

use crate::expr::Expr;

/// Error returned by [`Env::define`] when the symbol already has a binding
/// in that exact frame.
///
/// Typed rather than stringly so the evaluator can attach the symbol's text
/// when it classifies the failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlreadyBound;

/// A single frame: this scope's own bindings plus the enclosing frame.
struct Frame {
    /// Bindings introduced at this scope level (`FxHashMap` for fast
    /// hashing with `Name` keys).
    bindings: FxHashMap<Name, Expr>,
    /// Enclosing frame. `None` only for the root.
    parent: Option<Env>,
}

/// Shared handle to an environment frame.
///
/// Cloning the handle aliases the frame - this is how a closure holds its
/// defining environment, and how `extend` chains a child to its parent
/// without copying anything.
///
/// # Thread Safety
/// `Env` is NOT thread-safe: it uses `Rc<RefCell<..>>` for single-threaded
/// interior mutability. A multi-threaded host gives each thread its own
/// interpreter and root environment.
#[derive(Clone)]
pub struct Env(Rc<RefCell<Frame>>);

impl Env {
    /// Create a root environment: no parent, no bindings.
    ///
    /// The core seeds nothing into it - special forms and primitives are
    /// syntactic dispatch, not bindings. A bootstrap layer may pre-seed it
    /// with [`define`](Env::define).
    pub fn root() -> Self {
        Env(Rc::new(RefCell::new(Frame {
            bindings: FxHashMap::default(),
            parent: None,
        })))
    }

    fn with_parent(parent: Env) -> Self {
        Env(Rc::new(RefCell::new(Frame {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        })))
    }

    /// Look up a symbol, walking from this frame outward. First match wins.
    pub fn lookup(&self, name: Name) -> Option<Expr> {
        let frame = self.0.borrow();
        if let Some(value) = frame.bindings.get(&name) {
            return Some(value.clone());
        }
        frame.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Bind `name` to `value` in this frame's own table.
    ///
    /// Shadowing a parent's binding is allowed; rebinding within the same
    /// frame is not - each symbol is defined at most once per frame, which
    /// is what distinguishes `define` from assignment. No ancestor is ever
    /// touched.
    pub fn define(&self, name: Name, value: Expr) -> Result<(), AlreadyBound> {
        use std::collections::hash_map::Entry;

        let mut frame = self.0.borrow_mut();
        match frame.bindings.entry(name) {
            Entry::Occupied(_) => Err(AlreadyBound),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    /// Create a new frame chained to this one, seeded with `bindings`.
    ///
    /// Pure with respect to the receiver: neither this frame nor any
    /// ancestor is mutated. This is how every call frame is made.
    #[must_use]
    pub fn extend(&self, bindings: impl IntoIterator<Item = (Name, Expr)>) -> Env {
        let child = Env::with_parent(self.clone());
        {
            let mut frame = child.0.borrow_mut();
            for (name, value) in bindings {
                frame.bindings.insert(name, value);
            }
        }
        child
    }
}

// Shallow on purpose: frames can reach themselves through captured closures,
// so printing the chain could never terminate.
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0.borrow();
        f.debug_struct("Env")
            .field("bindings", &frame.bindings.len())
            .field("has_parent", &frame.parent.is_some())
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use lys_ir::SharedInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_define_and_lookup() {
        let interner = SharedInterner::default();
        let x = interner.intern("x");

        let env = Env::root();
        assert!(env.define(x, Expr::Int(42)).is_ok());
        assert_eq!(env.lookup(x), Some(Expr::Int(42)));
    }

    #[test]
    fn test_lookup_missing_is_none() {
        let interner = SharedInterner::default();
        let env = Env::root();
        assert_eq!(env.lookup(interner.intern("missing")), None);
    }

    #[test]
    fn test_redefinition_in_same_frame_rejected() {
        let interner = SharedInterner::default();
        let x = interner.intern("x");

        let env = Env::root();
        assert!(env.define(x, Expr::Int(1)).is_ok());
        assert_eq!(env.define(x, Expr::Int(2)), Err(AlreadyBound));
        // The first binding survives.
        assert_eq!(env.lookup(x), Some(Expr::Int(1)));
    }

    #[test]
    fn test_shadowing_parent_is_allowed() {
        let interner = SharedInterner::default();
        let x = interner.intern("x");

        let parent = Env::root();
        parent.define(x, Expr::Int(1)).unwrap();

        let child = parent.extend([]);
        assert!(child.define(x, Expr::Int(2)).is_ok());

        assert_eq!(child.lookup(x), Some(Expr::Int(2)));
        assert_eq!(parent.lookup(x), Some(Expr::Int(1)));
    }

    #[test]
    fn test_lookup_walks_the_chain() {
        let interner = SharedInterner::default();
        let x = interner.intern("x");
        let y = interner.intern("y");

        let root = Env::root();
        root.define(x, Expr::Int(1)).unwrap();

        let inner = root.extend([(y, Expr::Int(2))]).extend([]);
        assert_eq!(inner.lookup(x), Some(Expr::Int(1)));
        assert_eq!(inner.lookup(y), Some(Expr::Int(2)));
    }

    #[test]
    fn test_extend_never_mutates_parent() {
        let interner = SharedInterner::default();
        let y = interner.intern("y");

        let parent = Env::root();
        let child = parent.extend([(y, Expr::Int(5))]);

        assert_eq!(child.lookup(y), Some(Expr::Int(5)));
        assert_eq!(parent.lookup(y), None);
    }

    #[test]
    fn test_extended_frame_sees_later_parent_defines() {
        let interner = SharedInterner::default();
        let z = interner.intern("z");

        let parent = Env::root();
        let child = parent.extend([]);

        // The chain is shared, not snapshotted at extend time.
        parent.define(z, Expr::Int(9)).unwrap();
        assert_eq!(child.lookup(z), Some(Expr::Int(9)));
    }
}
