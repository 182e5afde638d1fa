//! String interner for symbol names.
//!
//! Provides O(1) interning and lookup with thread-safe access via a
//! read-write lock: lookups and repeat interns take the read lock, only a
//! first-time intern takes the write lock.

// Arc is needed for SharedInterner - the interner may be shared between the
// evaluator and a host reader/printer.
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::Name;

/// Storage for interned strings.
struct InternTable {
    /// Map from string content to index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternTable {
    fn new() -> Self {
        let mut table = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        // Pre-intern empty string at index 0
        let empty: &'static str = "";
        table.map.insert(empty, 0);
        table.strings.push(empty);
        table
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Table exceeded capacity (over 4 billion strings).
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// String interner for symbol names.
///
/// Provides O(1) lookup and equality comparison for interned strings.
///
/// # Thread Safety
/// Uses an `RwLock` for concurrent read/write access. Can be wrapped in
/// [`SharedInterner`] for sharing between an evaluator and a host front end.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the special-form names pre-interned.
    pub fn new() -> Self {
        let interner = Self {
            table: RwLock::new(InternTable::new()),
        };
        interner.pre_intern_forms();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    ///
    /// This is the fallible version of `intern()`. Use this when you need to
    /// handle the overflow case gracefully instead of panicking.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        // Fast path: check if already interned
        {
            let table = self.table.read();
            if let Some(&id) = table.map.get(s) {
                return Ok(Name::from_raw(id));
            }
        }

        // Slow path: need to insert
        let mut table = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&id) = table.map.get(s) {
            return Ok(Name::from_raw(id));
        }

        let count = table.strings.len();
        let id = u32::try_from(count).map_err(|_| InternError::Overflow { count })?;

        // Leak the string to get 'static lifetime
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        table.strings.push(leaked);
        table.map.insert(leaked, id);

        Ok(Name::from_raw(id))
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if the interner exceeds capacity (over 4 billion strings).
    /// Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        let table = self.table.read();
        table.strings[name.index()]
    }

    /// Look up the string for a Name, returning a `'static` reference.
    ///
    /// This is safe because all interned strings are leaked (never
    /// deallocated). Use this when the string must outlive the borrow of the
    /// interner itself.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        let table = self.table.read();
        table.strings[name.index()]
    }

    /// Pre-intern the special-form and primitive names recognized in call
    /// position, so they occupy stable low indices in every session.
    fn pre_intern_forms(&self) {
        const FORMS: &[&str] = &[
            // Special forms
            "quote",
            "if",
            "define",
            "lambda",
            // List and atom primitives
            "atom",
            "eq",
            "cons",
            "head",
            "tail",
            "empty",
            // Numeric primitives
            "+",
            "-",
            "/",
            "*",
            "mod",
            ">",
        ];

        for form in FORMS {
            self.intern(form);
        }
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner is empty (only has the empty string).
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared interner handle for use across the evaluator and a host front end.
///
/// This newtype enforces that all interner sharing goes through this type,
/// preventing accidental direct `Arc<StringInterner>` usage.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
