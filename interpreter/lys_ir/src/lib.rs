//! Lys IR - interned symbol names for the Lys interpreter.
//!
//! Symbols are the only identifier-like value in Lys, and every environment
//! lookup keys on one, so they are interned once and compared as `u32`s.
//! The expression model itself lives in `lys_eval`, next to the evaluator
//! that gives it meaning.

mod interner;
mod name;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
