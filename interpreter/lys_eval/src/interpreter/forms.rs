//! Pre-interned special-form dispatch table.
//!
//! Form names are interned once at interpreter construction so that
//! call-position dispatch compares interned ids (a `u32 == u32` check)
//! instead of strings.

use lys_ir::{Name, StringInterner};
use rustc_hash::FxHashMap;

use crate::operators::NumericOp;

/// A special form or primitive recognized in call position.
///
/// The set is closed and syntactic: a list headed by one of these symbols
/// is dispatched structurally, and user bindings cannot shadow it there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Form {
    Quote,
    If,
    Define,
    Lambda,
    Atom,
    Eq,
    Cons,
    Head,
    Tail,
    Empty,
    Numeric(NumericOp),
}

/// Map from pre-interned form name to [`Form`].
pub(crate) struct FormNames {
    table: FxHashMap<Name, Form>,
}

impl FormNames {
    /// Intern every form name and build the table.
    pub(crate) fn new(interner: &StringInterner) -> Self {
        let forms = [
            ("quote", Form::Quote),
            ("if", Form::If),
            ("define", Form::Define),
            ("lambda", Form::Lambda),
            ("atom", Form::Atom),
            ("eq", Form::Eq),
            ("cons", Form::Cons),
            ("head", Form::Head),
            ("tail", Form::Tail),
            ("empty", Form::Empty),
            ("+", Form::Numeric(NumericOp::Add)),
            ("-", Form::Numeric(NumericOp::Sub)),
            ("/", Form::Numeric(NumericOp::Div)),
            ("*", Form::Numeric(NumericOp::Mul)),
            ("mod", Form::Numeric(NumericOp::Mod)),
            (">", Form::Numeric(NumericOp::Gt)),
        ];
        let table = forms
            .into_iter()
            .map(|(spelling, form)| (interner.intern(spelling), form))
            .collect();
        FormNames { table }
    }

    /// Look up a symbol in the form table.
    #[inline]
    pub(crate) fn get(&self, name: Name) -> Option<Form> {
        self.table.get(&name).copied()
    }
}
