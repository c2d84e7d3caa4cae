//! Runtime type identity for the reflective checks.
//!
//! Rust has no subtype relation to query at runtime, so the original
//! class-reflection checks are redefined over [`std::any`]: `is_instance_of`
//! becomes a `dyn Any` downcast and `is_assignable_from` becomes identity of
//! [`TypeInfo`] tokens, the one type relation the language exposes.

use std::any::{Any, TypeId, type_name};

/// A runtime token for a `'static` type: its [`TypeId`] plus a printable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// The token for `T`.
    #[must_use]
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`].
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// The compiler-rendered type name. Diagnostic only; the exact string is
    /// not a stability guarantee.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
