// src/sumtype.rs

//! Uniform presentation for closed variant types.
//!
//! The variant sets themselves are plain Rust enums, which already give a
//! closed, namespaced, immutable set of alternatives. This trait adds what
//! the enums don't: the list of variant names and a uniform
//! `<Base.Variant>` / `<Base.Variant: extra>` rendering used for `Debug` and
//! in logs.

use std::fmt;

/// A closed set of named variants belonging to one base type.
pub trait SumType {
    /// Name of the base type, the part before the dot.
    const BASE: &'static str;

    /// Every variant name, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Name of the variant this value is.
    fn variant_name(&self) -> &'static str;

    /// Extra diagnostic text shown after the variant name, if any.
    ///
    /// Implementations compose this themselves: a type with fields shared
    /// by every variant appends its shared text to the variant's own.
    fn extra_info(&self) -> Option<String> {
        None
    }

    /// `<Base.Variant>` or `<Base.Variant: extra>`.
    fn describe(&self) -> String {
        Described(self).to_string()
    }
}

/// Write the standard representation of `value`.
///
/// Meant to back `Debug` impls of `SumType`s.
pub fn fmt_variant<T: SumType + ?Sized>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.extra_info() {
        Some(extra) if !extra.is_empty() => {
            write!(f, "<{}.{}: {}>", T::BASE, value.variant_name(), extra)
        }
        _ => write!(f, "<{}.{}>", T::BASE, value.variant_name()),
    }
}

struct Described<'a, T: ?Sized>(&'a T);

impl<T: SumType + ?Sized> fmt::Display for Described<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_variant(self.0, f)
    }
}
