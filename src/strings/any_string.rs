//! Capability traits shared by the fixed and the dynamic string.
//!
//! [`AnyString`] is the read-only view every representation offers. [`GrowableString`]
//! extends it with the in-place mutations only [`DynString`](crate::DynString) supports.
//! Both traits are object-safe so callers can hold a `&dyn AnyString` or a
//! `&mut dyn GrowableString` without knowing the representation.

use core::iter::Copied;
use core::slice;

use crate::code::{AsCode, Code, code_to_char};
use crate::error::Result;
use crate::utils::range::Slice;

/// Read-only access to a sequence of codes.
///
/// Element accessors return codes by value and carry a `_code` suffix, so they never
/// shadow the `&Code` accessors both string types get from `Deref<Target = [Code]>`.
pub trait AnyString {
    /// The live codes, front to back.
    fn as_codes(&self) -> &[Code];

    fn len(&self) -> usize {
        self.as_codes().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated slots. Equal to `len()` for representations without slack.
    fn capacity(&self) -> usize {
        self.len()
    }

    fn code_at(&self, index: usize) -> Option<Code> {
        self.as_codes().get(index).copied()
    }

    fn first_code(&self) -> Option<Code> {
        self.as_codes().first().copied()
    }

    fn last_code(&self) -> Option<Code> {
        self.as_codes().last().copied()
    }

    /// Iterates the codes by value.
    fn codes(&self) -> Copied<slice::Iter<'_, Code>> {
        self.as_codes().iter().copied()
    }

    /// Renders the codes as text, replacing non-scalar values with U+FFFD.
    fn to_string_lossy(&self) -> String {
        self.codes().map(code_to_char).collect()
    }
}

/// In-place mutation of a string that can grow at either end.
///
/// Every operation that may allocate returns a [`Result`]; on `Err` the string is left
/// unchanged. Positions are signed and normalized with
/// [`normalize_index`](crate::utils::range::normalize_index).
pub trait GrowableString: AnyString {
    /// Adds `code` after the last code.
    fn append(&mut self, code: Code) -> Result<()>;

    /// Adds `code` before the first code.
    fn prepend(&mut self, code: Code) -> Result<()>;

    /// Adds `codes` after the last code, preserving their order.
    fn append_codes(&mut self, codes: &[Code]) -> Result<()>;

    /// Adds `codes` before the first code, preserving their order.
    fn prepend_codes(&mut self, codes: &[Code]) -> Result<()>;

    /// Inserts `codes` so that the first of them lands at `index`.
    fn insert_codes_at(&mut self, index: isize, codes: &[Code]) -> Result<()>;

    /// Removes the code at `index` and returns it.
    fn remove_at(&mut self, index: isize) -> Result<Code>;

    /// Removes a contiguous selection. Strided slices are rejected.
    fn remove_slice(&mut self, slice: Slice) -> Result<()>;

    /// Empties the string, keeping its allocation.
    fn clear(&mut self);

    /// Forgets the first code. No-op on an empty string.
    fn drop_first(&mut self);

    /// Forgets the last code. No-op on an empty string.
    fn drop_last(&mut self);

    /// Forgets `|n|` codes, from the front when `n < 0`, from the back otherwise.
    fn drop(&mut self, n: isize);

    fn insert_at(&mut self, index: isize, code: Code) -> Result<()> {
        self.insert_codes_at(index, &[code])
    }

    fn append_str(&mut self, other: &dyn AnyString) -> Result<()> {
        self.append_codes(other.as_codes())
    }

    fn prepend_str(&mut self, other: &dyn AnyString) -> Result<()> {
        self.prepend_codes(other.as_codes())
    }

    fn insert_str_at(&mut self, index: isize, other: &dyn AnyString) -> Result<()> {
        self.insert_codes_at(index, other.as_codes())
    }

    fn append_value(&mut self, value: &dyn AsCode) -> Result<()> {
        self.append(value.as_code())
    }

    fn prepend_value(&mut self, value: &dyn AsCode) -> Result<()> {
        self.prepend(value.as_code())
    }

    fn insert_value_at(&mut self, index: isize, value: &dyn AsCode) -> Result<()> {
        self.insert_at(index, value.as_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DynString, FixString};

    #[test]
    fn test_any_string_accessors_by_value() {
        let fixed = FixString::from_codes(&[104, 105, 0xD800]);
        let any: &dyn AnyString = &fixed;
        assert_eq!(any.len(), 3);
        assert!(!any.is_empty());
        assert_eq!(any.first_code(), Some(104));
        assert_eq!(any.last_code(), Some(0xD800));
        assert_eq!(any.code_at(1), Some(105));
        assert_eq!(any.code_at(3), None);
        assert_eq!(any.to_string_lossy(), "hi\u{FFFD}");
        assert_eq!(any.codes().sum::<Code>(), 104 + 105 + 0xD800);
    }

    #[test]
    fn test_any_string_accessors_do_not_shadow_slices() {
        let codes: Vec<Code> = vec![1, 2, 3];
        let doubled: Vec<Code> = codes.iter().map(|&c| c * 2).collect();
        assert_eq!(doubled, [2, 4, 6]);
        assert_eq!(codes.first(), Some(&1));

        let s = DynString::from_codes(&codes);
        assert_eq!(s.first(), Some(&1));
        assert_eq!(s.first_code(), Some(1));
        assert_eq!(s.iter().copied().collect::<Vec<_>>(), codes);
        assert!(s.codes().eq(codes.iter().copied()));
    }

    #[test]
    fn test_any_string_empty() {
        let s = DynString::new();
        let any: &dyn AnyString = &s;
        assert!(any.is_empty());
        assert_eq!(any.first_code(), None);
        assert_eq!(any.last_code(), None);
        assert_eq!(any.to_string_lossy(), "");
    }
}
