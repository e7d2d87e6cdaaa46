//! Exact-capacity, read-only string.
//!
//! [`FixString`] is what a [`DynString`] becomes once it stops growing: one boxed block with
//! `capacity == len` and no slack. It implements [`AnyString`] only; call
//! [`thaw`](FixString::thaw) to get a growable string back.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, Index};

use crate::code::{AsCode, Code, code_to_char};
use crate::error::StringError;
use crate::strings::any_string::AnyString;
use crate::strings::dyn_string::DynString;

#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixString {
    codes: Box<[Code]>,
}

impl FixString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_codes(codes: &[Code]) -> Self {
        Self::from_boxed(codes.into())
    }

    pub(crate) fn from_boxed(codes: Box<[Code]>) -> Self {
        Self { codes }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Always equal to [`len`](FixString::len).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.codes.len()
    }

    #[inline(always)]
    pub fn as_codes(&self) -> &[Code] {
        &self.codes
    }

    /// Converts back into a growable string without copying.
    ///
    /// The result starts with no slack; the first `append` or `prepend` grows it.
    pub fn thaw(self) -> DynString {
        tracing::trace!(len = self.codes.len(), "fixed string thawed");
        DynString::from_exact(self.codes.into_vec())
    }
}

impl AnyString for FixString {
    fn as_codes(&self) -> &[Code] {
        &self.codes
    }
}

impl fmt::Debug for FixString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.codes.iter()).finish()
    }
}

impl fmt::Display for FixString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.codes
            .iter()
            .try_for_each(|&code| f.write_char(code_to_char(code)))
    }
}

impl Deref for FixString {
    type Target = [Code];

    #[inline(always)]
    fn deref(&self) -> &[Code] {
        &self.codes
    }
}

impl Index<usize> for FixString {
    type Output = Code;

    fn index(&self, index: usize) -> &Code {
        &self.codes[index]
    }
}

impl AsRef<[Code]> for FixString {
    fn as_ref(&self) -> &[Code] {
        &self.codes
    }
}

// Must agree with `DynString`'s hash so both can key the same map.
impl Hash for FixString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_codes().hash(state);
    }
}

impl PartialEq<DynString> for FixString {
    fn eq(&self, other: &DynString) -> bool {
        self.as_codes() == other.as_codes()
    }
}

impl PartialEq<str> for FixString {
    fn eq(&self, other: &str) -> bool {
        self.codes.iter().copied().eq(other.chars().map(|c| c.as_code()))
    }
}

impl PartialEq<&str> for FixString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl From<&str> for FixString {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

impl From<Vec<Code>> for FixString {
    fn from(codes: Vec<Code>) -> Self {
        Self::from_boxed(codes.into_boxed_slice())
    }
}

impl TryFrom<DynString> for FixString {
    type Error = StringError;

    fn try_from(string: DynString) -> Result<Self, StringError> {
        string.freeze()
    }
}

impl FromIterator<Code> for FixString {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self::from_boxed(iter.into_iter().collect())
    }
}

impl FromIterator<char> for FixString {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_boxed(iter.into_iter().map(|c| c.as_code()).collect())
    }
}
