//! Deque and stack vocabulary over [`GrowableString`].
//!
//! Nothing here adds behaviour: each method forwards to the primitive it is named after
//! below. Both traits are blanket-implemented for every `GrowableString`, including
//! `dyn GrowableString`.
//!
//! | Deque | Stack | Primitive |
//! |-------|-------|-----------|
//! | `push_front` | | `prepend` |
//! | `push_back` | `push` | `append` |
//! | `pop_front` | | `drop_first` |
//! | `pop_back` | `pop` | `drop_last` |
//! | `front` | | `first_code` |
//! | `back` | `top` | `last_code` |
//!
//! The `pop_*` methods hand back the code they dropped, or `None` on an empty string.

use crate::code::{AsCode, Code};
use crate::error::Result;
use crate::strings::any_string::GrowableString;

/// Double-ended queue view of a growable string.
pub trait StringDeque: GrowableString {
    fn push_front(&mut self, code: Code) -> Result<()> {
        self.prepend(code)
    }

    fn push_back(&mut self, code: Code) -> Result<()> {
        self.append(code)
    }

    fn push_front_value(&mut self, value: &dyn AsCode) -> Result<()> {
        self.prepend_value(value)
    }

    fn push_back_value(&mut self, value: &dyn AsCode) -> Result<()> {
        self.append_value(value)
    }

    fn pop_front(&mut self) -> Option<Code> {
        let code = self.first_code()?;
        self.drop_first();
        Some(code)
    }

    fn pop_back(&mut self) -> Option<Code> {
        let code = self.last_code()?;
        self.drop_last();
        Some(code)
    }

    fn front(&self) -> Option<Code> {
        self.first_code()
    }

    fn back(&self) -> Option<Code> {
        self.last_code()
    }
}

impl<S: GrowableString + ?Sized> StringDeque for S {}

/// Stack view of a growable string; the top is the last code.
pub trait StringStack: GrowableString {
    fn push(&mut self, code: Code) -> Result<()> {
        self.append(code)
    }

    fn push_value(&mut self, value: &dyn AsCode) -> Result<()> {
        self.append_value(value)
    }

    fn pop(&mut self) -> Option<Code> {
        let code = self.last_code()?;
        self.drop_last();
        Some(code)
    }

    fn top(&self) -> Option<Code> {
        self.last_code()
    }
}

impl<S: GrowableString + ?Sized> StringStack for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynString;

    #[test]
    fn test_facade_deque_ops_basic() {
        let mut d = DynString::new();
        d.push_back(2).unwrap();
        d.push_back(3).unwrap();
        d.push_front(1).unwrap();
        assert_eq!(d.len(), 3);
        assert_eq!(d.front(), Some(1));
        assert_eq!(d.back(), Some(3));
        assert_eq!(d.pop_front(), Some(1));
        assert_eq!(d.pop_back(), Some(3));
        assert_eq!(d.as_codes(), &[2]);
    }

    #[test]
    fn test_facade_deque_pop_empty() {
        let mut d = DynString::new();
        assert_eq!(d.pop_front(), None);
        assert_eq!(d.pop_back(), None);
        assert_eq!(d.front(), None);
        assert_eq!(d.back(), None);
    }

    #[test]
    fn test_facade_deque_values_and_dyn_dispatch() {
        let mut d = DynString::new();
        let any: &mut dyn GrowableString = &mut d;
        any.push_back_value(&'b').unwrap();
        any.push_front_value(&'a').unwrap();
        assert_eq!(any.front(), Some('a' as Code));
        assert_eq!(any.back(), Some('b' as Code));
        assert_eq!(any.pop_front(), Some('a' as Code));
        assert_eq!(d, "b");
    }

    #[test]
    fn test_facade_stack_ops() {
        let mut s = DynString::from("ab");
        s.push('c' as Code).unwrap();
        s.push_value(&'d').unwrap();
        assert_eq!(s.top(), Some('d' as Code));
        assert_eq!(s.pop(), Some('d' as Code));
        assert_eq!(s.pop(), Some('c' as Code));
        assert_eq!(s, "ab");
        s.pop();
        s.pop();
        assert_eq!(s.pop(), None);
        assert_eq!(s.top(), None);
    }

    #[test]
    fn test_facade_deque_wraps_front_growth() {
        let mut d = DynString::new();
        for i in 0..3000u32 {
            d.push_front(i).unwrap();
            d.push_back(i).unwrap();
        }
        assert_eq!(d.len(), 6000);
        for i in (0..3000u32).rev() {
            assert_eq!(d.pop_front(), Some(i));
            assert_eq!(d.pop_back(), Some(i));
        }
        assert!(d.is_empty());
    }
}
