//! Element codes and the coercion used by the generic insertion overloads.

/// A single stored element: a raw 32-bit code with no encoding attached.
pub type Code = u32;

/// Conversion of a value into the [`Code`] stored for it.
///
/// The `*_value` operations of [`GrowableString`](crate::GrowableString) accept any
/// `AsCode` and store exactly what `as_code` returns.
pub trait AsCode {
    fn as_code(&self) -> Code;
}

impl AsCode for char {
    #[inline(always)]
    fn as_code(&self) -> Code {
        *self as Code
    }
}

impl AsCode for u8 {
    #[inline(always)]
    fn as_code(&self) -> Code {
        Code::from(*self)
    }
}

impl AsCode for u16 {
    #[inline(always)]
    fn as_code(&self) -> Code {
        Code::from(*self)
    }
}

impl AsCode for u32 {
    #[inline(always)]
    fn as_code(&self) -> Code {
        *self
    }
}

impl<C: AsCode + ?Sized> AsCode for &C {
    #[inline(always)]
    fn as_code(&self) -> Code {
        (**self).as_code()
    }
}

/// Renders a code as a `char`, substituting U+FFFD for values that are not scalar values.
#[inline]
pub fn code_to_char(code: Code) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
