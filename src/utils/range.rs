//! Index and range normalization.
//!
//! Positions passed to the string operations are signed: a negative value counts from the
//! end, so `-1` names the last code and `-(len as isize)` the first. Normalized positions
//! always fall in `[0, len]`.

use core::ops::{Bound, RangeBounds};

use crate::error::{Result, StringError};

/// Resolves a signed position against `len`.
///
/// # Errors
/// [`StringError::IndexOutOfRange`] if the resolved position is outside `[0, len]`.
#[inline]
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    match resolved {
        Some(i) if i <= len => Ok(i),
        _ => Err(StringError::IndexOutOfRange { index, len }),
    }
}

/// A normalized `(start, count, stride)` selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    pub start: usize,
    pub count: usize,
    pub stride: isize,
}

impl Slice {
    pub fn new(start: usize, count: usize, stride: isize) -> Self {
        Self { start, count, stride }
    }

    /// A stride-1 selection of `count` codes starting at `start`.
    pub fn contiguous(start: usize, count: usize) -> Self {
        Self::new(start, count, 1)
    }

    /// Normalizes a signed range against `len` into a contiguous slice.
    ///
    /// Both bounds accept negative positions. `..=-1` therefore selects everything up to
    /// and including the last code.
    ///
    /// # Errors
    /// [`StringError::RangeOutOfBounds`] when either bound falls outside the string or the
    /// start lies after the end.
    pub fn from_range<R: RangeBounds<isize>>(range: R, len: usize) -> Result<Self> {
        let start = match range.start_bound() {
            Bound::Included(&s) => normalize_index(s, len).ok(),
            Bound::Excluded(&s) => normalize_index(s, len).ok().map(|i| i + 1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => normalize_index(e, len).ok().map(|i| i + 1),
            Bound::Excluded(&e) => normalize_index(e, len).ok(),
            Bound::Unbounded => Some(len),
        };
        match (start, end) {
            (Some(s), Some(e)) if s <= e && e <= len => Ok(Self::contiguous(s, e - s)),
            _ => Err(StringError::RangeOutOfBounds {
                start: bound_value(range.start_bound(), 0),
                end: bound_value(range.end_bound(), len as isize),
                len,
            }),
        }
    }

    /// One past the last selected position, for stride-1 slices.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    /// Checks that the slice can be removed from a string of length `len`.
    ///
    /// # Errors
    /// [`StringError::RangeOutOfBounds`] when the slice does not fit, and
    /// [`StringError::UnsupportedStride`] when `stride != 1`.
    pub fn check_removable(&self, len: usize) -> Result<()> {
        match self.start.checked_add(self.count) {
            Some(end) if end <= len => {}
            _ => {
                return Err(StringError::RangeOutOfBounds {
                    start: self.start as isize,
                    end: self.start.saturating_add(self.count) as isize,
                    len,
                });
            }
        }
        if self.stride != 1 {
            return Err(StringError::UnsupportedStride { stride: self.stride });
        }
        Ok(())
    }
}

fn bound_value(bound: Bound<&isize>, unbounded: isize) -> isize {
    match bound {
        Bound::Included(&v) | Bound::Excluded(&v) => v,
        Bound::Unbounded => unbounded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_normalize_index() {
        assert_eq!(normalize_index(0, 5), Ok(0));
        assert_eq!(normalize_index(5, 5), Ok(5));
        assert_eq!(normalize_index(-1, 5), Ok(4));
        assert_eq!(normalize_index(-5, 5), Ok(0));
        assert_eq!(
            normalize_index(6, 5),
            Err(StringError::IndexOutOfRange { index: 6, len: 5 })
        );
        assert_eq!(
            normalize_index(-6, 5),
            Err(StringError::IndexOutOfRange { index: -6, len: 5 })
        );
        assert_eq!(normalize_index(0, 0), Ok(0));
        assert!(normalize_index(isize::MIN, 3).is_err());
    }

    #[test]
    fn test_range_from_bounds() {
        assert_eq!(Slice::from_range(1..3, 5), Ok(Slice::contiguous(1, 2)));
        assert_eq!(Slice::from_range(.., 5), Ok(Slice::contiguous(0, 5)));
        assert_eq!(Slice::from_range(2.., 5), Ok(Slice::contiguous(2, 3)));
        assert_eq!(Slice::from_range(..=-1, 5), Ok(Slice::contiguous(0, 5)));
        assert_eq!(Slice::from_range(-2.., 5), Ok(Slice::contiguous(3, 2)));
        assert_eq!(Slice::from_range(3..3, 5), Ok(Slice::contiguous(3, 0)));
        assert_eq!(
            Slice::from_range((Bound::Excluded(0), Bound::Included(1)), 5),
            Ok(Slice::contiguous(1, 1))
        );
    }

    #[test]
    fn test_range_from_bounds_rejects() {
        assert_eq!(
            Slice::from_range(3..1, 5),
            Err(StringError::RangeOutOfBounds { start: 3, end: 1, len: 5 })
        );
        assert_eq!(
            Slice::from_range(0..=5, 5),
            Err(StringError::RangeOutOfBounds { start: 0, end: 5, len: 5 })
        );
        assert_eq!(
            Slice::from_range(..9, 5),
            Err(StringError::RangeOutOfBounds { start: 0, end: 9, len: 5 })
        );
    }

    #[test]
    fn test_range_slice_removable() {
        assert_eq!(Slice::contiguous(1, 3).check_removable(4), Ok(()));
        assert_eq!(Slice::contiguous(4, 0).check_removable(4), Ok(()));
        assert_eq!(
            Slice::contiguous(2, 3).check_removable(4),
            Err(StringError::RangeOutOfBounds { start: 2, end: 5, len: 4 })
        );
        assert_eq!(
            Slice::new(0, 2, 2).check_removable(4),
            Err(StringError::UnsupportedStride { stride: 2 })
        );
        assert!(Slice::contiguous(usize::MAX, 2).check_removable(4).is_err());
    }
}
