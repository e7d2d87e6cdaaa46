//! Growable string with slack at both ends.
//!
//! Provides [`DynString`]: a single allocation of `capacity` code slots holding `len` live
//! codes that start `offset` slots in. Unused slots before the view (front slack) make
//! `prepend` O(1); unused slots after it (back slack) make `append` O(1). When the needed
//! side runs out, the allocation grows by the golden-ratio policy in [`crate::growth`] and,
//! for front growth, the live codes are moved so that the new slack sits in front of them.
//!
//! Once a string no longer needs to grow, [`DynString::freeze`] trims it to an exact-size
//! [`FixString`].

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Deref, DerefMut, Index, RangeBounds};

use crate::code::{AsCode, Code, code_to_char};
use crate::error::{Result, StringError};
use crate::growth::{self, Side};
use crate::strings::any_string::{AnyString, GrowableString};
use crate::strings::fix_string::FixString;
use crate::utils::range::{Slice, normalize_index};

/// Largest capacity a `Vec<Code>` can describe.
const MAX_CAPACITY: usize = isize::MAX as usize / core::mem::size_of::<Code>();

/// A string of raw codes that grows at either end.
///
/// # Layout
/// ```text
///  0          offset            offset+len        capacity
///  | front slack |  live codes     |  back slack    |
/// ```
///
/// # Invariants
/// Checked by [`check_invariant`](DynString::check_invariant) after every mutation in debug
/// builds:
/// 1. `capacity >= len`
/// 2. `offset <= capacity - len`
/// 3. `capacity == 0` implies no heap block is held.
///
/// # Growth
/// | Operation | Grows when | By |
/// |-----------|------------|----|
/// | `append`, `insert_*` | back slack `< n` | `extra_needed(capacity, n)` at the back |
/// | `prepend` | front slack `< n` | `extra_needed(capacity, n)` at the front |
///
/// Every growth is at least [`MIN_ENLARGE`](crate::growth::MIN_ENLARGE) slots.
#[derive(Clone, Default)]
pub struct DynString {
    slots: Vec<Code>,
    offset: usize,
    len: usize,
}

impl DynString {
    /// Creates an empty string without allocating.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            offset: 0,
            len: 0,
        }
    }

    /// Creates an empty string with `capacity` slots of back slack.
    ///
    /// # Panics
    /// Aborts on allocation failure, like `Vec::with_capacity`. Use
    /// [`try_with_capacity`](DynString::try_with_capacity) to handle it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            offset: 0,
            len: 0,
        }
    }

    /// Fallible counterpart of [`with_capacity`](DynString::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(StringError::CapacityOverflow);
        }
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| StringError::out_of_memory(capacity, e))?;
        slots.resize(capacity, 0);
        let string = Self {
            slots,
            offset: 0,
            len: 0,
        };
        string.debug_check();
        Ok(string)
    }

    /// Creates a string holding a copy of `codes`, with no slack.
    pub fn from_codes(codes: &[Code]) -> Self {
        Self {
            slots: codes.to_vec(),
            offset: 0,
            len: codes.len(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Index of the first live code inside the allocation.
    #[inline(always)]
    pub fn view_offset(&self) -> usize {
        self.offset
    }

    /// Free slots before the first code.
    #[inline(always)]
    pub fn front_slack(&self) -> usize {
        self.offset
    }

    /// Free slots after the last code.
    #[inline(always)]
    pub fn back_slack(&self) -> usize {
        self.capacity() - self.offset - self.len
    }

    #[inline(always)]
    pub fn as_codes(&self) -> &[Code] {
        &self.slots[self.offset..self.offset + self.len]
    }

    #[inline(always)]
    pub fn as_mut_codes(&mut self) -> &mut [Code] {
        &mut self.slots[self.offset..self.offset + self.len]
    }

    /// Asserts the layout invariants.
    ///
    /// # Panics
    /// On any violation. A failure here is a defect in this type, never a caller error.
    pub fn check_invariant(&self) {
        let capacity = self.capacity();
        assert!(
            capacity >= self.len,
            "dynamic string has capacity {capacity} < size {}",
            self.len
        );
        assert!(
            self.offset <= capacity - self.len,
            "dynamic string view offset {} exceeds slack {}",
            self.offset,
            capacity - self.len
        );
        assert!(
            capacity != 0 || self.slots.capacity() == 0,
            "empty dynamic string still holds an allocation"
        );
    }

    #[inline(always)]
    fn debug_check(&self) {
        #[cfg(debug_assertions)]
        self.check_invariant();
    }
}

// ─── storage management ───────────────────────────────────────────────────────

impl DynString {
    /// Grows the allocation by `|amount|` slots, at the front when `amount < 0`.
    ///
    /// Requests below [`MIN_ENLARGE`](crate::growth::MIN_ENLARGE) are rounded up. Front
    /// growth moves the live codes so the new slack sits before them; back growth leaves
    /// the view in place.
    ///
    /// # Errors
    /// * [`StringError::ZeroGrowth`] for `amount == 0`.
    /// * [`StringError::CapacityOverflow`] when the new capacity is not addressable.
    /// * [`StringError::OutOfMemory`] when the allocator refuses; the string is unchanged.
    pub fn enlarge(&mut self, amount: isize) -> Result<()> {
        let (side, extra) = growth::resolve_request(amount)?;
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_add(extra)
            .filter(|&c| c <= MAX_CAPACITY)
            .ok_or(StringError::CapacityOverflow)?;

        self.slots
            .try_reserve_exact(extra)
            .map_err(|e| StringError::out_of_memory(extra, e))?;
        self.slots.resize(new_capacity, 0);

        if side == Side::Front {
            let live = self.offset..self.offset + self.len;
            self.slots.copy_within(live, self.offset + extra);
            self.offset += extra;
        }

        tracing::trace!(
            front = side == Side::Front,
            amount = extra,
            old_capacity,
            new_capacity,
            "dynamic string enlarged"
        );
        self.debug_check();
        Ok(())
    }

    /// Grows the allocation relative to its capacity.
    ///
    /// `factor > 1` adds `capacity * (factor - 1)` slots at the back, `factor < -1` adds
    /// `capacity * (|factor| - 1)` at the front.
    ///
    /// # Errors
    /// [`StringError::InvalidGrowthFactor`] when `|factor| <= 1`, otherwise as
    /// [`enlarge`](DynString::enlarge).
    pub fn enlarge_by_factor(&mut self, factor: f64) -> Result<()> {
        let amount = growth::factor_request(self.capacity(), factor)?;
        self.enlarge(amount)
    }

    /// Ensures at least `additional` slots of back slack.
    pub fn reserve_back(&mut self, additional: usize) -> Result<()> {
        if self.back_slack() < additional {
            self.grow(Side::Back, additional)?;
        }
        Ok(())
    }

    /// Ensures at least `additional` slots of front slack.
    pub fn reserve_front(&mut self, additional: usize) -> Result<()> {
        if self.front_slack() < additional {
            self.grow(Side::Front, additional)?;
        }
        Ok(())
    }

    #[inline(never)]
    fn grow(&mut self, side: Side, min_increment: usize) -> Result<()> {
        let extra = growth::extra_needed(self.capacity(), min_increment)? as isize;
        match side {
            Side::Front => self.enlarge(-extra),
            Side::Back => self.enlarge(extra),
        }
    }
}

// ─── mutation ─────────────────────────────────────────────────────────────────

impl DynString {
    #[inline(always)]
    pub fn append(&mut self, code: Code) -> Result<()> {
        if self.back_slack() == 0 {
            self.grow(Side::Back, 1)?;
        }
        self.slots[self.offset + self.len] = code;
        self.len += 1;
        self.debug_check();
        Ok(())
    }

    #[inline(always)]
    pub fn prepend(&mut self, code: Code) -> Result<()> {
        if self.offset == 0 {
            self.grow(Side::Front, 1)?;
        }
        self.offset -= 1;
        self.slots[self.offset] = code;
        self.len += 1;
        self.debug_check();
        Ok(())
    }

    pub fn append_value<C: AsCode>(&mut self, value: C) -> Result<()> {
        self.append(value.as_code())
    }

    pub fn prepend_value<C: AsCode>(&mut self, value: C) -> Result<()> {
        self.prepend(value.as_code())
    }

    pub fn append_codes(&mut self, codes: &[Code]) -> Result<()> {
        let n = codes.len();
        if n == 0 {
            return Ok(());
        }
        self.reserve_back(n)?;
        let end = self.offset + self.len;
        self.slots[end..end + n].copy_from_slice(codes);
        self.len += n;
        self.debug_check();
        Ok(())
    }

    pub fn prepend_codes(&mut self, codes: &[Code]) -> Result<()> {
        let n = codes.len();
        if n == 0 {
            return Ok(());
        }
        self.reserve_front(n)?;
        self.offset -= n;
        self.slots[self.offset..self.offset + n].copy_from_slice(codes);
        self.len += n;
        self.debug_check();
        Ok(())
    }

    /// Appends every code of `other`.
    ///
    /// To append a string to itself, clone it first.
    pub fn append_str<S: AnyString + ?Sized>(&mut self, other: &S) -> Result<()> {
        self.append_codes(other.as_codes())
    }

    pub fn prepend_str<S: AnyString + ?Sized>(&mut self, other: &S) -> Result<()> {
        self.prepend_codes(other.as_codes())
    }

    /// Inserts `codes` at `index`, shifting the codes from `index` on towards the back.
    ///
    /// # Errors
    /// [`StringError::IndexOutOfRange`] unless the normalized index is in `[0, len]`.
    pub fn insert_codes_at(&mut self, index: isize, codes: &[Code]) -> Result<()> {
        let i = normalize_index(index, self.len)?;
        let n = codes.len();
        if n == 0 {
            return Ok(());
        }
        self.reserve_back(n)?;
        let at = self.offset + i;
        let end = self.offset + self.len;
        self.slots.copy_within(at..end, at + n);
        self.slots[at..at + n].copy_from_slice(codes);
        self.len += n;
        self.debug_check();
        Ok(())
    }

    pub fn insert_at(&mut self, index: isize, code: Code) -> Result<()> {
        self.insert_codes_at(index, &[code])
    }

    pub fn insert_value_at<C: AsCode>(&mut self, index: isize, value: C) -> Result<()> {
        self.insert_at(index, value.as_code())
    }

    pub fn insert_str_at<S: AnyString + ?Sized>(&mut self, index: isize, other: &S) -> Result<()> {
        self.insert_codes_at(index, other.as_codes())
    }

    /// Removes and returns the code at `index`.
    ///
    /// # Errors
    /// [`StringError::IndexOutOfRange`] unless the normalized index is in `[0, len)`.
    pub fn remove_at(&mut self, index: isize) -> Result<Code> {
        let i = normalize_index(index, self.len)?;
        if i == self.len {
            return Err(StringError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        let at = self.offset + i;
        let code = self.slots[at];
        self.slots.copy_within(at + 1..self.offset + self.len, at);
        self.len -= 1;
        self.debug_check();
        Ok(code)
    }

    /// Removes a contiguous selection.
    ///
    /// # Errors
    /// [`StringError::RangeOutOfBounds`] when the slice does not fit and
    /// [`StringError::UnsupportedStride`] when its stride is not 1.
    pub fn remove_slice(&mut self, slice: Slice) -> Result<()> {
        slice.check_removable(self.len)?;
        if slice.count == 0 {
            return Ok(());
        }
        let tail = self.offset + slice.end()..self.offset + self.len;
        self.slots.copy_within(tail, self.offset + slice.start);
        self.len -= slice.count;
        self.debug_check();
        Ok(())
    }

    /// Removes the codes selected by a signed range, e.g. `1..3`, `-2..` or `..=-1`.
    pub fn remove_range<R: RangeBounds<isize>>(&mut self, range: R) -> Result<()> {
        let slice = Slice::from_range(range, self.len)?;
        self.remove_slice(slice)
    }

    /// Empties the string. The allocation is kept and all of it becomes back slack.
    pub fn clear(&mut self) {
        self.len = 0;
        self.offset = 0;
        self.debug_check();
    }

    #[inline(always)]
    pub fn drop_first(&mut self) {
        if self.len > 0 {
            self.offset += 1;
            self.len -= 1;
        }
        self.debug_check();
    }

    #[inline(always)]
    pub fn drop_last(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
        self.debug_check();
    }

    /// Forgets `|n|` codes without moving data: from the front when `n < 0`, from the
    /// back otherwise. The count is clamped to `len`.
    pub fn drop(&mut self, n: isize) {
        let count = n.unsigned_abs().min(self.len);
        self.len -= count;
        if n < 0 {
            self.offset += count;
        }
        self.debug_check();
    }
}

// ─── representation change ────────────────────────────────────────────────────

impl DynString {
    /// Moves the codes to the start of the allocation and trims it to exactly `len`.
    ///
    /// # Errors
    /// [`StringError::OutOfMemory`] if the trimmed block cannot be allocated; the string
    /// is unchanged.
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        if self.offset == 0 && self.len == self.slots.len() && self.len == self.slots.capacity() {
            return Ok(());
        }
        let mut exact = Vec::new();
        exact
            .try_reserve_exact(self.len)
            .map_err(|e| StringError::out_of_memory(self.len, e))?;
        exact.extend_from_slice(self.as_codes());
        self.slots = exact;
        self.offset = 0;
        self.debug_check();
        Ok(())
    }

    /// Converts into the exact-capacity [`FixString`].
    ///
    /// Afterwards `capacity == len` and there is no slack. The growable value is consumed.
    ///
    /// # Errors
    /// [`StringError::OutOfMemory`] if trimming fails. The string is dropped in that case;
    /// call [`shrink_to_fit`](DynString::shrink_to_fit) first to keep it on failure.
    pub fn freeze(mut self) -> Result<FixString> {
        let capacity = self.capacity();
        self.shrink_to_fit()?;
        tracing::trace!(len = self.len, capacity, "dynamic string frozen");
        Ok(FixString::from_boxed(self.slots.into_boxed_slice()))
    }

    /// Wraps `slots` as a string with no slack, releasing any spare vector capacity.
    pub(crate) fn from_exact(mut slots: Vec<Code>) -> Self {
        slots.shrink_to_fit();
        let len = slots.len();
        let string = Self {
            slots,
            offset: 0,
            len,
        };
        string.debug_check();
        string
    }
}

// ─── trait implementations ────────────────────────────────────────────────────

impl AnyString for DynString {
    fn as_codes(&self) -> &[Code] {
        self.as_codes()
    }
    fn len(&self) -> usize {
        self.len
    }
    fn capacity(&self) -> usize {
        self.capacity()
    }
}

impl GrowableString for DynString {
    fn append(&mut self, code: Code) -> Result<()> {
        self.append(code)
    }
    fn prepend(&mut self, code: Code) -> Result<()> {
        self.prepend(code)
    }
    fn append_codes(&mut self, codes: &[Code]) -> Result<()> {
        self.append_codes(codes)
    }
    fn prepend_codes(&mut self, codes: &[Code]) -> Result<()> {
        self.prepend_codes(codes)
    }
    fn insert_codes_at(&mut self, index: isize, codes: &[Code]) -> Result<()> {
        self.insert_codes_at(index, codes)
    }
    fn remove_at(&mut self, index: isize) -> Result<Code> {
        self.remove_at(index)
    }
    fn remove_slice(&mut self, slice: Slice) -> Result<()> {
        self.remove_slice(slice)
    }
    fn clear(&mut self) {
        self.clear();
    }
    fn drop_first(&mut self) {
        self.drop_first();
    }
    fn drop_last(&mut self) {
        self.drop_last();
    }
    fn drop(&mut self, n: isize) {
        DynString::drop(self, n);
    }
}

impl fmt::Debug for DynString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_codes()).finish()
    }
}

impl fmt::Display for DynString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        self.as_codes()
            .iter()
            .try_for_each(|&code| f.write_char(code_to_char(code)))
    }
}

impl fmt::Write for DynString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.reserve_back(s.len()).map_err(|_| fmt::Error)?;
        s.chars()
            .try_for_each(|c| self.append(c.as_code()))
            .map_err(|_| fmt::Error)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.append(c.as_code()).map_err(|_| fmt::Error)
    }
}

impl Deref for DynString {
    type Target = [Code];

    #[inline(always)]
    fn deref(&self) -> &[Code] {
        self.as_codes()
    }
}

impl DerefMut for DynString {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [Code] {
        self.as_mut_codes()
    }
}

impl Index<usize> for DynString {
    type Output = Code;

    fn index(&self, index: usize) -> &Code {
        &self.as_codes()[index]
    }
}

impl AsRef<[Code]> for DynString {
    fn as_ref(&self) -> &[Code] {
        self.as_codes()
    }
}

impl PartialEq for DynString {
    fn eq(&self, other: &Self) -> bool {
        self.as_codes() == other.as_codes()
    }
}

impl Eq for DynString {}

impl PartialEq<FixString> for DynString {
    fn eq(&self, other: &FixString) -> bool {
        self.as_codes() == other.as_codes()
    }
}

impl PartialEq<str> for DynString {
    fn eq(&self, other: &str) -> bool {
        self.as_codes().iter().copied().eq(other.chars().map(|c| c.as_code()))
    }
}

impl PartialEq<&str> for DynString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<DynString> for &str {
    fn eq(&self, other: &DynString) -> bool {
        *other == **self
    }
}

impl PartialOrd for DynString {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DynString {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_codes().cmp(other.as_codes())
    }
}

impl Hash for DynString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_codes().hash(state);
    }
}

impl From<&str> for DynString {
    fn from(s: &str) -> Self {
        Self::from_iter(s.chars())
    }
}

impl From<Vec<Code>> for DynString {
    fn from(codes: Vec<Code>) -> Self {
        Self::from_exact(codes)
    }
}

impl From<&[Code]> for DynString {
    fn from(codes: &[Code]) -> Self {
        Self::from_codes(codes)
    }
}

impl From<FixString> for DynString {
    fn from(fixed: FixString) -> Self {
        fixed.thaw()
    }
}

#[cold]
#[track_caller]
fn extend_failed(err: StringError) -> ! {
    panic!("{err}")
}

/// # Panics
/// On allocation failure, like `Vec::extend`.
impl Extend<Code> for DynString {
    #[track_caller]
    fn extend<I: IntoIterator<Item = Code>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        if let Err(err) = self.reserve_back(iter.size_hint().0) {
            extend_failed(err);
        }
        for code in iter {
            if let Err(err) = self.append(code) {
                extend_failed(err);
            }
        }
    }
}

impl Extend<char> for DynString {
    #[track_caller]
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|c| c.as_code()));
    }
}

impl FromIterator<Code> for DynString {
    fn from_iter<I: IntoIterator<Item = Code>>(iter: I) -> Self {
        Self::from_exact(iter.into_iter().collect())
    }
}

impl FromIterator<char> for DynString {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_exact(iter.into_iter().map(|c| c.as_code()).collect())
    }
}
