//! # Elastic String
//!
//! Growable strings of raw 32-bit codes with amortized O(1) insertion at **both** ends.
//!
//! [`DynString`] keeps its codes in one allocation with free slots on either side of the
//! live view. `append` consumes back slack, `prepend` consumes front slack, and when a side
//! runs out the allocation grows by the golden ratio (never by less than
//! [`growth::MIN_ENLARGE`] slots). When a string is done growing, [`DynString::freeze`]
//! trims it into a [`FixString`] whose capacity equals its length.
//!
//! ## Key Features
//!
//! * **Two-sided slack:** `prepend`, `drop_first` and `drop(-n)` never shift data unless the
//!   front slack is exhausted.
//! * **Atomic failure:** every operation that may allocate returns a [`Result`]; an `Err`
//!   leaves the string exactly as it was.
//! * **Capability traits:** [`AnyString`] (read-only, implemented by both representations)
//!   and [`GrowableString`] (in-place mutation), both object-safe. Plain code slices go
//!   through the `*_codes` operations.
//! * **Slice access:** both representations deref to `[Code]`.
//! * **Deque and stack vocabulary:** [`StringDeque`] and [`StringStack`] rename the
//!   primitives for queue-style callers.
//!
//! ## Positions
//!
//! Insertion and removal positions are signed. Negative values count from the end, so
//! `remove_at(-1)` removes the last code and `insert_at(-1, c)` inserts before it.
//!
//! ## Examples
//!
//! ```rust
//! use elastic_string::{AnyString, DynString};
//!
//! let mut s = DynString::new();
//! s.append_value('a')?;
//! s.append_value('b')?;
//! s.prepend_value('z')?;
//! assert_eq!(s, "zab");
//!
//! s.insert_str_at(3, &DynString::from("cd"))?;
//! s.remove_at(0)?;
//! assert_eq!(s.to_string_lossy(), "abcd");
//!
//! let fixed = s.freeze()?;
//! assert_eq!(fixed.capacity(), fixed.len());
//! # Ok::<(), elastic_string::StringError>(())
//! ```
//!
//! ### Deque vocabulary
//!
//! ```rust
//! use elastic_string::{DynString, StringDeque};
//!
//! let mut d = DynString::new();
//! d.push_back(2)?;
//! d.push_front(1)?;
//! assert_eq!(d.pop_front(), Some(1));
//! assert_eq!(d.back(), Some(2));
//! # Ok::<(), elastic_string::StringError>(())
//! ```
//!
//! ## Features
//!
//! * `serde`: `Serialize`/`Deserialize` for both representations as a sequence of `u32`.

// --- Module Declarations ---

pub mod code;
pub mod error;
pub mod growth;
#[cfg(feature = "serde")]
mod serde;
pub mod strings;
pub mod utils;

// --- Re-exports ---

pub use code::{AsCode, Code};
pub use error::{Result, StringError};
pub use strings::any_string::{AnyString, GrowableString};
pub use strings::dyn_string::DynString;
pub use strings::facade::{StringDeque, StringStack};
pub use strings::fix_string::FixString;
pub use utils::range::Slice;
