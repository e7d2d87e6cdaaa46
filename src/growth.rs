//! Capacity growth policy.
//!
//! Growth is geometric with the golden ratio as multiplier. Compared to doubling it wastes
//! less memory per reallocation while keeping `append`/`prepend` amortized O(1).
//!
//! Two entry points exist:
//!
//! * [`extra_needed`] computes how many slots to book when a mutation needs
//!   `min_increment` more than the current slack provides.
//! * [`resolve_request`] turns a signed "enlarge by N, front if negative" request into a
//!   concrete [`Side`] and slot count, applying the [`MIN_ENLARGE`] floor.

use crate::error::{Result, StringError};

/// Geometric growth multiplier (golden ratio).
pub const GROWTH_RATE: f64 = 1.618034;

const _: () = assert!(GROWTH_RATE >= 1.5, "string growth rate is too small");

/// Smallest enlargement ever performed, in code slots.
pub const MIN_ENLARGE: usize = 1024;

/// Where newly booked slack is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

/// Returns the number of slots to add to `capacity` so that strictly more than
/// `min_increment` slots become available.
///
/// The multiplier starts at [`GROWTH_RATE`] and is raised by [`GROWTH_RATE`] until
/// `capacity * (factor - 1)` exceeds `min_increment`. An empty allocation grows as if its
/// capacity were 1.
///
/// # Errors
/// [`StringError::CapacityOverflow`] when the result does not fit in `isize`.
pub fn extra_needed(capacity: usize, min_increment: usize) -> Result<usize> {
    let base = capacity.max(1) as f64;
    let mut factor = GROWTH_RATE;
    loop {
        let extra = base * (factor - 1.0);
        if !extra.is_finite() || extra >= isize::MAX as f64 {
            return Err(StringError::CapacityOverflow);
        }
        let extra = extra as usize;
        if extra > min_increment {
            return Ok(extra);
        }
        factor *= GROWTH_RATE;
    }
}

/// Splits a signed enlargement into its side and floored magnitude.
///
/// # Errors
/// [`StringError::ZeroGrowth`] for `amount == 0`.
pub fn resolve_request(amount: isize) -> Result<(Side, usize)> {
    if amount == 0 {
        return Err(StringError::ZeroGrowth);
    }
    let side = if amount < 0 { Side::Front } else { Side::Back };
    Ok((side, amount.unsigned_abs().max(MIN_ENLARGE)))
}

/// Converts a relative growth factor into a signed absolute request.
///
/// `factor > 1` grows the back by `capacity * (factor - 1)`; `factor < -1` grows the front
/// by `capacity * (|factor| - 1)`. When the product truncates to zero the request falls
/// back to the [`MIN_ENLARGE`] floor on the same side.
///
/// # Errors
/// [`StringError::InvalidGrowthFactor`] when `|factor| <= 1` or `factor` is NaN, and
/// [`StringError::CapacityOverflow`] when the product does not fit in `isize`.
pub fn factor_request(capacity: usize, factor: f64) -> Result<isize> {
    if factor.is_nan() || (-1.0..=1.0).contains(&factor) {
        return Err(StringError::InvalidGrowthFactor { factor });
    }
    let amount = capacity as f64 * (factor.abs() - 1.0);
    if !amount.is_finite() || amount >= isize::MAX as f64 {
        return Err(StringError::CapacityOverflow);
    }
    let amount = (amount as isize).max(1);
    Ok(if factor < 0.0 { -amount } else { amount })
}
