//! Error type shared by every fallible string operation.
//!
//! Two classes of failure exist:
//!
//! * [`StringError::OutOfMemory`] is a runtime condition reported by the allocator.
//! * Every other variant is a contract violation: the caller passed an index, range,
//!   stride or growth request that the operation does not accept.
//!
//! Operations are atomic. When one of them returns `Err`, the string is left exactly as
//! it was before the call.

use std::collections::TryReserveError;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, StringError>;

/// Failure reported by a [`DynString`](crate::DynString) operation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum StringError {
    /// The allocator could not provide `requested` additional code slots.
    #[error("out of memory while reserving {requested} code slots")]
    OutOfMemory { requested: usize },

    /// The requested capacity does not fit the address space.
    #[error("string capacity overflow")]
    CapacityOverflow,

    /// `enlarge(0)` was requested.
    #[error("invalid growing size: 0")]
    ZeroGrowth,

    /// A relative growth factor with magnitude `<= 1` (or NaN) was requested.
    #[error("invalid growing factor {factor}")]
    InvalidGrowthFactor { factor: f64 },

    /// A position outside `[0, len]` (or `[0, len)` for removal).
    #[error("index {index} out of range for string of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// A range whose bounds do not fall inside the string.
    #[error("range {start}..{end} out of range for string of length {len}")]
    RangeOutOfBounds { start: isize, end: isize, len: usize },

    /// Removal through a slice whose stride is not 1.
    #[error("slice stride {stride} is not supported, removal requires stride 1")]
    UnsupportedStride { stride: isize },
}

impl StringError {
    /// Returns `true` for programming errors, `false` for allocator failures.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, StringError::OutOfMemory { .. })
    }

    pub(crate) fn out_of_memory(requested: usize, source: TryReserveError) -> Self {
        tracing::debug!(requested, error = %source, "code slot reservation failed");
        StringError::OutOfMemory { requested }
    }
}
