//! Convenient re-exports of commonly used types.
//!
//! The prelude can be imported with:
//! ```
//! use shared_bitset::prelude::*;
//! ```

pub use crate::bitset::{BitSet, MAX_CAPACITY_BITS};
pub use crate::error::{BitSetError, Result};
