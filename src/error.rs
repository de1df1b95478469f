// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types

use std::fmt;

/// Bit-set error type
///
/// Out-of-range offsets are not errors: `set`, `clear` and `contains` report
/// them as `false`, and neighbor searches report "not found" as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSetError {
    /// Requested capacity (after rounding up to whole bytes) is above
    /// [`MAX_CAPACITY_BITS`](crate::MAX_CAPACITY_BITS)
    CapacityExceeded {
        requested: u64,
        max: u64,
    },
}

impl fmt::Display for BitSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitSetError::CapacityExceeded { requested, max } => {
                write!(f, "Capacity exceeded: requested {requested} bits, max is {max}")
            }
        }
    }
}

impl std::error::Error for BitSetError {}

/// Result type alias
pub type Result<T> = std::result::Result<T, BitSetError>;
