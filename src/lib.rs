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

//! Shared BitSet - fixed-capacity packed bit-set
//!
//! Dense mapping from offsets `0..=capacity()` to presence, stored one bit per
//! offset and guarded by a reader/writer lock so any number of threads can
//! read and write concurrently. `prev`/`next` let callers walk it as an
//! ordered sparse set of integers.
//!
//! ```
//! use shared_bitset::BitSet;
//!
//! let bits = BitSet::new(16)?;
//! bits.set(3);
//! bits.set(10);
//! assert_eq!(bits.prev(12), Some(10));
//! assert_eq!(bits.next(11), None);
//! assert_eq!(bits.to_string(), "[3 10]");
//! # Ok::<(), shared_bitset::BitSetError>(())
//! ```

pub mod bitset;
pub mod error;
pub mod prelude;
mod search;


pub use bitset::*;
pub use error::*;
