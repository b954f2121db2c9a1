// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Quotient filter: a compact, cache-friendly membership filter.
//!
//! A quotient filter stores 64-bit hashes by splitting each into a
//! `q`-bit *quotient* (the high bits, which pick a canonical slot) and an
//! `r`-bit *remainder* (the low bits, which are stored in the slot). Each
//! slot costs `3 + r` bits: the remainder plus three metadata flags that
//! let linear probing recover which canonical slot every stored remainder
//! belongs to.
//!
//! # Properties
//!
//! - **No false negatives**: an inserted hash always tests positive
//! - **Bounded false positives**: two hashes collide only when they share
//!   both quotient and remainder, so roughly `2^-r` at moderate load
//! - **Fixed capacity**: `2^q` slots; keep load at or below 75%, past
//!   that cluster lengths grow superlinearly and inserts degrade
//! - **Sorted iteration**: stored hashes come back in ascending circular
//!   order, which makes merging filters a sequential pass
//! - **Zero-cost initialization**: the all-zeros buffer is the valid empty
//!   filter, so a freshly zeroed mapping needs no setup pass
//!
//! # Usage
//!
//! ```rust
//! use cascadefilter::quotient::QuotientFilter;
//!
//! // 2^10 slots, 5-bit remainders
//! let mut filter = QuotientFilter::new(10, 5);
//!
//! filter.add(0x1234);
//! assert!(filter.lookup(0x1234));
//! assert!(!filter.lookup(0x4321));
//!
//! // hashes come back in ascending order
//! let stored: Vec<u64> = filter.iter().collect();
//! assert_eq!(stored, vec![0x1234]);
//! ```
//!
//! The filter is not concurrency-safe and does not support deletion. It is
//! the caller's responsibility to watch the load factor and stop inserting
//! (or drain into a bigger filter, as [`cascade`](crate::cascade) does)
//! before the filter fills up.
//!
//! # References
//!
//! - Bender, Farach-Colton, Johnson, et al. (2012). "Don't Thrash: How to
//!   Cache Your Hash on Flash"

mod filter;
mod slot;

pub use self::filter::buffer_size;
pub use self::filter::QuotientFilter;
pub use self::filter::QuotientIter;
pub(crate) use self::slot::Slot;
