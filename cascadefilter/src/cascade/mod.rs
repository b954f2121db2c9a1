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

//! Cascading quotient filter: a growable membership filter organized like
//! an LSM hierarchy.
//!
//! A cascade is a stack of [quotient filters](crate::quotient) of
//! geometrically doubling capacity, all living in one append-only
//! [region](crate::region). Inserts land in the small level 0; when it
//! passes 75% load, the non-empty prefix of levels is drained into the
//! first empty level after it (allocating a new, larger one when needed).
//! Lookups scan the non-empty levels in order and stop at the first hit.
//!
//! # Properties
//!
//! - **No false negatives**: an inserted hash always tests positive, across
//!   any number of spills
//! - **Amortized writes**: the hot level is small enough to live in cache;
//!   bulk movement happens only on spill
//! - **Paging-friendly**: each level is a contiguous, page-aligned range of
//!   the backing region, so cold levels cost page-ins rather than RAM
//! - **Graceful degradation**: deeper levels trade one remainder bit for
//!   each capacity doubling, so the false-positive rate decays smoothly as
//!   the filter grows
//!
//! # Usage
//!
//! ```rust
//! use cascadefilter::cascade::CascadeFilterBuilder;
//! use cascadefilter::region::HeapRegion;
//!
//! // 25 significant hash bits; level 0 sizes itself to fit a 4 KiB page
//! let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::new());
//!
//! filter.insert(&"apple").unwrap();
//! filter.insert(&42_u64).unwrap();
//!
//! assert!(filter.contains(&"apple"));
//! assert!(filter.contains(&42_u64));
//! assert!(!filter.contains(&"grape"));
//! ```
//!
//! Callers that already have uniformly distributed 64-bit hashes can skip
//! the built-in hashing and feed them directly:
//!
//! ```rust
//! # use cascadefilter::cascade::CascadeFilterBuilder;
//! # use cascadefilter::region::HeapRegion;
//! let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::new());
//! filter.add(0x00c0_ffee)?;
//! assert!(filter.lookup(0x00c0_ffee));
//! # Ok::<(), cascadefilter::error::Error>(())
//! ```
//!
//! # Concurrency
//!
//! A cascade is single-threaded: exactly one thread of control mutates it,
//! and there is no internal locking. All operations run synchronously to
//! completion, so a spill is atomic from the caller's perspective.
//!
//! # Durability
//!
//! None beyond what the backing region provides. A process that dies
//! mid-spill leaves the region inconsistent; recovery is out of scope.

mod builder;
mod filter;

pub use self::builder::CascadeFilterBuilder;
pub use self::filter::CascadeFilter;
