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

use crate::cascade::CascadeFilter;
use crate::region::Region;

pub(crate) const DEFAULT_PAGE_SIZE: usize = 4096;

// One 4 KiB page in bits. The initial level is sized to the largest slot
// array that stays under a page, whatever page size the region really
// uses, so the hot level stays hot.
const LEVEL_BIT_BUDGET: u128 = 32768;

/// Builder for creating [`CascadeFilter`] instances.
///
/// The one mandatory parameter is `bits`, the total significant hash
/// width: every hash fed to the filter is truncated to its low `bits`
/// bits, and level parameters `(q, r)` always split that width. The
/// builder picks the initial split that maximizes slots per level while
/// level 0 still fits a 4 KiB page.
///
/// # Examples
///
/// ```
/// # use cascadefilter::cascade::CascadeFilterBuilder;
/// # use cascadefilter::region::HeapRegion;
/// let filter = CascadeFilterBuilder::new(25)
///     .page_size(16384)
///     .build(HeapRegion::new());
/// assert_eq!(filter.quotient_bits(), 10);
/// assert_eq!(filter.remainder_bits(), 15);
/// ```
#[derive(Debug, Clone)]
pub struct CascadeFilterBuilder {
    bits: u32,
    page_size: usize,
}

impl CascadeFilterBuilder {
    /// Creates a builder for filters over `bits`-bit hashes.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not in `2..=62`. Widths past 62 cannot split
    /// into a page-sized level: the quotient would have to shrink below
    /// what the budget allows while the remainder overflows the 56-bit
    /// slot limit.
    pub fn new(bits: u32) -> Self {
        assert!(
            bits >= 2 && bits <= 62,
            "bits must be in 2..=62, got {bits}"
        );
        CascadeFilterBuilder {
            bits,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Sets the page size level buffers are rounded up to (default: 4096).
    ///
    /// Must match the page granularity of the backing region; a region
    /// persisted with one page size is not reopenable with another.
    ///
    /// # Panics
    ///
    /// Panics if `page_size` is not a power of two.
    pub fn page_size(mut self, page_size: usize) -> Self {
        assert!(
            page_size.is_power_of_two(),
            "page_size must be a power of two, got {page_size}"
        );
        self.page_size = page_size;
        self
    }

    /// Builds a filter over the given backing region.
    ///
    /// The region is not touched yet; level 0 is allocated lazily on the
    /// first insert.
    pub fn build<R: Region>(self, region: R) -> CascadeFilter<R> {
        let (quotient_bits, remainder_bits) = initial_params(self.bits);
        CascadeFilter::from_parts(region, self.bits, quotient_bits, remainder_bits, self.page_size)
    }
}

// Picks the (q, r) split of `bits` maximizing (3 + r) * 2^q while keeping
// it under the level bit budget. Slot overhead is 3 bits per element; the
// remainder caps at 53 so a slot fits the 56-bit packed-array element.
pub(crate) fn initial_params(bits: u32) -> (u32, u32) {
    let mut best_r = 0;
    let mut best_value = 0u128;
    for r in 1..bits.min(54) {
        let value = (3 + r as u128) * (1u128 << (bits - r));
        if value < LEVEL_BIT_BUDGET && value > best_value {
            best_r = r;
            best_value = value;
        }
    }
    (bits - best_r, best_r)
}
