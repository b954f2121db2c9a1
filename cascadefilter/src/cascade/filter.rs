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

use std::hash::Hash;
use std::hash::Hasher;

use tracing::debug;
use xxhash_rust::xxh3::Xxh3;

use crate::error::Error;
use crate::quotient::buffer_size;
use crate::quotient::QuotientFilter;
use crate::region::Region;

/// A growable membership filter over an append-only backing region.
///
/// See the [module docs](crate::cascade) for the structure and its
/// guarantees. Construct one with [`CascadeFilterBuilder`].
///
/// [`CascadeFilterBuilder`]: crate::cascade::CascadeFilterBuilder
pub struct CascadeFilter<R: Region> {
    region: R,
    levels: Vec<QuotientFilter<R::Buf>>,
    bits: u32,
    hash_mask: u64,
    quotient_bits: u32,
    remainder_bits: u32,
    page_size: usize,
}

impl<R: Region> CascadeFilter<R> {
    pub(crate) fn from_parts(
        region: R,
        bits: u32,
        quotient_bits: u32,
        remainder_bits: u32,
        page_size: usize,
    ) -> Self {
        Self {
            region,
            levels: Vec::new(),
            bits,
            hash_mask: (1u64 << bits) - 1,
            quotient_bits,
            remainder_bits,
            page_size,
        }
    }

    /// Inserts a hash, of which the low [`bits`](Self::bits) bits are
    /// significant. Level 0 is allocated on the first call; crossing 75%
    /// load on level 0 triggers a spill into the larger levels.
    ///
    /// The only error is the backing region refusing to grow, surfaced
    /// unchanged. The insert that needed the space is abandoned.
    pub fn add(&mut self, hash: u64) -> Result<(), Error> {
        if self.levels.is_empty() {
            self.allocate_level()?;
        }

        // Truncate up front so every level agrees on element identity,
        // including deep levels whose quotient outgrows the hash width.
        self.levels[0].add(hash & self.hash_mask);

        // 75% load is the conventional ceiling for linear-probing quotient
        // filters; past it cluster lengths grow superlinearly.
        if self.levels[0].len() * 4 >= self.levels[0].capacity() * 3 {
            self.spill()?;
        }

        Ok(())
    }

    /// Returns true if the hash may have been inserted: the first level
    /// that stores its quotient and remainder wins.
    pub fn lookup(&self, hash: u64) -> bool {
        let hash = hash & self.hash_mask;
        self.levels
            .iter()
            .any(|level| !level.is_empty() && level.lookup(hash))
    }

    /// Hashes a value with xxh3 and inserts it.
    pub fn insert<T: Hash>(&mut self, value: &T) -> Result<(), Error> {
        self.add(hash_value(value))
    }

    /// Hashes a value with xxh3 and tests membership.
    pub fn contains<T: Hash>(&self, value: &T) -> bool {
        self.lookup(hash_value(value))
    }

    /// Returns the total number of stored elements across all levels.
    ///
    /// A hash spilled out of level 0 and later re-inserted counts once per
    /// level holding it, so this can exceed the number of distinct hashes.
    pub fn len(&self) -> usize {
        self.levels.iter().map(QuotientFilter::len).sum()
    }

    /// Returns true if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(QuotientFilter::is_empty)
    }

    /// Returns the number of allocated levels.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// Returns the element count of each allocated level, in level order.
    pub fn level_lens(&self) -> Vec<usize> {
        self.levels.iter().map(QuotientFilter::len).collect()
    }

    /// Returns the significant hash width this filter was created with.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Returns level 0's quotient width in bits.
    pub fn quotient_bits(&self) -> u32 {
        self.quotient_bits
    }

    /// Returns level 0's remainder width in bits.
    pub fn remainder_bits(&self) -> u32 {
        self.remainder_bits
    }

    /// Returns the backing region.
    pub fn region(&self) -> &R {
        &self.region
    }

    // Parameters for the level at `index`. Levels 0 and 1 share the
    // initial split; every later level doubles capacity by taking one bit
    // from the remainder. Once the remainder is exhausted the quotient
    // keeps growing alone, so capacity still doubles and spill
    // destinations keep their headroom.
    fn level_params(&self, index: usize) -> (u32, u32) {
        if index == 0 {
            return (self.quotient_bits, self.remainder_bits);
        }
        let step = (index - 1) as u32;
        (
            self.quotient_bits + step,
            self.remainder_bits.saturating_sub(step),
        )
    }

    // Extends the backing region by one level's worth of pages and maps a
    // fresh quotient filter over the appended range.
    fn allocate_level(&mut self) -> Result<(), Error> {
        let (quotient_bits, remainder_bits) = self.level_params(self.levels.len());
        let len = buffer_size(quotient_bits, remainder_bits);
        let len = len.div_ceil(self.page_size) * self.page_size;

        let buf = self.region.extend(len)?;
        let mut level = QuotientFilter::with_buffer(quotient_bits, remainder_bits, buf);
        level.clear();

        debug!(
            level = self.levels.len(),
            quotient_bits, remainder_bits, bytes = len, "allocated cascade level"
        );
        self.levels.push(level);
        Ok(())
    }

    // Drains the non-empty prefix of levels into the first level after it,
    // allocating a new one when the prefix covers every level. Capacities
    // double from level 2 on, so the destination ends at most 75% full
    // and the sources never see a full-filter insert.
    fn spill(&mut self) -> Result<(), Error> {
        let mut prefix = 0;
        for level in &self.levels {
            if level.is_empty() {
                break;
            }
            prefix += 1;
        }

        if prefix == self.levels.len() {
            self.allocate_level()?;
        }

        // TODO: levels iterate in sorted hash order, so this merge could
        // be a single sequential pass with contiguous writes instead of
        // per-element inserts.
        let (sources, rest) = self.levels.split_at_mut(prefix);
        let destination = &mut rest[0];
        let mut moved = 0;
        for level in sources.iter_mut() {
            moved += level.len();
            for hash in level.iter() {
                destination.add(hash);
            }
            level.clear();
        }

        debug!(
            spilled = prefix,
            moved,
            retained = destination.len(),
            "spilled cascade levels"
        );
        Ok(())
    }
}

fn hash_value<T: Hash>(value: &T) -> u64 {
    let mut hasher = Xxh3::new();
    value.hash(&mut hasher);
    hasher.finish()
}
