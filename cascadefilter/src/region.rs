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

//! Byte-addressable backing storage for cascade levels.
//!
//! A [`Region`] is an append-only sequence of bytes that a
//! [`CascadeFilter`](crate::cascade::CascadeFilter) grows one level at a
//! time. Each extension returns an owned, directly addressable view of
//! exactly the appended range; the filter maps every level once, at
//! allocation, and keeps the view for the level's lifetime.
//!
//! Whether the region is a file plus mmap, an anonymous mapping, or a plain
//! in-memory buffer is the environment's choice. The crate ships
//! [`HeapRegion`] for in-memory use and tests; a persistent implementation
//! would back [`Region::extend`] with file growth and a per-level mapping,
//! and may sync on drop if it wants durability.
//!
//! The persisted layout is headerless: the region is the concatenation of
//! level buffers in allocation order, each padded with zeros to the page
//! size. Reopening one therefore requires knowing the hash bit-width and
//! page size it was created with.

use crate::error::Error;

/// Append-only byte storage handing out one view per extension.
pub trait Region {
    /// Byte-addressable view of one extended range.
    type Buf: AsRef<[u8]> + AsMut<[u8]>;

    /// Grows the region by `len` zero-filled bytes and returns a view of
    /// exactly the appended range.
    ///
    /// The view stays valid and addressable until it is dropped. A refusal
    /// to grow is the one runtime failure in the system; it is surfaced to
    /// the caller unchanged and the operation that needed the space is
    /// abandoned.
    fn extend(&mut self, len: usize) -> Result<Self::Buf, Error>;
}

/// An in-memory [`Region`] backed by one heap allocation per extension.
///
/// An optional byte limit makes exhaustion reachable, which is useful both
/// for bounding memory and for exercising failure paths in tests.
///
/// # Examples
///
/// ```
/// # use cascadefilter::region::HeapRegion;
/// # use cascadefilter::region::Region;
/// let mut region = HeapRegion::new();
/// let buf = region.extend(4096).unwrap();
/// assert_eq!(buf.len(), 4096);
/// assert_eq!(region.len(), 4096);
/// ```
#[derive(Debug, Default)]
pub struct HeapRegion {
    len: u64,
    limit: Option<u64>,
}

impl HeapRegion {
    /// Creates an unbounded in-memory region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a region that refuses to grow past `limit` total bytes.
    pub fn with_limit(limit: u64) -> Self {
        Self {
            len: 0,
            limit: Some(limit),
        }
    }

    /// Returns the total number of bytes extended so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the region has never been extended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Region for HeapRegion {
    type Buf = Box<[u8]>;

    fn extend(&mut self, len: usize) -> Result<Box<[u8]>, Error> {
        let grown = self.len + len as u64;
        if let Some(limit) = self.limit {
            if grown > limit {
                return Err(Error::region_exhausted("heap region limit reached")
                    .with_context("limit", limit)
                    .with_context("requested", len));
            }
        }
        self.len = grown;
        Ok(vec![0u8; len].into_boxed_slice())
    }
}
