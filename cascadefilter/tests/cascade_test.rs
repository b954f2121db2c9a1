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

use cascadefilter::cascade::CascadeFilterBuilder;
use cascadefilter::error::ErrorKind;
use cascadefilter::region::HeapRegion;
use googletest::assert_that;
use googletest::prelude::ge;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn test_level_zero_is_lazy() {
    let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::new());
    assert_eq!(filter.levels(), 0);
    assert_eq!(filter.region().len(), 0);
    assert!(filter.is_empty());
    assert!(!filter.lookup(42));

    filter.add(42).unwrap();
    assert_eq!(filter.levels(), 1);
    // 2^10 slots of 18 bits round up to one 4 KiB page
    assert_eq!(filter.region().len(), 4096);
    assert!(filter.lookup(42));
}

#[test]
fn test_spill_drains_level_zero() {
    // B = 10 splits into (9, 1): 512 slots, spill on the 384th insert
    let mut filter = CascadeFilterBuilder::new(10).build(HeapRegion::new());

    let mut rng = StdRng::seed_from_u64(0xca5c);
    let mut hashes: Vec<u64> = (0..384).collect();
    hashes.shuffle(&mut rng);

    for &hash in &hashes {
        filter.add(hash).unwrap();
    }

    assert_eq!(filter.levels(), 2);
    assert_eq!(filter.level_lens(), vec![0, 384]);
    assert_eq!(filter.len(), 384);

    for &hash in &hashes {
        assert!(filter.lookup(hash), "lost {hash:#x} in the spill");
    }
}

#[test]
fn test_growth_allocates_doubling_levels() {
    // B = 12 splits into (11, 1); four level-0 fills force a level that
    // has run out of remainder bits and doubles on the quotient alone
    let mut filter = CascadeFilterBuilder::new(12).build(HeapRegion::new());

    let mut rng = StdRng::seed_from_u64(0xca5d);
    let count = 4 * (1u64 << filter.quotient_bits());
    let mut hashes: Vec<u64> = (0..count).collect();
    hashes.shuffle(&mut rng);

    for &hash in &hashes {
        filter.add(hash).unwrap();
    }

    assert_that!(filter.levels(), ge(4));
    for &hash in &hashes {
        assert!(filter.lookup(hash), "lost {hash:#x} while growing");
    }

    // diagnostics report the stable level-0 split
    assert_eq!(filter.quotient_bits(), 11);
    assert_eq!(filter.remainder_bits(), 1);
    assert_eq!(filter.bits(), 12);
}

#[test]
fn test_conservation_of_distinct_hashes() {
    // B = 16 splits into (12, 4); distinct 16-bit hashes never collide,
    // so the level counts must sum to exactly the insert count
    let mut filter = CascadeFilterBuilder::new(16).build(HeapRegion::new());

    let mut rng = StdRng::seed_from_u64(0xca5e);
    let mut hashes: Vec<u64> = (0..4000).collect();
    hashes.shuffle(&mut rng);

    for &hash in &hashes {
        filter.add(hash).unwrap();
    }

    assert_eq!(filter.len(), 4000);
    assert_eq!(filter.len(), filter.level_lens().iter().sum());

    for &hash in &hashes {
        assert!(filter.lookup(hash));
    }
}

#[test]
fn test_duplicate_adds_collapse_within_a_level() {
    let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::new());
    for _ in 0..10 {
        filter.add(0xabcd).unwrap();
    }
    assert_eq!(filter.len(), 1);
    assert!(filter.lookup(0xabcd));
    // only the low 25 bits are significant
    assert!(filter.lookup(0xabcd | 1 << 30));
}

#[test]
fn test_region_exhaustion_surfaces_unchanged() {
    // one page fits level 0 but not the spill's second level
    let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::with_limit(4096));

    let mut failed = None;
    for hash in 0..1024u64 {
        if let Err(err) = filter.add(hash * 77) {
            failed = Some((hash, err));
            break;
        }
    }

    let (at, err) = failed.expect("spill never hit the region limit");
    assert_eq!(err.kind(), ErrorKind::RegionExhausted);

    // everything inserted before the failure is still there
    for hash in 0..at {
        assert!(filter.lookup(hash * 77));
    }
}

#[test]
fn test_insert_and_contains_hash_values() {
    let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::new());

    filter.insert(&"apple").unwrap();
    filter.insert(&42_u64).unwrap();
    filter.insert(&vec![1, 2, 3]).unwrap();

    assert!(filter.contains(&"apple"));
    assert!(filter.contains(&42_u64));
    assert!(filter.contains(&vec![1, 2, 3]));
    assert!(!filter.contains(&"grape"));
}
