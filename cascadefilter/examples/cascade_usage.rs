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
use cascadefilter::error::Error;
use cascadefilter::region::HeapRegion;

fn main() -> Result<(), Error> {
    // Create a cascade over 25 significant hash bits.
    // Level 0 sizes itself to fit in one 4 KiB page.
    let mut filter = CascadeFilterBuilder::new(25).build(HeapRegion::new());

    println!("Created cascade filter with B=25");
    println!(
        "Level 0 split: q={} r={}",
        filter.quotient_bits(),
        filter.remainder_bits()
    );

    // Add some values
    println!("\nInserting 10,000 keys...");
    for i in 0..10_000 {
        filter.insert(&format!("key-{i}"))?;
    }

    println!("Stored elements: {}", filter.len());
    println!("Allocated levels: {:?}", filter.level_lens());
    println!("Backing region: {} bytes", filter.region().len());

    // Every inserted key tests positive
    let mut hits = 0;
    for i in 0..10_000 {
        if filter.contains(&format!("key-{i}")) {
            hits += 1;
        }
    }
    println!("\nInserted keys found: {hits}/10000 (always all of them)");

    // Keys that were never inserted mostly test negative
    let mut false_positives = 0;
    for i in 0..10_000 {
        if filter.contains(&format!("other-{i}")) {
            false_positives += 1;
        }
    }
    println!("Fresh keys falsely found: {false_positives}/10000");

    // Test duplicate handling
    println!("\nInserting the same 10,000 keys again...");
    for i in 0..10_000 {
        filter.insert(&format!("key-{i}"))?;
    }
    println!("Stored elements: {}", filter.len());
    println!("Allocated levels: {:?}", filter.level_lens());

    Ok(())
}
