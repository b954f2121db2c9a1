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

//! # Cascading Quotient Filter
//!
//! Approximate set-membership filtering for data sets that vastly exceed
//! RAM. The library stores 64-bit hashes in a stack of compact quotient
//! filters of geometrically doubling capacity, laid out to be friendly to
//! paged, on-disk backing storage: inserts land in a small, hot level and
//! are amortized into larger, colder levels by a spilling merge, while
//! lookups fan out over the levels and stop at the first hit.
//!
//! Inserted hashes always test positive; hashes that were never inserted
//! test positive only with a bounded false-positive rate.
//!
//! This library is divided into modules that constitute distinct groups of
//! functionality:
//!
//! - [`cascade`]: the growable, spilling filter most callers want
//! - [`quotient`]: a single fixed-capacity quotient filter
//! - [`region`]: the byte-addressable backing storage abstraction
//! - [`bits`]: packed storage of arbitrary-bit-width values
//! - [`error`]: the error type surfaced by fallible operations

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bits;
pub mod cascade;
pub mod error;
pub mod quotient;
pub mod region;
