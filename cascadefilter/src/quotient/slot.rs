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

const OCCUPIED: u64 = 1;
const CONTINUATION: u64 = 1 << 1;
const SHIFTED: u64 = 1 << 2;
const FLAGS: u64 = OCCUPIED | CONTINUATION | SHIFTED;

/// One logical slot: the remainder above three metadata flags.
///
/// Keeping the flags in the low bits makes the all-zeros word the empty
/// slot, so a zeroed buffer is a valid empty filter. Every stored slot has
/// at least one flag set, and an empty slot has a zero remainder, so
/// checking the flags alone decides emptiness.
///
/// The flags carry the linear-probing bookkeeping:
///
/// - `occupied` is an attribute of the slot's *index*: some element's
///   quotient maps here (the element itself may sit shifted to the right)
/// - `continuation` marks a slot that is not the first remainder of its run
/// - `shifted` marks a slot that does not sit at its canonical index
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Slot(u64);

impl Slot {
    pub(crate) fn new(remainder: u64) -> Self {
        Slot(remainder << 3)
    }

    pub(crate) fn from_raw(raw: u64) -> Self {
        Slot(raw)
    }

    pub(crate) fn raw(self) -> u64 {
        self.0
    }

    pub(crate) fn is_empty(self) -> bool {
        self.0 & FLAGS == 0
    }

    pub(crate) fn remainder(self) -> u64 {
        self.0 >> 3
    }

    pub(crate) fn is_occupied(self) -> bool {
        self.0 & OCCUPIED != 0
    }

    pub(crate) fn set_occupied(self) -> Self {
        Slot(self.0 | OCCUPIED)
    }

    pub(crate) fn clear_occupied(self) -> Self {
        Slot(self.0 & !OCCUPIED)
    }

    pub(crate) fn is_continuation(self) -> bool {
        self.0 & CONTINUATION != 0
    }

    pub(crate) fn set_continuation(self) -> Self {
        Slot(self.0 | CONTINUATION)
    }

    pub(crate) fn is_shifted(self) -> bool {
        self.0 & SHIFTED != 0
    }

    pub(crate) fn set_shifted(self) -> Self {
        Slot(self.0 | SHIFTED)
    }

    /// First slot of a cluster: at its canonical index with its own run.
    pub(crate) fn is_cluster_start(self) -> bool {
        self.is_occupied() && !self.is_continuation() && !self.is_shifted()
    }

    /// First slot of some run, cluster start or not.
    pub(crate) fn is_run_start(self) -> bool {
        !self.is_continuation() && (self.is_occupied() || self.is_shifted())
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;

    #[test]
    fn test_empty_is_all_zero() {
        assert!(Slot::from_raw(0).is_empty());
        assert!(Slot::new(0).is_empty());
        assert!(!Slot::new(0).set_occupied().is_empty());
        assert!(!Slot::new(0).set_shifted().is_empty());
    }

    #[test]
    fn test_flags_are_independent_of_remainder() {
        let slot = Slot::new(0b10110);
        assert_eq!(slot.remainder(), 0b10110);
        assert!(!slot.is_occupied());

        let slot = slot.set_occupied().set_continuation().set_shifted();
        assert_eq!(slot.remainder(), 0b10110);
        assert!(slot.is_occupied());
        assert!(slot.is_continuation());
        assert!(slot.is_shifted());

        let slot = slot.clear_occupied();
        assert!(!slot.is_occupied());
        assert!(slot.is_continuation());
        assert_eq!(slot.remainder(), 0b10110);
    }

    #[test]
    fn test_cluster_and_run_start() {
        let canonical = Slot::new(7).set_occupied();
        assert!(canonical.is_cluster_start());
        assert!(canonical.is_run_start());

        let shifted_run = Slot::new(7).set_occupied().set_shifted();
        assert!(!shifted_run.is_cluster_start());
        assert!(shifted_run.is_run_start());

        let continuation = Slot::new(7).set_continuation().set_shifted();
        assert!(!continuation.is_cluster_start());
        assert!(!continuation.is_run_start());
    }
}
