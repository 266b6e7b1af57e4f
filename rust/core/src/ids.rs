// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entity identifiers and GUIDs
//!
//! Both sources are owned by a single export invocation. Nothing here is
//! process-global, so independent exports can run concurrently.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Instance name of a record in the DATA section (`#id`)
///
/// Only [`IdAllocator`] can mint ids, so every id handed to a relationship
/// was returned by an earlier allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    /// Raw numeric value
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues entity ids 1, 2, 3, ... with no reuse
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id
    #[inline]
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    #[inline]
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }

    /// Whether `id` was issued by this allocator
    #[inline]
    pub fn is_issued(&self, id: EntityId) -> bool {
        id.0 >= 1 && id.0 < self.next
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Characters of the IFC compressed GUID encoding
pub const GUID_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_$";

/// Length of an `IfcGloballyUniqueId`
pub const GUID_LENGTH: usize = 22;

/// Random source for `IfcGloballyUniqueId` values
pub struct GuidSource {
    rng: StdRng,
}

impl GuidSource {
    /// GUID source seeded from the operating system
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible GUID source
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a 22-character GUID uniformly from [`GUID_ALPHABET`]
    pub fn next_guid(&mut self) -> String {
        (0..GUID_LENGTH)
            .map(|_| GUID_ALPHABET[self.rng.gen_range(0..GUID_ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for GuidSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GuidSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuidSource").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increment() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next_id().get(), 1);
        assert_eq!(ids.next_id().get(), 2);
        assert_eq!(ids.next_id().get(), 3);
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_is_issued() {
        let mut ids = IdAllocator::new();
        let first = ids.next_id();
        assert!(ids.is_issued(first));

        let mut other = IdAllocator::new();
        other.next_id();
        let later = other.next_id();
        assert!(!ids.is_issued(later));
    }

    #[test]
    fn test_guid_shape() {
        let mut guids = GuidSource::new();
        for _ in 0..100 {
            let guid = guids.next_guid();
            assert_eq!(guid.len(), GUID_LENGTH);
            assert!(guid.bytes().all(|b| GUID_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_seeded_guids_repeat() {
        let mut a = GuidSource::seeded(42);
        let mut b = GuidSource::seeded(42);
        assert_eq!(a.next_guid(), b.next_guid());
        assert_eq!(a.next_guid(), b.next_guid());
    }

    #[test]
    fn test_entity_id_display() {
        let mut ids = IdAllocator::new();
        ids.next_id();
        assert_eq!(ids.next_id().to_string(), "#2");
    }
}
