// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Append-only arena of entity records

use crate::entity::Entity;
use crate::ids::{EntityId, IdAllocator};
use crate::schema::IfcType;

/// Entity records of one document, in creation order
///
/// Record `i` (0-based) always has id `i + 1`. A record may only reference
/// records pushed before it.
#[derive(Debug, Default)]
pub struct EntityStore {
    ids: IdAllocator,
    records: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its id
    pub fn push(&mut self, entity: Entity) -> EntityId {
        debug_assert!(
            entity.references().iter().all(|r| self.ids.is_issued(*r)),
            "{} references an entity that does not exist yet",
            entity.ifc_type()
        );
        let id = self.ids.next_id();
        self.records.push(entity);
        id
    }

    /// Look up a record by id
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.records.get(id.get().checked_sub(1)? as usize)
    }

    /// Iterate `(id, record)` pairs in creation order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Entity)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, e)| (i as u32 + 1, e))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records of one type
    pub fn count_of(&self, ifc_type: IfcType) -> usize {
        self.records
            .iter()
            .filter(|e| e.ifc_type() == ifc_type)
            .count()
    }
}
