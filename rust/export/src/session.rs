// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-invocation export context
//!
//! One session owns the entity store and the GUID source for exactly one
//! document. Nothing is shared between exports, so independent exports can
//! run concurrently.

use chrono::{DateTime, Utc};
use zoning_ifc_core::{
    write_document, Entity, EntityId, EntityStore, FileHeader, GuidSource, Root,
};

pub struct ExportSession {
    store: EntityStore,
    guids: GuidSource,
    timestamp: DateTime<Utc>,
}

impl ExportSession {
    pub fn new(timestamp: DateTime<Utc>, guid_seed: Option<u64>) -> Self {
        Self {
            store: EntityStore::new(),
            guids: guid_seed.map_or_else(GuidSource::new, GuidSource::seeded),
            timestamp,
        }
    }

    /// Append a record and return its id
    pub fn push(&mut self, entity: Entity) -> EntityId {
        self.store.push(entity)
    }

    pub fn guid(&mut self) -> String {
        self.guids.next_guid()
    }

    /// Root attributes with a fresh GUID
    pub fn root(&mut self, owner_history: EntityId, name: Option<String>) -> Root {
        Root::new(self.guid(), owner_history, name)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Render the finished document
    pub fn finish(self, header: &FileHeader) -> String {
        write_document(header, &self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sessions_are_independent() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut a = ExportSession::new(ts, Some(1));
        let mut b = ExportSession::new(ts, Some(1));

        a.push(Entity::point2(0.0, 0.0));
        a.push(Entity::point2(1.0, 0.0));
        let first_b = b.push(Entity::point2(0.0, 0.0));

        assert_eq!(first_b.get(), 1);
        assert_eq!(a.store().len(), 2);
        assert_eq!(a.guid(), b.guid());
    }
}
