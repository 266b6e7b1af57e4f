// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Presentation layers mirroring the scene's layer toggles

use crate::session::ExportSession;
use zoning_ifc_core::{Entity, EntityId};

/// Semantic layer of a shape representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerBucket {
    LotLines,
    SetbackLines,
    Buildings,
    AccessoryBuildings,
}

impl LayerBucket {
    /// Emission order of the layer assignments
    pub const ALL: [LayerBucket; 4] = [
        LayerBucket::LotLines,
        LayerBucket::SetbackLines,
        LayerBucket::Buildings,
        LayerBucket::AccessoryBuildings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayerBucket::LotLines => "Lot Lines",
            LayerBucket::SetbackLines => "Setback Lines",
            LayerBucket::Buildings => "Buildings",
            LayerBucket::AccessoryBuildings => "Accessory Buildings",
        }
    }

    fn index(self) -> usize {
        match self {
            LayerBucket::LotLines => 0,
            LayerBucket::SetbackLines => 1,
            LayerBucket::Buildings => 2,
            LayerBucket::AccessoryBuildings => 3,
        }
    }
}

/// Shape representations collected per layer during one export
///
/// Consumed by [`LayerSet::emit`], so a bucket cannot change after its
/// assignment record is written.
#[derive(Debug, Default)]
pub struct LayerSet {
    buckets: [Vec<EntityId>; 4],
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bucket: LayerBucket, shape_rep: EntityId) {
        self.buckets[bucket.index()].push(shape_rep);
    }

    pub fn members(&self, bucket: LayerBucket) -> &[EntityId] {
        &self.buckets[bucket.index()]
    }

    /// Write one assignment per non-empty bucket; empty buckets are omitted
    pub fn emit(self, session: &mut ExportSession) -> Vec<EntityId> {
        let mut ids = Vec::with_capacity(4);
        for (bucket, members) in LayerBucket::ALL.into_iter().zip(self.buckets) {
            if members.is_empty() {
                continue;
            }
            ids.push(session.push(Entity::PresentationLayerAssignment {
                name: bucket.name().to_string(),
                assigned_items: members,
            }));
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_empty_buckets_are_omitted() {
        let mut session = ExportSession::new(Utc::now(), Some(2));
        let a = session.push(Entity::point2(0.0, 0.0));
        let b = session.push(Entity::point2(1.0, 0.0));

        let mut layers = LayerSet::new();
        layers.add(LayerBucket::Buildings, a);
        layers.add(LayerBucket::LotLines, b);
        assert_eq!(layers.members(LayerBucket::Buildings), &[a]);

        let ids = layers.emit(&mut session);
        assert_eq!(ids.len(), 2);

        // Lot Lines is written before Buildings regardless of insertion order
        match session.store().get(ids[0]) {
            Some(Entity::PresentationLayerAssignment {
                name,
                assigned_items,
            }) => {
                assert_eq!(name, "Lot Lines");
                assert_eq!(assigned_items, &vec![b]);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }
}
