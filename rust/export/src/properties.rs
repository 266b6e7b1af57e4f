// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zoning property sets attached to sites and building masses

use crate::session::ExportSession;
use zoning_ifc_core::{Entity, EntityId, Measure};
use zoning_ifc_geometry::{lot_area, SQUARE_FEET_TO_SQUARE_METRES};
use zoning_ifc_model::{BuildingGeometry, LotSource};

pub const PSET_ZONING_LOT: &str = "Pset_ZoningLot";
pub const PSET_ZONING_MASS: &str = "Pset_ZoningMass";

/// Lot dimensions, area and principal setbacks on the site
///
/// `LotArea` is in square metres since the document's area unit is SI.
pub fn lot_properties<L: LotSource + ?Sized>(
    session: &mut ExportSession,
    owner_history: EntityId,
    site: EntityId,
    lot: &L,
) -> EntityId {
    let setbacks = lot.principal_setbacks();
    let values = [
        ("LotWidth", Measure::Length(lot.lot_width())),
        ("LotDepth", Measure::Length(lot.lot_depth())),
        (
            "LotArea",
            Measure::Area(lot_area(lot) * SQUARE_FEET_TO_SQUARE_METRES),
        ),
        ("SetbackFront", Measure::Length(setbacks.front)),
        ("SetbackRear", Measure::Length(setbacks.rear)),
        ("SetbackSideInterior", Measure::Length(setbacks.side_interior)),
        ("SetbackSideStreet", Measure::Length(setbacks.side_street)),
    ];
    property_set(session, owner_history, site, PSET_ZONING_LOT, values)
}

/// Footprint, height and story count on a building mass
pub fn mass_properties(
    session: &mut ExportSession,
    owner_history: EntityId,
    element: EntityId,
    building: &BuildingGeometry,
) -> EntityId {
    let mut values = vec![
        ("Width", Measure::Length(building.width)),
        ("Depth", Measure::Length(building.depth)),
        ("Height", Measure::Length(building.height)),
    ];
    if let Some(stories) = building.stories {
        values.push(("Stories", Measure::Integer(i64::from(stories))));
    }
    property_set(session, owner_history, element, PSET_ZONING_MASS, values)
}

/// Single values, the set, then the relation to `object`
fn property_set(
    session: &mut ExportSession,
    owner_history: EntityId,
    object: EntityId,
    name: &str,
    values: impl IntoIterator<Item = (&'static str, Measure)>,
) -> EntityId {
    let properties: Vec<EntityId> = values
        .into_iter()
        .map(|(name, nominal_value)| {
            session.push(Entity::PropertySingleValue {
                name: name.to_string(),
                nominal_value,
            })
        })
        .collect();

    let root = session.root(owner_history, Some(name.to_string()));
    let pset = session.push(Entity::PropertySet { root, properties });

    let root = session.root(owner_history, None);
    session.push(Entity::RelDefinesByProperties {
        root,
        related_objects: vec![object],
        relating_property_definition: pset,
    })
}
