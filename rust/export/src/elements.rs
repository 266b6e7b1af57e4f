// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lot surfaces, setback lines and building masses
//!
//! Each generator takes the lot offset used by the scene layout and writes
//! its geometry in world coordinates. Element placements sit on the storey
//! placement with the identity axis.

use crate::context::GeometricContexts;
use crate::error::{ExportError, Result};
use crate::hierarchy::SpatialNode;
use crate::session::ExportSession;
use crate::solids::{extruded_solid, line_strip_solid};
use zoning_ifc_core::{Entity, EntityId, PredefinedType, ProductShape};
use zoning_ifc_geometry::{building_footprint, lot_footprint, setback_segments, Vector2};
use zoning_ifc_model::{BuildingGeometry, LotSource};

/// Lot slab thickness (feet)
pub const LOT_SLAB_THICKNESS: f64 = 0.1;
/// Lot slab sits this far below grade
pub const LOT_SLAB_ELEVATION: f64 = -0.1;

pub const SETBACK_LINE_WIDTH: f64 = 0.5;
pub const SETBACK_LINE_HEIGHT: f64 = 0.2;
/// Setback lines float slightly above grade
pub const SETBACK_LINE_ELEVATION: f64 = 0.05;

/// A generated product and its shape representation, if it has one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementOutput {
    pub element: EntityId,
    pub shape_rep: Option<EntityId>,
}

/// Names and ownership shared by every element of one lot
pub struct ElementScope<'a> {
    pub contexts: &'a GeometricContexts,
    pub owner_history: EntityId,
    pub storey: &'a SpatialNode,
    pub offset: Vector2<f64>,
}

impl ElementScope<'_> {
    fn body_representation(&self, session: &mut ExportSession, items: Vec<EntityId>) -> (EntityId, EntityId) {
        let shape_rep = session.push(Entity::ShapeRepresentation {
            context: self.contexts.body,
            identifier: "Body".to_string(),
            representation_type: "SweptSolid".to_string(),
            items,
        });
        let product_shape = session.push(Entity::ProductDefinitionShape {
            representations: vec![shape_rep],
        });
        (shape_rep, product_shape)
    }

    fn placement(&self, session: &mut ExportSession) -> EntityId {
        session.push(Entity::LocalPlacement {
            placement_rel_to: Some(self.storey.placement),
            relative_placement: self.contexts.world_placement,
        })
    }
}

/// Thin slab covering the lot footprint, just below grade
pub fn lot_surface<L: LotSource + ?Sized>(
    session: &mut ExportSession,
    scope: &ElementScope<'_>,
    lot: &L,
    name: &str,
) -> Result<ElementOutput> {
    let footprint = lot_footprint(lot, scope.offset);
    let solid = extruded_solid(
        session,
        scope.contexts,
        &footprint,
        LOT_SLAB_THICKNESS,
        LOT_SLAB_ELEVATION,
    )
    .map_err(|e| ExportError::for_element(name, e))?;

    let (shape_rep, product_shape) = scope.body_representation(session, vec![solid]);
    let placement = scope.placement(session);
    let root = session.root(scope.owner_history, Some(name.to_string()));
    let element = session.push(Entity::Slab {
        root,
        shape: ProductShape {
            placement,
            representation: Some(product_shape),
        },
        predefined_type: PredefinedType::BaseSlab,
    });

    Ok(ElementOutput {
        element,
        shape_rep: Some(shape_rep),
    })
}

/// One proxy holding a thin strip for each edge of the setback inset
///
/// Zero-length edges are skipped. If every edge is skipped there is nothing
/// to represent and `Ok(None)` is returned.
pub fn setback_lines<L: LotSource + ?Sized>(
    session: &mut ExportSession,
    scope: &ElementScope<'_>,
    lot: &L,
    name: &str,
) -> Result<Option<ElementOutput>> {
    let mut solids = Vec::with_capacity(4);
    for (start, end) in setback_segments(lot, scope.offset) {
        let solid = line_strip_solid(
            session,
            scope.contexts,
            start,
            end,
            SETBACK_LINE_WIDTH,
            SETBACK_LINE_HEIGHT,
            SETBACK_LINE_ELEVATION,
        )
        .map_err(|e| ExportError::for_element(name, e))?;

        match solid {
            Some(id) => solids.push(id),
            None => tracing::debug!(element = name, "Skipped zero-length setback segment"),
        }
    }

    if solids.is_empty() {
        tracing::warn!(element = name, "All setback segments degenerate, no setback lines exported");
        return Ok(None);
    }

    let (shape_rep, product_shape) = scope.body_representation(session, solids);
    let placement = scope.placement(session);
    let root = session.root(scope.owner_history, Some(name.to_string()));
    let element = session.push(Entity::BuildingElementProxy {
        root,
        shape: ProductShape {
            placement,
            representation: Some(product_shape),
        },
        predefined_type: PredefinedType::NotDefined,
    });

    Ok(Some(ElementOutput {
        element,
        shape_rep: Some(shape_rep),
    }))
}

/// Extruded building mass centered at the building position on the lot
///
/// A mass with an empty footprint is written without a representation.
pub fn building_mass(
    session: &mut ExportSession,
    scope: &ElementScope<'_>,
    building: &BuildingGeometry,
    name: &str,
) -> Result<ElementOutput> {
    let shape = if building.has_footprint() {
        let footprint = building_footprint(building, scope.offset);
        let solid = extruded_solid(session, scope.contexts, &footprint, building.height, 0.0)
            .map_err(|e| ExportError::for_element(name, e))?;
        Some(scope.body_representation(session, vec![solid]))
    } else {
        tracing::debug!(element = name, "Building mass has no footprint, exported without geometry");
        None
    };

    let placement = scope.placement(session);
    let root = session.root(scope.owner_history, Some(name.to_string()));
    let element = session.push(Entity::BuildingElementProxy {
        root,
        shape: ProductShape {
            placement,
            representation: shape.map(|(_, product_shape)| product_shape),
        },
        predefined_type: PredefinedType::NotDefined,
    });

    Ok(ElementOutput {
        element,
        shape_rep: shape.map(|(shape_rep, _)| shape_rep),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy;
    use chrono::Utc;
    use zoning_ifc_core::IfcType;
    use zoning_ifc_model::{Lot, Setbacks};

    struct Fixture {
        session: ExportSession,
        contexts: GeometricContexts,
        owner_history: EntityId,
        storey: SpatialNode,
    }

    fn fixture() -> Fixture {
        let mut session = ExportSession::new(Utc::now(), Some(5));
        let contexts = GeometricContexts::build(&mut session);
        let refs = hierarchy::project(&mut session, &contexts, "Test", "", "");
        let footprint = zoning_ifc_geometry::Profile2D::rectangle(
            zoning_ifc_geometry::Point2::new(0.0, 50.0),
            50.0,
            100.0,
        );
        let site = hierarchy::site(&mut session, &contexts, refs.owner_history, &footprint, "Lot");
        let building = hierarchy::building(&mut session, &contexts, refs.owner_history, &site, "B");
        let storey = hierarchy::storey(&mut session, &contexts, refs.owner_history, &building, 0.0);
        Fixture {
            session,
            contexts,
            owner_history: refs.owner_history,
            storey,
        }
    }

    fn lot() -> Lot {
        Lot {
            lot_width: 50.0,
            lot_depth: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_lot_surface_is_base_slab() {
        let mut f = fixture();
        let scope = ElementScope {
            contexts: &f.contexts,
            owner_history: f.owner_history,
            storey: &f.storey,
            offset: Vector2::new(0.0, 50.0),
        };
        let out = lot_surface(&mut f.session, &scope, &lot(), "Lot Surface").unwrap();

        assert!(out.shape_rep.is_some());
        match f.session.store().get(out.element) {
            Some(Entity::Slab {
                predefined_type, ..
            }) => assert_eq!(*predefined_type, PredefinedType::BaseSlab),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_setback_lines_share_one_representation() {
        let mut f = fixture();
        let mut lot = lot();
        lot.setbacks.principal = Setbacks {
            front: 20.0,
            rear: 10.0,
            side_interior: 5.0,
            side_street: 5.0,
        };
        let scope = ElementScope {
            contexts: &f.contexts,
            owner_history: f.owner_history,
            storey: &f.storey,
            offset: Vector2::new(0.0, 50.0),
        };
        let out = setback_lines(&mut f.session, &scope, &lot, "Setback Lines")
            .unwrap()
            .unwrap();

        match f.session.store().get(out.shape_rep.unwrap()) {
            Some(Entity::ShapeRepresentation { items, .. }) => assert_eq!(items.len(), 4),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_front_setback_equal_to_depth_keeps_two_strips() {
        let mut f = fixture();
        let mut lot = lot();
        lot.setbacks.principal.front = 100.0;
        let scope = ElementScope {
            contexts: &f.contexts,
            owner_history: f.owner_history,
            storey: &f.storey,
            offset: Vector2::new(0.0, 50.0),
        };
        let out = setback_lines(&mut f.session, &scope, &lot, "Setback Lines")
            .unwrap()
            .unwrap();

        match f.session.store().get(out.shape_rep.unwrap()) {
            Some(Entity::ShapeRepresentation { items, .. }) => assert_eq!(items.len(), 2),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_fully_degenerate_setbacks_emit_nothing() {
        let mut f = fixture();
        let mut lot = lot();
        lot.setbacks.principal = Setbacks {
            front: 50.0,
            rear: 50.0,
            side_interior: 25.0,
            side_street: 25.0,
        };
        let scope = ElementScope {
            contexts: &f.contexts,
            owner_history: f.owner_history,
            storey: &f.storey,
            offset: Vector2::new(0.0, 50.0),
        };
        let before = f.session.store().len();
        let out = setback_lines(&mut f.session, &scope, &lot, "Setback Lines").unwrap();
        assert!(out.is_none());
        assert_eq!(f.session.store().len(), before);
    }

    #[test]
    fn test_empty_mass_has_no_representation() {
        let mut f = fixture();
        let scope = ElementScope {
            contexts: &f.contexts,
            owner_history: f.owner_history,
            storey: &f.storey,
            offset: Vector2::zeros(),
        };
        let out = building_mass(&mut f.session, &scope, &BuildingGeometry::default(), "Mass").unwrap();
        assert_eq!(out.shape_rep, None);
        assert_eq!(f.session.store().count_of(IfcType::IfcExtrudedAreaSolid), 0);
    }

    #[test]
    fn test_zero_height_mass_is_an_error() {
        let mut f = fixture();
        let scope = ElementScope {
            contexts: &f.contexts,
            owner_history: f.owner_history,
            storey: &f.storey,
            offset: Vector2::zeros(),
        };
        let building = BuildingGeometry {
            width: 20.0,
            depth: 20.0,
            height: 0.0,
            ..Default::default()
        };
        let err = building_mass(&mut f.session, &scope, &building, "Mass").unwrap_err();
        assert!(matches!(err, ExportError::InvalidExtrusion { ref element, .. } if element == "Mass"));
    }
}
