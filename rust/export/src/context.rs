// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared coordinate system, units and representation contexts
//!
//! Emitted once at the start of every document. Lengths are in feet through a
//! conversion-based unit; areas and angles stay SI.

use crate::session::ExportSession;
use zoning_ifc_core::{Entity, EntityId, Measure, SiUnitName, TargetView, UnitType};

/// Metres per foot
pub const FOOT_IN_METRES: f64 = 0.3048;

/// Precision of the 3D model context
pub const MODEL_PRECISION: f64 = 1e-5;

/// Ids of the shared records every later record refers to
#[derive(Debug, Clone, Copy)]
pub struct GeometricContexts {
    pub origin_3d: EntityId,
    pub origin_2d: EntityId,
    pub dir_x: EntityId,
    pub dir_y: EntityId,
    pub dir_z: EntityId,
    pub dir_neg_x: EntityId,
    /// Identity placement at the world origin
    pub world_placement: EntityId,
    pub units: EntityId,
    pub context_3d: EntityId,
    /// Sub-context for extruded solids
    pub body: EntityId,
    /// Sub-context for 2D outlines
    pub footprint: EntityId,
    pub annotation: EntityId,
}

impl GeometricContexts {
    pub fn build(session: &mut ExportSession) -> Self {
        let origin_3d = session.push(Entity::point3(0.0, 0.0, 0.0));
        let origin_2d = session.push(Entity::point2(0.0, 0.0));
        let dir_x = session.push(Entity::direction3(1.0, 0.0, 0.0));
        let dir_y = session.push(Entity::direction3(0.0, 1.0, 0.0));
        let dir_z = session.push(Entity::direction3(0.0, 0.0, 1.0));
        let dir_neg_x = session.push(Entity::direction3(-1.0, 0.0, 0.0));
        let world_placement = session.push(Entity::Axis2Placement3D {
            location: origin_3d,
            axis: Some(dir_z),
            ref_direction: Some(dir_x),
        });

        let units = build_units(session);

        let context_3d = session.push(Entity::GeometricRepresentationContext {
            identifier: None,
            context_type: "Model".to_string(),
            dimension: 3,
            precision: MODEL_PRECISION,
            world_coordinate_system: world_placement,
            true_north: None,
        });
        let body = sub_context(session, context_3d, "Body", "Model", TargetView::ModelView);
        let footprint = sub_context(session, context_3d, "FootPrint", "Model", TargetView::ModelView);
        let annotation = sub_context(session, context_3d, "Annotation", "Plan", TargetView::PlanView);

        Self {
            origin_3d,
            origin_2d,
            dir_x,
            dir_y,
            dir_z,
            dir_neg_x,
            world_placement,
            units,
            context_3d,
            body,
            footprint,
            annotation,
        }
    }
}

/// Foot (length), square metre (area) and radian (angle)
fn build_units(session: &mut ExportSession) -> EntityId {
    let length_exponents = session.push(Entity::DimensionalExponents {
        exponents: [1, 0, 0, 0, 0, 0, 0],
    });
    let metre = session.push(Entity::SiUnit {
        unit_type: UnitType::Length,
        name: SiUnitName::Metre,
    });
    let foot_factor = session.push(Entity::MeasureWithUnit {
        value: Measure::Length(FOOT_IN_METRES),
        unit: metre,
    });
    let foot = session.push(Entity::ConversionBasedUnit {
        dimensions: length_exponents,
        unit_type: UnitType::Length,
        name: "FOOT".to_string(),
        conversion_factor: foot_factor,
    });
    let area = session.push(Entity::SiUnit {
        unit_type: UnitType::Area,
        name: SiUnitName::SquareMetre,
    });
    let angle = session.push(Entity::SiUnit {
        unit_type: UnitType::PlaneAngle,
        name: SiUnitName::Radian,
    });
    session.push(Entity::UnitAssignment {
        units: vec![foot, area, angle],
    })
}

fn sub_context(
    session: &mut ExportSession,
    parent: EntityId,
    identifier: &str,
    context_type: &str,
    target_view: TargetView,
) -> EntityId {
    session.push(Entity::GeometricRepresentationSubContext {
        identifier: identifier.to_string(),
        context_type: context_type.to_string(),
        parent,
        target_view,
    })
}
