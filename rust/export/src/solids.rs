// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Extruded area solids from closed 2D profiles
//!
//! The only geometry primitive in the document. Rectangles are 4-vertex
//! profiles through the same path.

use crate::context::GeometricContexts;
use crate::hierarchy::closed_polyline;
use crate::session::ExportSession;
use zoning_ifc_core::{Entity, EntityId};
use zoning_ifc_geometry::{line_strip, validate_extrusion, Point2, Profile2D, Result};

/// Extrude `profile` upwards by `height`, starting at `z_offset`
///
/// The profile and height are checked before any record is written.
pub fn extruded_solid(
    session: &mut ExportSession,
    contexts: &GeometricContexts,
    profile: &Profile2D,
    height: f64,
    z_offset: f64,
) -> Result<EntityId> {
    profile.validate()?;
    validate_extrusion(height)?;

    let outer_curve = closed_polyline(session, profile);
    let swept_area = session.push(Entity::ArbitraryClosedProfileDef {
        profile_name: None,
        outer_curve,
    });

    let location = session.push(Entity::point3(0.0, 0.0, z_offset));
    let position = session.push(Entity::Axis2Placement3D {
        location,
        axis: Some(contexts.dir_z),
        ref_direction: Some(contexts.dir_x),
    });
    let extruded_direction = session.push(Entity::direction3(0.0, 0.0, 1.0));

    Ok(session.push(Entity::ExtrudedAreaSolid {
        swept_area,
        position,
        extruded_direction,
        depth: height,
    }))
}

/// A drawn line as a thin extruded rectangle
///
/// Returns `Ok(None)` for a zero-length segment.
pub fn line_strip_solid(
    session: &mut ExportSession,
    contexts: &GeometricContexts,
    start: Point2<f64>,
    end: Point2<f64>,
    width: f64,
    height: f64,
    z_offset: f64,
) -> Result<Option<EntityId>> {
    match line_strip(start, end, width) {
        Some(profile) => extruded_solid(session, contexts, &profile, height, z_offset).map(Some),
        None => Ok(None),
    }
}
