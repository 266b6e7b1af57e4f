// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Project / Site / Building / Storey records and their relationships
//!
//! Placement nesting carries the geometric parent/child link; `aggregate` and
//! `contain` only record ownership.

use crate::context::GeometricContexts;
use crate::session::ExportSession;
use zoning_ifc_core::{Entity, EntityId, ProductShape};
use zoning_ifc_geometry::Profile2D;

/// Name written to every storey
pub const STOREY_NAME: &str = "Ground Level";

/// Identity of the exporting application in the owner history
pub const APPLICATION_NAME: &str = "Zoning IFC Export";
pub const APPLICATION_IDENTIFIER: &str = "zoning-ifc";

/// Family name of the owning person when no author is given
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// The project record and the owner history every rooted record points to
#[derive(Debug, Clone, Copy)]
pub struct ProjectRefs {
    pub project: EntityId,
    pub owner_history: EntityId,
}

/// A spatial structure element and its local placement
#[derive(Debug, Clone, Copy)]
pub struct SpatialNode {
    pub id: EntityId,
    pub placement: EntityId,
}

/// Actors, owner history and the project
///
/// An empty author is written as [`UNKNOWN_AUTHOR`], an empty organization as
/// the application name. The owner history is stamped `.ADDED.` with the
/// export time as both creation and last-modified date.
pub fn project(
    session: &mut ExportSession,
    contexts: &GeometricContexts,
    name: &str,
    author: &str,
    organization: &str,
) -> ProjectRefs {
    let person = session.push(Entity::Person {
        family_name: Some(non_empty(author).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())),
        given_name: None,
    });
    let organization = session.push(Entity::Organization {
        name: non_empty(organization).unwrap_or_else(|| APPLICATION_NAME.to_string()),
    });
    let owning_user = session.push(Entity::PersonAndOrganization {
        person,
        organization,
    });
    let application = session.push(Entity::Application {
        developer: organization,
        version: env!("CARGO_PKG_VERSION").to_string(),
        full_name: APPLICATION_NAME.to_string(),
        identifier: APPLICATION_IDENTIFIER.to_string(),
    });
    let creation_date = session.timestamp().timestamp();
    let owner_history = session.push(Entity::OwnerHistory {
        owning_user,
        owning_application: application,
        creation_date,
    });

    let root = session.root(owner_history, Some(name.to_string()));
    let project = session.push(Entity::Project {
        root,
        representation_contexts: vec![contexts.context_3d],
        units: contexts.units,
    });

    ProjectRefs {
        project,
        owner_history,
    }
}

/// Site at the world origin with its 2D footprint outline
///
/// `footprint` is already in world coordinates.
pub fn site(
    session: &mut ExportSession,
    contexts: &GeometricContexts,
    owner_history: EntityId,
    footprint: &Profile2D,
    name: &str,
) -> SpatialNode {
    let placement = session.push(Entity::LocalPlacement {
        placement_rel_to: None,
        relative_placement: contexts.world_placement,
    });

    let outline = closed_polyline(session, footprint);
    let shape_rep = session.push(Entity::ShapeRepresentation {
        context: contexts.footprint,
        identifier: "FootPrint".to_string(),
        representation_type: "Curve2D".to_string(),
        items: vec![outline],
    });
    let product_shape = session.push(Entity::ProductDefinitionShape {
        representations: vec![shape_rep],
    });

    let root = session.root(owner_history, Some(name.to_string()));
    let id = session.push(Entity::Site {
        root,
        shape: ProductShape {
            placement,
            representation: Some(product_shape),
        },
    });

    SpatialNode { id, placement }
}

/// Building placed relative to its site with no extra offset
pub fn building(
    session: &mut ExportSession,
    contexts: &GeometricContexts,
    owner_history: EntityId,
    site: &SpatialNode,
    name: &str,
) -> SpatialNode {
    let placement = session.push(Entity::LocalPlacement {
        placement_rel_to: Some(site.placement),
        relative_placement: contexts.world_placement,
    });
    let root = session.root(owner_history, Some(name.to_string()));
    let id = session.push(Entity::Building {
        root,
        shape: ProductShape {
            placement,
            representation: None,
        },
    });
    SpatialNode { id, placement }
}

/// Storey at `(0, 0, elevation)` relative to its building
pub fn storey(
    session: &mut ExportSession,
    contexts: &GeometricContexts,
    owner_history: EntityId,
    building: &SpatialNode,
    elevation: f64,
) -> SpatialNode {
    let location = session.push(Entity::point3(0.0, 0.0, elevation));
    let axis = session.push(Entity::Axis2Placement3D {
        location,
        axis: Some(contexts.dir_z),
        ref_direction: Some(contexts.dir_x),
    });
    let placement = session.push(Entity::LocalPlacement {
        placement_rel_to: Some(building.placement),
        relative_placement: axis,
    });
    let root = session.root(owner_history, Some(STOREY_NAME.to_string()));
    let id = session.push(Entity::BuildingStorey {
        root,
        shape: ProductShape {
            placement,
            representation: None,
        },
        elevation,
    });
    SpatialNode { id, placement }
}

/// Record `parent` as the owner of `children`
pub fn aggregate(
    session: &mut ExportSession,
    owner_history: EntityId,
    parent: EntityId,
    children: &[EntityId],
) -> EntityId {
    let root = session.root(owner_history, None);
    session.push(Entity::RelAggregates {
        root,
        relating_object: parent,
        related_objects: children.to_vec(),
    })
}

/// Place `elements` in `storey`
pub fn contain(
    session: &mut ExportSession,
    owner_history: EntityId,
    storey: EntityId,
    elements: &[EntityId],
) -> EntityId {
    let root = session.root(owner_history, None);
    session.push(Entity::RelContainedInSpatialStructure {
        root,
        related_elements: elements.to_vec(),
        relating_structure: storey,
    })
}

/// 2D points for the outline plus a polyline closed by repeating the first point
pub(crate) fn closed_polyline(session: &mut ExportSession, profile: &Profile2D) -> EntityId {
    let mut points: Vec<EntityId> = profile
        .outer
        .iter()
        .map(|p| session.push(Entity::point2(p.x, p.y)))
        .collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    session.push(Entity::Polyline { points })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use zoning_ifc_core::StepValue;
    use zoning_ifc_geometry::Point2;

    fn session() -> (ExportSession, GeometricContexts) {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut session = ExportSession::new(ts, Some(3));
        let contexts = GeometricContexts::build(&mut session);
        (session, contexts)
    }

    #[test]
    fn test_hierarchy_placements_nest() {
        let (mut session, contexts) = session();
        let refs = project(&mut session, &contexts, "Test", "", "");
        let footprint = Profile2D::rectangle(Point2::new(0.0, 50.0), 50.0, 100.0);

        let site = site(&mut session, &contexts, refs.owner_history, &footprint, "Lot");
        let building = building(&mut session, &contexts, refs.owner_history, &site, "Building");
        let storey = storey(&mut session, &contexts, refs.owner_history, &building, 0.0);

        assert!(refs.project < site.id);
        assert!(site.id < building.placement);
        match session.store().get(building.placement) {
            Some(Entity::LocalPlacement {
                placement_rel_to, ..
            }) => assert_eq!(*placement_rel_to, Some(site.placement)),
            other => panic!("unexpected record {:?}", other),
        }
        match session.store().get(storey.id) {
            Some(Entity::BuildingStorey { root, .. }) => {
                assert_eq!(root.name.as_deref(), Some(STOREY_NAME))
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_closed_polyline_repeats_first_point() {
        let (mut session, _) = session();
        let profile = Profile2D::rectangle(Point2::origin(), 2.0, 2.0);
        let polyline = closed_polyline(&mut session, &profile);

        match session.store().get(polyline) {
            Some(Entity::Polyline { points }) => {
                assert_eq!(points.len(), 5);
                assert_eq!(points.first(), points.last());
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_owner_history_uses_export_time() {
        let (mut session, contexts) = session();
        let refs = project(&mut session, &contexts, "Test", "Planner", "City");
        match session.store().get(refs.owner_history) {
            Some(Entity::OwnerHistory { creation_date, .. }) => {
                assert_eq!(*creation_date, 1_704_067_200)
            }
            other => panic!("unexpected record {:?}", other),
        }

        // .ADDED. is only allowed together with a last-modified date
        let args = session
            .store()
            .get(refs.owner_history)
            .map(|e| e.attributes())
            .unwrap();
        assert_eq!(args[3], StepValue::Enum("ADDED"));
        assert_eq!(args[4], StepValue::Integer(1_704_067_200));
        assert_eq!(args[7], args[4]);
    }

    #[test]
    fn test_person_always_has_a_name() {
        let (mut session, contexts) = session();
        project(&mut session, &contexts, "Test", "  ", "");
        let person = session
            .store()
            .iter()
            .find_map(|(_, e)| match e {
                Entity::Person { family_name, .. } => Some(family_name.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(person.as_deref(), Some(UNKNOWN_AUTHOR));
    }
}
