// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed entity records
//!
//! One variant per IFC4 entity the encoder writes. Each variant knows its
//! attribute order; [`Entity::attributes`] lowers it to [`StepValue`]s for the
//! serializer, so no record is assembled by string concatenation.

use crate::ids::EntityId;
use crate::schema::IfcType;
use crate::value::{Measure, StepValue};
use smallvec::SmallVec;

/// Attributes shared by every `IfcRoot` subtype
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub global_id: String,
    pub owner_history: EntityId,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Root {
    pub fn new(global_id: String, owner_history: EntityId, name: Option<String>) -> Self {
        Self {
            global_id,
            owner_history,
            name,
            description: None,
        }
    }

    fn values(&self) -> [StepValue; 4] {
        [
            StepValue::String(self.global_id.clone()),
            StepValue::Ref(self.owner_history),
            StepValue::opt_string(self.name.as_deref()),
            StepValue::opt_string(self.description.as_deref()),
        ]
    }
}

/// `IfcUnitEnum` members used by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitType {
    Length,
    Area,
    PlaneAngle,
}

impl UnitType {
    pub fn token(self) -> &'static str {
        match self {
            UnitType::Length => "LENGTHUNIT",
            UnitType::Area => "AREAUNIT",
            UnitType::PlaneAngle => "PLANEANGLEUNIT",
        }
    }
}

/// `IfcSIUnitName` members used by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiUnitName {
    Metre,
    SquareMetre,
    Radian,
}

impl SiUnitName {
    pub fn token(self) -> &'static str {
        match self {
            SiUnitName::Metre => "METRE",
            SiUnitName::SquareMetre => "SQUARE_METRE",
            SiUnitName::Radian => "RADIAN",
        }
    }
}

/// `IfcGeometricProjectionEnum`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetView {
    ModelView,
    PlanView,
}

impl TargetView {
    pub fn token(self) -> &'static str {
        match self {
            TargetView::ModelView => "MODEL_VIEW",
            TargetView::PlanView => "PLAN_VIEW",
        }
    }
}

/// `IfcSlabTypeEnum` / `IfcBuildingElementProxyTypeEnum` members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredefinedType {
    BaseSlab,
    NotDefined,
}

impl PredefinedType {
    pub fn token(self) -> &'static str {
        match self {
            PredefinedType::BaseSlab => "BASESLAB",
            PredefinedType::NotDefined => "NOTDEFINED",
        }
    }
}

/// Placement plus optional product shape of a spatial element or product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductShape {
    pub placement: EntityId,
    pub representation: Option<EntityId>,
}

/// An IFC4 entity record
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    CartesianPoint {
        coordinates: SmallVec<[f64; 3]>,
    },
    Direction {
        ratios: SmallVec<[f64; 3]>,
    },
    Axis2Placement3D {
        location: EntityId,
        axis: Option<EntityId>,
        ref_direction: Option<EntityId>,
    },
    LocalPlacement {
        placement_rel_to: Option<EntityId>,
        relative_placement: EntityId,
    },
    Polyline {
        points: Vec<EntityId>,
    },
    ArbitraryClosedProfileDef {
        profile_name: Option<String>,
        outer_curve: EntityId,
    },
    ExtrudedAreaSolid {
        swept_area: EntityId,
        position: EntityId,
        extruded_direction: EntityId,
        depth: f64,
    },
    DimensionalExponents {
        exponents: [i64; 7],
    },
    SiUnit {
        unit_type: UnitType,
        name: SiUnitName,
    },
    MeasureWithUnit {
        value: Measure,
        unit: EntityId,
    },
    ConversionBasedUnit {
        dimensions: EntityId,
        unit_type: UnitType,
        name: String,
        conversion_factor: EntityId,
    },
    UnitAssignment {
        units: Vec<EntityId>,
    },
    GeometricRepresentationContext {
        identifier: Option<String>,
        context_type: String,
        dimension: i64,
        precision: f64,
        world_coordinate_system: EntityId,
        true_north: Option<EntityId>,
    },
    GeometricRepresentationSubContext {
        identifier: String,
        context_type: String,
        parent: EntityId,
        target_view: TargetView,
    },
    ShapeRepresentation {
        context: EntityId,
        identifier: String,
        representation_type: String,
        items: Vec<EntityId>,
    },
    ProductDefinitionShape {
        representations: Vec<EntityId>,
    },
    PresentationLayerAssignment {
        name: String,
        assigned_items: Vec<EntityId>,
    },
    Person {
        family_name: Option<String>,
        given_name: Option<String>,
    },
    Organization {
        name: String,
    },
    PersonAndOrganization {
        person: EntityId,
        organization: EntityId,
    },
    Application {
        developer: EntityId,
        version: String,
        full_name: String,
        identifier: String,
    },
    OwnerHistory {
        owning_user: EntityId,
        owning_application: EntityId,
        creation_date: i64,
    },
    Project {
        root: Root,
        representation_contexts: Vec<EntityId>,
        units: EntityId,
    },
    Site {
        root: Root,
        shape: ProductShape,
    },
    Building {
        root: Root,
        shape: ProductShape,
    },
    BuildingStorey {
        root: Root,
        shape: ProductShape,
        elevation: f64,
    },
    Slab {
        root: Root,
        shape: ProductShape,
        predefined_type: PredefinedType,
    },
    BuildingElementProxy {
        root: Root,
        shape: ProductShape,
        predefined_type: PredefinedType,
    },
    PropertySingleValue {
        name: String,
        nominal_value: Measure,
    },
    PropertySet {
        root: Root,
        properties: Vec<EntityId>,
    },
    RelAggregates {
        root: Root,
        relating_object: EntityId,
        related_objects: Vec<EntityId>,
    },
    RelContainedInSpatialStructure {
        root: Root,
        related_elements: Vec<EntityId>,
        relating_structure: EntityId,
    },
    RelDefinesByProperties {
        root: Root,
        related_objects: Vec<EntityId>,
        relating_property_definition: EntityId,
    },
}

impl Entity {
    pub fn point2(x: f64, y: f64) -> Self {
        Entity::CartesianPoint {
            coordinates: SmallVec::from_slice(&[x, y]),
        }
    }

    pub fn point3(x: f64, y: f64, z: f64) -> Self {
        Entity::CartesianPoint {
            coordinates: SmallVec::from_slice(&[x, y, z]),
        }
    }

    pub fn direction3(x: f64, y: f64, z: f64) -> Self {
        Entity::Direction {
            ratios: SmallVec::from_slice(&[x, y, z]),
        }
    }

    /// Entity type tag
    pub fn ifc_type(&self) -> IfcType {
        match self {
            Entity::CartesianPoint { .. } => IfcType::IfcCartesianPoint,
            Entity::Direction { .. } => IfcType::IfcDirection,
            Entity::Axis2Placement3D { .. } => IfcType::IfcAxis2Placement3D,
            Entity::LocalPlacement { .. } => IfcType::IfcLocalPlacement,
            Entity::Polyline { .. } => IfcType::IfcPolyline,
            Entity::ArbitraryClosedProfileDef { .. } => IfcType::IfcArbitraryClosedProfileDef,
            Entity::ExtrudedAreaSolid { .. } => IfcType::IfcExtrudedAreaSolid,
            Entity::DimensionalExponents { .. } => IfcType::IfcDimensionalExponents,
            Entity::SiUnit { .. } => IfcType::IfcSIUnit,
            Entity::MeasureWithUnit { .. } => IfcType::IfcMeasureWithUnit,
            Entity::ConversionBasedUnit { .. } => IfcType::IfcConversionBasedUnit,
            Entity::UnitAssignment { .. } => IfcType::IfcUnitAssignment,
            Entity::GeometricRepresentationContext { .. } => {
                IfcType::IfcGeometricRepresentationContext
            }
            Entity::GeometricRepresentationSubContext { .. } => {
                IfcType::IfcGeometricRepresentationSubContext
            }
            Entity::ShapeRepresentation { .. } => IfcType::IfcShapeRepresentation,
            Entity::ProductDefinitionShape { .. } => IfcType::IfcProductDefinitionShape,
            Entity::PresentationLayerAssignment { .. } => IfcType::IfcPresentationLayerAssignment,
            Entity::Person { .. } => IfcType::IfcPerson,
            Entity::Organization { .. } => IfcType::IfcOrganization,
            Entity::PersonAndOrganization { .. } => IfcType::IfcPersonAndOrganization,
            Entity::Application { .. } => IfcType::IfcApplication,
            Entity::OwnerHistory { .. } => IfcType::IfcOwnerHistory,
            Entity::Project { .. } => IfcType::IfcProject,
            Entity::Site { .. } => IfcType::IfcSite,
            Entity::Building { .. } => IfcType::IfcBuilding,
            Entity::BuildingStorey { .. } => IfcType::IfcBuildingStorey,
            Entity::Slab { .. } => IfcType::IfcSlab,
            Entity::BuildingElementProxy { .. } => IfcType::IfcBuildingElementProxy,
            Entity::PropertySingleValue { .. } => IfcType::IfcPropertySingleValue,
            Entity::PropertySet { .. } => IfcType::IfcPropertySet,
            Entity::RelAggregates { .. } => IfcType::IfcRelAggregates,
            Entity::RelContainedInSpatialStructure { .. } => {
                IfcType::IfcRelContainedInSpatialStructure
            }
            Entity::RelDefinesByProperties { .. } => IfcType::IfcRelDefinesByProperties,
        }
    }

    /// Attribute list in IFC4 EXPRESS order
    pub fn attributes(&self) -> Vec<StepValue> {
        use StepValue::{Derived, Enum, Integer, Null, Real, Ref};

        match self {
            Entity::CartesianPoint { coordinates } => vec![StepValue::real_list(coordinates)],
            Entity::Direction { ratios } => vec![StepValue::real_list(ratios)],
            Entity::Axis2Placement3D {
                location,
                axis,
                ref_direction,
            } => vec![
                Ref(*location),
                StepValue::opt_ref(*axis),
                StepValue::opt_ref(*ref_direction),
            ],
            Entity::LocalPlacement {
                placement_rel_to,
                relative_placement,
            } => vec![StepValue::opt_ref(*placement_rel_to), Ref(*relative_placement)],
            Entity::Polyline { points } => vec![StepValue::ref_list(points)],
            Entity::ArbitraryClosedProfileDef {
                profile_name,
                outer_curve,
            } => vec![
                Enum("AREA"),
                StepValue::opt_string(profile_name.as_deref()),
                Ref(*outer_curve),
            ],
            Entity::ExtrudedAreaSolid {
                swept_area,
                position,
                extruded_direction,
                depth,
            } => vec![
                Ref(*swept_area),
                Ref(*position),
                Ref(*extruded_direction),
                Real(*depth),
            ],
            Entity::DimensionalExponents { exponents } => {
                exponents.iter().map(|e| Integer(*e)).collect()
            }
            Entity::SiUnit { unit_type, name } => {
                vec![Derived, Enum(unit_type.token()), Null, Enum(name.token())]
            }
            Entity::MeasureWithUnit { value, unit } => vec![value.to_value(), Ref(*unit)],
            Entity::ConversionBasedUnit {
                dimensions,
                unit_type,
                name,
                conversion_factor,
            } => vec![
                Ref(*dimensions),
                Enum(unit_type.token()),
                StepValue::string(name.as_str()),
                Ref(*conversion_factor),
            ],
            Entity::UnitAssignment { units } => vec![StepValue::ref_list(units)],
            Entity::GeometricRepresentationContext {
                identifier,
                context_type,
                dimension,
                precision,
                world_coordinate_system,
                true_north,
            } => vec![
                StepValue::opt_string(identifier.as_deref()),
                StepValue::string(context_type.as_str()),
                Integer(*dimension),
                Real(*precision),
                Ref(*world_coordinate_system),
                StepValue::opt_ref(*true_north),
            ],
            Entity::GeometricRepresentationSubContext {
                identifier,
                context_type,
                parent,
                target_view,
            } => vec![
                StepValue::string(identifier.as_str()),
                StepValue::string(context_type.as_str()),
                Derived,
                Derived,
                Derived,
                Derived,
                Ref(*parent),
                Null,
                Enum(target_view.token()),
                Null,
            ],
            Entity::ShapeRepresentation {
                context,
                identifier,
                representation_type,
                items,
            } => vec![
                Ref(*context),
                StepValue::string(identifier.as_str()),
                StepValue::string(representation_type.as_str()),
                StepValue::ref_list(items),
            ],
            Entity::ProductDefinitionShape { representations } => {
                vec![Null, Null, StepValue::ref_list(representations)]
            }
            Entity::PresentationLayerAssignment {
                name,
                assigned_items,
            } => vec![
                StepValue::string(name.as_str()),
                Null,
                StepValue::ref_list(assigned_items),
                Null,
            ],
            Entity::Person {
                family_name,
                given_name,
            } => vec![
                Null,
                StepValue::opt_string(family_name.as_deref()),
                StepValue::opt_string(given_name.as_deref()),
                Null,
                Null,
                Null,
                Null,
                Null,
            ],
            Entity::Organization { name } => {
                vec![Null, StepValue::string(name.as_str()), Null, Null, Null]
            }
            Entity::PersonAndOrganization {
                person,
                organization,
            } => vec![Ref(*person), Ref(*organization), Null],
            Entity::Application {
                developer,
                version,
                full_name,
                identifier,
            } => vec![
                Ref(*developer),
                StepValue::string(version.as_str()),
                StepValue::string(full_name.as_str()),
                StepValue::string(identifier.as_str()),
            ],
            Entity::OwnerHistory {
                owning_user,
                owning_application,
                creation_date,
            } => vec![
                Ref(*owning_user),
                Ref(*owning_application),
                Null,
                Enum("ADDED"),
                Integer(*creation_date),
                Null,
                Null,
                Integer(*creation_date),
            ],
            Entity::Project {
                root,
                representation_contexts,
                units,
            } => {
                let mut attrs = root.values().to_vec();
                attrs.extend([
                    Null,
                    Null,
                    Null,
                    StepValue::ref_list(representation_contexts),
                    Ref(*units),
                ]);
                attrs
            }
            Entity::Site { root, shape } => {
                let mut attrs = product_values(root, shape);
                attrs.extend([Null, Enum("ELEMENT"), Null, Null, Null, Null, Null]);
                attrs
            }
            Entity::Building { root, shape } => {
                let mut attrs = product_values(root, shape);
                attrs.extend([Null, Enum("ELEMENT"), Null, Null, Null]);
                attrs
            }
            Entity::BuildingStorey {
                root,
                shape,
                elevation,
            } => {
                let mut attrs = product_values(root, shape);
                attrs.extend([Null, Enum("ELEMENT"), Real(*elevation)]);
                attrs
            }
            Entity::Slab {
                root,
                shape,
                predefined_type,
            }
            | Entity::BuildingElementProxy {
                root,
                shape,
                predefined_type,
            } => {
                let mut attrs = product_values(root, shape);
                attrs.extend([Null, Enum(predefined_type.token())]);
                attrs
            }
            Entity::PropertySingleValue {
                name,
                nominal_value,
            } => vec![
                StepValue::string(name.as_str()),
                Null,
                nominal_value.to_value(),
                Null,
            ],
            Entity::PropertySet { root, properties } => {
                let mut attrs = root.values().to_vec();
                attrs.push(StepValue::ref_list(properties));
                attrs
            }
            Entity::RelAggregates {
                root,
                relating_object,
                related_objects,
            } => {
                let mut attrs = root.values().to_vec();
                attrs.extend([Ref(*relating_object), StepValue::ref_list(related_objects)]);
                attrs
            }
            Entity::RelContainedInSpatialStructure {
                root,
                related_elements,
                relating_structure,
            } => {
                let mut attrs = root.values().to_vec();
                attrs.extend([StepValue::ref_list(related_elements), Ref(*relating_structure)]);
                attrs
            }
            Entity::RelDefinesByProperties {
                root,
                related_objects,
                relating_property_definition,
            } => {
                let mut attrs = root.values().to_vec();
                attrs.extend([
                    StepValue::ref_list(related_objects),
                    Ref(*relating_property_definition),
                ]);
                attrs
            }
        }
    }

    /// Every entity this record points at
    pub fn references(&self) -> Vec<EntityId> {
        let mut refs = Vec::new();
        for value in self.attributes() {
            value.collect_refs(&mut refs);
        }
        refs
    }
}

/// Root attributes followed by ObjectPlacement and Representation
fn product_values(root: &Root, shape: &ProductShape) -> Vec<StepValue> {
    let mut attrs = root.values().to_vec();
    // ObjectType
    attrs.push(StepValue::Null);
    attrs.push(StepValue::Ref(shape.placement));
    attrs.push(StepValue::opt_ref(shape.representation));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IdAllocator;
    use crate::value::write_separated;

    fn render(entity: &Entity) -> String {
        let mut out = String::new();
        write_separated(&mut out, &entity.attributes()).unwrap();
        out
    }

    #[test]
    fn test_point_and_direction() {
        assert_eq!(render(&Entity::point3(0.0, 0.0, -0.1)), "(0.0,0.0,-0.1)");
        assert_eq!(render(&Entity::point2(-25.0, 12.5)), "(-25.0,12.5)");
        assert_eq!(render(&Entity::direction3(0.0, 0.0, 1.0)), "(0.0,0.0,1.0)");
    }

    #[test]
    fn test_si_unit() {
        let unit = Entity::SiUnit {
            unit_type: UnitType::Length,
            name: SiUnitName::Metre,
        };
        assert_eq!(render(&unit), "*,.LENGTHUNIT.,$,.METRE.");
    }

    #[test]
    fn test_slab_attributes_and_references() {
        let mut ids = IdAllocator::new();
        let owner_history = ids.next_id();
        let placement = ids.next_id();
        let shape = ids.next_id();

        let slab = Entity::Slab {
            root: Root::new("0123456789ABCDEFabcdef".into(), owner_history, Some("Lot".into())),
            shape: ProductShape {
                placement,
                representation: Some(shape),
            },
            predefined_type: PredefinedType::BaseSlab,
        };

        assert_eq!(slab.ifc_type(), IfcType::IfcSlab);
        assert_eq!(
            render(&slab),
            "'0123456789ABCDEFabcdef',#1,'Lot',$,$,#2,#3,$,.BASESLAB."
        );
        assert_eq!(slab.references(), vec![owner_history, placement, shape]);
    }

    #[test]
    fn test_sub_context() {
        let mut ids = IdAllocator::new();
        let parent = ids.next_id();
        let body = Entity::GeometricRepresentationSubContext {
            identifier: "Body".into(),
            context_type: "Model".into(),
            parent,
            target_view: TargetView::ModelView,
        };
        assert_eq!(render(&body), "'Body','Model',*,*,*,*,#1,$,.MODEL_VIEW.,$");
    }
}
