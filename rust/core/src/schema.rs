// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC Schema Types
//!
//! The IFC4 entity types this encoder writes, as an enum instead of
//! free-form type strings.

use std::fmt;

/// IFC Entity Types emitted by the zoning encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfcType {
    // Geometry resources
    IfcCartesianPoint,
    IfcDirection,
    IfcAxis2Placement3D,
    IfcLocalPlacement,
    IfcPolyline,
    IfcArbitraryClosedProfileDef,
    IfcExtrudedAreaSolid,

    // Units
    IfcDimensionalExponents,
    IfcSIUnit,
    IfcMeasureWithUnit,
    IfcConversionBasedUnit,
    IfcUnitAssignment,

    // Representation
    IfcGeometricRepresentationContext,
    IfcGeometricRepresentationSubContext,
    IfcShapeRepresentation,
    IfcProductDefinitionShape,
    IfcPresentationLayerAssignment,

    // Actors
    IfcPerson,
    IfcOrganization,
    IfcPersonAndOrganization,
    IfcApplication,
    IfcOwnerHistory,

    // Spatial structure
    IfcProject,
    IfcSite,
    IfcBuilding,
    IfcBuildingStorey,

    // Elements
    IfcSlab,
    IfcBuildingElementProxy,

    // Properties
    IfcPropertySingleValue,
    IfcPropertySet,

    // Relationships
    IfcRelAggregates,
    IfcRelContainedInSpatialStructure,
    IfcRelDefinesByProperties,
}

impl IfcType {
    /// Parse IFC type from its upper-case STEP keyword
    pub fn from_str(s: &str) -> Option<Self> {
        let t = match s {
            "IFCCARTESIANPOINT" => Self::IfcCartesianPoint,
            "IFCDIRECTION" => Self::IfcDirection,
            "IFCAXIS2PLACEMENT3D" => Self::IfcAxis2Placement3D,
            "IFCLOCALPLACEMENT" => Self::IfcLocalPlacement,
            "IFCPOLYLINE" => Self::IfcPolyline,
            "IFCARBITRARYCLOSEDPROFILEDEF" => Self::IfcArbitraryClosedProfileDef,
            "IFCEXTRUDEDAREASOLID" => Self::IfcExtrudedAreaSolid,

            "IFCDIMENSIONALEXPONENTS" => Self::IfcDimensionalExponents,
            "IFCSIUNIT" => Self::IfcSIUnit,
            "IFCMEASUREWITHUNIT" => Self::IfcMeasureWithUnit,
            "IFCCONVERSIONBASEDUNIT" => Self::IfcConversionBasedUnit,
            "IFCUNITASSIGNMENT" => Self::IfcUnitAssignment,

            "IFCGEOMETRICREPRESENTATIONCONTEXT" => Self::IfcGeometricRepresentationContext,
            "IFCGEOMETRICREPRESENTATIONSUBCONTEXT" => Self::IfcGeometricRepresentationSubContext,
            "IFCSHAPEREPRESENTATION" => Self::IfcShapeRepresentation,
            "IFCPRODUCTDEFINITIONSHAPE" => Self::IfcProductDefinitionShape,
            "IFCPRESENTATIONLAYERASSIGNMENT" => Self::IfcPresentationLayerAssignment,

            "IFCPERSON" => Self::IfcPerson,
            "IFCORGANIZATION" => Self::IfcOrganization,
            "IFCPERSONANDORGANIZATION" => Self::IfcPersonAndOrganization,
            "IFCAPPLICATION" => Self::IfcApplication,
            "IFCOWNERHISTORY" => Self::IfcOwnerHistory,

            "IFCPROJECT" => Self::IfcProject,
            "IFCSITE" => Self::IfcSite,
            "IFCBUILDING" => Self::IfcBuilding,
            "IFCBUILDINGSTOREY" => Self::IfcBuildingStorey,

            "IFCSLAB" => Self::IfcSlab,
            "IFCBUILDINGELEMENTPROXY" => Self::IfcBuildingElementProxy,

            "IFCPROPERTYSINGLEVALUE" => Self::IfcPropertySingleValue,
            "IFCPROPERTYSET" => Self::IfcPropertySet,

            "IFCRELAGGREGATES" => Self::IfcRelAggregates,
            "IFCRELCONTAINEDINSPATIALSTRUCTURE" => Self::IfcRelContainedInSpatialStructure,
            "IFCRELDEFINESBYPROPERTIES" => Self::IfcRelDefinesByProperties,

            _ => return None,
        };
        Some(t)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IfcCartesianPoint => "IFCCARTESIANPOINT",
            Self::IfcDirection => "IFCDIRECTION",
            Self::IfcAxis2Placement3D => "IFCAXIS2PLACEMENT3D",
            Self::IfcLocalPlacement => "IFCLOCALPLACEMENT",
            Self::IfcPolyline => "IFCPOLYLINE",
            Self::IfcArbitraryClosedProfileDef => "IFCARBITRARYCLOSEDPROFILEDEF",
            Self::IfcExtrudedAreaSolid => "IFCEXTRUDEDAREASOLID",

            Self::IfcDimensionalExponents => "IFCDIMENSIONALEXPONENTS",
            Self::IfcSIUnit => "IFCSIUNIT",
            Self::IfcMeasureWithUnit => "IFCMEASUREWITHUNIT",
            Self::IfcConversionBasedUnit => "IFCCONVERSIONBASEDUNIT",
            Self::IfcUnitAssignment => "IFCUNITASSIGNMENT",

            Self::IfcGeometricRepresentationContext => "IFCGEOMETRICREPRESENTATIONCONTEXT",
            Self::IfcGeometricRepresentationSubContext => "IFCGEOMETRICREPRESENTATIONSUBCONTEXT",
            Self::IfcShapeRepresentation => "IFCSHAPEREPRESENTATION",
            Self::IfcProductDefinitionShape => "IFCPRODUCTDEFINITIONSHAPE",
            Self::IfcPresentationLayerAssignment => "IFCPRESENTATIONLAYERASSIGNMENT",

            Self::IfcPerson => "IFCPERSON",
            Self::IfcOrganization => "IFCORGANIZATION",
            Self::IfcPersonAndOrganization => "IFCPERSONANDORGANIZATION",
            Self::IfcApplication => "IFCAPPLICATION",
            Self::IfcOwnerHistory => "IFCOWNERHISTORY",

            Self::IfcProject => "IFCPROJECT",
            Self::IfcSite => "IFCSITE",
            Self::IfcBuilding => "IFCBUILDING",
            Self::IfcBuildingStorey => "IFCBUILDINGSTOREY",

            Self::IfcSlab => "IFCSLAB",
            Self::IfcBuildingElementProxy => "IFCBUILDINGELEMENTPROXY",

            Self::IfcPropertySingleValue => "IFCPROPERTYSINGLEVALUE",
            Self::IfcPropertySet => "IFCPROPERTYSET",

            Self::IfcRelAggregates => "IFCRELAGGREGATES",
            Self::IfcRelContainedInSpatialStructure => "IFCRELCONTAINEDINSPATIALSTRUCTURE",
            Self::IfcRelDefinesByProperties => "IFCRELDEFINESBYPROPERTIES",
        }
    }

    /// Check if this is a spatial structure element
    pub fn is_spatial(&self) -> bool {
        matches!(
            self,
            Self::IfcProject | Self::IfcSite | Self::IfcBuilding | Self::IfcBuildingStorey
        )
    }

    /// Check if this is a building element
    pub fn is_building_element(&self) -> bool {
        matches!(self, Self::IfcSlab | Self::IfcBuildingElementProxy)
    }

    /// Check if this is a relationship
    pub fn is_relationship(&self) -> bool {
        matches!(
            self,
            Self::IfcRelAggregates
                | Self::IfcRelContainedInSpatialStructure
                | Self::IfcRelDefinesByProperties
        )
    }

    /// Rooted entities carry a GlobalId and an owner history
    pub fn is_rooted(&self) -> bool {
        self.is_spatial()
            || self.is_building_element()
            || self.is_relationship()
            || matches!(self, Self::IfcPropertySet)
    }
}

impl fmt::Display for IfcType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(IfcType::from_str("IFCSLAB"), Some(IfcType::IfcSlab));
        assert_eq!(IfcType::from_str("IFCSITE"), Some(IfcType::IfcSite));
        assert_eq!(IfcType::from_str("IFCPROJECT"), Some(IfcType::IfcProject));
    }

    #[test]
    fn test_round_trip_names() {
        let all = [
            IfcType::IfcGeometricRepresentationSubContext,
            IfcType::IfcRelContainedInSpatialStructure,
            IfcType::IfcPresentationLayerAssignment,
            IfcType::IfcSIUnit,
        ];
        for t in all {
            assert_eq!(IfcType::from_str(t.as_str()), Some(t));
        }
    }

    #[test]
    fn test_is_spatial() {
        assert!(IfcType::IfcProject.is_spatial());
        assert!(IfcType::IfcBuildingStorey.is_spatial());
        assert!(!IfcType::IfcSlab.is_spatial());
    }

    #[test]
    fn test_is_building_element() {
        assert!(IfcType::IfcBuildingElementProxy.is_building_element());
        assert!(!IfcType::IfcProject.is_building_element());
    }

    #[test]
    fn test_is_rooted() {
        assert!(IfcType::IfcRelDefinesByProperties.is_relationship());
        assert!(IfcType::IfcPropertySet.is_rooted());
        assert!(IfcType::IfcSite.is_rooted());
        assert!(!IfcType::IfcOwnerHistory.is_rooted());
        assert!(!IfcType::IfcPropertySingleValue.is_rooted());
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(IfcType::from_str("IFCWALL"), None);
        assert_eq!(IfcType::from_str("ifcslab"), None);
    }
}
