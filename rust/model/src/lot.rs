// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lots, setbacks and lot geometry
//!
//! All lengths are in feet. Polygon vertices are lot-local: the origin is the
//! lot center, +Y runs from the front (street) edge towards the rear.

use crate::building::BuildingSpec;
use serde::{Deserialize, Serialize};

/// A 2D vertex in feet
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Required minimum distances from each lot edge
///
/// Values may exceed the lot dimensions; the resulting geometry is then
/// degenerate but still exported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Setbacks {
    pub front: f64,
    pub rear: f64,
    pub side_interior: f64,
    pub side_street: f64,
}

/// Setbacks per building type
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetbackSet {
    pub principal: Setbacks,
    pub accessory: Setbacks,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryMode {
    Polygon,
    #[default]
    Rectangle,
}

/// Optional drawn lot outline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotGeometry {
    pub mode: GeometryMode,
    pub vertices: Vec<Point2D>,
}

impl LotGeometry {
    /// The polygon outline, when it overrides the width/depth rectangle
    pub fn polygon(&self) -> Option<&[Point2D]> {
        match self.mode {
            GeometryMode::Polygon if self.vertices.len() >= 3 => Some(&self.vertices),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buildings {
    pub principal: Option<BuildingSpec>,
    pub accessory: Option<BuildingSpec>,
}

/// One lot of a district
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lot {
    pub name: Option<String>,
    pub lot_width: f64,
    pub lot_depth: f64,
    pub setbacks: SetbackSet,
    pub lot_geometry: Option<LotGeometry>,
    pub buildings: Buildings,
}

/// Read access to the lot data every element generator needs
///
/// Implemented by both input shapes so the generators never look at which
/// one they were handed.
pub trait LotSource {
    fn lot_width(&self) -> f64;

    fn lot_depth(&self) -> f64;

    /// Setbacks used for the setback lines
    fn principal_setbacks(&self) -> Setbacks;

    /// Lot-local polygon outline, if one overrides the rectangle
    fn polygon(&self) -> Option<&[Point2D]>;
}

impl LotSource for Lot {
    fn lot_width(&self) -> f64 {
        self.lot_width
    }

    fn lot_depth(&self) -> f64 {
        self.lot_depth
    }

    fn principal_setbacks(&self) -> Setbacks {
        self.setbacks.principal
    }

    fn polygon(&self) -> Option<&[Point2D]> {
        self.lot_geometry.as_ref().and_then(LotGeometry::polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_needs_three_vertices() {
        let mut geometry = LotGeometry {
            mode: GeometryMode::Polygon,
            vertices: vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)],
        };
        assert!(geometry.polygon().is_none());

        geometry.vertices.push(Point2D::new(1.0, 1.0));
        assert_eq!(geometry.polygon().map(|v| v.len()), Some(3));
    }

    #[test]
    fn test_rectangle_mode_ignores_vertices() {
        let geometry = LotGeometry {
            mode: GeometryMode::Rectangle,
            vertices: vec![Point2D::default(); 4],
        };
        assert!(geometry.polygon().is_none());
    }
}
