// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Flattened lot shape used by the existing/proposed comparison

use crate::building::BuildingGeometry;
use crate::lot::{LotGeometry, LotSource, Point2D, Setbacks};
use serde::{Deserialize, Serialize};

/// One side of a comparison: a lot with a single building mass
///
/// Missing numbers read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonModel {
    pub lot_width: f64,
    pub lot_depth: f64,
    pub setback_front: f64,
    pub setback_rear: f64,
    pub setback_side_interior: f64,
    pub setback_side_street: f64,
    pub building_width: f64,
    pub building_depth: f64,
    pub building_height: f64,
    pub building_x: f64,
    pub building_y: f64,
    pub lot_geometry: Option<LotGeometry>,
}

impl ComparisonModel {
    pub fn setbacks(&self) -> Setbacks {
        Setbacks {
            front: self.setback_front,
            rear: self.setback_rear,
            side_interior: self.setback_side_interior,
            side_street: self.setback_side_street,
        }
    }

    pub fn building(&self) -> BuildingGeometry {
        BuildingGeometry {
            width: self.building_width,
            depth: self.building_depth,
            x: self.building_x,
            y: self.building_y,
            height: self.building_height,
            stories: None,
        }
    }
}

impl LotSource for ComparisonModel {
    fn lot_width(&self) -> f64 {
        self.lot_width
    }

    fn lot_depth(&self) -> f64 {
        self.lot_depth
    }

    fn principal_setbacks(&self) -> Setbacks {
        self.setbacks()
    }

    fn polygon(&self) -> Option<&[Point2D]> {
        self.lot_geometry.as_ref().and_then(LotGeometry::polygon)
    }
}
