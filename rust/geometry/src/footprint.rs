// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! World-space outlines of lots, setback lines and building masses
//!
//! Every function takes the lot offset (the lot center in world coordinates)
//! and returns coordinates with the offset already applied.

use crate::profile::Profile2D;
use nalgebra::{Point2, Vector2};
use zoning_ifc_model::{BuildingGeometry, LotSource};

/// Square feet to square metres
pub const SQUARE_FEET_TO_SQUARE_METRES: f64 = 0.09290304;

/// A straight setback line, front-left corner first
pub type Segment = (Point2<f64>, Point2<f64>);

/// Lot outline in world coordinates
///
/// A polygon outline, when present, wins over the width/depth rectangle.
pub fn lot_footprint<L: LotSource + ?Sized>(lot: &L, offset: Vector2<f64>) -> Profile2D {
    match lot.polygon() {
        Some(vertices) => Profile2D::new(
            vertices
                .iter()
                .map(|v| Point2::new(v.x, v.y) + offset)
                .collect(),
        ),
        None => Profile2D::rectangle(Point2::from(offset), lot.lot_width(), lot.lot_depth()),
    }
}

/// Buildable rectangle left after the principal setbacks
///
/// Setbacks larger than the lot invert the rectangle; it is returned as is.
pub fn setback_inset<L: LotSource + ?Sized>(lot: &L, offset: Vector2<f64>) -> [Point2<f64>; 4] {
    let s = lot.principal_setbacks();
    let half_w = lot.lot_width() / 2.0;
    let half_d = lot.lot_depth() / 2.0;

    let min_x = offset.x - half_w + s.side_interior;
    let max_x = offset.x + half_w - s.side_street;
    let min_y = offset.y - half_d + s.front;
    let max_y = offset.y + half_d - s.rear;

    [
        Point2::new(min_x, min_y),
        Point2::new(max_x, min_y),
        Point2::new(max_x, max_y),
        Point2::new(min_x, max_y),
    ]
}

/// The four edges of the setback inset: front, street side, rear, interior side
pub fn setback_segments<L: LotSource + ?Sized>(lot: &L, offset: Vector2<f64>) -> [Segment; 4] {
    let [a, b, c, d] = setback_inset(lot, offset);
    [(a, b), (b, c), (c, d), (d, a)]
}

/// Building mass outline centered at the building position plus the lot offset
pub fn building_footprint(building: &BuildingGeometry, offset: Vector2<f64>) -> Profile2D {
    let center = Point2::new(building.x, building.y) + offset;
    Profile2D::rectangle(center, building.width, building.depth)
}

/// Lot area in square feet
pub fn lot_area<L: LotSource + ?Sized>(lot: &L) -> f64 {
    match lot.polygon() {
        Some(_) => lot_footprint(lot, Vector2::zeros()).area(),
        None => (lot.lot_width() * lot.lot_depth()).abs(),
    }
}
