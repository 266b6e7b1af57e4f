// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene layout: where each lot's center sits in world coordinates
//!
//! The 3D scene and the IFC export both place lots with these functions, so
//! exported geometry lines up with what is drawn on screen. Lots sit with
//! their front edge on `y = 0`.

use nalgebra::Vector2;

/// Lot centers for an existing/proposed pair placed side by side
///
/// The existing lot sits left of the origin, the proposed lot right of it,
/// with `spacing` feet between them.
pub fn comparison_offsets(
    existing: (f64, f64),
    proposed: (f64, f64),
    spacing: f64,
) -> [Vector2<f64>; 2] {
    let (existing_width, existing_depth) = existing;
    let (proposed_width, proposed_depth) = proposed;
    [
        Vector2::new(-(spacing / 2.0) - existing_width / 2.0, existing_depth / 2.0),
        Vector2::new(spacing / 2.0 + proposed_width / 2.0, proposed_depth / 2.0),
    ]
}

/// Lot centers for a district row, given `(width, depth)` in display order
///
/// The first lot starts at the origin and extends to +X. Every following lot
/// is packed leftward of the previous one, `spacing` feet apart.
pub fn district_offsets(lots: &[(f64, f64)], spacing: f64) -> Vec<Vector2<f64>> {
    let mut offsets = Vec::with_capacity(lots.len());
    let mut neg_offset = 0.0;

    for (i, &(width, depth)) in lots.iter().enumerate() {
        let center_x = if i == 0 {
            width / 2.0
        } else {
            neg_offset -= width;
            let center = neg_offset + width / 2.0;
            neg_offset -= spacing;
            center
        };
        offsets.push(Vector2::new(center_x, depth / 2.0));
    }

    offsets
}
