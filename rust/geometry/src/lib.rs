// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zoning IFC Geometry
//!
//! 2D math behind the exported solids, using nalgebra points: closed profile
//! checks, line strips, lot/setback/building outlines and the shared scene
//! layout.

pub mod error;
pub mod footprint;
pub mod layout;
pub mod profile;
pub mod strip;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Vector2};

pub use error::{Error, Result};
pub use footprint::{
    building_footprint, lot_area, lot_footprint, setback_inset, setback_segments, Segment,
    SQUARE_FEET_TO_SQUARE_METRES,
};
pub use layout::{comparison_offsets, district_offsets};
pub use profile::{validate_extrusion, Profile2D, AREA_EPSILON, VERTEX_EPSILON};
pub use strip::line_strip;
