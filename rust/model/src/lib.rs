// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Zoning IFC Model
//!
//! Read-only input to the IFC encoder, deserialized from camelCase JSON.
//!
//! Two shapes describe a lot:
//!
//! - [`ComparisonModel`]: flattened `buildingWidth`/`buildingHeight`/... fields,
//!   one building per lot, used for existing/proposed comparisons
//! - [`Lot`]: nested `setbacks` and `buildings.principal`/`buildings.accessory`,
//!   used for districts
//!
//! Both reduce to [`BuildingGeometry`] and [`LotSource`], which is all the
//! encoder reads.

pub mod building;
pub mod comparison;
pub mod lot;

pub use building::{
    BuildingGeometry, BuildingSpec, DEFAULT_FIRST_FLOOR_HEIGHT, DEFAULT_UPPER_FLOOR_HEIGHT,
};
pub use comparison::ComparisonModel;
pub use lot::{Buildings, GeometryMode, Lot, LotGeometry, LotSource, Point2D, SetbackSet, Setbacks};
