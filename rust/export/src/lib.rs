// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Zoning IFC Export
//!
//! Converts lots, setbacks and building masses into an IFC4 STEP physical
//! file for BIM/CAD tools.
//!
//! ## Pipeline
//!
//! Every call runs once over a fresh [`ExportSession`]:
//!
//! 1. [`GeometricContexts`]: world placement, foot/m²/radian units and the
//!    Body / FootPrint / Annotation sub-contexts
//! 2. [`hierarchy`]: owner history, project, and per lot a Site, Building and
//!    Storey
//! 3. [`elements`]: lot slab, setback lines and building masses, all built
//!    from [`solids::extruded_solid`]
//! 4. [`containment`]: storey containment and presentation layers
//! 5. serialization through [`zoning_ifc_core::write_document`]
//!
//! Geometry errors abort the export; no partial document is returned.
//!
//! ```rust,ignore
//! use zoning_ifc_export::{generate_ifc, ExportOptions};
//! use zoning_ifc_model::ComparisonModel;
//!
//! let existing = ComparisonModel { lot_width: 50.0, lot_depth: 100.0, ..Default::default() };
//! let proposed = existing.clone();
//! let ifc = generate_ifc(&existing, &proposed, &ExportOptions::default())?;
//! ```

pub mod comparison;
pub mod containment;
pub mod context;
pub mod district;
pub mod elements;
pub mod error;
pub mod hierarchy;
pub mod options;
mod pipeline;
pub mod properties;
pub mod session;
pub mod solids;

pub use comparison::generate_ifc;
pub use containment::{LayerBucket, LayerSet};
pub use context::GeometricContexts;
pub use district::generate_district_ifc;
pub use elements::ElementOutput;
pub use error::{ExportError, Result};
pub use options::ExportOptions;
pub use session::ExportSession;
