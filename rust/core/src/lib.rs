// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Zoning IFC Core
//!
//! Building blocks for writing IFC4 STEP physical files (ISO-10303-21).
//!
//! ## Overview
//!
//! - **Typed records**: [`Entity`] holds one IFC4 record with its attributes
//!   in schema order, lowered to [`StepValue`]s on output
//! - **Identifiers**: [`EntityStore`] hands out contiguous `#n` ids starting
//!   at 1 and refuses (in debug builds) records that reference unissued ids
//! - **GUIDs**: [`GuidSource`] draws 22-character identifiers from the IFC
//!   base-64 alphabet, optionally from a fixed seed
//! - **Serialization**: [`write_document`] renders HEADER and DATA sections
//! - **Verification**: [`verify_document`] reads a document back with a
//!   [nom](https://docs.rs/nom) tokenizer and checks ids and references
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zoning_ifc_core::{Entity, EntityStore, FileHeader, write_document, verify_document};
//!
//! let mut store = EntityStore::new();
//! let origin = store.push(Entity::point3(0.0, 0.0, 0.0));
//! store.push(Entity::Axis2Placement3D { location: origin, axis: None, ref_direction: None });
//!
//! let text = write_document(&FileHeader::new("a.ifc", chrono::Utc::now()), &store);
//! assert_eq!(verify_document(&text)?.entity_count, 2);
//! ```

pub mod document;
pub mod entity;
pub mod error;
pub mod ids;
pub mod parser;
pub mod schema;
pub mod store;
pub mod value;
pub mod verify;

pub use document::{write_document, FileHeader, SCHEMA, VIEW_DEFINITION};
pub use entity::{
    Entity, PredefinedType, ProductShape, Root, SiUnitName, TargetView, UnitType,
};
pub use error::{Error, Result};
pub use ids::{EntityId, GuidSource, IdAllocator, GUID_ALPHABET, GUID_LENGTH};
pub use parser::{parse_entity, Token};
pub use schema::IfcType;
pub use store::EntityStore;
pub use value::{encode_string, format_real, Measure, StepValue};
pub use verify::{verify_document, DocumentSummary};
