// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;
use zoning_ifc_geometry::Error as GeometryError;

/// Result type for document export
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that abort an export; no partial document is returned
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("Invalid geometry for '{element}': {reason}")]
    InvalidGeometry { element: String, reason: String },

    #[error("Invalid extrusion for '{element}': {reason}")]
    InvalidExtrusion { element: String, reason: String },

    #[error("No lots to export")]
    EmptyInput,
}

impl ExportError {
    /// Attach the name of the element whose geometry failed
    pub fn for_element(element: &str, err: GeometryError) -> Self {
        let element = element.to_string();
        match err {
            GeometryError::InvalidGeometry(reason) => ExportError::InvalidGeometry { element, reason },
            GeometryError::InvalidExtrusion(reason) => {
                ExportError::InvalidExtrusion { element, reason }
            }
        }
    }
}
