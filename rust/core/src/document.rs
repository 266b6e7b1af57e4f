// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ISO-10303-21 document assembly (HEADER, DATA, footer)

use crate::store::EntityStore;
use crate::value::{encode_string, write_separated};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Schema identifier written to `FILE_SCHEMA`
pub const SCHEMA: &str = "IFC4";

/// Model view definition written to `FILE_DESCRIPTION`
pub const VIEW_DEFINITION: &str = "ViewDefinition [DesignTransferView]";

/// Contents of the HEADER section
#[derive(Debug, Clone)]
pub struct FileHeader {
    pub filename: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub organization: String,
    /// Preprocessor version and originating system
    pub application: String,
}

impl FileHeader {
    pub fn new(filename: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            filename: filename.into(),
            timestamp,
            author: String::new(),
            organization: String::new(),
            application: concat!("zoning-ifc ", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// ISO-8601 timestamp truncated to seconds
    pub fn time_stamp(&self) -> String {
        self.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Render a complete STEP physical file
pub fn write_document(header: &FileHeader, store: &EntityStore) -> String {
    // Rough estimate: ~80 bytes per record
    let mut out = String::with_capacity(512 + store.len() * 80);

    // Writing to a String cannot fail
    let _ = write_header(&mut out, header);
    out.push_str("DATA;\n");
    for (id, entity) in store.iter() {
        let _ = write!(out, "#{}={}(", id, entity.ifc_type());
        let _ = write_separated(&mut out, &entity.attributes());
        out.push_str(");\n");
    }
    out.push_str("ENDSEC;\n");
    out.push_str("END-ISO-10303-21;\n");
    out
}

fn write_header(out: &mut String, header: &FileHeader) -> std::fmt::Result {
    writeln!(out, "ISO-10303-21;")?;
    writeln!(out, "HEADER;")?;
    writeln!(out, "FILE_DESCRIPTION(('{}'),'2;1');", VIEW_DEFINITION)?;
    writeln!(
        out,
        "FILE_NAME('{}','{}',('{}'),('{}'),'{}','{}','');",
        encode_string(&header.filename),
        header.time_stamp(),
        encode_string(&header.author),
        encode_string(&header.organization),
        encode_string(&header.application),
        encode_string(&header.application),
    )?;
    writeln!(out, "FILE_SCHEMA(('{}'));", SCHEMA)?;
    writeln!(out, "ENDSEC;")
}
