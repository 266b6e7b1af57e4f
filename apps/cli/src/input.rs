// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON input files for the export subcommands.

use serde::Deserialize;
use std::collections::HashMap;
use zoning_ifc_export::ExportOptions;
use zoning_ifc_model::{ComparisonModel, Lot};

/// Existing and proposed scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonInput {
    pub existing: ComparisonModel,
    pub proposed: ComparisonModel,
    #[serde(default)]
    pub options: Option<ExportOptions>,
}

/// Lots keyed by id, exported in `entity_order`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictInput {
    pub lots: HashMap<String, Lot>,
    #[serde(default)]
    pub entity_order: Vec<String>,
    #[serde(default)]
    pub options: Option<ExportOptions>,
}
