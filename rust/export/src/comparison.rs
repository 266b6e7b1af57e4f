// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Existing vs. proposed comparison export

use crate::containment::LayerBucket;
use crate::error::Result;
use crate::options::{ExportOptions, COMPARISON_DEFAULTS};
use crate::pipeline::{DocumentBuilder, LotRequest, MassRequest};
use zoning_ifc_geometry::comparison_offsets;
use zoning_ifc_model::ComparisonModel;

/// Export an existing and a proposed lot side by side as one IFC4 document
///
/// Each model gets its own site with a lot slab, setback lines and one
/// building mass. The mass is written even when its footprint is empty.
pub fn generate_ifc(
    existing: &ComparisonModel,
    proposed: &ComparisonModel,
    options: &ExportOptions,
) -> Result<String> {
    let options = options.resolve(COMPARISON_DEFAULTS);
    let offsets = comparison_offsets(
        (existing.lot_width, existing.lot_depth),
        (proposed.lot_width, proposed.lot_depth),
        options.lot_spacing,
    );

    tracing::info!(
        spacing = options.lot_spacing,
        filename = %options.filename,
        "Exporting zoning comparison"
    );

    let mut builder = DocumentBuilder::new(&options);
    for ((label, model), offset) in [("Existing", existing), ("Proposed", proposed)]
        .into_iter()
        .zip(offsets)
    {
        builder.add_lot(LotRequest {
            lot: model,
            site_name: format!("{} Lot", label),
            building_name: format!("{} Building", label),
            label: label.to_string(),
            offset,
            masses: vec![MassRequest {
                name: format!("{} Building Mass", label),
                geometry: model.building(),
                bucket: LayerBucket::Buildings,
            }],
        })?;
    }

    builder.finish()
}
