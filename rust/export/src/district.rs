// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Multi-lot district export

use crate::containment::LayerBucket;
use crate::error::{ExportError, Result};
use crate::options::{ExportOptions, DISTRICT_DEFAULTS};
use crate::pipeline::{DocumentBuilder, LotRequest, MassRequest};
use std::collections::HashMap;
use zoning_ifc_geometry::district_offsets;
use zoning_ifc_model::{BuildingSpec, Lot};

/// Export the lots of a district, packed in `entity_order`, as one IFC4 document
///
/// Ids missing from `lots` are skipped. Building masses are written only for
/// buildings with a positive width and depth.
pub fn generate_district_ifc<S>(
    lots: &HashMap<String, Lot, S>,
    entity_order: &[String],
    options: &ExportOptions,
) -> Result<String>
where
    S: std::hash::BuildHasher,
{
    let options = options.resolve(DISTRICT_DEFAULTS);

    let resolved: Vec<&Lot> = entity_order
        .iter()
        .filter_map(|id| {
            let lot = lots.get(id);
            if lot.is_none() {
                tracing::warn!(lot_id = %id, "Lot in display order not found, skipping");
            }
            lot
        })
        .collect();

    if resolved.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let dimensions: Vec<(f64, f64)> = resolved
        .iter()
        .map(|lot| (lot.lot_width, lot.lot_depth))
        .collect();
    let offsets = district_offsets(&dimensions, options.lot_spacing);

    tracing::info!(
        lots = resolved.len(),
        spacing = options.lot_spacing,
        filename = %options.filename,
        "Exporting district"
    );

    let mut builder = DocumentBuilder::new(&options);
    for (index, (lot, offset)) in resolved.into_iter().zip(offsets).enumerate() {
        let label = lot
            .name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Lot {}", index + 1));

        let masses = [
            (lot.buildings.principal.as_ref(), "Principal", LayerBucket::Buildings),
            (
                lot.buildings.accessory.as_ref(),
                "Accessory",
                LayerBucket::AccessoryBuildings,
            ),
        ]
        .into_iter()
        .filter_map(|(spec, kind, bucket)| mass_request(&label, spec?, kind, bucket))
        .collect();

        builder.add_lot(LotRequest {
            lot,
            site_name: label.clone(),
            building_name: format!("{} Building", label),
            label,
            offset,
            masses,
        })?;
    }

    builder.finish()
}

fn mass_request(
    label: &str,
    spec: &BuildingSpec,
    kind: &str,
    bucket: LayerBucket,
) -> Option<MassRequest> {
    let geometry = spec.geometry();
    if !geometry.has_footprint() {
        tracing::debug!(lot = label, kind, "Building has no footprint, no mass exported");
        return None;
    }
    Some(MassRequest {
        name: format!("{} {} Building", label, kind),
        geometry,
        bucket,
    })
}
