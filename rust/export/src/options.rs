// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-call export options

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller options shared by both export modes
///
/// Every field is optional; unset fields fall back to the defaults of the
/// mode being exported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Name written to `FILE_NAME`
    pub filename: Option<String>,
    /// Gap between neighbouring lots (feet)
    pub lot_spacing: Option<f64>,
    pub project_name: Option<String>,
    pub author: Option<String>,
    pub organization: Option<String>,
    /// Attach `Pset_ZoningLot` / `Pset_ZoningMass` property sets
    pub include_properties: bool,
    /// Fixed export time instead of the current time
    pub timestamp: Option<DateTime<Utc>>,
    /// Fixed GUID seed; with a fixed timestamp the output is reproducible
    pub guid_seed: Option<u64>,
}

/// Defaults that differ between comparison and district exports
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModeDefaults {
    pub filename: &'static str,
    pub lot_spacing: f64,
    pub project_name: &'static str,
}

pub(crate) const COMPARISON_DEFAULTS: ModeDefaults = ModeDefaults {
    filename: "zoning-comparison.ifc",
    lot_spacing: 20.0,
    project_name: "Zoning Comparison",
};

pub(crate) const DISTRICT_DEFAULTS: ModeDefaults = ModeDefaults {
    filename: "district.ifc",
    lot_spacing: 0.0,
    project_name: "District Model",
};

/// Options with every default filled in
#[derive(Debug, Clone)]
pub(crate) struct ResolvedOptions {
    pub filename: String,
    pub lot_spacing: f64,
    pub project_name: String,
    pub author: String,
    pub organization: String,
    pub include_properties: bool,
    pub timestamp: DateTime<Utc>,
    pub guid_seed: Option<u64>,
}

impl ExportOptions {
    pub(crate) fn resolve(&self, defaults: ModeDefaults) -> ResolvedOptions {
        ResolvedOptions {
            filename: self
                .filename
                .clone()
                .unwrap_or_else(|| defaults.filename.to_string()),
            lot_spacing: self.lot_spacing.unwrap_or(defaults.lot_spacing),
            project_name: self
                .project_name
                .clone()
                .unwrap_or_else(|| defaults.project_name.to_string()),
            author: self.author.clone().unwrap_or_default(),
            organization: self.organization.clone().unwrap_or_default(),
            include_properties: self.include_properties,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            guid_seed: self.guid_seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_defaults() {
        let options = ExportOptions::default();
        let comparison = options.resolve(COMPARISON_DEFAULTS);
        assert_eq!(comparison.filename, "zoning-comparison.ifc");
        assert_eq!(comparison.lot_spacing, 20.0);

        let district = options.resolve(DISTRICT_DEFAULTS);
        assert_eq!(district.filename, "district.ifc");
        assert_eq!(district.lot_spacing, 0.0);
        assert_eq!(district.project_name, "District Model");
    }

    #[test]
    fn test_caller_values_win() {
        let options: ExportOptions = serde_json::from_str(
            r#"{"filename": "a.ifc", "lotSpacing": 5, "includeProperties": true,
                "timestamp": "2024-05-01T08:00:00Z", "guidSeed": 7}"#,
        )
        .unwrap();
        let resolved = options.resolve(COMPARISON_DEFAULTS);
        assert_eq!(resolved.filename, "a.ifc");
        assert_eq!(resolved.lot_spacing, 5.0);
        assert!(resolved.include_properties);
        assert_eq!(resolved.timestamp.to_rfc3339(), "2024-05-01T08:00:00+00:00");
        assert_eq!(resolved.guid_seed, Some(7));
    }
}
