// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Exporter configuration loaded from environment variables.

use std::path::PathBuf;

/// Exporter configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory that relative output paths are resolved against.
    pub output_dir: PathBuf,
    /// Lot spacing override (feet).
    pub lot_spacing: Option<f64>,
    /// Author written to the file header and owner history.
    pub author: Option<String>,
    pub organization: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            output_dir: lookup("ZONING_IFC_OUTPUT_DIR")
                .unwrap_or_else(|| ".".into())
                .into(),
            lot_spacing: lookup("ZONING_IFC_LOT_SPACING")
                .and_then(|value| value.trim().parse().ok())
                .filter(|spacing: &f64| spacing.is_finite()),
            author: lookup("ZONING_IFC_AUTHOR").filter(|s| !s.trim().is_empty()),
            organization: lookup("ZONING_IFC_ORGANIZATION").filter(|s| !s.trim().is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
