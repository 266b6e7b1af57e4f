// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Helpers for reading exported documents back in tests

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use zoning_ifc_core::{parse_entity, IfcType, Token};
use zoning_ifc_export::ExportOptions;

/// Options with a fixed timestamp and GUID seed
pub fn fixed_options(seed: u64) -> ExportOptions {
    ExportOptions {
        timestamp: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        guid_seed: Some(seed),
        ..Default::default()
    }
}

/// Lines of the DATA section
pub fn data_lines(text: &str) -> Vec<&str> {
    text.lines()
        .skip_while(|line| *line != "DATA;")
        .skip(1)
        .take_while(|line| *line != "ENDSEC;")
        .collect()
}

/// Parsed DATA records: id, type and raw arguments
pub fn records(text: &str) -> Vec<(u32, IfcType, Vec<Token<'_>>)> {
    data_lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, line)| parse_entity(line, i + 1).unwrap())
        .collect()
}

/// Ids listed in a list-valued argument
pub fn ref_list(token: &Token<'_>) -> Vec<u32> {
    let mut refs = Vec::new();
    token.collect_refs(&mut refs);
    refs
}

/// Replace the GUID argument of rooted records with a placeholder
pub fn mask_guids(text: &str) -> String {
    text.lines()
        .map(|line| match line.find("('") {
            Some(start) if line.as_bytes().get(start + 24) == Some(&b'\'') => {
                format!("{}('GUID'{}", &line[..start], &line[start + 25..])
            }
            _ => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether a 2D cartesian point with these coordinates was written
pub fn has_point2(text: &str, x: &str, y: &str) -> bool {
    let needle = format!("=IFCCARTESIANPOINT(({},{}));", x, y);
    text.lines().any(|line| line.ends_with(&needle))
}
