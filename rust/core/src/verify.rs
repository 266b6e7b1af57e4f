// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural check of a written STEP physical file
//!
//! Walks the document line by line and confirms the section framing, the
//! `FILE_SCHEMA`, contiguous ids starting at 1 and that every reference
//! points to a record defined earlier in the DATA section.

use crate::document::SCHEMA;
use crate::error::{Error, Result};
use crate::parser::parse_entity;
use crate::schema::IfcType;
use memchr::memchr_iter;
use rustc_hash::FxHashMap;

/// What a verified document contains
#[derive(Debug, Clone, Default)]
pub struct DocumentSummary {
    pub entity_count: usize,
    pub type_counts: FxHashMap<IfcType, usize>,
}

impl DocumentSummary {
    /// Number of records of one type
    pub fn count(&self, ifc_type: IfcType) -> usize {
        self.type_counts.get(&ifc_type).copied().unwrap_or(0)
    }

    /// Number of records whose type satisfies `pred`
    pub fn count_where(&self, pred: impl Fn(IfcType) -> bool) -> usize {
        self.type_counts
            .iter()
            .filter(|(t, _)| pred(**t))
            .map(|(_, n)| n)
            .sum()
    }

    pub fn spatial_count(&self) -> usize {
        self.count_where(|t| t.is_spatial())
    }

    pub fn element_count(&self) -> usize {
        self.count_where(|t| t.is_building_element())
    }

    pub fn relationship_count(&self) -> usize {
        self.count_where(|t| t.is_relationship())
    }

    /// Records that carry a GlobalId and an owner history
    pub fn rooted_count(&self) -> usize {
        self.count_where(|t| t.is_rooted())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Start,
    AfterMagic,
    Header,
    BetweenSections,
    Data,
    AfterData,
    Done,
}

/// Split text into `(1-based line number, trimmed line)` pairs
fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let bytes = text.as_bytes();
    let mut start = 0;
    memchr_iter(b'\n', bytes)
        .chain(std::iter::once(bytes.len()))
        .enumerate()
        .filter_map(move |(i, end)| {
            if start > end {
                return None;
            }
            let line = &text[start..end];
            start = end + 1;
            Some((i + 1, line.trim()))
        })
}

/// Verify a document and summarize its DATA section
pub fn verify_document(text: &str) -> Result<DocumentSummary> {
    let mut section = Section::Start;
    let mut saw_schema = false;
    let mut summary = DocumentSummary::default();
    let mut refs = Vec::new();

    for (line_no, line) in lines(text) {
        if line.is_empty() {
            continue;
        }

        section = match section {
            Section::Start if line == "ISO-10303-21;" => Section::AfterMagic,
            Section::Start => return Err(Error::MissingSection("ISO-10303-21")),

            Section::AfterMagic if line == "HEADER;" => Section::Header,
            Section::AfterMagic => return Err(Error::MissingSection("HEADER")),

            Section::Header if line == "ENDSEC;" => {
                if !saw_schema {
                    return Err(Error::MissingSection("FILE_SCHEMA"));
                }
                Section::BetweenSections
            }
            Section::Header => {
                if line.starts_with("FILE_SCHEMA") {
                    if line != format!("FILE_SCHEMA(('{}'));", SCHEMA) {
                        return Err(Error::parse(
                            line_no,
                            format!("Unsupported schema declaration: {}", line),
                        ));
                    }
                    saw_schema = true;
                }
                Section::Header
            }

            Section::BetweenSections if line == "DATA;" => Section::Data,
            Section::BetweenSections => return Err(Error::MissingSection("DATA")),

            Section::Data if line == "ENDSEC;" => Section::AfterData,
            Section::Data => {
                let (id, ifc_type, args) = parse_entity(line, line_no)?;

                let expected = summary.entity_count as u32 + 1;
                if id != expected {
                    return Err(Error::NonContiguousId { expected, found: id });
                }

                refs.clear();
                args.iter().for_each(|t| t.collect_refs(&mut refs));
                for &target in &refs {
                    if target == 0 {
                        return Err(Error::UndefinedReference { entity: id, target });
                    }
                    if target >= id {
                        return Err(Error::ForwardReference { entity: id, target });
                    }
                }

                summary.entity_count += 1;
                *summary.type_counts.entry(ifc_type).or_insert(0) += 1;
                Section::Data
            }

            Section::AfterData if line == "END-ISO-10303-21;" => Section::Done,
            Section::AfterData => return Err(Error::MissingSection("END-ISO-10303-21")),

            Section::Done => {
                return Err(Error::parse(line_no, "Content after END-ISO-10303-21"))
            }
        };
    }

    match section {
        Section::Done => Ok(summary),
        Section::Start => Err(Error::MissingSection("ISO-10303-21")),
        Section::AfterMagic | Section::Header => Err(Error::MissingSection("HEADER")),
        Section::BetweenSections | Section::Data => Err(Error::MissingSection("DATA")),
        Section::AfterData => Err(Error::MissingSection("END-ISO-10303-21")),
    }
}
