// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute values and their STEP text encoding
//!
//! Every literal written into the DATA section goes through this module, so
//! reals and strings are formatted the same way everywhere in a document.

use crate::ids::EntityId;
use std::fmt::{self, Write};

/// A single attribute of an entity record
#[derive(Debug, Clone, PartialEq)]
pub enum StepValue {
    /// `$`
    Null,
    /// `*`
    Derived,
    Integer(i64),
    Real(f64),
    /// Quoted and escaped on output
    String(String),
    /// Written as `.TOKEN.`
    Enum(&'static str),
    Ref(EntityId),
    List(Vec<StepValue>),
    /// Typed select value: `IFCLENGTHMEASURE(1.0)`
    Typed(&'static str, Box<StepValue>),
}

impl StepValue {
    pub fn string(s: impl Into<String>) -> Self {
        StepValue::String(s.into())
    }

    /// `$` for `None`, the reference otherwise
    pub fn opt_ref(id: Option<EntityId>) -> Self {
        id.map_or(StepValue::Null, StepValue::Ref)
    }

    /// `$` for `None`, the string otherwise
    pub fn opt_string(s: Option<&str>) -> Self {
        s.map_or(StepValue::Null, |s| StepValue::String(s.to_string()))
    }

    pub fn ref_list(ids: &[EntityId]) -> Self {
        StepValue::List(ids.iter().copied().map(StepValue::Ref).collect())
    }

    pub fn real_list(values: &[f64]) -> Self {
        StepValue::List(values.iter().copied().map(StepValue::Real).collect())
    }

    /// Collect every entity reference contained in this value
    pub fn collect_refs(&self, out: &mut Vec<EntityId>) {
        match self {
            StepValue::Ref(id) => out.push(*id),
            StepValue::List(items) => items.iter().for_each(|v| v.collect_refs(out)),
            StepValue::Typed(_, inner) => inner.collect_refs(out),
            _ => {}
        }
    }
}

impl fmt::Display for StepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepValue::Null => f.write_char('$'),
            StepValue::Derived => f.write_char('*'),
            StepValue::Integer(i) => write!(f, "{}", i),
            StepValue::Real(r) => f.write_str(&format_real(*r)),
            StepValue::String(s) => write!(f, "'{}'", encode_string(s)),
            StepValue::Enum(token) => write!(f, ".{}.", token),
            StepValue::Ref(id) => write!(f, "{}", id),
            StepValue::List(items) => {
                f.write_char('(')?;
                write_separated(f, items)?;
                f.write_char(')')
            }
            StepValue::Typed(name, inner) => write!(f, "{}({})", name, inner),
        }
    }
}

/// Write values separated by commas
pub(crate) fn write_separated(f: &mut impl Write, values: &[StepValue]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

/// Typed measure used in unit conversions and property values
#[derive(Debug, Clone, PartialEq)]
pub enum Measure {
    Length(f64),
    Area(f64),
    Integer(i64),
}

impl Measure {
    pub fn type_name(&self) -> &'static str {
        match self {
            Measure::Length(_) => "IFCLENGTHMEASURE",
            Measure::Area(_) => "IFCAREAMEASURE",
            Measure::Integer(_) => "IFCINTEGER",
        }
    }

    pub fn to_value(&self) -> StepValue {
        let inner = match self {
            Measure::Length(v) | Measure::Area(v) => StepValue::Real(*v),
            Measure::Integer(i) => StepValue::Integer(*i),
        };
        StepValue::Typed(self.type_name(), Box::new(inner))
    }
}

/// Format a real number for the DATA section
///
/// Integral values render as `N.0`. Other values render with six decimal
/// places, trailing zeros stripped. Values that round to an integer at six
/// places keep a `.0` suffix so the token still reads as a REAL, and negative
/// zero renders as `0.0`.
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        return normalize_zero(format!("{:.1}", value));
    }

    let mut s = format!("{:.6}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if !s.contains('.') {
        s.push_str(".0");
    }
    normalize_zero(s)
}

fn normalize_zero(s: String) -> String {
    if s == "-0.0" {
        "0.0".to_string()
    } else {
        s
    }
}

/// Encode a string literal body (without the surrounding quotes)
///
/// Apostrophes and backslashes are doubled. Characters outside printable
/// ASCII are written as `\X2\hhhh\X0\` runs of UTF-16 code units.
pub fn encode_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut wide = String::new();

    let flush = |out: &mut String, wide: &mut String| {
        if !wide.is_empty() {
            out.push_str("\\X2\\");
            out.push_str(wide);
            out.push_str("\\X0\\");
            wide.clear();
        }
    };

    for c in s.chars() {
        if (' '..='~').contains(&c) {
            flush(&mut out, &mut wide);
            match c {
                '\'' => out.push_str("''"),
                '\\' => out.push_str("\\\\"),
                _ => out.push(c),
            }
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                // Writing to a String cannot fail
                let _ = write!(wide, "{:04X}", unit);
            }
        }
    }
    flush(&mut out, &mut wide);
    out
}
