// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for STEP reading and verification
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading back or verifying a STEP physical file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unknown IFC type: {0}")]
    InvalidIfcType(String),

    #[error("Missing or misplaced section: {0}")]
    MissingSection(&'static str),

    #[error("Expected entity #{expected}, found #{found}")]
    NonContiguousId { expected: u32, found: u32 },

    #[error("Entity #{entity} references #{target}, which is not defined before it")]
    ForwardReference { entity: u32, target: u32 },

    #[error("Entity #{entity} references undefined entity #{target}")]
    UndefinedReference { entity: u32, target: u32 },
}

impl Error {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}
