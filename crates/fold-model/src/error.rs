// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for FOLD decoding and validation

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while turning FOLD bytes into a [`crate::FoldDocument`]
///
/// Any of these aborts the preview: there is no partial render of a document
/// that failed to decode or validate.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not a JSON document of the expected shape
    #[error("Invalid FOLD JSON: {0}")]
    Json(String),

    /// An index field references an entity that does not exist
    #[error("{field}[{entry}] references index {index}, but only {len} entries exist")]
    IndexOutOfRange {
        field: &'static str,
        entry: usize,
        index: u32,
        len: usize,
    },

    /// A vertex has a coordinate list that is neither 2D nor 3D
    #[error("vertices_coords[{vertex}] has {len} components, expected 2 or 3")]
    InvalidCoordinates { vertex: usize, len: usize },

    /// A face has fewer than three vertices
    #[error("faces_vertices[{face}] has {len} vertices, expected at least 3")]
    DegenerateFace { face: usize, len: usize },
}

impl ParseError {
    /// Create a JSON error from any displayable decoder error
    pub fn json(msg: impl Into<String>) -> Self {
        ParseError::Json(msg.into())
    }

    /// Create an out-of-range index error
    pub fn index_out_of_range(field: &'static str, entry: usize, index: u32, len: usize) -> Self {
        ParseError::IndexOutOfRange {
            field,
            entry,
            index,
            len,
        }
    }

    /// Whether the error came from reading the file rather than its contents
    pub fn is_io(&self) -> bool {
        matches!(self, ParseError::Io(_))
    }
}
