// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for geometry processing

use fold_model::ParseError;
use thiserror::Error;

/// Geometry processing result type
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry processing errors
///
/// Missing arrays and degenerate geometry are not errors: they degrade to
/// empty or collapsed output. Only documents that cannot be addressed by the
/// renderer's buffers are rejected.
#[derive(Error, Debug)]
pub enum Error {
    /// The document failed index validation
    #[error("Invalid document: {0}")]
    InvalidDocument(#[from] ParseError),

    /// More vertices than a 16-bit index buffer can address
    #[error("Index overflow: {vertex_count} vertices exceed the 16-bit index space")]
    IndexOverflow { vertex_count: usize },
}

impl Error {
    /// Create an index overflow error
    pub fn index_overflow(vertex_count: usize) -> Self {
        Error::IndexOverflow { vertex_count }
    }
}
