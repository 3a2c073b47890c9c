// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FOLD Parser - JSON decoder for FOLD files
//!
//! Implements the [`DocumentParser`] trait from `fold-model` on top of
//! `serde_json`. Decoding is followed by an index validation pass, so every
//! document this crate hands out is safe to feed to the geometry engine.
//!
//! # Example
//!
//! ```
//! use fold_parser::FoldParser;
//! use fold_model::DocumentParser;
//!
//! let doc = FoldParser::new()
//!     .parse(r#"{"vertices_coords": [[0,0],[1,0]], "edges_vertices": [[0,1]]}"#)
//!     .unwrap();
//! assert_eq!(doc.edge_count(), 1);
//! ```

mod decoder;

pub use decoder::{decode_bytes, decode_str};

use fold_model::{DocumentParser, FoldDocument, Result};
use std::path::Path;

/// Main FOLD parser implementing `DocumentParser`
#[derive(Clone, Debug)]
pub struct FoldParser {
    /// Whether to run the index validation pass after decoding
    pub validate: bool,
}

impl Default for FoldParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FoldParser {
    /// Create a parser that validates documents
    pub fn new() -> Self {
        Self { validate: true }
    }

    /// Set whether to validate indices after decoding
    ///
    /// Unvalidated documents must not reach the geometry engine.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate = enabled;
        self
    }

    fn finish(&self, doc: FoldDocument) -> Result<FoldDocument> {
        if self.validate {
            doc.validate()?;
        }
        log::debug!(
            "decoded FOLD document: {} vertices, {} edges, {} faces",
            doc.vertex_count(),
            doc.edge_count(),
            doc.face_count()
        );
        Ok(doc)
    }
}

impl DocumentParser for FoldParser {
    fn parse(&self, content: &str) -> Result<FoldDocument> {
        self.finish(decode_str(content)?)
    }

    fn parse_bytes(&self, bytes: &[u8]) -> Result<FoldDocument> {
        self.finish(decode_bytes(bytes)?)
    }
}

/// Quick parse function for simple use cases
pub fn parse(content: &str) -> Result<FoldDocument> {
    FoldParser::new().parse(content)
}

/// Read, decode and validate a FOLD file
pub fn parse_file(path: impl AsRef<Path>) -> Result<FoldDocument> {
    FoldParser::new().parse_file(path.as_ref())
}
