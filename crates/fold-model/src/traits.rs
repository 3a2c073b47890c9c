// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoder interface
//!
//! The geometry engine never reads files. A host hands bytes to a
//! [`DocumentParser`] and only ever passes validated documents on.

use crate::{FoldDocument, ParseError, Result};
use std::path::Path;

/// Turns raw FOLD content into a validated [`FoldDocument`]
///
/// # Example
///
/// ```ignore
/// use fold_model::DocumentParser;
///
/// let parser: Box<dyn DocumentParser> = get_parser();
/// let doc = parser.parse(fold_json)?;
/// println!("{} vertices", doc.vertex_count());
/// ```
pub trait DocumentParser: Send + Sync {
    /// Decode and validate FOLD text
    fn parse(&self, content: &str) -> Result<FoldDocument>;

    /// Decode and validate FOLD bytes
    fn parse_bytes(&self, bytes: &[u8]) -> Result<FoldDocument>;

    /// Read a file and decode it
    ///
    /// A read failure is reported as [`ParseError::Io`], distinct from a
    /// content error.
    fn parse_file(&self, path: &Path) -> Result<FoldDocument> {
        let bytes = std::fs::read(path).map_err(ParseError::Io)?;
        self.parse_bytes(&bytes)
    }
}
