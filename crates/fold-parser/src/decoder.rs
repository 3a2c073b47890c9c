// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON decoding of FOLD content

use fold_model::{FoldDocument, ParseError, Result};

/// UTF-8 byte order mark some editors prepend to JSON files
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode FOLD bytes without validating indices
pub fn decode_bytes(bytes: &[u8]) -> Result<FoldDocument> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    serde_json::from_slice(bytes).map_err(json_error)
}

/// Decode FOLD text without validating indices
pub fn decode_str(content: &str) -> Result<FoldDocument> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    serde_json::from_str(content).map_err(json_error)
}

fn json_error(err: serde_json::Error) -> ParseError {
    ParseError::json(format!(
        "{} (line {}, column {})",
        err,
        err.line(),
        err.column()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_minimal() {
        let doc = decode_str(r#"{"vertices_coords": [[0, 0, 0]]}"#).unwrap();
        assert_eq!(doc.vertex_count(), 1);
        assert!(doc.edges_vertices.is_none());
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = BOM.to_vec();
        bytes.extend_from_slice(br#"{"faces_vertices": [[0, 1, 2]]}"#);
        let doc = decode_bytes(&bytes).unwrap();
        assert_eq!(doc.face_count(), 1);
    }

    #[test]
    fn test_syntax_error() {
        let err = decode_str(r#"{"vertices_coords": [[0, 0"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
        assert!(!err.is_io());
    }

    #[test]
    fn test_wrong_shape_is_json_error() {
        // Edges must be pairs
        let err = decode_str(r#"{"edges_vertices": [[0, 1, 2]]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));

        let err = decode_str(r#"{"faces_vertices": [[0, -1, 2]]}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
