// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ export

use fold_model::FoldDocument;
use std::fmt::Write;

/// Write the document's vertices and faces as Wavefront OBJ text
///
/// Vertices are padded to 3D. Face indices are 1-based as OBJ requires.
/// Faces are written as stored; triangulate first for a triangle mesh.
/// A document without `vertices_coords` exports as empty text.
pub fn to_obj(doc: &FoldDocument) -> String {
    let mut out = String::new();
    if doc.vertices_coords.is_none() {
        return out;
    }

    for [x, y, z] in doc.vertices_coords3d() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "v {} {} {}", x, y, z);
    }

    for face in doc.faces() {
        out.push('f');
        for vertex in face {
            let _ = write!(out, " {}", vertex.index() + 1);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::triangulate;

    #[test]
    fn test_square_obj() {
        let doc = FoldDocument::new()
            .with_coords(vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
                vec![0.0, 1.0],
            ])
            .with_faces(vec![vec![0, 1, 2, 3]]);

        let obj = to_obj(&doc);
        let lines: Vec<&str> = obj.lines().collect();
        assert_eq!(
            lines,
            vec!["v 0 0 0", "v 1 0 0", "v 1 1 0", "v 0 1 0", "f 1 2 3 4"]
        );

        let tri = to_obj(&triangulate(&doc));
        assert!(tri.contains("f 1 2 4\n"));
        assert!(tri.contains("f 3 4 2\n"));
    }

    #[test]
    fn test_empty_document() {
        assert!(to_obj(&FoldDocument::new()).is_empty());

        let faces_only = FoldDocument::new().with_faces(vec![vec![0, 1, 2]]);
        assert!(to_obj(&faces_only).is_empty());
    }

    #[test]
    fn test_fractional_coordinates() {
        let doc = FoldDocument::new().with_coords(vec![vec![0.5, -1.25, 2.0]]);
        assert_eq!(to_obj(&doc), "v 0.5 -1.25 2\n");
    }
}
