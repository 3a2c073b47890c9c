// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Convex polygon triangulation
//!
//! Each face is reordered into a zigzag triangle strip (0, 1, -1, 2, -2, ...)
//! and the strip is unrolled into a triangle list. Only correct for convex
//! faces.

use fold_model::{FoldDocument, VertexIndex};

/// Reorder a polygon boundary into a triangle strip
///
/// Position `i` takes the boundary vertex at `ceil(i / 2)`, negated for even
/// `i`, wrapped into `0..n`.
pub fn zigzag_strip<T: Copy>(face: &[T]) -> Vec<T> {
    let n = face.len() as isize;
    (0..n)
        .map(|i| {
            let half = (i + 1) / 2;
            let zigzag = if i % 2 == 0 { -half } else { half };
            face[zigzag.rem_euclid(n) as usize]
        })
        .collect()
}

/// Triangulate one convex face into `n - 2` triangles
///
/// Odd strip triangles are reversed so every triangle keeps the winding of
/// the source polygon.
#[inline]
pub fn triangulate_face<T: Copy>(face: &[T]) -> Vec<[T; 3]> {
    if face.len() < 3 {
        return Vec::new();
    }

    let strip = zigzag_strip(face);
    let len = strip.len();
    (0..len - 2)
        .map(|i| {
            let triangle = [strip[i], strip[(i + 1) % len], strip[(i + 2) % len]];
            if i % 2 == 0 {
                triangle
            } else {
                [triangle[2], triangle[1], triangle[0]]
            }
        })
        .collect()
}

/// Number of triangles `triangulate` will produce
pub fn triangle_count(doc: &FoldDocument) -> usize {
    doc.faces().iter().map(|f| f.len().saturating_sub(2)).sum()
}

/// Replace every face with triangles
///
/// Returns a new document. Coordinates, edges, assignments and fold angles
/// carry over; adjacency arrays are dropped since they no longer describe
/// the new face list.
pub fn triangulate(doc: &FoldDocument) -> FoldDocument {
    let faces_vertices = doc.faces_vertices.as_ref().map(|faces| {
        let mut triangles: Vec<Vec<VertexIndex>> = Vec::with_capacity(triangle_count(doc));
        for face in faces {
            triangles.extend(triangulate_face(face).into_iter().map(Vec::from));
        }
        triangles
    });

    FoldDocument {
        vertices_coords: doc.vertices_coords.clone(),
        edges_vertices: doc.edges_vertices.clone(),
        edges_assignment: doc.edges_assignment.clone(),
        edges_fold_angle: doc.edges_fold_angle.clone(),
        faces_vertices,
        ..FoldDocument::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::faces_signed_area;
    use fold_model::{EdgeIndex, FaceIndex};

    #[test]
    fn test_zigzag_strip() {
        assert_eq!(zigzag_strip(&[0, 1, 2]), vec![0, 1, 2]);
        assert_eq!(zigzag_strip(&[0, 1, 2, 3]), vec![0, 1, 3, 2]);
        assert_eq!(zigzag_strip(&[0, 1, 2, 3, 4, 5]), vec![0, 1, 5, 2, 4, 3]);
        assert_eq!(zigzag_strip(&[10, 11, 12, 13, 14]), vec![10, 11, 14, 12, 13]);
    }

    #[test]
    fn test_triangulate_triangle() {
        assert_eq!(triangulate_face(&[4, 5, 6]), vec![[4, 5, 6]]);
    }

    #[test]
    fn test_triangulate_quad() {
        // Strip 0 1 3 2 -> (0 1 3), reversed (1 3 2) = (2 3 1)
        assert_eq!(triangulate_face(&[0, 1, 2, 3]), vec![[0, 1, 3], [2, 3, 1]]);
    }

    #[test]
    fn test_triangulate_hexagon() {
        let triangles = triangulate_face(&[0, 1, 2, 3, 4, 5]);
        assert_eq!(triangles, vec![[0, 1, 5], [2, 5, 1], [5, 2, 4], [3, 4, 2]]);
    }

    #[test]
    fn test_degenerate_face_yields_nothing() {
        assert!(triangulate_face(&[0, 1]).is_empty());
        assert!(triangulate_face::<u32>(&[]).is_empty());
    }

    #[test]
    fn test_triangulate_document() {
        let mut doc = FoldDocument::new()
            .with_coords(vec![
                vec![0.0, 0.0],
                vec![1.0, 0.0],
                vec![2.0, 1.0],
                vec![1.0, 2.0],
                vec![0.0, 1.0],
            ])
            .with_edges(&[[0, 1], [1, 2]])
            .with_assignments(&["M", "V"])
            .with_faces(vec![vec![0, 1, 2, 3, 4], vec![0, 1, 2]]);
        doc.faces_edges = Some(vec![vec![EdgeIndex(0)]]);
        doc.faces_faces = Some(vec![vec![Some(FaceIndex(1))], vec![None]]);
        doc.vertices_faces = Some(vec![vec![Some(FaceIndex(0))]]);
        doc.edges_fold_angle = Some(vec![Some(-90.0), None]);

        let tri = triangulate(&doc);

        assert_eq!(tri.face_count(), 3 + 1);
        assert_eq!(triangle_count(&doc), 4);
        assert!(tri.faces().iter().all(|f| f.len() == 3));
        assert_eq!(tri.vertices_coords, doc.vertices_coords);
        assert_eq!(tri.edges_vertices, doc.edges_vertices);
        assert_eq!(tri.edges_assignment, doc.edges_assignment);
        assert_eq!(tri.edges_fold_angle, doc.edges_fold_angle);
        assert!(tri.faces_edges.is_none());
        assert!(tri.faces_faces.is_none());
        assert!(tri.vertices_faces.is_none());

        // The source is untouched
        assert_eq!(doc.face_count(), 2);
    }

    #[test]
    fn test_winding_is_preserved() {
        let doc = FoldDocument::new()
            .with_coords(vec![
                vec![0.0, 0.0],
                vec![2.0, 0.0],
                vec![3.0, 1.0],
                vec![3.0, 2.0],
                vec![2.0, 3.0],
                vec![0.0, 3.0],
                vec![-1.0, 1.5],
            ])
            .with_faces(vec![vec![0, 1, 2, 3, 4, 5, 6]]);
        let source_area = faces_signed_area(&doc)[0];
        assert!(source_area > 0.0);

        let tri = triangulate(&doc);
        let areas = faces_signed_area(&tri);
        assert_eq!(areas.len(), 5);
        assert!(areas.iter().all(|a| *a > 0.0));

        let total: f64 = areas.iter().sum();
        assert!((total - source_area).abs() < 1e-9);
    }

    #[test]
    fn test_missing_faces_stay_missing() {
        let doc = FoldDocument::new().with_coords(vec![vec![0.0, 0.0]]);
        assert!(triangulate(&doc).faces_vertices.is_none());
    }
}
