// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Smooth vertex normals for lit solid meshes

use crate::Vector3;

/// Compute area-weighted vertex normals
///
/// Each triangle adds its unnormalized face normal (twice its area) to its
/// three corners, and the sums are normalized. Vertices touched by no
/// triangle, or only by degenerate ones, get +Z. Triangles with an
/// out-of-range index are skipped.
///
/// Returns a flattened [nx, ny, nz, ...] array parallel to `positions`.
pub fn compute_vertex_normals(positions: &[f32], indices: &[u16]) -> Vec<f32> {
    let vertex_count = positions.len() / 3;
    let point = |i: usize| {
        Vector3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2])
    };

    let mut sums = vec![Vector3::<f32>::zeros(); vertex_count];
    let mut skipped = 0usize;

    for triangle in indices.chunks_exact(3) {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(usize::from);
        if a >= vertex_count || b >= vertex_count || c >= vertex_count {
            skipped += 1;
            continue;
        }

        let face_normal = (point(b) - point(a)).cross(&(point(c) - point(a)));
        sums[a] += face_normal;
        sums[b] += face_normal;
        sums[c] += face_normal;
    }

    if skipped > 0 {
        log::warn!("skipped {} triangles with out-of-range indices", skipped);
    }

    let mut normals = Vec::with_capacity(vertex_count * 3);
    for sum in sums {
        let n = sum.try_normalize(1e-10).unwrap_or_else(Vector3::z);
        normals.extend_from_slice(&[n.x, n.y, n.z]);
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_triangle() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals.len(), 9);
        for n in normals.chunks_exact(3) {
            assert_relative_eq!(n[0], 0.0);
            assert_relative_eq!(n[1], 0.0);
            assert_relative_eq!(n[2], 1.0);
        }

        // Reversed winding flips the normal
        let flipped = compute_vertex_normals(&positions, &[0, 2, 1]);
        assert_relative_eq!(flipped[2], -1.0);
    }

    #[test]
    fn test_shared_vertex_is_area_weighted() {
        // Large triangle in the xy plane, small one in the xz plane, sharing v0
        let positions = [
            0.0, 0.0, 0.0, //
            3.0, 0.0, 0.0, //
            0.0, 3.0, 0.0, //
            0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0,
        ];
        // (3,0,0)x(0,3,0) = (0,0,9); (0,0,1)x(1,0,0) = (0,1,0)
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 3, 4]);
        let shared = Vector3::new(normals[0], normals[1], normals[2]);
        assert_relative_eq!(shared, Vector3::new(0.0, 1.0, 9.0).normalize(), epsilon = 1e-6);
        assert_relative_eq!(shared.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unused_and_degenerate_vertices_face_up() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 5.0, 5.0, 5.0];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2]);
        for n in normals.chunks_exact(3) {
            assert_eq!(n, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_out_of_range_triangle_is_skipped() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let normals = compute_vertex_normals(&positions, &[0, 1, 2, 0, 1, 9]);
        assert_relative_eq!(normals[2], 1.0);
    }
}
