// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thick edge geometry for crease patterns
//!
//! Every edge becomes a quad of four vertices and two triangles, pushed
//! sideways by the stroke width within the surface plane and colored by its
//! fold assignment.

use crate::{Error, Result, Vector3};
use fold_model::{EdgeIndex, FoldDocument, MAX_VERTICES};

/// Geometry vertices emitted per edge
pub const VERTICES_PER_EDGE: usize = 4;

/// Local triangle indices of one edge quad
pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 1, 3];

/// Offsets shorter than this collapse to zero
const DEGENERATE_EPSILON: f64 = 1e-12;

/// Colored quad geometry for all edges of a document
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeGeometry {
    /// Quad corners as flattened [x, y, z, ...]
    pub positions: Vec<f32>,
    /// Two triangles per edge, indexing `positions`
    pub indices: Vec<u16>,
    /// Per-vertex colors as flattened [r, g, b, ...]
    pub colors: Vec<f32>,
}

impl EdgeGeometry {
    /// Check if there is no geometry
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Indices shifted by `base`, for appending after other geometry
    ///
    /// Returns `None` if a shifted index leaves the 16-bit range.
    pub fn offset_indices(&self, base: usize) -> Option<Vec<u16>> {
        self.indices
            .iter()
            .map(|i| u16::try_from(*i as usize + base).ok())
            .collect()
    }
}

/// Sideways offset of an edge with direction `direction`
///
/// The offset lies in the plane with normal `normal` and has length
/// `stroke_width`. An edge of zero length, or one parallel to the normal,
/// gets a zero offset.
#[inline]
pub fn edge_offset(
    direction: &Vector3<f64>,
    normal: &Vector3<f64>,
    stroke_width: f64,
) -> Vector3<f64> {
    direction
        .cross(normal)
        .try_normalize(DEGENERATE_EPSILON)
        .map(|side| side * stroke_width)
        .unwrap_or_else(Vector3::zeros)
}

/// Build quad geometry for every edge
///
/// Returns empty geometry when the document has no coordinates or no edges.
/// Vertices, colors and indices are emitted in edge order; quad `e` owns
/// vertices `4e..4e+4`.
///
/// # Errors
///
/// Returns [`Error::IndexOverflow`] when the quads need more vertices than a
/// 16-bit index buffer can address, i.e. more than
/// `MAX_VERTICES / VERTICES_PER_EDGE` edges.
pub fn synthesize_edge_geometry(
    doc: &FoldDocument,
    normal: &Vector3<f64>,
    stroke_width: f32,
) -> Result<EdgeGeometry> {
    if doc.vertices_coords.is_none() || doc.edges_vertices.is_none() {
        return Ok(EdgeGeometry::default());
    }

    let edges = doc.edges();
    let vertex_count = edges.len() * VERTICES_PER_EDGE;
    if vertex_count > MAX_VERTICES {
        return Err(Error::index_overflow(vertex_count));
    }

    let mut geometry = EdgeGeometry {
        positions: Vec::with_capacity(edges.len() * VERTICES_PER_EDGE * 3),
        indices: Vec::with_capacity(edges.len() * QUAD_INDICES.len()),
        colors: Vec::with_capacity(edges.len() * VERTICES_PER_EDGE * 3),
    };
    let mut degenerate = 0usize;

    for (i, [a, b]) in edges.iter().enumerate() {
        let start = Vector3::from(doc.coords3d(*a));
        let end = Vector3::from(doc.coords3d(*b));
        let offset = edge_offset(&(end - start), normal, f64::from(stroke_width));
        if offset == Vector3::zeros() && stroke_width != 0.0 {
            degenerate += 1;
        }

        for corner in [start + offset, start - offset, end + offset, end - offset] {
            geometry
                .positions
                .extend_from_slice(&[corner.x as f32, corner.y as f32, corner.z as f32]);
        }

        // Checked above: every quad index fits in u16
        let base = (i * VERTICES_PER_EDGE) as u16;
        geometry.indices.extend(QUAD_INDICES.iter().map(|local| base + local));

        let color = doc.assignment(EdgeIndex(i as u32)).color();
        for _ in 0..VERTICES_PER_EDGE {
            geometry.colors.extend_from_slice(&color);
        }
    }

    if degenerate > 0 {
        log::debug!("{} edges have no sideways direction and collapse", degenerate);
    }

    Ok(geometry)
}
