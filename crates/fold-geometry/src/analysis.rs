// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometric analysis of a FOLD document
//!
//! Pure functions over the document: bounds, solid/flat classification and
//! the surface normal used to orient crease-pattern strokes.

use crate::{Point3, Vector3};
use fold_model::FoldDocument;

/// Largest out-of-plane dot product still considered coplanar
pub const COPLANAR_TOLERANCE: f64 = 1e-6;

/// Cross products shorter than this are treated as degenerate
const DEGENERATE_EPSILON: f64 = 1e-10;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Size along each axis
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Largest axis extent
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }

    /// Length of the diagonal
    pub fn diagonal(&self) -> f64 {
        self.size().norm()
    }

    /// Center point
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: Point3::origin(),
            max: Point3::origin(),
        }
    }
}

/// All vertices as 3D points (missing axes padded with 0.0)
pub fn vertex_points(doc: &FoldDocument) -> Vec<Point3<f64>> {
    doc.vertices_coords3d()
        .into_iter()
        .map(Point3::from)
        .collect()
}

/// Bounding box of every vertex, padded to 3D
///
/// A document without vertices has both corners at the origin.
pub fn bounding_box(doc: &FoldDocument) -> BoundingBox {
    let points = vertex_points(doc);
    let Some(first) = points.first() else {
        return BoundingBox::default();
    };

    let mut bbox = BoundingBox {
        min: *first,
        max: *first,
    };
    for p in &points[1..] {
        bbox.min = bbox.min.inf(p);
        bbox.max = bbox.max.sup(p);
    }
    bbox
}

/// Whether the document describes a non-planar 3D solid
///
/// Documents with fewer than four vertices, or with any vertex lacking a z
/// component, are flat. Otherwise a plane is taken through the first
/// vertices and the document is 3D iff some vertex leaves it.
///
/// If the first three vertices are collinear the plane is built from the
/// first later vertex that is not; a fully collinear document is flat.
pub fn is_solid_3d(doc: &FoldDocument) -> bool {
    let coords = doc.vertices_coords.as_deref().unwrap_or_default();
    if coords.len() < 4 {
        return false;
    }
    if coords.iter().any(|c| c.len() < 3) {
        return false;
    }

    let points = vertex_points(doc);
    let origin = points[0];

    let Some(plane_normal) = reference_plane_normal(&points) else {
        log::debug!("all {} vertices are collinear, treating as flat", points.len());
        return false;
    };

    points[1..]
        .iter()
        .any(|p| (p - origin).dot(&plane_normal).abs() > COPLANAR_TOLERANCE)
}

/// Unnormalized normal of the first well-conditioned plane through `points[0]`
fn reference_plane_normal(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let origin = points.first()?;
    let mut rest = points[1..].iter().map(|p| p - origin);
    let axis = rest.find(|v| v.norm() > DEGENERATE_EPSILON)?;
    rest.map(|v| axis.cross(&v))
        .find(|n| n.norm() > DEGENERATE_EPSILON)
}

/// Normal of the surface the vertices lie in
///
/// Normally (v1 - v0) x (v2 - v0), normalized. When the first three
/// vertices are collinear the plane is built from the first later vertex that
/// is not, the same search `is_solid_3d` uses. Falls back to +Z when there
/// are fewer than three vertices, when any of the first three is 2D, or when
/// every vertex is collinear.
pub fn surface_normal(doc: &FoldDocument) -> Vector3<f64> {
    let coords = doc.vertices_coords.as_deref().unwrap_or_default();
    if coords.len() < 3 || coords[..3].iter().any(|c| c.len() < 3) {
        return Vector3::z();
    }

    let points = vertex_points(doc);
    match reference_plane_normal(&points).and_then(|n| n.try_normalize(DEGENERATE_EPSILON)) {
        Some(n) => n,
        None => {
            log::warn!("all vertices are collinear, using +Z as surface normal");
            Vector3::z()
        }
    }
}

/// Signed area of every face projected onto the xy plane
///
/// Positive for counter-clockwise faces.
pub fn faces_signed_area(doc: &FoldDocument) -> Vec<f64> {
    let points = vertex_points(doc);
    let lookup = |i: usize| points.get(i).copied().unwrap_or_else(Point3::origin);

    doc.faces()
        .iter()
        .map(|face| {
            let n = face.len();
            let twice_area: f64 = (0..n)
                .map(|i| {
                    let a = lookup(face[i].index());
                    let b = lookup(face[(i + 1) % n].index());
                    a.x * b.y - a.y * b.x
                })
                .sum();
            twice_area / 2.0
        })
        .collect()
}
