// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The FOLD document: arena-style arrays of vertices, edges and faces
//!
//! Every topological field is optional. A missing field is treated as an empty
//! sequence wherever it is consumed, so accessors here never fail.

use crate::{EdgeIndex, FaceIndex, FoldAssignment, ParseError, Result, VertexIndex};
use serde::{Deserialize, Serialize};

/// Pad a coordinate list to 3D, filling missing axes with 0.0
///
/// Components beyond the third are ignored.
#[inline]
pub fn pad3(coords: &[f64]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (slot, value) in out.iter_mut().zip(coords) {
        *slot = *value;
    }
    out
}

/// A decoded FOLD document
///
/// Field names follow the FOLD specification so the struct maps 1:1 onto the
/// JSON file. The document is treated as an immutable value: geometry
/// operations borrow it and return new values.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoldDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices_coords: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices_vertices: Option<Vec<Vec<VertexIndex>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices_edges: Option<Vec<Vec<EdgeIndex>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertices_faces: Option<Vec<Vec<Option<FaceIndex>>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_vertices: Option<Vec<[VertexIndex; 2]>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_assignment: Option<Vec<FoldAssignment>>,
    #[serde(
        rename = "edges_foldAngle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub edges_fold_angle: Option<Vec<Option<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_edges: Option<Vec<Vec<Option<EdgeIndex>>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges_faces: Option<Vec<Vec<Option<FaceIndex>>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces_vertices: Option<Vec<Vec<VertexIndex>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces_edges: Option<Vec<Vec<EdgeIndex>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faces_faces: Option<Vec<Vec<Option<FaceIndex>>>>,
}

impl FoldDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Set vertex coordinates
    pub fn with_coords(mut self, coords: Vec<Vec<f64>>) -> Self {
        self.vertices_coords = Some(coords);
        self
    }

    /// Set edges from raw vertex index pairs
    pub fn with_edges(mut self, edges: &[[u32; 2]]) -> Self {
        self.edges_vertices = Some(
            edges
                .iter()
                .map(|[a, b]| [VertexIndex(*a), VertexIndex(*b)])
                .collect(),
        );
        self
    }

    /// Set edge assignments from FOLD codes
    pub fn with_assignments(mut self, codes: &[&str]) -> Self {
        self.edges_assignment = Some(codes.iter().map(|c| FoldAssignment::parse(c)).collect());
        self
    }

    /// Set faces from raw vertex index lists
    pub fn with_faces(mut self, faces: Vec<Vec<u32>>) -> Self {
        self.faces_vertices = Some(
            faces
                .into_iter()
                .map(|face| face.into_iter().map(VertexIndex).collect())
                .collect(),
        );
        self
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices_coords.as_ref().map_or(0, Vec::len)
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges_vertices.as_ref().map_or(0, Vec::len)
    }

    /// Number of faces
    pub fn face_count(&self) -> usize {
        self.faces_vertices.as_ref().map_or(0, Vec::len)
    }

    /// Raw coordinate list of a vertex, as written in the file
    pub fn coords(&self, vertex: VertexIndex) -> Option<&[f64]> {
        self.vertices_coords
            .as_ref()
            .and_then(|coords| coords.get(vertex.index()))
            .map(Vec::as_slice)
    }

    /// Coordinates of a vertex padded to 3D
    ///
    /// Unknown vertices resolve to the origin.
    pub fn coords3d(&self, vertex: VertexIndex) -> [f64; 3] {
        self.coords(vertex).map(pad3).unwrap_or_default()
    }

    /// All vertex coordinates padded to 3D
    pub fn vertices_coords3d(&self) -> Vec<[f64; 3]> {
        self.vertices_coords
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|c| pad3(c))
            .collect()
    }

    /// Whether the vertex declares a z component
    pub fn has_z(&self, vertex: VertexIndex) -> bool {
        self.coords(vertex).is_some_and(|c| c.len() >= 3)
    }

    /// Edge endpoint pairs (empty if absent)
    pub fn edges(&self) -> &[[VertexIndex; 2]] {
        self.edges_vertices.as_deref().unwrap_or_default()
    }

    /// Face boundaries (empty if absent)
    pub fn faces(&self) -> &[Vec<VertexIndex>] {
        self.faces_vertices.as_deref().unwrap_or_default()
    }

    /// Fold assignment of an edge, `Unassigned` when not given
    pub fn assignment(&self, edge: EdgeIndex) -> FoldAssignment {
        self.edges_assignment
            .as_ref()
            .and_then(|a| a.get(edge.index()))
            .copied()
            .unwrap_or_default()
    }

    /// Fold angle of an edge in degrees, if given
    pub fn fold_angle(&self, edge: EdgeIndex) -> Option<f64> {
        self.edges_fold_angle
            .as_ref()
            .and_then(|a| a.get(edge.index()))
            .copied()
            .flatten()
    }

    /// Check every index field against the array it points into
    ///
    /// Also rejects vertices that are not 2D/3D and faces with fewer than
    /// three vertices. Geometry code relies on a validated document.
    ///
    /// Vertex references are only checked when `vertices_coords` is present.
    /// Topology without coordinates is incomplete rather than inconsistent,
    /// and renders as nothing.
    pub fn validate(&self) -> Result<()> {
        let has_vertices = self.vertices_coords.is_some();
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();
        let face_count = self.face_count();

        for (vertex, coords) in self.vertices_coords.iter().flatten().enumerate() {
            if !(2..=3).contains(&coords.len()) {
                return Err(ParseError::InvalidCoordinates {
                    vertex,
                    len: coords.len(),
                });
            }
        }

        for (face, vertices) in self.faces().iter().enumerate() {
            if vertices.len() < 3 {
                return Err(ParseError::DegenerateFace {
                    face,
                    len: vertices.len(),
                });
            }
        }

        if has_vertices {
            check_refs("vertices_vertices", &self.vertices_vertices, vertex_count, |v| v.0)?;
        }
        check_refs("vertices_edges", &self.vertices_edges, edge_count, |e| e.0)?;
        check_optional_refs("vertices_faces", &self.vertices_faces, face_count, |f| f.0)?;

        if let Some(edges) = self.edges_vertices.as_ref().filter(|_| has_vertices) {
            for (entry, pair) in edges.iter().enumerate() {
                for vertex in pair {
                    if vertex.index() >= vertex_count {
                        return Err(ParseError::index_out_of_range(
                            "edges_vertices",
                            entry,
                            vertex.0,
                            vertex_count,
                        ));
                    }
                }
            }
        }
        check_optional_refs("edges_edges", &self.edges_edges, edge_count, |e| e.0)?;
        check_optional_refs("edges_faces", &self.edges_faces, face_count, |f| f.0)?;

        if has_vertices {
            check_refs("faces_vertices", &self.faces_vertices, vertex_count, |v| v.0)?;
        }
        check_refs("faces_edges", &self.faces_edges, edge_count, |e| e.0)?;
        check_optional_refs("faces_faces", &self.faces_faces, face_count, |f| f.0)?;

        Ok(())
    }
}

fn check_refs<T: Copy>(
    field: &'static str,
    lists: &Option<Vec<Vec<T>>>,
    len: usize,
    raw: impl Fn(T) -> u32,
) -> Result<()> {
    for (entry, list) in lists.iter().flatten().enumerate() {
        for item in list {
            let index = raw(*item);
            if index as usize >= len {
                return Err(ParseError::index_out_of_range(field, entry, index, len));
            }
        }
    }
    Ok(())
}

fn check_optional_refs<T: Copy>(
    field: &'static str,
    lists: &Option<Vec<Vec<Option<T>>>>,
    len: usize,
    raw: impl Fn(T) -> u32,
) -> Result<()> {
    for (entry, list) in lists.iter().flatten().enumerate() {
        for item in list.iter().flatten() {
            let index = raw(*item);
            if index as usize >= len {
                return Err(ParseError::index_out_of_range(field, entry, index, len));
            }
        }
    }
    Ok(())
}
