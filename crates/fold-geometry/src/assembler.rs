// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Buffer Assembler - turns a document into render buffers
//!
//! A document is classified once and handed to one of two builders:
//!
//! - [`SolidMeshBuilder`]: non-planar models become a lit triangle mesh
//! - [`CreasePatternBuilder`]: flat models become white paper polygons with
//!   colored edge quads appended after them

use crate::analysis::{bounding_box, is_solid_3d, surface_normal};
use crate::edges::{synthesize_edge_geometry, EdgeGeometry, VERTICES_PER_EDGE};
use crate::normals::compute_vertex_normals;
use crate::triangulation::triangulate;
use crate::{Error, Result};
use fold_model::{FoldDocument, RenderBuffers, RenderOptions, Rgb, VertexIndex, MAX_VERTICES};

/// Builds render buffers for one kind of document
///
/// Builders assume a validated document; [`build_render_geometry_with`]
/// validates before dispatching.
pub trait GeometryBuilder: Send + Sync {
    /// Build buffers for the document
    fn build(&self, doc: &FoldDocument, options: &RenderOptions) -> Result<RenderBuffers>;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Triangulated, smooth-shaded mesh for 3D models
#[derive(Clone, Copy, Debug, Default)]
pub struct SolidMeshBuilder;

impl GeometryBuilder for SolidMeshBuilder {
    fn build(&self, doc: &FoldDocument, options: &RenderOptions) -> Result<RenderBuffers> {
        check_vertex_count(doc.vertex_count())?;

        let mesh = triangulate(doc);
        let positions = flatten_positions(&mesh);
        let indices = flatten_faces(mesh.faces())?;
        let normals = if options.compute_normals {
            compute_vertex_normals(&positions, &indices)
        } else {
            Vec::new()
        };

        Ok(RenderBuffers {
            colors: uniform_colors(options.solid_color, positions.len() / 3),
            positions,
            indices,
            normals,
            polygon_sizes: Vec::new(),
            is_solid: true,
        })
    }

    fn name(&self) -> &'static str {
        "solid mesh"
    }
}

/// Paper polygons plus thick colored edges for flat crease patterns
#[derive(Clone, Copy, Debug, Default)]
pub struct CreasePatternBuilder;

impl GeometryBuilder for CreasePatternBuilder {
    fn build(&self, doc: &FoldDocument, options: &RenderOptions) -> Result<RenderBuffers> {
        // Faces and edges without coordinates have nothing to draw
        if doc.vertices_coords.is_none() {
            log::debug!("crease pattern has no vertices_coords, nothing to draw");
            return Ok(RenderBuffers::new());
        }
        check_vertex_count(doc.vertex_count() + doc.edge_count() * VERTICES_PER_EDGE)?;

        let normal = surface_normal(doc);
        let max_extent = bounding_box(doc).max_extent() as f32;
        let stroke_width = options.stroke_width_for(max_extent);
        log::debug!(
            "crease pattern: stroke width {} (max extent {})",
            stroke_width,
            max_extent
        );

        let positions = flatten_positions(doc);
        let paper = RenderBuffers {
            colors: uniform_colors(options.paper_color, positions.len() / 3),
            positions,
            indices: flatten_faces(doc.faces())?,
            normals: Vec::new(),
            polygon_sizes: doc.faces().iter().map(Vec::len).collect(),
            is_solid: false,
        };

        let edges = synthesize_edge_geometry(doc, &normal, stroke_width)?;
        merge_geometry(paper, &edges)
    }

    fn name(&self) -> &'static str {
        "crease pattern"
    }
}

/// Pick the builder for a document's classification
pub fn builder_for(doc: &FoldDocument) -> &'static dyn GeometryBuilder {
    if is_solid_3d(doc) {
        &SolidMeshBuilder
    } else {
        &CreasePatternBuilder
    }
}

/// Build render buffers with default options
pub fn build_render_geometry(doc: &FoldDocument) -> Result<RenderBuffers> {
    build_render_geometry_with(doc, &RenderOptions::default())
}

/// Build render buffers
///
/// Validates the document, classifies it as solid or flat and runs the
/// matching builder. Fails only on invalid indices or when the result would
/// not fit a 16-bit index buffer.
pub fn build_render_geometry_with(
    doc: &FoldDocument,
    options: &RenderOptions,
) -> Result<RenderBuffers> {
    doc.validate()?;

    let builder = builder_for(doc);
    let buffers = builder.build(doc, options)?;
    log::debug!(
        "{}: {} vertices, {} indices ({} triangles)",
        builder.name(),
        buffers.vertex_count(),
        buffers.index_count(),
        buffers.triangle_count()
    );
    Ok(buffers)
}

/// Append edge geometry after the paper
///
/// Edge indices are shifted by the paper's vertex count, so
/// `merged.indices[paper_index_count + i] == edges.indices[i] + paper_vertex_count`.
pub fn merge_geometry(mut paper: RenderBuffers, edges: &EdgeGeometry) -> Result<RenderBuffers> {
    let base = paper.vertex_count();
    let total = base + edges.vertex_count();
    if total > MAX_VERTICES {
        return Err(Error::index_overflow(total));
    }

    let shifted = edges
        .offset_indices(base)
        .ok_or_else(|| Error::index_overflow(total))?;

    paper.positions.extend_from_slice(&edges.positions);
    paper.colors.extend_from_slice(&edges.colors);
    paper.indices.extend(shifted);
    Ok(paper)
}

/// Vertex coordinates padded to 3D, flattened to f32
pub fn flatten_positions(doc: &FoldDocument) -> Vec<f32> {
    doc.vertices_coords3d()
        .into_iter()
        .flat_map(|c| c.map(|v| v as f32))
        .collect()
}

/// Concatenate face vertex lists into a 16-bit index buffer
pub fn flatten_faces(faces: &[Vec<VertexIndex>]) -> Result<Vec<u16>> {
    faces
        .iter()
        .flatten()
        .map(|v| u16::try_from(v.0).map_err(|_| Error::index_overflow(v.index() + 1)))
        .collect()
}

fn check_vertex_count(vertex_count: usize) -> Result<()> {
    if vertex_count > MAX_VERTICES {
        return Err(Error::index_overflow(vertex_count));
    }
    Ok(())
}

fn uniform_colors(color: Rgb, vertex_count: usize) -> Vec<f32> {
    color.repeat(vertex_count)
}
