// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render buffers handed to the GPU-facing renderer, and the options that
//! shape them

use crate::Rgb;
use serde::{Deserialize, Serialize};

/// Largest number of vertices addressable by a 16-bit index buffer
pub const MAX_VERTICES: usize = u16::MAX as usize + 1;

/// Floats per interleaved vertex (position + color, or position + normal)
pub const INTERLEAVED_STRIDE: usize = 6;

/// GPU-ready geometry for one previewed document
///
/// `positions`, `colors` and (for solids) `normals` are parallel stride-3
/// arrays. `is_solid` tells the renderer which pipeline to use: lit triangle
/// mesh, or flat crease pattern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderBuffers {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Index list into `positions`
    pub indices: Vec<u16>,
    /// Vertex colors as flattened [r, g, b, ...]
    pub colors: Vec<f32>,
    /// Vertex normals, filled for solid meshes only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub normals: Vec<f32>,
    /// Vertex count of each paper polygon at the start of `indices`
    ///
    /// Crease patterns draw their paper as filled polygons straight from the
    /// document's faces; these runs come before the edge-quad triangles.
    /// Empty for solids, whose indices are all triangles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polygon_sizes: Vec<usize>,
    /// Whether the document was classified as a 3D solid
    pub is_solid: bool,
}

impl RenderBuffers {
    /// Create empty buffers
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there is nothing to draw
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get index count
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of indices used by the paper polygons
    pub fn polygon_index_count(&self) -> usize {
        self.polygon_sizes.iter().sum()
    }

    /// Get triangle count of the triangle-list part of `indices`
    pub fn triangle_count(&self) -> usize {
        (self.indices.len() - self.polygon_index_count().min(self.indices.len())) / 3
    }

    /// Axis-aligned bounds of the positions, for fitting the camera
    ///
    /// Returns zeros when there are no vertices.
    pub fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        if self.positions.len() < 3 {
            return ([0.0; 3], [0.0; 3]);
        }
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for vertex in self.positions.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(vertex[axis]);
                max[axis] = max[axis].max(vertex[axis]);
            }
        }
        (min, max)
    }

    /// Interleave into a single stride-6 vertex buffer
    ///
    /// Solids get position + normal, crease patterns position + color. Missing
    /// attribute data is written as zeros.
    pub fn interleaved(&self) -> Vec<f32> {
        let attribute = if self.is_solid {
            &self.normals
        } else {
            &self.colors
        };
        let mut out = Vec::with_capacity(self.vertex_count() * INTERLEAVED_STRIDE);
        for (i, position) in self.positions.chunks_exact(3).enumerate() {
            out.extend_from_slice(position);
            match attribute.get(i * 3..i * 3 + 3) {
                Some(values) => out.extend_from_slice(values),
                None => out.extend_from_slice(&[0.0; 3]),
            }
        }
        out
    }
}

/// Options controlling how a document is turned into render buffers
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Stroke width is the largest bounding-box extent divided by this
    pub stroke_divisor: f32,
    /// Fixed stroke width, overriding `stroke_divisor`
    pub stroke_width: Option<f32>,
    /// Whether to compute vertex normals for solid meshes
    pub compute_normals: bool,
    /// Color of crease-pattern paper
    pub paper_color: Rgb,
    /// Color of solid meshes
    pub solid_color: Rgb,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            stroke_divisor: 500.0,
            stroke_width: None,
            compute_normals: true,
            paper_color: [1.0, 1.0, 1.0],
            solid_color: [1.0, 1.0, 1.0],
        }
    }
}

impl RenderOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width divisor
    pub fn with_stroke_divisor(mut self, divisor: f32) -> Self {
        self.stroke_divisor = divisor;
        self
    }

    /// Use a fixed stroke width
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Set whether solid meshes get vertex normals
    pub fn with_normals(mut self, enabled: bool) -> Self {
        self.compute_normals = enabled;
        self
    }

    /// Stroke width for a model whose largest extent is `max_extent`
    pub fn stroke_width_for(&self, max_extent: f32) -> f32 {
        match self.stroke_width {
            Some(width) => width,
            None if self.stroke_divisor > 0.0 => max_extent / self.stroke_divisor,
            None => 0.0,
        }
    }
}
