// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # FOLD Geometry Engine
//!
//! Turns FOLD documents into GPU-ready render buffers. The crate works on the
//! validated [`FoldDocument`](fold_model::FoldDocument) from `fold-model` and
//! does no I/O.
//!
//! ## Overview
//!
//! - **Analysis**: bounding box, solid/flat classification, surface normal
//! - **Triangulation**: zigzag-strip triangulation of convex faces
//! - **Edge Synthesis**: colored quads that give crease lines a visible width
//! - **Assembly**: merged paper and edge buffers, or a lit triangle mesh
//! - **Export**: Wavefront OBJ text
//!
//! ## Architecture
//!
//! [`build_render_geometry`] validates the document, then dispatches to a
//! [`GeometryBuilder`]:
//!
//! - [`SolidMeshBuilder`] for non-planar 3D models
//! - [`CreasePatternBuilder`] for flat crease patterns
//!
//! ## Quick Start
//!
//! ```rust
//! use fold_geometry::build_render_geometry;
//! use fold_model::FoldDocument;
//!
//! let doc = FoldDocument::new()
//!     .with_coords(vec![vec![0.0, 0.0], vec![1.0, 0.0], vec![1.0, 1.0]])
//!     .with_edges(&[[0, 1], [1, 2], [2, 0]])
//!     .with_assignments(&["B", "M", "V"])
//!     .with_faces(vec![vec![0, 1, 2]]);
//!
//! let buffers = build_render_geometry(&doc)?;
//! assert!(!buffers.is_solid);
//! assert_eq!(buffers.vertex_count(), 3 + 3 * 4);
//! # Ok::<(), fold_geometry::Error>(())
//! ```

pub mod analysis;
pub mod assembler;
pub mod edges;
pub mod error;
pub mod export;
pub mod normals;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector2, Vector3};

// Re-export main types
pub use analysis::{
    bounding_box, faces_signed_area, is_solid_3d, surface_normal, vertex_points, BoundingBox,
    COPLANAR_TOLERANCE,
};
pub use assembler::{
    build_render_geometry, build_render_geometry_with, builder_for, flatten_faces,
    flatten_positions, merge_geometry, CreasePatternBuilder, GeometryBuilder, SolidMeshBuilder,
};
pub use edges::{
    edge_offset, synthesize_edge_geometry, EdgeGeometry, QUAD_INDICES, VERTICES_PER_EDGE,
};
pub use error::{Error, Result};
pub use export::to_obj;
pub use normals::compute_vertex_normals;
pub use triangulation::{triangle_count, triangulate, triangulate_face, zigzag_strip};
