// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! FOLD Model - Document model and shared types for FOLD previews
//!
//! This crate holds the data that flows between the decoder, the geometry
//! engine and the renderer:
//!
//! - [`FoldDocument`] - the vertex/edge/face arrays of a FOLD file, with typed
//!   indices and a validation pass
//! - [`FoldAssignment`] - mountain/valley/flat/boundary/unassigned edge types
//!   and their stroke colors
//! - [`RenderBuffers`] / [`RenderOptions`] - flat GPU buffers and the knobs
//!   that shape them
//! - [`DocumentParser`] - the decoder interface a host calls
//!
//! # Example
//!
//! ```
//! use fold_model::{FoldDocument, FoldAssignment, EdgeIndex};
//!
//! let doc = FoldDocument::new()
//!     .with_coords(vec![vec![0.0, 0.0], vec![1.0, 0.0]])
//!     .with_edges(&[[0, 1]])
//!     .with_assignments(&["v"]);
//!
//! assert!(doc.validate().is_ok());
//! assert_eq!(doc.assignment(EdgeIndex(0)), FoldAssignment::Valley);
//! ```

pub mod document;
pub mod error;
pub mod render;
pub mod traits;
pub mod types;

// Re-export all public types
pub use document::*;
pub use error::*;
pub use render::*;
pub use traits::*;
pub use types::*;
