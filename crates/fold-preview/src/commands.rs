// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subcommand implementations

use anyhow::{Context, Result};
use fold_geometry::{
    bounding_box, build_render_geometry_with, is_solid_3d, surface_normal, to_obj, triangulate,
};
use fold_model::{FoldDocument, RenderOptions};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Read and validate a FOLD file
pub fn load(path: &Path) -> Result<FoldDocument> {
    fold_parser::parse_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Print a summary of the document and the buffers it renders to
pub fn info(doc: &FoldDocument, options: &RenderOptions, out: &mut impl Write) -> Result<()> {
    let bbox = bounding_box(doc);
    let solid = is_solid_3d(doc);

    writeln!(out, "Vertices: {}", doc.vertex_count())?;
    writeln!(out, "Edges:    {}", doc.edge_count())?;
    writeln!(out, "Faces:    {}", doc.face_count())?;
    writeln!(
        out,
        "Kind:     {}",
        if solid { "3D solid" } else { "crease pattern" }
    )?;
    writeln!(
        out,
        "Bounds:   ({}, {}, {}) .. ({}, {}, {})",
        bbox.min.x, bbox.min.y, bbox.min.z, bbox.max.x, bbox.max.y, bbox.max.z
    )?;

    if !solid {
        let normal = surface_normal(doc);
        writeln!(out, "Normal:   ({}, {}, {})", normal.x, normal.y, normal.z)?;
        writeln!(
            out,
            "Stroke:   {}",
            options.stroke_width_for(bbox.max_extent() as f32)
        )?;
    }

    let buffers = build_render_geometry_with(doc, options)?;
    writeln!(
        out,
        "Buffers:  {} vertices, {} indices, {} triangles",
        buffers.vertex_count(),
        buffers.index_count(),
        buffers.triangle_count()
    )?;
    Ok(())
}

/// Write the render buffers as JSON
pub fn buffers(
    doc: &FoldDocument,
    options: &RenderOptions,
    pretty: bool,
    out: &mut impl Write,
) -> Result<()> {
    let buffers = build_render_geometry_with(doc, options)?;
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &buffers)?;
    } else {
        serde_json::to_writer(&mut *out, &buffers)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write the triangulated document as Wavefront OBJ
pub fn obj(doc: &FoldDocument, output: &Path) -> Result<()> {
    let mesh = triangulate(doc);
    fs::write(output, to_obj(&mesh))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "wrote {} vertices and {} triangles to {}",
        mesh.vertex_count(),
        mesh.face_count(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fold_model::RenderBuffers;

    const CREASE_PATTERN: &str = r#"{
        "vertices_coords": [[0,0],[1,0],[1,1],[0,1]],
        "edges_vertices": [[0,1],[1,2],[2,3],[3,0],[1,3]],
        "edges_assignment": ["B","B","B","B","M"],
        "faces_vertices": [[0,1,3],[1,2,3]]
    }"#;

    fn write_fixture(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("square.fold");
        fs::write(&path, CREASE_PATTERN).unwrap();
        path
    }

    #[test]
    fn test_info() {
        let dir = tempfile::tempdir().unwrap();
        let doc = load(&write_fixture(dir.path())).unwrap();

        let mut out = Vec::new();
        info(&doc, &RenderOptions::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Vertices: 4"));
        assert!(text.contains("Kind:     crease pattern"));
        assert!(text.contains("Stroke:   0.002"));
        assert!(text.contains("Buffers:  24 vertices, 36 indices, 10 triangles"));
    }

    #[test]
    fn test_buffers_json() {
        let dir = tempfile::tempdir().unwrap();
        let doc = load(&write_fixture(dir.path())).unwrap();

        let mut out = Vec::new();
        buffers(&doc, &RenderOptions::default(), false, &mut out).unwrap();
        let decoded: RenderBuffers = serde_json::from_slice(&out).unwrap();

        assert_eq!(decoded.vertex_count(), 4 + 5 * 4);
        assert_eq!(decoded.polygon_sizes, vec![3, 3]);
        assert!(!decoded.is_solid);
    }

    #[test]
    fn test_obj_file() {
        let dir = tempfile::tempdir().unwrap();
        let doc = load(&write_fixture(dir.path())).unwrap();
        let output = dir.path().join("square.obj");

        obj(&doc, &output).unwrap();
        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert!(text.contains("f 1 2 4\n"));
        assert!(text.contains("f 2 3 4\n"));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.fold");
        let err = load(&missing).unwrap_err();
        assert!(format!("{:#}", err).contains("missing.fold"));
    }
}
