// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Benchmarks for render buffer assembly.
//!
//! Run with: cargo bench -p fold-geometry

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fold_geometry::{build_render_geometry, synthesize_edge_geometry, triangulate, Vector3};
use fold_model::FoldDocument;

/// Square grid crease pattern with `n` x `n` cells, alternating M/V creases
fn create_grid(n: u32) -> FoldDocument {
    let side = n + 1;
    let coords = (0..side)
        .flat_map(|y| (0..side).map(move |x| vec![f64::from(x), f64::from(y)]))
        .collect();
    let at = |x: u32, y: u32| y * side + x;

    let mut edges = Vec::new();
    let mut codes = Vec::new();
    for y in 0..side {
        for x in 0..side {
            if x + 1 < side {
                edges.push([at(x, y), at(x + 1, y)]);
                codes.push(if y % 2 == 0 { "M" } else { "V" });
            }
            if y + 1 < side {
                edges.push([at(x, y), at(x, y + 1)]);
                codes.push(if x % 2 == 0 { "V" } else { "M" });
            }
        }
    }

    let faces = (0..n)
        .flat_map(|y| {
            (0..n).map(move |x| vec![at(x, y), at(x + 1, y), at(x + 1, y + 1), at(x, y + 1)])
        })
        .collect();

    FoldDocument::new()
        .with_coords(coords)
        .with_edges(&edges)
        .with_assignments(&codes)
        .with_faces(faces)
}

/// Pyramid-like solid: a grid lifted into a paraboloid
fn create_solid(n: u32) -> FoldDocument {
    let mut doc = create_grid(n);
    let center = f64::from(n) / 2.0;
    if let Some(coords) = doc.vertices_coords.as_mut() {
        for c in coords.iter_mut() {
            let (dx, dy) = (c[0] - center, c[1] - center);
            c.push(-(dx * dx + dy * dy) / f64::from(n));
        }
    }
    doc
}

fn bench_crease_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("crease_pattern");

    for n in [8u32, 32, 64] {
        let doc = create_grid(n);
        group.throughput(Throughput::Elements(doc.edge_count() as u64));
        group.bench_with_input(BenchmarkId::new("build", n), &doc, |b, doc| {
            b.iter(|| build_render_geometry(black_box(doc)))
        });
        group.bench_with_input(BenchmarkId::new("edges", n), &doc, |b, doc| {
            b.iter(|| synthesize_edge_geometry(black_box(doc), &Vector3::z(), 0.01))
        });
    }

    group.finish();
}

fn bench_solid(c: &mut Criterion) {
    let mut group = c.benchmark_group("solid");

    for n in [8u32, 32, 64] {
        let doc = create_solid(n);
        group.throughput(Throughput::Elements(doc.face_count() as u64));
        group.bench_with_input(BenchmarkId::new("triangulate", n), &doc, |b, doc| {
            b.iter(|| triangulate(black_box(doc)))
        });
        group.bench_with_input(BenchmarkId::new("build", n), &doc, |b, doc| {
            b.iter(|| build_render_geometry(black_box(doc)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_crease_pattern, bench_solid);
criterion_main!(benches);
