// Host-side tests for the icosphere builder and particle scatter.
// The crate itself is wasm-only, so the pure core modules are pulled in
// directly by path.

#![allow(dead_code)]

#[path = "../src/core/mesh.rs"]
mod mesh;

use mesh::{scatter_particles, SphereMesh};

#[test]
fn detail_zero_is_the_raw_icosahedron() {
    let sphere = SphereMesh::icosphere(16.0, 0);
    assert_eq!(sphere.vertex_count(), 12);
    assert_eq!(sphere.edges.len(), 30);
}

#[test]
fn subdivision_counts_follow_the_closed_form() {
    // V = 10 * 4^d + 2, E = 30 * 4^d for a subdivided icosahedron.
    for detail in 0..=3u32 {
        let sphere = SphereMesh::icosphere(16.0, detail);
        let pow = 4usize.pow(detail);
        assert_eq!(sphere.vertex_count(), 10 * pow + 2, "detail {detail}");
        assert_eq!(sphere.edges.len(), 30 * pow, "detail {detail}");
    }
}

#[test]
fn render_detail_has_expected_size() {
    let sphere = SphereMesh::icosphere(16.0, 3);
    assert_eq!(sphere.vertex_count(), 642);
    assert_eq!(sphere.edges.len(), 1920);
}

#[test]
fn every_vertex_sits_on_the_sphere() {
    let radius = 16.0;
    let sphere = SphereMesh::icosphere(radius, 3);
    for p in &sphere.positions {
        assert!((p.length() - radius).abs() < 1e-3);
    }
}

#[test]
fn edges_are_unique_ordered_and_in_range() {
    let sphere = SphereMesh::icosphere(16.0, 2);
    let count = sphere.vertex_count() as u32;
    let mut seen = std::collections::HashSet::new();
    let mut prev: Option<[u32; 2]> = None;
    for e in &sphere.edges {
        assert!(e[0] < e[1], "edge endpoints not canonically ordered: {e:?}");
        assert!(e[1] < count, "edge index out of range: {e:?}");
        assert!(seen.insert(*e), "duplicate edge: {e:?}");
        if let Some(p) = prev {
            assert!(p < *e, "edge list not sorted");
        }
        prev = Some(*e);
    }
}

#[test]
fn scatter_fills_the_cube() {
    let extent = 250.0;
    let particles = scatter_particles(600, extent, 42);
    assert_eq!(particles.len(), 600);
    let half = extent / 2.0;
    for p in &particles {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }
    // Uniform scatter should reach well past the center on each axis.
    assert!(particles.iter().any(|p| p.x.abs() > half * 0.5));
    assert!(particles.iter().any(|p| p.z.abs() > half * 0.5));
}

#[test]
fn scatter_is_deterministic_per_seed() {
    let a = scatter_particles(64, 100.0, 7);
    let b = scatter_particles(64, 100.0, 7);
    assert_eq!(a, b);
    let c = scatter_particles(64, 100.0, 8);
    assert_ne!(a, c);
}
