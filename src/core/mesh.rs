use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use rand::prelude::*;

/// Undeformed reference sphere: deduplicated vertex positions on a sphere of
/// the given radius, plus the unique wireframe edges as index pairs.
/// Built once at session start and never mutated afterward.
#[derive(Clone, Debug)]
pub struct SphereMesh {
    pub positions: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl SphereMesh {
    /// Midpoint-subdivided icosahedron. Detail 0 is the raw icosahedron
    /// (12 vertices, 30 edges); each level splits every triangle into four,
    /// giving `10 * 4^detail + 2` vertices and `30 * 4^detail` edges.
    pub fn icosphere(radius: f32, detail: u32) -> Self {
        let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let mut positions = vec![
            Vec3::new(-1.0, t, 0.0),
            Vec3::new(1.0, t, 0.0),
            Vec3::new(-1.0, -t, 0.0),
            Vec3::new(1.0, -t, 0.0),
            Vec3::new(0.0, -1.0, t),
            Vec3::new(0.0, 1.0, t),
            Vec3::new(0.0, -1.0, -t),
            Vec3::new(0.0, 1.0, -t),
            Vec3::new(t, 0.0, -1.0),
            Vec3::new(t, 0.0, 1.0),
            Vec3::new(-t, 0.0, -1.0),
            Vec3::new(-t, 0.0, 1.0),
        ];
        let mut faces: Vec<[u32; 3]> = vec![
            [0, 11, 5],
            [0, 5, 1],
            [0, 1, 7],
            [0, 7, 10],
            [0, 10, 11],
            [1, 5, 9],
            [5, 11, 4],
            [11, 10, 2],
            [10, 7, 6],
            [7, 1, 8],
            [3, 9, 4],
            [3, 4, 2],
            [3, 2, 6],
            [3, 6, 8],
            [3, 8, 9],
            [4, 9, 5],
            [2, 4, 11],
            [6, 2, 10],
            [8, 6, 7],
            [9, 8, 1],
        ];

        for _ in 0..detail {
            let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
            let mut next = Vec::with_capacity(faces.len() * 4);
            for f in &faces {
                let a = midpoint(&mut positions, &mut midpoints, f[0], f[1]);
                let b = midpoint(&mut positions, &mut midpoints, f[1], f[2]);
                let c = midpoint(&mut positions, &mut midpoints, f[2], f[0]);
                next.push([f[0], a, c]);
                next.push([f[1], b, a]);
                next.push([f[2], c, b]);
                next.push([a, b, c]);
            }
            faces = next;
        }

        for p in &mut positions {
            *p = p.normalize() * radius;
        }

        let mut edge_set: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        for f in &faces {
            for (a, b) in [(f[0], f[1]), (f[1], f[2]), (f[2], f[0])] {
                edge_set.insert(if a < b { (a, b) } else { (b, a) });
            }
        }
        let mut edges: Vec<[u32; 2]> = edge_set.into_iter().map(|(a, b)| [a, b]).collect();
        edges.sort_unstable();

        Self { positions, edges }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

// Shared-edge midpoints are deduplicated through the cache so neighboring
// triangles agree on a single vertex index.
fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut FnvHashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&i) = cache.get(&key) {
        return i;
    }
    let mid = (positions[a as usize] + positions[b as usize]) * 0.5;
    let index = positions.len() as u32;
    positions.push(mid);
    cache.insert(key, index);
    index
}

/// Decorative particle field: `count` points scattered uniformly in a cube
/// of `extent` world units per side, centered at the origin. Deterministic
/// per seed so a session can be reproduced.
pub fn scatter_particles(count: usize, extent: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}
