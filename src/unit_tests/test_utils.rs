use std::collections::HashMap;

use crate::mesh::{Mesh, Triangle};
use crate::volume::Volume;

/// A 3x3x3 volume with a single hot voxel in the center. Extracting at 0.5
/// yields a small octahedron around it (one triangle per surrounding cell).
pub fn single_hot_voxel() -> Volume<f32> {
    let mut samples = vec![0.0f32; 27];
    samples[1 + 3 * (1 + 3 * 1)] = 1.0;
    Volume::new([3, 3, 3], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0], samples).unwrap()
}

/// A cubic volume holding a radial field `radius - distance_from_center`,
/// so that the 0-level surface is a sphere of the given radius. The center
/// sits between samples, keeping corner values away from exact ties.
pub fn sphere_volume(n: usize, radius: f32) -> Volume<f32> {
    let center = (n - 1) as f32 / 2.0;
    Volume::from_fn([n, n, n], [1.0, 1.0, 1.0], [0.0, 0.0, 0.0], |x, y, z| {
        let (dx, dy, dz) = (x - center, y - center, z - center);
        radius - (dx * dx + dy * dy + dz * dz).sqrt()
    })
}

pub fn assert_indices_valid(mesh: &Mesh<f32>) {
    let num_vertices = mesh.num_vertices();
    for i in 0..mesh.num_tris() {
        let [a, b, c] = mesh.face(i);
        assert!(a < num_vertices && b < num_vertices && c < num_vertices);
        assert!(a != b && b != c && a != c, "face {} repeats an index", i);
    }
}

/// A closed, consistently wound triangle mesh has every directed edge
/// appearing exactly once, paired with its opposite. This fails both on
/// seams (duplicated vertices along shared cell edges) and on flipped
/// triangles.
pub fn assert_closed_and_consistently_wound(mesh: &Mesh<f32>) {
    let mut directed: HashMap<(usize, usize), usize> = HashMap::new();
    for i in 0..mesh.num_tris() {
        let [a, b, c] = mesh.face(i);
        for &edge in &[(a, b), (b, c), (c, a)] {
            *directed.entry(edge).or_insert(0) += 1;
        }
    }
    for (&(from, to), &count) in &directed {
        assert_eq!(
            count, 1,
            "directed edge ({}, {}) appears {} times",
            from, to, count
        );
        assert_eq!(
            directed.get(&(to, from)),
            Some(&1),
            "directed edge ({}, {}) has no opposite",
            from,
            to
        );
    }
}

/// Unnormalized face normal, following the winding order
pub fn triangle_normal(tri: &Triangle<f32>) -> [f32; 3] {
    let [v1, v2, v3] = tri.vertices;
    let u = [v2[0] - v1[0], v2[1] - v1[1], v2[2] - v1[2]];
    let w = [v3[0] - v1[0], v3[1] - v1[1], v3[2] - v1[2]];
    [
        u[1] * w[2] - u[2] * w[1],
        u[2] * w[0] - u[0] * w[2],
        u[0] * w[1] - u[1] * w[0],
    ]
}

pub fn triangle_centroid(tri: &Triangle<f32>) -> [f32; 3] {
    let [v1, v2, v3] = tri.vertices;
    [
        (v1[0] + v2[0] + v3[0]) / 3.0,
        (v1[1] + v2[1] + v3[1]) / 3.0,
        (v1[2] + v2[2] + v3[2]) / 3.0,
    ]
}

/// Total surface area of the mesh
pub fn mesh_area(mesh: &Mesh<f32>) -> f32 {
    mesh.tris()
        .iter()
        .map(|tri| {
            let n = triangle_normal(tri);
            (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt() / 2.0
        })
        .sum()
}
