//! Icosphere primitive tests.

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use config::constants::approx_equal;
use glam::{Vec2, Vec3};

use super::*;
use crate::weld::{weld_key, VertexWelder};

fn distinct_positions(mesh: &Mesh) -> usize {
    let mut welder = VertexWelder::new();
    for p in mesh.positions() {
        welder.insert(weld_key(*p, Vec2::ZERO));
    }
    welder.len()
}

#[test]
fn test_base_layout() {
    let base = icosphere_base();
    assert_eq!(base.vertex_count(), BASE_VERTEX_COUNT);
    assert_eq!(base.index_count(), 60);
    for p in &base.positions()[0..5] {
        assert_eq!(*p, Vec3::new(0.0, 0.5, 0.0));
    }
    for p in &base.positions()[17..22] {
        assert_eq!(*p, Vec3::new(0.0, -0.5, 0.0));
    }
    let ring_height = 0.5 * 0.5f32.atan().sin();
    for p in &base.positions()[5..11] {
        assert_abs_diff_eq!(p.y, ring_height, epsilon = 1e-6);
    }
    for p in &base.positions()[11..17] {
        assert_abs_diff_eq!(p.y, -ring_height, epsilon = 1e-6);
    }
}

#[test]
fn test_base_uvs() {
    let base = icosphere_base();
    assert_abs_diff_eq!(base.uvs()[0].x, 0.1, epsilon = 1e-6);
    assert_abs_diff_eq!(base.uvs()[11].x, -0.1, epsilon = 1e-6);
    assert_eq!(base.uvs()[10], Vec2::new(1.0, 1.0 / 3.0));
    assert_eq!(base.uvs()[21], Vec2::new(1.0, 1.0));
}

#[test]
fn test_all_vertices_on_sphere() {
    let mesh = icosphere(3, &GeneratorSetting::default()).unwrap();
    for p in mesh.positions() {
        assert_abs_diff_eq!(p.length(), 0.5, epsilon = 1e-6);
    }
}

#[test]
fn test_zero_subdivisions_is_base() {
    let mesh = subdivide(icosphere_base(), 0);
    assert_eq!(mesh, icosphere_base());

    let generated = icosphere(0, &GeneratorSetting::default()).unwrap();
    assert_eq!(generated.vertex_count(), 22);
    assert_eq!(generated.triangle_count(), 20);
    assert_eq!(generated.index_count(), 60);
}

#[test]
fn test_triangle_counts() {
    for n in 0..4 {
        let mesh = subdivide(icosphere_base(), n);
        assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(n));
    }
}

#[test]
fn test_vertex_counts_match_closed_form() {
    for n in 0..4 {
        let mesh = subdivide(icosphere_base(), n);
        assert_eq!(mesh.vertex_count() as u64, icosphere_vertex_count(n), "n = {n}");
    }
}

#[test]
fn test_distinct_positions_follow_euler() {
    for n in 0..4 {
        let mesh = subdivide(icosphere_base(), n);
        assert_eq!(distinct_positions(&mesh), 10 * 4usize.pow(n) + 2, "n = {n}");
    }
}

#[test]
fn test_no_two_vertices_within_epsilon() {
    let mesh = subdivide(icosphere_base(), 2);
    let keys: Vec<_> = mesh
        .positions()
        .iter()
        .zip(mesh.uvs())
        .map(|(p, uv)| weld_key(*p, *uv))
        .collect();
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            let same = a.iter().zip(b).all(|(x, y)| approx_equal(*x, *y));
            assert!(!same, "{a:?} duplicated");
        }
    }
}

#[test]
fn test_shared_edges_share_midpoints() {
    let base = icosphere_base();
    let mesh = subdivide(base.clone(), 1);

    // The fourth child of parent k is (mid13, mid12, mid23)
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
    for (k, &[v1, v2, v3]) in base.triangles().iter().enumerate() {
        let [m13, m12, m23] = mesh.triangles()[4 * k + 3];
        for ((a, b), mid) in [((v1, v2), m12), ((v1, v3), m13), ((v2, v3), m23)] {
            let edge = (a.min(b), a.max(b));
            let existing = *midpoints.entry(edge).or_insert(mid);
            assert_eq!(existing, mid, "edge {edge:?}");
        }
    }
}

#[test]
fn test_midpoint_uv_is_mean() {
    let base = icosphere_base();
    let mesh = subdivide(base.clone(), 1);
    let [v1, v2, _] = base.triangles()[0];
    let [_, m12, _] = mesh.triangles()[3];
    let expected = (base.uvs()[v1 as usize] + base.uvs()[v2 as usize]) * 0.5;
    assert_eq!(mesh.uvs()[m12 as usize], expected);
}

#[test]
fn test_normals_point_outward() {
    let mesh = icosphere(2, &GeneratorSetting::default()).unwrap();
    for (p, n) in mesh.positions().iter().zip(mesh.normals()) {
        assert_abs_diff_eq!(n.length(), 1.0, epsilon = 1e-5);
        assert!(n.dot(*p) > 0.0);
    }
}

#[test]
fn test_closed_form_saturates() {
    assert_eq!(icosphere_vertex_count(40), u64::MAX);
    assert!(icosphere_vertex_count(15) > u64::from(u32::MAX));
    assert!(icosphere_vertex_count(14) < u64::from(u32::MAX));
}

#[test]
fn test_rejects_unaddressable_subdivisions() {
    let result = icosphere(16, &GeneratorSetting::default());
    assert!(matches!(result, Err(MeshError::TooManyVertices { .. })));
}
