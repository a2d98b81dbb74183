use glam::*;

use crate::MeshData;

/// Triangles with area at or below this are treated as degenerate and skipped.
const MIN_TRIANGLE_AREA: f32 = 1e-20;

/// At most this many vertices participate in the mesh-scale fallback.
const FALLBACK_SAMPLE_COUNT: usize = 256;

/// Equivalent-disk radius of a triangle: `sqrt(area / pi)`.
///
/// Returns 0 for degenerate triangles (area <= 1e-20).
pub fn triangle_radius(p0: Vec3, p1: Vec3, p2: Vec3) -> f32 {
    let area = 0.5 * (p1 - p0).cross(p2 - p0).length();
    if area <= MIN_TRIANGLE_AREA {
        0.0
    } else {
        (area / std::f32::consts::PI).sqrt()
    }
}

/// Estimate a per-vertex reach as the average equivalent-disk radius of the
/// incident non-degenerate triangles.
///
/// Vertices touched by no such triangle fall back to a crude mesh-scale proxy:
/// 0.25 times the mean distance from vertex 0 to up to the first 256 other
/// vertices. The proxy is computed once per mesh. The output is always finite
/// and non-negative.
pub fn estimate_vertex_radii(mesh: &MeshData) -> Vec<f32> {
    let count = mesh.vertex_count();
    let mut sum = vec![0.0f32; count];
    let mut incident = vec![0u32; count];

    for (i0, i1, i2) in mesh.triangles() {
        let p0 = mesh.vertices[i0 as usize];
        let p1 = mesh.vertices[i1 as usize];
        let p2 = mesh.vertices[i2 as usize];

        let r = triangle_radius(p0, p1, p2);
        if r == 0.0 {
            continue;
        }

        for i in [i0, i1, i2] {
            sum[i as usize] += r;
            incident[i as usize] += 1;
        }
    }

    let fallback = mesh_scale_fallback(mesh);

    sum.iter()
        .zip(incident.iter())
        .map(|(&sum, &count)| {
            if count > 0 {
                sum / count as f32
            } else {
                fallback
            }
        })
        .collect()
}

fn mesh_scale_fallback(mesh: &MeshData) -> f32 {
    if mesh.vertex_count() < 2 {
        return 0.0;
    }

    let sample = (mesh.vertex_count() - 1).min(FALLBACK_SAMPLE_COUNT);
    let origin = mesh.vertices[0];
    let mean = mesh.vertices[1..=sample]
        .iter()
        .map(|v| (*v - origin).length())
        .sum::<f32>()
        / sample as f32;

    mean * 0.25
}
