use glam::*;

use crate::{
    Albedo, ExportError, ExportOptions, MeshData, SampleMode, SceneGeometry, Sigma, radius,
};

/// Sigma components are clamped to at least this before any logarithm is
/// taken downstream.
pub const SIGMA_MIN: f32 = 1e-12;

/// One sampled Gaussian splat.
///
/// Immutable once constructed; the PLY serializer consumes it as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplatSample {
    /// World-space position.
    pub position: Vec3,
    /// Unit surface normal.
    pub normal: Vec3,
    /// Linear-light RGB, already boosted.
    pub color_linear: Vec3,
    /// Per-axis standard deviations, each at least [`SIGMA_MIN`].
    pub sigma: Vec3,
}

impl SplatSample {
    /// Create a sample, re-normalizing the normal (degenerate input falls
    /// back to +Y) and clamping sigma components to [`SIGMA_MIN`].
    pub fn new(position: Vec3, normal: Vec3, color_linear: Vec3, sigma: Vec3) -> Self {
        Self {
            position,
            normal: normal.try_normalize().unwrap_or(Vec3::Y),
            color_linear,
            sigma: sigma.max(Vec3::splat(SIGMA_MIN)),
        }
    }
}

/// Sample every mesh of the scene into an ordered list of splats.
///
/// Ordering is deterministic: meshes in provider order, vertices or triangles
/// in index order within each mesh. Fails with [`ExportError::NoGeometry`]
/// when the scene holds no meshes; this happens before any file I/O.
pub fn sample_scene(
    scene: &SceneGeometry,
    options: &ExportOptions,
) -> Result<Vec<SplatSample>, ExportError> {
    if scene.meshes.is_empty() {
        return Err(ExportError::NoGeometry);
    }

    let albedo = scene.albedo();
    let flat_color = scene.flat_color();
    let mut samples = Vec::new();

    for mesh in &scene.meshes {
        match options.mode {
            SampleMode::Vertex => {
                sample_vertices(mesh, &albedo, flat_color, options, &mut samples)
            }
            SampleMode::TriangleCentroid => {
                sample_centroids(mesh, &albedo, flat_color, options, &mut samples)
            }
        }
    }

    log::info!(
        "Sampled {} splats from {} meshes",
        samples.len(),
        scene.meshes.len()
    );

    Ok(samples)
}

fn sample_vertices(
    mesh: &MeshData,
    albedo: &Albedo,
    flat_color: Vec3,
    options: &ExportOptions,
    samples: &mut Vec<SplatSample>,
) {
    let normals = mesh.normals();
    let uvs = mesh.uvs();
    let colors = mesh.colors();

    // Only pay for the radius pass when it feeds the sigmas.
    let radii = match options.sigma {
        Sigma::Auto { .. } => Some(radius::estimate_vertex_radii(mesh)),
        Sigma::Manual(..) => None,
    };

    for (i, &position) in mesh.vertices.iter().enumerate() {
        let normal = normals.map(|n| n[i]).unwrap_or(Vec3::Y);

        let color = if options.use_albedo_texture {
            albedo.sample(uvs.map(|uv| uv[i]).unwrap_or(Vec2::ZERO))
        } else {
            colors.map(|c| c[i].truncate()).unwrap_or(flat_color)
        };

        let sigma = match options.sigma {
            Sigma::Auto { k, z_const } => {
                let r = radii.as_ref().map(|r| r[i]).unwrap_or(0.0);
                Vec3::new(k * r, k * r, z_const)
            }
            Sigma::Manual(sigma) => sigma,
        };

        samples.push(SplatSample::new(
            position,
            normal,
            color * options.color_boost,
            sigma,
        ));
    }
}

fn sample_centroids(
    mesh: &MeshData,
    albedo: &Albedo,
    flat_color: Vec3,
    options: &ExportOptions,
    samples: &mut Vec<SplatSample>,
) {
    let normals = mesh.normals();
    let uvs = mesh.uvs();
    let colors = mesh.colors();

    for (i0, i1, i2) in mesh.triangles() {
        let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
        let p0 = mesh.vertices[i0];
        let p1 = mesh.vertices[i1];
        let p2 = mesh.vertices[i2];
        let position = (p0 + p1 + p2) / 3.0;

        // Mean vertex normal when available, geometric face normal otherwise.
        // A zero cross product stays zero here; the sample constructor
        // resolves it.
        let normal = match normals {
            Some(n) => (n[i0] + n[i1] + n[i2]).normalize_or_zero(),
            None => (p1 - p0).cross(p2 - p0).normalize_or_zero(),
        };

        let color = if options.use_albedo_texture {
            let uv = uvs
                .map(|uv| (uv[i0] + uv[i1] + uv[i2]) / 3.0)
                .unwrap_or(Vec2::ZERO);
            albedo.sample(uv)
        } else {
            match colors {
                Some(c) => (c[i0].truncate() + c[i1].truncate() + c[i2].truncate()) / 3.0,
                None => flat_color,
            }
        };

        let sigma = match options.sigma {
            Sigma::Auto { k, z_const } => {
                let r = radius::triangle_radius(p0, p1, p2);
                Vec3::new(k * r, k * r, z_const)
            }
            Sigma::Manual(sigma) => sigma,
        };

        samples.push(SplatSample::new(
            position,
            normal,
            color * options.color_boost,
            sigma,
        ));
    }
}
