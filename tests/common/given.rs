use glam::*;
use mesh_3dgs_export::{MaterialSource, MeshData, SceneGeometry, TextureSampler};

/// Wrapper for a temporary file path that deletes the file on drop.
///
/// The file itself is not created; tests that expect no file to appear can
/// assert on the path directly.
pub struct TempFile(std::path::PathBuf);

impl AsRef<std::path::PathBuf> for TempFile {
    fn as_ref(&self) -> &std::path::PathBuf {
        &self.0
    }
}

impl AsRef<std::path::Path> for TempFile {
    fn as_ref(&self) -> &std::path::Path {
        &self.0
    }
}

impl TempFile {
    pub fn path(&self) -> &std::path::Path {
        &self.0
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

/// Gets a temporary file path with the given suffix.
///
/// Returns a [`TempFile`], which deletes the file on drop.
pub fn temp_file_path(suffix: &str) -> TempFile {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    TempFile(std::env::temp_dir().join(format!(
        "mesh-3dgs-export-test-{}-{nanos}{suffix}",
        std::process::id()
    )))
}

/// A unit quad in the XY plane: 4 vertices, 2 triangles, +Z normals, UVs.
pub fn quad_mesh() -> MeshData {
    MeshData {
        vertices: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        normals: Some(vec![Vec3::Z; 4]),
        uvs: Some(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]),
        colors: None,
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}

/// A single triangle of area pi, so its equivalent-disk radius is exactly 1.
pub fn area_pi_triangle() -> MeshData {
    MeshData {
        vertices: vec![
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, std::f32::consts::PI, 0.0),
        ],
        normals: Some(vec![Vec3::Z; 3]),
        uvs: None,
        colors: None,
        indices: vec![0, 1, 2],
    }
}

/// A scene with one flat-colored mesh.
pub fn flat_scene(mesh: MeshData, color: Vec4) -> SceneGeometry {
    SceneGeometry {
        meshes: vec![mesh],
        materials: vec![MaterialSource {
            texture: None,
            color: Some(color),
        }],
    }
}

/// A flat-shaded red quad scene.
pub fn red_quad_scene() -> SceneGeometry {
    flat_scene(quad_mesh(), Vec4::new(1.0, 0.0, 0.0, 1.0))
}

/// A texture sampler returning the same linear color everywhere.
pub struct SolidTexture(pub Vec4);

impl TextureSampler for SolidTexture {
    fn sample_linear(&self, _uv: Vec2) -> Vec4 {
        self.0
    }
}

/// A texture sampler returning the UV itself as red/green, for asserting
/// where the pipeline sampled.
pub struct UvTexture;

impl TextureSampler for UvTexture {
    fn sample_linear(&self, uv: Vec2) -> Vec4 {
        Vec4::new(uv.x, uv.y, 0.0, 1.0)
    }
}
