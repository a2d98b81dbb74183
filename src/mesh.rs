use glam::*;
use itertools::Itertools;

/// One renderable's triangulated geometry in world space.
///
/// Optional per-vertex arrays are only honored when their length matches the
/// vertex count; otherwise they are treated as absent and the documented
/// fallback applies.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vec3>,
    pub normals: Option<Vec<Vec3>>,
    pub uvs: Option<Vec<Vec2>>,
    pub colors: Option<Vec<Vec4>>,
    /// Triangle list; length is a multiple of 3.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the per-vertex normals, if present and correctly sized.
    pub fn normals(&self) -> Option<&[Vec3]> {
        self.normals
            .as_deref()
            .filter(|n| n.len() == self.vertices.len())
    }

    /// Get the per-vertex UVs, if present and correctly sized.
    pub fn uvs(&self) -> Option<&[Vec2]> {
        self.uvs
            .as_deref()
            .filter(|uv| uv.len() == self.vertices.len())
    }

    /// Get the per-vertex colors, if present and correctly sized.
    pub fn colors(&self) -> Option<&[Vec4]> {
        self.colors
            .as_deref()
            .filter(|c| c.len() == self.vertices.len())
    }

    /// Iterate over the triangle index triples.
    pub fn triangles(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.indices.iter().copied().tuples()
    }
}

/// A 2D texture sampler returning linear-space RGBA at normalized UV.
///
/// Filtering and wrap/clamp policy are owned by the implementor; the sampling
/// pipeline treats the lookup as opaque.
pub trait TextureSampler {
    fn sample_linear(&self, uv: Vec2) -> Vec4;
}

/// An albedo source offered by one material.
#[derive(Default)]
pub struct MaterialSource {
    /// Optional texture sampler, already in linear space.
    pub texture: Option<Box<dyn TextureSampler>>,
    /// Optional flat fallback color, linear RGBA.
    pub color: Option<Vec4>,
}

impl std::fmt::Debug for MaterialSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialSource")
            .field("texture", &self.texture.as_ref().map(|_| ".."))
            .field("color", &self.color)
            .finish()
    }
}

/// Everything a mesh provider hands the sampler: world-space meshes plus the
/// material sources discovered alongside them.
#[derive(Debug, Default)]
pub struct SceneGeometry {
    pub meshes: Vec<MeshData>,
    pub materials: Vec<MaterialSource>,
}

impl SceneGeometry {
    /// Resolve the albedo source for this scene.
    ///
    /// The first material offering a texture wins; otherwise the first one
    /// offering a flat color; otherwise opaque white.
    pub fn albedo(&self) -> Albedo<'_> {
        if let Some(texture) = self
            .materials
            .iter()
            .find_map(|source| source.texture.as_deref())
        {
            return Albedo::Texture(texture);
        }

        Albedo::Flat(self.flat_color().extend(1.0))
    }

    /// The first flat material color, linear RGB, defaulting to white.
    ///
    /// Used directly when texture sampling is disabled and a mesh carries no
    /// vertex colors.
    pub fn flat_color(&self) -> Vec3 {
        self.materials
            .iter()
            .find_map(|source| source.color)
            .map(Vec4::truncate)
            .unwrap_or(Vec3::ONE)
    }
}

/// The resolved scene-wide albedo source.
pub enum Albedo<'a> {
    Texture(&'a dyn TextureSampler),
    Flat(Vec4),
}

impl Albedo<'_> {
    /// Sample the linear RGB albedo at the given UV.
    pub fn sample(&self, uv: Vec2) -> Vec3 {
        match self {
            Self::Texture(texture) => texture.sample_linear(uv).truncate(),
            Self::Flat(color) => color.truncate(),
        }
    }
}
