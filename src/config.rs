use glam::*;

use crate::{ColorCorrection, DcEncoding};

/// How splats are placed on the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// One splat per mesh vertex.
    #[default]
    Vertex,
    /// One splat per triangle, at the centroid.
    TriangleCentroid,
}

/// How the per-splat standard deviations are chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sigma {
    /// Derive the tangential sigmas from local triangle area.
    ///
    /// `sigma = (k * r, k * r, z_const)` where `r` is the equivalent-disk
    /// radius of the surrounding geometry.
    Auto { k: f32, z_const: f32 },
    /// A fixed sigma vector for every splat.
    Manual(Vec3),
}

impl Default for Sigma {
    fn default() -> Self {
        Self::Auto {
            k: 0.8,
            z_const: 1e-6,
        }
    }
}

/// Order of the quaternion components in the `rot_0..rot_3` fields.
///
/// Downstream 3DGS consumers disagree on this; the Inria convention is
/// w-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotOrder {
    /// `rot_0..rot_3 = w, x, y, z`.
    #[default]
    WFirst,
    /// `rot_0..rot_3 = x, y, z, w`.
    XFirst,
}

/// An immutable snapshot of all export options.
///
/// Captured once before sampling begins; no pipeline stage mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Splat placement mode.
    pub mode: SampleMode,
    /// Uniform opacity in (0, 1), stored as its logit.
    pub alpha: f32,
    /// Sigma policy.
    pub sigma: Sigma,
    /// Sample the albedo texture rather than per-vertex colors.
    pub use_albedo_texture: bool,
    /// Ask providers to bake skinned meshes into static geometry.
    ///
    /// Read by mesh providers only; the sampling pipeline ignores it.
    pub bake_skinned: bool,
    /// Write the real normal into `nx, ny, nz`; otherwise a +Z placeholder
    /// is written. Orientation always uses the real normal.
    pub export_normals: bool,
    /// Multiplier applied to the sampled albedo before color correction.
    pub color_boost: f32,
    /// DC coefficient encoding.
    pub encoding: DcEncoding,
    /// Linear-space color correction stages.
    pub correction: ColorCorrection,
    /// Quaternion component order in the rotation fields.
    pub rot_order: RotOrder,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            mode: SampleMode::default(),
            alpha: 0.25,
            sigma: Sigma::default(),
            use_albedo_texture: true,
            bake_skinned: true,
            export_normals: true,
            color_boost: 1.0,
            encoding: DcEncoding::default(),
            correction: ColorCorrection::default(),
            rot_order: RotOrder::default(),
        }
    }
}
