use glam::*;

/// The zeroth-order real spherical-harmonic normalization constant.
pub const SH_C0: f32 = 0.2820947918;

/// Linear-space color correction, applied to every splat color before DC
/// encoding.
///
/// Stage order is fixed: exposure, white balance, saturation, contrast,
/// gamma-out. All stages operate on linear-light RGB; the final gamma stage
/// clamps to [0, 1] first, so the corrected color is always in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCorrection {
    /// Scalar multiplier on all channels.
    pub exposure: f32,
    /// Per-channel multiplicative gain.
    pub white_balance: Vec3,
    /// 1.0 leaves the color unchanged, 0.0 fully desaturates, above 1.0
    /// oversaturates.
    pub saturation: f32,
    /// Contrast around a 0.5 pivot.
    pub contrast: f32,
    /// Output power curve; channels are raised to `1 / gamma_out`.
    pub gamma_out: f32,
}

impl Default for ColorCorrection {
    fn default() -> Self {
        Self {
            exposure: 1.0,
            white_balance: Vec3::ONE,
            saturation: 1.0,
            contrast: 1.0,
            gamma_out: 1.0,
        }
    }
}

impl ColorCorrection {
    /// Run all correction stages on a linear RGB color.
    pub fn apply(&self, color: Vec3) -> Vec3 {
        let mut c = color * self.exposure;

        c *= self.white_balance;

        // BT.709 luma
        let y = 0.2126 * c.x + 0.7152 * c.y + 0.0722 * c.z;
        c = Vec3::splat(y).lerp(c, self.saturation);

        c = (c - 0.5) * self.contrast + 0.5;

        let inv_gamma = 1.0 / self.gamma_out.max(1e-6);
        c.clamp(Vec3::ZERO, Vec3::ONE).powf(inv_gamma)
    }
}

/// How the corrected color maps onto the three DC spherical-harmonic
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DcEncoding {
    /// `f_dc = c * Y00`, the convention popularized by Aras-p's tooling.
    #[default]
    Direct,
    /// `f_dc = (c - 0.5) / Y00`, the Inria SH convention.
    Centered,
    /// `f_dc = (a * c + b) / Y00` with per-channel `a` and `b`.
    Affine { a: Vec3, b: Vec3 },
}

impl DcEncoding {
    /// Encode a corrected color into the DC coefficients.
    pub fn encode(&self, color: Vec3) -> Vec3 {
        match self {
            Self::Direct => color * SH_C0,
            Self::Centered => (color - 0.5) / SH_C0,
            Self::Affine { a, b } => (*a * color + *b) / SH_C0,
        }
    }
}
