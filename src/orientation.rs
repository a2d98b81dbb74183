use glam::*;

/// Build a unit quaternion whose forward (+Z) axis is the given normal.
///
/// The input is re-normalized; a degenerate input falls back to +Z. The up
/// helper is world +Y, or world +X when the normal is near-parallel to +Y.
/// The roll around the normal is arbitrary but deterministic for a given
/// normal; callers should only rely on the forward axis and orthonormality.
pub fn from_normal(normal: Vec3) -> Quat {
    let f = normal.try_normalize().unwrap_or(Vec3::Z);

    let up = if f.dot(Vec3::Y).abs() > 0.99 {
        Vec3::X
    } else {
        Vec3::Y
    };

    let t = up.cross(f).normalize();
    let u = f.cross(t);

    Quat::from_mat3(&Mat3::from_cols(t, u, f))
}
