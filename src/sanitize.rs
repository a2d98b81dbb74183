use glam::*;

/// Replace a non-finite scalar with 0.
#[inline]
pub fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

/// Replace non-finite components with 0.
#[inline]
pub fn finite_vec3(v: Vec3) -> Vec3 {
    Vec3::new(
        finite_or_zero(v.x),
        finite_or_zero(v.y),
        finite_or_zero(v.z),
    )
}

/// Normalize a quaternion, falling back to identity when its magnitude is
/// below 1e-8.
#[inline]
pub fn unit_or_identity(q: Quat) -> Quat {
    let mag = q.length();
    if !mag.is_finite() || mag < 1e-8 {
        Quat::IDENTITY
    } else {
        q / mag
    }
}
