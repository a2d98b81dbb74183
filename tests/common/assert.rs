use glam::*;

pub const EPSILON: f32 = 1e-5;

pub fn approx(a: f32, b: f32) {
    approx_eps(a, b, EPSILON);
}

pub fn approx_eps(a: f32, b: f32, eps: f32) {
    assert!(
        (a - b).abs() < eps,
        "approx assertion failed\n left: {a}\nright: {b}"
    );
}

pub fn approx_vec3(a: Vec3, b: Vec3) {
    assert!(
        a.abs_diff_eq(b, EPSILON),
        "approx assertion failed\n left: {a}\nright: {b}"
    );
}
