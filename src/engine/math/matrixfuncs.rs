
// -- Helper functions -- //
//
// All matrices are 4x4, column-major, laid out the way `glUniformMatrix4fv`
// expects them with `transpose = GL_FALSE`.

/// Identity matrix (4x4) representing 'no transformation'.
#[cfg(test)]
pub const IDENTITY_MATRIX: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0,  // Column 1
    0.0, 1.0, 0.0, 0.0,  // Column 2
    0.0, 0.0, 1.0, 0.0,  // Column 3
    0.0, 0.0, 0.0, 1.0,  // Column 4
];

/// Creates a translation matrix from a position vector.
///
/// Moves points by the specified x, y, z amounts.
///
/// # Returns
/// A 4x4 translation matrix.
pub fn translation_matrix(pos: [f32; 3]) -> [f32; 16] {
    [
        1.0, 0.0, 0.0, 0.0,      // Column 1
        0.0, 1.0, 0.0, 0.0,      // Column 2
        0.0, 0.0, 1.0, 0.0,      // Column 3
        pos[0], pos[1], pos[2], 1.0,  // Column 4 (translation components)
    ]
}

/// Builds a unit quaternion `[x, y, z, w]` rotating `radians` about `axis`.
///
/// `axis` is normalized here; a zero axis yields the identity quaternion.
pub fn quat_from_axis_angle(axis: [f32; 3], radians: f32) -> [f32; 4] {
    let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if len == 0.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }

    let (s, c) = (radians * 0.5).sin_cos();
    let k = s / len;
    [axis[0] * k, axis[1] * k, axis[2] * k, c]
}

/// Converts a quaternion rotation into a 4x4 rotation matrix.
///
/// The quaternion is given as [x, y, z, w].
/// This matrix can be multiplied with other transforms.
///
/// # Returns
/// A 4x4 rotation matrix in column-major order.
pub fn rotation_matrix_from_quat(q: [f32; 4]) -> [f32; 16] {
    let x = q[0];
    let y = q[1];
    let z = q[2];
    let w = q[3];

    // Precompute products to simplify matrix
    let xx = x * x;
    let yy = y * y;
    let zz = z * z;
    let xy = x * y;
    let xz = x * z;
    let yz = y * z;
    let wx = w * x;
    let wy = w * y;
    let wz = w * z;

    [
        1.0 - 2.0 * (yy + zz),  2.0 * (xy + wz),        2.0 * (xz - wy),        0.0,  // Column 1
        2.0 * (xy - wz),        1.0 - 2.0 * (xx + zz),  2.0 * (yz + wx),        0.0,  // Column 2
        2.0 * (xz + wy),        2.0 * (yz - wx),        1.0 - 2.0 * (xx + yy),  0.0,  // Column 3
        0.0,                    0.0,                    0.0,                    1.0,  // Column 4
    ]
}

/// Right-handed rotation about +Y by `degrees`.
pub fn rotation_y_matrix(degrees: f32) -> [f32; 16] {
    rotation_matrix_from_quat(quat_from_axis_angle([0.0, 1.0, 0.0], degrees.to_radians()))
}

/// OpenGL-style perspective projection (clip z in [-w, w]).
///
/// `fovy` is the vertical field of view in radians.
pub fn perspective_matrix(fovy: f32, aspect: f32, near: f32, far: f32) -> [f32; 16] {
    let f = 1.0 / (fovy / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        f / aspect, 0.0, 0.0, 0.0,
        0.0, f, 0.0, 0.0,
        0.0, 0.0, (far + near) * nf, -1.0,
        0.0, 0.0, (2.0 * far * near) * nf, 0.0,
    ]
}

/// Transforms a homogeneous point by a column-major matrix.
#[cfg(test)]
pub fn transform_point(m: &[f32; 16], p: [f32; 4]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row] * p[3];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    fn det3(m: &[f32; 16]) -> f32 {
        m[0] * (m[5] * m[10] - m[9] * m[6])
            - m[4] * (m[1] * m[10] - m[9] * m[2])
            + m[8] * (m[1] * m[6] - m[5] * m[2])
    }

    #[test]
    fn rotation_y_is_pure_rotation() {
        for deg in [0.0f32, 0.1, 17.5, 90.0, 133.3, 270.0, 359.9, 1234.5] {
            let m = rotation_y_matrix(deg);

            assert!(approx(det3(&m), 1.0), "det at {deg}");
            assert_eq!([m[12], m[13], m[14], m[15]], [0.0, 0.0, 0.0, 1.0]);
            assert_eq!([m[3], m[7], m[11]], [0.0, 0.0, 0.0]);

            // R * R^T == I on the upper 3x3
            for i in 0..3 {
                for j in 0..3 {
                    let dot: f32 = (0..3).map(|k| m[k * 4 + i] * m[k * 4 + j]).sum();
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!(approx(dot, expected), "orthogonality at {deg}: ({i},{j}) = {dot}");
                }
            }

            // Y axis is fixed.
            let y = transform_point(&m, [0.0, 1.0, 0.0, 0.0]);
            assert!(approx(y[0], 0.0) && approx(y[1], 1.0) && approx(y[2], 0.0));
        }
    }

    #[test]
    fn rotation_y_is_right_handed() {
        // +90 degrees about +Y takes +X to -Z.
        let p = transform_point(&rotation_y_matrix(90.0), [1.0, 0.0, 0.0, 1.0]);
        assert!(approx(p[0], 0.0));
        assert!(approx(p[2], -1.0));
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(rotation_y_matrix(0.0), IDENTITY_MATRIX);
    }

    #[test]
    fn zero_axis_gives_identity_quat() {
        assert_eq!(quat_from_axis_angle([0.0; 3], 1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn translation_moves_points_only() {
        let m = translation_matrix([0.0, 0.0, -25.0]);
        assert_eq!(transform_point(&m, [1.0, 2.0, 3.0, 1.0]), [1.0, 2.0, -22.0, 1.0]);
        assert_eq!(transform_point(&m, [1.0, 2.0, 3.0, 0.0]), [1.0, 2.0, 3.0, 0.0]);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let (near, far) = (0.1, 200.0);
        let m = perspective_matrix(60.0f32.to_radians(), 800.0 / 600.0, near, far);

        let n = transform_point(&m, [0.0, 0.0, -near, 1.0]);
        assert!(approx(n[2] / n[3], -1.0), "near -> {}", n[2] / n[3]);

        let f = transform_point(&m, [0.0, 0.0, -far, 1.0]);
        assert!((f[2] / f[3] - 1.0).abs() < 1e-4, "far -> {}", f[2] / f[3]);

        assert!(approx(m[5] / m[0], 800.0 / 600.0));
    }
}
