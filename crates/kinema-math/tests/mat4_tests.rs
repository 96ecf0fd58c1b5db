// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use kinema_math::{approx_eq, Mat3, Mat4, Quat, Scalar, Vec3, Vec4};

fn assert_angles(actual: Vec3, expected: [Scalar; 3]) {
    for (i, (a, e)) in actual.to_array().iter().zip(expected).enumerate() {
        let diff = (a - e).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        assert!(diff < 1e-6, "axis {i}: {actual} vs {expected:?}");
    }
}

#[test]
fn rot_z_maps_x_to_y() {
    let y = Mat4::rotation_z(90.0).transform_direction(&Vec3::UNIT_X);
    assert_eq!(y, Vec3::UNIT_Y);
}

#[test]
fn rot_y_maps_z_to_x() {
    let x = Mat4::rotation_y(90.0).transform_direction(&Vec3::UNIT_Z);
    assert_eq!(x, Vec3::UNIT_X);
}

#[test]
fn rot_x_maps_y_to_z() {
    let z = Mat4::rotation_x(90.0).transform_direction(&Vec3::UNIT_Y);
    assert_eq!(z, Vec3::UNIT_Z);
}

#[test]
fn single_axis_rotations_agree_with_quaternions() {
    let cases: [(Vec3, fn(Scalar) -> Mat4); 3] = [
        (Vec3::UNIT_X, Mat4::rotation_x),
        (Vec3::UNIT_Y, Mat4::rotation_y),
        (Vec3::UNIT_Z, Mat4::rotation_z),
    ];
    for (axis, build) in cases {
        for degrees in [-135.0, 15.0, 90.0, 200.0] {
            let q = Quat::from_angle_axis(degrees, axis);
            assert_eq!(build(degrees), Mat4::from_quat(&q), "axis {axis} @ {degrees}");
        }
    }
}

#[test]
fn axis_angle_matrix_matches_quaternion_matrix() {
    let axis = Vec3::new(0.4, -1.3, 2.2);
    for degrees in [0.0, 33.0, 180.0, 275.0] {
        let rodrigues = Mat4::rotation_axis_angle(degrees, axis);
        let from_q = Mat4::from_quat(&Quat::from_angle_axis(degrees, axis));
        assert_eq!(rodrigues, from_q);
    }
}

#[test]
fn trs_translates_after_scaling() {
    let m = Mat4::trs(
        &Mat4::from_translation(Vec3::UNIT_X),
        &Mat4::IDENTITY,
        &Mat4::scale_uniform(2.0),
    );
    assert_eq!(m.transform_point(&Vec3::UNIT_X), Vec3::new(3.0, 0.0, 0.0));
    assert_eq!(m * Vec3::UNIT_X, Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn from_trs_matches_composed_trs() {
    let t = Vec3::new(4.0, -1.0, 0.5);
    let q = Quat::from_angle_axis(50.0, Vec3::new(1.0, 1.0, 0.0));
    let s = Vec3::new(2.0, 0.5, 3.0);
    let direct = Mat4::from_trs(t, &q, s);
    let composed = Mat4::trs(
        &Mat4::from_translation(t),
        &Mat4::from_quat(&q),
        &Mat4::from_scale(s),
    );
    assert_eq!(direct, composed);
}

#[test]
fn from_srt_inverts_from_trs() {
    let t = Vec3::new(-3.0, 2.0, 7.0);
    let q = Quat::from_angle_axis(-80.0, Vec3::new(0.0, 1.0, 2.0));
    let s = Vec3::new(1.5, 4.0, 0.25);
    let forward = Mat4::from_trs(t, &q, s);
    let inverse = Mat4::from_srt(s, &q, t);
    assert_eq!(inverse * forward, Mat4::IDENTITY);
    assert_eq!(forward * inverse, Mat4::IDENTITY);

    let p = Vec3::new(0.5, -9.0, 2.0);
    assert_eq!(inverse.transform_point(&forward.transform_point(&p)), p);
}

#[test]
fn srt_of_inverses_matches_from_srt() {
    let t = Mat4::translation(1.0, 2.0, 3.0);
    let r = Mat4::rotation_euler(Vec3::new(10.0, 20.0, 30.0));
    let s = Mat4::scale(2.0, 4.0, 8.0);
    let inverse = Mat4::srt(
        &s.inverse_scale(),
        &r.inverse_rotation(),
        &t.inverse_translation(),
    );
    assert_eq!(inverse * Mat4::trs(&t, &r, &s), Mat4::IDENTITY);
}

#[test]
fn inverse_helpers() {
    let t = Mat4::translation(1.0, -2.0, 3.0);
    assert_eq!(t.inverse_translation(), Mat4::translation(-1.0, 2.0, -3.0));
    let s = Mat4::scale(2.0, 4.0, -0.5);
    assert_eq!(s.inverse_scale(), Mat4::scale(0.5, 0.25, -2.0));
    let r = Mat4::rotation_axis_angle(40.0, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(r * r.inverse_rotation(), Mat4::IDENTITY);
}

#[test]
fn matrix_product_applies_right_operand_first() {
    let scale = Mat4::scale_uniform(3.0);
    let shift = Mat4::translation(1.0, 0.0, 0.0);
    let p = Vec3::new(1.0, 1.0, 1.0);
    assert_eq!((shift * scale).transform_point(&p), Vec3::new(4.0, 3.0, 3.0));
    assert_eq!((scale * shift).transform_point(&p), Vec3::new(6.0, 3.0, 3.0));
}

#[test]
fn transpose_swaps_rows_and_columns() {
    let m = Mat4::from(core::array::from_fn::<Scalar, 16, _>(|i| i as Scalar));
    let t = m.transpose();
    assert_eq!(t.column(0), Vec4::new(0.0, 4.0, 8.0, 12.0));
    assert_eq!(t.transpose().to_array(), m.to_array());
}

#[test]
fn columns_follow_forward_up_right_w() {
    let m = Mat4::from_trs(Vec3::new(7.0, 8.0, 9.0), &Quat::IDENTITY, Vec3::new(2.0, 3.0, 4.0));
    let [f, u, r, w] = m.columns();
    assert_eq!(f, Vec4::new(2.0, 0.0, 0.0, 0.0));
    assert_eq!(u, Vec4::new(0.0, 3.0, 0.0, 0.0));
    assert_eq!(r, Vec4::new(0.0, 0.0, 4.0, 0.0));
    assert_eq!(w, Vec4::new(7.0, 8.0, 9.0, 1.0));
    assert_eq!(m.to_array()[12..15], [7.0, 8.0, 9.0]);
}

#[test]
fn euler_round_trip_away_from_gimbal_lock() {
    let m = Mat4::rotation_euler(Vec3::new(30.0, 45.0, 60.0));
    assert_angles(m.euler_angles(), [30.0, 45.0, 60.0]);
}

#[test]
fn euler_extraction_wraps_negative_angles() {
    let m = Mat4::rotation_euler(Vec3::new(-30.0, -20.0, -90.0));
    assert_angles(m.euler_angles(), [330.0, 340.0, 270.0]);
    let angles = m.euler_angles().to_array();
    assert!(angles.iter().all(|a| (0.0..360.0).contains(a)));
}

#[test]
fn euler_gimbal_lock_folds_roll_into_z() {
    let m = Mat4::rotation_euler(Vec3::new(30.0, 90.0, 20.0));
    let angles = m.euler_angles();
    assert_angles(angles, [0.0, 90.0, 50.0]);
    assert_eq!(Mat4::rotation_euler(angles), m);
}

#[test]
fn from_mat3_and_back() {
    let frame = Mat3::from_forward(Vec3::new(1.0, 0.0, 1.0));
    let wide = Mat4::from_mat3(&frame);
    assert_eq!(wide.column(3), Vec4::UNIT_W);
    assert_eq!(Mat3::from_mat4(&wide), frame);
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(wide.transform_direction(&v), frame * v);
}

#[test]
fn from_forward_x_is_identity() {
    assert_eq!(Mat3::from_forward(Vec3::UNIT_X), Mat3::IDENTITY);
    assert_eq!(Mat4::from_mat3(&Mat3::from_forward(Vec3::new(5.0, 0.0, 0.0))), Mat4::IDENTITY);
}

#[test]
fn from_forward_builds_orthonormal_frame() {
    let frame = Mat3::from_forward(Vec3::new(2.0, 1.0, -3.0));
    let [f, u, r] = frame.columns();
    assert!(approx_eq(f.magnitude(), 1.0));
    assert!(approx_eq(u.magnitude(), 1.0));
    assert!(approx_eq(r.magnitude(), 1.0));
    assert!(approx_eq(f.dot(&u), 0.0));
    assert!(approx_eq(f.dot(&r), 0.0));
    assert!(approx_eq(u.dot(&r), 0.0));
    assert!(u.y() > 0.0);
}

#[test]
fn mat3_multiply_and_transpose() {
    let a = Mat3::from_mat4(&Mat4::rotation_z(90.0));
    let b = Mat3::from_mat4(&Mat4::rotation_x(90.0));
    let ab = Mat3::from_mat4(&(Mat4::rotation_z(90.0) * Mat4::rotation_x(90.0)));
    assert_eq!(a * b, ab);
    assert_eq!(a.transpose(), Mat3::from_mat4(&Mat4::rotation_z(-90.0)));
    assert_eq!(a.transform(&Vec3::UNIT_X), Vec3::UNIT_Y);
}

#[test]
fn display_prints_rows() {
    let m = Mat4::translation(1.0, 2.0, 3.0);
    assert_eq!(
        format!("{m:.1}"),
        "1.0, 0.0, 0.0, 1.0\n0.0, 1.0, 0.0, 2.0\n0.0, 0.0, 1.0, 3.0\n0.0, 0.0, 0.0, 1.0"
    );
}
