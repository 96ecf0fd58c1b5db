// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use kinema_math::{approx_eq, Mat4, Quat, Vec3};

fn same_rotation(a: &Quat, b: &Quat) -> bool {
    approx_eq(a.dot(b).abs(), 1.0)
}

#[test]
fn identity_is_default_and_neutral() {
    let q = Quat::from_angle_axis(37.0, Vec3::new(1.0, 2.0, -0.5));
    assert_eq!(Quat::default(), Quat::IDENTITY);
    assert_eq!(q * Quat::IDENTITY, q);
    assert_eq!(Quat::IDENTITY * q, q);
    assert_eq!(Quat::IDENTITY.to_array(), [1.0, 0.0, 0.0, 0.0]);
}

#[test]
fn unit_quat_times_inverse_is_identity() {
    let q = Quat::from_angle_axis(123.0, Vec3::new(0.2, -0.7, 0.4));
    assert!(approx_eq(q.magnitude(), 1.0));
    assert_eq!(q.multiply(&q.inverse()), Quat::IDENTITY);
    assert_eq!(q.inverse().multiply(&q), Quat::IDENTITY);
}

#[test]
fn rotate_quarter_turns_about_each_axis() {
    let rz = Quat::from_angle_axis(90.0, Vec3::UNIT_Z);
    let ry = Quat::from_angle_axis(90.0, Vec3::UNIT_Y);
    let rx = Quat::from_angle_axis(90.0, Vec3::UNIT_X);
    assert_eq!(rz.rotate(&Vec3::UNIT_X), Vec3::UNIT_Y);
    assert_eq!(ry.rotate(&Vec3::UNIT_Z), Vec3::UNIT_X);
    assert_eq!(rx.rotate(&Vec3::UNIT_Y), Vec3::UNIT_Z);
}

#[test]
fn composition_applies_right_operand_first() {
    let rx = Quat::from_angle_axis(90.0, Vec3::UNIT_X);
    let rz = Quat::from_angle_axis(90.0, Vec3::UNIT_Z);
    // rz first: X -> Y, then rx: Y -> Z.
    assert_eq!((rx * rz).rotate(&Vec3::UNIT_X), Vec3::UNIT_Z);
    // rx first leaves X alone, then rz: X -> Y.
    assert_eq!((rz * rx).rotate(&Vec3::UNIT_X), Vec3::UNIT_Y);
}

#[test]
fn rotate_preserves_length() {
    let q = Quat::from_angle_axis(71.0, Vec3::new(3.0, -1.0, 2.0));
    let v = Vec3::new(4.0, -2.0, 9.0);
    assert!(approx_eq(q.rotate(&v).magnitude(), v.magnitude()));
}

#[test]
fn axis_angle_recovers_construction_inputs() {
    let axis = Vec3::new(1.0, 1.0, 1.0);
    let q = Quat::from_angle_axis(120.0, axis);
    let (degrees, recovered) = q.axis_angle();
    assert!(approx_eq(degrees, 120.0));
    assert_eq!(recovered, axis.normalize());
}

#[test]
fn axis_angle_of_identity_has_no_axis() {
    let (degrees, axis) = Quat::IDENTITY.axis_angle();
    assert_eq!(degrees, 0.0);
    assert!(!axis.is_finite());
}

#[test]
fn from_euler_is_a_rotation_vector() {
    let q = Quat::from_euler(Vec3::new(0.0, 0.0, 90.0));
    assert_eq!(q, Quat::from_angle_axis(90.0, Vec3::UNIT_Z));

    let angles = Vec3::new(30.0, 40.0, 0.0);
    let q = Quat::from_euler(angles);
    assert_eq!(q, Quat::from_angle_axis(50.0, angles));
    let (degrees, _) = q.axis_angle();
    assert!(approx_eq(degrees, 50.0));
}

#[test]
fn zero_rotation_vector_propagates_nan() {
    let q = Quat::from_euler(Vec3::ZERO);
    assert!(q.x().is_nan());
    assert!(Quat::from_angle_axis(45.0, Vec3::ZERO).y().is_nan());
}

#[test]
fn slerp_hits_endpoints_and_midpoint() {
    let a = Quat::from_angle_axis(10.0, Vec3::UNIT_Z);
    let b = Quat::from_angle_axis(100.0, Vec3::UNIT_Z);
    assert_eq!(Quat::slerp(&a, &b, 0.0), a);
    assert_eq!(Quat::slerp(&a, &b, 1.0), b);
    assert_eq!(
        Quat::slerp(&a, &b, 0.5),
        Quat::from_angle_axis(55.0, Vec3::UNIT_Z)
    );
}

#[test]
fn slerp_between_equal_rotations_returns_start() {
    let a = Quat::from_angle_axis(42.0, Vec3::new(0.0, 1.0, 1.0));
    let out = Quat::slerp(&a, &a, 0.3);
    assert_eq!(out, a);
    assert!(out.to_array().iter().all(|c| c.is_finite()));
}

#[test]
fn from_rotation_matrix_trace_branch() {
    let q = Quat::from_angle_axis(65.0, Vec3::new(-1.0, 0.5, 2.0));
    let back = Quat::from_rotation_matrix(&q.to_mat4());
    assert!(same_rotation(&q, &back));
}

#[test]
fn from_rotation_matrix_half_turns_use_dominant_diagonal() {
    for axis in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z, Vec3::new(1.0, 1.0, 0.0)] {
        let q = Quat::from_angle_axis(180.0, axis);
        let back = Quat::from_rotation_matrix(&Mat4::from_quat(&q));
        assert!(same_rotation(&q, &back), "axis {axis}: {q} vs {back}");
        assert!(back.to_array().iter().all(|c| c.is_finite()));
    }
}

#[test]
fn from_rotation_matrix_near_half_turns() {
    // Small |w|: the trace formula would divide by it.
    for axis in [Vec3::UNIT_X, Vec3::UNIT_Y, Vec3::UNIT_Z, Vec3::new(1.0, -2.0, 0.5)] {
        for degrees in [119.0, 121.0, 179.0, 181.0] {
            let q = Quat::from_angle_axis(degrees, axis);
            let back = Quat::from_rotation_matrix(&q.to_mat4());
            assert!(same_rotation(&q, &back), "{degrees} about {axis}: {q} vs {back}");
            assert!(approx_eq(back.magnitude(), 1.0), "{degrees} about {axis}: {back}");
        }
    }
}

#[test]
fn from_rotation_matrix_179_about_z_matches_exactly() {
    let q = Quat::from_angle_axis(179.0, Vec3::UNIT_Z);
    assert_eq!(Quat::from_rotation_matrix(&q.to_mat4()), q);
}

#[test]
fn to_mat4_matches_rotate() {
    let q = Quat::from_angle_axis(-33.0, Vec3::new(0.3, 0.9, -0.2));
    let v = Vec3::new(1.5, -2.0, 0.25);
    assert_eq!(q.to_mat4().transform_direction(&v), q.rotate(&v));
}

#[test]
fn normalize_restores_unit_length() {
    let q = Quat::new(2.0, 0.0, 2.0, 0.0);
    let n = q.normalize();
    assert!(approx_eq(n.magnitude(), 1.0));
    assert_eq!(n.rotate(&Vec3::UNIT_Z), Vec3::UNIT_X);
}

#[test]
fn display_uses_signed_imaginary_units() {
    let q = Quat::new(1.0, -0.5, 0.0, 2.0);
    assert_eq!(format!("{q:.1}"), "1.0 - 0.5i + 0.0j + 2.0k");
    assert_eq!(format!("{}", Quat::IDENTITY), "1 + 0i + 0j + 0k");
}
