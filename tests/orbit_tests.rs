// Host-side tests for the orbit helper and camera position updates.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod controls {
        include!("../src/core/controls.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod viewpoint {
        include!("../src/core/viewpoint.rs");
    }
}
mod common;

use crate::core::camera::update_camera;
use crate::core::controls::ControlId;
use crate::core::orbit::*;
use crate::core::viewpoint::Viewpoint;
use common::{assert_vec3_near, FakeControls};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

fn viewpoint_at(position: Vec3) -> Viewpoint {
    let mut viewpoint = Viewpoint::default();
    viewpoint.position = position;
    viewpoint
}

fn undamped() -> OrbitControls {
    OrbitControls {
        enable_damping: false,
        ..OrbitControls::default()
    }
}

#[test]
fn spherical_round_trip_preserves_offset() {
    for offset in [
        Vec3::new(3.0, 2.5, 4.0),
        Vec3::new(-1.0, 0.2, -6.0),
        Vec3::new(0.0, -4.0, 0.5),
    ] {
        let back = Spherical::from_offset(offset).to_offset();
        assert_vec3_near(back, offset, 1e-5);
    }
}

#[test]
fn update_without_input_keeps_manual_position() {
    let mut orbit = OrbitControls::default();
    let mut viewpoint = viewpoint_at(Vec3::new(3.0, 2.5, 4.0));
    orbit.update(&mut viewpoint);

    assert_vec3_near(viewpoint.position, Vec3::new(3.0, 2.5, 4.0), 1e-4);
    assert_eq!(viewpoint.target, Vec3::ZERO);
    assert!(!orbit.update(&mut viewpoint));
}

#[test]
fn undamped_rotation_applies_in_one_update() {
    let mut orbit = undamped();
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    orbit.rotate_left(-FRAC_PI_2);

    assert!(orbit.update(&mut viewpoint));
    assert_vec3_near(viewpoint.position, Vec3::new(5.0, 0.0, 0.0), 1e-4);
    assert!(!orbit.update(&mut viewpoint));
}

#[test]
fn damped_rotation_glides_to_the_full_angle() {
    let mut orbit = OrbitControls::default();
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    orbit.rotate_left(-FRAC_PI_2);

    orbit.update(&mut viewpoint);
    let first_step = Spherical::from_offset(viewpoint.position).theta;
    assert!((first_step - FRAC_PI_2 * orbit.damping_factor).abs() < 1e-4);

    let mut frames = 1;
    while orbit.update(&mut viewpoint) {
        frames += 1;
        assert!(frames < 1000, "damping never settled");
    }
    assert_vec3_near(viewpoint.position, Vec3::new(5.0, 0.0, 0.0), 2e-2);
    assert!((viewpoint.position.length() - 5.0).abs() < 1e-3);
}

#[test]
fn polar_angle_stays_off_the_poles() {
    let mut orbit = undamped();
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    orbit.rotate_up(10.0 * PI);
    orbit.update(&mut viewpoint);

    assert!(viewpoint.position.is_finite());
    assert_vec3_near(viewpoint.position, Vec3::new(0.0, 5.0, 0.0), 1e-3);
    assert!(viewpoint.view_matrix().is_finite());
}

#[test]
fn pointer_drag_of_full_height_is_one_turn() {
    let mut orbit = undamped();
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    orbit.rotate_by_pixels(300.0, 0.0, 600.0);
    orbit.update(&mut viewpoint);

    assert_vec3_near(viewpoint.position, Vec3::new(0.0, 0.0, -5.0), 1e-3);
}

#[test]
fn wheel_dollies_toward_and_away_from_target() {
    let mut orbit = undamped();
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 10.0));

    orbit.wheel(-120.0);
    orbit.update(&mut viewpoint);
    assert!((viewpoint.position.z - 9.5).abs() < 1e-4);

    orbit.wheel(120.0);
    orbit.update(&mut viewpoint);
    assert!((viewpoint.position.z - 10.0).abs() < 1e-4);

    orbit.wheel(0.0);
    assert!(!orbit.update(&mut viewpoint));
}

#[test]
fn distance_limits_clamp_dolly() {
    let mut orbit = OrbitControls {
        min_distance: 2.0,
        max_distance: 8.0,
        ..undamped()
    };
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));

    orbit.dolly_in(0.01);
    orbit.update(&mut viewpoint);
    assert!((viewpoint.position.length() - 2.0).abs() < 1e-4);

    orbit.dolly_out(0.01);
    orbit.update(&mut viewpoint);
    assert!((viewpoint.position.length() - 8.0).abs() < 1e-4);
}

#[test]
fn pan_moves_target_and_camera_together() {
    let mut orbit = undamped();
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    orbit.update(&mut viewpoint);

    // Dragging right slides the scene right, so the target moves left.
    orbit.pan(50.0, 0.0, 500.0, &viewpoint);
    assert!(orbit.update(&mut viewpoint));

    assert!(orbit.target.x < 0.0);
    assert!(orbit.target.y.abs() < 1e-5);
    assert_eq!(viewpoint.target, orbit.target);
    assert_vec3_near(viewpoint.position - viewpoint.target, Vec3::new(0.0, 0.0, 5.0), 1e-4);
}

#[test]
fn pan_is_ignored_when_disabled() {
    let mut orbit = OrbitControls {
        enable_pan: false,
        ..undamped()
    };
    let mut viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    orbit.pan(50.0, 20.0, 500.0, &viewpoint);
    orbit.update(&mut viewpoint);
    assert_eq!(orbit.target, Vec3::ZERO);
}

#[test]
fn camera_follows_position_controls() {
    let controls = FakeControls::page_defaults();
    let mut viewpoint = Viewpoint::default();
    let mut orbit = OrbitControls::default();
    update_camera(&controls, &mut viewpoint, &mut orbit);

    assert_vec3_near(viewpoint.position, Vec3::new(3.0, 2.5, 4.0), 1e-4);
    assert_eq!(viewpoint.target, Vec3::ZERO);
}

#[test]
fn malformed_position_keeps_previous_camera() {
    let mut controls = FakeControls::page_defaults();
    let mut viewpoint = Viewpoint::default();
    let mut orbit = OrbitControls::default();
    update_camera(&controls, &mut viewpoint, &mut orbit);
    let before = viewpoint.position;

    controls.set(ControlId::Cy, "");
    controls.set(ControlId::Cz, "far away");
    update_camera(&controls, &mut viewpoint, &mut orbit);
    assert_vec3_near(viewpoint.position, before, 1e-4);
}

#[test]
fn empty_position_text_reads_as_zero() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Cy, "");
    let mut viewpoint = Viewpoint::default();
    let mut orbit = OrbitControls::default();
    update_camera(&controls, &mut viewpoint, &mut orbit);

    assert_vec3_near(viewpoint.position, Vec3::new(3.0, 0.0, 4.0), 1e-4);
}

#[test]
fn camera_looks_at_target() {
    let viewpoint = viewpoint_at(Vec3::new(0.0, 0.0, 5.0));
    let view = viewpoint.view_matrix();
    let target_in_view = view.transform_point3(Vec3::ZERO);
    assert_vec3_near(target_in_view, Vec3::new(0.0, 0.0, -5.0), 1e-5);
}

#[test]
fn position_beyond_f32_range_keeps_previous_camera() {
    let mut controls = FakeControls::page_defaults();
    let mut viewpoint = Viewpoint::default();
    let mut orbit = OrbitControls::default();
    update_camera(&controls, &mut viewpoint, &mut orbit);
    let before = viewpoint.position;

    controls.set(ControlId::Cx, "1e39");
    update_camera(&controls, &mut viewpoint, &mut orbit);
    assert!(viewpoint.position.is_finite());
    assert_vec3_near(viewpoint.position, before, 1e-4);
}

#[test]
fn huge_finite_position_never_turns_non_finite() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Cx, "1e30");
    let mut viewpoint = Viewpoint::default();
    let mut orbit = OrbitControls::default();
    update_camera(&controls, &mut viewpoint, &mut orbit);

    assert!(viewpoint.position.is_finite());
    assert_eq!(viewpoint.position.x, 1e30_f64 as f32);
}
