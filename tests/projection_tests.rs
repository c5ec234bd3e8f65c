// Host-side tests for projection updates and clip plane validity.
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
    pub mod frame {
        include!("../src/core/frame.rs");
    }
    pub mod labels {
        include!("../src/core/labels.rs");
    }
    pub mod orbit {
        include!("../src/core/orbit.rs");
    }
    pub mod orientation {
        include!("../src/core/orientation.rs");
    }
    pub mod projection {
        include!("../src/core/projection.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod viewpoint {
        include!("../src/core/viewpoint.rs");
    }
}
mod common;

use crate::core::constants::NEAR_MIN;
use crate::core::controls::{ControlId, LabelSlot};
use crate::core::projection::*;
use crate::core::state::AppState;
use crate::core::viewpoint::Viewpoint;
use common::FakeControls;
use glam::Mat4;

#[test]
fn valid_planes_pass_through() {
    let planes = resolve_clip_planes(0.1, 100.0);
    assert_eq!(
        planes,
        ClipPlanes {
            near: 0.1,
            far: 100.0,
            far_corrected: false
        }
    );
}

#[test]
fn near_is_clamped_to_minimum() {
    for near in [0.0, -3.0, NEAR_MIN] {
        let planes = resolve_clip_planes(near, 100.0);
        assert_eq!(planes.near, NEAR_MIN);
        assert!(!planes.far_corrected);
    }
}

#[test]
fn far_not_beyond_near_is_pushed_out() {
    let planes = resolve_clip_planes(5.0, 3.0);
    assert_eq!(planes.near, 5.0);
    assert_eq!(planes.far, 6.0);
    assert!(planes.far_corrected);

    let equal = resolve_clip_planes(4.0, 4.0);
    assert_eq!(equal.far, 5.0);
    assert!(equal.far_corrected);
}

#[test]
fn clamped_near_also_drives_far_correction() {
    let planes = resolve_clip_planes(0.0, 0.005);
    assert_eq!(planes.near, NEAR_MIN);
    assert_eq!(planes.far, NEAR_MIN + 1.0);
    assert!(planes.far_corrected);
}

#[test]
fn update_projection_applies_controls() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Fov, "75");
    let mut viewpoint = Viewpoint::new(50.0, 1.5, 0.1, 100.0);

    let planes = update_projection(&mut controls, &mut viewpoint).expect("finite controls");
    assert!(!planes.far_corrected);
    assert_eq!(viewpoint.fov_degrees, 75.0);
    assert_eq!(viewpoint.near, 0.1);
    assert_eq!(viewpoint.far, 100.0);
    let expected = Mat4::perspective_rh(75f32.to_radians(), 1.5, 0.1, 100.0);
    assert!(viewpoint.projection_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn near_clamp_does_not_rewrite_the_control() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Near, "0");
    let mut viewpoint = Viewpoint::default();

    update_projection(&mut controls, &mut viewpoint);
    assert_eq!(viewpoint.near, NEAR_MIN as f32);
    assert_eq!(controls.raw(ControlId::Near), "0");
}

#[test]
fn far_correction_is_written_back_whole() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Near, "5").set(ControlId::Far, "3");
    let mut viewpoint = Viewpoint::default();

    update_projection(&mut controls, &mut viewpoint);
    assert_eq!(viewpoint.near, 5.0);
    assert_eq!(viewpoint.far, 6.0);
    assert_eq!(controls.raw(ControlId::Far), "6");
}

#[test]
fn far_correction_shows_in_labels_after_apply() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Near, "5").set(ControlId::Far, "3");
    let mut state = AppState::new();
    state.apply_controls(&mut controls);

    assert_eq!(controls.label(ControlId::Far, LabelSlot::Primary), Some("6"));
    assert_eq!(controls.label(ControlId::Far, LabelSlot::Hud), Some("6"));
    assert_eq!(controls.label(ControlId::Near, LabelSlot::Primary), Some("5"));
}

#[test]
fn non_finite_control_keeps_previous_projection() {
    let mut controls = FakeControls::page_defaults();
    let mut viewpoint = Viewpoint::default();
    update_projection(&mut controls, &mut viewpoint);
    let before = viewpoint.projection_matrix();

    controls.set(ControlId::Fov, "wide");
    assert_eq!(update_projection(&mut controls, &mut viewpoint), None);
    assert_eq!(viewpoint.fov_degrees, 50.0);
    assert_eq!(viewpoint.projection_matrix(), before);
    assert_eq!(controls.raw(ControlId::Far), "100");
}

#[test]
fn projection_only_changes_through_update() {
    let mut viewpoint = Viewpoint::default();
    let before = viewpoint.projection_matrix();
    viewpoint.fov_degrees = 90.0;
    assert_eq!(viewpoint.projection_matrix(), before);
    viewpoint.update_projection_matrix();
    assert_ne!(viewpoint.projection_matrix(), before);
}

#[test]
fn planes_beyond_f32_range_keep_previous_projection() {
    let mut controls = FakeControls::page_defaults();
    let mut state = AppState::new();
    state.apply_controls(&mut controls);
    let before = state.viewpoint.projection_matrix();

    controls.set(ControlId::Near, "1e308").set(ControlId::Far, "1");
    state.apply_controls(&mut controls);

    assert_eq!(controls.raw(ControlId::Far), "1");
    assert_eq!(state.viewpoint.near, 0.1);
    assert_eq!(state.viewpoint.far, 100.0);
    assert_eq!(state.viewpoint.projection_matrix(), before);
    assert!(state.viewpoint.projection_matrix().is_finite());
}

#[test]
fn far_that_collapses_in_f32_is_rejected() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Near, "3e38").set(ControlId::Far, "1");
    let mut viewpoint = Viewpoint::default();

    assert_eq!(update_projection(&mut controls, &mut viewpoint), None);
    assert_eq!(controls.raw(ControlId::Far), "1");
    assert_eq!(viewpoint.far, 100.0);
}

#[test]
fn fov_beyond_f32_range_is_rejected() {
    let mut controls = FakeControls::page_defaults();
    controls.set(ControlId::Fov, "1e40");
    let mut viewpoint = Viewpoint::default();

    assert_eq!(update_projection(&mut controls, &mut viewpoint), None);
    assert_eq!(viewpoint.fov_degrees, 50.0);
}
