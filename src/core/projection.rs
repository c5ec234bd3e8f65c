use crate::core::constants::{FAR_CORRECTION_GAP, FAR_WRITEBACK_DIGITS, NEAR_MIN};
use crate::core::controls::{ControlId, ControlSurface};
use crate::core::viewpoint::Viewpoint;

/// Near/far distances after validity rules have been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlanes {
    pub near: f64,
    pub far: f64,
    /// Set when `far` was moved and must be written back to its control.
    pub far_corrected: bool,
}

/// Clamp near to [`NEAR_MIN`] and push far beyond near.
///
/// The near clamp is applied silently; only the far correction is reported
/// for write-back.
pub fn resolve_clip_planes(near: f64, far: f64) -> ClipPlanes {
    let near = if near <= NEAR_MIN { NEAR_MIN } else { near };
    if near >= far {
        ClipPlanes {
            near,
            far: near + FAR_CORRECTION_GAP,
            far_corrected: true,
        }
    } else {
        ClipPlanes {
            near,
            far,
            far_corrected: false,
        }
    }
}

/// Apply fov/near/far from the controls and recompute the projection.
///
/// Returns the planes that were applied, or `None` when the controls do not
/// describe a representable projection: a non-finite value, or one that only
/// becomes non-finite (or collapses the clip range) once narrowed to `f32`.
/// The previous projection then stays in effect and no control is rewritten.
pub fn update_projection<C: ControlSurface + ?Sized>(
    controls: &mut C,
    viewpoint: &mut Viewpoint,
) -> Option<ClipPlanes> {
    let fov = controls.value(ControlId::Fov);
    let near = controls.value(ControlId::Near);
    let far = controls.value(ControlId::Far);
    if !(fov.is_finite() && near.is_finite() && far.is_finite()) {
        log::warn!(
            "[projection] ignoring non-finite fov={} near={} far={}",
            fov,
            near,
            far
        );
        return None;
    }

    let planes = resolve_clip_planes(near, far);
    let (fov32, near32, far32) = (fov as f32, planes.near as f32, planes.far as f32);
    if !(fov32.is_finite() && near32.is_finite() && far32.is_finite() && far32 > near32) {
        log::warn!(
            "[projection] ignoring out-of-range fov={} near={} far={}",
            fov,
            planes.near,
            planes.far
        );
        return None;
    }

    if planes.far_corrected {
        controls.set_value(ControlId::Far, planes.far, FAR_WRITEBACK_DIGITS);
        log::debug!("[projection] far moved to {} (near {})", planes.far, planes.near);
    }

    viewpoint.fov_degrees = fov32;
    viewpoint.near = near32;
    viewpoint.far = far32;
    viewpoint.update_projection_matrix();
    Some(planes)
}
