use crate::core::controls::{ControlId, ControlSurface};
use crate::core::orbit::OrbitControls;
use crate::core::viewpoint::Viewpoint;
use glam::Vec3;

/// Move the viewpoint to the position controls, then let the orbit helper
/// re-derive its state from the new position.
///
/// A component that is non-finite, or too large for `f32`, leaves the
/// previous position in place; the orbit helper still runs so pending
/// damping is not skipped.
pub fn update_camera<C: ControlSurface + ?Sized>(
    controls: &C,
    viewpoint: &mut Viewpoint,
    orbit: &mut OrbitControls,
) {
    let requested = Vec3::from_array(ControlId::POSITION.map(|id| controls.value(id) as f32));
    if requested.is_finite() {
        viewpoint.position = requested;
        log::debug!(
            "[camera] position=({:.2},{:.2},{:.2})",
            requested.x,
            requested.y,
            requested.z
        );
    } else {
        log::warn!("[camera] ignoring non-finite position {:?}", requested);
    }
    orbit.update(viewpoint);
}
