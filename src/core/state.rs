use crate::core::camera::update_camera;
use crate::core::controls::ControlSurface;
use crate::core::frame::{fit_surface, SurfaceSize};
use crate::core::labels::sync_labels;
use crate::core::orbit::OrbitControls;
use crate::core::orientation::{normalize_quaternion_controls, update_orientation, Subject};
use crate::core::projection::update_projection;
use crate::core::viewpoint::Viewpoint;

/// Everything the page mutates: the cube, the camera and the orbit helper.
///
/// Owned by the frame loop and lent to input handlers; there is no other
/// mutable scene state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub subject: Subject,
    pub viewpoint: Viewpoint,
    pub orbit: OrbitControls,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every updater for a control edit. Labels go last so they show the
    /// values that were just applied, including a corrected far plane.
    pub fn apply_controls<C: ControlSurface + ?Sized>(&mut self, controls: &mut C) {
        update_orientation(controls, &mut self.subject);
        update_camera(controls, &mut self.viewpoint, &mut self.orbit);
        update_projection(controls, &mut self.viewpoint);
        sync_labels(controls);
    }

    /// The "normalize" button. Camera and projection are untouched.
    pub fn normalize<C: ControlSurface + ?Sized>(&mut self, controls: &mut C) {
        normalize_quaternion_controls(controls, &mut self.subject);
    }

    /// Frame step 1: match the output surface to its container. On change
    /// the aspect ratio is updated and the projection recomputed, and the new
    /// backing size is returned for the caller to apply.
    pub fn fit_surface(
        &mut self,
        current: SurfaceSize,
        container: SurfaceSize,
        pixel_ratio: f64,
    ) -> Option<SurfaceSize> {
        let fit = fit_surface(current, container, pixel_ratio)?;
        self.viewpoint.aspect = fit.aspect;
        self.viewpoint.update_projection_matrix();
        log::info!(
            "[frame] surface {}x{} -> {}x{} aspect={:.3}",
            current.width,
            current.height,
            fit.backing.width,
            fit.backing.height,
            fit.aspect
        );
        Some(fit.backing)
    }

    /// Frame step 2: advance orbit damping.
    pub fn advance(&mut self) -> bool {
        self.orbit.update(&mut self.viewpoint)
    }
}
