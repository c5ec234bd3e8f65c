use crate::core::constants::MAX_PIXEL_RATIO;
use std::cell::Cell;
use std::rc::Rc;

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Result of a container size change: new backing-store size of the output
/// surface and the aspect ratio the projection must use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceFit {
    pub backing: SurfaceSize,
    pub aspect: f32,
}

/// Device pixel ratio capped at [`MAX_PIXEL_RATIO`]; non-positive or
/// non-finite ratios read as 1.
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing-store size for a container of `container` CSS pixels.
pub fn backing_size(container: SurfaceSize, pixel_ratio: f64) -> SurfaceSize {
    let ratio = effective_pixel_ratio(pixel_ratio);
    SurfaceSize::new(
        (container.width as f64 * ratio).floor() as u32,
        (container.height as f64 * ratio).floor() as u32,
    )
}

/// Compare the surface to its container and report a resize only when the
/// backing size would change. Empty containers never trigger a resize.
pub fn fit_surface(
    current: SurfaceSize,
    container: SurfaceSize,
    pixel_ratio: f64,
) -> Option<SurfaceFit> {
    if container.is_empty() {
        return None;
    }
    let backing = backing_size(container, pixel_ratio);
    if backing.is_empty() || backing == current {
        return None;
    }
    Some(SurfaceFit {
        backing,
        aspect: container.width as f32 / container.height as f32,
    })
}

/// Shared stop flag for the animation loop.
///
/// The loop polls [`LoopHandle::is_running`] before each tick and stops
/// rescheduling once any clone calls [`LoopHandle::stop`].
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    stopped: Rc<Cell<bool>>,
    pending_frame: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }

    /// Stop the loop. Returns the id of the frame request that was pending,
    /// which the caller should cancel with the host.
    pub fn stop(&self) -> Option<i32> {
        self.stopped.set(true);
        self.pending_frame.take()
    }

    /// Record the id of the most recently requested frame.
    pub fn set_pending_frame(&self, id: i32) {
        self.pending_frame.set(Some(id));
    }
}
