use crate::core::constants::{DEFAULT_ASPECT, DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera: world position, look-at target and
/// projection parameters.
///
/// The projection matrix is cached and only changes through
/// [`Viewpoint::update_projection_matrix`], so callers that edit `fov_degrees`,
/// `aspect`, `near` or `far` must call it afterwards.
#[derive(Clone, Debug)]
pub struct Viewpoint {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_DEGREES, DEFAULT_ASPECT, DEFAULT_NEAR, DEFAULT_FAR)
    }
}

impl Viewpoint {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut viewpoint = Self {
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        viewpoint.update_projection_matrix();
        viewpoint
    }

    /// Recompute the cached projection from the current parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Unit vector from the position toward the target. Falls back to -Z
    /// when the two coincide.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z)
    }

    /// Camera-space right and up axes in world coordinates.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let forward = self.forward();
        let right = forward
            .cross(self.up)
            .try_normalize()
            .unwrap_or(Vec3::X);
        let up = right.cross(forward);
        (right, up)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.forward();
        let (_, up) = self.basis();
        Mat4::look_to_rh(self.position, forward, up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
