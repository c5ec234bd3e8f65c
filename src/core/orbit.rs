use crate::core::constants::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_MOVE_EPS,
    ORBIT_PAN_SPEED, ORBIT_POLAR_EPS, ORBIT_ROTATE_SPEED, ORBIT_WHEEL_SCALE_BASE,
    ORBIT_ZOOM_SPEED,
};
use crate::core::viewpoint::Viewpoint;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Radius, polar angle from +Y and azimuth around +Y (measured from +Z).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

/// Damped orbit camera helper.
///
/// Input (`rotate_*`, `pan`, `dolly_*`) only accumulates pending motion;
/// [`OrbitControls::update`] applies it to a [`Viewpoint`]. With damping
/// enabled each update applies `damping_factor` of the pending rotation and
/// pan and keeps the rest for later frames, so the camera glides to a stop.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    pub spherical_delta: Spherical,
    pub pan_offset: Vec3,
    pub scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            enable_pan: true,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            spherical_delta: Spherical::default(),
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl OrbitControls {
    pub fn rotate_left(&mut self, angle: f32) {
        self.spherical_delta.theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.spherical_delta.phi -= angle;
    }

    /// Rotate from a pointer drag of `(dx, dy)` pixels on an element
    /// `element_height` pixels tall; a full-height drag is one turn.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, element_height: f32) {
        let h = element_height.max(1.0);
        self.rotate_left(TAU * dx / h * self.rotate_speed);
        self.rotate_up(TAU * dy / h * self.rotate_speed);
    }

    /// Pan the target so the point under the pointer follows a drag of
    /// `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f32, dy: f32, element_height: f32, viewpoint: &Viewpoint) {
        if !self.enable_pan {
            return;
        }
        let h = element_height.max(1.0);
        let distance = (viewpoint.position - self.target).length()
            * (viewpoint.fov_degrees.to_radians() * 0.5).tan();
        let (right, up) = viewpoint.basis();
        let left = -right * (2.0 * dx * distance / h * self.pan_speed);
        let upward = up * (2.0 * dy * distance / h * self.pan_speed);
        self.pan_offset += left + upward;
    }

    /// Move toward the target; `dolly_scale` < 1 shrinks the distance.
    pub fn dolly_in(&mut self, dolly_scale: f32) {
        self.scale *= dolly_scale;
    }

    pub fn dolly_out(&mut self, dolly_scale: f32) {
        self.scale /= dolly_scale;
    }

    /// Dolly for one wheel step; negative `delta_y` (wheel up) moves closer.
    pub fn wheel(&mut self, delta_y: f32) {
        let step = ORBIT_WHEEL_SCALE_BASE.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.dolly_in(step);
        } else if delta_y > 0.0 {
            self.dolly_out(step);
        }
    }

    /// Apply pending motion to `viewpoint`, starting from its current
    /// position, and aim it at the target. Returns whether the camera moved.
    pub fn update(&mut self, viewpoint: &mut Viewpoint) -> bool {
        let last_position = viewpoint.position;
        let last_target = viewpoint.target;

        let mut spherical = Spherical::from_offset(viewpoint.position - self.target);
        let step = if self.enable_damping {
            self.damping_factor
        } else {
            1.0
        };
        spherical.theta += self.spherical_delta.theta * step;
        spherical.phi += self.spherical_delta.phi * step;
        spherical.phi = spherical.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);

        self.target += self.pan_offset * step;

        spherical.radius =
            (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        let position = self.target + spherical.to_offset();
        // Offsets too long for f32 overflow the radius; keep the old position.
        if position.is_finite() {
            viewpoint.position = position;
        }
        viewpoint.target = self.target;

        if self.enable_damping {
            let keep = 1.0 - self.damping_factor;
            self.spherical_delta.theta *= keep;
            self.spherical_delta.phi *= keep;
            self.pan_offset *= keep;
        } else {
            self.spherical_delta = Spherical::default();
            self.pan_offset = Vec3::ZERO;
        }
        let zoomed = self.scale != 1.0;
        self.scale = 1.0;

        zoomed
            || last_position.distance_squared(viewpoint.position) > ORBIT_MOVE_EPS
            || last_target.distance_squared(viewpoint.target) > ORBIT_MOVE_EPS
    }
}
