// Control and camera behaviour constants shared by the updaters.

// Projection validity
pub const NEAR_MIN: f64 = 0.01; // smallest near plane the projection accepts
pub const FAR_CORRECTION_GAP: f64 = 1.0; // far = near + gap when far is not beyond near

// Label / write-back precision (fraction digits)
pub const QUATERNION_DIGITS: usize = 2;
pub const POSITION_DIGITS: usize = 1;
pub const FAR_WRITEBACK_DIGITS: usize = 0;
pub const NORMALIZE_MAX_ROUNDS: usize = 16; // re-normalize passes before giving up on a fixed point

// Viewpoint before the controls are first applied
pub const DEFAULT_FOV_DEGREES: f32 = 50.0;
pub const DEFAULT_ASPECT: f32 = 1.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

// Orbit helper
pub const ORBIT_DAMPING_FACTOR: f32 = 0.08;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_PAN_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.0;
pub const ORBIT_MAX_DISTANCE: f32 = f32::INFINITY;
pub const ORBIT_WHEEL_SCALE_BASE: f32 = 0.95; // dolly factor per wheel notch at zoom speed 1
pub const ORBIT_POLAR_EPS: f32 = 1e-6; // keeps the polar angle off the poles
pub const ORBIT_MOVE_EPS: f32 = 1e-6; // squared distance below which update reports no change

// Output surface
pub const MAX_PIXEL_RATIO: f64 = 2.0;
