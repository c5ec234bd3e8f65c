// Scene appearance and renderer tuning for the web frontend.
// Colours are sRGB hex values; the renderer converts them to linear space.

// Page element ids
pub const CANVAS_ID: &str = "scene";
pub const NORMALIZE_BUTTON_ID: &str = "normalize";

// Background
pub const BACKGROUND_HEX: u32 = 0x0b1422;

// Subject cube
pub const CUBE_SIZE: f32 = 1.6; // edge length
pub const CUBE_HEX: u32 = 0xffb100;
pub const CUBE_METALNESS: f32 = 0.1;
pub const CUBE_ROUGHNESS: f32 = 0.35;

// Floor plane
pub const FLOOR_SIZE: f32 = 12.0;
pub const FLOOR_Y: f32 = -1.4;
pub const FLOOR_HEX: u32 = 0x1b2a40;
pub const FLOOR_METALNESS: f32 = 0.0;
pub const FLOOR_ROUGHNESS: f32 = 0.9;

// Lighting
pub const KEY_LIGHT_POSITION: [f32; 3] = [4.0, 6.0, 3.0]; // directional light shines from here toward the origin
pub const KEY_LIGHT_INTENSITY: f32 = 1.2;
pub const AMBIENT_INTENSITY: f32 = 0.4;

// Anti-aliasing
pub const MSAA_SAMPLES: u32 = 4;
