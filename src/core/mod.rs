pub mod camera;
pub mod constants;
pub mod controls;
pub mod frame;
pub mod labels;
pub mod orbit;
pub mod orientation;
pub mod projection;
pub mod state;
pub mod viewpoint;

pub use controls::{ControlId, ControlSurface, LabelSlot};
pub use frame::{LoopHandle, SurfaceSize};
pub use state::AppState;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
