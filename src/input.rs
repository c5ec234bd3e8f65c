use glam::Vec2;

/// What a pointer drag on the canvas does to the orbit helper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    None,
    Rotate,
    Pan,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub mode: DragMode,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, pointer_id: i32, at: Vec2) {
        self.mode = mode;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Record a move of `pointer_id` to `at` and return the delta since the
    /// last position, or `None` when no drag by that pointer is active.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if self.mode == DragMode::None || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.mode = DragMode::None;
        }
    }
}

/// Map a pressed mouse button to a drag mode: primary rotates (or pans with
/// shift/ctrl/meta held), secondary pans, middle does nothing.
#[inline]
pub fn drag_mode_for(button: i16, pan_modifier: bool, enable_pan: bool) -> DragMode {
    let mode = match button {
        0 if pan_modifier => DragMode::Pan,
        0 => DragMode::Rotate,
        2 => DragMode::Pan,
        _ => DragMode::None,
    };
    if mode == DragMode::Pan && !enable_pan {
        DragMode::None
    } else {
        mode
    }
}
