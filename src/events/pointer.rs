use crate::core::AppState;
use crate::dom;
use crate::input::{self, DragMode, DragState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drive the orbit helper from pointer drags and the wheel over `canvas`.
///
/// Handlers only queue motion; the frame loop applies it with damping.
pub fn wire_orbit_pointer(
    canvas: &web::HtmlCanvasElement,
    state: Rc<RefCell<AppState>>,
) -> anyhow::Result<()> {
    let drag = Rc::new(RefCell::new(DragState::default()));
    wire_pointerdown(canvas, &state, &drag)?;
    wire_pointermove(canvas, &state, &drag)?;
    wire_pointerup(canvas, &drag)?;
    wire_wheel(canvas, &state)?;
    dom::add_listener(canvas, "contextmenu", |ev: web::Event| ev.prevent_default())
}

fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<AppState>>,
    drag: &Rc<RefCell<DragState>>,
) -> anyhow::Result<()> {
    let canvas_capture = canvas.clone();
    let state = state.clone();
    let drag = drag.clone();
    dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
        let pan_modifier = ev.shift_key() || ev.ctrl_key() || ev.meta_key();
        let enable_pan = state.borrow().orbit.enable_pan;
        let mode = input::drag_mode_for(ev.button(), pan_modifier, enable_pan);
        if mode == DragMode::None {
            return;
        }
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        drag.borrow_mut().begin(mode, ev.pointer_id(), at);
        _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    })
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<AppState>>,
    drag: &Rc<RefCell<DragState>>,
) -> anyhow::Result<()> {
    let canvas_size = canvas.clone();
    let state = state.clone();
    let drag = drag.clone();
    dom::add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
        let at = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let (mode, delta) = {
            let mut d = drag.borrow_mut();
            match d.advance(ev.pointer_id(), at) {
                Some(delta) => (d.mode, delta),
                None => return,
            }
        };
        let height = canvas_size.client_height() as f32;
        let mut st = state.borrow_mut();
        let AppState { viewpoint, orbit, .. } = &mut *st;
        match mode {
            DragMode::Rotate => orbit.rotate_by_pixels(delta.x, delta.y, height),
            DragMode::Pan => orbit.pan(delta.x, delta.y, height, viewpoint),
            DragMode::None => {}
        }
    })
}

fn wire_pointerup(
    canvas: &web::HtmlCanvasElement,
    drag: &Rc<RefCell<DragState>>,
) -> anyhow::Result<()> {
    for event in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas_release = canvas.clone();
        dom::add_listener(canvas, event, move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
            _ = canvas_release.release_pointer_capture(ev.pointer_id());
        })?;
    }
    Ok(())
}

fn wire_wheel(
    canvas: &web::HtmlCanvasElement,
    state: &Rc<RefCell<AppState>>,
) -> anyhow::Result<()> {
    let state = state.clone();
    dom::add_listener(canvas, "wheel", move |ev: web::WheelEvent| {
        state.borrow_mut().orbit.wheel(ev.delta_y() as f32);
        ev.prevent_default();
    })
}
