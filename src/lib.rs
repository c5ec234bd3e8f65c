#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, NORMALIZE_BUTTON_ID};
use crate::core::{AppState, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

thread_local! {
    static FRAME_LOOP: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
}

/// Re-run every updater whenever any control reports an edit.
fn wire_control_inputs(
    controls: &ui::DomControls,
    state: &Rc<RefCell<AppState>>,
) -> anyhow::Result<()> {
    for (id, el) in controls.inputs() {
        log::debug!("[init] listening to #{}", id.input_id());
        let mut controls_for_input = controls.clone();
        let state_for_input = state.clone();
        dom::add_listener(el, "input", move |_: web::Event| {
            state_for_input
                .borrow_mut()
                .apply_controls(&mut controls_for_input);
        })?;
    }
    Ok(())
}

fn wire_normalize_button(
    document: &web::Document,
    controls: &ui::DomControls,
    state: &Rc<RefCell<AppState>>,
) -> anyhow::Result<()> {
    let mut controls_for_click = controls.clone();
    let state_for_click = state.clone();
    dom::add_click_listener(document, NORMALIZE_BUTTON_ID, move || {
        log::info!("[normalize] rewriting quaternion controls");
        state_for_click
            .borrow_mut()
            .normalize(&mut controls_for_click);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("quat-cube starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the animation loop. Input handlers stay attached but nothing is
/// drawn afterwards.
#[wasm_bindgen]
pub fn stop() {
    FRAME_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            frame::stop_loop(&handle);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;

    let mut controls = ui::DomControls::bind(&document)?;
    let state = Rc::new(RefCell::new(AppState::new()));
    state.borrow_mut().apply_controls(&mut controls);
    {
        let s = state.borrow();
        let q = s.subject.rotation();
        let p = s.viewpoint.position;
        log::info!(
            "[init] q=({:.2},{:.2},{:.2},{:.2}) eye=({:.1},{:.1},{:.1}) fov={} near={} far={}",
            q.x,
            q.y,
            q.z,
            q.w,
            p.x,
            p.y,
            p.z,
            s.viewpoint.fov_degrees,
            s.viewpoint.near,
            s.viewpoint.far
        );
    }

    wire_control_inputs(&controls, &state)?;
    wire_normalize_button(&document, &controls, &state)?;
    events::wire_orbit_pointer(&canvas, state.clone())?;

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        canvas,
        gpu,
    }));
    let handle = frame::start_loop(frame_ctx);
    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(handle));
    Ok(())
}
