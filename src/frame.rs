use crate::core::{AppState, LoopHandle};
use crate::dom;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
}

impl FrameContext {
    /// One animation tick: fit the surface, advance orbit damping, draw.
    pub fn frame(&mut self) {
        let current = dom::canvas_size(&self.canvas);
        let container = dom::container_size(&self.canvas);
        let pixel_ratio = dom::device_pixel_ratio();

        let mut state = self.state.borrow_mut();
        if let Some(size) = state.fit_surface(current, container, pixel_ratio) {
            self.canvas.set_width(size.width);
            self.canvas.set_height(size.height);
            if let Some(g) = &mut self.gpu {
                g.resize(size);
            }
        }

        state.advance();

        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.render(&state) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(window: &web::Window, tick: &Closure<dyn FnMut()>, handle: &LoopHandle) {
    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(id) => handle.set_pending_frame(id),
        Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
    }
}

/// Run `frame_ctx` on every animation frame until the returned handle is
/// stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle::new();
    let Some(window) = web::window() else {
        log::error!("no window; animation loop not started");
        handle.stop();
        return handle;
    };

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !handle_tick.is_running() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(t) = tick_clone.borrow().as_ref() {
            request_frame(&window_tick, t, &handle_tick);
        }
    }) as Box<dyn FnMut()>));

    if let Some(t) = tick.borrow().as_ref() {
        request_frame(&window, t, &handle);
    }
    handle
}

/// Stop `handle`'s loop and cancel its pending frame.
pub fn stop_loop(handle: &LoopHandle) {
    if let Some(id) = handle.stop() {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(id);
        }
    }
    log::info!("[frame] loop stopped");
}
