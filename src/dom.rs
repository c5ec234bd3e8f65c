use crate::core::SurfaceSize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
    closure.forget();
    Ok(())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let el: web::Element = element_by_id(document, element_id)?;
    add_listener(&el, "click", move |_: web::Event| handler())
}

/// Client size of the element that hosts the canvas, in CSS pixels.
pub fn container_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    match canvas.parent_element() {
        Some(parent) => SurfaceSize::new(
            parent.client_width().max(0) as u32,
            parent.client_height().max(0) as u32,
        ),
        None => SurfaceSize::new(
            canvas.client_width().max(0) as u32,
            canvas.client_height().max(0) as u32,
        ),
    }
}

/// Backing-store size of the canvas in device pixels.
#[inline]
pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> SurfaceSize {
    SurfaceSize::new(canvas.width(), canvas.height())
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}
