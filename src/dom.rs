use crate::core::Rect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener; dropping it removes the listener.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Registers `handler` for `event` on `target`, casting events to `E`.
/// Events that are not an `E` are ignored.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: impl FnMut(E) + 'static,
) -> anyhow::Result<Subscription>
where
    E: JsCast + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
    Ok(Subscription {
        target: target.clone(),
        event,
        closure,
    })
}

/// Click listener on the element with `element_id`, if present.
pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Subscription> {
    let el: web::Element = optional_element(document, element_id)?;
    match listen(&el, "click", move |_: web::Event| handler()) {
        Ok(sub) => Some(sub),
        Err(e) => {
            log::error!("{:?}", e);
            None
        }
    }
}

pub fn element<T: JsCast>(document: &web::Document, element_id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", element_id, e))
}

/// Like `element`, but a missing optional element only logs a warning.
pub fn optional_element<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    match element(document, element_id) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Window inner size in CSS pixels, or (0, 0) if unavailable.
pub fn window_inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Matches the canvas backing store to the window and returns the new size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> (f64, f64) {
    let Some(window) = web::window() else {
        return (canvas.width() as f64, canvas.height() as f64);
    };
    let (w, h) = window_inner_size(&window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::error!("set {}: {:?}", property, e);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Parses an `f64` from an attribute on `el`, if present and numeric.
pub fn number_attribute(el: &web::Element, name: &str) -> Option<f64> {
    let raw = el.get_attribute(name)?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring non-numeric {}={:?}", name, raw);
            None
        }
    }
}
