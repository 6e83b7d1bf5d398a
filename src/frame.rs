use crate::core::{
    advance_angle, offset_from_center, EasingTracker, EffectsConfig, ParticleField, Rect, Tilt,
};
use crate::dom;
use crate::render::SnowRenderer;
use crate::style;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback advances and draws.
pub struct FrameContext {
    pub field: ParticleField,
    pub angle: f64,
    pub snow: SnowRenderer,

    pub gradient: EasingTracker,
    pub gradient_el: Option<web::HtmlElement>,

    pub card: EasingTracker,
    pub card_el: Option<web::HtmlElement>,
    // Last known card rect, refreshed on every card pointer sample
    pub card_rect: Rect,

    pub config: EffectsConfig,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.angle = advance_angle(self.angle);
        self.field.step(self.angle);
        self.snow.draw(self.field.render_positions());

        self.gradient.step();
        if let Some(el) = &self.gradient_el {
            let c = self.gradient.current();
            dom::set_style(el, "transform", &style::translate_css(c.x, c.y));
        }

        self.card.step();
        if let Some(el) = &self.card_el {
            let t = Tilt::from_eased_offset(
                self.card.current(),
                &self.card_rect,
                self.config.tilt_max_rotation_deg,
                self.config.tilt_max_translate_px,
            );
            let css = style::tilt_css(
                t.rotate_x_deg,
                t.rotate_y_deg,
                t.translate_x_px,
                t.translate_y_px,
            );
            dom::set_style(el, "transform", &css);
        }
    }

    /// Pointer sample relative to the stage center, for the background glow.
    pub fn track_gradient(&mut self, pointer_x: f64, pointer_y: f64, stage_rect: &Rect) {
        let off = offset_from_center(pointer_x, pointer_y, stage_rect);
        self.gradient.set_target(off.x, off.y);
    }

    pub fn track_card(&mut self, pointer_x: f64, pointer_y: f64, card_rect: Rect) {
        self.card_rect = card_rect;
        let off = offset_from_center(pointer_x, pointer_y, &card_rect);
        self.card.set_target(off.x, off.y);
    }

    pub fn release_card(&mut self) {
        self.card.reset();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
        log::info!(
            "[snow] resized to {:.0}x{:.0}, {} particles",
            width,
            height,
            self.field.len()
        );
    }
}

/// Handle to a running requestAnimationFrame loop; dropping it stops the loop.
pub struct AnimationLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Releases the closure and, with it, the frame context it captured.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    // Weak so the closure does not keep its own slot alive.
    let tick_weak = Rc::downgrade(&tick);
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        frame_ctx.borrow_mut().frame();
        if let Some(tick) = tick_weak.upgrade() {
            request_frame(&tick, &pending_tick);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    AnimationLoop { tick, pending }
}
