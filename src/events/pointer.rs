use crate::dom::{self, Subscription};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub stage: Option<web::Element>,
    pub card: Option<web::Element>,
    pub canvas: web::HtmlCanvasElement,
    pub frame_ctx: Rc<RefCell<FrameContext>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring) -> anyhow::Result<Vec<Subscription>> {
    let mut subs = Vec::new();
    if let Some(stage) = &w.stage {
        subs.push(wire_gradient_follow(w, stage.clone())?);
    }
    if let Some(card) = &w.card {
        subs.push(wire_card_move(w, card.clone())?);
        subs.push(wire_card_leave(w, card)?);
    }
    subs.push(wire_resize(w)?);
    Ok(subs)
}

// Document-wide pointer drives the glow, measured from the stage center.
fn wire_gradient_follow(w: &PointerWiring, stage: web::Element) -> anyhow::Result<Subscription> {
    let ctx = w.frame_ctx.clone();
    dom::listen(&w.document, "mousemove", move |ev: web::MouseEvent| {
        let rect = dom::client_rect(&stage);
        ctx.borrow_mut()
            .track_gradient(ev.client_x() as f64, ev.client_y() as f64, &rect);
    })
}

fn wire_card_move(w: &PointerWiring, card: web::Element) -> anyhow::Result<Subscription> {
    let ctx = w.frame_ctx.clone();
    let card_target = card.clone();
    dom::listen(&card_target, "mousemove", move |ev: web::MouseEvent| {
        let rect = dom::client_rect(&card);
        ctx.borrow_mut()
            .track_card(ev.client_x() as f64, ev.client_y() as f64, rect);
    })
}

fn wire_card_leave(w: &PointerWiring, card: &web::Element) -> anyhow::Result<Subscription> {
    let ctx = w.frame_ctx.clone();
    dom::listen(card, "mouseleave", move |_: web::MouseEvent| {
        ctx.borrow_mut().release_card();
    })
}

fn wire_resize(w: &PointerWiring) -> anyhow::Result<Subscription> {
    let ctx = w.frame_ctx.clone();
    let canvas = w.canvas.clone();
    dom::listen(&w.window, "resize", move |_: web::Event| {
        let (width, height) = dom::sync_canvas_to_window(&canvas);
        ctx.borrow_mut().resize(width, height);
    })
}
