#![cfg(target_arch = "wasm32")]
use crate::audio::Player;
use crate::constants::*;
use crate::core::{EasingTracker, EffectsConfig, ParticleField, Rect};
use crate::dom::Subscription;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod style;

/// Everything the running page owns. Dropping it removes every listener
/// and stops the animation loop.
struct App {
    _subscriptions: Vec<Subscription>,
    _animation: frame::AnimationLoop,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

// Canvas data attributes may override the density and glow smoothing.
fn effects_config(canvas: &web::HtmlCanvasElement) -> EffectsConfig {
    let mut cfg = EffectsConfig::default();
    if let Some(d) = dom::number_attribute(canvas, DENSITY_DIVISOR_ATTR) {
        match cfg.with_density_divisor(d) {
            Ok(c) => cfg = c,
            Err(e) => log::warn!("{}; keeping default", e),
        }
    }
    if let Some(s) = dom::number_attribute(canvas, SMOOTHING_ATTR) {
        match cfg.with_gradient_smoothing(s) {
            Ok(c) => cfg = c,
            Err(e) => log::warn!("{}; keeping default", e),
        }
    }
    cfg
}

fn wire_player_buttons(document: &web::Document, player: &Player) -> Vec<Subscription> {
    let mut subs = Vec::new();

    let p = player.clone();
    subs.extend(dom::on_click(document, OPEN_BUTTON_ID, move || p.open()));
    let p = player.clone();
    subs.extend(dom::on_click(document, CLOSE_BUTTON_ID, move || p.close()));
    let p = player.clone();
    subs.extend(dom::on_click(document, PLAY_BUTTON_ID, move || {
        p.toggle_play_pause()
    }));
    let p = player.clone();
    subs.extend(dom::on_click(document, MUTE_BUTTON_ID, move || p.toggle_mute()));
    let p = player.clone();
    subs.extend(dom::on_click(document, STOP_BUTTON_ID, move || p.stop()));

    if let Some(seek) = dom::optional_element::<web::HtmlInputElement>(document, SEEK_INPUT_ID) {
        let p = player.clone();
        let input = seek.clone();
        match dom::listen(&seek, "input", move |_: web::Event| {
            if let Ok(percent) = input.value().parse::<f64>() {
                p.seek_percent(percent);
            }
        }) {
            Ok(sub) => subs.push(sub),
            Err(e) => log::error!("{:?}", e),
        }
    }
    subs
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("splash-fx starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Removes every listener and stops the animation loop.
#[wasm_bindgen]
pub fn shutdown() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("splash-fx stopped");
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if APP.with(|slot| slot.borrow().is_some()) {
        log::warn!("already started");
        return Ok(());
    }

    let canvas: web::HtmlCanvasElement = dom::element(&document, SNOW_CANVAS_ID)?;
    let audio_el: web::HtmlAudioElement = dom::element(&document, AUDIO_ID)?;
    let config = effects_config(&canvas);

    // Canvas backing store follows the window size
    let (width, height) = dom::sync_canvas_to_window(&canvas);
    let field = ParticleField::new(width, height, config.density_divisor, rand::random())?;
    log::info!(
        "[snow] field {:.0}x{:.0} with {} particles",
        width,
        height,
        field.len()
    );

    let stage: Option<web::Element> = dom::optional_element(&document, STAGE_ID);
    let card: Option<web::Element> = dom::optional_element(&document, CARD_ID);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        angle: 0.0,
        snow: render::SnowRenderer::new(canvas.clone())?,
        gradient: EasingTracker::new(config.gradient_smoothing)?,
        gradient_el: dom::optional_element(&document, GRADIENT_ID),
        card: EasingTracker::new(config.card_smoothing)?,
        card_el: card.clone().and_then(|c| c.dyn_into::<web::HtmlElement>().ok()),
        card_rect: Rect::default(),
        config,
    }));

    let player = Player::new(document.clone(), audio_el);
    let mut subscriptions = player.wire_media_events()?;
    subscriptions.extend(wire_player_buttons(&document, &player));
    subscriptions.push(events::wire_global_keydown(&document, player.clone())?);
    subscriptions.extend(events::wire_pointer_handlers(&events::PointerWiring {
        window: window.clone(),
        document: document.clone(),
        stage,
        card,
        canvas: canvas.clone(),
        frame_ctx: frame_ctx.clone(),
    })?);
    player.refresh_ui();

    let animation = frame::start_loop(frame_ctx);
    log::info!("[app] {} listeners wired", subscriptions.len());

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _subscriptions: subscriptions,
            _animation: animation,
        })
    });
    Ok(())
}
