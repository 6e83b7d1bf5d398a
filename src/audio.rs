use crate::constants::{
    AUDIO_SRC, MUTE_BUTTON_ID, PLAY_BUTTON_ID, PROGRESS_FILL_ID, TIME_CURRENT_ID,
    TIME_DURATION_ID,
};
use crate::core::PlayerState;
use crate::dom::{self, Subscription};
use crate::overlay;
use crate::style;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Splash + media element controller. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Player {
    document: web::Document,
    audio: web::HtmlAudioElement,
    state: Rc<RefCell<PlayerState>>,
}

impl Player {
    pub fn new(document: web::Document, audio: web::HtmlAudioElement) -> Self {
        audio.set_preload("metadata");
        if audio.src().is_empty() {
            audio.set_src(AUDIO_SRC);
        }
        let player = Self {
            document,
            audio,
            state: Rc::new(RefCell::new(PlayerState::default())),
        };
        overlay::apply_backdrop(&player.document, player.state.borrow().backdrop);
        player
    }

    pub fn open(&self) {
        let (should_play, backdrop) = {
            let mut s = self.state.borrow_mut();
            (s.open(), s.backdrop)
        };
        if !should_play {
            return;
        }
        log::info!("[splash] open");
        overlay::reveal_stage(&self.document);
        overlay::apply_backdrop(&self.document, backdrop);
        self.play();
    }

    pub fn close(&self) {
        let backdrop = {
            let mut s = self.state.borrow_mut();
            s.close();
            s.backdrop
        };
        log::info!("[splash] close");
        self.stop();
        overlay::show_splash(&self.document);
        overlay::apply_backdrop(&self.document, backdrop);
    }

    /// Starts playback; a refusal (e.g. autoplay policy) is only logged.
    pub fn play(&self) {
        let promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] playback blocked: {:?}", e);
                return;
            }
        };
        let player = self.clone();
        spawn_local(async move {
            let started = match JsFuture::from(promise).await {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("[audio] playback blocked: {:?}", e);
                    false
                }
            };
            player.state.borrow_mut().set_playing(started);
            player.refresh_ui();
        });
    }

    pub fn toggle_play_pause(&self) {
        let playing = self.state.borrow().playing;
        if playing {
            _ = self.audio.pause();
        } else {
            self.play();
        }
    }

    pub fn toggle_mute(&self) {
        let muted = !self.audio.muted();
        self.audio.set_muted(muted);
        self.state.borrow_mut().set_muted(muted);
        self.refresh_ui();
    }

    /// Pauses and rewinds to the start.
    pub fn stop(&self) {
        _ = self.audio.pause();
        self.audio.set_current_time(0.0);
        {
            let mut s = self.state.borrow_mut();
            s.set_playing(false);
            s.set_current_time(0.0);
        }
        self.refresh_ui();
    }

    pub fn seek_percent(&self, percent: f64) {
        let target = self.state.borrow().seek_target(percent);
        if let Some(t) = target {
            self.audio.set_current_time(t);
            self.state.borrow_mut().set_current_time(t);
            self.refresh_ui();
        }
    }

    /// Writes time labels, progress and button captions from the state.
    pub fn refresh_ui(&self) {
        let s = self.state.borrow();
        dom::set_text(&self.document, TIME_CURRENT_ID, &s.elapsed_label());
        dom::set_text(&self.document, TIME_DURATION_ID, &s.duration_label());
        dom::set_text(&self.document, PLAY_BUTTON_ID, style::play_button_label(s.playing));
        dom::set_text(&self.document, MUTE_BUTTON_ID, style::mute_button_label(s.muted));
        if let Some(fill) = self
            .document
            .get_element_by_id(PROGRESS_FILL_ID)
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            dom::set_style(&fill, "width", &style::width_percent_css(s.progress_percent()));
        }
    }

    /// Mirrors media element events into the player state.
    pub fn wire_media_events(&self) -> anyhow::Result<Vec<Subscription>> {
        let mut subs = Vec::with_capacity(5);

        let p = self.clone();
        subs.push(dom::listen(&self.audio, "loadedmetadata", move |_: web::Event| {
            p.state.borrow_mut().set_duration(p.audio.duration());
            p.refresh_ui();
        })?);

        let p = self.clone();
        subs.push(dom::listen(&self.audio, "timeupdate", move |_: web::Event| {
            p.state.borrow_mut().set_current_time(p.audio.current_time());
            p.refresh_ui();
        })?);

        let p = self.clone();
        subs.push(dom::listen(&self.audio, "play", move |_: web::Event| {
            p.state.borrow_mut().set_playing(true);
            p.refresh_ui();
        })?);

        let p = self.clone();
        subs.push(dom::listen(&self.audio, "pause", move |_: web::Event| {
            p.state.borrow_mut().set_playing(false);
            p.refresh_ui();
        })?);

        let p = self.clone();
        subs.push(dom::listen(&self.audio, "volumechange", move |_: web::Event| {
            p.state.borrow_mut().set_muted(p.audio.muted());
            p.refresh_ui();
        })?);

        Ok(subs)
    }
}
