use crate::audio::Player;
use crate::dom::{self, Subscription};
use web_sys as web;

#[inline]
pub fn closes_player(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

pub fn wire_global_keydown(
    document: &web::Document,
    player: Player,
) -> anyhow::Result<Subscription> {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        if closes_player(&ev.key()) {
            player.close();
        }
    })
}
