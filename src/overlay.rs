use crate::constants::{HIDDEN_CLASS, SPLASH_ID, STAGE_ID};
use crate::core::Backdrop;
use crate::style;
use web_sys as web;

#[inline]
fn show_element(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.remove_attribute("hidden");
    }
}

#[inline]
fn hide_element(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("hidden", "");
    }
}

/// Splash gives way to the player stage.
pub fn reveal_stage(document: &web::Document) {
    hide_element(document, SPLASH_ID);
    show_element(document, STAGE_ID);
}

/// Back to the splash screen.
pub fn show_splash(document: &web::Document) {
    show_element(document, SPLASH_ID);
    hide_element(document, STAGE_ID);
}

pub fn apply_backdrop(document: &web::Document, backdrop: Backdrop) {
    let Some(body) = document.body() else {
        return;
    };
    crate::dom::set_style(
        &body,
        "background-image",
        &style::background_image_css(backdrop.image_url()),
    );
}
