// CSS strings for the transforms computed by the core.

#[inline]
pub fn translate_css(x: f64, y: f64) -> String {
    format!("translate({}px, {}px)", x, y)
}

#[inline]
pub fn tilt_css(
    rotate_x_deg: f64,
    rotate_y_deg: f64,
    translate_x_px: f64,
    translate_y_px: f64,
) -> String {
    format!(
        "rotateX({}deg) rotateY({}deg) translate({}px, {}px)",
        rotate_x_deg, rotate_y_deg, translate_x_px, translate_y_px
    )
}

#[inline]
pub fn background_image_css(url: Option<&str>) -> String {
    match url {
        Some(u) => format!("url('{}')", u),
        None => "none".to_string(),
    }
}

#[inline]
pub fn width_percent_css(percent: f64) -> String {
    format!("{:.2}%", percent.clamp(0.0, 100.0))
}

#[inline]
pub fn play_button_label(playing: bool) -> &'static str {
    if playing {
        "Pause"
    } else {
        "Play"
    }
}

#[inline]
pub fn mute_button_label(muted: bool) -> &'static str {
    if muted {
        "Unmute"
    } else {
        "Mute"
    }
}
