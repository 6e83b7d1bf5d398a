// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn sampling_ranges_are_well_formed() {
    assert!(PARTICLE_DENSITY_DIVISOR > 0.0);
    assert!(PARTICLE_RADIUS_MIN >= 0.0);
    assert!(PARTICLE_RADIUS_MAX > PARTICLE_RADIUS_MIN);
    assert!(ANGLE_STEP_PER_FRAME > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn wrapped_particles_restart_above_the_field() {
    assert!(WRAP_RESET_Y <= 0.0);
    // A wrapped particle must be fully hidden before it falls back in
    assert!(WRAP_RESET_Y + PARTICLE_RADIUS_MAX <= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_valid() {
    assert!(GRADIENT_SMOOTHING > 0.0 && GRADIENT_SMOOTHING <= 1.0);
    assert!(CARD_SMOOTHING > 0.0 && CARD_SMOOTHING <= 1.0);
    // The glow trails the pointer more lazily than the card
    assert!(GRADIENT_SMOOTHING < CARD_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_cap_leaves_room_for_wide_screens() {
    // An 8K-wide canvas at the default density stays under the cap
    assert!(7680.0 / PARTICLE_DENSITY_DIVISOR < MAX_PARTICLES as f64);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tilt_limits_are_positive() {
    assert!(TILT_MAX_ROTATION_DEG > 0.0);
    assert!(TILT_MAX_TRANSLATE_PX > 0.0);
}

#[test]
fn page_ids_are_distinct() {
    let ids = [
        SNOW_CANVAS_ID,
        STAGE_ID,
        GRADIENT_ID,
        CARD_ID,
        SPLASH_ID,
        AUDIO_ID,
        OPEN_BUTTON_ID,
        CLOSE_BUTTON_ID,
        PLAY_BUTTON_ID,
        MUTE_BUTTON_ID,
        STOP_BUTTON_ID,
        SEEK_INPUT_ID,
        TIME_CURRENT_ID,
        TIME_DURATION_ID,
        PROGRESS_FILL_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn backdrops_are_distinct_images() {
    assert_ne!(INTRO_BACKDROP_URL, STAGE_BACKDROP_URL);
    assert!(INTRO_BACKDROP_URL.starts_with('/'));
    assert!(STAGE_BACKDROP_URL.starts_with('/'));
}
