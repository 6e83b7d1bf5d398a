pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod particles;
pub mod player;
pub mod tilt;

pub use config::EffectsConfig;
pub use constants::*;
pub use easing::{offset_from_center, EasingTracker, Rect};
pub use error::FxError;
pub use particles::{advance_angle, Particle, ParticleField, ParticleSprite};
pub use player::{format_time, Backdrop, PlayerState};
pub use tilt::{tilt_from_pointer, Tilt};
