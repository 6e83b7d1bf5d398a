use super::error::FxError;
use glam::DVec2;

/// Client rectangle of a DOM element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Exponential-decay follower: each `step` closes a fixed fraction of the
/// gap between `current` and `target`.
#[derive(Clone, Debug)]
pub struct EasingTracker {
    target: DVec2,
    current: DVec2,
    smoothing: f64,
}

impl EasingTracker {
    /// `smoothing` must lie in (0, 1]; 1 snaps to the target every step.
    pub fn new(smoothing: f64) -> Result<Self, FxError> {
        if !(smoothing > 0.0 && smoothing <= 1.0) {
            return Err(FxError::InvalidConfig {
                field: "smoothing",
                value: smoothing,
            });
        }
        Ok(Self {
            target: DVec2::ZERO,
            current: DVec2::ZERO,
            smoothing,
        })
    }

    #[inline]
    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = DVec2::new(x, y);
    }

    #[inline]
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
    }

    /// Drops both positions back to the origin without easing.
    pub fn reset(&mut self) {
        self.target = DVec2::ZERO;
        self.current = DVec2::ZERO;
    }

    pub fn current(&self) -> DVec2 {
        self.current
    }

    pub fn target(&self) -> DVec2 {
        self.target
    }

    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }
}

/// Pointer position relative to the center of `rect`.
#[inline]
pub fn offset_from_center(pointer_x: f64, pointer_y: f64, rect: &Rect) -> DVec2 {
    DVec2::new(pointer_x, pointer_y) - rect.center()
}
