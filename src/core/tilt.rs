use super::easing::Rect;
use glam::DVec2;

/// 3D card transform parameters; the consumer turns these into CSS.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub translate_x_px: f64,
    pub translate_y_px: f64,
}

impl Tilt {
    pub const ZERO: Tilt = Tilt {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        translate_x_px: 0.0,
        translate_y_px: 0.0,
    };

    /// Tilt for an eased pointer offset from the center of `rect`.
    ///
    /// A zero offset (a released card) is exactly `Tilt::ZERO`, with no
    /// rounding left over from mapping back through the rect.
    pub fn from_eased_offset(
        offset: DVec2,
        rect: &Rect,
        max_rotation_deg: f64,
        max_translate_px: f64,
    ) -> Tilt {
        if offset == DVec2::ZERO {
            return Tilt::ZERO;
        }
        let pointer = rect.center() + offset;
        tilt_from_pointer(pointer.x, pointer.y, rect, max_rotation_deg, max_translate_px)
    }
}

/// Maps a pointer over `rect` to a tilt that peaks at the edges.
///
/// The card leans away from the pointer vertically (negative `rotate_x`
/// below the middle) and toward it horizontally. An axis with no extent
/// contributes nothing.
pub fn tilt_from_pointer(
    pointer_x: f64,
    pointer_y: f64,
    rect: &Rect,
    max_rotation_deg: f64,
    max_translate_px: f64,
) -> Tilt {
    let nx = normalized_from_mid(pointer_x - rect.left, rect.width / 2.0);
    let ny = normalized_from_mid(pointer_y - rect.top, rect.height / 2.0);
    Tilt {
        rotate_x_deg: -max_rotation_deg * ny,
        rotate_y_deg: max_rotation_deg * nx,
        translate_x_px: max_translate_px * nx,
        translate_y_px: max_translate_px * ny,
    }
}

// (v - mid) / mid, or 0 when the axis is degenerate
#[inline]
fn normalized_from_mid(v: f64, mid: f64) -> f64 {
    if mid > 0.0 {
        (v - mid) / mid
    } else {
        0.0
    }
}
