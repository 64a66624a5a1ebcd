//! Ephemeral viewport state read by the decorative layers.
//!
//! Nothing here is validated or persisted. Values are whatever the browser
//! reported at the last publish and are discarded when the page goes away.

use glam::Vec2;

/// Latest published pointer position and scroll offset.
///
/// Starts at the origin with zero scroll. Scroll is expected to be
/// non-negative and the pointer to lie inside the viewport, but neither is
/// enforced since both only feed cosmetic offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportSignals {
    pub pointer: Vec2,
    pub scroll: f32,
}

impl ViewportSignals {
    pub fn with_pointer(self, pointer: Vec2) -> Self {
        Self { pointer, ..self }
    }

    pub fn with_scroll(self, scroll: f32) -> Self {
        Self { scroll, ..self }
    }
}
