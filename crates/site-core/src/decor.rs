use crate::constants::{GLOW_SIZE_PX, GRID_SCROLL_FACTOR, ORB_BASE_PERCENT, ORB_SCROLL_FACTORS};
use crate::state::ViewportSignals;
use glam::Vec2;

// Background orbs and the scroll/pointer driven offsets of the decorative layers.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn css(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }
}

/// Static placement of one blurred gradient orb. Only the vertical offset
/// moves with scroll.
#[derive(Clone, Copy, Debug)]
pub struct OrbSpec {
    pub size_px: u32,
    pub vertical: Edge,
    pub horizontal: Edge,
    pub horizontal_percent: f32,
    pub gradient: (&'static str, &'static str),
    pub opacity: f32,
    pub blur_px: u32,
    pub delayed: bool,
}

pub const ORBS: [OrbSpec; 4] = [
    OrbSpec {
        size_px: 800,
        vertical: Edge::Top,
        horizontal: Edge::Left,
        horizontal_percent: 5.0,
        gradient: ("rgba(16,185,129,0.3)", "rgba(34,197,94,0.3)"),
        opacity: 0.6,
        blur_px: 120,
        delayed: false,
    },
    OrbSpec {
        size_px: 700,
        vertical: Edge::Bottom,
        horizontal: Edge::Right,
        horizontal_percent: 10.0,
        gradient: ("rgba(6,182,212,0.25)", "rgba(59,130,246,0.25)"),
        opacity: 0.5,
        blur_px: 120,
        delayed: true,
    },
    OrbSpec {
        size_px: 600,
        vertical: Edge::Top,
        horizontal: Edge::Right,
        horizontal_percent: 15.0,
        gradient: ("rgba(168,85,247,0.2)", "rgba(236,72,153,0.2)"),
        opacity: 0.4,
        blur_px: 120,
        delayed: false,
    },
    OrbSpec {
        size_px: 500,
        vertical: Edge::Bottom,
        horizontal: Edge::Left,
        horizontal_percent: 20.0,
        gradient: ("rgba(245,158,11,0.15)", "rgba(249,115,22,0.15)"),
        opacity: 0.3,
        blur_px: 100,
        delayed: true,
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub orb_base: [f32; 4],
    pub orb_factors: [f32; 4],
    pub grid_factor: f32,
    pub glow_size: f32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            orb_base: ORB_BASE_PERCENT,
            orb_factors: ORB_SCROLL_FACTORS,
            grid_factor: GRID_SCROLL_FACTOR,
            glow_size: GLOW_SIZE_PX,
        }
    }
}

/// Offsets of every moving decorative layer for one published signal pair.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorLayout {
    /// Vertical offset of each orb, in percent, measured from `ORBS[i].vertical`.
    pub orb_percent: [f32; 4],
    /// Top-left corner of the pointer follower glow, in CSS pixels.
    pub glow_origin: Vec2,
    pub grid_translate_y: f32,
}

impl DecorLayout {
    pub fn compute(cfg: &ParallaxConfig, signals: &ViewportSignals) -> Self {
        let mut orb_percent = [0.0; 4];
        for (i, p) in orb_percent.iter_mut().enumerate() {
            *p = cfg.orb_base[i] + signals.scroll * cfg.orb_factors[i];
        }
        let half = Vec2::splat(cfg.glow_size * 0.5);
        Self {
            orb_percent,
            glow_origin: signals.pointer - half,
            grid_translate_y: signals.scroll * cfg.grid_factor,
        }
    }

    /// `(property, value)` for the moving edge of orb `i`.
    pub fn orb_offset_css(&self, i: usize) -> (&'static str, String) {
        (ORBS[i].vertical.css(), format!("{}%", self.orb_percent[i]))
    }

    pub fn glow_css(&self) -> [(&'static str, String); 2] {
        [
            ("left", format!("{}px", self.glow_origin.x)),
            ("top", format!("{}px", self.glow_origin.y)),
        ]
    }

    pub fn grid_transform_css(&self) -> String {
        format!("translateY({}px)", self.grid_translate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_signals_yield_base_layout() {
        let cfg = ParallaxConfig::default();
        let l = DecorLayout::compute(&cfg, &ViewportSignals::default());
        assert_eq!(l.orb_percent, cfg.orb_base);
        assert_eq!(l.glow_origin, Vec2::splat(-200.0));
        assert_eq!(l.grid_translate_y, 0.0);
    }

    #[test]
    fn glow_is_centered_on_pointer() {
        let cfg = ParallaxConfig::default();
        let s = ViewportSignals::default().with_pointer(Vec2::new(640.0, 360.0));
        let l = DecorLayout::compute(&cfg, &s);
        assert_eq!(l.glow_origin + Vec2::splat(cfg.glow_size * 0.5), s.pointer);
    }

    #[test]
    fn css_values_carry_units() {
        let cfg = ParallaxConfig::default();
        let s = ViewportSignals::default().with_scroll(100.0);
        let l = DecorLayout::compute(&cfg, &s);
        assert_eq!(l.orb_offset_css(0), ("top", "10%".to_string()));
        assert_eq!(l.grid_transform_css(), "translateY(50px)");
        assert_eq!(l.glow_css()[0].0, "left");
    }
}
