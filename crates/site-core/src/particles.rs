use crate::constants::TIMING_JITTER_SEC;
use rand::prelude::*;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Circle,
    Square,
    Triangle,
    Hexagon,
    Plus,
}

impl ParticleKind {
    pub const ALL: [ParticleKind; 5] = [
        ParticleKind::Circle,
        ParticleKind::Square,
        ParticleKind::Triangle,
        ParticleKind::Hexagon,
        ParticleKind::Plus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParticleKind::Circle => "circle",
            ParticleKind::Square => "square",
            ParticleKind::Triangle => "triangle",
            ParticleKind::Hexagon => "hexagon",
            ParticleKind::Plus => "plus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Emerald,
    Blue,
    Purple,
}

impl Tint {
    pub fn rgba(self, alpha: f32) -> String {
        let (r, g, b) = match self {
            Tint::Emerald => (16, 185, 129),
            Tint::Blue => (59, 130, 246),
            Tint::Purple => (168, 85, 247),
        };
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

/// Keyframe animation names defined in the page stylesheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drift {
    Particle,
    Float,
    FloatDelayed,
}

impl Drift {
    pub fn keyframes(self) -> &'static str {
        match self {
            Drift::Particle => "particle",
            Drift::Float => "float",
            Drift::FloatDelayed => "float-delayed",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub circles: usize,
    pub squares: usize,
    pub triangles: usize,
    pub hexagons: usize,
    pub pluses: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            circles: 20,
            squares: 8,
            triangles: 6,
            hexagons: 5,
            pluses: 7,
        }
    }
}

impl ParticleConfig {
    pub fn count(&self, kind: ParticleKind) -> usize {
        match kind {
            ParticleKind::Circle => self.circles,
            ParticleKind::Square => self.squares,
            ParticleKind::Triangle => self.triangles,
            ParticleKind::Hexagon => self.hexagons,
            ParticleKind::Plus => self.pluses,
        }
    }

    pub fn total(&self) -> usize {
        ParticleKind::ALL.iter().map(|k| self.count(*k)).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    pub index: usize,
    /// Percent of the viewport, always within 0..=100.
    pub left: f32,
    pub top: f32,
    /// Width in px (font size for plus signs, half base for triangles).
    pub size: f32,
    /// Height in px for triangles, equal to `size` otherwise.
    pub extent: f32,
    pub rotation_deg: f32,
    pub delay_sec: f32,
    pub duration_sec: f32,
    pub tint: Tint,
    pub opacity: f32,
    pub drift: Drift,
}

fn wrap_percent(v: f32) -> f32 {
    if v > 100.0 {
        v % 100.0
    } else {
        v
    }
}

fn tint3(i: usize) -> Tint {
    match i % 3 {
        0 => Tint::Emerald,
        1 => Tint::Blue,
        _ => Tint::Purple,
    }
}

fn tint2(i: usize, even: Tint, odd: Tint) -> Tint {
    if i % 2 == 0 {
        even
    } else {
        odd
    }
}

impl Particle {
    fn layout(kind: ParticleKind, i: usize) -> Self {
        let f = i as f32;
        let m = |k: usize, span: usize| ((i * k) % span) as f32;
        let (left, top, size, extent, rotation_deg, delay, duration, tint, opacity, drift) =
            match kind {
                ParticleKind::Circle => {
                    let s = 3.0 + (i % 4) as f32;
                    (
                        5.0 + f * 5.0,
                        10.0 + m(7, 80),
                        s,
                        s,
                        0.0,
                        f * 0.3,
                        5.0 + (i % 5) as f32,
                        tint3(i),
                        0.4,
                        Drift::Particle,
                    )
                }
                ParticleKind::Square => {
                    let s = 8.0 + (i % 3) as f32 * 4.0;
                    (
                        15.0 + f * 12.0,
                        20.0 + m(9, 70),
                        s,
                        s,
                        f * 15.0,
                        f * 0.6,
                        8.0 + (i % 4) as f32,
                        tint2(i, Tint::Emerald, Tint::Blue),
                        0.3,
                        Drift::Float,
                    )
                }
                ParticleKind::Triangle => (
                    10.0 + f * 15.0,
                    25.0 + m(11, 65),
                    6.0 + f * 2.0,
                    10.0 + f * 3.0,
                    0.0,
                    f * 0.8,
                    10.0 + (i % 3) as f32,
                    tint2(i, Tint::Purple, Tint::Emerald),
                    0.25,
                    Drift::FloatDelayed,
                ),
                ParticleKind::Hexagon => {
                    let s = 12.0 + f * 3.0;
                    (
                        20.0 + f * 18.0,
                        30.0 + m(13, 60),
                        s,
                        s,
                        0.0,
                        f,
                        12.0 + (i % 4) as f32,
                        tint2(i, Tint::Blue, Tint::Emerald),
                        0.2,
                        Drift::Particle,
                    )
                }
                ParticleKind::Plus => {
                    let s = 16.0 + f * 4.0;
                    (
                        8.0 + f * 14.0,
                        12.0 + m(10, 75),
                        s,
                        s,
                        0.0,
                        f * 0.5,
                        7.0 + (i % 3) as f32,
                        tint3(i),
                        0.35,
                        Drift::Float,
                    )
                }
            };
        Self {
            kind,
            index: i,
            left: wrap_percent(left),
            top: wrap_percent(top),
            size,
            extent,
            rotation_deg,
            delay_sec: delay,
            duration_sec: duration,
            tint,
            opacity,
            drift,
        }
    }

    /// Inline style for the particle's element.
    pub fn css(&self) -> String {
        let mut s = format!(
            "position:absolute;left:{}%;top:{}%;opacity:{};animation:{} {}s ease-in-out {}s infinite;",
            self.left,
            self.top,
            self.opacity,
            self.drift.keyframes(),
            self.duration_sec,
            self.delay_sec,
        );
        let _ = match self.kind {
            ParticleKind::Circle => write!(
                s,
                "width:{0}px;height:{0}px;border-radius:9999px;background:{1};box-shadow:0 0 {2}px {3};",
                self.size,
                self.tint.rgba(0.4),
                8 + (self.index % 3) * 4,
                self.tint.rgba(0.5),
            ),
            ParticleKind::Square => write!(
                s,
                "width:{0}px;height:{0}px;border:1px solid {1};transform:rotate({2}deg);box-shadow:0 0 12px {3};",
                self.size,
                self.tint.rgba(0.4),
                self.rotation_deg,
                self.tint.rgba(0.3),
            ),
            ParticleKind::Triangle => write!(
                s,
                "width:0;height:0;border-left:{0}px solid transparent;border-right:{0}px solid transparent;border-bottom:{1}px solid {2};filter:drop-shadow(0 0 8px {3});",
                self.size,
                self.extent,
                self.tint.rgba(0.3),
                self.tint.rgba(0.4),
            ),
            ParticleKind::Hexagon => write!(
                s,
                "width:{0}px;height:{0}px;background:{1};clip-path:polygon(50% 0%, 100% 25%, 100% 75%, 50% 100%, 0% 75%, 0% 25%);box-shadow:0 0 16px {2};",
                self.size,
                self.tint.rgba(0.2),
                self.tint.rgba(0.4),
            ),
            ParticleKind::Plus => write!(
                s,
                "font-size:{}px;font-weight:200;color:{};text-shadow:0 0 12px {};",
                self.size,
                self.tint.rgba(0.5),
                self.tint.rgba(0.6),
            ),
        };
        s
    }

    /// Text content of the particle's element; only plus signs have any.
    pub fn glyph(&self) -> Option<&'static str> {
        (self.kind == ParticleKind::Plus).then_some("+")
    }
}

/// All floating shapes behind the page content.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Lays out particles by index and jitters their animation delay with a
    /// seeded RNG so the same seed always yields the same field.
    pub fn generate(cfg: &ParticleConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut particles = Vec::with_capacity(cfg.total());
        for kind in ParticleKind::ALL {
            for i in 0..cfg.count(kind) {
                let mut p = Particle::layout(kind, i);
                p.delay_sec += rng.gen_range(0.0..TIMING_JITTER_SEC);
                particles.push(p);
            }
        }
        Self { particles }
    }

    pub fn of_kind(&self, kind: ParticleKind) -> impl Iterator<Item = &Particle> {
        self.particles.iter().filter(move |p| p.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_percentages_in_range() {
        assert_eq!(wrap_percent(42.0), 42.0);
        assert_eq!(wrap_percent(100.0), 100.0);
        assert_eq!(wrap_percent(135.0), 35.0);
    }

    #[test]
    fn only_plus_has_a_glyph() {
        assert_eq!(Particle::layout(ParticleKind::Plus, 0).glyph(), Some("+"));
        assert_eq!(Particle::layout(ParticleKind::Circle, 0).glyph(), None);
    }

    #[test]
    fn triangle_css_uses_borders() {
        let css = Particle::layout(ParticleKind::Triangle, 1).css();
        assert!(css.contains("border-bottom:13px"));
        assert!(css.contains("width:0;"));
    }
}
