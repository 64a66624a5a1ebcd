use std::time::Duration;

// Sampling and parallax tuning shared by the web front-end and host tests.

// Viewport sampling
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(50); // ~20 publishes per second per stream

// Scroll parallax factors (percent of viewport per scrolled pixel)
pub const ORB_SCROLL_FACTORS: [f32; 4] = [-0.1, 0.05, 0.08, -0.06];
pub const ORB_BASE_PERCENT: [f32; 4] = [20.0, 10.0, 50.0, 30.0];

// Grid overlay moves at half the scroll speed
pub const GRID_SCROLL_FACTOR: f32 = 0.5;

// Pointer follower glow is centered on the pointer
pub const GLOW_SIZE_PX: f32 = 400.0;

// Particle field
pub const DEFAULT_PARTICLE_SEED: u64 = 0x1A4C_E57D;
pub const MAX_PARTICLES_PER_KIND: usize = 256;
pub const TIMING_JITTER_SEC: f32 = 0.25; // max random offset on animation delay
