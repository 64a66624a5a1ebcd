use crate::constants::{DEFAULT_PARTICLE_SEED, MAX_PARTICLES_PER_KIND, SAMPLE_INTERVAL};
use crate::decor::ParallaxConfig;
use crate::error::ConfigError;
use crate::particles::{ParticleConfig, ParticleKind};
use std::time::Duration;

/// Page-wide tuning. There is no config file; the web front-end mounts with
/// `SiteConfig::default()` and validates it once.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub pointer_interval: Duration,
    pub scroll_interval: Duration,
    pub parallax: ParallaxConfig,
    pub particles: ParticleConfig,
    pub particle_seed: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            pointer_interval: SAMPLE_INTERVAL,
            scroll_interval: SAMPLE_INTERVAL,
            parallax: ParallaxConfig::default(),
            particles: ParticleConfig::default(),
            particle_seed: DEFAULT_PARTICLE_SEED,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pointer_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { stream: "pointer" });
        }
        if self.scroll_interval.is_zero() {
            return Err(ConfigError::ZeroInterval { stream: "scroll" });
        }
        for (i, f) in self.parallax.orb_factors.iter().enumerate() {
            if !f.is_finite() {
                const NAMES: [&str; 4] = ["orb0", "orb1", "orb2", "orb3"];
                return Err(ConfigError::NonFiniteFactor {
                    name: NAMES[i],
                    value: *f,
                });
            }
        }
        if !self.parallax.grid_factor.is_finite() {
            return Err(ConfigError::NonFiniteFactor {
                name: "grid",
                value: self.parallax.grid_factor,
            });
        }
        for kind in ParticleKind::ALL {
            let count = self.particles.count(kind);
            if count > MAX_PARTICLES_PER_KIND {
                return Err(ConfigError::TooManyParticles {
                    kind: kind.name(),
                    count,
                    max: MAX_PARTICLES_PER_KIND,
                });
            }
        }
        Ok(())
    }
}
