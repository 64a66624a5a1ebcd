use thiserror::Error;

/// Rejected tuning values, reported once when the page is mounted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{stream} sampling interval must be greater than zero")]
    ZeroInterval { stream: &'static str },
    #[error("{kind} particle count {count} exceeds the limit of {max}")]
    TooManyParticles {
        kind: &'static str,
        count: usize,
        max: usize,
    },
    #[error("parallax factor `{name}` is not finite: {value}")]
    NonFiniteFactor { name: &'static str, value: f32 },
}
