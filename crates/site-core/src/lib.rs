pub mod config;
pub mod constants;
pub mod content;
pub mod decor;
pub mod error;
pub mod metadata;
pub mod particles;
pub mod sampler;
pub mod state;

pub use config::*;
pub use constants::*;
pub use content::*;
pub use decor::*;
pub use error::*;
pub use metadata::*;
pub use particles::*;
pub use sampler::*;
pub use state::*;
