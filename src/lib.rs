//! Meridian - typed angles and audio listener state
//!
//! Facade over the workspace crates:
//! - [`math`]: degree/radian angle types
//! - [`audio`]: listener and environment accessors of an audio context
//! - [`config`]: key/value configuration storage

pub use meridian_audio as audio;
pub use meridian_core::config;
pub use meridian_math as math;

pub use meridian_math::{deg, degf, rad, radf};

/// Commonly used types in one import.
pub mod prelude {
    pub use meridian_audio::{Context, DistanceModel, Renderer, RendererConfig};
    pub use meridian_core::{ConfigValue, Configuration, Vec3};
    pub use meridian_math::{Deg, Rad};
}
