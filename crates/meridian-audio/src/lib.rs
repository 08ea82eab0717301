//! Meridian Audio - Listener and environment state of a 3D audio context
//!
//! A [`Context`] owns a [`Device`]; its [`Renderer`] gets and sets the
//! listener's position, velocity, orientation and gain together with the
//! context-wide speed of sound, doppler factor and [`DistanceModel`].

mod attenuation;
mod config;
mod context;
mod device;
mod error;
mod renderer;

pub use attenuation::AttenuationParams;
pub use config::RendererConfig;
pub use context::Context;
pub use device::{Device, FloatParam, ListenerVector, SoftwareDevice, DEFAULT_SPEED_OF_SOUND};
pub use error::AudioError;
pub use renderer::{DistanceModel, Error, RawEnum, Renderer};
