use meridian_core::Vec3;
use serde::{Deserialize, Serialize};

use crate::device::DEFAULT_SPEED_OF_SOUND;
use crate::error::AudioError;
use crate::renderer::DistanceModel;

/// Listener and environment parameters of a rendering context.
///
/// Missing fields fall back to the device defaults when deserializing, so a
/// settings file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub listener_position: Vec3,
    pub listener_velocity: Vec3,
    /// Direction the listener faces.
    pub listener_forward: Vec3,
    pub listener_up: Vec3,
    /// Listener gain (1.0 = unattenuated).
    pub listener_gain: f32,
    /// Units per second.
    pub speed_of_sound: f32,
    pub doppler_factor: f32,
    pub distance_model: DistanceModel,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            listener_position: Vec3::ZERO,
            listener_velocity: Vec3::ZERO,
            listener_forward: -Vec3::Z,
            listener_up: Vec3::Y,
            listener_gain: 1.0,
            speed_of_sound: DEFAULT_SPEED_OF_SOUND,
            doppler_factor: 1.0,
            distance_model: DistanceModel::InverseClamped,
        }
    }
}

impl RendererConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, AudioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, AudioError> {
        Ok(toml::to_string(self)?)
    }
}
