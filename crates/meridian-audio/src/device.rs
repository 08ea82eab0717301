//! Low-level device interface the renderer forwards to
//!
//! A [`Device`] owns the listener and environment state of one rendering
//! context and reports failures through a pending error code, the way an
//! OpenAL-style device does. [`SoftwareDevice`] keeps that state in memory.

use meridian_core::Vec3;

use crate::renderer::{DistanceModel, Error};

/// Vector-valued listener parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerVector {
    Position,
    Velocity,
}

/// Scalar parameters, either on the listener or global to the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatParam {
    ListenerGain,
    SpeedOfSound,
    DopplerFactor,
}

/// Raw get/set access to a rendering context's listener and environment.
///
/// Setters never fail directly. An invalid request leaves the state untouched
/// and records an error code that [`Device::take_error`] returns once.
pub trait Device {
    fn set_listener_vector(&mut self, param: ListenerVector, value: Vec3);
    fn listener_vector(&self, param: ListenerVector) -> Vec3;

    fn set_listener_orientation(&mut self, forward: Vec3, up: Vec3);
    fn listener_orientation(&self) -> [Vec3; 2];

    fn set_float(&mut self, param: FloatParam, value: f32);
    fn float(&self, param: FloatParam) -> f32;

    /// Select the attenuation model by its raw enumerant.
    fn set_distance_model(&mut self, raw: u32);
    fn distance_model(&self) -> u32;

    /// Return the pending error code and reset it to "no error".
    fn take_error(&mut self) -> u32;
}

/// Default speed of sound in units per second.
pub const DEFAULT_SPEED_OF_SOUND: f32 = 343.3;

/// In-memory device holding the state a hardware context would.
#[derive(Debug, Clone, PartialEq)]
pub struct SoftwareDevice {
    position: Vec3,
    velocity: Vec3,
    forward: Vec3,
    up: Vec3,
    gain: f32,
    speed_of_sound: f32,
    doppler_factor: f32,
    distance_model: u32,
    error: u32,
}

impl Default for SoftwareDevice {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            forward: -Vec3::Z,
            up: Vec3::Y,
            gain: 1.0,
            speed_of_sound: DEFAULT_SPEED_OF_SOUND,
            doppler_factor: 1.0,
            distance_model: DistanceModel::InverseClamped.raw(),
            error: Error::NoError.raw(),
        }
    }
}

impl SoftwareDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the first error until it is read.
    fn record(&mut self, error: Error) {
        if self.error == Error::NoError.raw() {
            self.error = error.raw();
        }
    }
}

impl Device for SoftwareDevice {
    fn set_listener_vector(&mut self, param: ListenerVector, value: Vec3) {
        if !value.is_finite() {
            self.record(Error::InvalidValue);
            return;
        }
        match param {
            ListenerVector::Position => self.position = value,
            ListenerVector::Velocity => self.velocity = value,
        }
    }

    fn listener_vector(&self, param: ListenerVector) -> Vec3 {
        match param {
            ListenerVector::Position => self.position,
            ListenerVector::Velocity => self.velocity,
        }
    }

    fn set_listener_orientation(&mut self, forward: Vec3, up: Vec3) {
        if !forward.is_finite() || !up.is_finite() {
            self.record(Error::InvalidValue);
            return;
        }
        self.forward = forward;
        self.up = up;
    }

    fn listener_orientation(&self) -> [Vec3; 2] {
        [self.forward, self.up]
    }

    fn set_float(&mut self, param: FloatParam, value: f32) {
        let valid = match param {
            FloatParam::ListenerGain | FloatParam::DopplerFactor => value >= 0.0,
            FloatParam::SpeedOfSound => value > 0.0,
        };
        // NaN fails both comparisons above
        if !valid || value.is_infinite() {
            self.record(Error::InvalidValue);
            return;
        }
        match param {
            FloatParam::ListenerGain => self.gain = value,
            FloatParam::SpeedOfSound => self.speed_of_sound = value,
            FloatParam::DopplerFactor => self.doppler_factor = value,
        }
    }

    fn float(&self, param: FloatParam) -> f32 {
        match param {
            FloatParam::ListenerGain => self.gain,
            FloatParam::SpeedOfSound => self.speed_of_sound,
            FloatParam::DopplerFactor => self.doppler_factor,
        }
    }

    fn set_distance_model(&mut self, raw: u32) {
        if matches!(DistanceModel::from_raw(raw), DistanceModel::Unknown(_)) {
            self.record(Error::InvalidEnum);
            return;
        }
        self.distance_model = raw;
    }

    fn distance_model(&self) -> u32 {
        self.distance_model
    }

    fn take_error(&mut self) -> u32 {
        std::mem::replace(&mut self.error, Error::NoError.raw())
    }
}
