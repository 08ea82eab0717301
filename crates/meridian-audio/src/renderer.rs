//! Listener and environment accessors
//!
//! [`Renderer`] is a borrowed view of a [`Context`](crate::Context). Every
//! setter forwards to the device immediately, so the matching getter observes
//! the new value right away.

use std::fmt;

use meridian_core::Vec3;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace, warn};

use crate::config::RendererConfig;
use crate::device::{Device, FloatParam, ListenerVector};
use crate::error::AudioError;

/// A raw device enumerant outside the set an enum names.
///
/// Only `from_raw` builds one, so an `Unknown` variant never carries a value
/// that has a named variant of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawEnum(u32);

impl RawEnum {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RawEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Attenuation model: how loudness falls off with distance from the listener.
///
/// Raw values outside the known set are kept as [`DistanceModel::Unknown`]
/// so they can still be stored and printed. Serialized as the variant name,
/// or as the raw integer for unknown values.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceModel {
    /// No attenuation.
    None,
    Inverse,
    InverseClamped,
    Linear,
    LinearClamped,
    Exponent,
    ExponentClamped,
    /// A raw enumerant this crate does not know.
    Unknown(RawEnum),
}

impl DistanceModel {
    const KNOWN: [DistanceModel; 7] = [
        DistanceModel::None,
        DistanceModel::Inverse,
        DistanceModel::InverseClamped,
        DistanceModel::Linear,
        DistanceModel::LinearClamped,
        DistanceModel::Exponent,
        DistanceModel::ExponentClamped,
    ];

    const NAMES: &'static [&'static str] = &[
        "None",
        "Inverse",
        "InverseClamped",
        "Linear",
        "LinearClamped",
        "Exponent",
        "ExponentClamped",
    ];

    /// Map a raw device enumerant, keeping unrecognized values.
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0x0000 => DistanceModel::None,
            0xD001 => DistanceModel::Inverse,
            0xD002 => DistanceModel::InverseClamped,
            0xD003 => DistanceModel::Linear,
            0xD004 => DistanceModel::LinearClamped,
            0xD005 => DistanceModel::Exponent,
            0xD006 => DistanceModel::ExponentClamped,
            other => DistanceModel::Unknown(RawEnum(other)),
        }
    }

    /// Raw device enumerant
    pub const fn raw(self) -> u32 {
        match self {
            DistanceModel::None => 0x0000,
            DistanceModel::Inverse => 0xD001,
            DistanceModel::InverseClamped => 0xD002,
            DistanceModel::Linear => 0xD003,
            DistanceModel::LinearClamped => 0xD004,
            DistanceModel::Exponent => 0xD005,
            DistanceModel::ExponentClamped => 0xD006,
            DistanceModel::Unknown(raw) => raw.0,
        }
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            DistanceModel::None => "None",
            DistanceModel::Inverse => "Inverse",
            DistanceModel::InverseClamped => "InverseClamped",
            DistanceModel::Linear => "Linear",
            DistanceModel::LinearClamped => "LinearClamped",
            DistanceModel::Exponent => "Exponent",
            DistanceModel::ExponentClamped => "ExponentClamped",
            DistanceModel::Unknown(_) => return None,
        })
    }
}

impl fmt::Debug for DistanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "DistanceModel::{}", name),
            None => write!(f, "DistanceModel({:#x})", self.raw()),
        }
    }
}

impl Serialize for DistanceModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u32(self.raw()),
        }
    }
}

struct DistanceModelVisitor;

impl<'de> Visitor<'de> for DistanceModelVisitor {
    type Value = DistanceModel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a distance model name or raw enumerant")
    }

    fn visit_str<E: de::Error>(self, name: &str) -> Result<DistanceModel, E> {
        DistanceModel::KNOWN
            .into_iter()
            .find(|model| model.name() == Some(name))
            .ok_or_else(|| E::unknown_variant(name, DistanceModel::NAMES))
    }

    fn visit_u64<E: de::Error>(self, raw: u64) -> Result<DistanceModel, E> {
        u32::try_from(raw)
            .map(DistanceModel::from_raw)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(raw), &self))
    }

    fn visit_i64<E: de::Error>(self, raw: i64) -> Result<DistanceModel, E> {
        u32::try_from(raw)
            .map(DistanceModel::from_raw)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(raw), &self))
    }
}

impl<'de> Deserialize<'de> for DistanceModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DistanceModelVisitor)
    }
}

/// Error state reported by the device.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    NoError,
    InvalidName,
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    OutOfMemory,
    /// A raw error code this crate does not know.
    Unknown(RawEnum),
}

impl Error {
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            0x0000 => Error::NoError,
            0xA001 => Error::InvalidName,
            0xA002 => Error::InvalidEnum,
            0xA003 => Error::InvalidValue,
            0xA004 => Error::InvalidOperation,
            0xA005 => Error::OutOfMemory,
            other => Error::Unknown(RawEnum(other)),
        }
    }

    pub const fn raw(self) -> u32 {
        match self {
            Error::NoError => 0x0000,
            Error::InvalidName => 0xA001,
            Error::InvalidEnum => 0xA002,
            Error::InvalidValue => 0xA003,
            Error::InvalidOperation => 0xA004,
            Error::OutOfMemory => 0xA005,
            Error::Unknown(raw) => raw.0,
        }
    }

    fn name(self) -> Option<&'static str> {
        Some(match self {
            Error::NoError => "NoError",
            Error::InvalidName => "InvalidName",
            Error::InvalidEnum => "InvalidEnum",
            Error::InvalidValue => "InvalidValue",
            Error::InvalidOperation => "InvalidOperation",
            Error::OutOfMemory => "OutOfMemory",
            Error::Unknown(_) => return None,
        })
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Error::{}", name),
            None => write!(f, "Error({:#x})", self.raw()),
        }
    }
}

/// Accessor for the listener and environment of one context.
pub struct Renderer<'a, D: Device> {
    device: &'a mut D,
}

impl<'a, D: Device> Renderer<'a, D> {
    pub(crate) fn new(device: &'a mut D) -> Self {
        Self { device }
    }

    // ---- Listener ----

    /// Set the listener orientation as a forward and an up vector.
    pub fn set_listener_orientation(&mut self, forward: Vec3, up: Vec3) {
        trace!("Listener orientation set to forward {:?}, up {:?}", forward, up);
        self.device.set_listener_orientation(forward, up);
    }

    /// Listener orientation as `[forward, up]`.
    pub fn listener_orientation(&self) -> [Vec3; 2] {
        self.device.listener_orientation()
    }

    pub fn set_listener_position(&mut self, position: Vec3) {
        trace!("Listener position set to {:?}", position);
        self.device
            .set_listener_vector(ListenerVector::Position, position);
    }

    pub fn listener_position(&self) -> Vec3 {
        self.device.listener_vector(ListenerVector::Position)
    }

    pub fn set_listener_velocity(&mut self, velocity: Vec3) {
        trace!("Listener velocity set to {:?}", velocity);
        self.device
            .set_listener_vector(ListenerVector::Velocity, velocity);
    }

    pub fn listener_velocity(&self) -> Vec3 {
        self.device.listener_vector(ListenerVector::Velocity)
    }

    /// Set the listener gain (1.0 = unattenuated).
    pub fn set_listener_gain(&mut self, gain: f32) {
        trace!("Listener gain set to {}", gain);
        self.device.set_float(FloatParam::ListenerGain, gain);
    }

    pub fn listener_gain(&self) -> f32 {
        self.device.float(FloatParam::ListenerGain)
    }

    // ---- Environment ----

    /// Set the speed of sound used for doppler shifts, in units per second.
    pub fn set_speed_of_sound(&mut self, speed: f32) {
        trace!("Speed of sound set to {}", speed);
        self.device.set_float(FloatParam::SpeedOfSound, speed);
    }

    pub fn speed_of_sound(&self) -> f32 {
        self.device.float(FloatParam::SpeedOfSound)
    }

    /// Scale the doppler effect (0.0 disables it).
    pub fn set_doppler_factor(&mut self, factor: f32) {
        trace!("Doppler factor set to {}", factor);
        self.device.set_float(FloatParam::DopplerFactor, factor);
    }

    pub fn doppler_factor(&self) -> f32 {
        self.device.float(FloatParam::DopplerFactor)
    }

    pub fn set_distance_model(&mut self, model: DistanceModel) {
        trace!("Distance model set to {:?}", model);
        self.device.set_distance_model(model.raw());
    }

    pub fn distance_model(&self) -> DistanceModel {
        DistanceModel::from_raw(self.device.distance_model())
    }

    // ---- Errors ----

    /// The pending device error. Reading it resets the device to `NoError`.
    pub fn error(&mut self) -> Error {
        Error::from_raw(self.device.take_error())
    }

    /// Read the pending device error and turn it into a `Result`.
    pub fn check_error(&mut self) -> Result<(), AudioError> {
        match self.error() {
            Error::NoError => Ok(()),
            error => {
                warn!("Audio device reported {:?}", error);
                Err(AudioError::Device(error))
            }
        }
    }

    // ---- Snapshots ----

    /// Push every parameter of `config` to the device.
    pub fn apply(&mut self, config: &RendererConfig) {
        debug!("Applying renderer config: {:?}", config);
        self.set_listener_position(config.listener_position);
        self.set_listener_velocity(config.listener_velocity);
        self.set_listener_orientation(config.listener_forward, config.listener_up);
        self.set_listener_gain(config.listener_gain);
        self.set_speed_of_sound(config.speed_of_sound);
        self.set_doppler_factor(config.doppler_factor);
        self.set_distance_model(config.distance_model);
    }

    /// Read every parameter back from the device.
    pub fn snapshot(&self) -> RendererConfig {
        let [listener_forward, listener_up] = self.listener_orientation();
        RendererConfig {
            listener_position: self.listener_position(),
            listener_velocity: self.listener_velocity(),
            listener_forward,
            listener_up,
            listener_gain: self.listener_gain(),
            speed_of_sound: self.speed_of_sound(),
            doppler_factor: self.doppler_factor(),
            distance_model: self.distance_model(),
        }
    }
}
