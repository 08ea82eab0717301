//! Meridian Core - Shared types and utilities for the Meridian toolkit
//!
//! This crate provides the foundational pieces used by the other crates:
//! - Vector types (re-exported from glam)
//! - Key/value configuration storage with typed values

pub mod config;

pub use config::{ConfigError, ConfigValue, Configuration};
pub use glam::{Vec2, Vec3, Vec4};
