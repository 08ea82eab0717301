//! Floating-point precisions an angle can be stored in

use std::fmt::{Debug, Display};
use std::num::ParseFloatError;
use std::str::FromStr;

use bytemuck::Pod;
use num_traits::{Float, FloatConst};
use serde::de::DeserializeOwned;
use serde::Serialize;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Underlying scalar of an angle. Implemented for `f32` and `f64` only.
pub trait Scalar:
    Float
    + FloatConst
    + Pod
    + Default
    + Debug
    + Display
    + FromStr<Err = ParseFloatError>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// Widen to `f64` without loss.
    fn widen(self) -> f64;

    /// Narrow from `f64`, rounding to the nearest representable value.
    fn narrow(value: f64) -> Self;

    /// Recast into another precision.
    #[inline]
    fn cast<S: Scalar>(self) -> S {
        S::narrow(self.widen())
    }
}

impl Scalar for f32 {
    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_between_precisions() {
        assert_eq!(2.5f32.cast::<f64>(), 2.5f64);
        assert_eq!(2.5f64.cast::<f32>(), 2.5f32);
        assert_eq!(0.1f64.cast::<f64>(), 0.1f64);
    }
}
