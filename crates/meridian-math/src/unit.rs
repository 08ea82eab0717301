//! Angular unit markers

use std::fmt::Debug;

use crate::scalar::Scalar;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Degree {}
    impl Sealed for super::Radian {}
}

/// Compile-time tag naming the unit an angle's value is expressed in.
///
/// Implemented by the zero-sized markers [`Degree`] and [`Radian`]. They are
/// uninhabited and only ever appear as a type parameter.
pub trait Unit: Copy + Debug + Send + Sync + 'static + sealed::Sealed {
    /// Tag used in textual output, e.g. `Deg(90)`.
    const TAG: &'static str;

    /// One full revolution expressed in this unit.
    fn full_turn<T: Scalar>() -> T;
}

/// Degrees: a full turn is 360.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {}

impl Unit for Degree {
    const TAG: &'static str = "Deg";

    #[inline]
    fn full_turn<T: Scalar>() -> T {
        T::narrow(360.0)
    }
}

/// Radians: a full turn is 2π.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radian {}

impl Unit for Radian {
    const TAG: &'static str = "Rad";

    #[inline]
    fn full_turn<T: Scalar>() -> T {
        T::TAU()
    }
}
