//! Meridian Math - Unit-tagged angles
//!
//! Angles carry their unit in the type: [`Deg<T>`] and [`Rad<T>`] wrap an
//! `f32` or `f64` with no runtime overhead, convert into each other through
//! `From`/`Into`, and never compare or add across units without converting.
//!
//! ```
//! use meridian_math::{deg, Deg, Rad};
//!
//! let fov = deg!(90.0);
//! let half: Rad<f64> = (fov / 2.0).into();
//! assert!((half.value() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
//!
//! let turned = fov + Rad::new(std::f64::consts::PI);
//! assert!((turned.value() - 270.0).abs() < 1e-9);
//! # let _: Deg<f64> = turned;
//! ```
//!
//! Comparing across units does not compile:
//!
//! ```compile_fail
//! use meridian_math::{Deg, Rad};
//! let _ = Deg::new(1.0f32) == Rad::new(1.0f32);
//! ```
//!
//! Neither does building an angle from a bare scalar implicitly:
//!
//! ```compile_fail
//! use meridian_math::Deg;
//! let _: Deg<f32> = 1.0f32.into();
//! ```

pub mod angle;
pub mod literals;
pub mod scalar;
pub mod unit;

pub use angle::{Angle, Deg, ParseAngleError, Rad};
pub use scalar::Scalar;
pub use unit::{Degree, Radian, Unit};
