//! Unit-tagged angle values
//!
//! [`Angle<U, T>`] wraps a single scalar `T` together with a phantom unit `U`.
//! Degrees and radians are distinct types, so passing one where the other is
//! expected fails to compile, while `From`/`Into` converts between them with
//! the π/180 factor.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::num::ParseFloatError;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use meridian_core::ConfigValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::scalar::Scalar;
use crate::unit::{Degree, Radian, Unit};

/// A scalar angle expressed in unit `U` with precision `T`.
///
/// The layout is exactly that of `T`.
#[repr(transparent)]
pub struct Angle<U: Unit, T: Scalar> {
    value: T,
    unit: PhantomData<U>,
}

/// Angle in degrees.
pub type Deg<T> = Angle<Degree, T>;

/// Angle in radians.
pub type Rad<T> = Angle<Radian, T>;

impl<U: Unit, T: Scalar> Angle<U, T> {
    /// Wrap a raw scalar that is already expressed in unit `U`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// The zero angle.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero())
    }

    /// Storage for an angle whose value is not yet written.
    ///
    /// Meant for hot paths that overwrite the value immediately. Reading the
    /// slot before writing it is undefined behavior, which is why this never
    /// backs [`Default`].
    #[inline]
    pub const fn uninit() -> MaybeUninit<Self> {
        MaybeUninit::uninit()
    }

    /// The raw scalar, in unit `U`.
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// Recast into another precision, keeping the unit.
    #[inline]
    pub fn cast<S: Scalar>(self) -> Angle<U, S> {
        Angle::new(self.value.cast())
    }

    /// One full revolution.
    #[inline]
    pub fn full_turn() -> Self {
        Self::new(U::full_turn())
    }

    /// Half a revolution.
    #[inline]
    pub fn half_turn() -> Self {
        Self::new(U::full_turn::<T>() / T::narrow(2.0))
    }

    /// A quarter revolution.
    #[inline]
    pub fn quarter_turn() -> Self {
        Self::new(U::full_turn::<T>() / T::narrow(4.0))
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }
}

#[inline]
fn deg_to_rad<T: Scalar>(value: T) -> T {
    value * (T::PI() / T::narrow(180.0))
}

#[inline]
fn rad_to_deg<T: Scalar>(value: T) -> T {
    value * (T::narrow(180.0) / T::PI())
}

#[inline]
fn same_unit<T: Scalar>(value: T) -> T {
    value
}

impl<T: Scalar> Angle<Degree, T> {
    /// Convert to radians.
    #[inline]
    pub fn to_rad(self) -> Rad<T> {
        self.into()
    }
}

impl<T: Scalar> Angle<Radian, T> {
    /// Convert to degrees.
    #[inline]
    pub fn to_deg(self) -> Deg<T> {
        self.into()
    }

    #[inline]
    pub fn sin(self) -> T {
        self.value.sin()
    }

    #[inline]
    pub fn cos(self) -> T {
        self.value.cos()
    }

    #[inline]
    pub fn tan(self) -> T {
        self.value.tan()
    }

    /// Sine and cosine computed together.
    #[inline]
    pub fn sin_cos(self) -> (T, T) {
        self.value.sin_cos()
    }

    #[inline]
    pub fn asin(value: T) -> Self {
        Self::new(value.asin())
    }

    #[inline]
    pub fn acos(value: T) -> Self {
        Self::new(value.acos())
    }

    #[inline]
    pub fn atan(value: T) -> Self {
        Self::new(value.atan())
    }

    /// Four-quadrant arc tangent of `y / x`.
    #[inline]
    pub fn atan2(y: T, x: T) -> Self {
        Self::new(y.atan2(x))
    }
}

// ---- Conversions ----

impl<T: Scalar> From<Angle<Degree, T>> for Angle<Radian, T> {
    #[inline]
    fn from(angle: Angle<Degree, T>) -> Self {
        Self::new(deg_to_rad(angle.value))
    }
}

impl<T: Scalar> From<Angle<Radian, T>> for Angle<Degree, T> {
    #[inline]
    fn from(angle: Angle<Radian, T>) -> Self {
        Self::new(rad_to_deg(angle.value))
    }
}

/// Conversions that change precision. The value is recast first, then
/// rescaled in the target precision when the unit changes too.
macro_rules! impl_precision_conversion {
    ($($from_unit:ty, $from:ty => $to_unit:ty, $to:ty, $rescale:ident;)*) => {
        $(
            impl From<Angle<$from_unit, $from>> for Angle<$to_unit, $to> {
                #[inline]
                fn from(angle: Angle<$from_unit, $from>) -> Self {
                    Self::new($rescale(angle.value.cast::<$to>()))
                }
            }
        )*
    };
}

impl_precision_conversion! {
    Degree, f32 => Degree, f64, same_unit;
    Degree, f64 => Degree, f32, same_unit;
    Radian, f32 => Radian, f64, same_unit;
    Radian, f64 => Radian, f32, same_unit;
    Degree, f32 => Radian, f64, deg_to_rad;
    Degree, f64 => Radian, f32, deg_to_rad;
    Radian, f32 => Degree, f64, rad_to_deg;
    Radian, f64 => Degree, f32, rad_to_deg;
}

impl<U: Unit> From<Angle<U, f32>> for f32 {
    #[inline]
    fn from(angle: Angle<U, f32>) -> Self {
        angle.value
    }
}

impl<U: Unit> From<Angle<U, f64>> for f64 {
    #[inline]
    fn from(angle: Angle<U, f64>) -> Self {
        angle.value
    }
}

// ---- Value semantics ----

impl<U: Unit, T: Scalar> Clone for Angle<U, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit, T: Scalar> Copy for Angle<U, T> {}

impl<U: Unit, T: Scalar> Default for Angle<U, T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: Unit, T: Scalar> PartialEq for Angle<U, T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U: Unit, T: Scalar> PartialOrd for Angle<U, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

// SAFETY: `Angle` is `repr(transparent)` over a `Pod` scalar; the only other
// field is a zero-sized `PhantomData`.
unsafe impl<U: Unit, T: Scalar> Zeroable for Angle<U, T> {}
unsafe impl<U: Unit, T: Scalar> Pod for Angle<U, T> {}

// ---- Arithmetic ----

/// The right operand may be any angle convertible into the left operand's
/// type; it is converted before the operation.
impl<U: Unit, T: Scalar, R: Into<Angle<U, T>>> Add<R> for Angle<U, T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: R) -> Self {
        let rhs: Self = rhs.into();
        Self::new(self.value + rhs.value)
    }
}

impl<U: Unit, T: Scalar, R: Into<Angle<U, T>>> Sub<R> for Angle<U, T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: R) -> Self {
        let rhs: Self = rhs.into();
        Self::new(self.value - rhs.value)
    }
}

impl<U: Unit, T: Scalar> Neg for Angle<U, T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U: Unit, T: Scalar> Mul<T> for Angle<U, T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U: Unit, T: Scalar> Div<T> for Angle<U, T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs)
    }
}

/// Ratio of two angles of the same type.
impl<U: Unit, T: Scalar> Div for Angle<U, T> {
    type Output = T;

    #[inline]
    fn div(self, rhs: Self) -> T {
        self.value / rhs.value
    }
}

impl<U: Unit> Mul<Angle<U, f32>> for f32 {
    type Output = Angle<U, f32>;

    #[inline]
    fn mul(self, rhs: Angle<U, f32>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Mul<Angle<U, f64>> for f64 {
    type Output = Angle<U, f64>;

    #[inline]
    fn mul(self, rhs: Angle<U, f64>) -> Self::Output {
        rhs * self
    }
}

// ---- Text ----

impl<U: Unit, T: Scalar> fmt::Debug for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", U::TAG, self.value)
    }
}

impl<U: Unit, T: Scalar> fmt::Display for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", U::TAG, self.value)
    }
}

/// Error returned when text cannot be parsed as an angle value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid angle value '{input}': {source}")]
pub struct ParseAngleError {
    input: String,
    #[source]
    source: ParseFloatError,
}

impl ParseAngleError {
    /// The text that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parses the bare scalar; the unit comes from the requested type.
impl<U: Unit, T: Scalar> FromStr for Angle<U, T> {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed.parse::<T>().map(Self::new).map_err(|source| ParseAngleError {
            input: trimmed.to_owned(),
            source,
        })
    }
}

/// Stored as the bare scalar with no unit marker.
impl<U: Unit, T: Scalar> ConfigValue for Angle<U, T> {
    type Err = ParseAngleError;

    fn to_config_string(&self) -> String {
        self.value.to_string()
    }

    fn from_config_str(value: &str) -> Result<Self, Self::Err> {
        value.parse()
    }
}

impl<U: Unit, T: Scalar> Serialize for Angle<U, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, U: Unit, T: Scalar> Deserialize<'de> for Angle<U, T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use meridian_core::Configuration;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn construct_zero() {
        assert_eq!(Deg::<f32>::default().value(), 0.0);
        assert_eq!(Deg::<f32>::zero().value(), 0.0);
        assert_eq!(Deg::<f64>::default().value(), 0.0);
        assert_eq!(Deg::<f64>::zero().value(), 0.0);
        assert_eq!(Rad::<f32>::default().value(), 0.0);
        assert_eq!(Rad::<f32>::zero().value(), 0.0);
        assert_eq!(Rad::<f64>::default().value(), 0.0);
        assert_eq!(Rad::<f64>::zero().value(), 0.0);
        assert_eq!(<Deg<f64> as Zeroable>::zeroed().value(), 0.0);
        assert_eq!(<Rad<f32> as Zeroable>::zeroed().value(), 0.0);
    }

    #[test]
    fn construct_value_and_copy() {
        let b = Deg::new(25.0f32);
        assert_eq!(f32::from(b), 25.0);
        let n = Rad::new(3.14f64);
        assert_eq!(f64::from(n), 3.14);

        let c = b;
        assert_eq!(c, b);
        let o = n;
        assert_eq!(o, n);
    }

    #[test]
    fn construct_across_precision() {
        let n = Rad::new(3.14f64);
        let p: Rad<f32> = n.into();
        assert_eq!(p.value(), 3.14f32);

        let b = Deg::new(25.0f32);
        let d: Deg<f64> = b.into();
        assert_eq!(d.value(), 25.0);
        assert_eq!(b.cast::<f64>(), d);
    }

    #[test]
    fn construct_uninit() {
        let mut slot = Deg::<f32>::uninit();
        slot.write(Deg::new(25.0));
        // SAFETY: written above.
        let a = unsafe { slot.assume_init() };
        assert_eq!(a.value(), 25.0);
    }

    #[test]
    fn const_construction() {
        const RIGHT: Deg<f32> = Deg::new(90.0);
        assert_eq!(RIGHT.value(), 90.0);
    }

    #[test]
    fn conversion_fixture() {
        let a: Deg<f32> = Rad::new(1.57079633f32).into();
        assert_relative_eq!(a.value(), 90.0, epsilon = 1e-4);

        let b: Rad<f32> = Deg::new(90.0f32).into();
        assert_relative_eq!(b.value(), 1.57079633, epsilon = 1e-6);

        assert_relative_eq!(Deg::new(180.0f64).to_rad().value(), PI, epsilon = 1e-12);
        assert_relative_eq!(Rad::new(PI).to_deg().value(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn conversion_across_unit_and_precision() {
        let r: Rad<f64> = Deg::new(90.0f32).into();
        assert_relative_eq!(r.value(), FRAC_PI_2, epsilon = 1e-7);

        let d: Deg<f32> = Rad::new(FRAC_PI_2).into();
        assert_relative_eq!(d.value(), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn subtraction_closure() {
        let d = Deg::new(56.0f32) - Deg::new(34.0f32);
        assert_eq!(d, Deg::new(22.0));

        let r = Rad::new(1.5708f32) - Rad::new(3.1416f32);
        assert_relative_eq!(r.value(), -1.5708, epsilon = 1e-6);
    }

    #[test]
    fn arithmetic() {
        let a = Deg::new(30.0f64);
        assert_eq!(a + Deg::new(15.0f64), Deg::new(45.0));
        assert_eq!(-a, Deg::new(-30.0));
        assert_eq!(a * 3.0, Deg::new(90.0));
        assert_eq!(3.0 * a, Deg::new(90.0));
        assert_eq!(a / 2.0, Deg::new(15.0));
        assert_eq!(Deg::new(90.0f64) / a, 3.0);
        assert_eq!(Deg::new(-5.0f32).abs(), Deg::new(5.0));
    }

    #[test]
    fn mixed_unit_arithmetic_converts_right_operand() {
        let sum = Deg::new(90.0f64) + Rad::new(FRAC_PI_2);
        assert_relative_eq!(sum.value(), 180.0, epsilon = 1e-9);

        let diff = Rad::new(PI) - Deg::new(90.0f64);
        assert_relative_eq!(diff.value(), FRAC_PI_2, epsilon = 1e-12);

        let explicit = Deg::new(90.0f64) + Deg::<f64>::from(Rad::new(FRAC_PI_2));
        assert_eq!(sum, explicit);
    }

    #[test]
    fn comparison() {
        assert!(Deg::new(10.0f32) < Deg::new(20.0));
        assert!(Rad::new(2.0f64) >= Rad::new(2.0));
        assert_ne!(Deg::new(1.0f32), Deg::new(2.0));
        assert!(Deg::new(f32::NAN) != Deg::new(f32::NAN));
    }

    #[test]
    fn turns() {
        assert_eq!(Deg::<f32>::full_turn().value(), 360.0);
        assert_eq!(Deg::<f64>::half_turn().value(), 180.0);
        assert_eq!(Deg::<f64>::quarter_turn().value(), 90.0);
        assert_eq!(Rad::<f64>::full_turn().value(), TAU);
        assert_eq!(Rad::<f64>::half_turn().value(), PI);
    }

    #[test]
    fn trigonometry() {
        let right = Rad::new(FRAC_PI_2);
        assert_relative_eq!(right.sin(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(right.cos(), 0.0, epsilon = 1e-12);
        let (s, c) = Rad::new(0.0f32).sin_cos();
        assert_eq!((s, c), (0.0, 1.0));

        assert_relative_eq!(Rad::<f64>::asin(1.0).value(), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(Rad::<f64>::atan2(1.0, 0.0).to_deg().value(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn debug_deg() {
        assert_eq!(format!("{:?}", Deg::new(90.0f32)), "Deg(90)");
        assert_eq!(format!("{:?}", Deg::new(56.0f32) - Deg::new(34.0f32)), "Deg(22)");
    }

    #[test]
    fn debug_rad() {
        assert_eq!(format!("{:?}", Rad::new(1.5708f32)), "Rad(1.5708)");
        assert_eq!(format!("{:?}", Rad::new(1.5708f32) - Rad::new(3.1416f32)), "Rad(-1.5708)");
        assert_eq!(Rad::new(0.5f64).to_string(), "Rad(0.5)");
    }

    #[test]
    fn configuration_deg() {
        let mut config = Configuration::new();
        let angle = Deg::new(25.3f32);

        config.set_value("angle", &angle);
        assert_eq!(config.value("angle"), Some("25.3"));
        assert_eq!(config.value_as::<Deg<f32>>("angle").unwrap(), angle);
    }

    #[test]
    fn configuration_rad() {
        let mut config = Configuration::new();
        let angle = Rad::new(3.14159f32);

        config.set_value("angle", &angle);
        assert_eq!(config.value("angle"), Some("3.14159"));
        assert_eq!(config.value_as::<Rad<f32>>("angle").unwrap(), angle);
    }

    #[test]
    fn stored_text_takes_unit_from_reader() {
        let mut config = Configuration::new();
        config.set_value("angle", &Deg::new(180.0f64));
        let read: Rad<f64> = config.value_as("angle").unwrap();
        assert_eq!(read.value(), 180.0);
    }

    #[test]
    fn parse_failure() {
        let err = "north".parse::<Deg<f32>>().unwrap_err();
        assert_eq!(err.input(), "north");
        assert_eq!(" 12.5 ".parse::<Deg<f32>>().unwrap(), Deg::new(12.5));
    }

    #[test]
    fn serde_as_bare_scalar() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Camera {
            fov: Deg<f32>,
            roll: Rad<f64>,
        }

        let camera = Camera {
            fov: Deg::new(60.0),
            roll: Rad::new(0.25),
        };
        let text = toml::to_string(&camera).unwrap();
        assert!(text.contains("fov = 60.0"), "{}", text);
        assert_eq!(toml::from_str::<Camera>(&text).unwrap(), camera);
    }

    #[test]
    fn bulk_cast_to_scalars() {
        let angles = [Deg::new(1.0f32), Deg::new(2.0), Deg::new(3.0)];
        let raw: &[f32] = bytemuck::cast_slice(&angles);
        assert_eq!(raw, &[1.0, 2.0, 3.0]);

        let back: &[Deg<f32>] = bytemuck::cast_slice(raw);
        assert_eq!(back, &angles);
    }

    proptest! {
        #[test]
        fn prop_round_trip_f64(v in -1e6..1e6f64) {
            let back = Rad::<f64>::from(Deg::new(v)).to_deg();
            prop_assert!((back.value() - v).abs() <= 1e-10 * v.abs().max(1.0));
        }

        #[test]
        fn prop_round_trip_f32(v in -1e4..1e4f32) {
            let back = Rad::<f32>::from(Deg::new(v)).to_deg();
            prop_assert!((back.value() - v).abs() <= 1e-4 * v.abs().max(1.0));
        }

        #[test]
        fn prop_text_round_trip_f64(v in proptest::num::f64::NORMAL) {
            let angle = Rad::new(v);
            let text = angle.to_config_string();
            prop_assert_eq!(Rad::<f64>::from_config_str(&text).unwrap(), angle);
        }

        #[test]
        fn prop_text_round_trip_f32(v in proptest::num::f32::NORMAL) {
            let angle = Deg::new(v);
            let text = angle.to_config_string();
            prop_assert_eq!(Deg::<f32>::from_config_str(&text).unwrap(), angle);
        }
    }
}
