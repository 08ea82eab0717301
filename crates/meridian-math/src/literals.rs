//! Literal-style constructors
//!
//! `deg!`/`rad!` build double-precision angles and `degf!`/`radf!` build
//! single-precision ones. All four expand to a `const fn` call and work in
//! `const` items. They accept numeric literals only, so a runtime value is
//! never narrowed by an implicit `as` cast.
//!
//! ```compile_fail
//! use meridian_math::degf;
//! let wide = 0.1f64;
//! let _ = degf!(wide);
//! ```

/// Double-precision degrees: `deg!(25.0)` is a `Deg<f64>`.
#[macro_export]
macro_rules! deg {
    ($value:literal) => {
        $crate::Deg::<f64>::new($value as f64)
    };
}

/// Single-precision degrees: `degf!(25.0)` is a `Deg<f32>`.
#[macro_export]
macro_rules! degf {
    ($value:literal) => {
        $crate::Deg::<f32>::new($value as f32)
    };
}

/// Double-precision radians: `rad!(3.14)` is a `Rad<f64>`.
#[macro_export]
macro_rules! rad {
    ($value:literal) => {
        $crate::Rad::<f64>::new($value as f64)
    };
}

/// Single-precision radians: `radf!(3.14)` is a `Rad<f32>`.
#[macro_export]
macro_rules! radf {
    ($value:literal) => {
        $crate::Rad::<f32>::new($value as f32)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Deg, Rad};

    fn assert_type<T>(_: &T) {}

    #[test]
    fn literals_pick_unit_and_precision() {
        let a = deg!(25.0);
        assert_type::<Deg<f64>>(&a);
        assert_eq!(a.value(), 25.0);

        let b = degf!(25.0);
        assert_type::<Deg<f32>>(&b);
        assert_eq!(b.value(), 25.0f32);

        let m = rad!(3.14);
        assert_type::<Rad<f64>>(&m);
        assert_eq!(m.value(), 3.14);

        let n = radf!(3.14);
        assert_type::<Rad<f32>>(&n);
        assert_eq!(n.value(), 3.14f32);
    }

    #[test]
    fn literals_in_const_items() {
        const FOV: Deg<f32> = degf!(60.0);
        const HALF: Rad<f64> = rad!(1.5);
        assert_eq!(FOV.value(), 60.0);
        assert_eq!(HALF.value(), 1.5);
    }

    #[test]
    fn integer_literals_are_accepted() {
        assert_eq!(deg!(90), Deg::new(90.0));
        assert_eq!(radf!(2), Rad::new(2.0f32));
    }

    #[test]
    fn negative_literals_are_accepted() {
        assert_eq!(deg!(-90.0), Deg::new(-90.0));
        assert_eq!(radf!(-1.5), Rad::new(-1.5f32));
    }

    #[test]
    fn precisions_convert_but_differ() {
        let single: Deg<f64> = degf!(25.0).into();
        assert_eq!(single, deg!(25.0));
    }
}
