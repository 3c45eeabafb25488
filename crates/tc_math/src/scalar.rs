use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;

use crate::Element;

// -----------------------------------------------------------------------------
// Scalar

/// An arithmetic leaf type that can be stored in a [`Vector`](crate::Vector).
///
/// The set of scalars is closed: `bool`, `i8`-`i64`, `u8`-`u64`, `f32` and `f64`.
///
/// Conversions between scalars go through [`Scalar::cast`], which behaves like
/// an `as` conversion, except that `bool` is produced by comparing with zero.
///
/// # Examples
///
/// ```
/// use tc_math::Scalar;
///
/// assert_eq!(3.7_f32.cast::<i32>(), 3);
/// assert_eq!((-1_i32).cast::<u8>(), 255);
/// assert_eq!(2_u16.cast::<bool>(), true);
/// assert_eq!(true.cast::<f64>(), 1.0);
/// ```
pub trait Scalar:
    Element<Base = Self> + PartialOrd + Debug + Display + FromStr + Send + Sync + 'static
{
    /// The additive identity, `false` for `bool`.
    const ZERO: Self;
    /// The multiplicative identity, `true` for `bool`.
    const ONE: Self;
    /// Whether this is `f32` or `f64`.
    const IS_FLOAT: bool;
    /// Short human-readable name, e.g. `int` or `float`.
    const NAME: &'static str;

    /// The floating-point type used for lengths and ratios.
    ///
    /// Floats map to themselves, every other scalar maps to `f64`.
    type Float: Real;

    #[doc(hidden)]
    fn to_i128(self) -> i128;
    #[doc(hidden)]
    fn to_f64(self) -> f64;
    #[doc(hidden)]
    fn from_i128(value: i128) -> Self;
    #[doc(hidden)]
    fn from_f64(value: f64) -> Self;

    /// Converts to another scalar type.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        if Self::IS_FLOAT {
            U::from_f64(self.to_f64())
        } else {
            U::from_i128(self.to_i128())
        }
    }
}

/// Scalars supporting the four arithmetic operations and remainder.
///
/// Every scalar except `bool`.
pub trait Numeric:
    Scalar
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
}

/// Numeric scalars with a negation.
pub trait Signed: Numeric + Neg<Output = Self> {
    /// Absolute value.
    fn abs(self) -> Self;
}

/// `f32` and `f64`.
pub trait Real: Signed {
    fn sqrt(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    /// Rounds half-way cases away from zero.
    fn round(self) -> Self;
    fn trunc(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

// -----------------------------------------------------------------------------
// Implementations

impl Scalar for bool {
    const ZERO: Self = false;
    const ONE: Self = true;
    const IS_FLOAT: bool = false;
    const NAME: &'static str = "bool";

    type Float = f64;

    #[inline]
    fn to_i128(self) -> i128 {
        self as i128
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as u8 as f64
    }

    #[inline]
    fn from_i128(value: i128) -> Self {
        value != 0
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value != 0.0
    }
}

macro_rules! impl_integer {
    ($($ty:ident => $name:literal, $($signed:ident)?;)*) => {$(
        impl Scalar for $ty {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const IS_FLOAT: bool = false;
            const NAME: &'static str = $name;

            type Float = f64;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $ty
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }

        impl Numeric for $ty {}

        $(
            impl $signed for $ty {
                #[inline]
                fn abs(self) -> Self {
                    <$ty>::wrapping_abs(self)
                }
            }
        )?
    )*};
}

impl_integer! {
    i8 => "byte", Signed;
    u8 => "ubyte", ;
    i16 => "short", Signed;
    u16 => "ushort", ;
    i32 => "int", Signed;
    u32 => "uint", ;
    i64 => "long", Signed;
    u64 => "ulong", ;
}

macro_rules! impl_float {
    ($($ty:ident => $name:literal;)*) => {$(
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const IS_FLOAT: bool = true;
            const NAME: &'static str = $name;

            type Float = $ty;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_i128(value: i128) -> Self {
                value as $ty
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }
        }

        impl Numeric for $ty {}

        impl Signed for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
        }

        impl Real for $ty {
            #[inline]
            fn sqrt(self) -> Self {
                <$ty>::sqrt(self)
            }

            #[inline]
            fn floor(self) -> Self {
                <$ty>::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$ty>::ceil(self)
            }

            #[inline]
            fn round(self) -> Self {
                <$ty>::round(self)
            }

            #[inline]
            fn trunc(self) -> Self {
                <$ty>::trunc(self)
            }

            #[inline]
            fn sin(self) -> Self {
                <$ty>::sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                <$ty>::cos(self)
            }
        }
    )*};
}

impl_float! {
    f32 => "float";
    f64 => "double";
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn cast_matches_as() {
        assert_eq!(300_i32.cast::<u8>(), 300_i32 as u8);
        assert_eq!((-2.9_f64).cast::<i16>(), -2);
        assert_eq!(u64::MAX.cast::<f32>(), u64::MAX as f32);
        assert_eq!(1e10_f32.cast::<i32>(), i32::MAX);
        assert_eq!(0.5_f32.cast::<f64>(), 0.5);
    }

    #[test]
    fn bool_cast() {
        assert!(0.25_f32.cast::<bool>());
        assert!(!0_i64.cast::<bool>());
        assert_eq!(true.cast::<i32>(), 1);
        assert_eq!(false.cast::<f32>(), 0.0);
    }

    #[test]
    fn names() {
        assert_eq!(<i32 as Scalar>::NAME, "int");
        assert_eq!(<u8 as Scalar>::NAME, "ubyte");
        assert_eq!(<f64 as Scalar>::NAME, "double");
        assert_eq!(<bool as Scalar>::NAME, "bool");
    }
}
