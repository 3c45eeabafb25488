//! Scalar helpers applied to every base scalar of a scalar, vector or matrix.
//!
//! ```
//! use tc_math::num::{clamp, div_ex, iround, mod_ex};
//! use tc_math::vec2;
//!
//! assert_eq!(clamp(vec2(-5, 5), vec2(0, 0), vec2(3, 3)), vec2(0, 3));
//! assert_eq!(div_ex(vec2(-7, 7), vec2(2, 2)), vec2(-4, 3));
//! assert_eq!(mod_ex(-7, 3), 2);
//! assert_eq!(iround(vec2(1.5_f32, -1.5)), vec2(2, -2));
//! ```

use crate::{ChangeBaseT, Element, Numeric, Real, Scalar, Signed};

#[inline]
fn zip_in_place<T: Element>(mut lhs: T, rhs: &T, mut func: impl FnMut(T::Base, T::Base) -> T::Base) -> T {
    for (a, b) in lhs.as_array_mut().iter_mut().zip(rhs.as_array()) {
        *a = func(*a, *b);
    }
    lhs
}

#[inline]
fn map_in_place<T: Element>(mut value: T, mut func: impl FnMut(T::Base) -> T::Base) -> T {
    for a in value.as_array_mut() {
        *a = func(*a);
    }
    value
}

// -----------------------------------------------------------------------------
// Ordering

/// The smaller of each pair of base scalars.
pub fn min<T: Element>(a: T, b: T) -> T {
    zip_in_place(a, &b, |a, b| if b < a { b } else { a })
}

/// The larger of each pair of base scalars.
pub fn max<T: Element>(a: T, b: T) -> T {
    zip_in_place(a, &b, |a, b| if b > a { b } else { a })
}

/// Limits every base scalar to `min..=max`.
pub fn clamp<T: Element>(value: T, min: T, max: T) -> T {
    clamp_max(clamp_min(value, min), max)
}

/// Limits every base scalar to be at least `min`.
pub fn clamp_min<T: Element>(value: T, min: T) -> T {
    self::max(value, min)
}

/// Limits every base scalar to be at most `max`.
pub fn clamp_max<T: Element>(value: T, max: T) -> T {
    self::min(value, max)
}

// -----------------------------------------------------------------------------
// Sign

pub fn abs<T: Element>(value: T) -> T
where
    T::Base: Signed,
{
    map_in_place(value, Signed::abs)
}

/// `-1`, `0` or `1` depending on the sign of each base scalar.
pub fn sign<T: Element>(value: T) -> T
where
    T::Base: Signed,
{
    let zero = <T::Base as Scalar>::ZERO;
    let one = <T::Base as Scalar>::ONE;
    map_in_place(value, |v| match () {
        _ if v > zero => one,
        _ if v < zero => -one,
        _ => zero,
    })
}

// -----------------------------------------------------------------------------
// Rounding

pub fn floor<T: Element>(value: T) -> T
where
    T::Base: Real,
{
    map_in_place(value, Real::floor)
}

pub fn ceil<T: Element>(value: T) -> T
where
    T::Base: Real,
{
    map_in_place(value, Real::ceil)
}

/// Rounds half-way cases away from zero.
pub fn round<T: Element>(value: T) -> T
where
    T::Base: Real,
{
    map_in_place(value, Real::round)
}

pub fn trunc<T: Element>(value: T) -> T
where
    T::Base: Real,
{
    map_in_place(value, Real::trunc)
}

/// [`round`], then converted to `i32`.
pub fn iround<T: Element>(value: T) -> ChangeBaseT<T, i32>
where
    T::Base: Real,
{
    value.map_base(&mut |v| Real::round(v).cast::<i32>())
}

/// [`floor`], then converted to `i32`.
pub fn ifloor<T: Element>(value: T) -> ChangeBaseT<T, i32>
where
    T::Base: Real,
{
    value.map_base(&mut |v| Real::floor(v).cast::<i32>())
}

/// [`ceil`], then converted to `i32`.
pub fn iceil<T: Element>(value: T) -> ChangeBaseT<T, i32>
where
    T::Base: Real,
{
    value.map_base(&mut |v| Real::ceil(v).cast::<i32>())
}

// -----------------------------------------------------------------------------
// Floored division

#[inline]
fn div_floor<T: Numeric>(a: T, b: T) -> T {
    if T::IS_FLOAT {
        return T::from_f64((a / b).to_f64().floor());
    }
    let q = a / b;
    if a % b != T::ZERO && ((a < T::ZERO) != (b < T::ZERO)) {
        q - T::ONE
    } else {
        q
    }
}

/// Division rounding towards negative infinity.
///
/// Unlike `/`, the results for negative numbers continue the pattern of
/// the positive ones, which is what tile and grid coordinates need.
pub fn div_ex<T: Element>(a: T, b: T) -> T
where
    T::Base: Numeric,
{
    zip_in_place(a, &b, div_floor)
}

/// The remainder matching [`div_ex`]: it has the sign of `b`.
pub fn mod_ex<T: Element>(a: T, b: T) -> T
where
    T::Base: Numeric,
{
    zip_in_place(a, &b, |a, b| a - div_floor(a, b) * b)
}

// -----------------------------------------------------------------------------
// Interpolation

/// Linear interpolation, `a` at `t = 0` and `b` at `t = 1`.
pub fn mix<T: Element>(a: T, b: T, t: T::Base) -> T
where
    T::Base: Real,
{
    zip_in_place(a, &b, |a, b| a + (b - a) * t)
}

// -----------------------------------------------------------------------------
// Tests
