use core::ops::{Index, IndexMut};

use crate::{ChangeBaseT, Element, Larger, LargerT, Numeric, Scalar};

// -----------------------------------------------------------------------------
// Vector

/// A fixed-size vector of `D` values of type `T`.
///
/// `T` is normally a [`Scalar`], in which case the components are named
/// `x, y, z, w` (aliased `r, g, b, a`). When `T` is itself a vector the value
/// is a matrix, see [`Mat`](crate::Mat).
///
/// The storage is a plain `[T; D]`, so a vector is exactly `D` contiguous
/// values without padding, and nested vectors are contiguous scalars.
///
/// # Examples
///
/// ```
/// use tc_math::{IVec3, Vector, vec3};
///
/// let a = vec3(1, 2, 3);
/// let b = IVec3::splat(4);
///
/// assert_eq!(a + b, vec3(5, 6, 7));
/// assert_eq!(a[2], 3);
/// assert_eq!(a.sum(), 6);
/// assert_eq!(IVec3::default(), vec3(0, 0, 0));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct Vector<T, const D: usize>(pub(crate) [T; D]);

impl<T: Default, const D: usize> Default for Vector<T, D> {
    #[inline]
    fn default() -> Self {
        Self(core::array::from_fn(|_| T::default()))
    }
}

impl<T, const D: usize> Vector<T, D> {
    /// Number of components.
    pub const SIZE: usize = D;

    /// Creates a vector from its components.
    #[inline(always)]
    pub const fn new(components: [T; D]) -> Self {
        Self(components)
    }

    /// Creates a vector by calling `func` for every index.
    #[inline]
    pub fn from_fn(func: impl FnMut(usize) -> T) -> Self {
        Self(core::array::from_fn(func))
    }

    /// Returns the components as an array.
    #[inline(always)]
    pub fn into_array(self) -> [T; D] {
        self.0
    }

    /// Iterates over the components (the columns, for matrices).
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Mutable version of [`Vector::iter`].
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Applies `func` to every component.
    #[inline]
    pub fn map<U>(self, func: impl FnMut(T) -> U) -> Vector<U, D> {
        Vector(self.0.map(func))
    }
}

impl<T: Copy, const D: usize> Vector<T, D> {
    /// A vector with every component set to `value`.
    #[inline(always)]
    pub const fn splat(value: T) -> Self {
        Self([value; D])
    }

    /// Combines two vectors component by component.
    #[inline]
    pub fn zip_map<U: Copy, R>(self, other: Vector<U, D>, mut func: impl FnMut(T, U) -> R) -> Vector<R, D> {
        Vector(core::array::from_fn(|i| func(self.0[i], other.0[i])))
    }
}

/// Creates a 2-component vector.
#[inline(always)]
pub const fn vec2<T>(x: T, y: T) -> Vector<T, 2> {
    Vector([x, y])
}

/// Creates a 3-component vector.
#[inline(always)]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vector<T, 3> {
    Vector([x, y, z])
}

/// Creates a 4-component vector.
#[inline(always)]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector([x, y, z, w])
}

// -----------------------------------------------------------------------------
// Conversion

impl<T, const D: usize> From<[T; D]> for Vector<T, D> {
    #[inline(always)]
    fn from(value: [T; D]) -> Self {
        Self(value)
    }
}

macro_rules! impl_from_scalar {
    ($($scalar:ident)*) => {$(
        /// Every component set to the scalar.
        impl<const D: usize> From<$scalar> for Vector<$scalar, D> {
            #[inline(always)]
            fn from(value: $scalar) -> Self {
                Self([value; D])
            }
        }
    )*};
}

impl_from_scalar!(bool i8 u8 i16 u16 i32 u32 i64 u64 f32 f64);

impl<T, const D: usize> From<Vector<T, D>> for [T; D] {
    #[inline(always)]
    fn from(value: Vector<T, D>) -> Self {
        value.0
    }
}

impl<T: Element, const D: usize> Vector<T, D> {
    /// Converts every base scalar to `U`, keeping the shape.
    ///
    /// ```
    /// use tc_math::{vec2, FMat2, Mat2};
    ///
    /// assert_eq!(vec2(1.9_f32, -1.9).to::<i32>(), vec2(1, -1));
    /// assert_eq!(FMat2::splat(vec2(0.5, 2.0)).to::<bool>(), Mat2::splat(vec2(true, true)));
    /// ```
    #[inline]
    pub fn to<U: Scalar>(self) -> ChangeBaseT<Self, U> {
        self.map_base(&mut |value| value.cast::<U>())
    }
}

// -----------------------------------------------------------------------------
// Indexing

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T, const D: usize> IntoIterator for Vector<T, D> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a Vector<T, D> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// -----------------------------------------------------------------------------
// Element

impl<T: Element, const D: usize> Element for Vector<T, D> {
    type Base = T::Base;
    type Rebase<U: Scalar> = Vector<T::Rebase<U>, D>;

    const COUNT: usize = T::COUNT * D;

    #[inline]
    fn splat_base(value: Self::Base) -> Self {
        Self([T::splat_base(value); D])
    }

    #[inline]
    fn map_base<U: Scalar>(self, func: &mut impl FnMut(Self::Base) -> U) -> Self::Rebase<U> {
        Vector(self.0.map(|value| value.map_base(&mut *func)))
    }

    #[inline]
    fn zip_base<U: Scalar>(
        self,
        other: Self,
        func: &mut impl FnMut(Self::Base, Self::Base) -> U,
    ) -> Self::Rebase<U> {
        Vector(core::array::from_fn(|i| self.0[i].zip_base(other.0[i], &mut *func)))
    }

    #[expect(unsafe_code, reason = "reinterpret nested arrays as a flat slice")]
    #[inline]
    fn as_array(&self) -> &[Self::Base] {
        // SAFETY: `Vector` is `repr(transparent)` over `[T; D]`, and every
        // `Element` is either a scalar or such an array, so `self` is exactly
        // `COUNT` contiguous, initialized values of `T::Base`.
        unsafe { core::slice::from_raw_parts(self.0.as_ptr().cast::<T::Base>(), Self::COUNT) }
    }

    #[expect(unsafe_code, reason = "reinterpret nested arrays as a flat slice")]
    #[inline]
    fn as_array_mut(&mut self) -> &mut [Self::Base] {
        // SAFETY: See `as_array`, the exclusive borrow of `self` covers the slice.
        unsafe {
            core::slice::from_raw_parts_mut(self.0.as_mut_ptr().cast::<T::Base>(), Self::COUNT)
        }
    }
}

impl<A, B, const D: usize> Larger<Vector<B, D>> for Vector<A, D>
where
    A: Larger<B>,
    B: Element,
{
    type Output = Vector<A::Output, D>;

    #[inline]
    fn widen(self) -> Self::Output {
        Vector(self.0.map(A::widen))
    }

    #[inline]
    fn widen_rhs(rhs: Vector<B, D>) -> Self::Output {
        Vector(rhs.0.map(A::widen_rhs))
    }

    #[inline]
    fn narrow(value: Self::Output) -> Self {
        Vector(value.0.map(A::narrow))
    }
}

// -----------------------------------------------------------------------------
// Boolean reduction

/// Conversion of a value to a single `bool`, the way `if (value)` would.
///
/// Scalars are truthy when non-zero, vectors when any component is.
/// Boolean vectors deliberately do not implement this: pick one of
/// [`Vector::any`], [`Vector::all`] or [`Vector::none`] instead.
///
/// ```compile_fail
/// use tc_math::{Truthy, vec2};
///
/// vec2(true, false).truthy();
/// ```
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline(always)]
    fn truthy(&self) -> bool {
        *self
    }
}

impl<T: Numeric> Truthy for T {
    #[inline(always)]
    fn truthy(&self) -> bool {
        *self != T::ZERO
    }
}

impl<T: Element, const D: usize> Truthy for Vector<T, D>
where
    T::Base: Numeric,
{
    #[inline]
    fn truthy(&self) -> bool {
        self.any()
    }
}

impl<T: Element, const D: usize> Vector<T, D> {
    /// Whether any base scalar is non-zero (or `true`).
    #[inline]
    pub fn any(&self) -> bool {
        self.as_array().iter().any(|v| *v != <T::Base as Scalar>::ZERO)
    }

    /// Whether every base scalar is non-zero (or `true`).
    #[inline]
    pub fn all(&self) -> bool {
        self.as_array().iter().all(|v| *v != <T::Base as Scalar>::ZERO)
    }

    /// Whether every base scalar is zero (or `false`).
    #[inline]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Logical AND of the truth values of both operands.
    #[inline]
    pub fn and(&self, rhs: &impl Truthy) -> bool
    where
        Self: Truthy,
    {
        self.truthy() && rhs.truthy()
    }

    /// Logical OR of the truth values of both operands.
    #[inline]
    pub fn or(&self, rhs: &impl Truthy) -> bool
    where
        Self: Truthy,
    {
        self.truthy() || rhs.truthy()
    }

    /// The smallest base scalar, over every component (and every column).
    pub fn min(&self) -> T::Base {
        let values = self.as_array();
        values[1..]
            .iter()
            .fold(values[0], |acc, v| if *v < acc { *v } else { acc })
    }

    /// The largest base scalar, over every component (and every column).
    pub fn max(&self) -> T::Base {
        let values = self.as_array();
        values[1..]
            .iter()
            .fold(values[0], |acc, v| if *v > acc { *v } else { acc })
    }
}

// -----------------------------------------------------------------------------
// Arithmetic reduction

impl<T: Numeric, const D: usize> Vector<T, D> {
    /// Sum of the components.
    #[inline]
    pub fn sum(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, v| acc + *v)
    }

    /// Product of the components.
    #[inline]
    pub fn prod(&self) -> T {
        self.0.iter().fold(T::ONE, |acc, v| acc * *v)
    }

    /// Squared euclidean length.
    #[inline]
    pub fn len_sqr(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, v| acc + *v * *v)
    }

    /// Euclidean length, in floating point.
    #[inline]
    pub fn len(&self) -> T::Float {
        crate::Real::sqrt(self.len_sqr().cast::<T::Float>())
    }

    /// The unit vector in the same direction.
    ///
    /// A zero-length vector normalizes to the zero vector instead of NaNs.
    pub fn norm(&self) -> Vector<T::Float, D> {
        let len = self.len();
        if len == <T::Float as Scalar>::ZERO {
            return Vector::splat(len);
        }
        Vector(self.0.map(|v| v.cast::<T::Float>() / len))
    }

    /// Dot product.
    pub fn dot<B>(&self, rhs: Vector<B, D>) -> LargerT<T, B>
    where
        B: Scalar,
        T: Larger<B>,
        LargerT<T, B>: Numeric,
    {
        (0..D).fold(<LargerT<T, B> as Scalar>::ZERO, |acc, i| {
            acc + T::widen(self.0[i]) * T::widen_rhs(rhs.0[i])
        })
    }
}

impl<T: Numeric> Vector<T, 2> {
    /// `x / y` in floating point.
    #[inline]
    pub fn ratio(&self) -> T::Float {
        self.0[0].cast::<T::Float>() / self.0[1].cast::<T::Float>()
    }

    /// The z component of the 3D cross product of `(x, y, 0)` and `(rhs.x, rhs.y, 0)`.
    #[inline]
    pub fn cross<B>(&self, rhs: Vector<B, 2>) -> LargerT<T, B>
    where
        B: Scalar,
        T: Larger<B>,
        LargerT<T, B>: Numeric,
    {
        let a = <Self as Larger<Vector<B, 2>>>::widen(*self);
        let b = <Self as Larger<Vector<B, 2>>>::widen_rhs(rhs);
        a.0[0] * b.0[1] - a.0[1] * b.0[0]
    }
}

impl<T: Numeric> Vector<T, 3> {
    /// Cross product.
    pub fn cross<B>(&self, rhs: Vector<B, 3>) -> Vector<LargerT<T, B>, 3>
    where
        B: Scalar,
        T: Larger<B>,
        LargerT<T, B>: Numeric,
    {
        let a = <Self as Larger<Vector<B, 3>>>::widen(*self);
        let b = <Self as Larger<Vector<B, 3>>>::widen_rhs(rhs);
        Vector([
            a.0[1] * b.0[2] - a.0[2] * b.0[1],
            a.0[2] * b.0[0] - a.0[0] * b.0[2],
            a.0[0] * b.0[1] - a.0[1] * b.0[0],
        ])
    }
}

// -----------------------------------------------------------------------------
// Increment and decrement

impl<T: Element, const D: usize> Vector<T, D>
where
    T::Base: Numeric,
{
    /// Adds one to every base scalar, returning the updated value (prefix `++`).
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.as_array_mut().iter_mut().for_each(|v| *v = *v + <T::Base as Scalar>::ONE);
        self
    }

    /// Subtracts one from every base scalar, returning the updated value (prefix `--`).
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.as_array_mut().iter_mut().for_each(|v| *v = *v - <T::Base as Scalar>::ONE);
        self
    }

    /// Adds one to every base scalar, returning the previous value (postfix `++`).
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let old = *self;
        self.increment();
        old
    }

    /// Subtracts one from every base scalar, returning the previous value (postfix `--`).
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let old = *self;
        self.decrement();
        old
    }
}

// -----------------------------------------------------------------------------
// Componentwise comparison

macro_rules! impl_compare {
    ($($(#[$meta:meta])* $name:ident => $op:tt;)*) => {
        impl<T: Element, const D: usize> Vector<T, D> {$(
            $(#[$meta])*
            #[inline]
            pub fn $name<B: Element>(
                self,
                rhs: impl Into<Vector<B, D>>,
            ) -> ChangeBaseT<LargerT<Self, Vector<B, D>>, bool>
            where
                Self: Larger<Vector<B, D>>,
            {
                let lhs = <Self as Larger<Vector<B, D>>>::widen(self);
                let rhs = <Self as Larger<Vector<B, D>>>::widen_rhs(rhs.into());
                lhs.zip_base(rhs, &mut |a, b| a $op b)
            }
        )*}
    };
}

impl_compare! {
    /// Componentwise `<`.
    ///
    /// The right side is a vector of the same dimension or a scalar, which
    /// is compared with every component.
    ///
    /// ```
    /// use tc_math::vec3;
    ///
    /// assert_eq!(vec3(1, 5, 3).cmplt(vec3(2.0_f32, 2.0, 3.0)), vec3(true, false, false));
    /// assert_eq!(vec3(1, 5, 3).cmplt(3), vec3(true, false, false));
    /// ```
    cmplt => <;
    /// Componentwise `<=`.
    cmple => <=;
    /// Componentwise `>`.
    cmpgt => >;
    /// Componentwise `>=`.
    cmpge => >=;
    /// Componentwise `==`, unlike `==` which reduces to a single `bool`.
    cmpeq => ==;
    /// Componentwise `!=`.
    cmpne => !=;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{BVec3, Element, FVec2, FVec3, IVec2, IVec3, Mat2, Truthy, Vector, vec2, vec3, vec4};
    use approx::assert_relative_eq;

    #[test]
    fn construction() {
        assert_eq!(IVec3::SIZE, 3);
        assert_eq!(IVec3::default(), vec3(0, 0, 0));
        assert_eq!(IVec3::splat(7), vec3(7, 7, 7));
        assert_eq!(Vector::from([1, 2]), vec2(1, 2));
        assert_eq!(<[i32; 2]>::from(vec2(1, 2)), [1, 2]);
        assert_eq!(Vector::<u8, 4>::from_fn(|i| i as u8), vec4(0, 1, 2, 3));
        assert_eq!(vec2(2.5_f32, -0.5).to::<i32>(), vec2(2, 0));
    }

    #[test]
    fn indexing() {
        let mut v = vec3(1, 2, 3);
        v[1] = 20;
        assert_eq!(v[0] + v[1] + v[2], 24);

        let m = Mat2::new([vec2(1, 2), vec2(3, 4)]);
        assert_eq!(m[1][0], 3);
        assert_eq!(m.as_array(), &[1, 2, 3, 4]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = vec2(1, 2);
        let _ = v[2];
    }

    #[test]
    fn boolean_reduction() {
        let v: BVec3 = vec3(true, false, true);
        assert!(v.any());
        assert!(!v.all());
        assert!(!v.none());
        assert!(BVec3::splat(false).none());

        assert!(vec2(0, 3).truthy());
        assert!(!vec2(0.0_f32, 0.0).truthy());
        assert!(vec2(1, 0).and(&vec2(0, 1)));
        assert!(!vec2(1, 0).and(&0));
        assert!(vec2(0, 0).or(&2.5_f32));

        let m = Mat2::new([vec2(0, 0), vec2(0, 1)]);
        assert!(m.any());
        assert!(!m.all());
    }

    #[test]
    fn reductions() {
        let v = vec4(2, -3, 4, 1);
        assert_eq!(v.sum(), 4);
        assert_eq!(v.prod(), -24);
        assert_eq!(v.min(), -3);
        assert_eq!(v.max(), 4);
        assert_eq!(vec2(1, 4).ratio(), 0.25);
        assert_eq!(vec2(3.0_f32, 2.0).ratio(), 1.5_f32);

        let m = Mat2::new([vec2(5.0, -1.0), vec2(9.5, 0.0)]);
        assert_eq!(m.min(), -1.0);
        assert_eq!(m.max(), 9.5);
    }

    #[test]
    fn geometry() {
        let v: FVec2 = vec2(3.0, 4.0);
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.len_sqr(), 25.0);
        assert_eq!(vec2(3, 4).len(), 5.0_f64);

        assert_relative_eq!(vec3(1.0_f32, 2.0, -2.0).norm().len(), 1.0);
        assert_relative_eq!(vec2(0.0_f32, 0.5).norm(), vec2(0.0, 1.0));
        assert_eq!(FVec3::splat(0.0).norm(), FVec3::splat(0.0));
        assert_eq!(IVec2::splat(0).norm(), vec2(0.0_f64, 0.0));

        assert_eq!(vec3(1, 2, 3).dot(vec3(4, 5, 6)), 32);
        assert_eq!(vec2(1, 2).dot(vec2(0.5_f32, 0.5)), 1.5_f32);
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
        assert_eq!(vec2(1, 0).cross(vec2(0, 1)), 1);
        assert_eq!(vec2(2, 3).cross(vec2(4, 5)), -2);
    }

    #[test]
    fn increment_decrement() {
        let mut v: IVec2 = vec2(1, 2);
        assert_eq!(*v.increment(), vec2(2, 3));
        assert_eq!(v.post_increment(), vec2(2, 3));
        assert_eq!(v, vec2(3, 4));
        assert_eq!(v.post_decrement(), vec2(3, 4));
        assert_eq!(*v.decrement(), vec2(1, 2));
    }

    #[test]
    fn comparisons() {
        let a = vec3(1, 2, 3);
        let b = vec3(3, 2, 1);
        assert_eq!(a.cmplt(b), vec3(true, false, false));
        assert_eq!(a.cmple(b), vec3(true, true, false));
        assert_eq!(a.cmpgt(b), vec3(false, false, true));
        assert_eq!(a.cmpge(b), vec3(false, true, true));
        assert_eq!(a.cmpeq(b), vec3(false, true, false));
        assert_eq!(a.cmpne(b), vec3(true, false, true));

        assert!(a == vec3(1, 2, 3));
        assert!(a != b);
        assert!(a != vec3(1, 2, 4));

        let m = Mat2::new([vec2(1, 2), vec2(3, 4)]);
        assert_eq!(m.cmpgt(Mat2::splat(vec2(2, 2))), Mat2::new([vec2(false, false), vec2(true, true)]));
    }

    #[test]
    fn scalar_comparisons() {
        let v: IVec2 = vec2(0, 2);
        assert_eq!(v.cmplt(1), vec2(true, false));
        assert_eq!(v.cmpge(0.5_f32), vec2(false, true));
        assert_eq!(vec3(1_u32, 5, 3).cmpeq(3_u32), vec3(false, false, true));
        assert_eq!(IVec2::from(7), vec2(7, 7));
    }
}
