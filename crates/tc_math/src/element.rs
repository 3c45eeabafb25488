use core::fmt::Debug;

use crate::Scalar;

// -----------------------------------------------------------------------------
// Element

/// Something a [`Vector`](crate::Vector) can hold: a scalar or another vector.
///
/// This is the bridge that lets matrices (vectors of column vectors) share
/// the vector implementation.
///
/// - [`Element::Base`] recovers the innermost scalar type,
///   e.g. `f32` for `Mat4<f32>`.
/// - [`Element::Rebase`] rebuilds the same shape over another scalar,
///   e.g. `Mat4<i32>` for `<Mat4<f32> as Element>::Rebase<i32>`.
pub trait Element: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    /// The innermost scalar type.
    type Base: Scalar;

    /// The same shape over the scalar `U`.
    type Rebase<U: Scalar>: Element<Base = U>;

    /// Number of base scalars in one value.
    const COUNT: usize;

    /// A value with every base scalar set to `value`.
    fn splat_base(value: Self::Base) -> Self;

    /// Applies `func` to every base scalar.
    fn map_base<U: Scalar>(self, func: &mut impl FnMut(Self::Base) -> U) -> Self::Rebase<U>;

    /// Applies `func` to every pair of base scalars at the same position.
    fn zip_base<U: Scalar>(
        self,
        other: Self,
        func: &mut impl FnMut(Self::Base, Self::Base) -> U,
    ) -> Self::Rebase<U>;

    /// The base scalars in storage order (column-major for matrices).
    fn as_array(&self) -> &[Self::Base];

    /// Mutable version of [`Element::as_array`].
    fn as_array_mut(&mut self) -> &mut [Self::Base];
}

/// The innermost scalar of `T`.
pub type BaseT<T> = <T as Element>::Base;

/// `T` with its innermost scalar replaced by `U`.
pub type ChangeBaseT<T, U> = <T as Element>::Rebase<U>;

macro_rules! impl_scalar_element {
    ($($ty:ident)*) => {$(
        impl Element for $ty {
            type Base = $ty;
            type Rebase<U: Scalar> = U;

            const COUNT: usize = 1;

            #[inline(always)]
            fn splat_base(value: Self::Base) -> Self {
                value
            }

            #[inline(always)]
            fn map_base<U: Scalar>(self, func: &mut impl FnMut(Self::Base) -> U) -> U {
                func(self)
            }

            #[inline(always)]
            fn zip_base<U: Scalar>(
                self,
                other: Self,
                func: &mut impl FnMut(Self::Base, Self::Base) -> U,
            ) -> U {
                func(self, other)
            }

            #[inline(always)]
            fn as_array(&self) -> &[Self::Base] {
                core::slice::from_ref(self)
            }

            #[inline(always)]
            fn as_array_mut(&mut self) -> &mut [Self::Base] {
                core::slice::from_mut(self)
            }
        }
    )*};
}

impl_scalar_element!(bool i8 u8 i16 u16 i32 u32 i64 u64 f32 f64);
