use crate::{Element, Scalar};

// -----------------------------------------------------------------------------
// Larger

/// The dominant type between `Self` and `Rhs`, used as the result type of
/// mixed binary operations.
///
/// For scalars the decision uses the weight `(is_float, size_of)`:
/// a float beats any integer, then the wider type wins. Two different types
/// of equal weight (e.g. `i32` and `u32`) have no common type, so the trait
/// is simply not implemented for that pair and mixed operations between
/// them do not compile.
///
/// For vectors and matrices of the same shape the resolution is applied to
/// the base scalars.
///
/// Use [`has_larger!`](crate::has_larger) to query whether a pair resolves.
///
/// # Examples
///
/// ```
/// use tc_math::{LargerT, IVec2, FVec2, vec2};
///
/// let a: IVec2 = vec2(1, 2);
/// let b: FVec2 = vec2(0.5, 0.5);
/// let c: LargerT<IVec2, FVec2> = a + b;
/// assert_eq!(c, vec2(1.5_f32, 2.5));
/// ```
pub trait Larger<Rhs: Element = Self>: Element {
    type Output: Element;

    /// Converts the left operand to the common type.
    fn widen(self) -> Self::Output;

    /// Converts the right operand to the common type.
    fn widen_rhs(rhs: Rhs) -> Self::Output;

    /// Converts a value of the common type back to `Self`.
    fn narrow(value: Self::Output) -> Self;
}

/// The common type of `A` and `B`, see [`Larger`].
pub type LargerT<A, B> = <A as Larger<B>>::Output;

/// Whether [`Larger`] resolves for two scalar (or same-shape) types, as a `const bool`.
///
/// # Examples
///
/// ```
/// use tc_math::has_larger;
///
/// assert!(has_larger!(f32, i64));
/// assert!(has_larger!(i16, i16));
/// assert!(!has_larger!(u16, i16));
/// ```
#[macro_export]
macro_rules! has_larger {
    ($lhs:ty, $rhs:ty) => {{
        #[allow(dead_code)]
        struct __Pair<A, B>(::core::marker::PhantomData<(A, B)>);

        trait __Unresolved {
            const RESOLVED: bool = false;
        }

        impl<A, B> __Unresolved for __Pair<A, B> {}

        #[allow(dead_code)]
        impl<A: $crate::Larger<B>, B: $crate::Element> __Pair<A, B> {
            const RESOLVED: bool = true;
        }

        <__Pair<$lhs, $rhs>>::RESOLVED
    }};
}

macro_rules! impl_larger {
    ($($lhs:ident: [$($rhs:ident => $out:ident),*];)*) => {$($(
        impl Larger<$rhs> for $lhs {
            type Output = $out;

            #[inline(always)]
            fn widen(self) -> $out {
                self.cast::<$out>()
            }

            #[inline(always)]
            fn widen_rhs(rhs: $rhs) -> $out {
                rhs.cast::<$out>()
            }

            #[inline(always)]
            fn narrow(value: $out) -> Self {
                value.cast::<$lhs>()
            }
        }
    )*)*};
}

impl_larger! {
    bool: [bool => bool, i16 => i16, u16 => u16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    i8: [i8 => i8, i16 => i16, u16 => u16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    u8: [u8 => u8, i16 => i16, u16 => u16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    i16: [bool => i16, i8 => i16, u8 => i16, i16 => i16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    u16: [bool => u16, i8 => u16, u8 => u16, u16 => u16, i32 => i32, u32 => u32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    i32: [bool => i32, i8 => i32, u8 => i32, i16 => i32, u16 => i32, i32 => i32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    u32: [bool => u32, i8 => u32, u8 => u32, i16 => u32, u16 => u32, u32 => u32, i64 => i64, u64 => u64, f32 => f32, f64 => f64];
    i64: [bool => i64, i8 => i64, u8 => i64, i16 => i64, u16 => i64, i32 => i64, u32 => i64, i64 => i64, f32 => f32, f64 => f64];
    u64: [bool => u64, i8 => u64, u8 => u64, i16 => u64, u16 => u64, i32 => u64, u32 => u64, u64 => u64, f32 => f32, f64 => f64];
    f32: [bool => f32, i8 => f32, u8 => f32, i16 => f32, u16 => f32, i32 => f32, u32 => f32, i64 => f32, u64 => f32, f32 => f32, f64 => f64];
    f64: [bool => f64, i8 => f64, u8 => f64, i16 => f64, u16 => f64, i32 => f64, u32 => f64, i64 => f64, u64 => f64, f32 => f64, f64 => f64];
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::LargerT;
    use crate::{FMat2, IMat2, IVec3, Mat2, Vec3};
    use core::any::TypeId;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    #[test]
    fn scalar_resolution() {
        assert!(same::<LargerT<f32, i32>, f32>());
        assert!(same::<LargerT<i32, f32>, f32>());
        assert!(same::<LargerT<i32, i32>, i32>());
        assert!(same::<LargerT<u8, i16>, i16>());
        assert!(same::<LargerT<i64, f32>, f32>());
        assert!(same::<LargerT<u32, i64>, i64>());
        assert!(same::<LargerT<f32, f64>, f64>());
    }

    #[test]
    fn shaped_resolution() {
        assert!(same::<LargerT<IVec3, Vec3<f64>>, Vec3<f64>>());
        assert!(same::<LargerT<IMat2, FMat2>, Mat2<f32>>());
    }

    #[test]
    fn unresolved_pairs() {
        assert!(!has_larger!(u16, i16));
        assert!(!has_larger!(i32, u32));
        assert!(!has_larger!(u64, i64));
        assert!(!has_larger!(bool, i8));
        assert!(has_larger!(bool, i16));
        assert!(has_larger!(f64, u64));
        assert!(!has_larger!(IVec3, Vec3<u32>));
        assert!(has_larger!(IVec3, Vec3<u8>));
    }
}
