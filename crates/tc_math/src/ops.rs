//! Operator overloading for vectors and matrices.
//!
//! - `+ - * / % ^ & |` between two vectors (or matrices) of the same shape
//!   apply componentwise in the [`Larger`] type of both operands.
//! - The same operators between a vector and a scalar (in either order)
//!   broadcast the scalar to every component.
//! - `<< >>` shift each component by the matching component (or scalar)
//!   and keep the left operand's type, like the scalar shifts do.
//! - Compound assignment computes in the common type, then converts back
//!   to the left operand's type.
//! - Unary `-` negates, `!` is the componentwise bitwise (or logical) not.
//! - `==` holds when every component is equal. Besides two values of the
//!   same type, an integer vector (or matrix) compares with a float one of
//!   the same shape, and any vector compares with a scalar on either side.
//!   Integer pairs of different types stay incomparable, so literals keep
//!   inferring the type of the other side.

use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub};
use core::ops::{AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, DivAssign, MulAssign};
use core::ops::{RemAssign, ShlAssign, ShrAssign, SubAssign};

use crate::{ChangeBaseT, Element, Larger, Mat, Vector};

// -----------------------------------------------------------------------------
// Binary operators

macro_rules! impl_binary {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {$(
        impl<A, B, const D: usize> $trait<Vector<B, D>> for Vector<A, D>
        where
            A: Larger<B>,
            B: Element,
            A::Output: $trait<Output = A::Output>,
        {
            type Output = Vector<A::Output, D>;

            #[inline]
            fn $method(self, rhs: Vector<B, D>) -> Self::Output {
                Vector(core::array::from_fn(|i| {
                    $trait::$method(A::widen(self.0[i]), A::widen_rhs(rhs.0[i]))
                }))
            }
        }

        impl<A, B, const D: usize> $assign<Vector<B, D>> for Vector<A, D>
        where
            A: Larger<B>,
            B: Element,
            A::Output: $trait<Output = A::Output>,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Vector<B, D>) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    *lhs = A::narrow($trait::$method(A::widen(*lhs), A::widen_rhs(rhs)));
                }
            }
        }
    )*};
}

impl_binary! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
    BitXor::bitxor, BitXorAssign::bitxor_assign;
    BitAnd::bitand, BitAndAssign::bitand_assign;
    BitOr::bitor, BitOrAssign::bitor_assign;
}

macro_rules! impl_shift {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {$(
        impl<A, B, const D: usize> $trait<Vector<B, D>> for Vector<A, D>
        where
            A: Copy + $trait<B>,
            B: Copy,
        {
            type Output = Vector<A::Output, D>;

            #[inline]
            fn $method(self, rhs: Vector<B, D>) -> Self::Output {
                self.zip_map(rhs, $trait::$method)
            }
        }

        impl<A, B, const D: usize> $assign<Vector<B, D>> for Vector<A, D>
        where
            A: $assign<B>,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Vector<B, D>) {
                for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                    $assign::$assign_method(lhs, rhs);
                }
            }
        }
    )*};
}

impl_shift! {
    Shl::shl, ShlAssign::shl_assign;
    Shr::shr, ShrAssign::shr_assign;
}

// -----------------------------------------------------------------------------
// Scalar broadcasting

macro_rules! impl_scalar_binary {
    ($scalar:ident: $($trait:ident::$method:ident, $assign:ident::$assign_method:ident;)*) => {$(
        impl<A: Element, const D: usize> $trait<$scalar> for Vector<A, D>
        where
            Vector<A, D>: $trait<ChangeBaseT<Vector<A, D>, $scalar>>,
        {
            type Output = <Vector<A, D> as $trait<ChangeBaseT<Vector<A, D>, $scalar>>>::Output;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self::Output {
                $trait::$method(self, <ChangeBaseT<Vector<A, D>, $scalar>>::splat_base(rhs))
            }
        }

        impl<B: Element, const D: usize> $trait<Vector<B, D>> for $scalar
        where
            ChangeBaseT<Vector<B, D>, $scalar>: $trait<Vector<B, D>>,
        {
            type Output = <ChangeBaseT<Vector<B, D>, $scalar> as $trait<Vector<B, D>>>::Output;

            #[inline]
            fn $method(self, rhs: Vector<B, D>) -> Self::Output {
                $trait::$method(<ChangeBaseT<Vector<B, D>, $scalar>>::splat_base(self), rhs)
            }
        }

        impl<A: Element, const D: usize> $assign<$scalar> for Vector<A, D>
        where
            Vector<A, D>: $assign<ChangeBaseT<Vector<A, D>, $scalar>>,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                $assign::$assign_method(self, <ChangeBaseT<Vector<A, D>, $scalar>>::splat_base(rhs));
            }
        }
    )*};
}

macro_rules! impl_scalar_ops {
    ($($scalar:ident)*) => {$(
        impl_scalar_binary! {
            $scalar:
            Add::add, AddAssign::add_assign;
            Sub::sub, SubAssign::sub_assign;
            Mul::mul, MulAssign::mul_assign;
            Div::div, DivAssign::div_assign;
            Rem::rem, RemAssign::rem_assign;
            BitXor::bitxor, BitXorAssign::bitxor_assign;
            BitAnd::bitand, BitAndAssign::bitand_assign;
            BitOr::bitor, BitOrAssign::bitor_assign;
            Shl::shl, ShlAssign::shl_assign;
            Shr::shr, ShrAssign::shr_assign;
        }
    )*};
}

impl_scalar_ops!(bool i8 u8 i16 u16 i32 u32 i64 u64 f32 f64);

// -----------------------------------------------------------------------------
// Equality

#[inline]
fn all_equal<A: Larger<B>, B: Element>(lhs: &[A], rhs: &[B]) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(a, b)| A::widen(*a) == A::widen_rhs(*b))
}

#[inline]
fn all_equal_to<A: Larger<B>, B: Element>(lhs: &[A], rhs: B) -> bool {
    lhs.iter().all(|a| A::widen(*a) == A::widen_rhs(rhs))
}

macro_rules! impl_mixed_eq {
    ($($lhs:ident: [$($rhs:ident)*];)*) => {$($(
        impl<const D: usize> PartialEq<Vector<$rhs, D>> for Vector<$lhs, D> {
            #[inline]
            fn eq(&self, rhs: &Vector<$rhs, D>) -> bool {
                all_equal(self.as_array(), rhs.as_array())
            }
        }

        impl<const W: usize, const H: usize> PartialEq<Mat<$rhs, W, H>> for Mat<$lhs, W, H> {
            #[inline]
            fn eq(&self, rhs: &Mat<$rhs, W, H>) -> bool {
                all_equal(self.as_array(), rhs.as_array())
            }
        }
    )*)*};
}

impl_mixed_eq! {
    i8: [f32 f64];
    u8: [f32 f64];
    i16: [f32 f64];
    u16: [f32 f64];
    i32: [f32 f64];
    u32: [f32 f64];
    i64: [f32 f64];
    u64: [f32 f64];
    f32: [i8 u8 i16 u16 i32 u32 i64 u64];
    f64: [i8 u8 i16 u16 i32 u32 i64 u64];
}

macro_rules! impl_scalar_eq {
    ($($lhs:ident: [$($rhs:ident)*];)*) => {$($(
        impl<const D: usize> PartialEq<$rhs> for Vector<$lhs, D> {
            #[inline]
            fn eq(&self, rhs: &$rhs) -> bool {
                all_equal_to(self.as_array(), *rhs)
            }
        }

        impl<const W: usize, const H: usize> PartialEq<$rhs> for Mat<$lhs, W, H> {
            #[inline]
            fn eq(&self, rhs: &$rhs) -> bool {
                all_equal_to(self.as_array(), *rhs)
            }
        }

        impl<const D: usize> PartialEq<Vector<$lhs, D>> for $rhs {
            #[inline]
            fn eq(&self, rhs: &Vector<$lhs, D>) -> bool {
                rhs == self
            }
        }

        impl<const W: usize, const H: usize> PartialEq<Mat<$lhs, W, H>> for $rhs {
            #[inline]
            fn eq(&self, rhs: &Mat<$lhs, W, H>) -> bool {
                rhs == self
            }
        }
    )*)*};
}

impl_scalar_eq! {
    bool: [bool];
    i8: [i8 f32 f64];
    u8: [u8 f32 f64];
    i16: [i16 f32 f64];
    u16: [u16 f32 f64];
    i32: [i32 f32 f64];
    u32: [u32 f32 f64];
    i64: [i64 f32 f64];
    u64: [u64 f32 f64];
    f32: [f32 i8 u8 i16 u16 i32 u32 i64 u64];
    f64: [f64 i8 u8 i16 u16 i32 u32 i64 u64];
}

// -----------------------------------------------------------------------------
// Unary operators

impl<T: Neg, const D: usize> Neg for Vector<T, D> {
    type Output = Vector<T::Output, D>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vector(self.0.map(Neg::neg))
    }
}

impl<T: Not, const D: usize> Not for Vector<T, D> {
    type Output = Vector<T::Output, D>;

    #[inline]
    fn not(self) -> Self::Output {
        Vector(self.0.map(Not::not))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{FVec3, IMat2, IVec2, IVec3, Mat2, vec2, vec3};

    #[test]
    fn componentwise_laws() {
        let a: IVec3 = vec3(7, -8, 9);
        let b: IVec3 = vec3(2, 3, -4);
        assert_eq!(a + b, vec3(9, -5, 5));
        assert_eq!(a - b, vec3(5, -11, 13));
        assert_eq!(a * b, vec3(14, -24, -36));
        assert_eq!(a / b, vec3(3, -2, -2));
        assert_eq!(a % b, vec3(1, -2, 1));
        assert_eq!(a ^ b, vec3(7 ^ 2, -8 ^ 3, 9 ^ -4));
        assert_eq!(a & b, vec3(7 & 2, -8 & 3, 9 & -4));
        assert_eq!(a | b, vec3(7 | 2, -8 | 3, 9 | -4));
        assert_eq!(vec3(1, 2, 3) << vec3(1_u32, 2, 3), vec3(2, 8, 24));
        assert_eq!(vec2(-16, 16) >> vec2(2, 4), vec2(-4, 1));
        assert_eq!(vec3(1, 2, 3) + vec3(4, 5, 6), vec3(5, 7, 9));
    }

    #[test]
    fn mixed_types() {
        let a: IVec2 = vec2(1, 2);
        let b = vec2(0.5_f32, 0.25);
        let c = a * b;
        assert_eq!(c, vec2(0.5_f32, 0.5));

        let d = vec2(200_u8, 100) + vec2(100_i16, -300);
        assert_eq!(d, vec2(300_i16, -200));

        let m: IMat2 = Mat2::new([vec2(1, 2), vec2(3, 4)]);
        assert_eq!(m + Mat2::splat(vec2(0.5_f64, 0.5)), Mat2::new([vec2(1.5, 2.5), vec2(3.5, 4.5)]));
    }

    #[test]
    fn scalar_broadcast() {
        let a: IVec3 = vec3(1, 2, 3);
        assert_eq!(a * 2, vec3(2, 4, 6));
        assert_eq!(2 * a, vec3(2, 4, 6));
        assert_eq!(10 - a, vec3(9, 8, 7));
        assert_eq!(a + 0.5_f32, vec3(1.5_f32, 2.5, 3.5));
        assert_eq!(a << 2_u32, vec3(4, 8, 12));
        assert_eq!(vec2(true, false) & true, vec2(true, false));

        let m: IMat2 = Mat2::new([vec2(1, 2), vec2(3, 4)]);
        assert_eq!(m * 3, Mat2::new([vec2(3, 6), vec2(9, 12)]));
        assert_eq!(1 + m, Mat2::new([vec2(2, 3), vec2(4, 5)]));
    }

    #[test]
    fn compound_assignment() {
        let mut a: IVec2 = vec2(1, 2);
        a += vec2(1, 1);
        assert_eq!(a, vec2(2, 3));
        a *= 3;
        assert_eq!(a, vec2(6, 9));
        a -= vec2(0.5_f32, 0.5);
        assert_eq!(a, vec2(5, 8));
        a /= 2;
        assert_eq!(a, vec2(2, 4));
        a <<= 1_u32;
        assert_eq!(a, vec2(4, 8));
        a %= vec2(3, 5);
        assert_eq!(a, vec2(1, 3));
        a |= 4;
        assert_eq!(a, vec2(5, 7));

        let mut f: FVec3 = FVec3::splat(1.0);
        f += 1.5_f64;
        assert_eq!(f, FVec3::splat(2.5));
    }

    #[test]
    fn equality() {
        let v: IVec2 = vec2(1, 2);
        assert!(v == vec2(1.0_f32, 2.0));
        assert!(vec2(0.5_f64, 2.0) != v);
        assert!(IVec2::splat(3) == 3);
        assert!(3 == IVec2::splat(3));
        assert!(v != 1);
        assert!(FVec3::splat(0.5) == 0.5_f32);
        assert!(vec2(2_u8, 2) == 2.0_f64);
        assert!(vec2(true, true) == true);

        let m: IMat2 = Mat2::new([vec2(1, 2), vec2(3, 4)]);
        assert!(m == Mat2::new([vec2(1.0_f32, 2.0), vec2(3.0, 4.0)]));
        assert!(m != Mat2::new([vec2(1.0_f64, 2.0), vec2(3.0, 4.5)]));
        assert!(IMat2::splat(vec2(0, 0)) == 0);
        assert!(0.0_f32 == IMat2::splat(vec2(0, 0)));
        assert!(m != 1);
    }

    #[test]
    fn unary() {
        let a: IVec3 = vec3(1, -2, 3);
        assert_eq!(-a, vec3(-1, 2, -3));
        assert_eq!(-(-a), a);
        assert_eq!(!vec2(0_u8, 0xF0), vec2(0xFF_u8, 0x0F));
        assert_eq!(!vec2(true, false), vec2(false, true));
        assert_eq!(-Mat2::new([vec2(1.0, 2.0), vec2(3.0, 4.0)]), Mat2::new([vec2(-1.0, -2.0), vec2(-3.0, -4.0)]));
    }
}
