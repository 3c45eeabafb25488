//! Named component access for 2, 3 and 4 component vectors.
//!
//! Every component has two names (`x`/`r`, `y`/`g`, `z`/`b`, `w`/`a`), and for
//! each name there is a getter, a `_mut` accessor, and copy-with-change
//! builders: `set_x`, `add_x`, `sub_x`, `mul_x` and `div_x`.

use core::ops::{Add, Div, Mul, Sub};

use paste::paste;

use crate::{Larger, LargerT, Scalar, Vector};

macro_rules! impl_field_ops {
    ($dim:literal, $index:literal, $name:ident, $($op:ident => $trait:ident::$method:ident),*) => {
        paste! {
            impl<T: Scalar> Vector<T, $dim> {
                #[doc = concat!("The `", stringify!($name), "` component.")]
                #[inline(always)]
                pub fn $name(&self) -> T {
                    self.0[$index]
                }

                #[doc = concat!("Mutable access to the `", stringify!($name), "` component.")]
                #[inline(always)]
                pub fn [<$name _mut>](&mut self) -> &mut T {
                    &mut self.0[$index]
                }

                #[doc = concat!("A copy with `", stringify!($name), "` replaced by `value`.")]
                #[inline]
                pub fn [<set_ $name>](mut self, value: T) -> Self {
                    self.0[$index] = value;
                    self
                }

                $(
                    #[doc = concat!(
                        "A copy with `", stringify!($name), "` ", stringify!($op),
                        " `value`, in the common type of both operands."
                    )]
                    #[inline]
                    pub fn [<$op _ $name>]<N: Scalar>(self, value: N) -> Vector<LargerT<T, N>, $dim>
                    where
                        T: Larger<N>,
                        LargerT<T, N>: $trait<Output = LargerT<T, N>>,
                    {
                        let mut out = self.map(<T as Larger<N>>::widen);
                        out.0[$index] = $trait::$method(out.0[$index], <T as Larger<N>>::widen_rhs(value));
                        out
                    }
                )*
            }
        }
    };
}

macro_rules! impl_fields {
    ($dim:literal: $($index:literal => $name:ident / $alias:ident),*) => {$(
        impl_field_ops!($dim, $index, $name, add => Add::add, sub => Sub::sub, mul => Mul::mul, div => Div::div);
        impl_field_ops!($dim, $index, $alias, add => Add::add, sub => Sub::sub, mul => Mul::mul, div => Div::div);
    )*};
}

impl_fields!(2: 0 => x / r, 1 => y / g);
impl_fields!(3: 0 => x / r, 1 => y / g, 2 => z / b);
impl_fields!(4: 0 => x / r, 1 => y / g, 2 => z / b, 3 => w / a);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{FVec4, vec2, vec3, vec4};

    #[test]
    fn getters() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1, 2, 3, 4));
        assert_eq!((v.r(), v.g(), v.b(), v.a()), (1, 2, 3, 4));

        let mut c: FVec4 = vec4(0.0, 0.0, 0.0, 1.0);
        *c.g_mut() = 0.5;
        *c.x_mut() += 0.25;
        assert_eq!(c, vec4(0.25, 0.5, 0.0, 1.0));
    }

    #[test]
    fn builders() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.set_y(9), vec3(1, 9, 3));
        assert_eq!(v.set_b(0), vec3(1, 2, 0));
        assert_eq!(v.add_x(10), vec3(11, 2, 3));
        assert_eq!(v.sub_z(1), vec3(1, 2, 2));
        assert_eq!(v.mul_g(4), vec3(1, 8, 3));
        assert_eq!(v.div_x(2.0_f32), vec3(0.5_f32, 2.0, 3.0));
        assert_eq!(vec2(7_u8, 1).add_y(1_i16), vec2(7_i16, 2));
    }
}
