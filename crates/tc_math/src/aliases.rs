//! Shorthand names for common shapes and scalar types.
//!
//! The prefix names the scalar: `B` bool, `C` i8, `UC` u8, `S` i16, `US` u16,
//! `I` i32, `U` u32, `L` i64, `UL` u64, `F` f32 and `D` f64.

use paste::paste;

use crate::{Mat, Vector};

pub type Vec2<T> = Vector<T, 2>;
pub type Vec3<T> = Vector<T, 3>;
pub type Vec4<T> = Vector<T, 4>;

pub type Mat2<T> = Mat<T, 2, 2>;
pub type Mat3<T> = Mat<T, 3, 3>;
pub type Mat4<T> = Mat<T, 4, 4>;

macro_rules! rect_aliases {
    ($(($w:literal, $h:literal)),*) => {
        paste! {$(
            pub type [<Mat $w x $h>]<T> = Mat<T, $w, $h>;
        )*}
    };
}

rect_aliases!((2, 2), (2, 3), (2, 4), (3, 2), (3, 3), (3, 4), (4, 2), (4, 3), (4, 4));

macro_rules! tag_aliases {
    ($($tag:ident => $ty:ty),*) => {
        paste! {$(
            pub type [<$tag Vec2>] = Vec2<$ty>;
            pub type [<$tag Vec3>] = Vec3<$ty>;
            pub type [<$tag Vec4>] = Vec4<$ty>;

            pub type [<$tag Mat2>] = Mat2<$ty>;
            pub type [<$tag Mat3>] = Mat3<$ty>;
            pub type [<$tag Mat4>] = Mat4<$ty>;

            pub type [<$tag Mat2x2>] = Mat2x2<$ty>;
            pub type [<$tag Mat2x3>] = Mat2x3<$ty>;
            pub type [<$tag Mat2x4>] = Mat2x4<$ty>;
            pub type [<$tag Mat3x2>] = Mat3x2<$ty>;
            pub type [<$tag Mat3x3>] = Mat3x3<$ty>;
            pub type [<$tag Mat3x4>] = Mat3x4<$ty>;
            pub type [<$tag Mat4x2>] = Mat4x2<$ty>;
            pub type [<$tag Mat4x3>] = Mat4x3<$ty>;
            pub type [<$tag Mat4x4>] = Mat4x4<$ty>;
        )*}
    };
}

tag_aliases! {
    B => bool,
    C => i8,
    UC => u8,
    S => i16,
    US => u16,
    I => i32,
    U => u32,
    L => i64,
    UL => u64,
    F => f32,
    D => f64
}
