use crate::{Scalar, Vector};

impl<T: Scalar, const D: usize> Vector<T, D> {
    /// Changes the number of components, truncating or filling with zero.
    ///
    /// ```
    /// use tc_math::{vec2, vec4};
    ///
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// ```
    #[inline]
    pub fn resize<const N: usize>(self) -> Vector<T, N> {
        Vector::from_fn(|i| if i < D { self.0[i] } else { T::ZERO })
    }

    /// Resizes to 2 components.
    #[inline]
    pub fn to_vec2(self) -> Vector<T, 2> {
        self.resize()
    }

    /// Resizes to 3 components, a new `z` is zero.
    #[inline]
    pub fn to_vec3(self) -> Vector<T, 3> {
        self.resize()
    }

    /// Resizes to 4 components, new components are zero.
    #[inline]
    pub fn to_vec4(self) -> Vector<T, 4> {
        self.resize()
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Extends to 3 components with the given `z`.
    #[inline]
    pub fn to_vec3_with(self, z: T) -> Vector<T, 3> {
        Vector([self.0[0], self.0[1], z])
    }

    /// Extends to 4 components with the given `z` and `w`.
    #[inline]
    pub fn to_vec4_with(self, z: T, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], z, w])
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Extends to 4 components with the given `w`.
    #[inline]
    pub fn to_vec4_with(self, w: T) -> Vector<T, 4> {
        Vector([self.0[0], self.0[1], self.0[2], w])
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{IVec2, IVec3, vec2, vec3, vec4};

    #[test]
    fn identity_resize() {
        let v: IVec3 = vec3(4, 5, 6);
        assert_eq!(v.resize::<3>(), v);
        assert_eq!(v.to_vec3(), v);
    }

    #[test]
    fn grow_then_shrink() {
        let v: IVec2 = vec2(7, -1);
        assert_eq!(v.to_vec3(), vec3(7, -1, 0));
        assert_eq!(v.to_vec4().to_vec2(), v);
        assert_eq!(v.to_vec3().to_vec4().to_vec2(), v);
        assert_eq!(vec4(1.5_f32, 2.0, 3.0, 4.0).to_vec3(), vec3(1.5, 2.0, 3.0));
    }

    #[test]
    fn explicit_fill() {
        assert_eq!(vec2(0, 0).to_vec4_with(9, 9), vec4(0, 0, 9, 9));
        assert_eq!(vec2(1, 2).to_vec3_with(3), vec3(1, 2, 3));
        assert_eq!(vec3(0.5_f32, 0.5, 0.5).to_vec4_with(1.0), vec4(0.5, 0.5, 0.5, 1.0));
    }
}
