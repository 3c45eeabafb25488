use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::Vector;

impl<T: AbsDiffEq, const D: usize> AbsDiffEq for Vector<T, D>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const D: usize> RelativeEq for Vector<T, D>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const D: usize> UlpsEq for Vector<T, D>
where
    T::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{FMat2, FVec3, Mat2, vec2, vec3};
    use approx::{assert_abs_diff_eq, assert_relative_ne, assert_ulps_eq};

    #[test]
    fn nested_comparison() {
        let a: FVec3 = vec3(0.1 + 0.2, 1.0, 2.0);
        assert_ulps_eq!(a, vec3(0.3, 1.0, 2.0));
        assert_relative_ne!(a, vec3(0.3, 1.0, 2.1));

        let m: FMat2 = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_abs_diff_eq!(m, Mat2::from_rows([[1.05, 2.0], [3.0, 3.95]]), epsilon = 0.1);
        assert_relative_ne!(m, Mat2::splat(vec2(1.0, 1.0)));
    }
}
