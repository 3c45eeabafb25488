use paste::paste;

use crate::{Larger, LargerT, Mat2, Numeric, Real, Scalar, Vector};

// -----------------------------------------------------------------------------
// Mat

/// A `W` by `H` matrix: `W` column vectors of height `H`.
///
/// Storage is column-major, `m[x][y]` is column `x`, row `y`.
///
/// # Examples
///
/// ```
/// use tc_math::{IMat2, Mat2, vec2};
///
/// // Written row by row, stored column by column.
/// let m: IMat2 = Mat2::from_rows([[1, 2], [3, 4]]);
/// assert_eq!(m[0], vec2(1, 3));
/// assert_eq!(m.mul(vec2(1, 1)), vec2(3, 7));
/// ```
pub type Mat<T, const W: usize, const H: usize> = Vector<Vector<T, H>, W>;

impl<T: Scalar, const W: usize, const H: usize> Vector<Vector<T, H>, W> {
    /// Number of columns.
    pub const WIDTH: usize = W;
    /// Number of rows.
    pub const HEIGHT: usize = H;

    /// Creates a matrix from its columns.
    #[inline(always)]
    pub const fn from_cols(cols: [Vector<T, H>; W]) -> Self {
        Self(cols)
    }

    /// Creates a matrix from its rows, the way it is written down.
    #[inline]
    pub fn from_rows(rows: [[T; W]; H]) -> Self {
        Self::from_fn(|x| Vector::from_fn(|y| rows[y][x]))
    }

    /// Row `y` as a vector of width `W`.
    #[inline]
    pub fn row(&self, y: usize) -> Vector<T, W> {
        Vector::from_fn(|x| self.0[x].0[y])
    }

    /// Swaps rows and columns.
    #[inline]
    pub fn transpose(&self) -> Mat<T, H, W> {
        Vector::from_fn(|y| self.row(y))
    }

    /// Changes the shape, keeping the overlapping cells.
    ///
    /// New cells on the diagonal are one, every other new cell is zero,
    /// so growing a square matrix behaves like embedding it in an identity.
    pub fn resize_mat<const W2: usize, const H2: usize>(&self) -> Mat<T, W2, H2> {
        Vector::from_fn(|x| {
            Vector::from_fn(|y| match () {
                _ if x < W && y < H => self.0[x].0[y],
                _ if x == y => T::ONE,
                _ => T::ZERO,
            })
        })
    }
}

macro_rules! impl_to_mat {
    ($(($w:literal, $h:literal)),*) => {
        paste! {
            impl<T: Scalar, const W: usize, const H: usize> Vector<Vector<T, H>, W> {$(
                #[doc = concat!("Resizes to ", $w, "x", $h, ", see [`Vector::resize_mat`].")]
                #[inline]
                pub fn [<to_mat $w x $h>](&self) -> Mat<T, $w, $h> {
                    self.resize_mat::<$w, $h>()
                }
            )*}
        }
    };
}

impl_to_mat!((2, 2), (2, 3), (2, 4), (3, 2), (3, 3), (3, 4), (4, 2), (4, 3), (4, 4));

impl<T: Scalar, const W: usize, const H: usize> Vector<Vector<T, H>, W> {
    /// Resizes to 2x2, see [`Vector::resize_mat`].
    #[inline]
    pub fn to_mat2(&self) -> Mat<T, 2, 2> {
        self.resize_mat::<2, 2>()
    }

    /// Resizes to 3x3, see [`Vector::resize_mat`].
    #[inline]
    pub fn to_mat3(&self) -> Mat<T, 3, 3> {
        self.resize_mat::<3, 3>()
    }

    /// Resizes to 4x4, see [`Vector::resize_mat`].
    #[inline]
    pub fn to_mat4(&self) -> Mat<T, 4, 4> {
        self.resize_mat::<4, 4>()
    }
}

impl<T: Scalar, const N: usize> Vector<Vector<T, N>, N> {
    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(|x| Vector::from_fn(|y| if x == y { T::ONE } else { T::ZERO }))
    }
}

// -----------------------------------------------------------------------------
// Transforms

impl<T: Scalar> Vector<Vector<T, 3>, 3> {
    /// 2D translation in homogeneous coordinates.
    pub fn translate(offset: Vector<T, 2>) -> Self {
        let mut out = Self::identity();
        out.0[2] = Vector([offset.0[0], offset.0[1], T::ONE]);
        out
    }

    /// 2D scale in homogeneous coordinates.
    pub fn scale(factor: Vector<T, 2>) -> Self {
        let mut out = Self::identity();
        out.0[0].0[0] = factor.0[0];
        out.0[1].0[1] = factor.0[1];
        out
    }
}

impl<T: Real> Vector<Vector<T, 3>, 3> {
    /// 2D rotation by `angle` radians in homogeneous coordinates.
    pub fn rotate2d(angle: T) -> Self {
        Mat2::rotate(angle).to_mat3()
    }
}

impl<T: Scalar> Vector<Vector<T, 4>, 4> {
    /// 3D translation.
    pub fn translate(offset: Vector<T, 3>) -> Self {
        let mut out = Self::identity();
        out.0[3] = Vector([offset.0[0], offset.0[1], offset.0[2], T::ONE]);
        out
    }

    /// 3D scale.
    pub fn scale(factor: Vector<T, 3>) -> Self {
        let mut out = Self::identity();
        for i in 0..3 {
            out.0[i].0[i] = factor.0[i];
        }
        out
    }
}

impl<T: Real> Vector<Vector<T, 4>, 4> {
    /// Orthographic projection mapping the box `min..max`, `near..far`
    /// onto the `-1..1` cube.
    pub fn ortho(min: Vector<T, 2>, max: Vector<T, 2>, near: T, far: T) -> Self {
        let two = T::ONE + T::ONE;
        let size = Vector([max.0[0] - min.0[0], max.0[1] - min.0[1]]);
        let depth = far - near;

        let mut out = Self::identity();
        out.0[0].0[0] = two / size.0[0];
        out.0[1].0[1] = two / size.0[1];
        out.0[2].0[2] = -two / depth;
        out.0[3] = Vector([
            -(max.0[0] + min.0[0]) / size.0[0],
            -(max.0[1] + min.0[1]) / size.0[1],
            -(far + near) / depth,
            T::ONE,
        ]);
        out
    }
}

impl<T: Real> Vector<Vector<T, 2>, 2> {
    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(angle: T) -> Self {
        let (s, c) = (angle.sin(), angle.cos());
        Self([Vector([c, s]), Vector([-s, c])])
    }
}

// -----------------------------------------------------------------------------
// Matrix product

/// The matrix product, see [`Vector::mul`].
///
/// A vector on the left is a single row (width `D`, height 1). A vector on
/// the right is a single column (width 1, height `D`). The product
/// `A (W x H) * B (I x W)` is `I x H`, and a `1 x 1` result is a scalar.
///
/// The scalar type of the result is the [`Larger`] of both operands; pairs
/// without a common type have no product.
pub trait MatMul<Rhs> {
    type Output;

    fn mat_mul(self, rhs: Rhs) -> Self::Output;
}

#[inline(always)]
fn dot_with<A, B, const N: usize>(mut lhs: impl FnMut(usize) -> A, mut rhs: impl FnMut(usize) -> B) -> LargerT<A, B>
where
    A: Larger<B>,
    B: Scalar,
    LargerT<A, B>: Numeric,
{
    (0..N).fold(<LargerT<A, B> as Scalar>::ZERO, |acc, j| {
        acc + A::widen(lhs(j)) * A::widen_rhs(rhs(j))
    })
}

// Row times column.
impl<T, U, const D: usize> MatMul<Vector<U, D>> for Vector<T, D>
where
    T: Scalar + Larger<U>,
    U: Scalar,
    LargerT<T, U>: Numeric,
{
    type Output = LargerT<T, U>;

    #[inline]
    fn mat_mul(self, rhs: Vector<U, D>) -> Self::Output {
        dot_with::<T, U, D>(|j| self.0[j], |j| rhs.0[j])
    }
}

// Row times matrix.
impl<T, U, const D: usize, const I: usize> MatMul<Mat<U, I, D>> for Vector<T, D>
where
    T: Scalar + Larger<U>,
    U: Scalar,
    LargerT<T, U>: Numeric,
{
    type Output = Vector<LargerT<T, U>, I>;

    #[inline]
    fn mat_mul(self, rhs: Mat<U, I, D>) -> Self::Output {
        Vector::from_fn(|x| dot_with::<T, U, D>(|j| self.0[j], |j| rhs.0[x].0[j]))
    }
}

// Matrix times column.
impl<T, U, const W: usize, const H: usize> MatMul<Vector<U, W>> for Mat<T, W, H>
where
    T: Scalar + Larger<U>,
    U: Scalar,
    LargerT<T, U>: Numeric,
{
    type Output = Vector<LargerT<T, U>, H>;

    #[inline]
    fn mat_mul(self, rhs: Vector<U, W>) -> Self::Output {
        Vector::from_fn(|y| dot_with::<T, U, W>(|j| self.0[j].0[y], |j| rhs.0[j]))
    }
}

// Matrix times matrix.
impl<T, U, const W: usize, const H: usize, const I: usize> MatMul<Mat<U, I, W>> for Mat<T, W, H>
where
    T: Scalar + Larger<U>,
    U: Scalar,
    LargerT<T, U>: Numeric,
{
    type Output = Mat<LargerT<T, U>, I, H>;

    #[inline]
    fn mat_mul(self, rhs: Mat<U, I, W>) -> Self::Output {
        Vector::from_fn(|x| {
            Vector::from_fn(|y| dot_with::<T, U, W>(|j| self.0[j].0[y], |j| rhs.0[x].0[j]))
        })
    }
}

impl<T, const D: usize> Vector<T, D> {
    /// Matrix product, see [`MatMul`].
    ///
    /// This is not `*`, which multiplies componentwise.
    ///
    /// ```
    /// use tc_math::{FMat2, Mat2, vec2};
    ///
    /// let a: FMat2 = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// let b: FMat2 = Mat2::from_rows([[0.0, 1.0], [1.0, 0.0]]);
    /// assert_eq!(a.mul(b), Mat2::from_rows([[2.0, 1.0], [4.0, 3.0]]));
    /// assert_eq!(vec2(1, 2).mul(vec2(3, 4)), 11);
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn mul<R>(self, rhs: R) -> <Self as MatMul<R>>::Output
    where
        Self: MatMul<R>,
    {
        MatMul::mat_mul(self, rhs)
    }
}

// -----------------------------------------------------------------------------
// Tests
