use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use thiserror::Error;

use crate::{Scalar, Vector};

// -----------------------------------------------------------------------------
// Error

/// The error returned when parsing a vector or matrix from text fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseVectorError {
    #[error("Expected '[' at the start of a vector")]
    MissingOpen,

    #[error("Expected ']' at the end of a vector")]
    MissingClose,

    #[error("Wrong number of components: expected {expected}, found {found}")]
    Count { expected: usize, found: usize },

    #[error("Invalid component `{0}`")]
    Component(String),
}

fn brackets(text: &str) -> Result<&str, ParseVectorError> {
    let text = text.trim();
    let text = text.strip_prefix('[').ok_or(ParseVectorError::MissingOpen)?;
    text.strip_suffix(']').ok_or(ParseVectorError::MissingClose)
}

fn components<T: Scalar, const N: usize>(text: &str) -> Result<[T; N], ParseVectorError> {
    let mut out = [T::ZERO; N];
    let mut found = 0;
    for part in text.split(',') {
        let part = part.trim();
        if found < N {
            out[found] = part
                .parse()
                .map_err(|_| ParseVectorError::Component(part.into()))?;
        }
        found += 1;
    }
    if found != N {
        return Err(ParseVectorError::Count { expected: N, found });
    }
    Ok(out)
}

// -----------------------------------------------------------------------------
// Vectors

/// Prints `[x,y,z]`.
impl<T: Scalar, const D: usize> Display for Vector<T, D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

/// Parses `[x,y,z]`, whitespace around components is ignored.
///
/// ```
/// use tc_math::{IVec3, vec3};
///
/// assert_eq!("[1, -2, 3]".parse::<IVec3>(), Ok(vec3(1, -2, 3)));
/// assert!("[1,2]".parse::<IVec3>().is_err());
/// ```
impl<T: Scalar, const D: usize> FromStr for Vector<T, D> {
    type Err = ParseVectorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        components(brackets(text)?).map(Vector)
    }
}

// -----------------------------------------------------------------------------
// Matrices

/// Prints row by row: `[a,b;c,d]` is the matrix with first row `a b`.
impl<T: Scalar, const W: usize, const H: usize> Display for Vector<Vector<T, H>, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for y in 0..H {
            if y != 0 {
                f.write_str(";")?;
            }
            for x in 0..W {
                if x != 0 {
                    f.write_str(",")?;
                }
                Display::fmt(&self.0[x].0[y], f)?;
            }
        }
        f.write_str("]")
    }
}

/// Parses the row-major form printed by [`Display`].
impl<T: Scalar, const W: usize, const H: usize> FromStr for Vector<Vector<T, H>, W> {
    type Err = ParseVectorError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows = [[T::ZERO; W]; H];
        let mut found = 0;
        for row in brackets(text)?.split(';') {
            if found < H {
                rows[found] = components(row)?;
            }
            found += 1;
        }
        if found != H {
            return Err(ParseVectorError::Count { expected: H, found });
        }
        Ok(Self::from_rows(rows))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ParseVectorError;
    use crate::{FMat2, FVec2, IMat2, IVec3, Mat, Mat2, vec2, vec3};

    #[test]
    fn display() {
        assert_eq!(vec3(1, 2, 3).to_string(), "[1,2,3]");
        assert_eq!(vec2(0.5_f32, -1.0).to_string(), "[0.5,-1]");
        assert_eq!(vec2(true, false).to_string(), "[true,false]");

        let m: IMat2 = Mat2::from_rows([[1, 2], [3, 4]]);
        assert_eq!(m.to_string(), "[1,2;3,4]");
        let r: Mat<i32, 3, 2> = Mat::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(r.to_string(), "[1,2,3;4,5,6]");
    }

    #[test]
    fn parse_inverts_display() {
        let v: FVec2 = vec2(0.1, 1e9);
        assert_eq!(v.to_string().parse::<FVec2>(), Ok(v));

        let m: FMat2 = Mat2::from_rows([[1.5, -2.0], [0.0, 4.25]]);
        assert_eq!(m.to_string().parse::<FMat2>(), Ok(m));
        assert_eq!(" [ 1 , 2 ; 3 , 4 ] ".parse::<IMat2>(), Ok(Mat2::from_rows([[1, 2], [3, 4]])));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("1,2,3]".parse::<IVec3>(), Err(ParseVectorError::MissingOpen));
        assert_eq!("[1,2,3".parse::<IVec3>(), Err(ParseVectorError::MissingClose));
        assert_eq!(
            "[1,2,3,4]".parse::<IVec3>(),
            Err(ParseVectorError::Count { expected: 3, found: 4 })
        );
        assert_eq!("[1,x,3]".parse::<IVec3>(), Err(ParseVectorError::Component("x".into())));
        assert_eq!(
            "[1,2]".parse::<IMat2>(),
            Err(ParseVectorError::Count { expected: 2, found: 1 })
        );
    }
}
