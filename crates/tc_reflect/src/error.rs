use core::fmt;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Path

/// One step from a value to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A structure field, by name.
    Field(&'static str),
    /// A container element, by position in the input.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// The location of a parse error inside the top-level value.
///
/// Displays as `At: a.3.b: `, or nothing for the top-level value itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    // Innermost first, in the order they are pushed while unwinding.
    segments: Vec<PathSegment>,
}

impl FieldPath {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments from the outermost to the innermost.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter().rev()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        f.write_str("At: ")?;
        for (i, segment) in self.segments().enumerate() {
            if i != 0 {
                f.write_str(".")?;
            }
            fmt::Display::fmt(segment, f)?;
        }
        f.write_str(": ")
    }
}

// -----------------------------------------------------------------------------
// Errors

/// What went wrong while parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Expected '{{'.")]
    ExpectedStructureOpen,

    #[error("Expected ',' or '}}'.")]
    ExpectedFieldSeparator,

    #[error("Expected field name.")]
    ExpectedFieldName,

    #[error("No field named `{0}`.")]
    UnknownField(String),

    #[error("Duplicate field named `{0}`.")]
    DuplicateField(&'static str),

    #[error("Expected '='.")]
    ExpectedEquals,

    #[error("Following fields are missing: {}.", quoted_list(.0))]
    MissingFields(Vec<&'static str>),

    #[error("Expected '['.")]
    ExpectedContainerOpen,

    #[error("Expected ',' or ']'.")]
    ExpectedElementSeparator,

    #[error("Primitive type parsing failed.")]
    Primitive,

    #[error("Unexpected data at the end of string.")]
    TrailingData,
}

fn quoted_list(names: &[&str]) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        if i != 0 {
            out.push_str(", ");
        }
        out.push('`');
        out.push_str(name);
        out.push('`');
    }
    out
}

/// The error returned by [`from_string`](crate::from_string).
///
/// ```
/// use tc_reflect::{FromStringMode, from_string};
///
/// let mut value: Vec<Vec<i32>> = Vec::new();
/// let err = from_string(&mut value, "[[1], [2, x]]", FromStringMode::Full).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Unable to parse reflected object:\nAt: 1.1: Primitive type parsing failed.",
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unable to parse reflected object:\n{path}{kind}")]
pub struct ReflectError {
    path: FieldPath,
    kind: ParseErrorKind,
}

impl ReflectError {
    #[inline]
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            path: FieldPath::default(),
            kind,
        }
    }

    #[inline]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    #[inline]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    /// Records that the error happened inside `segment`.
    ///
    /// Called from the innermost value outwards.
    #[inline]
    pub(crate) fn within(mut self, segment: PathSegment) -> Self {
        self.path.segments.push(segment);
        self
    }
}

impl From<ParseErrorKind> for ReflectError {
    #[inline]
    fn from(kind: ParseErrorKind) -> Self {
        Self::new(kind)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{ParseErrorKind, PathSegment, ReflectError};

    #[test]
    fn top_level_message() {
        let err = ReflectError::new(ParseErrorKind::TrailingData);
        assert!(err.path().is_empty());
        assert_eq!(
            err.to_string(),
            "Unable to parse reflected object:\nUnexpected data at the end of string."
        );
    }

    #[test]
    fn nested_message() {
        let err = ReflectError::new(ParseErrorKind::ExpectedEquals)
            .within(PathSegment::Field("b"))
            .within(PathSegment::Index(3))
            .within(PathSegment::Field("a"));
        assert_eq!(
            err.to_string(),
            "Unable to parse reflected object:\nAt: a.3.b: Expected '='."
        );
        let segments: Vec<_> = err.path().segments().cloned().collect();
        assert_eq!(segments[0], PathSegment::Field("a"));
    }

    #[test]
    fn missing_fields() {
        let kind = ParseErrorKind::MissingFields(vec!["a", "b"]);
        assert_eq!(kind.to_string(), "Following fields are missing: `a`, `b`.");
        let kind = ParseErrorKind::UnknownField("zz".into());
        assert_eq!(kind.to_string(), "No field named `zz`.");
    }
}
