use crate::{Categorized, Cursor, Reflect, kind};

// -----------------------------------------------------------------------------
// Primitive

/// A value printed and parsed as a single token.
///
/// Implemented for `bool`, the integers, the floats and [`String`].
/// A custom primitive also needs a [`Reflect`] impl, which
/// [`impl_reflect_primitive!`](crate::impl_reflect_primitive) writes.
///
/// # Examples
///
/// ```
/// use tc_reflect::{Cursor, Primitive, impl_reflect_primitive, to_string};
///
/// #[derive(Default)]
/// struct Flag(bool);
///
/// impl Primitive for Flag {
///     fn write_text(&self, out: &mut String) {
///         out.push(if self.0 { 'Y' } else { 'N' });
///     }
///
///     fn read_text(&mut self, cursor: &mut Cursor<'_>) -> bool {
///         if cursor.eat(b'Y') {
///             self.0 = true;
///         } else if cursor.eat(b'N') {
///             self.0 = false;
///         } else {
///             return false;
///         }
///         true
///     }
/// }
///
/// impl_reflect_primitive!(Flag, "flag");
///
/// assert_eq!(to_string(&vec![Flag(true), Flag(false)]), "[Y,N]");
/// ```
pub trait Primitive: Reflect + Categorized<Kind = kind::Primitive> {
    /// Appends the text form of `self` to `out`.
    fn write_text(&self, out: &mut String);

    /// Parses a value at `cursor` into `self`.
    ///
    /// On success the cursor is moved past the value and `true` is returned.
    /// On failure the caller restores the cursor, and `self` may hold any value.
    fn read_text(&mut self, cursor: &mut Cursor<'_>) -> bool;
}

/// Implements [`Reflect`] and [`Categorized`] for a type that implements
/// [`Primitive`].
///
/// The second argument is the name returned by [`Reflect::type_name`].
#[macro_export]
macro_rules! impl_reflect_primitive {
    ($ty:ty, $name:expr $(,)?) => {
        impl $crate::Categorized for $ty {
            type Kind = $crate::kind::Primitive;
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn type_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Primitive(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                $crate::ReflectMut::Primitive(self)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Number scanning

/// Scans an integer the way C `strtol` does with base `0`.
///
/// An optional sign, then `0x` followed by hex digits, `0` followed by octal
/// digits, or decimal digits. Returns the value and the number of bytes used.
/// `None` if there are no digits or the value does not fit in an `i128`.
pub(crate) fn scan_integer(text: &str) -> Option<(i128, usize)> {
    let bytes = text.as_bytes();
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let radix = match (bytes.get(pos), bytes.get(pos + 1), bytes.get(pos + 2)) {
        (Some(b'0'), Some(b'x' | b'X'), Some(d)) if d.is_ascii_hexdigit() => {
            pos += 2;
            16
        }
        (Some(b'0'), ..) => 8,
        _ => 10,
    };

    let start = pos;
    let mut value: i128 = 0;
    while let Some(digit) = bytes.get(pos).and_then(|b| (*b as char).to_digit(radix)) {
        value = value.checked_mul(radix as i128)?.checked_add(digit as i128)?;
        pos += 1;
    }
    if pos == start {
        return None;
    }

    Some((if negative { -value } else { value }, pos))
}

/// Length of the longest prefix of `text` that reads as a float.
///
/// Accepts an optional sign, then `inf`, `infinity`, `nan` (any case) or
/// digits with an optional `.` and exponent. `0` if there is no float.
pub(crate) fn scan_float(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let word = |pos: usize, word: &str| {
        bytes
            .get(pos..pos + word.len())
            .is_some_and(|b| b.eq_ignore_ascii_case(word.as_bytes()))
    };
    if word(pos, "infinity") {
        return pos + 8;
    }
    if word(pos, "inf") || word(pos, "nan") {
        return pos + 3;
    }

    let digits = |pos: &mut usize| {
        let start = *pos;
        while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
            *pos += 1;
        }
        *pos - start
    };

    let mut count = digits(&mut pos);
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        count += digits(&mut pos);
    }
    if count == 0 {
        return 0;
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        let mut exp = pos + 1;
        if let Some(b'+' | b'-') = bytes.get(exp) {
            exp += 1;
        }
        if digits(&mut exp) != 0 {
            pos = exp;
        }
    }
    pos
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{scan_float, scan_integer};

    #[test]
    fn integers() {
        assert_eq!(scan_integer("42,"), Some((42, 2)));
        assert_eq!(scan_integer("-17"), Some((-17, 3)));
        assert_eq!(scan_integer("+5"), Some((5, 2)));
        assert_eq!(scan_integer("0x1F]"), Some((31, 4)));
        assert_eq!(scan_integer("010"), Some((8, 3)));
        assert_eq!(scan_integer("08"), Some((0, 1)));
        assert_eq!(scan_integer("0xg"), Some((0, 1)));
        assert_eq!(scan_integer("-"), None);
        assert_eq!(scan_integer("x"), None);
        assert_eq!(scan_integer("999999999999999999999999999999999999999999"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(scan_float("1.5,"), 3);
        assert_eq!(scan_float("-.5"), 3);
        assert_eq!(scan_float("2."), 2);
        assert_eq!(scan_float("1e5x"), 3);
        assert_eq!(scan_float("1e+x"), 1);
        assert_eq!(scan_float("6.02E-23"), 8);
        assert_eq!(scan_float("-Infinity"), 9);
        assert_eq!(scan_float("inf]"), 3);
        assert_eq!(scan_float("NaN"), 3);
        assert_eq!(scan_float("."), 0);
        assert_eq!(scan_float("e5"), 0);
    }
}
