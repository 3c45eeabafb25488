use core::fmt::{self, Write};

use crate::primitive::{scan_float, scan_integer};
use crate::{Cursor, Primitive};

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_integer {
    ($($ty:ident => $name:literal),* $(,)?) => {$(
        impl Primitive for $ty {
            #[inline]
            fn write_text(&self, out: &mut String) {
                let _ = write!(out, "{self}");
            }

            fn read_text(&mut self, cursor: &mut Cursor<'_>) -> bool {
                let Some((value, len)) = scan_integer(cursor.rest()) else {
                    return false;
                };
                let Ok(value) = <$ty>::try_from(value) else {
                    return false;
                };
                *self = value;
                cursor.advance(len);
                true
            }
        }

        crate::impl_reflect_primitive!($ty, $name);
    )*};
}

impl_integer! {
    i8 => "byte",
    u8 => "ubyte",
    i16 => "short",
    u16 => "ushort",
    i32 => "int",
    u32 => "uint",
    i64 => "long",
    u64 => "ulong",
    isize => "isize",
    usize => "usize",
}

// -----------------------------------------------------------------------------
// Bool

impl Primitive for bool {
    #[inline]
    fn write_text(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }

    /// `true`, `false`, or an integer that is `0` or `1`.
    fn read_text(&mut self, cursor: &mut Cursor<'_>) -> bool {
        let rest = cursor.rest();
        for (word, value) in [("false", false), ("true", true)] {
            if rest.starts_with(word) {
                *self = value;
                cursor.advance(word.len());
                return true;
            }
        }
        match scan_integer(rest) {
            Some((value @ (0 | 1), len)) => {
                *self = value == 1;
                cursor.advance(len);
                true
            }
            _ => false,
        }
    }
}

crate::impl_reflect_primitive!(bool, "bool");

// -----------------------------------------------------------------------------
// Floats

/// Shortest round-trip digits, in exponent form when the decimal exponent
/// is below -4 or at least `precision`, as `%g` does.
fn write_float<T: fmt::Display + fmt::LowerExp>(value: T, precision: i32, out: &mut String) {
    let scientific = format!("{value:e}");
    let exponent = scientific.rsplit_once('e').and_then(|(_, exp)| exp.parse::<i32>().ok());
    match exponent {
        Some(exp) if !(-4..precision).contains(&exp) => out.push_str(&scientific),
        _ => {
            let _ = write!(out, "{value}");
        }
    }
}

macro_rules! impl_float {
    ($($ty:ident => $name:literal, $precision:literal),* $(,)?) => {$(
        impl Primitive for $ty {
            /// The shortest text that parses back to the same value.
            #[inline]
            fn write_text(&self, out: &mut String) {
                write_float(*self, $precision, out);
            }

            fn read_text(&mut self, cursor: &mut Cursor<'_>) -> bool {
                let len = scan_float(cursor.rest());
                if len == 0 {
                    return false;
                }
                match cursor.rest()[..len].parse::<$ty>() {
                    Ok(value) => {
                        *self = value;
                        cursor.advance(len);
                        true
                    }
                    Err(_) => false,
                }
            }
        }

        crate::impl_reflect_primitive!($ty, $name);
    )*};
}

impl_float! {
    f32 => "float", 9,
    f64 => "double", 17,
}

// -----------------------------------------------------------------------------
// String

impl Primitive for String {
    /// Double-quoted, with `\"`, `\\`, `\n`, `\t`, `\r`, `\0` and `\xNN` escapes.
    fn write_text(&self, out: &mut String) {
        out.reserve(self.len() + 2);
        out.push('"');
        for ch in self.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\t' => out.push_str("\\t"),
                '\r' => out.push_str("\\r"),
                '\0' => out.push_str("\\0"),
                ch if ch.is_ascii_control() => {
                    let _ = write!(out, "\\x{:02X}", ch as u32);
                }
                ch => out.push(ch),
            }
        }
        out.push('"');
    }

    fn read_text(&mut self, cursor: &mut Cursor<'_>) -> bool {
        let rest = cursor.rest();
        let Some(body) = rest.strip_prefix('"') else {
            return false;
        };

        let mut value = String::new();
        let mut chars = body.char_indices();
        while let Some((i, ch)) = chars.next() {
            match ch {
                '"' => {
                    *self = value;
                    cursor.advance(i + 2);
                    return true;
                }
                '\\' => {
                    let escaped = match chars.next() {
                        Some((_, '"')) => '"',
                        Some((_, '\\')) => '\\',
                        Some((_, 'n')) => '\n',
                        Some((_, 't')) => '\t',
                        Some((_, 'r')) => '\r',
                        Some((_, '0')) => '\0',
                        Some((j, 'x')) => {
                            let Some(code) = body
                                .get(j + 1..j + 3)
                                .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                            else {
                                return false;
                            };
                            chars.next();
                            chars.next();
                            char::from(code)
                        }
                        _ => return false,
                    };
                    value.push(escaped);
                }
                ch => value.push(ch),
            }
        }
        // Unterminated.
        false
    }
}

crate::impl_reflect_primitive!(String, "string");

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::FromStringMode::Full;
    use crate::{Reflect, from_string, to_string};

    fn parse<T: Reflect + Default>(text: &str) -> Option<T> {
        let mut value = T::default();
        from_string(&mut value, text, Full).ok().map(|()| value)
    }

    #[test]
    fn names() {
        assert_eq!(0_i32.type_name(), "int");
        assert_eq!(0_u64.type_name(), "ulong");
        assert_eq!(0_i8.type_name(), "byte");
        assert_eq!(0.0_f64.type_name(), "double");
        assert_eq!(String::new().type_name(), "string");
    }

    #[test]
    fn integers() {
        assert_eq!(parse::<i32>(" -42 "), Some(-42));
        assert_eq!(parse::<i32>("0x10"), Some(16));
        assert_eq!(parse::<i32>("-0x10"), Some(-16));
        assert_eq!(parse::<u16>("0777"), Some(511));
        assert_eq!(parse::<u8>("255"), Some(255));
        assert_eq!(parse::<u8>("256"), None);
        assert_eq!(parse::<i8>("-128"), Some(-128));
        assert_eq!(parse::<i8>("-129"), None);
        assert_eq!(parse::<u32>("-1"), None);
        assert_eq!(parse::<u32>("-0"), Some(0));
        assert_eq!(parse::<u64>("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse::<i64>("1.5"), None);
        assert_eq!(parse::<i32>("abc"), None);

        assert_eq!(to_string(&-7_i16), "-7");
        assert_eq!(to_string(&u64::MAX), "18446744073709551615");
    }

    #[test]
    fn bools() {
        assert_eq!(parse::<bool>("true"), Some(true));
        assert_eq!(parse::<bool>("false"), Some(false));
        assert_eq!(parse::<bool>("1"), Some(true));
        assert_eq!(parse::<bool>("0"), Some(false));
        assert_eq!(parse::<bool>("2"), None);
        assert_eq!(parse::<bool>("True"), None);
        assert_eq!(to_string(&true), "true");
    }

    #[test]
    fn floats() {
        assert_eq!(parse::<f32>("1.5"), Some(1.5));
        assert_eq!(parse::<f64>("-2e3"), Some(-2000.0));
        assert_eq!(parse::<f64>(".25"), Some(0.25));
        assert_eq!(parse::<f64>("7"), Some(7.0));
        assert_eq!(parse::<f64>("inf"), Some(f64::INFINITY));
        assert!(parse::<f32>("nan").is_some_and(f32::is_nan));
        assert_eq!(parse::<f32>("x"), None);
        approx::assert_relative_eq!(parse::<f32>("6.02e23").unwrap(), 6.02e23);
        approx::assert_relative_eq!(parse::<f64>("-1.25E-2").unwrap(), -0.0125);

        assert_eq!(to_string(&0.1_f32), "0.1");
        assert_eq!(to_string(&-3.0_f64), "-3");
        for value in [0.1_f64, 1.0 / 3.0, 6.02e23, -1e-300, f64::MAX] {
            assert_eq!(parse::<f64>(&to_string(&value)), Some(value));
        }
    }

    #[test]
    fn float_exponents() {
        assert_eq!(to_string(&1e300_f64), "1e300");
        assert_eq!(to_string(&1e-40_f32), "1e-40");
        assert_eq!(to_string(&-2.5e-7_f64), "-2.5e-7");
        assert_eq!(to_string(&6.02e23_f64), "6.02e23");
        assert_eq!(to_string(&f64::MAX), "1.7976931348623157e308");
        assert_eq!(to_string(&1000.0_f32), "1000");
        assert_eq!(to_string(&0.001_f64), "0.001");
        assert_eq!(to_string(&f32::INFINITY), "inf");
        assert_eq!(parse::<f64>(&to_string(&1e300_f64)), Some(1e300));
        assert_eq!(parse::<f32>(&to_string(&1e-40_f32)), Some(1e-40));
    }

    #[test]
    fn strings() {
        let value = String::from("tab\there \"quoted\" back\\slash \u{1} \u{e9}");
        let text = to_string(&value);
        assert_eq!(text, r#""tab\there \"quoted\" back\\slash \x01 é""#);
        assert_eq!(parse::<String>(&text), Some(value));

        assert_eq!(parse::<String>(r#""\x41\0""#), Some(String::from("A\0")));
        assert_eq!(parse::<String>(r#""open"#), None);
        assert_eq!(parse::<String>(r#""bad \q""#), None);
        assert_eq!(parse::<String>("bare"), None);
    }
}
