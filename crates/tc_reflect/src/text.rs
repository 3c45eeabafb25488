//! The text form of reflected values.
//!
//! ```text
//! value     := primitive | structure | container
//! structure := '{' [ field (',' field)* [','] ] '}'
//! field     := NAME '=' value
//! container := '[' [ value (',' value)* [','] ] ']'
//! NAME      := [A-Za-z0-9_]+
//! ```
//!
//! Whitespace and `#` comments are allowed between tokens.
//! Structure fields may come in any order.

use crate::error::{ParseErrorKind, PathSegment};
use crate::{Container, Cursor, FieldCategory, Primitive, Reflect, ReflectError};
use crate::{ReflectMut, ReflectRef, Structure};

// -----------------------------------------------------------------------------
// Mode

/// How strictly [`from_string`](crate::from_string) treats missing fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FromStringMode {
    /// Every mandatory field of every structure must be present.
    #[default]
    Full,
    /// Missing fields keep their current value.
    Partial,
}

// -----------------------------------------------------------------------------
// Writing

pub(crate) fn write_value<T: Reflect + ?Sized>(value: &T, out: &mut String) {
    match value.reflect_ref() {
        ReflectRef::Primitive(primitive) => primitive.write_text(out),
        ReflectRef::Structure(structure) => write_structure(structure, out),
        ReflectRef::Container(container) => write_container(container, out),
    }
}

fn write_structure(structure: &dyn Structure, out: &mut String) {
    out.push('{');
    for (index, info) in structure.structure_info().fields().iter().enumerate() {
        if index != 0 {
            out.push(',');
        }
        out.push_str(info.name);
        out.push('=');
        if let Some(field) = structure.field_at(index) {
            write_value(field, out);
        }
    }
    out.push('}');
}

fn write_container(container: &dyn Container, out: &mut String) {
    out.push('[');
    let mut first = true;
    container.for_each_element(&mut |element| {
        if !first {
            out.push(',');
        }
        first = false;
        write_value(element, out);
    });
    out.push(']');
}

// -----------------------------------------------------------------------------
// Reading

/// Parses the whole of `text` into `value`.
pub(crate) fn read_text<T: Reflect + ?Sized>(
    value: &mut T,
    text: &str,
    mode: FromStringMode,
) -> Result<(), ReflectError> {
    let mut cursor = Cursor::new(text);
    read_value(value, &mut cursor, mode)?;
    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(ParseErrorKind::TrailingData.into());
    }
    Ok(())
}

pub(crate) fn read_value<T: Reflect + ?Sized>(
    value: &mut T,
    cursor: &mut Cursor<'_>,
    mode: FromStringMode,
) -> Result<(), ReflectError> {
    cursor.skip_whitespace();
    match value.reflect_mut() {
        ReflectMut::Primitive(primitive) => read_primitive(primitive, cursor),
        ReflectMut::Structure(structure) => read_structure(structure, cursor, mode),
        ReflectMut::Container(container) => read_container(container, cursor, mode),
    }
}

fn read_primitive(primitive: &mut dyn Primitive, cursor: &mut Cursor<'_>) -> Result<(), ReflectError> {
    let start = cursor.position();
    if primitive.read_text(cursor) {
        Ok(())
    } else {
        cursor.restore(start);
        Err(ParseErrorKind::Primitive.into())
    }
}

fn read_structure(
    structure: &mut dyn Structure,
    cursor: &mut Cursor<'_>,
    mode: FromStringMode,
) -> Result<(), ReflectError> {
    if !cursor.eat(b'{') {
        return Err(ParseErrorKind::ExpectedStructureOpen.into());
    }
    cursor.skip_whitespace();

    let info = structure.structure_info();
    let mut seen = vec![false; info.len()];
    let mut first = true;

    loop {
        if cursor.eat(b'}') {
            break;
        }
        if !first {
            if !cursor.eat(b',') {
                return Err(ParseErrorKind::ExpectedFieldSeparator.into());
            }
            cursor.skip_whitespace();
            // Trailing comma.
            if cursor.eat(b'}') {
                break;
            }
        }
        first = false;

        let name = cursor.take_name();
        if name.is_empty() {
            return Err(ParseErrorKind::ExpectedFieldName.into());
        }
        let Some(index) = info.index_of(name) else {
            return Err(ParseErrorKind::UnknownField(name.into()).into());
        };
        let name = info.fields()[index].name;
        if seen[index] {
            return Err(ParseErrorKind::DuplicateField(name).into());
        }

        cursor.skip_whitespace();
        if !cursor.eat(b'=') {
            return Err(ParseErrorKind::ExpectedEquals.into());
        }

        if let Some(field) = structure.field_at_mut(index) {
            read_value(field, cursor, mode).map_err(|e| e.within(PathSegment::Field(name)))?;
        }
        seen[index] = true;
        cursor.skip_whitespace();
    }

    if mode == FromStringMode::Full {
        let missing: Vec<_> = info
            .fields()
            .iter()
            .zip(&seen)
            .filter(|(field, seen)| field.category == FieldCategory::Mandatory && !**seen)
            .map(|(field, _)| field.name)
            .collect();
        if !missing.is_empty() {
            return Err(ParseErrorKind::MissingFields(missing).into());
        }
    }
    Ok(())
}

fn read_container(
    container: &mut dyn Container,
    cursor: &mut Cursor<'_>,
    mode: FromStringMode,
) -> Result<(), ReflectError> {
    if !container.is_empty() {
        log::trace!("clearing {} elements of `{}` before parsing", container.len(), container.type_name());
    }
    container.clear();

    if !cursor.eat(b'[') {
        return Err(ParseErrorKind::ExpectedContainerOpen.into());
    }
    cursor.skip_whitespace();

    let mut index = 0;
    loop {
        if cursor.eat(b']') {
            break;
        }
        if index != 0 {
            if !cursor.eat(b',') {
                return Err(ParseErrorKind::ExpectedElementSeparator.into());
            }
            cursor.skip_whitespace();
            if cursor.eat(b']') {
                break;
            }
        }

        container
            .insert_parsed(&mut |element| read_value(element, cursor, mode))
            .map_err(|e| e.within(PathSegment::Index(index)))?;

        cursor.skip_whitespace();
        index += 1;
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::FromStringMode::{Full, Partial};
    use crate::error::{ParseErrorKind, PathSegment};
    use crate::{from_string, to_string};

    fn kind_of<T: crate::Reflect>(value: &mut T, text: &str) -> ParseErrorKind {
        from_string(value, text, Full).unwrap_err().kind().clone()
    }

    #[test]
    fn write_nested() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), vec![1_u8, 2]);
        map.insert(String::from("b"), vec![]);
        assert_eq!(to_string(&map), r#"[{0="a",1=[1,2]},{0="b",1=[]}]"#);
    }

    #[test]
    fn read_nested() {
        let mut map: BTreeMap<u32, Vec<f32>> = BTreeMap::new();
        let text = "
            # two entries
            [
                { 1 = [0.5, 1.5,], 0 = 7 },   # fields in any order
                {0=9,1=[]},
            ]
        ";
        from_string(&mut map, text, Full).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&7], [0.5, 1.5]);
        assert!(map[&9].is_empty());
    }

    #[test]
    fn container_is_replaced() {
        let mut list = vec![9_i32, 9, 9];
        from_string(&mut list, "[1,2]", Full).unwrap();
        assert_eq!(list, [1, 2]);
        from_string(&mut list, " [ ] ", Partial).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn syntax_errors() {
        let mut list: Vec<i32> = Vec::new();
        assert_eq!(kind_of(&mut list, "1,2]"), ParseErrorKind::ExpectedContainerOpen);
        assert_eq!(kind_of(&mut list, "[1 2]"), ParseErrorKind::ExpectedElementSeparator);
        assert_eq!(kind_of(&mut list, "[1,,2]"), ParseErrorKind::Primitive);
        assert_eq!(kind_of(&mut list, "[1] x"), ParseErrorKind::TrailingData);

        let mut pair = (0_i32, 0_i32);
        assert_eq!(kind_of(&mut pair, "[]"), ParseErrorKind::ExpectedStructureOpen);
        assert_eq!(kind_of(&mut pair, "{0=1 1=2}"), ParseErrorKind::ExpectedFieldSeparator);
        assert_eq!(kind_of(&mut pair, "{=1}"), ParseErrorKind::ExpectedFieldName);
        assert_eq!(kind_of(&mut pair, "{0 1}"), ParseErrorKind::ExpectedEquals);
        assert_eq!(kind_of(&mut pair, "{2=1}"), ParseErrorKind::UnknownField("2".into()));
        assert_eq!(kind_of(&mut pair, "{0=1,0=1}"), ParseErrorKind::DuplicateField("0"));
        assert_eq!(kind_of(&mut pair, "{1=1}"), ParseErrorKind::MissingFields(vec!["0"]));
    }

    crate::structure! {
        #[derive(Debug, PartialEq)]
        struct Point {
            (optional) x: i32 = 0,
            y: i32,
        }
    }

    #[test]
    fn point() {
        let mut point = Point::default();
        from_string(&mut point, "{y=5}", Full).unwrap();
        assert_eq!(point, Point { x: 0, y: 5 });

        assert_eq!(kind_of(&mut point, "{}"), ParseErrorKind::MissingFields(vec!["y"]));
        assert_eq!(kind_of(&mut point, "{x=1,y=2,x=3}"), ParseErrorKind::DuplicateField("x"));

        let mut point = Point::default();
        from_string(&mut point, "{}", Partial).unwrap();
        assert_eq!(point, Point { x: 0, y: 0 });
        assert_eq!(to_string(&Point { x: 1, y: 2 }), "{x=1,y=2}");
    }

    #[test]
    fn partial_keeps_values() {
        let mut pair = (5_u8, String::from("keep"));
        from_string(&mut pair, "{0=6}", Partial).unwrap();
        assert_eq!(pair, (6, String::from("keep")));
    }

    #[test]
    fn error_path() {
        let mut value: Vec<(String, Vec<i32>)> = Vec::new();
        let err = from_string(&mut value, r#"[{0="a",1=[]}, {0="b",1=[1,q]}]"#, Full).unwrap_err();
        let path: Vec<_> = err.path().segments().cloned().collect();
        assert_eq!(
            path,
            [PathSegment::Index(1), PathSegment::Field("1"), PathSegment::Index(1)]
        );
        assert_eq!(
            err.to_string(),
            "Unable to parse reflected object:\nAt: 1.1.1: Primitive type parsing failed."
        );
    }

    #[test]
    fn round_trip() {
        let value: Vec<(i64, (bool, String))> = vec![
            (-3, (true, String::from("x \"y\"\n"))),
            (i64::MAX, (false, String::new())),
        ];
        let text = to_string(&value);
        let mut back: Vec<(i64, (bool, String))> = Vec::new();
        from_string(&mut back, &text, Full).unwrap();
        assert_eq!(back, value);
    }
}
