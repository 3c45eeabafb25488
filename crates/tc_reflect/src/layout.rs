//! Vertex attribute layouts computed from structure fields.
//!
//! Every field of a vertex structure becomes one attribute, in declaration
//! order. Fields must be `f32` or float vectors, and must be tightly packed
//! in memory in the same order, which `#[repr(C)]` guarantees.
//!
//! ```
//! use tc_math::{FVec2, FVec4};
//! use tc_reflect::derive::Structure;
//! use tc_reflect::layout;
//!
//! #[derive(Structure, Default)]
//! #[repr(C)]
//! struct Vertex {
//!     pos: FVec2,
//!     color: FVec4,
//! }
//!
//! let attributes = layout::attributes::<Vertex>().unwrap();
//! assert_eq!(attributes[1].name, "color");
//! assert_eq!(attributes[1].components, 4);
//! assert_eq!(attributes[1].offset, 8);
//! assert_eq!(attributes[1].stride, 24);
//! ```

use core::mem::size_of;
use core::ptr;

use thiserror::Error;

use crate::{Reflect, Structure};

/// One vertex attribute, the way a graphics API wants it described.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location, the field index.
    pub index: u32,
    pub name: &'static str,
    /// Number of `f32` components, `1..=4`.
    pub components: u32,
    /// Byte offset of the field in the vertex.
    pub offset: usize,
    /// Size of the whole vertex.
    pub stride: usize,
}

/// The error returned by [`attributes`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LayoutError {
    #[error("Non-float attributes are not supported, field `{field}` is `{type_name}`.")]
    NotFloat {
        field: &'static str,
        type_name: &'static str,
    },

    #[error("Unexpected padding in attribute structure.")]
    Padding,
}

/// Number of `f32` components of a supported attribute type.
fn float_components(field: &dyn Reflect) -> Option<u32> {
    if field.is::<f32>() {
        return Some(1);
    }
    #[cfg(feature = "math")]
    {
        use tc_math::{FVec2, FVec3, FVec4};

        if field.is::<FVec2>() {
            return Some(2);
        }
        if field.is::<FVec3>() {
            return Some(3);
        }
        if field.is::<FVec4>() {
            return Some(4);
        }
    }
    None
}

/// Describes the fields of the vertex type `T` as attributes.
///
/// Fails if a field is not made of `f32`, or if the fields do not cover the
/// vertex exactly, back to back.
pub fn attributes<T: Structure + Default>() -> Result<Vec<VertexAttribute>, LayoutError> {
    let vertex = T::default();
    let stride = size_of::<T>();
    let base = ptr::from_ref(&vertex).addr();

    let mut out = Vec::with_capacity(vertex.field_len());
    let mut offset = 0;
    for (index, info) in vertex.structure_info().fields().iter().enumerate() {
        let Some(field) = vertex.field_at(index) else {
            continue;
        };
        let components = float_components(field).ok_or(LayoutError::NotFloat {
            field: info.name,
            type_name: field.type_name(),
        })?;

        let address = ptr::from_ref(field).cast::<u8>().addr();
        if address.wrapping_sub(base) != offset {
            return Err(LayoutError::Padding);
        }

        out.push(VertexAttribute {
            index: index as u32,
            name: info.name,
            components,
            offset,
            stride,
        });
        offset += components as usize * size_of::<f32>();
    }

    if offset != stride {
        return Err(LayoutError::Padding);
    }
    log::debug!("vertex layout with {} attributes, stride {stride}", out.len());
    Ok(out)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(all(test, feature = "math"))]
mod tests {
    use tc_math::{FVec2, FVec3, IVec2};

    use super::{LayoutError, VertexAttribute, attributes};
    use crate::derive::Structure;
    use crate::{
        Categorized, FieldCategory, FieldInfo, Reflect, ReflectMut, ReflectRef, Structure, StructureInfo, kind,
    };

    #[derive(Structure, Default)]
    #[repr(C)]
    struct Vertex {
        pos: FVec3,
        uv: FVec2,
        light: f32,
    }

    #[derive(Structure, Default)]
    #[repr(C)]
    struct Tile {
        pos: FVec2,
        cell: IVec2,
    }

    #[test]
    fn packed_vertex() {
        let attributes = attributes::<Vertex>().unwrap();
        let expect = |index, name, components, offset| VertexAttribute {
            index,
            name,
            components,
            offset,
            stride: 24,
        };
        assert_eq!(
            attributes,
            [expect(0, "pos", 3, 0), expect(1, "uv", 2, 12), expect(2, "light", 1, 20)]
        );
    }

    #[test]
    fn integer_field() {
        assert_eq!(
            attributes::<Tile>(),
            Err(LayoutError::NotFloat {
                field: "cell",
                type_name: "vec2"
            })
        );
    }

    /// Reflects only two of its three fields.
    #[derive(Default)]
    #[repr(C)]
    struct Sparse {
        a: f32,
        hidden: f32,
        b: f32,
    }

    static SPARSE_INFO: StructureInfo = StructureInfo::new(&[
        FieldInfo::new("a", FieldCategory::Mandatory),
        FieldInfo::new("b", FieldCategory::Mandatory),
    ]);

    impl Categorized for Sparse {
        type Kind = kind::Structure;
    }

    impl Reflect for Sparse {
        fn type_name(&self) -> &'static str {
            "Sparse"
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Structure(self)
        }

        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Structure(self)
        }
    }

    impl Structure for Sparse {
        fn structure_info(&self) -> &'static StructureInfo {
            &SPARSE_INFO
        }

        fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
            match index {
                0 => Some(&self.a),
                1 => Some(&self.b),
                _ => None,
            }
        }

        fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
            match index {
                0 => Some(&mut self.a),
                1 => Some(&mut self.b),
                _ => None,
            }
        }
    }

    #[test]
    fn gap_between_fields() {
        assert_eq!(attributes::<Sparse>(), Err(LayoutError::Padding));
        assert_eq!(Sparse::default().hidden, 0.0);
        assert_eq!(
            LayoutError::Padding.to_string(),
            "Unexpected padding in attribute structure."
        );
    }
}
