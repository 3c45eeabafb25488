//! Vectors are structures with the fields `x`, `y`, `z` and `w`.
//!
//! A matrix is a vector of columns, so it nests: `{x={x=1,y=0},y={x=0,y=1}}`.

use tc_math::{Element, Vector};

use crate::{
    Categorized, FieldAt, FieldCategory, FieldInfo, Reflect, ReflectMut, ReflectRef, Structure, StructureInfo, kind,
};

macro_rules! impl_vector {
    ($dim:literal => $name:literal, $info:ident: $($index:literal $field:literal),*) => {
        static $info: StructureInfo = StructureInfo::new(&[
            $(FieldInfo::new($field, FieldCategory::Mandatory)),*
        ]);

        impl<T: Element + Reflect> Categorized for Vector<T, $dim> {
            type Kind = kind::Structure;
        }

        impl<T: Element + Reflect> Reflect for Vector<T, $dim> {
            #[inline]
            fn type_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Structure(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Structure(self)
            }
        }

        impl<T: Element + Reflect> Structure for Vector<T, $dim> {
            #[inline]
            fn structure_info(&self) -> &'static StructureInfo {
                &$info
            }

            #[inline]
            fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
                self.iter().nth(index).map(|value| value as &dyn Reflect)
            }

            #[inline]
            fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                self.iter_mut().nth(index).map(|value| value as &mut dyn Reflect)
            }
        }

        $(
            impl<T: Element + Reflect> FieldAt<$index> for Vector<T, $dim> {
                type Field = T;

                #[inline]
                fn field_ref(&self) -> &T {
                    &self[$index]
                }

                #[inline]
                fn field_mut(&mut self) -> &mut T {
                    &mut self[$index]
                }
            }
        )*
    };
}

impl_vector!(2 => "vec2", VEC2_INFO: 0 "x", 1 "y");
impl_vector!(3 => "vec3", VEC3_INFO: 0 "x", 1 "y", 2 "z");
impl_vector!(4 => "vec4", VEC4_INFO: 0 "x", 1 "y", 2 "z", 3 "w");

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use tc_math::{FMat2, FVec3, IVec2, Mat2, UVec4, vec2, vec3, vec4};

    use crate::FromStringMode::{Full, Partial};
    use crate::{Interface, Reflect, from_string, to_string};

    #[test]
    fn vectors() {
        let v: IVec2 = vec2(1, -2);
        assert_eq!(v.type_name(), "vec2");
        assert_eq!(to_string(&v), "{x=1,y=-2}");

        let mut back = IVec2::default();
        from_string(&mut back, "{y=-2, x=1}", Full).unwrap();
        assert_eq!(back, v);

        let mut color: UVec4 = vec4(1, 2, 3, 4);
        from_string(&mut color, "{w=255}", Partial).unwrap();
        assert_eq!(color, vec4(1, 2, 3, 255));
        let err = from_string(&mut color, "{w=255}", Full).unwrap_err();
        assert!(err.to_string().ends_with("Following fields are missing: `x`, `y`, `z`."));
    }

    #[test]
    fn matrices_nest() {
        let m: FMat2 = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let text = to_string(&m);
        assert_eq!(text, "{x={x=1,y=3},y={x=2,y=4}}");

        let mut back = FMat2::default();
        from_string(&mut back, &text, Full).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn typed_fields() {
        let mut v: FVec3 = vec3(0.5, 1.5, 2.5);
        let mut iface = Interface::new_mut(&mut v);
        assert_eq!(iface.field_name(2), "z");
        *iface.field_mut::<1>().value_mut() = 7.0;
        assert_eq!(*iface.field::<1>().value(), 7.0);
        assert_eq!(v, vec3(0.5, 7.0, 2.5));
    }
}
