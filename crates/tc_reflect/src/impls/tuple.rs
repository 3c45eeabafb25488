use crate::{
    Categorized, FieldAt, FieldCategory, FieldInfo, Reflect, ReflectMut, ReflectRef, Structure, StructureInfo, kind,
};

static PAIR_INFO: StructureInfo = StructureInfo::new(&[
    FieldInfo::new("0", FieldCategory::Mandatory),
    FieldInfo::new("1", FieldCategory::Mandatory),
]);

/// Pairs are structures with the fields `0` and `1`.
///
/// This is also how map entries are written: `{0=key,1=value}`.
impl<A: Reflect, B: Reflect> Categorized for (A, B) {
    type Kind = kind::Structure;
}

impl<A: Reflect, B: Reflect> Reflect for (A, B) {
    #[inline]
    fn type_name(&self) -> &'static str {
        "pair"
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

impl<A: Reflect, B: Reflect> Structure for (A, B) {
    #[inline]
    fn structure_info(&self) -> &'static StructureInfo {
        &PAIR_INFO
    }

    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        match index {
            0 => Some(&self.0),
            1 => Some(&self.1),
            _ => None,
        }
    }

    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        match index {
            0 => Some(&mut self.0),
            1 => Some(&mut self.1),
            _ => None,
        }
    }
}

impl<A: Reflect, B: Reflect> FieldAt<0> for (A, B) {
    type Field = A;

    #[inline]
    fn field_ref(&self) -> &A {
        &self.0
    }

    #[inline]
    fn field_mut(&mut self) -> &mut A {
        &mut self.0
    }
}

impl<A: Reflect, B: Reflect> FieldAt<1> for (A, B) {
    type Field = B;

    #[inline]
    fn field_ref(&self) -> &B {
        &self.1
    }

    #[inline]
    fn field_mut(&mut self) -> &mut B {
        &mut self.1
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{FieldAt, Reflect, Structure};

    #[test]
    fn pair_fields() {
        let mut pair = (1_u8, String::from("one"));
        assert_eq!(pair.type_name(), "pair");
        assert_eq!(pair.field_len(), 2);
        assert_eq!(pair.index_of("1"), Some(1));
        assert!(pair.field_at(2).is_none());
        assert_eq!(pair.field_at(0).unwrap().downcast_ref::<u8>(), Some(&1));

        FieldAt::<1>::field_mut(&mut pair).push('!');
        assert_eq!(FieldAt::<1>::field_ref(&pair), "one!");
    }
}
