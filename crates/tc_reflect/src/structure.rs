use std::sync::OnceLock;

use tc_utils::hash::HashMap;

use crate::{Categorized, Reflect, kind};

// -----------------------------------------------------------------------------
// Field metadata

/// Whether a field must be present when parsing in [`FromStringMode::Full`].
///
/// [`FromStringMode::Full`]: crate::FromStringMode::Full
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    #[default]
    Mandatory,
    Optional,
}

/// The name and category of one structure field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub category: FieldCategory,
}

impl FieldInfo {
    #[inline]
    pub const fn new(name: &'static str, category: FieldCategory) -> Self {
        Self { name, category }
    }
}

/// The static description of a structure type: its fields in declaration order.
///
/// One `StructureInfo` lives in a `static` per type, the name lookup table
/// is built on the first [`StructureInfo::index_of`] call and reused after.
///
/// ```
/// use tc_reflect::{FieldCategory, FieldInfo, StructureInfo};
///
/// static INFO: StructureInfo = StructureInfo::new(&[
///     FieldInfo::new("x", FieldCategory::Optional),
///     FieldInfo::new("y", FieldCategory::Mandatory),
/// ]);
///
/// assert_eq!(INFO.len(), 2);
/// assert_eq!(INFO.index_of("y"), Some(1));
/// assert_eq!(INFO.index_of("z"), None);
/// ```
#[derive(Debug)]
pub struct StructureInfo {
    fields: &'static [FieldInfo],
    index: OnceLock<HashMap<&'static str, usize>>,
}

impl StructureInfo {
    #[inline]
    pub const fn new(fields: &'static [FieldInfo]) -> Self {
        Self {
            fields,
            index: OnceLock::new(),
        }
    }

    #[inline]
    pub const fn fields(&self) -> &'static [FieldInfo] {
        self.fields
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn field(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index)
    }

    /// The index of the field called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let index = self.index.get_or_init(|| {
            log::debug!("building field index for {:?}", self.names());
            self.fields
                .iter()
                .enumerate()
                .map(|(i, field)| (field.name, i))
                .collect()
        });
        index.get(name).copied()
    }

    fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }
}

// -----------------------------------------------------------------------------
// Structure

/// A value with a fixed list of named fields.
///
/// Fields are addressed by their declaration index, which is also the order
/// they are printed in. Use [`derive::Structure`](crate::derive::Structure)
/// or [`structure!`](crate::structure) instead of writing this by hand.
///
/// # Examples
///
/// ```
/// use tc_reflect::{FieldCategory, Structure, derive::Structure};
///
/// #[derive(Structure, Default)]
/// struct Tile {
///     id: u16,
///     #[reflect(optional)]
///     solid: bool,
/// }
///
/// let tile = Tile { id: 3, solid: true };
/// assert_eq!(tile.field_len(), 2);
/// assert_eq!(tile.name_at(1), Some("solid"));
/// assert_eq!(tile.category_at(1), Some(FieldCategory::Optional));
/// assert_eq!(tile.index_of("id"), Some(0));
/// assert_eq!(tile.field_at(0).unwrap().downcast_ref::<u16>(), Some(&3));
/// ```
pub trait Structure: Reflect + Categorized<Kind = kind::Structure> {
    /// The static field list of this type.
    fn structure_info(&self) -> &'static StructureInfo;

    /// The field at `index`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Mutable version of [`Structure::field_at`].
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    #[inline]
    fn field_len(&self) -> usize {
        self.structure_info().len()
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&'static str> {
        self.structure_info().field(index).map(|field| field.name)
    }

    #[inline]
    fn category_at(&self, index: usize) -> Option<FieldCategory> {
        self.structure_info().field(index).map(|field| field.category)
    }

    #[inline]
    fn index_of(&self, name: &str) -> Option<usize> {
        self.structure_info().index_of(name)
    }
}

/// Typed access to the field at index `I`.
pub trait FieldAt<const I: usize>: Structure {
    type Field: Reflect;

    fn field_ref(&self) -> &Self::Field;

    fn field_mut(&mut self) -> &mut Self::Field;
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FieldCategory, FieldInfo, StructureInfo};

    static INFO: StructureInfo = StructureInfo::new(&[
        FieldInfo::new("alpha", FieldCategory::Mandatory),
        FieldInfo::new("beta", FieldCategory::Optional),
        FieldInfo::new("gamma", FieldCategory::Mandatory),
    ]);

    #[test]
    fn lookup() {
        assert_eq!(INFO.len(), 3);
        assert_eq!(INFO.index_of("gamma"), Some(2));
        assert_eq!(INFO.index_of("alpha"), Some(0));
        assert_eq!(INFO.index_of("Alpha"), None);
        assert_eq!(INFO.field(1).map(|f| f.category), Some(FieldCategory::Optional));
        assert!(INFO.field(3).is_none());
    }

    #[test]
    fn lookup_from_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| INFO.index_of("beta")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some(1));
        }
    }
}
