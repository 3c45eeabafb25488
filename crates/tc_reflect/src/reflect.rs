use core::any::{Any, TypeId};
use core::fmt;

use crate::{Container, Primitive, Structure};

// -----------------------------------------------------------------------------
// Reflect

/// The entry point of runtime reflection.
///
/// Every reflected type belongs to exactly one category, and its
/// [`reflect_ref`](Reflect::reflect_ref) names it:
///
/// - [`Primitive`]: printed and parsed as a single token, e.g. `i32`, `String`.
/// - [`Structure`]: a fixed list of named fields, printed as `{a=1,b=2}`.
/// - [`Container`]: a variable number of elements, printed as `[1,2,3]`.
///
/// The category traits require a matching [`Categorized::Kind`], and a type
/// has a single `Categorized` impl, so it cannot implement two of them.
///
/// Structures usually come from [`derive::Structure`](crate::derive::Structure)
/// or [`structure!`](crate::structure), primitives and containers of the
/// standard library are implemented by this crate.
///
/// # Examples
///
/// ```
/// use tc_reflect::{Reflect, ReflectRef};
///
/// let value: &dyn Reflect = &vec![1_u8, 2, 3];
/// assert_eq!(value.type_name(), "Vec");
/// assert!(matches!(value.reflect_ref(), ReflectRef::Container(_)));
/// assert_eq!(value.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
/// ```
pub trait Reflect: Any + Send + Sync {
    /// Short human-readable name of the type, e.g. `int` or `Point`.
    fn type_name(&self) -> &'static str;

    /// Views `self` as its category.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Mutable version of [`Reflect::reflect_ref`].
    fn reflect_mut(&mut self) -> ReflectMut<'_>;
}

impl dyn Reflect {
    /// Whether the underlying value is a `T`.
    #[inline]
    pub fn is<T: Reflect>(&self) -> bool {
        let any: &dyn Any = self;
        Any::type_id(any) == TypeId::of::<T>()
    }

    /// Returns the underlying value if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }

    /// Returns the underlying value if it is a `T`.
    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = String::new();
        crate::text::write_value(self, &mut text);
        write!(f, "{}({text})", self.type_name())
    }
}

// -----------------------------------------------------------------------------
// Category markers

/// Markers for [`Categorized::Kind`].
pub mod kind {
    mod sealed {
        pub trait Sealed {}
    }

    /// Implemented by the three markers of this module only.
    pub trait Kind: sealed::Sealed {
        const KIND: crate::ReflectKind;
    }

    /// Marks a [`Primitive`](crate::Primitive).
    pub enum Primitive {}

    /// Marks a [`Structure`](crate::Structure).
    pub enum Structure {}

    /// Marks a [`Container`](crate::Container).
    pub enum Container {}

    macro_rules! impl_kind {
        ($($marker:ident)*) => {$(
            impl sealed::Sealed for $marker {}

            impl Kind for $marker {
                const KIND: crate::ReflectKind = crate::ReflectKind::$marker;
            }
        )*};
    }

    impl_kind!(Primitive Structure Container);
}

/// Names the one category of a type.
///
/// [`Primitive`], [`Structure`] and [`Container`] each require their own
/// marker here, so a second category impl on the same type is rejected.
///
/// ```compile_fail
/// use tc_reflect::{Cursor, Primitive, Reflect, Structure, StructureInfo, impl_reflect_primitive};
///
/// struct Flag(bool);
///
/// impl Primitive for Flag {
///     fn write_text(&self, out: &mut String) {
///         out.push(if self.0 { 'Y' } else { 'N' });
///     }
///
///     fn read_text(&mut self, _: &mut Cursor<'_>) -> bool {
///         false
///     }
/// }
///
/// impl_reflect_primitive!(Flag, "flag");
///
/// // `Flag` is already a primitive.
/// impl Structure for Flag {
///     fn structure_info(&self) -> &'static StructureInfo {
///         unimplemented!()
///     }
///
///     fn field_at(&self, _: usize) -> Option<&dyn Reflect> {
///         None
///     }
///
///     fn field_at_mut(&mut self, _: usize) -> Option<&mut dyn Reflect> {
///         None
///     }
/// }
/// ```
///
/// ```
/// use tc_reflect::{Categorized, ReflectKind, kind::Kind};
///
/// fn kind_of<T: Categorized>(_: &T) -> ReflectKind {
///     T::Kind::KIND
/// }
///
/// assert_eq!(kind_of(&1_i32), ReflectKind::Primitive);
/// assert_eq!(kind_of(&vec![1_i32]), ReflectKind::Container);
/// ```
pub trait Categorized {
    type Kind: kind::Kind;
}

// -----------------------------------------------------------------------------
// Category views

/// An immutable view of a value as its category.
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Primitive(&'a dyn Primitive),
    Structure(&'a dyn Structure),
    Container(&'a dyn Container),
}

/// A mutable view of a value as its category.
pub enum ReflectMut<'a> {
    Primitive(&'a mut dyn Primitive),
    Structure(&'a mut dyn Structure),
    Container(&'a mut dyn Container),
}

impl ReflectRef<'_> {
    /// The category as a [`ReflectKind`].
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Structure(_) => ReflectKind::Structure,
            Self::Container(_) => ReflectKind::Container,
        }
    }
}

impl ReflectMut<'_> {
    /// The category as a [`ReflectKind`].
    #[inline]
    pub fn kind(&self) -> ReflectKind {
        match self {
            Self::Primitive(_) => ReflectKind::Primitive,
            Self::Structure(_) => ReflectKind::Structure,
            Self::Container(_) => ReflectKind::Container,
        }
    }
}

/// The category of a reflected type, without the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Primitive,
    Structure,
    Container,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primitive => "primitive",
            Self::Structure => "structure",
            Self::Container => "container",
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::kind::Kind;
    use super::{Categorized, Reflect, ReflectKind};

    #[test]
    fn downcast() {
        let mut value: Box<dyn Reflect> = Box::new(5_i32);
        assert!(value.is::<i32>());
        assert!(!value.is::<u32>());
        *value.downcast_mut::<i32>().unwrap() += 1;
        assert_eq!(value.downcast_ref::<i32>(), Some(&6));
        assert_eq!(value.downcast_ref::<String>(), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(1.5_f32.reflect_ref().kind(), ReflectKind::Primitive);
        assert_eq!(Vec::<bool>::new().reflect_ref().kind(), ReflectKind::Container);
        assert_eq!((1_u8, 2_u8).reflect_ref().kind(), ReflectKind::Structure);
        assert_eq!(ReflectKind::Container.to_string(), "container");
    }

    fn static_kind<T: Categorized>(_: &T) -> ReflectKind {
        T::Kind::KIND
    }

    #[test]
    fn static_kind_matches_view() {
        let text = String::from("a");
        let pair = (1_u8, 2_u8);
        let list = vec![false];
        assert_eq!(static_kind(&text), text.reflect_ref().kind());
        assert_eq!(static_kind(&pair), pair.reflect_ref().kind());
        assert_eq!(static_kind(&list), list.reflect_ref().kind());
    }

    #[test]
    fn debug_prints_text() {
        let value: &dyn Reflect = &vec![String::from("a")];
        assert_eq!(format!("{value:?}"), r#"Vec(["a"])"#);
    }
}
