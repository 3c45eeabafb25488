use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::text::{self, FromStringMode};
use crate::{Container, ContainerInsert, FieldAt, FieldCategory, Reflect, ReflectError, Structure};

// -----------------------------------------------------------------------------
// Interface

/// A uniform view of one reflected value.
///
/// `R` is `&T` or `&mut T`, and methods appear depending on the category of
/// `T`: field access for [`Structure`]s, element access for [`Container`]s.
/// Text conversion works for every category.
///
/// # Examples
///
/// ```
/// use tc_reflect::{FieldCategory, FromStringMode, Interface, derive::Structure};
///
/// #[derive(Structure, Default, Debug, PartialEq)]
/// struct Spawn {
///     tile: u32,
///     #[reflect(optional)]
///     tags: Vec<String>,
/// }
///
/// let mut spawn = Spawn::default();
/// let mut iface = Interface::new_mut(&mut spawn);
/// iface.from_string("{tile = 3}", FromStringMode::Full).unwrap();
///
/// assert_eq!(iface.field_len(), 2);
/// assert_eq!(iface.field_name(1), "tags");
/// assert_eq!(iface.field_name(5), "N/A");
/// assert_eq!(iface.field_category(1), FieldCategory::Optional);
/// assert_eq!(iface.field_index_from_name("tile"), Some(0));
/// assert_eq!(*iface.field::<0>().value(), 3);
/// assert_eq!(iface.to_string(), "{tile=3,tags=[]}");
/// ```
#[derive(Clone, Copy)]
pub struct Interface<R> {
    target: R,
}

impl<'a, T: Reflect + ?Sized> Interface<&'a T> {
    #[inline]
    pub const fn new(target: &'a T) -> Self {
        Self { target }
    }
}

impl<'a, T: Reflect + ?Sized> Interface<&'a mut T> {
    #[inline]
    pub const fn new_mut(target: &'a mut T) -> Self {
        Self { target }
    }
}

impl<R> Interface<R>
where
    R: Deref,
    R::Target: Reflect,
{
    /// The bound value.
    #[inline]
    pub fn value(&self) -> &R::Target {
        &self.target
    }

    /// Gives the underlying reference back.
    #[inline]
    pub fn into_inner(self) -> R {
        self.target
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.target.type_name()
    }
}

impl<R> Interface<R>
where
    R: DerefMut,
    R::Target: Reflect,
{
    #[inline]
    pub fn value_mut(&mut self) -> &mut R::Target {
        &mut self.target
    }

    /// Parses `text` into the bound value.
    ///
    /// Structures are updated in place, field by field. Containers are cleared
    /// first. On error the value may be partially updated.
    pub fn from_string(&mut self, text: &str, mode: FromStringMode) -> Result<(), ReflectError> {
        crate::text::read_text(&mut *self.target, text, mode)
    }
}

/// Prints the text form, see [`to_string`].
impl<R> fmt::Display for Interface<R>
where
    R: Deref,
    R::Target: Reflect,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        text::write_value(&*self.target, &mut out);
        f.write_str(&out)
    }
}

// -----------------------------------------------------------------------------
// Structure

impl<R> Interface<R>
where
    R: Deref,
    R::Target: Structure,
{
    #[inline]
    pub fn field_len(&self) -> usize {
        self.target.field_len()
    }

    /// The name of field `index`, or `"N/A"` if there is no such field.
    #[inline]
    pub fn field_name(&self, index: usize) -> &'static str {
        self.target.name_at(index).unwrap_or("N/A")
    }

    /// The category of field `index`, [`FieldCategory::Mandatory`] if there
    /// is no such field.
    #[inline]
    pub fn field_category(&self, index: usize) -> FieldCategory {
        self.target.category_at(index).unwrap_or_default()
    }

    #[inline]
    pub fn field_index_from_name(&self, name: &str) -> Option<usize> {
        self.target.index_of(name)
    }

    /// A view of field `I`.
    #[inline]
    pub fn field<const I: usize>(&self) -> Interface<&<R::Target as FieldAt<I>>::Field>
    where
        R::Target: FieldAt<I>,
    {
        Interface::new(<R::Target as FieldAt<I>>::field_ref(&self.target))
    }

    /// A mutable view of field `I`.
    #[inline]
    pub fn field_mut<const I: usize>(&mut self) -> Interface<&mut <R::Target as FieldAt<I>>::Field>
    where
        R: DerefMut,
        R::Target: FieldAt<I>,
    {
        Interface::new_mut(<R::Target as FieldAt<I>>::field_mut(&mut self.target))
    }
}

// -----------------------------------------------------------------------------
// Container

impl<R> Interface<R>
where
    R: Deref,
    R::Target: Container,
{
    #[inline]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Calls `func` with a view of every element.
    pub fn for_each_element(&self, mut func: impl FnMut(Interface<&dyn Reflect>)) {
        self.target
            .for_each_element(&mut |element| func(Interface::new(element)));
    }

    /// Calls `func` with a mutable view of every element.
    pub fn for_each_element_mut(&mut self, mut func: impl FnMut(Interface<&mut dyn Reflect>))
    where
        R: DerefMut,
    {
        self.target
            .for_each_element_mut(&mut |element| func(Interface::new_mut(element)));
    }
}

impl<R> Interface<R>
where
    R: DerefMut,
    R::Target: ContainerInsert,
{
    /// Inserts a copy of `element`.
    #[inline]
    pub fn insert(&mut self, element: &<R::Target as ContainerInsert>::Element)
    where
        <R::Target as ContainerInsert>::Element: Clone,
    {
        self.target.insert(element);
    }

    #[inline]
    pub fn insert_move(&mut self, element: <R::Target as ContainerInsert>::Element) {
        self.target.insert_move(element);
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// The text form of `value`.
///
/// ```
/// use tc_reflect::to_string;
///
/// assert_eq!(to_string(&vec![(1_u8, true)]), "[{0=1,1=true}]");
/// ```
pub fn to_string<T: Reflect + ?Sized>(value: &T) -> String {
    let mut out = String::new();
    text::write_value(value, &mut out);
    out
}

/// Parses `text` into `value`, see [`Interface::from_string`].
///
/// ```
/// use tc_reflect::{FromStringMode, from_string};
///
/// let mut list = vec![9, 9, 9];
/// from_string(&mut list, "[1, 2]", FromStringMode::Full).unwrap();
/// assert_eq!(list, [1, 2]);
/// ```
pub fn from_string<T: Reflect + ?Sized>(
    value: &mut T,
    text: &str,
    mode: FromStringMode,
) -> Result<(), ReflectError> {
    Interface::new_mut(value).from_string(text, mode)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Interface;
    use crate::{FieldCategory, Reflect};

    #[test]
    fn container_view() {
        let mut list = vec![1_i32, 2];
        let mut iface = Interface::new_mut(&mut list);
        iface.insert(&3);
        iface.insert_move(4);
        assert_eq!(iface.len(), 4);

        iface.for_each_element_mut(|mut element| {
            *element.value_mut().downcast_mut::<i32>().unwrap() *= 2;
        });

        let mut names = Vec::new();
        Interface::new(&list).for_each_element(|element| names.push(element.to_string()));
        assert_eq!(names, ["2", "4", "6", "8"]);
    }

    #[test]
    fn structure_view() {
        let pair = (String::from("k"), 0.5_f64);
        let iface = Interface::new(&pair);
        assert_eq!(iface.field_len(), 2);
        assert_eq!(iface.field_name(0), "0");
        assert_eq!(iface.field_name(2), "N/A");
        assert_eq!(iface.field_category(9), FieldCategory::Mandatory);
        assert_eq!(iface.field_index_from_name("1"), Some(1));
        assert_eq!(iface.field_index_from_name("2"), None);
        assert_eq!(iface.field::<0>().to_string(), r#""k""#);
        assert_eq!(iface.field::<1>().type_name(), "double");
    }

    #[test]
    fn dynamic_view() {
        let value: Box<dyn Reflect> = Box::new(vec![true]);
        let iface = Interface::new(&*value);
        assert_eq!(iface.type_name(), "Vec");
        assert_eq!(iface.to_string(), "[true]");
        assert_eq!(iface.into_inner().downcast_ref::<Vec<bool>>(), Some(&vec![true]));
    }
}
