use crate::{Categorized, Reflect, ReflectError, kind};

// -----------------------------------------------------------------------------
// Container

/// A value holding any number of elements of one type.
///
/// Arrays, sets and maps all look the same here: elements are visited in
/// iteration order and new ones are added with an insertion that does what
/// the container does naturally (push back for sequences, insert for sets,
/// insert the `(key, value)` pair for maps).
///
/// # Examples
///
/// ```
/// use tc_reflect::{Container, Reflect};
///
/// let mut list = vec![1_i32, 2, 3];
/// let mut sum = 0;
/// list.for_each_element(&mut |element| {
///     sum += element.downcast_ref::<i32>().unwrap();
/// });
/// assert_eq!(sum, 6);
///
/// list.for_each_element_mut(&mut |element| {
///     *element.downcast_mut::<i32>().unwrap() *= 10;
/// });
/// assert_eq!(list, [10, 20, 30]);
/// ```
pub trait Container: Reflect + Categorized<Kind = kind::Container> {
    /// Number of elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Calls `func` with every element, in iteration order.
    fn for_each_element(&self, func: &mut dyn FnMut(&dyn Reflect));

    /// Calls `func` with every element, allowing changes.
    ///
    /// Hashed and ordered containers take their elements out and insert them
    /// back, so the iteration order may change afterwards.
    fn for_each_element_mut(&mut self, func: &mut dyn FnMut(&mut dyn Reflect));

    /// Creates a default element, fills it with `parse` and inserts it.
    ///
    /// Nothing is inserted if `parse` fails.
    fn insert_parsed(
        &mut self,
        parse: &mut dyn FnMut(&mut dyn Reflect) -> Result<(), ReflectError>,
    ) -> Result<(), ReflectError>;
}

/// Typed insertion into a [`Container`].
pub trait ContainerInsert: Container {
    type Element: Reflect;

    /// Inserts `element`.
    ///
    /// For maps the element is a `(key, value)` pair, and an existing key
    /// has its value replaced.
    fn insert_move(&mut self, element: Self::Element);

    /// Inserts a copy of `element`.
    #[inline]
    fn insert(&mut self, element: &Self::Element)
    where
        Self::Element: Clone,
    {
        self.insert_move(element.clone());
    }
}
