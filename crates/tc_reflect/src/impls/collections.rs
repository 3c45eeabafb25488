use core::hash::{BuildHasher, Hash};
use core::mem;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use tc_utils::default;
use tc_utils::hash::hashbrown;

use crate::{Categorized, Container, ContainerInsert, Reflect, ReflectError, ReflectMut, ReflectRef, kind};

macro_rules! impl_reflect_container {
    ([$($gen:tt)*] $ty:ty => $name:literal where [$($bounds:tt)*]) => {
        impl<$($gen)*> Categorized for $ty
        where
            $($bounds)*
        {
            type Kind = kind::Container;
        }

        impl<$($gen)*> Reflect for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn type_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Container(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Container(self)
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Sequences

macro_rules! impl_sequence {
    ($ty:ident => $name:literal, $push:ident) => {
        impl_reflect_container!([T] $ty<T> => $name where [T: Reflect + Default]);

        impl<T: Reflect + Default> Container for $ty<T> {
            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn clear(&mut self) {
                <$ty<T>>::clear(self);
            }

            fn for_each_element(&self, func: &mut dyn FnMut(&dyn Reflect)) {
                for element in self {
                    func(element);
                }
            }

            fn for_each_element_mut(&mut self, func: &mut dyn FnMut(&mut dyn Reflect)) {
                for element in self {
                    func(element);
                }
            }

            fn insert_parsed(
                &mut self,
                parse: &mut dyn FnMut(&mut dyn Reflect) -> Result<(), ReflectError>,
            ) -> Result<(), ReflectError> {
                let mut element: T = default();
                parse(&mut element)?;
                self.$push(element);
                Ok(())
            }
        }

        impl<T: Reflect + Default> ContainerInsert for $ty<T> {
            type Element = T;

            #[inline]
            fn insert_move(&mut self, element: T) {
                self.$push(element);
            }
        }
    };
}

impl_sequence!(Vec => "Vec", push);
impl_sequence!(VecDeque => "VecDeque", push_back);

// -----------------------------------------------------------------------------
// Sets

macro_rules! impl_set {
    ([$($gen:tt)*] $ty:ty => $name:literal where [$($bounds:tt)*]) => {
        impl_reflect_container!([$($gen)*] $ty => $name where [$($bounds)*]);

        impl<$($gen)*> Container for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }

            fn for_each_element(&self, func: &mut dyn FnMut(&dyn Reflect)) {
                for element in self {
                    func(element);
                }
            }

            fn for_each_element_mut(&mut self, func: &mut dyn FnMut(&mut dyn Reflect)) {
                for mut element in mem::take(self) {
                    func(&mut element);
                    <$ty>::insert(self, element);
                }
            }

            fn insert_parsed(
                &mut self,
                parse: &mut dyn FnMut(&mut dyn Reflect) -> Result<(), ReflectError>,
            ) -> Result<(), ReflectError> {
                let mut element: T = default();
                parse(&mut element)?;
                <$ty>::insert(self, element);
                Ok(())
            }
        }

        impl<$($gen)*> ContainerInsert for $ty
        where
            $($bounds)*
        {
            type Element = T;

            #[inline]
            fn insert_move(&mut self, element: T) {
                <$ty>::insert(self, element);
            }
        }
    };
}

impl_set!([T] BTreeSet<T> => "BTreeSet" where [T: Reflect + Default + Ord]);
impl_set!([T, S] HashSet<T, S> => "HashSet" where [
    T: Reflect + Default + Eq + Hash,
    S: BuildHasher + Default + Send + Sync + 'static,
]);
impl_set!([T, S] hashbrown::HashSet<T, S> => "HashSet" where [
    T: Reflect + Default + Eq + Hash,
    S: BuildHasher + Default + Send + Sync + 'static,
]);

// -----------------------------------------------------------------------------
// Maps

macro_rules! impl_map {
    ([$($gen:tt)*] $ty:ty => $name:literal where [$($bounds:tt)*]) => {
        impl_reflect_container!([$($gen)*] $ty => $name where [$($bounds)*]);

        /// Elements are `(key, value)` pairs.
        ///
        /// Visiting elements through a shared reference clones each entry.
        impl<$($gen)*> Container for $ty
        where
            $($bounds)*
        {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            #[inline]
            fn clear(&mut self) {
                <$ty>::clear(self);
            }

            fn for_each_element(&self, func: &mut dyn FnMut(&dyn Reflect)) {
                for (key, value) in self {
                    let entry = (key.clone(), value.clone());
                    func(&entry);
                }
            }

            fn for_each_element_mut(&mut self, func: &mut dyn FnMut(&mut dyn Reflect)) {
                for entry in mem::take(self) {
                    let mut entry: (K, V) = entry;
                    func(&mut entry);
                    <$ty>::insert(self, entry.0, entry.1);
                }
            }

            fn insert_parsed(
                &mut self,
                parse: &mut dyn FnMut(&mut dyn Reflect) -> Result<(), ReflectError>,
            ) -> Result<(), ReflectError> {
                let mut entry: (K, V) = default();
                parse(&mut entry)?;
                <$ty>::insert(self, entry.0, entry.1);
                Ok(())
            }
        }

        impl<$($gen)*> ContainerInsert for $ty
        where
            $($bounds)*
        {
            type Element = (K, V);

            #[inline]
            fn insert_move(&mut self, (key, value): (K, V)) {
                <$ty>::insert(self, key, value);
            }
        }
    };
}

impl_map!([K, V] BTreeMap<K, V> => "BTreeMap" where [
    K: Reflect + Default + Clone + Ord,
    V: Reflect + Default + Clone,
]);
impl_map!([K, V, S] HashMap<K, V, S> => "HashMap" where [
    K: Reflect + Default + Clone + Eq + Hash,
    V: Reflect + Default + Clone,
    S: BuildHasher + Default + Send + Sync + 'static,
]);
impl_map!([K, V, S] hashbrown::HashMap<K, V, S> => "HashMap" where [
    K: Reflect + Default + Clone + Eq + Hash,
    V: Reflect + Default + Clone,
    S: BuildHasher + Default + Send + Sync + 'static,
]);

// -----------------------------------------------------------------------------
// Option

impl_reflect_container!([T] Option<T> => "Option" where [T: Reflect + Default]);

/// Holds at most one element, inserting replaces the current one.
impl<T: Reflect + Default> Container for Option<T> {
    #[inline]
    fn len(&self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }

    fn for_each_element(&self, func: &mut dyn FnMut(&dyn Reflect)) {
        if let Some(element) = self {
            func(element);
        }
    }

    fn for_each_element_mut(&mut self, func: &mut dyn FnMut(&mut dyn Reflect)) {
        if let Some(element) = self {
            func(element);
        }
    }

    fn insert_parsed(
        &mut self,
        parse: &mut dyn FnMut(&mut dyn Reflect) -> Result<(), ReflectError>,
    ) -> Result<(), ReflectError> {
        let mut element: T = default();
        parse(&mut element)?;
        *self = Some(element);
        Ok(())
    }
}

impl<T: Reflect + Default> ContainerInsert for Option<T> {
    type Element = T;

    #[inline]
    fn insert_move(&mut self, element: T) {
        *self = Some(element);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

    use tc_utils::hash;

    use crate::FromStringMode::Full;
    use crate::{Container, ContainerInsert, Reflect, from_string, to_string};

    #[test]
    fn sequences() {
        let mut deque: VecDeque<u8> = VecDeque::new();
        from_string(&mut deque, "[3, 1, 2]", Full).unwrap();
        assert_eq!(deque, [3, 1, 2]);
        deque.insert_move(4);
        ContainerInsert::insert(&mut deque, &5);
        assert_eq!(to_string(&deque), "[3,1,2,4,5]");
        assert_eq!(deque.type_name(), "VecDeque");
    }

    #[test]
    fn ordered_set_sorts_and_dedups() {
        let mut set: BTreeSet<i32> = BTreeSet::new();
        from_string(&mut set, "[5, -1, 5, 3]", Full).unwrap();
        assert_eq!(to_string(&set), "[-1,3,5]");

        set.for_each_element_mut(&mut |element| {
            let value = element.downcast_mut::<i32>().unwrap();
            *value = -*value;
        });
        assert_eq!(to_string(&set), "[-5,-3,1]");
    }

    #[test]
    fn maps() {
        let mut map: BTreeMap<String, bool> = BTreeMap::new();
        from_string(&mut map, r#"[{0="b",1=true},{0="a",1=0}]"#, Full).unwrap();
        assert_eq!(to_string(&map), r#"[{0="a",1=false},{0="b",1=true}]"#);

        map.insert_move((String::from("a"), true));
        assert_eq!(map.len(), 2);
        assert!(map["a"]);

        map.for_each_element_mut(&mut |entry| {
            let (_, value) = entry.downcast_mut::<(String, bool)>().unwrap();
            *value = !*value;
        });
        assert_eq!(to_string(&map), r#"[{0="a",1=false},{0="b",1=false}]"#);
    }

    #[test]
    fn hashed() {
        let mut std_map: HashMap<u16, f32> = HashMap::new();
        from_string(&mut std_map, "[{0=1,1=0.5}]", Full).unwrap();
        assert_eq!(to_string(&std_map), "[{0=1,1=0.5}]");

        let mut map: hash::HashMap<u16, f32> = hash::HashMap::default();
        from_string(&mut map, "[{0=1,1=0.5},{0=2,1=1.5}]", Full).unwrap();
        assert_eq!(map.get(&2), Some(&1.5));

        let mut set: hash::HashSet<String> = hash::HashSet::default();
        from_string(&mut set, r#"["x","y","x"]"#, Full).unwrap();
        assert_eq!(Container::len(&set), 2);
        assert!(set.contains("y"));
    }

    #[test]
    fn option() {
        let mut value: Option<i32> = Some(4);
        assert_eq!(to_string(&value), "[4]");
        from_string(&mut value, "[]", Full).unwrap();
        assert_eq!(value, None);
        assert_eq!(to_string(&value), "[]");
        from_string(&mut value, "[1, 2]", Full).unwrap();
        assert_eq!(value, Some(2));
    }
}
