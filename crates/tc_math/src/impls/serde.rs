use core::fmt::{self, Formatter};
use core::marker::PhantomData;

use serde_core::de::{Error, SeqAccess, Visitor};
use serde_core::ser::SerializeTuple;
use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Element, Vector};

impl<T: Serialize, const D: usize> Serialize for Vector<T, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(D)?;
        for value in &self.0 {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

struct VectorVisitor<T, const D: usize>(PhantomData<T>);

impl<'de, T, const D: usize> Visitor<'de> for VectorVisitor<T, D>
where
    T: Element + Deserialize<'de>,
{
    type Value = Vector<T, D>;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} components", D)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut out = [T::default(); D];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<T>()?.is_some() {
            return Err(Error::invalid_length(D + 1, &self));
        }
        Ok(Vector(out))
    }
}

impl<'de, T, const D: usize> Deserialize<'de> for Vector<T, D>
where
    T: Element + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(D, VectorVisitor(PhantomData))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{FVec2, IMat2, Mat2, vec2};

    #[test]
    fn json() {
        let v: FVec2 = vec2(0.5, -2.0);
        let text = serde_json::to_string(&v).unwrap();
        assert_eq!(text, "[0.5,-2.0]");
        assert_eq!(serde_json::from_str::<FVec2>(&text).unwrap(), v);

        let m: IMat2 = Mat2::from_rows([[1, 2], [3, 4]]);
        let text = serde_json::to_string(&m).unwrap();
        assert_eq!(text, "[[1,3],[2,4]]");
        assert_eq!(serde_json::from_str::<IMat2>(&text).unwrap(), m);

        assert!(serde_json::from_str::<FVec2>("[1.0]").is_err());
        assert!(serde_json::from_str::<FVec2>("[1.0,2.0,3.0]").is_err());
    }
}
