use crate::{Scalar, Vector};
use core::{fmt, marker::PhantomData};
use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

// serialized as a fixed-length sequence, `[1, 2, 3]` in JSON
impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for value in self.iter() {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

struct VectorVisitor<T, const N: usize>(PhantomData<fn() -> T>);

impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    type Value = Vector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a sequence of {} numbers", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut out = Vector::<T, N>::zero();
        for i in 0..N {
            out[i] = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod test {
    use crate::{vec2, vec3, Float2d, Int3d, Vector};

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&vec3(1, 2, 3)).unwrap(), "[1,2,3]");
        assert_eq!(serde_json::to_string(&vec2(0.5f32, -2.0)).unwrap(), "[0.5,-2.0]");
    }

    #[test]
    fn test_deserialize() {
        let v: Int3d = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(v, vec3(1, 2, 3));

        let v: Vector<u8, 5> = serde_json::from_str("[5,4,3,2,1]").unwrap();
        assert_eq!(v.to_array(), [5, 4, 3, 2, 1]);

        let v = vec2(1.25f32, 1e-3);
        let json = serde_json::to_string_pretty(&v).unwrap();
        assert_eq!(serde_json::from_str::<Float2d>(&json).unwrap(), v);
    }

    #[test]
    fn test_deserialize_wrong_length() {
        let err = serde_json::from_str::<Float2d>("[1]").unwrap_err();
        println!("{}", err);
        assert!(err.to_string().contains("invalid length 1"));

        assert!(serde_json::from_str::<Float2d>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Float2d>("{\"x\": 1}").is_err());
    }
}
