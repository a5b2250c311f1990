//! Serde integration: a set serializes as a plain sequence of keys and
//! deserializes by reinsertion, so the wire form never encodes directory
//! layout. Duplicate keys in the input fold into one.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::set::LinearHashSet;

impl<K, const N: usize, S> Serialize for LinearHashSet<K, N, S>
where
    K: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K, const N: usize, S> Deserialize<'de> for LinearHashSet<K, N, S>
where
    K: Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor<K, const N: usize, S> {
            marker: PhantomData<LinearHashSet<K, N, S>>,
        }

        impl<'de, K, const N: usize, S> Visitor<'de> for SetVisitor<K, N, S>
        where
            K: Deserialize<'de> + Hash + Eq,
            S: BuildHasher + Default,
        {
            type Value = LinearHashSet<K, N, S>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence of keys")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = LinearHashSet::with_hasher(S::default());
                while let Some(key) = seq.next_element()? {
                    set.insert(key);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor {
            marker: PhantomData,
        })
    }
}
