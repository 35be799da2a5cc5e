use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Bag;

/// Serialized as a map from member to occurrences.
impl<E, S> Serialize for Bag<E, S>
where
    E: Serialize,
{
    fn serialize<T: Serializer>(&self, serializer: T) -> Result<T::Ok, T::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Zero counts are rejected, as [`Bag::try_add`] would.
impl<'de, E, S> Deserialize<'de> for Bag<E, S>
where
    E: Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let counts = IndexMap::<E, usize, S>::deserialize(deserializer)?;
        let mut bag = Bag::with_capacity_and_hasher(counts.len(), S::default());
        for (member, occurrences) in counts {
            bag.try_add(member, occurrences).map_err(D::Error::custom)?;
        }
        Ok(bag)
    }
}
