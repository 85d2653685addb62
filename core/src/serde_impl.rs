//! Serde support, behind the `serde` feature.
//!
//! A sequence serializes as a list of its slots; holes become `None` (`null`
//! in JSON) and deserialize back into holes.

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sequence::IndexedSequence;

impl<T: Serialize> Serialize for IndexedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.with_slots(|slots| serializer.collect_seq(slots.iter()))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for IndexedSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let slots = Vec::<Option<T>>::deserialize(deserializer)?;
        Ok(Self::from_slots(slots))
    }
}
