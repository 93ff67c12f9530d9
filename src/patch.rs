//! Tri-state optional fields for partial updates.
//!
//! A mutable attribute of an update request is either left alone or set to a
//! new value; `Patch<T>` keeps those states apart all the way to the protobuf
//! boundary. An omitted JSON field and an explicit `null` both mean "do not
//! touch this field"; any concrete value is forwarded, including the zero
//! value of the type (`Set("")` and `Set(0)` are not `Unset`).

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    /// Convert to the protobuf optional-field representation. `Unset` maps
    /// to the field being absent on the wire, never to a cleared value.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Unset, Self::Set))
    }
}
