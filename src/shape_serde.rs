// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::dimension::{Shape, Strides};

fn serialize_values<T, Se, const N: usize>(values: &[T; N], serializer: Se) -> Result<Se::Ok, Se::Error>
where
    T: Serialize,
    Se: Serializer,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for value in values {
        tuple.serialize_element(value)?;
    }
    tuple.end()
}

struct ValuesVisitor<T, const N: usize> {
    _marker: PhantomData<T>,
}

impl<'de, T, const N: usize> Visitor<'de> for ValuesVisitor<T, N>
where
    T: Deserialize<'de> + Copy + Default,
{
    type Value = [T; N];

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of {} values", N)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<[T; N], A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = [T::default(); N];
        for (i, value) in values.iter_mut().enumerate() {
            *value = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(values)
    }
}

fn deserialize_values<'de, T, D, const N: usize>(deserializer: D) -> Result<[T; N], D::Error>
where
    T: Deserialize<'de> + Copy + Default,
    D: Deserializer<'de>,
{
    deserializer.deserialize_tuple(N, ValuesVisitor { _marker: PhantomData })
}

/// **Requires crate feature `"serde"`**
impl<const N: usize> Serialize for Shape<N> {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        serialize_values(self.as_array(), serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, const N: usize> Deserialize<'de> for Shape<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_values(deserializer).map(Shape::new)
    }
}

/// **Requires crate feature `"serde"`**
impl<const N: usize> Serialize for Strides<N> {
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where
        Se: Serializer,
    {
        serialize_values(self.as_array(), serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, const N: usize> Deserialize<'de> for Strides<N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_values(deserializer).map(Strides::new)
    }
}
