//! Serde support for values and models.
//!
//! A model serializes as a map in declaration order. Deserialization accepts
//! only a map whose values are numbers or strings; document order becomes
//! declaration order.

use std::fmt;
use std::sync::Arc;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{EnumModel, EnumValue};

/// Largest integer an f64 holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for EnumValue {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "guarded: only integral values within the exact f64 range are cast"
    )]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EnumValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            EnumValue::Number(n) => serializer.serialize_f64(*n),
            EnumValue::Str(s) => serializer.serialize_str(s),
        }
    }
}

struct EnumValueVisitor;

impl Visitor<'_> for EnumValueVisitor {
    type Value = EnumValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EnumValue, E> {
        Ok(EnumValue::from(v))
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "enum member values are small integers; script hosts store them as f64 too"
    )]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EnumValue, E> {
        Ok(EnumValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<EnumValue, E> {
        Ok(EnumValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<EnumValue, E> {
        Ok(EnumValue::Str(Arc::from(v)))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<EnumValue, E> {
        Ok(EnumValue::Str(Arc::from(v)))
    }
}

impl<'de> Deserialize<'de> for EnumValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EnumValueVisitor)
    }
}

impl Serialize for EnumModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(&**key, value)?;
        }
        map.end()
    }
}

struct EnumModelVisitor;

impl<'de> Visitor<'de> for EnumModelVisitor {
    type Value = EnumModel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping enum keys to numbers or strings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<EnumModel, A::Error> {
        let mut builder = EnumModel::builder();
        while let Some((key, value)) = access.next_entry::<String, EnumValue>()? {
            builder = builder.entry(key, value);
        }
        builder.build().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for EnumModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EnumModelVisitor)
    }
}
