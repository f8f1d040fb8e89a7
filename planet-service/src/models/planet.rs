use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// A solar-system body as stored in the `planets` collection.
///
/// Seed data is loaded with JavaScript tooling, so `id` may arrive as a BSON
/// double rather than an int32. Missing text fields read as empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    #[serde(deserialize_with = "deserialize_identifier")]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub velocity: String,
    #[serde(default)]
    pub distance: String,
}

/// Accepts an integral number of any width, a float with no fractional part,
/// or a string holding a decimal integer.
pub fn deserialize_identifier<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(IdentifierVisitor)
}

struct IdentifierVisitor;

impl<'de> de::Visitor<'de> for IdentifierVisitor {
    type Value = i32;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer identifier")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
        i32::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
        if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 {
            Ok(v as i32)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i32, E> {
        v.trim()
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}
