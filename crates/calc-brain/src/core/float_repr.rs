//! Serde representation for IEEE-754 values
//!
//! JSON has no infinity or NaN, and `serde_json` writes both as `null`.
//! Finite values stay numbers; non-finite values become the strings
//! `"inf"`, `"-inf"` and `"NaN"`, matching `f64`'s `Display`. Use with
//! `#[serde(with = "...")]`.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

fn parse_text<E: serde::de::Error>(text: &str) -> Result<f64, E> {
    match text {
        "inf" => Ok(f64::INFINITY),
        "-inf" => Ok(f64::NEG_INFINITY),
        "NaN" => Ok(f64::NAN),
        other => Err(E::custom(format!(
            "expected number, inf, -inf or NaN, got {other:?}"
        ))),
    }
}

/// Serializes a plain `f64`
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

/// Deserializes a plain `f64`
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => parse_text(&text),
    }
}

/// Same representation for `Option<f64>`, with `null` reserved for `None`
pub mod option {
    use super::{parse_text, Repr};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes an optional `f64`
    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional `f64`
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(value)) => Ok(Some(value)),
            Some(Repr::Text(text)) => parse_text(&text).map(Some),
        }
    }
}
