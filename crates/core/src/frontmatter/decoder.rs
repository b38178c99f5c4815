//! Decoders that turn raw frontmatter text into a [`Frontmatter`] mapping.

#[cfg(feature = "yaml")]
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
#[cfg(feature = "yaml")]
use std::collections::BTreeMap;
#[cfg(feature = "yaml")]
use std::fmt;
use thiserror::Error;

use super::types::Frontmatter;
#[cfg(feature = "yaml")]
use super::types::MetaValue;

/// Errors that can occur while decoding a header block.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[cfg(feature = "yaml")]
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter is a {0}, expected a mapping")]
    NotAMapping(&'static str),
}

/// Raised when the crate was built without any frontmatter decoder.
#[derive(Debug, Error)]
#[error(
    "no frontmatter decoder available; rebuild vaultdist-core with the `yaml` feature enabled"
)]
pub struct MissingDecoder;

/// Capability for decoding the text between the `---` delimiters.
pub trait HeaderDecoder {
    /// Decode `raw` into a mapping.
    ///
    /// An empty or null document decodes to an empty mapping. Anything that is
    /// not a mapping at the top level is an error.
    fn decode(&self, raw: &str) -> Result<Frontmatter, DecodeError>;
}

/// `serde_yaml` backed decoder.
#[cfg(feature = "yaml")]
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlDecoder;

#[cfg(feature = "yaml")]
impl HeaderDecoder for YamlDecoder {
    fn decode(&self, raw: &str) -> Result<Frontmatter, DecodeError> {
        if raw.trim().is_empty() {
            return Ok(Frontmatter::default());
        }

        let Node(value) = serde_yaml::from_str::<Node>(raw)?;
        match value {
            MetaValue::Map(fields) => Ok(Frontmatter { fields }),
            MetaValue::Null => Ok(Frontmatter::default()),
            other => Err(DecodeError::NotAMapping(kind(&other))),
        }
    }
}

/// Return the decoder compiled into this build.
pub fn default_decoder() -> Result<Box<dyn HeaderDecoder>, MissingDecoder> {
    #[cfg(feature = "yaml")]
    {
        Ok(Box::new(YamlDecoder))
    }
    #[cfg(not(feature = "yaml"))]
    {
        Err(MissingDecoder)
    }
}

/// A YAML node decoded straight into a [`MetaValue`].
///
/// Mappings keep the last value of a repeated key. Values carrying an
/// application tag (`!secret x`) reach the visitor as enums and are rejected.
#[cfg(feature = "yaml")]
struct Node(MetaValue);

#[cfg(feature = "yaml")]
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeVisitor).map(Node)
    }
}

#[cfg(feature = "yaml")]
struct NodeVisitor;

#[cfg(feature = "yaml")]
impl<'de> Visitor<'de> for NodeVisitor {
    type Value = MetaValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a YAML value without an application tag")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<MetaValue, E> {
        Ok(MetaValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<MetaValue, E> {
        Ok(MetaValue::Number(v as f64))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<MetaValue, E> {
        Ok(MetaValue::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<MetaValue, E> {
        Ok(MetaValue::Number(v as f64))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<MetaValue, E> {
        Ok(MetaValue::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<MetaValue, E> {
        Ok(MetaValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<MetaValue, E> {
        Ok(MetaValue::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<MetaValue, E> {
        Ok(MetaValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<MetaValue, E> {
        Ok(MetaValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<MetaValue, E> {
        Ok(MetaValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<MetaValue, D::Error> {
        Node::deserialize(deserializer).map(|Node(v)| v)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<MetaValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Node(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(MetaValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<MetaValue, A::Error> {
        let mut fields = BTreeMap::new();
        while let Some((Node(key), Node(value))) = map.next_entry()? {
            if let Some(key) = key_text(key) {
                fields.insert(key, value);
            }
        }
        Ok(MetaValue::Map(fields))
    }
}

#[cfg(feature = "yaml")]
fn kind(value: &MetaValue) -> &'static str {
    match value {
        MetaValue::Null => "null",
        MetaValue::Bool(_) => "boolean",
        MetaValue::Number(_) => "number",
        MetaValue::String(_) => "string",
        MetaValue::List(_) => "sequence",
        MetaValue::Map(_) => "mapping",
    }
}

/// Scalar keys are rendered to text; collection keys are dropped.
#[cfg(feature = "yaml")]
fn key_text(key: MetaValue) -> Option<String> {
    match key {
        MetaValue::String(s) => Some(s),
        MetaValue::Number(n) => Some(n.to_string()),
        MetaValue::Bool(b) => Some(b.to_string()),
        MetaValue::Null => Some("null".to_string()),
        MetaValue::List(_) | MetaValue::Map(_) => None,
    }
}
