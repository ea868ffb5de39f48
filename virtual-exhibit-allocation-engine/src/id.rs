//! Shared deserialization plumbing for the opaque ids the marketplace API
//! emits inconsistently as either JSON numbers or JSON strings.

use serde::Deserialize;

/// Wire form of an opaque id. The upstream API serves `201` and `"201"`
/// interchangeably for the same entity, so both must deserialize to the
/// same canonical value.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    pub(crate) fn into_canonical(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}
