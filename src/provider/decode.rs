use serde::de::DeserializeOwned;

use crate::{error::DecodeError, provider::Resource, types::IndexResponse};

/// The two payload layouts the provider serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `[ {...}, {...} ]`
    BareArray,
    /// `{ "index": [ {...}, {...} ] }`
    Indexed,
}

/// Parses a raw payload into a typed collection.
///
/// Empty arrays decode to an empty collection. Trailing garbage, missing
/// fields and wrong field types are reported as [`DecodeError`].
pub fn decode<T: DeserializeOwned>(
    bytes: &[u8],
    shape: Shape,
    resource: Resource,
) -> Result<Vec<T>, DecodeError> {
    let result = match shape {
        Shape::BareArray => serde_json::from_slice::<Vec<T>>(bytes),
        Shape::Indexed => serde_json::from_slice::<IndexResponse<T>>(bytes).map(|r| r.index),
    };

    result.map_err(|e| DecodeError {
        resource,
        message: e.to_string(),
    })
}
