use serde::Serialize;

use emitter::EmitIntermediate;
use errors::*;

/// The `MapInputKV` is a struct for passing input data to a `Map`.
///
/// The key is an identifier for the input chunk, assigned by the execution substrate, and the
/// value is the text content of the chunk.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct MapInputKV {
    pub key: String,
    pub value: String,
}

impl MapInputKV {
    pub fn new(key: String, value: String) -> Self {
        MapInputKV { key, value }
    }
}

/// The `Map` trait defines a function for performing a map operation.
///
/// The output types are decided by the implementation of this trait.
///
/// # Arguments
///
/// * `input` - The input data for the map operation.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait, provided by the map runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the map operation are sent out
/// through the `emitter`.
pub trait Map {
    type Key: Serialize;
    type Value: Serialize;
    fn map<E>(&self, input: MapInputKV, emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>;
}
