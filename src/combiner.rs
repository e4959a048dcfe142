use serde::Serialize;
use serde::de::DeserializeOwned;

use emitter::EmitIntermediate;
use errors::*;
use intermediate::IntermediateInputKV;

/// The `Combine` trait defines a function for performing a combine operation.
///
/// A combine runs map-side over the pairs produced by a single map task, before the shuffle.
/// It must not change the meaning of the data for the reduce operation: it may only shrink the
/// set of values delivered for a key.
///
/// # Arguments
///
/// * `input`   - An `IntermediateInputKV` containing the input data for the combine operation.
/// * `emitter` - A struct implementing the `EmitIntermediate` trait,
///               provided by the combine runner.
///
/// # Outputs
///
/// An empty result used for returning an error. Outputs of the combine operation are sent out
/// through the `emitter`.
pub trait Combine<V>
where
    V: Default + Serialize + DeserializeOwned,
{
    fn combine<E>(&self, input: IntermediateInputKV<V>, emitter: E) -> Result<()>
    where
        E: EmitIntermediate<String, V>;
}

/// A null implementation for `Combine` as this is an optional component.
/// This should not be used by user code.
pub struct NullCombiner;
impl<V> Combine<V> for NullCombiner
where
    V: Default + Serialize + DeserializeOwned,
{
    fn combine<E>(&self, _input: IntermediateInputKV<V>, _emitter: E) -> Result<()>
    where
        E: EmitIntermediate<String, V>,
    {
        Err("This code should never run".into())
    }
}
