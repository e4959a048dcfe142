use std::collections::HashMap;

use serde::Serialize;

use emitter::{EmitFinal, EmitIntermediate};
use errors::*;

/// `IntermediateOutputPair` is a struct representing an intermediate key-value pair as outputted
/// from a map or combine operation.
#[derive(Serialize)]
pub struct IntermediateOutputPair<K: Serialize, V: Serialize> {
    pub key: K,
    pub value: V,
}

/// `IntermediateOutputObject` is a struct comprising the entire output of a map operation,
/// grouped into numbered reduce partitions and ready to be serialised to JSON.
#[derive(Serialize)]
pub struct IntermediateOutputObject<K: Serialize, V: Serialize> {
    pub partitions: HashMap<u64, Vec<IntermediateOutputPair<K, V>>>,
}

impl<K: Serialize, V: Serialize> Default for IntermediateOutputObject<K, V> {
    fn default() -> Self {
        IntermediateOutputObject { partitions: HashMap::new() }
    }
}

/// `CombineOutputObject` is a struct comprising the entire output of a combine operation, ready
/// to be serialised to JSON. Combine output is not partitioned; the pairs re-enter the map
/// task's output in place of the pairs the combine consumed.
#[derive(Serialize)]
pub struct CombineOutputObject<K: Serialize, V: Serialize> {
    pub pairs: Vec<IntermediateOutputPair<K, V>>,
}

impl<K: Serialize, V: Serialize> Default for CombineOutputObject<K, V> {
    fn default() -> Self {
        CombineOutputObject { pairs: Vec::new() }
    }
}

/// A struct implementing `EmitIntermediate` which emits into a `CombineOutputObject`.
pub struct CombineOutputObjectEmitter<'a, K, V>
where
    K: Serialize + 'a,
    V: Serialize + 'a,
{
    sink: &'a mut CombineOutputObject<K, V>,
}

impl<'a, K, V> CombineOutputObjectEmitter<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    pub fn new(sink: &'a mut CombineOutputObject<K, V>) -> Self {
        CombineOutputObjectEmitter { sink }
    }
}

impl<'a, K, V> EmitIntermediate<K, V> for CombineOutputObjectEmitter<'a, K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn emit(&mut self, key: K, value: V) -> Result<()> {
        self.sink.pairs.push(IntermediateOutputPair { key, value });
        Ok(())
    }
}

/// `FinalOutputObject` is a struct comprising the entire output of a reduce operation, ready to
/// be serialised to JSON.
#[derive(Default, Serialize)]
pub struct FinalOutputObject<V: Serialize> {
    pub values: Vec<V>,
}

/// A struct implementing `EmitFinal` which emits into a `FinalOutputObject`.
pub struct FinalOutputObjectEmitter<'a, V: Serialize + 'a> {
    sink: &'a mut FinalOutputObject<V>,
}

impl<'a, V: Serialize> FinalOutputObjectEmitter<'a, V> {
    pub fn new(sink: &'a mut FinalOutputObject<V>) -> Self {
        FinalOutputObjectEmitter { sink }
    }
}

impl<'a, V: Serialize> EmitFinal<V> for FinalOutputObjectEmitter<'a, V> {
    fn emit(&mut self, value: V) -> Result<()> {
        self.sink.values.push(value);
        Ok(())
    }
}
