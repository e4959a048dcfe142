use std::collections::HashMap;

use emitter::{FinalVecEmitter, IntermediateVecEmitter};
use errors::*;
use intermediate::IntermediateInputKV;
use mapper::{Map, MapInputKV};
use reducer::Reduce;

/// Runs a complete map, group and reduce pass over in-memory input.
///
/// This is a single-process stand-in for the execution substrate: every input chunk is mapped,
/// the intermediate pairs are grouped by key, and each group is reduced only once all input has
/// been consumed. Keys are reduced in the order they were first emitted, making local runs
/// deterministic; within a key, values keep their emission order.
pub fn run_local<M, R>(mapper: &M, reducer: &R, inputs: Vec<MapInputKV>) -> Result<Vec<R::Value>>
where
    M: Map<Key = String>,
    R: Reduce<Value = M::Value>,
    M::Value: Default,
{
    let mut pairs: Vec<(String, M::Value)> = Vec::new();
    for input in inputs {
        mapper
            .map(input, IntermediateVecEmitter::new(&mut pairs))
            .chain_err(|| "Error running map operation.")?;
    }

    let mut groups: HashMap<String, Vec<M::Value>> = HashMap::new();
    let mut key_order: Vec<String> = Vec::new();
    for (key, value) in pairs {
        if !groups.contains_key(&key) {
            key_order.push(key.clone());
        }
        groups.entry(key).or_insert_with(Vec::new).push(value);
    }

    let mut results: Vec<R::Value> = Vec::new();
    for key in key_order {
        let values = groups.remove(&key).chain_err(
            || "Missing value group for emitted key.",
        )?;
        reducer
            .reduce(
                IntermediateInputKV::new(key, values),
                FinalVecEmitter::new(&mut results),
            )
            .chain_err(|| "Error running reduce operation.")?;
    }

    Ok(results)
}
