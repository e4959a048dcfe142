//! The anagram grouping payload.
//!
//! The map side normalises each whitespace token of the input text and keys it by its sorted
//! letters; the reduce side deduplicates each key's words and renders the groups that keep more
//! than one distinct member. The optional combine pass deduplicates map-side to shrink the
//! shuffle without changing the final output.

pub mod group;
pub mod normalize;

pub use self::group::{distinct_in_order, filter_and_render, RenderOptions};
pub use self::normalize::{anagram_key, normalize_and_key, normalize_token};

use combiner::Combine;
use emitter::{EmitFinal, EmitIntermediate};
use errors::*;
use intermediate::IntermediateInputKV;
use mapper::{Map, MapInputKV};
use partition::{Partition, PartitionInputKV};
use reducer::Reduce;

/// Emits one `(anagram key, normalised word)` pair per word of the input chunk.
pub struct AnagramMapper;

impl Map for AnagramMapper {
    type Key = String;
    type Value = String;
    fn map<E>(&self, input: MapInputKV, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<Self::Key, Self::Value>,
    {
        for line in input.value.lines() {
            for (key, word) in normalize::normalize_and_key(line) {
                emitter.emit(key, word).chain_err(
                    || "Error emitting map key-value pair.",
                )?;
            }
        }
        Ok(())
    }
}

/// Renders each anagram group with more than one distinct member as a single record.
///
/// Emits nothing for the other keys, so every record this reducer produces is a non-empty
/// delimited list.
pub struct AnagramReducer {
    options: RenderOptions,
}

impl AnagramReducer {
    pub fn new(options: RenderOptions) -> Self {
        AnagramReducer { options }
    }
}

impl Default for AnagramReducer {
    fn default() -> Self {
        AnagramReducer::new(RenderOptions::default())
    }
}

impl Reduce for AnagramReducer {
    type Value = String;
    fn reduce<E>(&self, input: IntermediateInputKV<Self::Value>, mut emitter: E) -> Result<()>
    where
        E: EmitFinal<Self::Value>,
    {
        if let Some(record) = group::filter_and_render(&input.values, &self.options) {
            emitter.emit(record).chain_err(|| {
                format!("Error emitting record for key {}.", input.key)
            })?;
        }
        Ok(())
    }
}

/// Deduplicates a key's words map-side, preserving first-seen order.
///
/// The group size filter is left to the reducer: whether a group has more than one distinct
/// member can only be decided once every map task's output for the key is visible.
pub struct AnagramCombiner;

impl Combine<String> for AnagramCombiner {
    fn combine<E>(&self, input: IntermediateInputKV<String>, mut emitter: E) -> Result<()>
    where
        E: EmitIntermediate<String, String>,
    {
        for word in group::distinct_in_order(&input.values) {
            emitter.emit(input.key.clone(), word).chain_err(
                || "Error emitting combined key-value pair.",
            )?;
        }
        Ok(())
    }
}

fn letter_index(c: char) -> u64 {
    // Letters convert to digits 10 -> 35 in base 36.
    match c.to_digit(36) {
        Some(d) if d >= 10 => u64::from(d - 10),
        _ => 25,
    }
}

/// `AlphabetPartitioner` assigns anagram keys to partitions by their first letter.
///
/// Keys produced by the normaliser are non-empty sorted runs of lowercase letters, so the first
/// letter spreads the keyspace across the partition range and every key lands in exactly one
/// partition.
pub struct AlphabetPartitioner {
    partition_count: u64,
}

impl AlphabetPartitioner {
    pub fn new(partition_count: u64) -> Self {
        AlphabetPartitioner { partition_count }
    }
}

impl Partition<String, String> for AlphabetPartitioner {
    fn partition(&self, input: PartitionInputKV<String, String>) -> Result<u64> {
        let first_char = input.key.chars().nth(0).chain_err(
            || "Cannot partition key of empty string.",
        )?;
        Ok(letter_index(first_char) * self.partition_count / 26)
    }
}
