//! Group deduplication, filtering and rendering.
//!
//! A group is the set of distinct words sharing one anagram key, in the order they were first
//! seen. Only groups with more than one distinct member produce an output record.

use std::collections::HashSet;

/// Options controlling how a retained group is rendered into an output record.
///
/// `delimiter` separates the member words. `wrap_as_array` wraps the joined list in `[` `]`,
/// mimicking the array-literal presentation of older output consumers.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub delimiter: String,
    pub wrap_as_array: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            delimiter: ",".to_owned(),
            wrap_as_array: false,
        }
    }
}

/// Returns the distinct words of a value sequence, preserving first-seen order.
///
/// Deduplication state is local to the call; each key's group is independent.
pub fn distinct_in_order(words: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut distinct = Vec::new();
    for word in words {
        if seen.insert(word) {
            distinct.push(word.clone());
        }
    }
    distinct
}

/// Deduplicates a key's words and renders the group as an output record.
///
/// Returns `None` for groups with fewer than two distinct members, so the renderer never sees
/// an empty group and a rendered record never carries a trailing delimiter.
pub fn filter_and_render(words: &[String], options: &RenderOptions) -> Option<String> {
    let distinct = distinct_in_order(words);
    if distinct.len() <= 1 {
        return None;
    }

    let joined = distinct.join(&options.delimiter);
    if options.wrap_as_array {
        Some(format!("[{}]", joined))
    } else {
        Some(joined)
    }
}
