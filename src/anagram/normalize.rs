//! Word normalisation and anagram keying.
//!
//! A token normalises to its ASCII letters, lowercased. Two normalised words belong to the same
//! anagram class exactly when their sorted letters match, so the sorted letters serve as the
//! class key. Tokens that normalise to the empty string are dropped rather than keyed.

/// Strips every character that is not an ASCII letter from a token and lowercases the rest.
///
/// Total over arbitrary input; a token with no letters normalises to the empty string.
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Returns the anagram class key for a normalised word: its characters sorted ascending.
///
/// The key has the same length as the word, and two words share a key exactly when they are
/// permutations of the same letters.
pub fn anagram_key(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort();
    letters.into_iter().collect()
}

/// Tokenises a line on whitespace and returns one `(key, word)` pair per token that survives
/// normalisation.
///
/// Each whitespace-delimited token is processed exactly once, and tokens that normalise to the
/// empty string emit nothing.
pub fn normalize_and_key(line: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for token in line.split_whitespace() {
        let word = normalize_token(token);
        if !word.is_empty() {
            pairs.push((anagram_key(&word), word));
        }
    }
    pairs
}
