//! Dictionary of puzzle entries.
//!
//! An entry pairs a target word with a hint token and the sentence that
//! contains it. The collection is loaded wholesale at startup and is
//! read-only afterwards; a built-in word list ships embedded in the crate.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Embedded default word list.
const BUILTIN_WORDS: &str = include_str!("../data/words.json");

/// One puzzle record: a target word, a hint token, and the sentence the
/// token is embedded in.
///
/// Well-formedness expectations (checked by [`Dictionary::validate`], not
/// enforced): the hint token occurs in the sentence case-insensitively, and
/// the hint is an anagram of the word sharing its first and last letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct DictionaryEntry {
    /// The word the player reassembles.
    word: String,
    /// The token inside `sentence` that stands in for the word.
    hint: String,
    /// Sentence template shown as the contextual hint.
    sentence: String,
}

impl DictionaryEntry {
    /// Creates an entry from its three parts.
    pub fn new(
        word: impl Into<String>,
        hint: impl Into<String>,
        sentence: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
            sentence: sentence.into(),
        }
    }

    /// Number of letters in the word, ignoring whitespace.
    pub fn word_length(&self) -> usize {
        self.word.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Errors raised while constructing a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DictionaryError {
    /// The dictionary contains no entries.
    #[display("Dictionary contains no entries")]
    Empty,

    /// An entry's word has no letters.
    #[display("Dictionary entry {} has an empty word", _0)]
    EmptyWord(usize),

    /// The JSON source could not be parsed.
    #[display("Invalid dictionary JSON: {}", _0)]
    Parse(String),
}

impl std::error::Error for DictionaryError {}

/// A well-formedness problem in a single entry.
///
/// Warnings degrade the puzzle (an unmatched hint token leaves the sentence
/// unhighlighted; a non-anagram hint can leave a hint-derived arrangement
/// incomplete) but never abort a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DictionaryWarning {
    /// The hint token does not occur in the sentence.
    #[display("Hint {hint:?} does not occur in the sentence for {word:?}")]
    HintMissingFromSentence {
        /// Word of the offending entry.
        word: String,
        /// Hint token that was not found.
        hint: String,
    },

    /// The hint is not an anagram of the word sharing first and last letter.
    #[display("Hint {hint:?} is not an anagram of {word:?} with matching endpoints")]
    HintNotAnagram {
        /// Word of the offending entry.
        word: String,
        /// Hint token with the mismatched letters.
        hint: String,
    },
}

/// Ordered, immutable collection of puzzle entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Creates a dictionary from a list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] for an empty list and
    /// [`DictionaryError::EmptyWord`] if any entry's word has no letters.
    pub fn new(entries: Vec<DictionaryEntry>) -> Result<Self, DictionaryError> {
        if entries.is_empty() {
            return Err(DictionaryError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.word_length() == 0 {
                return Err(DictionaryError::EmptyWord(index));
            }
        }
        Ok(Self { entries })
    }

    /// Parses a dictionary from a JSON array of entries.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Parse`] for malformed JSON, plus the
    /// construction errors of [`Dictionary::new`].
    pub fn from_json(json: &str) -> Result<Self, DictionaryError> {
        let entries: Vec<DictionaryEntry> =
            serde_json::from_str(json).map_err(|e| DictionaryError::Parse(e.to_string()))?;
        Self::new(entries)
    }

    /// The word list embedded in the crate.
    pub fn builtin() -> Self {
        // The embedded JSON is fixed at compile time and covered by tests.
        Self::from_json(BUILTIN_WORDS).expect("embedded word list is well-formed")
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary is empty. Always false post-construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&DictionaryEntry> {
        self.entries.get(index)
    }

    /// Entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn entry(&self, index: usize) -> &DictionaryEntry {
        &self.entries[index]
    }

    /// All entries, in source order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Checks every entry against the well-formedness expectations and
    /// returns the violations found.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Vec<DictionaryWarning> {
        let mut warnings = Vec::new();
        for entry in &self.entries {
            if !sentence_contains(&entry.sentence, &entry.hint) {
                warnings.push(DictionaryWarning::HintMissingFromSentence {
                    word: entry.word.clone(),
                    hint: entry.hint.clone(),
                });
            }
            if !is_endpoint_anagram(&entry.word, &entry.hint) {
                warnings.push(DictionaryWarning::HintNotAnagram {
                    word: entry.word.clone(),
                    hint: entry.hint.clone(),
                });
            }
        }
        debug!(entries = self.entries.len(), warnings = warnings.len(), "validated dictionary");
        warnings
    }
}

fn sentence_contains(sentence: &str, hint: &str) -> bool {
    !hint.is_empty() && sentence.to_lowercase().contains(&hint.to_lowercase())
}

fn is_endpoint_anagram(word: &str, hint: &str) -> bool {
    let word_letters = letter_multiset(word);
    let hint_letters = letter_multiset(hint);
    if word_letters != hint_letters {
        return false;
    }
    let endpoints = |s: &str| {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        chars.first().copied().zip(chars.last().copied())
    };
    match (endpoints(word), endpoints(hint)) {
        (Some((wf, wl)), Some((hf, hl))) => {
            wf.eq_ignore_ascii_case(&hf) && wl.eq_ignore_ascii_case(&hl)
        }
        _ => false,
    }
}

fn letter_multiset(s: &str) -> Vec<char> {
    let mut letters: Vec<char> = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    letters.sort_unstable();
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_word_list_is_well_formed() {
        let dictionary = Dictionary::builtin();
        assert_eq!(dictionary.len(), 6);
        assert!(dictionary.validate().is_empty());
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        assert_eq!(Dictionary::new(Vec::new()), Err(DictionaryError::Empty));
    }

    #[test]
    fn entry_with_empty_word_is_rejected() {
        let entries = vec![DictionaryEntry::new("  ", "hint", "A hint sentence.")];
        assert_eq!(Dictionary::new(entries), Err(DictionaryError::EmptyWord(0)));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let result = Dictionary::from_json("not json");
        assert!(matches!(result, Err(DictionaryError::Parse(_))));
    }

    #[test]
    fn missing_hint_token_is_flagged() {
        let dictionary = Dictionary::new(vec![DictionaryEntry::new(
            "Sunrise",
            "snriuse",
            "We watched the moonset together.",
        )])
        .expect("valid entries");
        let warnings = dictionary.validate();
        assert!(matches!(
            warnings.as_slice(),
            [DictionaryWarning::HintMissingFromSentence { .. }]
        ));
    }

    #[test]
    fn non_anagram_hint_is_flagged() {
        let dictionary = Dictionary::new(vec![DictionaryEntry::new(
            "Cat",
            "cobt",
            "The cobt sat on the mat.",
        )])
        .expect("valid entries");
        let warnings = dictionary.validate();
        assert!(matches!(
            warnings.as_slice(),
            [DictionaryWarning::HintNotAnagram { .. }]
        ));
    }

    #[test]
    fn word_length_ignores_whitespace() {
        let entry = DictionaryEntry::new("ice cream", "icecream", "Cold icecream melts.");
        assert_eq!(entry.word_length(), 8);
    }
}
