//! Hint sentence composition.
//!
//! The hint banner shows the entry's sentence with the hint token replaced
//! by the player's live letter arrangement, so the sentence tracks every
//! reorder rather than only the solved state.

use crate::dictionary::DictionaryEntry;

/// Substitutes the live arrangement into the entry's sentence template.
///
/// The first case-insensitive occurrence of the hint token is replaced by
/// the lower-cased arrangement wrapped in `<em>…</em>`. A hint token absent
/// from the sentence yields the sentence unmodified; that is degraded
/// display, not an error.
pub fn compose(entry: &DictionaryEntry, arrangement: &str) -> String {
    let sentence = entry.sentence();
    let token = entry.hint();
    if token.is_empty() {
        return sentence.clone();
    }

    let haystack = sentence.to_lowercase();
    let needle = token.to_lowercase();
    let Some(start) = haystack.find(&needle) else {
        return sentence.clone();
    };
    // Lowercasing can shift byte offsets for non-ASCII text; fall back to
    // the unmodified sentence rather than splice at a bad boundary.
    let end = start + needle.len();
    if end > sentence.len() || !sentence.is_char_boundary(start) || !sentence.is_char_boundary(end)
    {
        return sentence.clone();
    }

    format!(
        "{}<em>{}</em>{}",
        &sentence[..start],
        arrangement.to_lowercase(),
        &sentence[end..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_arrangement_replaces_the_hint_token() {
        let entry = DictionaryEntry::new("Sunrise", "sunrise", "We watched the sunrise together.");
        assert_eq!(
            compose(&entry, "SNRIUSE"),
            "We watched the <em>snriuse</em> together."
        );
    }

    #[test]
    fn token_match_is_case_insensitive() {
        let entry = DictionaryEntry::new("Sunrise", "SUNRISE", "We watched the Sunrise together.");
        assert_eq!(
            compose(&entry, "SUNRISE"),
            "We watched the <em>sunrise</em> together."
        );
    }

    #[test]
    fn only_the_first_occurrence_is_replaced() {
        let entry = DictionaryEntry::new("Echo", "echo", "An echo of an echo.");
        assert_eq!(compose(&entry, "EHCO"), "An <em>ehco</em> of an echo.");
    }

    #[test]
    fn absent_token_leaves_the_sentence_unmodified() {
        let entry = DictionaryEntry::new("Sunrise", "moonset", "We watched the sunrise together.");
        assert_eq!(compose(&entry, "SNRIUSE"), "We watched the sunrise together.");
    }

    #[test]
    fn empty_token_leaves_the_sentence_unmodified() {
        let entry = DictionaryEntry::new("Sunrise", "", "We watched the sunrise together.");
        assert_eq!(compose(&entry, "SNRIUSE"), "We watched the sunrise together.");
    }

    #[test]
    fn surrounding_text_is_untouched() {
        let entry = DictionaryEntry::new("Lantern", "lnatern", "A paper lnatern floated by.");
        assert_eq!(compose(&entry, "LANTERN"), "A paper <em>lantern</em> floated by.");
    }
}
