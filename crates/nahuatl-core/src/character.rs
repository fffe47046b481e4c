// Character classification for the normalized Nahuatl alphabet.
//
// The normalized orthography writes one letter per phoneme: `L` stands for
// the lateral affricate (tl), `z` for ts, `q` for kw, `j` for the glottal
// stop / h. Everything that is not one of the five vowels counts as a
// consonant for phonotactic purposes.

// ---------------------------------------------------------------------------
// Phonological constants
// ---------------------------------------------------------------------------

/// Vowels of the normalized alphabet.
pub const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Consonants whose doubled spelling collapses to a single letter during
/// orthography normalization.
pub const COLLAPSIBLE_CONSONANTS: &[char] = &[
    'c', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 's', 't', 'w', 'x', 'y', 'z',
];

/// Check whether a character is a vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a doubled occurrence of this character is collapsed by
/// orthography normalization.
pub fn is_collapsible_consonant(c: char) -> bool {
    COLLAPSIBLE_CONSONANTS.contains(&c)
}

// ---------------------------------------------------------------------------
// Phonotactics
// ---------------------------------------------------------------------------

/// Check whether a string may stand on its own as a root.
///
/// A root may not open with two consonants, and a lone consonant is not a
/// root either. The empty string is accepted: a word made only of affixes
/// has an empty lemma, and there is nothing to repair.
pub fn is_legal_root(root: &str) -> bool {
    let mut chars = root.chars();
    match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(first), None) => is_vowel(first),
        (Some(first), Some(second)) => is_vowel(first) || is_vowel(second),
    }
}
