//! Letter-level classification of Tagalog numeral words.

/// Plain vowels. Tagalog numerals are written in ASCII, so no accented forms.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// The semivowels w and y, which take the "ng" ligature like a vowel does.
pub fn is_glide(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'w' | 'y')
}

/// Check whether a word ends in a letter that takes the suffixed "ng" ligature.
///
/// Returns `false` for the empty string.
pub fn ends_open(word: &str) -> bool {
    word.chars()
        .next_back()
        .is_some_and(|c| is_vowel(c) || is_glide(c))
}

/// The last whitespace-separated word of a phrase (empty for an empty phrase).
pub fn last_word(phrase: &str) -> &str {
    phrase.split_whitespace().next_back().unwrap_or("")
}
