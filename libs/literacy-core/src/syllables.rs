//! Naive Spanish syllable splitting for slow reading.

const VOWELS: &str = "aeiouáéíóúüAEIOUÁÉÍÓÚÜ";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Split a word into syllables.
///
/// A syllable closes on a vowel that is not followed by another vowel, so
/// "pelota" becomes `["pe", "lo", "ta"]`. Trailing consonants form their own
/// chunk. Good enough for the one-word prompts the app reads aloud.
pub fn split_into_syllables(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut syllables = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        let next_is_vowel = chars.get(i + 1).is_some_and(|&n| is_vowel(n));
        if is_vowel(c) && !next_is_vowel {
            syllables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    if syllables.is_empty() {
        vec![word.to_string()]
    } else {
        syllables
    }
}
