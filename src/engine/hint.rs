//! Hint word selection
//!
//! A hint is another secret candidate of the same length that shares an exact
//! number of letters with the secret. Longer secrets give away more letters.

use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

use crate::core::Word;

/// Outcome of a hint request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// A hint word; the session's hint is now used up
    Hint(Word),
    /// This session already received its hint
    AlreadyUsed,
    /// No word qualifies; the hint is still available
    Unavailable,
    /// The player has no game in progress
    NoActiveGame,
}

/// Letters a hint must share with a secret of `length` letters
///
/// # Examples
/// ```
/// use wordle_engine::engine::required_overlap;
///
/// assert_eq!(required_overlap(5), 2);
/// assert_eq!(required_overlap(11), 5);
/// assert_eq!(required_overlap(42), 1);
/// ```
#[must_use]
pub const fn required_overlap(length: usize) -> usize {
    match length {
        5 | 6 => 2,
        7 | 8 => 3,
        9 | 10 => 4,
        11 => 5,
        _ => 1,
    }
}

/// All words that qualify as a hint for `secret`, in input order
///
/// A candidate has the secret's length, is not the secret, and its multiset
/// letter intersection with the secret is exactly [`required_overlap`].
#[must_use]
pub fn hint_candidates<'a>(secret: &Word, words: &'a [Word]) -> Vec<&'a Word> {
    let required = required_overlap(secret.len());
    words
        .par_iter()
        .filter(|w| w.len() == secret.len() && *w != secret)
        .filter(|w| w.common_letters(secret) == required)
        .collect()
}

/// Pick a random hint word for `secret` from `words`
///
/// Returns `None` if no word qualifies.
pub fn select_hint<R: Rng + ?Sized>(secret: &Word, words: &[Word], rng: &mut R) -> Option<Word> {
    hint_candidates(secret, words)
        .choose(rng)
        .map(|&word| word.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn overlap_table() {
        let expected = [(4, 1), (5, 2), (6, 2), (7, 3), (8, 3), (9, 4), (10, 4), (11, 5)];
        for (length, overlap) in expected {
            assert_eq!(required_overlap(length), overlap, "length {length}");
        }
        assert_eq!(required_overlap(3), 1);
        assert_eq!(required_overlap(12), 1);
    }

    #[test]
    fn candidates_share_exactly_two_letters_with_lemon() {
        let words = words_from_slice(&[
            "lemon", // the secret itself
            "melon", // 5 shared
            "lucky", // l
            "loamy", // l, m, o
            "blast", // l
            "nerdy", // n, e
            "crypt", // none
            "minty", // m, n
            "lemons", // wrong length
        ]);
        let secret = word("lemon");

        let texts: Vec<&str> = hint_candidates(&secret, &words)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(texts, ["minty", "nerdy"]);

        for candidate in hint_candidates(&secret, &words) {
            assert_eq!(candidate.len(), 5);
            assert_ne!(candidate, &secret);
            assert_eq!(candidate.common_letters(&secret), 2);
        }
    }

    #[test]
    fn duplicate_letters_count_once_per_occurrence() {
        // "speed" vs "sheep": s, e, e, p = 4, "asset" vs "speed": s, e = 2
        let words = words_from_slice(&["sheep", "asset"]);
        let secret = word("speed");
        let texts: Vec<&str> = hint_candidates(&secret, &words)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(texts, ["asset"]);
    }

    #[test]
    fn select_returns_none_without_candidates() {
        let words = words_from_slice(&["lemon", "melon"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(select_hint(&word("lemon"), &words, &mut rng), None);
    }

    #[test]
    fn select_picks_a_candidate() {
        let words = words_from_slice(&["minty", "nerdy", "crypt", "lemon"]);
        let secret = word("lemon");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let hint = select_hint(&secret, &words, &mut rng).unwrap();
            assert!(hint.text() == "minty" || hint.text() == "nerdy");
        }
    }
}
