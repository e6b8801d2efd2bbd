//! Property-based tests for guess feedback and hint selection.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use wordle_engine::core::{Feedback, Status, Word};
use wordle_engine::engine::{hint_candidates, required_overlap};

/// Pairs of equal-length words over a small alphabet, so repeats are common
fn word_pair() -> impl Strategy<Value = (String, String)> {
    (4usize..=11).prop_flat_map(|len| {
        (
            proptest::collection::vec(proptest::char::range('a', 'f'), len),
            proptest::collection::vec(proptest::char::range('a', 'f'), len),
        )
            .prop_map(|(a, b)| (a.into_iter().collect(), b.into_iter().collect()))
    })
}

fn counts(word: &Word) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// A position is a Hit exactly when the letters match there.
    #[test]
    fn prop_hit_iff_same_letter((secret, guess) in word_pair()) {
        let secret = Word::new(&secret).unwrap();
        let guess = Word::new(&guess).unwrap();
        let feedback = Feedback::calculate(&secret, &guess);

        prop_assert_eq!(feedback.positions().len(), secret.len());
        for (i, status) in feedback.positions().iter().enumerate() {
            let same = secret.chars()[i] == guess.chars()[i];
            prop_assert_eq!(*status == Status::Hit, same);
        }
    }

    /// A letter never earns more Hit/Present marks than the secret holds.
    #[test]
    fn prop_credit_bounded_by_secret((secret, guess) in word_pair()) {
        let secret = Word::new(&secret).unwrap();
        let guess = Word::new(&guess).unwrap();
        let feedback = Feedback::calculate(&secret, &guess);
        let available = counts(&secret);

        let mut credited: FxHashMap<char, usize> = FxHashMap::default();
        for (&c, &status) in guess.chars().iter().zip(feedback.positions()) {
            if status != Status::Miss {
                *credited.entry(c).or_insert(0) += 1;
            }
        }
        for (c, n) in credited {
            prop_assert!(n <= available.get(&c).copied().unwrap_or(0), "letter {} over-credited", c);
        }
    }

    /// Guessing the secret itself is all Hits.
    #[test]
    fn prop_self_is_solved((secret, _) in word_pair()) {
        let secret = Word::new(&secret).unwrap();
        let feedback = Feedback::calculate(&secret, &secret);
        prop_assert!(feedback.is_solved());
        prop_assert_eq!(feedback.count(Status::Hit), secret.len());
    }

    /// Every hint candidate has the secret's length and exact overlap.
    #[test]
    fn prop_hint_candidates_exact(
        (secret, _) in word_pair(),
        pool in proptest::collection::vec(word_pair(), 0..30)
    ) {
        let secret = Word::new(&secret).unwrap();
        let words: Vec<Word> = pool
            .into_iter()
            .map(|(a, _)| Word::new(&a).unwrap())
            .collect();

        for candidate in hint_candidates(&secret, &words) {
            prop_assert_eq!(candidate.len(), secret.len());
            prop_assert_ne!(candidate, &secret);
            prop_assert_eq!(candidate.common_letters(&secret), required_overlap(secret.len()));
        }
    }
}
