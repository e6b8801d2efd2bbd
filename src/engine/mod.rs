//! The game engine
//!
//! [`Engine`] owns the dictionary and a store. Every operation reloads the
//! user document inside a store transaction, applies one state change and
//! saves it, so no player state lives in memory between calls.

mod curation;
mod hint;
mod session;
pub mod stats;

pub use curation::{ApproveSummary, RemoveReport, SuggestOutcome};
pub use hint::{HintOutcome, hint_candidates, required_overlap, select_hint};
pub use session::{GameSession, GuessOutcome, GuessRow, RejectReason, SessionView, StartOutcome};
pub use stats::{GameOutcome, GlobalStats, TopPlayer, UserStats, record_result};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

use crate::config::DEFAULT_SUGGESTIONS_LIMIT;
use crate::core::{MAX_ATTEMPTS, MAX_WORD_LEN, MIN_WORD_LEN, Word, normalize};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::storage::{PlayerInfo, Store, StoreData};

/// Word game engine over a store
#[derive(Debug)]
pub struct Engine<S: Store> {
    store: S,
    dictionary: Dictionary,
    rng: Mutex<StdRng>,
    suggestions_limit: usize,
}

impl<S: Store> Engine<S> {
    /// Engine with an explicit dictionary and an OS-seeded RNG
    pub fn new(store: S, dictionary: Dictionary) -> Self {
        Self {
            store,
            dictionary,
            rng: Mutex::new(StdRng::from_os_rng()),
            suggestions_limit: DEFAULT_SUGGESTIONS_LIMIT,
        }
    }

    /// Engine using the dictionary held by the store
    ///
    /// # Errors
    /// Returns `EngineError::Dictionary` when the dictionary is missing or
    /// corrupt. This is meant to abort start-up.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Result<Self> {
        let dictionary = store.load_dictionary()?;
        info!(
            main = dictionary.main().len(),
            additional = dictionary.additional().len(),
            "Engine ready"
        );
        Ok(Self::new(store, dictionary))
    }

    /// Use a fixed RNG seed (reproducible secrets and hints)
    #[must_use]
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Cap on the serialized suggestion queue, in bytes
    #[must_use]
    pub fn with_suggestions_limit(self, bytes: usize) -> Self {
        Self {
            suggestions_limit: bytes,
            ..self
        }
    }

    /// Current dictionary snapshot
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read the dictionary from the store
    ///
    /// # Errors
    /// Returns `EngineError::Dictionary` if it can no longer be loaded; the
    /// previous dictionary stays in place.
    #[instrument(skip(self))]
    pub fn reload_dictionary(&mut self) -> Result<()> {
        self.dictionary = self.store.load_dictionary()?;
        info!(words = self.dictionary.len(), "Dictionary reloaded");
        Ok(())
    }

    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create or refresh a player's profile fields and activity time
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self), fields(user_id = %player.id))]
    pub fn register_user(&self, player: &PlayerInfo) -> Result<()> {
        self.store.transaction(|data| {
            let profile = data.users.entry(player.id.clone()).or_default();
            player.apply_to(profile);
        })
    }

    /// Return the player's game, or start one with a secret of `length` letters
    ///
    /// An existing game is always resumed unchanged; `length` is then ignored.
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn start_or_resume(&self, user_id: &str, length: Option<usize>) -> Result<StartOutcome> {
        self.store.transaction(|data| {
            let profile = data.users.entry(user_id.to_string()).or_default();
            profile.touch();

            if let Some(session) = &profile.current_game {
                debug!(attempts = session.attempts(), "Resuming game");
                return StartOutcome::Resumed(session.view());
            }

            let Some(length) = length else {
                return StartOutcome::LengthRequired;
            };
            if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&length) {
                return StartOutcome::InvalidLength(length);
            }

            let candidates = self.dictionary.words_of_length(length);
            let Some(&secret) = candidates.choose(&mut *self.rng()) else {
                info!(length, "No secret words of this length");
                return StartOutcome::NoWordsOfLength(length);
            };

            let session = GameSession::new(secret.clone());
            let view = session.view();
            profile.current_game = Some(session);
            info!(length, candidates = candidates.len(), "Game started");
            StartOutcome::Started(view)
        })
    }

    /// The player's game in progress, if any
    ///
    /// # Errors
    /// Returns store failures.
    pub fn active_session(&self, user_id: &str) -> Result<Option<SessionView>> {
        Ok(self
            .store
            .load()?
            .users
            .get(user_id)
            .and_then(|p| p.current_game.as_ref())
            .map(GameSession::view))
    }

    /// Submit a guess for the player's game
    ///
    /// Validation happens against the dictionary as it is right now. A win or
    /// a sixth miss ends the game, updates statistics and deletes the session
    /// in the same transaction.
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn submit_guess(&self, user_id: &str, raw: &str) -> Result<GuessOutcome> {
        self.store.transaction(|data| {
            let (guess, view, secret) = match self.accept_guess(data, user_id, raw) {
                Ok(accepted) => accepted,
                Err(reason) => {
                    debug!(?reason, "Guess rejected");
                    return GuessOutcome::Rejected(reason);
                }
            };

            if guess == secret {
                finish_game(data, user_id, GameOutcome::Won);
                info!(attempts = view.attempts, "Game won");
                GuessOutcome::Won(view)
            } else if view.attempts >= MAX_ATTEMPTS {
                finish_game(data, user_id, GameOutcome::Lost);
                info!(secret = %secret, "Game lost");
                GuessOutcome::Lost { view, secret }
            } else {
                debug!(attempts = view.attempts, "Guess accepted");
                GuessOutcome::Accepted(view)
            }
        })
    }

    /// Validate and record a guess, returning (guess, board, secret)
    fn accept_guess(
        &self,
        data: &mut StoreData,
        user_id: &str,
        raw: &str,
    ) -> std::result::Result<(Word, SessionView, Word), RejectReason> {
        let profile = data
            .users
            .get_mut(user_id)
            .ok_or(RejectReason::NoActiveGame)?;
        profile.touch();
        let session = profile
            .current_game
            .as_mut()
            .ok_or(RejectReason::NoActiveGame)?;

        let text = normalize(raw);
        if text.chars().any(char::is_whitespace) {
            return Err(RejectReason::ContainsWhitespace);
        }

        let expected = session.secret().len();
        let actual = text.chars().count();
        if actual != expected {
            return Err(RejectReason::WrongLength { expected, actual });
        }

        // The secret always counts, even if the dictionary changed under the game
        if text != session.secret().text() {
            if profile.suggested_words.contains(&text) && !self.dictionary.contains_main(&text) {
                return Err(RejectReason::PendingSuggestion { word: text });
            }
            if !self.dictionary.contains(&text) {
                return Err(RejectReason::NotInDictionary { word: text });
            }
        }

        let guess = Word::new(&text).map_err(|_| RejectReason::NotInDictionary { word: text })?;
        session.push_guess(guess.clone());
        Ok((guess, session.view(), session.secret().clone()))
    }

    /// Give the player a hint word, at most once per game
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn request_hint(&self, user_id: &str) -> Result<HintOutcome> {
        self.store.transaction(|data| {
            let Some(profile) = data.users.get_mut(user_id) else {
                return HintOutcome::NoActiveGame;
            };
            profile.touch();
            let Some(session) = profile.current_game.as_mut() else {
                return HintOutcome::NoActiveGame;
            };

            if session.hint_used() {
                return HintOutcome::AlreadyUsed;
            }

            match select_hint(session.secret(), self.dictionary.main(), &mut *self.rng()) {
                Some(hint) => {
                    session.mark_hint_used();
                    info!(hint = %hint, "Hint given");
                    HintOutcome::Hint(hint)
                }
                None => HintOutcome::Unavailable,
            }
        })
    }

    /// Abandon the player's game without touching statistics
    ///
    /// Returns whether a game was discarded.
    ///
    /// # Errors
    /// Returns store failures.
    #[instrument(skip(self))]
    pub fn reset(&self, user_id: &str) -> Result<bool> {
        self.store.transaction(|data| {
            let discarded = data
                .users
                .get_mut(user_id)
                .and_then(|p| {
                    p.touch();
                    p.current_game.take()
                })
                .is_some();
            if discarded {
                info!("Game abandoned");
            }
            discarded
        })
    }

    /// Lifetime counters of one player, `None` for unknown players
    ///
    /// # Errors
    /// Returns store failures.
    pub fn get_user_stats(&self, user_id: &str) -> Result<Option<UserStats>> {
        Ok(self.store.load()?.users.remove(user_id).map(|p| p.stats))
    }

    /// Totals across all players
    ///
    /// # Errors
    /// Returns store failures.
    pub fn get_global_stats(&self) -> Result<GlobalStats> {
        Ok(self.store.load()?.global)
    }
}

fn finish_game(data: &mut StoreData, user_id: &str, outcome: GameOutcome) {
    if let Some(profile) = data.users.get_mut(user_id) {
        profile.current_game = None;
    }
    record_result(data, user_id, outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn engine(main: &[&str], additional: &[&str]) -> Engine<MemoryStore> {
        let dictionary = Dictionary::from_raw(main, additional);
        Engine::new(MemoryStore::new(dictionary.clone()), dictionary).with_seed(1)
    }

    fn started(outcome: StartOutcome) -> SessionView {
        match outcome {
            StartOutcome::Started(view) => view,
            other => panic!("expected a new game, got {other:?}"),
        }
    }

    #[test]
    fn start_picks_secret_of_requested_length() {
        let engine = engine(&["lemon", "pear"], &[]);
        let view = started(engine.start_or_resume("1", Some(5)).unwrap());
        assert_eq!(view.length, 5);
        assert_eq!(view.attempts, 0);

        let data = engine.store().load().unwrap();
        let session = data.users["1"].current_game.as_ref().unwrap();
        assert_eq!(session.secret().text(), "lemon");
    }

    #[test]
    fn start_validates_length() {
        let engine = engine(&["lemon"], &[]);
        assert_eq!(
            engine.start_or_resume("1", None).unwrap(),
            StartOutcome::LengthRequired
        );
        assert_eq!(
            engine.start_or_resume("1", Some(3)).unwrap(),
            StartOutcome::InvalidLength(3)
        );
        assert_eq!(
            engine.start_or_resume("1", Some(12)).unwrap(),
            StartOutcome::InvalidLength(12)
        );
        assert_eq!(
            engine.start_or_resume("1", Some(7)).unwrap(),
            StartOutcome::NoWordsOfLength(7)
        );
        assert!(engine.active_session("1").unwrap().is_none());
    }

    #[test]
    fn additional_words_are_never_secrets() {
        let engine = engine(&["pear"], &["lemur"]);
        assert_eq!(
            engine.start_or_resume("1", Some(5)).unwrap(),
            StartOutcome::NoWordsOfLength(5)
        );
    }

    #[test]
    fn guess_without_game_is_rejected() {
        let engine = engine(&["lemon"], &[]);
        assert_eq!(
            engine.submit_guess("1", "lemon").unwrap(),
            GuessOutcome::Rejected(RejectReason::NoActiveGame)
        );
    }

    #[test]
    fn hint_without_game() {
        let engine = engine(&["lemon"], &[]);
        assert_eq!(engine.request_hint("1").unwrap(), HintOutcome::NoActiveGame);
    }

    #[test]
    fn reset_without_game() {
        let engine = engine(&["lemon"], &[]);
        assert!(!engine.reset("1").unwrap());
    }

    #[test]
    fn register_user_sets_profile() {
        let engine = engine(&["lemon"], &[]);
        let player = PlayerInfo {
            username: Some("neo".to_string()),
            ..PlayerInfo::new("1", "Thomas")
        };
        engine.register_user(&player).unwrap();

        let data = engine.store().load().unwrap();
        assert_eq!(data.users["1"].display_name(), "neo");
        assert_eq!(engine.get_user_stats("1").unwrap(), Some(UserStats::default()));
        assert_eq!(engine.get_user_stats("2").unwrap(), None);
    }

    #[test]
    fn open_uses_store_dictionary() {
        let store = MemoryStore::new(Dictionary::from_raw(["lemon"], ["lemur"]));
        let engine = Engine::open(store).unwrap();
        assert!(engine.dictionary().contains("lemur"));
    }

    #[test]
    fn seeded_engines_agree() {
        let words = ["lemon", "melon", "grape", "peach", "mango", "guava"];
        let a = engine(&words, &[]);
        let b = engine(&words, &[]);
        assert_eq!(
            a.start_or_resume("1", Some(5)).unwrap(),
            b.start_or_resume("1", Some(5)).unwrap()
        );
        let secret = |e: &Engine<MemoryStore>| {
            e.store().load().unwrap().users["1"]
                .current_game
                .as_ref()
                .unwrap()
                .secret()
                .clone()
        };
        assert_eq!(secret(&a), secret(&b));
    }
}
