//! Per-session state
//!
//! A [`Session`] owns everything that must survive navigation between
//! screens: the vocabulary list, the current quiz question, and the random
//! source used for phrase and quiz draws. Each session is independent; nothing
//! here is global.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::{QuizError, VocabularyError};
use crate::kana::{KanaChart, KanaTable};
use crate::models::{Phrase, VocabularyEntry, WritingSystem};
use crate::phrases::PhraseBank;
use crate::quiz::{QuizEngine, QuizState};
use crate::vocabulary::VocabularyStore;

pub struct Session {
    vocabulary: VocabularyStore,
    quiz: QuizEngine,
    rng: StdRng,
}

impl Session {
    /// Build a session from configuration: starter words and RNG seed
    pub fn from_config(config: &Config) -> Self {
        let vocabulary = if config.starter_words {
            VocabularyStore::with_starter_words()
        } else {
            VocabularyStore::new()
        };
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(vocabulary, rng)
    }

    pub fn with_rng(vocabulary: VocabularyStore, rng: StdRng) -> Self {
        Self {
            vocabulary,
            quiz: QuizEngine::new(),
            rng,
        }
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }

    /// Form submission. On error the store is unchanged.
    pub fn add_word(
        &mut self,
        word: &str,
        reading: &str,
        meaning: &str,
    ) -> Result<&VocabularyEntry, VocabularyError> {
        let was_empty = self.vocabulary.is_empty();
        let entry = VocabularyEntry::new(word.trim(), reading.trim(), meaning.trim());

        if let Err(e) = self.vocabulary.append(entry) {
            warn!("Rejected vocabulary entry: {}", e);
            return Err(e);
        }
        if was_empty {
            self.quiz.sync(&self.vocabulary, &mut self.rng);
        }

        Ok(&self.vocabulary.all()[self.vocabulary.len() - 1])
    }

    /// Push an edited table back to the store. Nothing happens when the
    /// edited list equals the current one. Returns whether the store changed.
    pub fn replace_vocabulary(&mut self, entries: Vec<VocabularyEntry>) -> bool {
        if entries.as_slice() == self.vocabulary.all() {
            return false;
        }
        info!("Vocabulary table edited ({} entries)", entries.len());
        self.vocabulary.replace_all(entries);
        self.quiz.sync(&self.vocabulary, &mut self.rng);
        true
    }

    pub fn random_phrase(&mut self) -> &'static Phrase {
        PhraseBank::random_phrase(&mut self.rng)
    }

    pub fn chart(&self, system: WritingSystem) -> KanaTable {
        KanaChart::chart(system)
    }

    /// Enter quiz mode. `None` means the list is empty and the quiz view
    /// should show its empty-state message instead of a question.
    pub fn enter_quiz(&mut self) -> Option<&QuizState> {
        self.quiz.enter(&self.vocabulary, &mut self.rng)
    }

    pub fn quiz(&self) -> Option<&QuizState> {
        self.quiz.current()
    }

    pub fn reveal_answer(&mut self) -> Result<&QuizState, QuizError> {
        self.quiz.reveal()
    }

    pub fn next_question(&mut self) -> Result<&QuizState, QuizError> {
        self.quiz.next(&self.vocabulary, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_session() -> Session {
        Session::with_rng(VocabularyStore::new(), StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_from_config_respects_starter_words() {
        let mut config = Config::default();
        config.seed = Some(3);
        assert_eq!(Session::from_config(&config).vocabulary().len(), 4);

        config.starter_words = false;
        assert!(Session::from_config(&config).vocabulary().is_empty());
    }

    #[test]
    fn test_add_word_then_quiz() {
        let mut session = empty_session();

        let added = session.add_word("猫", "ねこ", "貓").unwrap().clone();
        assert_eq!(added, VocabularyEntry::new("猫", "ねこ", "貓"));
        assert_eq!(session.vocabulary().len(), 1);

        let state = session.enter_quiz().unwrap();
        assert_eq!(state.entry().word, "猫");
        assert!(!state.is_revealed());

        let state = session.reveal_answer().unwrap();
        assert!(state.is_revealed());
        assert_eq!(state.entry().reading, "ねこ");
        assert_eq!(state.entry().meaning, "貓");

        let state = session.next_question().unwrap();
        assert!(!state.is_revealed());
        assert_eq!(state.entry().word, "猫");
    }

    #[test]
    fn test_add_word_rejects_blank_fields() {
        let mut session = empty_session();
        assert_eq!(session.add_word("  ", "ねこ", "貓"), Err(VocabularyError::MissingWord));
        assert!(session.vocabulary().is_empty());
        assert!(session.enter_quiz().is_none());
    }

    #[test]
    fn test_add_word_trims_input() {
        let mut session = empty_session();
        session.add_word(" 犬 ", " いぬ", "狗 ").unwrap();
        assert_eq!(session.vocabulary().all()[0], VocabularyEntry::new("犬", "いぬ", "狗"));
    }

    #[test]
    fn test_first_word_creates_question() {
        let mut session = empty_session();
        assert!(session.quiz().is_none());

        session.add_word("猫", "ねこ", "貓").unwrap();
        assert_eq!(session.quiz().map(|q| q.entry().word.as_str()), Some("猫"));
    }

    #[test]
    fn test_replace_vocabulary_only_when_changed() {
        let mut session = Session::with_rng(VocabularyStore::with_starter_words(), StdRng::seed_from_u64(5));
        let same = session.vocabulary().all().to_vec();
        assert!(!session.replace_vocabulary(same));

        let mut edited = session.vocabulary().all().to_vec();
        edited.remove(0);
        assert!(session.replace_vocabulary(edited));
        assert_eq!(session.vocabulary().len(), 3);
    }

    #[test]
    fn test_emptying_table_clears_quiz() {
        let mut session = Session::with_rng(VocabularyStore::with_starter_words(), StdRng::seed_from_u64(5));
        assert!(session.enter_quiz().is_some());

        session.replace_vocabulary(Vec::new());
        assert!(session.quiz().is_none());
        assert!(session.enter_quiz().is_none());
        assert_eq!(session.reveal_answer(), Err(QuizError::NoQuestion));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut first = empty_session();
        let second = empty_session();

        first.add_word("猫", "ねこ", "貓").unwrap();
        assert_eq!(first.vocabulary().len(), 1);
        assert!(second.vocabulary().is_empty());
    }
}
