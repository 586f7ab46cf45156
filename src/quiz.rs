//! Flashcard quiz drawn from the vocabulary list
//!
//! The quiz is a two-state machine: a question starts `Hidden`, `reveal`
//! moves it to `Revealed`, and `next` draws a fresh question back in
//! `Hidden`. Any other transition is rejected with a [`QuizError`].

use rand::Rng;
use tracing::debug;

use crate::errors::QuizError;
use crate::models::VocabularyEntry;
use crate::vocabulary::VocabularyStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Hidden,
    Revealed,
}

/// The current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    entry: VocabularyEntry,
    index: usize,
    phase: QuizPhase,
}

impl QuizState {
    pub fn entry(&self) -> &VocabularyEntry {
        &self.entry
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == QuizPhase::Revealed
    }
}

/// Holds at most one question. The question always mirrors an entry that is
/// currently in the store it was drawn from.
#[derive(Debug, Clone, Default)]
pub struct QuizEngine {
    current: Option<QuizState>,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&QuizState> {
        self.current.as_ref()
    }

    /// Enter quiz mode. Keeps an existing question, draws one if there is
    /// none, and clears it when the store is empty.
    pub fn enter<R: Rng + ?Sized>(
        &mut self,
        store: &VocabularyStore,
        rng: &mut R,
    ) -> Option<&QuizState> {
        self.sync(store, rng);
        self.current.as_ref()
    }

    /// `Hidden -> Revealed`. The entry does not change.
    pub fn reveal(&mut self) -> Result<&QuizState, QuizError> {
        let state = self.current.as_mut().ok_or(QuizError::NoQuestion)?;
        if state.phase == QuizPhase::Revealed {
            return Err(QuizError::AlreadyRevealed);
        }
        state.phase = QuizPhase::Revealed;
        debug!("Quiz answer revealed for {}", state.entry.word);
        Ok(&*state)
    }

    /// `Revealed -> Hidden` with an independent uniform draw from the current
    /// store contents.
    pub fn next<R: Rng + ?Sized>(
        &mut self,
        store: &VocabularyStore,
        rng: &mut R,
    ) -> Result<&QuizState, QuizError> {
        let phase = self.current.as_ref().map(|state| state.phase);
        match phase {
            None => Err(QuizError::NoQuestion),
            Some(QuizPhase::Hidden) => Err(QuizError::NotRevealed),
            Some(QuizPhase::Revealed) => {
                self.current = Self::draw(store, rng);
                self.current.as_ref().ok_or(QuizError::NoQuestion)
            }
        }
    }

    /// Re-check the question against the store after it may have changed.
    ///
    /// An empty store drops the question. A question whose entry moved is
    /// re-pointed; one whose entry is gone is replaced by a new draw.
    pub fn sync<R: Rng + ?Sized>(&mut self, store: &VocabularyStore, rng: &mut R) {
        if store.is_empty() {
            if self.current.take().is_some() {
                debug!("Vocabulary list emptied, dropping quiz question");
            }
            return;
        }

        let Some(state) = self.current.as_mut() else {
            self.current = Self::draw(store, rng);
            return;
        };

        if store.get(state.index) == Some(&state.entry) {
            return;
        }

        match store.all().iter().position(|entry| *entry == state.entry) {
            Some(index) => state.index = index,
            None => {
                debug!("Quiz entry {} no longer in vocabulary list", state.entry.word);
                self.current = Self::draw(store, rng);
            }
        }
    }

    fn draw<R: Rng + ?Sized>(store: &VocabularyStore, rng: &mut R) -> Option<QuizState> {
        if store.is_empty() {
            return None;
        }
        let index = rng.random_range(0..store.len());
        let entry = store.get(index)?.clone();
        debug!("Quiz drew entry {} ({})", index, entry.word);
        Some(QuizState {
            entry,
            index,
            phase: QuizPhase::Hidden,
        })
    }
}
