use crate::parser::{parse_with, ParseOptions};
use crate::{CardView, CoreError, Flashcard};

/// Loaded cards plus the position and flip state of a study session.
///
/// `current_index` stays below `cards.len()` whenever there are cards. Navigating or
/// regenerating always hides the answer again.
#[derive(Clone, Debug, Default)]
pub struct Session {
    cards: Vec<Flashcard>,
    current_index: usize,
    answer_visible: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generate(&mut self, text: &str) {
        self.generate_with(text, &ParseOptions::default());
    }

    /// Replaces the deck with whatever `text` parses to, possibly nothing.
    pub fn generate_with(&mut self, text: &str, opts: &ParseOptions) {
        self.cards = parse_with(text, opts);
        self.current_index = 0;
        self.answer_visible = false;
        tracing::debug!(cards = self.cards.len(), "generated session");
    }

    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.cards.len();
        self.answer_visible = false;
        tracing::trace!(index = self.current_index, "next card");
    }

    pub fn previous(&mut self) {
        let n = self.cards.len();
        if n == 0 {
            return;
        }
        self.current_index = (self.current_index + n - 1) % n;
        self.answer_visible = false;
        tracing::trace!(index = self.current_index, "previous card");
    }

    /// Flips even when empty; there is just nothing to show.
    pub fn toggle_flip(&mut self) {
        self.answer_visible = !self.answer_visible;
        tracing::trace!(answer_visible = self.answer_visible, "flipped");
    }

    pub fn current_card(&self) -> Result<CardView<'_>, CoreError> {
        let card = self
            .cards
            .get(self.current_index)
            .ok_or(CoreError::NoCurrentCard)?;
        Ok(CardView {
            card,
            answer_visible: self.answer_visible,
            position: self.current_index + 1,
            total: self.cards.len(),
        })
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }
}
