use serde::{Deserialize, Serialize};

/// A front/back text pair. Both sides are trimmed and non-empty when produced by the parser.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Cards in input line order.
pub type CardSequence = Vec<Flashcard>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Front,
    Back,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Front => "Q",
            Side::Back => "A",
        }
    }
}

/// What a presentation layer needs to draw the current card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    pub card: &'a Flashcard,
    pub answer_visible: bool,
    /// 1-based.
    pub position: usize,
    pub total: usize,
}

impl<'a> CardView<'a> {
    pub fn side(&self) -> Side {
        if self.answer_visible {
            Side::Back
        } else {
            Side::Front
        }
    }

    pub fn visible_text(&self) -> &'a str {
        match self.side() {
            Side::Front => &self.card.front,
            Side::Back => &self.card.back,
        }
    }
}
