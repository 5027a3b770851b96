//! Data models for the flashcard quiz.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A flashcard: one vocabulary item with two faces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Front content (the word being learned).
    pub front: String,
    /// Back content (its translation).
    pub back: String,
}

impl Card {
    /// Create a new card.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// Text on the given side.
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Front => &self.front,
            Side::Back => &self.back,
        }
    }
}

/// One face of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    /// The complementary side.
    pub fn other(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
        }
    }
}

/// Which randomizations a session applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizOptions {
    /// Present the deck as a fresh random permutation on every start.
    pub shuffle: bool,
    /// Pick the question side of each card at random.
    pub randomize_sides: bool,
}

impl QuizOptions {
    /// Whether any randomization is active.
    pub fn is_randomized(&self) -> bool {
        self.shuffle || self.randomize_sides
    }
}

/// Final score of a finished deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
}

impl Tally {
    /// Fraction of cards graded correct, 0.0 for an empty deck.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.correct, self.total)
    }
}
