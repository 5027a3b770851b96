//! Quiz session controller.
//!
//! A session walks a deck front to back once. Each card starts with its
//! question side up; the user flips it with [`QuizSession::reveal`], then
//! self-grades with [`QuizSession::grade`], which moves on to the next card.
//! Grading the last card completes the session, after which only
//! [`QuizSession::restart`] has any effect.

use crate::models::{Card, QuizOptions, Side, Tally};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A card is on screen.
    Active,
    /// Every card has been graded.
    Completed,
}

/// What the presentation layer needs to draw the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView<'a> {
    Active(CardView<'a>),
    Completed(Tally),
}

/// The card currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    /// 1-based card number.
    pub number: usize,
    /// Cards in the deck.
    pub total: usize,
    /// Correct grades so far.
    pub correct: usize,
    /// Side asked as the question.
    pub question_side: Side,
    pub question: &'a str,
    /// Present once the card has been flipped.
    pub answer: Option<&'a str>,
}

pub struct QuizSession {
    /// Cards as loaded, never reordered.
    source: Vec<Card>,
    /// Cards in presentation order for the current run.
    deck: Vec<Card>,
    options: QuizOptions,
    position: usize,
    revealed: bool,
    question_side: Side,
    correct: usize,
    rng: StdRng,
}

impl QuizSession {
    /// Start a session with an entropy-seeded random source.
    pub fn new(cards: Vec<Card>, options: QuizOptions) -> Self {
        Self::with_rng(cards, options, StdRng::from_entropy())
    }

    /// Start a session whose shuffles and side picks are reproducible.
    pub fn with_seed(cards: Vec<Card>, options: QuizOptions, seed: u64) -> Self {
        Self::with_rng(cards, options, StdRng::seed_from_u64(seed))
    }

    fn with_rng(cards: Vec<Card>, options: QuizOptions, rng: StdRng) -> Self {
        let mut session = Self {
            deck: Vec::with_capacity(cards.len()),
            source: cards,
            options,
            position: 0,
            revealed: false,
            question_side: Side::Front,
            correct: 0,
            rng,
        };
        session.deal();
        session
    }

    /// Rebuild the deck from the source list and reset all counters.
    fn deal(&mut self) {
        self.deck.clear();
        self.deck.extend(self.source.iter().cloned());
        if self.options.shuffle {
            self.deck.shuffle(&mut self.rng);
        }
        self.position = 0;
        self.correct = 0;
        self.revealed = false;
        self.roll_side();

        if self.deck.is_empty() {
            tracing::info!("empty deck, session completed immediately");
        } else {
            tracing::info!(
                cards = self.deck.len(),
                shuffle = self.options.shuffle,
                randomize_sides = self.options.randomize_sides,
                "dealt deck"
            );
        }
    }

    fn roll_side(&mut self) {
        self.question_side = if self.options.randomize_sides && self.rng.gen_bool(0.5) {
            Side::Back
        } else {
            Side::Front
        };
    }

    /// Flip the current card. Ignored once the session is completed.
    pub fn reveal(&mut self) {
        if self.is_completed() {
            tracing::debug!("reveal ignored: session completed");
            return;
        }
        self.revealed = !self.revealed;
        tracing::debug!(position = self.position, revealed = self.revealed, "flipped card");
    }

    /// Record the user's self-assessment and advance.
    ///
    /// Only takes effect while the current card is revealed.
    pub fn grade(&mut self, is_correct: bool) {
        if self.is_completed() || !self.revealed {
            tracing::debug!(
                completed = self.is_completed(),
                revealed = self.revealed,
                "grade ignored"
            );
            return;
        }

        if is_correct {
            self.correct += 1;
        }
        self.position += 1;
        self.revealed = false;
        tracing::debug!(position = self.position, correct = is_correct, "graded card");

        if self.is_completed() {
            tracing::info!(tally = %self.tally(), "deck completed");
        } else {
            self.roll_side();
        }
    }

    /// Throw away progress and start over with a freshly dealt deck.
    pub fn restart(&mut self) {
        tracing::info!(
            position = self.position,
            completed = self.is_completed(),
            "restarting session"
        );
        self.deal();
    }

    /// Replace the randomization options and restart.
    pub fn set_options(&mut self, options: QuizOptions) {
        self.options = options;
        self.restart();
    }

    /// Text currently showing: the question side, or the answer side once
    /// revealed. `None` once completed.
    pub fn current_content(&self) -> Option<&str> {
        let card = self.current_card()?;
        Some(card.side(self.shown_side()))
    }

    /// Side currently facing the user.
    pub fn shown_side(&self) -> Side {
        if self.revealed {
            self.question_side.other()
        } else {
            self.question_side
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.position)
    }

    pub fn view(&self) -> SessionView<'_> {
        let Some(card) = self.current_card() else {
            return SessionView::Completed(self.tally());
        };

        SessionView::Active(CardView {
            number: self.position + 1,
            total: self.deck.len(),
            correct: self.correct,
            question_side: self.question_side,
            question: card.side(self.question_side),
            answer: self.revealed.then(|| card.side(self.question_side.other())),
        })
    }

    pub fn phase(&self) -> Phase {
        if self.is_completed() {
            Phase::Completed
        } else {
            Phase::Active
        }
    }

    pub fn is_completed(&self) -> bool {
        self.position >= self.deck.len()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// Cards graded since the last (re)start.
    pub fn graded_count(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn options(&self) -> QuizOptions {
        self.options
    }

    pub fn question_side(&self) -> Side {
        self.question_side
    }

    pub fn tally(&self) -> Tally {
        Tally {
            correct: self.correct,
            total: self.deck.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn colors() -> Vec<Card> {
        vec![Card::new("rojo", "red"), Card::new("azul", "blue")]
    }

    fn words(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card::new(format!("palabra {i}"), format!("word {i}")))
            .collect()
    }

    fn sorted(cards: &[Card]) -> Vec<Card> {
        let mut cards = cards.to_vec();
        cards.sort_by(|a, b| a.front.cmp(&b.front));
        cards
    }

    #[test]
    fn test_two_card_scenario() {
        let mut session = QuizSession::new(colors(), QuizOptions::default());
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.current_content(), Some("rojo"));

        session.reveal();
        assert_eq!(session.current_content(), Some("red"));

        session.grade(true);
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.position(), 1);
        assert!(!session.is_revealed());
        assert_eq!(session.current_content(), Some("azul"));

        session.reveal();
        session.grade(false);
        assert_eq!(session.correct_count(), 1);
        assert_eq!(session.position(), 2);
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.tally().to_string(), "1 out of 2");
        assert_eq!(session.view(), SessionView::Completed(Tally { correct: 1, total: 2 }));
    }

    #[test]
    fn test_reveal_twice_restores() {
        let mut session = QuizSession::new(colors(), QuizOptions::default());
        session.reveal();
        session.reveal();
        assert!(!session.is_revealed());
        assert_eq!(session.current_content(), Some("rojo"));
    }

    #[test]
    fn test_grade_before_reveal_is_ignored() {
        let mut session = QuizSession::new(colors(), QuizOptions::default());
        session.grade(true);
        assert_eq!(session.position(), 0);
        assert_eq!(session.correct_count(), 0);
    }

    #[test]
    fn test_completed_ignores_events() {
        let mut session = QuizSession::new(colors(), QuizOptions::default());
        for _ in 0..2 {
            session.reveal();
            session.grade(true);
        }
        assert!(session.is_completed());

        session.reveal();
        session.grade(true);
        assert!(!session.is_revealed());
        assert_eq!(session.correct_count(), 2);
        assert_eq!(session.position(), 2);
        assert_eq!(session.current_content(), None);
    }

    #[test]
    fn test_restart_resets() {
        let mut session = QuizSession::new(colors(), QuizOptions::default());
        session.reveal();
        session.grade(true);
        session.reveal();

        session.restart();
        assert_eq!(session.position(), 0);
        assert_eq!(session.correct_count(), 0);
        assert!(!session.is_revealed());
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.deck(), colors().as_slice());
    }

    #[test]
    fn test_empty_deck_is_completed() {
        let mut session = QuizSession::new(Vec::new(), QuizOptions::default());
        assert!(session.is_empty());
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.tally().to_string(), "0 out of 0");

        session.reveal();
        session.restart();
        assert_eq!(session.phase(), Phase::Completed);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_view_active() {
        let mut session = QuizSession::new(colors(), QuizOptions::default());
        let SessionView::Active(view) = session.view() else {
            panic!("expected active view");
        };
        assert_eq!(view.number, 1);
        assert_eq!(view.total, 2);
        assert_eq!(view.question, "rojo");
        assert_eq!(view.answer, None);

        session.reveal();
        let SessionView::Active(view) = session.view() else {
            panic!("expected active view");
        };
        assert_eq!(view.question, "rojo");
        assert_eq!(view.answer, Some("red"));
    }

    #[test]
    fn test_restart_reshuffles_permutation() {
        let cards = words(20);
        let options = QuizOptions { shuffle: true, randomize_sides: false };
        let mut session = QuizSession::with_seed(cards.clone(), options, 7);

        let mut orders = Vec::new();
        for _ in 0..10 {
            while !session.is_completed() {
                session.reveal();
                session.grade(true);
            }
            session.restart();
            assert_eq!(session.len(), cards.len());
            assert_eq!(sorted(session.deck()), sorted(&cards));
            orders.push(session.deck().to_vec());
        }

        assert!(orders.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_unshuffled_keeps_source_order() {
        let cards = words(5);
        let mut session = QuizSession::with_seed(cards.clone(), QuizOptions::default(), 1);
        session.restart();
        assert_eq!(session.deck(), cards.as_slice());
    }

    #[test]
    fn test_random_sides_uses_both_sides() {
        let options = QuizOptions { shuffle: false, randomize_sides: true };
        let mut session = QuizSession::with_seed(words(20), options, 42);

        let mut seen = Vec::new();
        for _ in 0..5 {
            while !session.is_completed() {
                seen.push(session.question_side());
                session.reveal();
                session.grade(false);
            }
            session.restart();
        }

        assert!(seen.contains(&Side::Front));
        assert!(seen.contains(&Side::Back));
    }

    #[test]
    fn test_set_options_restarts() {
        let mut session = QuizSession::with_seed(words(4), QuizOptions::default(), 3);
        session.reveal();
        session.grade(true);

        let options = QuizOptions { shuffle: true, randomize_sides: true };
        session.set_options(options);
        assert_eq!(session.options(), options);
        assert_eq!(session.position(), 0);
        assert_eq!(session.correct_count(), 0);
    }

    #[derive(Debug, Clone)]
    enum Action {
        Reveal,
        Grade(bool),
        Restart,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            3 => Just(Action::Reveal),
            3 => any::<bool>().prop_map(Action::Grade),
            1 => Just(Action::Restart),
        ]
    }

    proptest! {
        #[test]
        fn prop_invariants_hold(
            n in 0usize..8,
            shuffle in any::<bool>(),
            randomize_sides in any::<bool>(),
            seed in any::<u64>(),
            actions in prop::collection::vec(action(), 0..64),
        ) {
            let cards = words(n);
            let options = QuizOptions { shuffle, randomize_sides };
            let mut session = QuizSession::with_seed(cards.clone(), options, seed);
            let mut grade_calls = 0usize;

            for action in actions {
                let before = session.position();
                match action {
                    Action::Reveal => session.reveal(),
                    Action::Grade(ok) => {
                        grade_calls += 1;
                        session.grade(ok);
                    }
                    Action::Restart => {
                        grade_calls = 0;
                        session.restart();
                        prop_assert_eq!(session.position(), 0);
                        prop_assert_eq!(session.correct_count(), 0);
                        prop_assert!(!session.is_revealed());
                        prop_assert_eq!(session.is_completed(), n == 0);
                        prop_assert_eq!(sorted(session.deck()), sorted(&cards));
                    }
                }

                prop_assert!(session.correct_count() <= session.graded_count());
                prop_assert!(session.correct_count() <= grade_calls);
                prop_assert!(session.graded_count() <= session.len());
                if session.position() != before {
                    prop_assert!(!session.is_revealed());
                }
                prop_assert_eq!(session.is_completed(), session.position() == session.len());

                if let Some(card) = session.current_card() {
                    let shown = session.current_content().unwrap_or_default();
                    let side = session.shown_side();
                    prop_assert_eq!(shown, card.side(side));
                    if !randomize_sides {
                        prop_assert_eq!(session.question_side(), Side::Front);
                    }
                } else {
                    prop_assert!(session.current_content().is_none());
                }
            }
        }
    }
}
