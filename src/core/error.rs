use thiserror::Error;

use super::Card;

/// This is the core error type for the library. It uses
/// `thiserror` to provide readable error messages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquityError {
    /// The deck was asked for more cards than it holds. Inside
    /// the simulator this is recovered by skipping the trial.
    #[error("deck cannot deal {requested} cards, only {available} remain")]
    InsufficientCards {
        /// How many cards the caller asked for.
        requested: usize,
        /// How many cards were left in the deck.
        available: usize,
    },
    /// A simulation needs between one and eight opponents; with
    /// more, deck exhaustion makes the sampled output meaningless.
    #[error("opponent count {0} is outside the supported range of 1 to 8")]
    InvalidOpponentCount(usize),
    /// The known community cards must correspond to a betting
    /// stage: pre-flop, flop, turn, or river.
    #[error("community board must have 0, 3, 4, or 5 cards, got {0}")]
    InvalidBoardSize(usize),
    /// The same card was supplied twice across hole cards and board.
    #[error("card {0} appears more than once across hands and board")]
    DuplicateCard(Card),
}
