//! This is the core module. It exports the poker primitives that
//! are agnostic to any particular game: cards, the deck, hand
//! ranking, and the crate error type.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Hand ranking code for 5 to 7 card hands.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, EvalMode, Rank, Rankable};

/// The crate error type.
mod error;
/// Export `EquityError`
pub use self::error::EquityError;
