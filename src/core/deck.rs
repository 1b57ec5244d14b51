use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Suit, Value};
use super::error::EquityError;

/// An ordered deck of cards.
///
/// A fresh deck holds the 52 canonical cards in suit-major,
/// value-minor order. Cards leave the deck through [`Deck::deal`]
/// or [`Deck::exclude`]; nothing ever puts a duplicate in, so the
/// deck is always a duplicate-free subset of the canonical 52.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage. The front of the vec is dealt first.
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Create the default 52 card deck.
    ///
    /// ```
    /// use holdem_equity::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let cards = Suit::suits()
            .into_iter()
            .flat_map(|s| Value::values().into_iter().map(move |v| Card::new(v, s)))
            .collect();
        Self { cards }
    }

    /// Remove every listed card from the remaining pool.
    /// Cards that are not present are ignored, so it is safe to
    /// exclude the same card twice.
    ///
    /// ```
    /// use holdem_equity::core::{Card, Deck, Suit, Value};
    ///
    /// let mut deck = Deck::new();
    /// let ace = Card::new(Value::Ace, Suit::Spade);
    /// deck.exclude(&[ace]);
    ///
    /// assert_eq!(51, deck.len());
    /// assert!(!deck.contains(&ace));
    /// ```
    pub fn exclude(&mut self, cards: &[Card]) {
        self.cards.retain(|c| !cards.contains(c));
    }

    /// Randomly shuffle the remaining cards in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Remove and return the first `n` cards.
    ///
    /// Fails with [`EquityError::InsufficientCards`] when `n`
    /// exceeds the remaining count; the deck is left untouched in
    /// that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EquityError> {
        if n > self.cards.len() {
            return Err(EquityError::InsufficientCards {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    /// Given a card, is it still in the deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// How many cards are there left in the deck?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a deck into an iterator over the remaining cards.
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl Index<usize> for Deck {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
impl Index<Range<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeTo<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFrom<usize>> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}
impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}
