use super::card::Card;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to the strength of the
/// hand in comparison to others of the same rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// A hand rank with the tie-break detail stripped away.
///
/// Categories are totally ordered by strength, so two hands can be
/// compared directly. When only the category matters (the legacy
/// whole-hand evaluation splits ties at this level) this is the
/// result type.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
}

/// Convert from Rank to Category by stripping the u32 detail.
impl From<Rank> for Category {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::HighCard(_) => Category::HighCard,
            Rank::OnePair(_) => Category::OnePair,
            Rank::TwoPair(_) => Category::TwoPair,
            Rank::ThreeOfAKind(_) => Category::ThreeOfAKind,
            Rank::Straight(_) => Category::Straight,
            Rank::Flush(_) => Category::Flush,
            Rank::FullHouse(_) => Category::FullHouse,
            Rank::FourOfAKind(_) => Category::FourOfAKind,
            Rank::StraightFlush(_) => Category::StraightFlush,
        }
    }
}

/// Lift a bare category into a `Rank` with a zero payload.
///
/// Two lifted categories compare exactly as the categories do, so
/// the simulator can mix the two evaluation modes behind one
/// ordered type.
impl From<Category> for Rank {
    fn from(category: Category) -> Self {
        match category {
            Category::HighCard => Rank::HighCard(0),
            Category::OnePair => Rank::OnePair(0),
            Category::TwoPair => Rank::TwoPair(0),
            Category::ThreeOfAKind => Rank::ThreeOfAKind(0),
            Category::Straight => Rank::Straight(0),
            Category::Flush => Rank::Flush(0),
            Category::FullHouse => Rank::FullHouse(0),
            Category::FourOfAKind => Rank::FourOfAKind(0),
            Category::StraightFlush => Rank::StraightFlush(0),
        }
    }
}

/// Which evaluation the simulator should run for each hand.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum EvalMode {
    /// Find the best five card hand among all the cards, with
    /// kicker tie-breaking and wheel straight detection.
    #[default]
    BestFive,
    /// The legacy whole-hand test: flush and straight checks run
    /// over every card at once, no wheel, no kickers. Kept for
    /// compatibility with the historical estimator's output.
    WholeHand,
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Given a bitset of card values, determine if there's a straight
/// and give its rank. Wheel is the lowest, broadway the highest.
///
/// Returns None if the values don't contain a straight.
fn rank_straight(value_set: u32) -> Option<u32> {
    // Five consecutive set bits survive the shifted AND chain.
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    let idx = left.leading_zeros();
    if idx < 32 {
        Some(32 - 4 - idx)
    } else if value_set & WHEEL == WHEEL {
        // The ace plays low in the wheel so the shifted AND misses it.
        Some(0)
    } else {
        None
    }
}

/// Keep only the most significant bit.
fn keep_highest(rank: u32) -> u32 {
    1 << (32 - rank.leading_zeros() - 1)
}

/// Keep the N most significant bits.
///
/// This works by removing the least significant bits.
fn keep_n(rank: u32, to_keep: u32) -> u32 {
    let mut result = rank;
    while result.count_ones() > to_keep {
        result &= result - 1;
    }
    result
}

/// From a slice of per-suit value sets find if there's one that
/// has a flush.
fn find_flush(suit_value_sets: &[u32]) -> Option<usize> {
    suit_value_sets.iter().position(|sv| sv.count_ones() >= 5)
}

/// Can this turn into a hand rank? There are implementations for
/// `Vec<Card>` and card slices.
pub trait Rankable {
    /// The cards to evaluate. Input order never affects the result.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards to find the best five card hand.
    ///
    /// This works on five cards or more (specifically on 7 card
    /// holdem hands): flushes need only five suited cards among
    /// the input, straights may use any five values, and every
    /// paired category carries its kickers in the payload.
    fn rank(&self) -> Rank {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut count_to_value: [u32; 5] = [0; 5];
        let mut suit_value_sets: [u32; 4] = [0; 4];
        let mut value_set: u32 = 0;

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
            suit_value_sets[s as usize] |= 1 << v;
        }

        // Rotate the value counts into per-count value sets.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        let flush = find_flush(&suit_value_sets);

        if let Some(flush_idx) = flush {
            // A straight inside the flush suit beats everything the
            // other cards could make, so check only those values.
            if let Some(rank) = rank_straight(suit_value_sets[flush_idx]) {
                Rank::StraightFlush(rank)
            } else {
                let rank = keep_n(suit_value_sets[flush_idx], 5);
                Rank::Flush(rank)
            }
        } else if count_to_value[4] != 0 {
            let high = keep_highest(value_set ^ count_to_value[4]);
            Rank::FourOfAKind((count_to_value[4] << 13) | high)
        } else if count_to_value[3] != 0 && count_to_value[3].count_ones() == 2 {
            // Two sets; the best five cards are the higher set plus
            // two cards of the lower one.
            let set = keep_highest(count_to_value[3]);
            let pair = count_to_value[3] ^ set;
            Rank::FullHouse((set << 13) | pair)
        } else if count_to_value[3] != 0 && count_to_value[2] != 0 {
            let set = count_to_value[3];
            let pair = keep_highest(count_to_value[2]);
            Rank::FullHouse((set << 13) | pair)
        } else if let Some(s_rank) = rank_straight(value_set) {
            Rank::Straight(s_rank)
        } else if count_to_value[3] != 0 {
            // A set keeps the two highest cards outside it.
            let low = keep_n(value_set ^ count_to_value[3], 2);
            Rank::ThreeOfAKind((count_to_value[3] << 13) | low)
        } else if count_to_value[2].count_ones() >= 2 {
            // Two pair, possibly chosen out of three pairs.
            let pairs = keep_n(count_to_value[2], 2);
            let low = keep_highest(value_set ^ pairs);
            Rank::TwoPair((pairs << 13) | low)
        } else if count_to_value[2] == 0 {
            Rank::HighCard(keep_n(value_set, 5))
        } else {
            let pair = count_to_value[2];
            // Keep the highest three cards not in the pair.
            let low = keep_n(value_set ^ count_to_value[2], 3);
            Rank::OnePair((pair << 13) | low)
        }
    }

    /// Classify the cards with the legacy whole-hand test.
    ///
    /// The flush test requires *every* card to share one suit and
    /// the straight test requires *every* value to be distinct and
    /// contiguous (ace always high, so the wheel is not a
    /// straight). On seven cards this can under-value a hand; that
    /// is the documented historical behavior, selected through
    /// [`EvalMode::WholeHand`].
    fn rank_whole(&self) -> Category {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut suit_set: u32 = 0;
        let mut value_set: u32 = 0;
        let mut num_cards: u32 = 0;

        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;
            suit_set |= 1 << s;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
            num_cards += 1;
        }

        let mut pairs = 0;
        let mut has_three = false;
        let mut has_four = false;
        for &count in &value_to_count {
            match count {
                2 => pairs += 1,
                3 => has_three = true,
                4 => has_four = true,
                _ => {}
            }
        }

        let is_flush = suit_set.count_ones() == 1;
        let highest = 31 - value_set.leading_zeros();
        let lowest = value_set.trailing_zeros();
        // Contiguous run covering every card: no duplicate values
        // and the spread matches the card count.
        let is_straight =
            value_set.count_ones() == num_cards && highest - lowest == num_cards - 1;

        if is_straight && is_flush {
            Category::StraightFlush
        } else if has_four {
            Category::FourOfAKind
        } else if has_three && pairs > 0 {
            Category::FullHouse
        } else if is_flush {
            Category::Flush
        } else if is_straight {
            Category::Straight
        } else if has_three {
            Category::ThreeOfAKind
        } else if pairs == 2 {
            // Exactly two groups of size two. Three pairs in a
            // seven card hand fall through to OnePair, as the
            // historical classifier did.
            Category::TwoPair
        } else if pairs > 0 {
            Category::OnePair
        } else {
            Category::HighCard
        }
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl<const N: usize> Rankable for [Card; N] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
