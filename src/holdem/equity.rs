use std::cmp::Ordering;

use rand::Rng;
use tracing::debug;

use crate::core::{Card, Deck, EquityError, EvalMode, Rank, Rankable};

/// Number of trials to run when the caller has no opinion.
pub const DEFAULT_TRIALS: u32 = 1000;

/// The most opponents a simulation will accept. Above this the
/// reduced deck gets thin enough that sampled output stops being
/// meaningful.
pub const MAX_OPPONENTS: usize = 8;

/// The full community board size.
pub const BOARD_SIZE: usize = 5;

/// A participant's two private cards.
pub type HoleCards = [Card; 2];

/// A Monte Carlo equity estimation for one player against a set of
/// opponents with known hole cards.
///
/// Construction validates the inputs once; [`EquityGame::simulate`]
/// can then be called any number of times, with progressively
/// longer known boards via [`EquityGame::stages`] if the caller is
/// walking through betting rounds.
///
/// ```
/// use holdem_equity::core::{Card, Suit, Value};
/// use holdem_equity::holdem::EquityGame;
///
/// let player = [
///     Card::new(Value::Ace, Suit::Spade),
///     Card::new(Value::Ace, Suit::Heart),
/// ];
/// let villain = [
///     Card::new(Value::Two, Suit::Club),
///     Card::new(Value::Two, Suit::Diamond),
/// ];
/// let game = EquityGame::new(player, &[villain], &[]).unwrap();
/// let result = game.simulate(1000);
/// assert!(result.player() > result.percentage(1));
/// ```
#[derive(Debug, Clone)]
pub struct EquityGame {
    /// All hole cards, player first.
    hands: Vec<HoleCards>,
    /// The known community cards, 0, 3, 4, or 5 of them.
    board: Vec<Card>,
    /// How each seven card hand is ranked.
    mode: EvalMode,
}

impl EquityGame {
    /// Set up a game from the player's hole cards, each opponent's
    /// hole cards, and the community cards revealed so far.
    ///
    /// Fails if the opponent count is outside `1..=8`, the board is
    /// not a betting-stage size (0, 3, 4, or 5), or any card
    /// appears twice.
    pub fn new(
        player: HoleCards,
        opponents: &[HoleCards],
        board: &[Card],
    ) -> Result<Self, EquityError> {
        if !(1..=MAX_OPPONENTS).contains(&opponents.len()) {
            return Err(EquityError::InvalidOpponentCount(opponents.len()));
        }
        if !matches!(board.len(), 0 | 3 | 4 | BOARD_SIZE) {
            return Err(EquityError::InvalidBoardSize(board.len()));
        }

        let mut hands = Vec::with_capacity(opponents.len() + 1);
        hands.push(player);
        hands.extend_from_slice(opponents);

        // Pull every known card out of one deck; a card that is
        // already gone has been supplied twice.
        let mut deck = Deck::new();
        for &card in hands.iter().flatten().chain(board.iter()) {
            if !deck.contains(&card) {
                return Err(EquityError::DuplicateCard(card));
            }
            deck.exclude(&[card]);
        }

        Ok(Self {
            hands,
            board: board.to_vec(),
            mode: EvalMode::default(),
        })
    }

    /// Choose the evaluation mode, consuming and returning the game
    /// so it chains off [`EquityGame::new`].
    pub fn eval_mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Total number of participants, the player included.
    pub fn players(&self) -> usize {
        self.hands.len()
    }

    /// The known community cards.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// The board prefixes for each betting stage covered by the
    /// known cards: pre-flop, then flop, turn, and river as far as
    /// the board reaches. Re-running [`EquityGame::new`] with each
    /// prefix walks the estimate through the reveal sequence.
    pub fn stages(&self) -> impl Iterator<Item = &[Card]> {
        [0, 3, 4, BOARD_SIZE]
            .into_iter()
            .filter(|&n| n <= self.board.len())
            .map(|n| &self.board[..n])
    }

    /// Run `trials` independent trials with a process RNG.
    ///
    /// See [`EquityGame::simulate_with_rng`] for the semantics; use
    /// that directly when reproducibility matters.
    pub fn simulate(&self, trials: u32) -> SimulationResult {
        self.simulate_with_rng(trials, &mut rand::rng())
    }

    /// Run `trials` independent trials against the given RNG and
    /// aggregate win percentages per participant.
    ///
    /// Each trial builds a fresh deck without the known cards,
    /// shuffles it, completes the board to five cards, and ranks
    /// every participant's seven cards. All participants sharing
    /// the best rank split one unit of win credit evenly. A trial
    /// whose board cannot be completed is skipped but still counts
    /// in the divisor, biasing every percentage downward; skips are
    /// reported so callers can judge the output.
    ///
    /// The same seeded RNG reproduces the same result bit for bit.
    pub fn simulate_with_rng<R: Rng>(&self, trials: u32, rng: &mut R) -> SimulationResult {
        let mut credit = vec![0.0f64; self.hands.len()];
        let mut skipped: u32 = 0;
        let mut winners: Vec<usize> = Vec::with_capacity(self.hands.len());
        let mut seven: Vec<Card> = Vec::with_capacity(7);
        let needed = BOARD_SIZE - self.board.len();

        for trial in 0..trials {
            // A fresh deck per trial keeps the samples independent;
            // no deck state survives from one trial to the next.
            let mut deck = Deck::new();
            for hand in &self.hands {
                deck.exclude(hand);
            }
            deck.exclude(&self.board);
            deck.shuffle(rng);

            let drawn = match deck.deal(needed) {
                Ok(cards) => cards,
                Err(err) => {
                    debug!(trial, %err, "skipping trial");
                    skipped += 1;
                    continue;
                }
            };

            winners.clear();
            let mut best = Rank::HighCard(0);
            for (idx, hole) in self.hands.iter().enumerate() {
                seven.clear();
                seven.extend_from_slice(hole);
                seven.extend_from_slice(&self.board);
                seven.extend_from_slice(&drawn);

                let rank = match self.mode {
                    EvalMode::BestFive => seven.rank(),
                    EvalMode::WholeHand => Rank::from(seven.rank_whole()),
                };
                match rank.cmp(&best) {
                    Ordering::Greater => {
                        winners.clear();
                        winners.push(idx);
                        best = rank;
                    }
                    Ordering::Equal => winners.push(idx),
                    Ordering::Less => {}
                }
            }

            // Split the pot between every co-winner of this trial.
            let share = 1.0 / winners.len() as f64;
            for &idx in &winners {
                credit[idx] += share;
            }
        }

        debug!(trials, skipped, players = self.hands.len(), "simulation complete");

        let percentages = credit
            .iter()
            .map(|c| c / f64::from(trials) * 100.0)
            .collect();

        SimulationResult {
            percentages,
            trials,
            skipped,
        }
    }
}

/// The outcome of one simulation run: a win percentage per
/// participant, index 0 being the player and `1..=N` the opponents
/// in their input order.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    percentages: Vec<f64>,
    trials: u32,
    skipped: u32,
}

impl SimulationResult {
    /// The win percentage for one participant, in `[0, 100]`.
    pub fn percentage(&self, participant: usize) -> f64 {
        self.percentages[participant]
    }

    /// The player's win percentage.
    pub fn player(&self) -> f64 {
        self.percentages[0]
    }

    /// All percentages, player first.
    pub fn percentages(&self) -> &[f64] {
        &self.percentages
    }

    /// How many trials were requested.
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// How many trials could not complete the board and were
    /// skipped. Anything above zero means the percentages are
    /// biased downward and should be treated as unreliable.
    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}
