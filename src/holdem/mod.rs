/// Module for `EquityGame`, the Monte Carlo win probability
/// estimator, and its `SimulationResult` output.
mod equity;
/// Export `EquityGame` and friends
pub use self::equity::{
    BOARD_SIZE, DEFAULT_TRIALS, EquityGame, HoleCards, MAX_OPPONENTS, SimulationResult,
};
