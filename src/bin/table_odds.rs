extern crate holdem_equity;

use holdem_equity::core::Deck;
use holdem_equity::holdem::{DEFAULT_TRIALS, EquityGame, HoleCards, MAX_OPPONENTS};

fn main() {
    let requested: usize = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(3);
    let opponents = requested.clamp(1, MAX_OPPONENTS);
    if opponents != requested {
        println!("Opponent count {requested} unsupported, using {opponents}");
    }

    let mut rng = rand::rng();
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    let mut deal_two = || -> HoleCards {
        let cards = deck.deal(2).unwrap();
        [cards[0], cards[1]]
    };
    let player = deal_two();
    let villains: Vec<HoleCards> = (0..opponents).map(|_| deal_two()).collect();

    let game = EquityGame::new(player, &villains, &[]).unwrap();
    let result = game.simulate_with_rng(DEFAULT_TRIALS, &mut rng);

    println!(
        "Your hand: {}{} -> {:.2}% over {} trials",
        player[0],
        player[1],
        result.player(),
        result.trials()
    );
    for (idx, hand) in villains.iter().enumerate() {
        println!(
            "Opponent {}: {}{} -> {:.2}%",
            idx + 1,
            hand[0],
            hand[1],
            result.percentage(idx + 1)
        );
    }
    if result.skipped() > 0 {
        println!("Skipped {} trials", result.skipped());
    }
}
