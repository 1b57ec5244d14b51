#[macro_use]
extern crate criterion;
extern crate holdem_equity;
extern crate rand;

use criterion::Criterion;
use rand::SeedableRng;
use rand::rngs::StdRng;

use holdem_equity::core::{Deck, EvalMode, Rank, Rankable};
use holdem_equity::holdem::EquityGame;

fn deal_table(rng: &mut StdRng, opponents: usize) -> EquityGame {
    let mut deck = Deck::new();
    deck.shuffle(rng);
    let player = [deck[0], deck[1]];
    let hands: Vec<[_; 2]> = (0..opponents)
        .map(|i| [deck[2 + 2 * i], deck[3 + 2 * i]])
        .collect();
    EquityGame::new(player, &hands, &[]).unwrap()
}

fn rank_seven_best_five(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let hand = deck[..7].to_vec();
    c.bench_function("Rank best 5 card hand from 7", move |b| {
        b.iter(|| hand.rank())
    });
}

fn rank_seven_whole_hand(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    let hand = deck[..7].to_vec();
    c.bench_function("Rank whole 7 card hand", move |b| {
        b.iter(|| Rank::from(hand.rank_whole()))
    });
}

fn simulate_heads_up(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let game = deal_table(&mut rng, 1);
    c.bench_function("Simulate 1000 trials heads up", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| game.simulate_with_rng(1000, &mut rng))
    });
}

fn simulate_full_table(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let game = deal_table(&mut rng, 8);
    c.bench_function("Simulate 1000 trials with 8 opponents", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| game.simulate_with_rng(1000, &mut rng))
    });
}

fn simulate_whole_hand(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let game = deal_table(&mut rng, 1).eval_mode(EvalMode::WholeHand);
    c.bench_function("Simulate 1000 trials whole hand mode", move |b| {
        let mut rng = StdRng::seed_from_u64(420);
        b.iter(|| game.simulate_with_rng(1000, &mut rng))
    });
}

criterion_group!(
    benches,
    rank_seven_best_five,
    rank_seven_whole_hand,
    simulate_heads_up,
    simulate_full_table,
    simulate_whole_hand
);
criterion_main!(benches);
