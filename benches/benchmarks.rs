criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_lookup_table,
        ranking_five_card_hand,
        ranking_river_lookup,
        ranking_river_evaluator,
        dealing_runway_and_rewind,
        simulating_flop_equity,
        hitting_values_cache,
}

fn river() -> (Hole, Vec<Card>) {
    let mut deck = Deck::seeded(0);
    let hole = deck.hole().expect("full deck");
    let board = deck.deal(5).expect("full deck");
    (hole, board)
}

fn building_lookup_table(c: &mut criterion::Criterion) {
    c.bench_function("build the 7462-class lookup table", |b| {
        b.iter(LookupTable::build)
    });
}

fn ranking_five_card_hand(c: &mut criterion::Criterion) {
    let table = LookupTable::global();
    let (_, board) = river();
    let five = [board[0], board[1], board[2], board[3], board[4]];
    c.bench_function("rank a 5-card hand by lookup", |b| {
        b.iter(|| table.rank_of_five(&five))
    });
}

fn ranking_river_lookup(c: &mut criterion::Criterion) {
    let (hole, board) = river();
    c.bench_function("rank a 7-card hand over 21 subsets", |b| {
        b.iter(|| best_rank(LookupTable::global(), &hole, &board))
    });
}

fn ranking_river_evaluator(c: &mut criterion::Criterion) {
    let (hole, board) = river();
    let hand = Hand::add(Hand::from(hole), Hand::from(board.as_slice()));
    c.bench_function("evaluate a 7-card Hand bitwise", |b| {
        b.iter(|| Strength::from(Evaluator::from(hand)))
    });
}

fn dealing_runway_and_rewind(c: &mut criterion::Criterion) {
    let mut deck = Deck::seeded(2);
    let mut board = CommunityHand::new();
    c.bench_function("deal a runway board and rewind it", |b| {
        b.iter(|| {
            board.deal(&mut deck, true).expect("deck has cards");
            board.rewind(&mut deck, Round::Preflop).expect("legal board")
        })
    });
}

fn simulating_flop_equity(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("As,Ad").expect("valid hole");
    let villain = Hole::try_from("3c,3s").expect("valid hole");
    let board = RefCell::new(CommunityHand::try_from("Kd,Qd,Jd").expect("valid flop"));
    let simulator = Simulator::new(100);
    c.bench_function("simulate 100 flop runouts", |b| {
        b.iter(|| {
            let mut cache = ValuesCache::default();
            let mut deck = Deck::seeded(3);
            simulator.equity(&mut cache, &mut deck, &board, &hero, &villain)
        })
    });
}

fn hitting_values_cache(c: &mut criterion::Criterion) {
    let hero = Hole::try_from("As,Ad").expect("valid hole");
    let villain = Hole::try_from("3c,3s").expect("valid hole");
    let board = RefCell::new(CommunityHand::try_from("Kd,Qd,Jd").expect("valid flop"));
    let simulator = Simulator::new(100);
    let mut cache = ValuesCache::default();
    let mut deck = Deck::seeded(4);
    let _ = simulator.equity(&mut cache, &mut deck, &board, &hero, &villain);
    c.bench_function("look up a cached equity", |b| {
        b.iter(|| simulator.equity(&mut cache, &mut deck, &board, &hero, &villain))
    });
}

use holdem::cache::ValuesCache;
use holdem::cards::Card;
use holdem::cards::CommunityHand;
use holdem::cards::Dealer;
use holdem::cards::Deck;
use holdem::cards::Hand;
use holdem::cards::Hole;
use holdem::cards::Round;
use holdem::evaluation::Evaluator;
use holdem::evaluation::LookupTable;
use holdem::evaluation::RankTable;
use holdem::evaluation::Strength;
use holdem::evaluation::best_rank;
use holdem::simulation::Simulator;
use std::cell::RefCell;
