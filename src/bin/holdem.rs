//! Hold'em command line
//!
//! Score a hand, run a board out street by street, or estimate all-in
//! equity through the values cache. `HOLDEM_CACHE_MAX`, `HOLDEM_SAMPLES` and
//! `HOLDEM_SEED` set defaults that the flags below override.

use anyhow::Context;
use clap::Parser;
use holdem::cache::ValuesCache;
use holdem::cards::CommunityHand;
use holdem::cards::Hand;
use holdem::cards::Hole;
use holdem::cards::Round;
use holdem::config::Config;
use holdem::evaluation::LookupTable;
use holdem::evaluation::RankTable;
use holdem::evaluation::best_rank;
use holdem::showdown::HoldemHand;
use holdem::simulation::Simulator;
use std::cell::RefCell;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Best rank of a hand on a board", alias = "r")]
    Rank {
        #[arg(required = true)]
        hole: String,
        board: Option<String>,
    },
    #[command(about = "Deal a board one street at a time", alias = "run")]
    Runout {
        #[arg(required = true)]
        hole: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "All-in equity of one hand against another", alias = "eq")]
    Equity {
        #[arg(required = true)]
        hero: String,
        #[arg(required = true)]
        villain: String,
        board: Option<String>,
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    holdem::log();
    let mut config = Config::from_env();
    match Command::parse() {
        Command::Rank { hole, board } => rank(&hole, board.as_deref().unwrap_or_default()),
        Command::Runout { hole, seed } => {
            config.seed = seed.or(config.seed);
            runout(&config, &hole)
        }
        Command::Equity {
            hero,
            villain,
            board,
            samples,
            seed,
        } => {
            config.samples = samples.unwrap_or(config.samples);
            config.seed = seed.or(config.seed);
            equity(&config, &hero, &villain, board.as_deref().unwrap_or_default())
        }
    }
}

fn rank(hole: &str, board: &str) -> anyhow::Result<()> {
    let hole = Hole::try_from(hole).context("hole cards")?;
    let board = CommunityHand::try_from(board).context("board")?;
    let shared = board.cards();
    Hand::disjoint(&[hole.cards().as_slice(), shared.as_slice()].concat())
        .context("hole and board")?;
    let table = LookupTable::global();
    match best_rank(table, &hole, &shared) {
        Some(rank) => println!("{} {} rank {} ({})", hole, board, rank, table.category_of(rank)),
        None => println!("{} {} cannot be ranked before the flop", hole, board),
    }
    Ok(())
}

fn runout(config: &Config, hole: &str) -> anyhow::Result<()> {
    let hole = Hole::try_from(hole).context("hole cards")?;
    let mut deck = config.deck();
    deck.remove(hole.cards());
    let community = RefCell::new(CommunityHand::new());
    let mut hand = HoldemHand::with_community(&community);
    hand.deal(hole.cards())?;
    while community.borrow().round() < Round::River {
        let round = community.borrow_mut().deal(&mut deck, false)?;
        hand.evaluate();
        log::info!("{:<8}{}", round, hand);
    }
    Ok(())
}

fn equity(config: &Config, hero: &str, villain: &str, board: &str) -> anyhow::Result<()> {
    let hero = Hole::try_from(hero).context("hero cards")?;
    let villain = Hole::try_from(villain).context("villain cards")?;
    let board = RefCell::new(CommunityHand::try_from(board).context("board")?);
    let mut cache = ValuesCache::new(config.cache_max);
    let mut deck = config.deck();
    let simulator = Simulator::from(config);
    for _ in 0..2 {
        let start = std::time::Instant::now();
        let value = simulator.equity(&mut cache, &mut deck, &board, &hero, &villain)?;
        log::info!("{:<32}{:?}", "equity in", start.elapsed());
        print!("{}", value);
    }
    cache.clear_cache_if_full();
    Ok(())
}
