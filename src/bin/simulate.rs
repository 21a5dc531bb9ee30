//! Random self-play
//!
//! Plays N hands with uniformly random legal actions and reports how they ended.
//! Hand `i` is dealt by its own engine seeded `seed + i`, so results do not
//! depend on how rayon schedules the work.

use clap::Parser;
use headsup::gameplay::Ending;
use headsup::gameplay::Engine;
use headsup::gameplay::Payoff;
use headsup::*;
use rayon::prelude::*;

#[derive(Parser)]
#[command(author, version, about = "Play random heads-up hands", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 1000)]
    hands: usize,
    #[arg(long, default_value_t = SEED)]
    seed: u64,
    #[arg(long, default_value_t = STACK)]
    stack: Chips,
    #[arg(long, default_value_t = S_BLIND)]
    small_blind: Chips,
    #[arg(long, default_value_t = B_BLIND)]
    big_blind: Chips,
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    anyhow::ensure!(
        0 < args.small_blind && args.small_blind <= args.big_blind && args.big_blind < args.stack,
        "blinds {}/{} do not fit a stack of {}",
        args.small_blind,
        args.big_blind,
        args.stack
    );
    let payoffs = (0..args.hands)
        .into_par_iter()
        .map(|i| -> anyhow::Result<Payoff> {
            let ref mut engine = Engine::new(args.seed.wrapping_add(i as u64));
            let ref mut play = engine.new_hand(args.stack, args.small_blind, args.big_blind);
            let payoff = engine.play_out(play)?;
            log::debug!("hand {}\n{}{}", i, play, payoff);
            Ok(payoff)
        })
        .collect::<anyhow::Result<Vec<Payoff>>>()?;
    let folds = payoffs.iter().filter(|p| p.ending() == Ending::Fold).count();
    let splits = payoffs.iter().filter(|p| p.winner().is_none()).count();
    let totals = payoffs.iter().fold([0 as Chips; N], |mut acc, p| {
        acc.iter_mut().zip(p.delta()).for_each(|(a, d)| *a += d);
        acc
    });
    log::info!("hands     {:>8}", payoffs.len());
    log::info!("folds     {:>8}", folds);
    log::info!("showdowns {:>8}", payoffs.len() - folds);
    log::info!("splits    {:>8}", splits);
    log::info!("P0 delta  {:>+8}", totals[0]);
    log::info!("P1 delta  {:>+8}", totals[1]);
    Ok(())
}
