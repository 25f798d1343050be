//! Headless runner.
//!
//! Builds a board from the command line, seeds it with a pattern, and steps it
//! for a number of generations, logging the activity as it goes.

use anyhow::{ensure, Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{debug, info};

use torcell_core::patterns;
use torcell_core::prelude::*;
use torcell_core::rule;

mod args;
mod config;

use args::Args;
use config::{Config, Pattern};

fn main() -> Result<()> {
    let config = Args::parse().into_config();
    simple_logger::init_with_level(config.sim.log_level)?;
    info!("Starting TorCell v{} ...", env!("CARGO_PKG_VERSION"));
    debug!("{:?}", config);
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let rule = rule::from_name(&config.board.rule)
        .with_context(|| format!("Unable to load rule {:?}", config.board.rule))?;
    let mut board = Board::new(
        config.board.size,
        rule.num_states(),
        config.board.default_state,
    )
    .context("Unable to create board")?;
    info!(
        "Simulating {} on a {}x{} board",
        rule,
        board.size(),
        board.size(),
    );
    board.set_rule(rule);

    let mut sim = Simulation::new(board);
    sim.push_changes(seed(config.board.pattern(), config.board.size)?);
    info!(
        "Seeded {:?} pattern; population {}",
        config.board.pattern(),
        sim.board().population(),
    );
    sim.pull_changes();

    let last_gen = config.sim.last_gen();
    while sim.generation() < last_gen {
        let gens = config.sim.step_size.min(last_gen - sim.generation());
        sim.step_by(gens)?;
        let changed = sim.pull_changes();
        info!(
            "Generation {}: {} cells changed, population {}",
            sim.generation(),
            changed.len(),
            sim.board().population(),
        );
    }

    let board = sim.board();
    let histogram = board
        .non_default_cells()
        .values()
        .counts()
        .into_iter()
        .sorted()
        .map(|(state, count)| format!("{}: {}", state, count))
        .join(", ");
    info!("Finished at generation {} ({})", sim.generation(), histogram);
    Ok(())
}

/// Returns the starting cells for a pattern, placed near the origin.
fn seed(pattern: Pattern, size: usize) -> Result<CellMap> {
    Ok(match pattern {
        Pattern::Empty => CellMap::default(),
        Pattern::Glider => patterns::glider(IVec2::new(1, 1)),
        Pattern::WireLoop => {
            ensure!(size >= 8, "Wire loop needs a board of size at least 8");
            patterns::wire_loop(size as isize, size as isize / 2)
        }
        Pattern::Ant => patterns::ant(IVec2::new(size as isize / 2, size as isize / 2)),
    })
}
