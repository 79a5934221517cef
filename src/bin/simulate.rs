//! Headless simulator: plays whole hands with every seat on the heuristic.
//!
//! The human seat goes through the human operations, so this exercises the
//! same paths a front end would use.
//!
//! Usage: cargo run --bin simulate -- [--hands 100] [--seed 42] [--config table.json] [--reports]

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use gap_five::core::{Action, GameRng, GameState, Outcome, Seat, SeatMap, TableConfig, WinKind};
use gap_five::report::{commentary_or_fallback, DiscardReport, LocalCoach};
use gap_five::rules::RulesEngine;
use gap_five::{debug, fatal, info, warn, Table};

/// Simulate gap-five hands
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play bot-only gap-five hands and summarize the outcomes", long_about = None)]
struct Args {
    /// Number of hands to play
    #[arg(long, default_value_t = 100)]
    hands: usize,

    /// Session seed (overrides the config file's seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Table configuration as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a discard report and commentary for every human discard
    #[arg(long)]
    reports: bool,

    /// Log every action
    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct Summary {
    self_drawn: usize,
    on_discard: usize,
    drawn: usize,
    wins: SeatMap<usize>,
}

impl Summary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win(win) => {
                match win.kind {
                    WinKind::SelfDrawn => self.self_drawn += 1,
                    WinKind::OnDiscard { .. } => self.on_discard += 1,
                }
                self.wins[win.winner] += 1;
            }
            Outcome::Exhausted => self.drawn += 1,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<TableConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(TableConfig::default()),
    }
}

/// Play the human seat's next action the way a bot would.
fn human_step(
    table: &Table,
    state: &GameState,
    reports: bool,
) -> Result<GameState, Box<dyn Error>> {
    let started = Instant::now();
    let action = table.suggest(state).ok_or("no action available for the human seat")?;
    debug!("{} plays {:?}", Seat::Human, action);

    let next = match action {
        Action::Draw => table.try_draw(state)?,
        Action::Discard(tile) => table.try_discard(state, tile)?,
        Action::DeclareQuad(kind) => table.try_declare_quad(state, kind)?,
        Action::Respond(response) => table.try_respond(state, response)?,
    };

    if reports && matches!(action, Action::Discard(_)) {
        if let Some(report) = DiscardReport::capture(state, &next, Seat::Human, started.elapsed()) {
            println!("{}", report.to_json()?);
            println!("{}", commentary_or_fallback(&LocalCoach, &report));
        }
    }
    Ok(next)
}

fn play_hand(
    table: &Table,
    mut state: GameState,
    reports: bool,
) -> Result<Outcome, Box<dyn Error>> {
    while table.is_terminal(&state).is_none() {
        state = if state.active_seat().is_human() {
            human_step(table, &state, reports)?
        } else {
            let seat = state.active_seat();
            let next = table.try_advance_bot(&state)?;
            debug!("{} finished its turn, {} tiles left", seat, next.deck.len());
            next
        };

        if !state.conserves_tiles() {
            warn!("tile conservation broken in round {}", state.round);
        }
    }
    table
        .is_terminal(&state)
        .ok_or_else(|| "hand ended without an outcome".into())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    gap_five::log::set_verbose(args.verbose);

    let mut config = load_config(args.config.as_ref())?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let table = Table::new(config);
    let mut session = GameRng::new(table.config().seed);
    let mut summary = Summary::default();

    info!("playing {} hands, session seed {}", args.hands, session.seed());
    for hand in 1..=args.hands {
        let mut rng = session.fork();
        let state = table.new_hand_with_rng(&mut rng);
        let outcome = play_hand(&table, state, args.reports)?;

        match &outcome {
            Outcome::Win(win) => info!(
                "hand {}: {} wins ({:?}) with {}",
                hand,
                table.config().seat_names[win.winner],
                win.kind,
                win.hand.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
            ),
            Outcome::Exhausted => info!("hand {}: drawn", hand),
        }
        summary.record(&outcome);
    }

    println!(
        "hands: {}  self-drawn: {}  on discard: {}  drawn: {}",
        args.hands, summary.self_drawn, summary.on_discard, summary.drawn
    );
    for (seat, wins) in summary.wins.iter() {
        println!("  {:<8} {}", table.config().seat_names[seat], wins);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        fatal!("{}", err);
    }
}
