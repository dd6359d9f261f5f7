//! CLI host for the SOUL combat stage.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soul_stage::{Actor, StageConfig};

#[derive(Parser)]
#[command(
    name = "soul",
    about = "SOUL combat stage: a turn-based encounter engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    options: HostOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
struct HostOptions {
    /// JSON file the encounter is loaded from and saved to
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    /// Chance (0-1) of a random major event once the cooldown has passed
    #[arg(long, global = true, default_value_t = soul_stage::config::DEFAULT_MAJOR_EVENT_CHANCE)]
    major_event_chance: f64,

    /// Turns between random major events, used for new encounters
    #[arg(long, global = true, default_value_t = soul_stage::config::DEFAULT_MAJOR_EVENT_COOLDOWN)]
    cooldown: i64,

    /// Name of the actor issuing commands
    #[arg(short, long, global = true, default_value = "GM")]
    actor: String,

    /// Issue commands as a narrator-controlled character
    #[arg(long, global = true)]
    npc: bool,
}

impl HostOptions {
    fn config(&self) -> StageConfig {
        StageConfig::default()
            .with_seed(self.seed)
            .with_major_event_chance(self.major_event_chance)
            .with_major_event_cooldown(self.cooldown)
    }

    fn actor(&self) -> Actor {
        if self.npc {
            Actor::npc(&self.actor)
        } else {
            Actor::new(&self.actor)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a single command to the encounter and print the report
    Exec {
        /// Command name (e.g. add, feed, nextturn)
        name: String,

        /// Command arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Read commands from stdin, one per line
    Play,

    /// Write a fresh encounter to the state file
    New {
        /// Overwrite an existing state file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soul_stage=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.options.config();
    let actor = cli.options.actor();
    let state = cli.options.state.as_deref();

    let result = match &cli.command {
        Commands::Exec { name, args } => commands::exec::run(config, &actor, state, name, args),
        Commands::Play => commands::play::run(config, &actor, state),
        Commands::New { force } => commands::new::run(&config, state, *force),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
