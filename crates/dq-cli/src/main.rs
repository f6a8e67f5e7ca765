//! CLI frontend for the Dicequest text adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

use dq_game::GameConfig;
use dq_text::Language;

#[derive(Parser)]
#[command(
    name = "dq",
    about = "Dicequest — a tiny console adventure with a dice game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session on this terminal (the default)
    Play {
        /// Skip the language prompt: DE or EN
        #[arg(short, long, value_parser = parse_language)]
        lang: Option<Language>,

        /// RNG seed for reproducible dice rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip narrative pauses
        #[arg(short, long)]
        fast: bool,
    },

    /// List every text key and which languages translate it
    Catalog {
        /// Output format: table, json
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn parse_language(code: &str) -> Result<Language, String> {
    Language::parse(code).ok_or_else(|| format!("unsupported language '{code}' (expected DE or EN)"))
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        None => commands::play::run(GameConfig::default()),
        Some(Commands::Play { lang, seed, fast }) => {
            let mut config = GameConfig::default().with_pacing(!fast);
            if let Some(language) = lang {
                config = config.with_language(language);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            commands::play::run(config)
        }
        Some(Commands::Catalog { format }) => commands::catalog::run(&format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
