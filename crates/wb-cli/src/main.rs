//! CLI frontend for the Wavebound wave-combat RPG.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "wb",
    about = "Wavebound: explore, fight waves of monsters, level up",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding character save files
    #[arg(short, long, global = true, default_value = ".wavebound")]
    data_dir: PathBuf,

    /// RNG seed for reproducible play (default: random)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Hit points restored by a short rest
    #[arg(long, global = true)]
    rest_heal: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character
    New {
        /// Character name
        name: String,

        /// Class: warrior, mage, or rogue
        #[arg(short, long, default_value = "warrior")]
        class: String,

        /// Roll attributes (4d6 drop lowest) instead of using the class template
        #[arg(short, long)]
        rolled: bool,
    },

    /// List saved characters
    List,

    /// Show a character sheet
    Show {
        /// Character name or id
        character: String,
    },

    /// Explore the wilds
    Explore {
        /// Character name or id
        character: String,

        /// How many times to explore
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Fight the current wave interactively
    Fight {
        /// Character name or id
        character: String,
    },

    /// Rest to recover hit points
    Rest {
        /// Character name or id
        character: String,

        /// Long rest: recover all hit points
        #[arg(short, long)]
        long: bool,
    },

    /// Quick one-exchange fight for experience
    Skirmish {
        /// Character name or id
        character: String,

        /// Monster: goblin, skeleton, or orc
        monster: String,
    },

    /// Buy from a merchant found while exploring
    Buy {
        /// Character name or id
        character: String,

        /// Item to buy
        item: String,
    },

    /// Use an item from the inventory
    Drink {
        /// Character name or id
        character: String,

        /// Item to use
        item: String,
    },

    /// List abilities (all, or those a character knows)
    Abilities {
        /// Character name or id
        character: Option<String>,
    },

    /// Print a character's journal
    Journal {
        /// Character name or id
        character: String,

        /// Output format: markdown or text
        #[arg(short, long, default_value = "markdown")]
        format: String,

        /// Only the most recent N entries
        #[arg(short = 'n', long)]
        last: Option<usize>,
    },

    /// Delete a character and its save file
    Delete {
        /// Character name or id
        character: String,
    },
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let ctx = commands::Context {
        data_dir: cli.data_dir,
        seed: cli.seed,
        rest_heal: cli.rest_heal,
    };

    let result = match cli.command {
        Commands::New {
            name,
            class,
            rolled,
        } => commands::new::run(&ctx, &name, &class, rolled),
        Commands::List => commands::list::run(&ctx),
        Commands::Show { character } => commands::show::run(&ctx, &character),
        Commands::Explore { character, times } => commands::explore::run(&ctx, &character, times),
        Commands::Fight { character } => commands::fight::run(&ctx, &character),
        Commands::Rest { character, long } => commands::rest::run(&ctx, &character, long),
        Commands::Skirmish { character, monster } => {
            commands::skirmish::run(&ctx, &character, &monster)
        }
        Commands::Buy { character, item } => commands::shop::buy(&ctx, &character, &item),
        Commands::Drink { character, item } => commands::shop::drink(&ctx, &character, &item),
        Commands::Abilities { character } => commands::abilities::run(&ctx, character.as_deref()),
        Commands::Journal {
            character,
            format,
            last,
        } => commands::journal::run(&ctx, &character, &format, last),
        Commands::Delete { character } => commands::delete::run(&ctx, &character),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
