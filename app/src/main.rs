#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use command::{
    AddInput, AddStrategy, CommandStrategy, DeleteInput, DeleteStrategy, EditInput, EditStrategy,
    InfoStrategy, InitStrategy, ListInput, ListStrategy, ShowStrategy, StorageOptions,
    VersionStrategy,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Recipe catalog with Japanese ingredient search", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Directory holding the recipe file (overrides the config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl GlobalArgs {
    const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Save a new recipe
    Add {
        #[arg(short, long)]
        name: String,

        /// Category label (主菜, 副菜, 汁物, ...) or alias (main, side, soup, ...)
        #[arg(short, long)]
        category: Option<String>,

        /// Ingredients, one per line
        #[arg(short, long)]
        ingredients: String,

        /// Steps, one per line
        #[arg(short = 's', long)]
        instructions: String,

        #[arg(long)]
        notes: Option<String>,
    },
    /// List recipes, optionally filtered
    List {
        /// Ingredient keywords separated by spaces; all must match
        #[arg(short, long, conflicts_with = "category")]
        ingredient: Option<String>,

        /// Exact category label or alias
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one recipe
    Show {
        /// Recipe number as shown by `list`
        number: usize,
    },
    /// Change fields of a recipe
    Edit {
        /// Recipe number as shown by `list`
        number: usize,

        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        ingredients: Option<String>,

        #[arg(short = 's', long)]
        instructions: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a recipe
    Delete {
        /// Recipe number as shown by `list`
        number: usize,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show configuration and catalog information
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.global.log_level())
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let storage = StorageOptions {
        data_dir: cli.global.data_dir,
    };

    match cli.command {
        Commands::Add {
            name,
            category,
            ingredients,
            instructions,
            notes,
        } => AddStrategy.execute(AddInput {
            storage,
            name,
            category,
            ingredients,
            instructions,
            notes,
        }),
        Commands::List {
            ingredient,
            category,
        } => ListStrategy.execute(ListInput {
            storage,
            ingredient,
            category,
        }),
        Commands::Show { number } => ShowStrategy.execute((storage, number)),
        Commands::Edit {
            number,
            name,
            category,
            ingredients,
            instructions,
            notes,
        } => EditStrategy.execute(EditInput {
            storage,
            number,
            name,
            category,
            ingredients,
            instructions,
            notes,
        }),
        Commands::Delete { number, yes } => DeleteStrategy.execute(DeleteInput {
            storage,
            number,
            yes,
        }),
        Commands::Info => InfoStrategy.execute(storage),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
