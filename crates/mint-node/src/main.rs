//! mint-node — host for the mint module's genesis boundary.
//!
//! Subcommands:
//!   init             validate a genesis document, import it, flush to disk
//!   export           read minter + params back out as a genesis document
//!   validate         check a genesis document without touching the database
//!   default-genesis  print the default mint genesis
//!
//! Any error ends the process with a non-zero status and the full cause
//! chain. Nothing continues on half-initialised monetary state.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use mint_core::account::Permission;
use mint_core::constants::MODULE_NAME;
use mint_core::types::GenesisState;
use mint_genesis::{load_genesis, save_genesis, to_json, validate_genesis, GenesisCoordinator};
use mint_state::{MintKeeper, ModuleAccounts, StateDb};

#[derive(Parser, Debug)]
#[command(
    name = "mint-node",
    version,
    about = "Import and export the mint module's genesis state"
)]
struct Args {
    /// Directory for the persistent state database.
    #[arg(long, global = true, default_value = "~/.mint/data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a genesis document into the state database.
    Init {
        /// Path to the mint genesis JSON.
        #[arg(long)]
        genesis: PathBuf,
    },
    /// Export the stored minter and params.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate a genesis document.
    Validate {
        #[arg(long)]
        genesis: PathBuf,
    },
    /// Emit the default genesis document.
    DefaultGenesis {
        /// Override the mint denomination.
        #[arg(long)]
        denom: Option<String>,

        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,mint=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Init { genesis } => init(&expand_tilde(&args.data_dir), &genesis),
        Command::Export { output } => export(&expand_tilde(&args.data_dir), output.as_deref()),
        Command::Validate { genesis } => {
            let state = load_genesis(&genesis)?;
            validate_genesis(&state).context("validating genesis")?;
            info!(path = %genesis.display(), "genesis is valid");
            Ok(())
        }
        Command::DefaultGenesis { denom, output } => {
            let mut state = GenesisState::default();
            if let Some(denom) = denom {
                state.params.mint_denom = denom;
            }
            validate_genesis(&state).context("validating default genesis")?;
            emit(&state, output.as_deref())
        }
    }
}

fn init(data_dir: &Path, genesis_path: &Path) -> anyhow::Result<()> {
    let state = load_genesis(genesis_path)?;
    validate_genesis(&state).context("validating genesis")?;

    let db = open_db(data_dir)?;
    let keeper = MintKeeper::new(db.mint_tree());
    let accounts = ModuleAccounts::new(db.module_accounts_tree())
        .with_permissions(MODULE_NAME, vec![Permission::Minter]);

    GenesisCoordinator::new(&keeper, &keeper)
        .init_genesis(&accounts, &state)
        .context("importing mint genesis")?;

    db.flush().context("flushing state database")?;
    info!(data_dir = %data_dir.display(), "genesis state committed to disk");
    Ok(())
}

fn export(data_dir: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    // Export only reads: never create a database that init did not.
    if !holds_database(data_dir)? {
        anyhow::bail!(
            "genesis was never imported: no state database at {}",
            data_dir.display()
        );
    }
    let db = StateDb::open(data_dir).context("opening state database")?;
    let keeper = MintKeeper::new(db.mint_tree());

    let state = GenesisCoordinator::new(&keeper, &keeper)
        .export_genesis()
        .context("exporting mint genesis (was genesis ever imported?)")?;
    emit(&state, output)
}

fn open_db(data_dir: &Path) -> anyhow::Result<StateDb> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("creating data dir {}", data_dir.display()))?;
    StateDb::open(data_dir).context("opening state database")
}

/// A missing or empty data dir has never held a database.
fn holds_database(data_dir: &Path) -> anyhow::Result<bool> {
    if !data_dir.is_dir() {
        return Ok(false);
    }
    let mut entries = std::fs::read_dir(data_dir)
        .with_context(|| format!("reading data dir {}", data_dir.display()))?;
    Ok(entries.next().is_some())
}

/// Write the document to `output`, or to stdout when no path is given.
fn emit(state: &GenesisState, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            save_genesis(path, state)?;
            info!(path = %path.display(), "genesis written");
        }
        None => print!("{}", to_json(state)?),
    }
    Ok(())
}

/// Expand a leading `~` to the user's home directory (`HOME` or `USERPROFILE`).
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
            return PathBuf::from(home).join(stripped);
        }
    }
    path.to_path_buf()
}
