#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use ships::{
    init_logging, render_history, render_record, render_session, BoardConfig, GameSession,
    JsonFileStore, LineSource, SessionDriver, TextRenderer,
};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// JSON file holding finished games.
    #[arg(long, global = true, default_value = "ships-records.json")]
    store: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a session in the terminal, one command per line.
    Play {
        #[arg(long, default_value_t = ships::BOARD_SIZE, help = "Board edge length (1-26)")]
        size: u8,
    },
    /// List finished games.
    History,
    /// Print both boards of a finished game.
    Show { id: u64 },
    /// Remove a finished game from the store.
    Delete { id: u64 },
}

#[cfg(feature = "std")]
const HELP: &str = "\
Commands (boards: own | opp, cells: A1..J10):
  click <board> <cell>    toggle a cell
  down <board> <cell>     press the pointer on a cell
  move <board> <cell>     drag onto a cell while pressed
  up                      release the pointer
  hover <board> <cell>    pointer enters a cell
  leave <board> <cell>    pointer leaves a cell
  start | end | new       start battle, finish battle, new game
  show | quit";

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { size } => {
            let store = JsonFileStore::open(&cli.store)?;
            let session = GameSession::with_config(
                BoardConfig::own().with_size(size),
                BoardConfig::opponent().with_size(size),
                store,
            )?;
            println!("{}", HELP);
            let mut driver = SessionDriver::new(session, LineSource::stdin(), TextRenderer);
            driver.run().await?;
            println!("{}", render_session(driver.session()));
        }
        Commands::History => {
            let store = JsonFileStore::open(&cli.store)?;
            println!("{}", render_history(store.records()));
        }
        Commands::Show { id } => {
            let store = JsonFileStore::open(&cli.store)?;
            let record = store
                .get(id)
                .with_context(|| format!("no game #{} in {}", id, cli.store.display()))?;
            println!("{}", render_record(record));
        }
        Commands::Delete { id } => {
            let mut store = JsonFileStore::open(&cli.store)?;
            if store.delete(id)? {
                println!("Deleted game #{}", id);
            } else {
                anyhow::bail!("no game #{} in {}", id, cli.store.display());
            }
        }
    }
    Ok(())
}
