use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::{info, warn};

use expense_tracker::cli::{self, Console};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Interactive terminal expense tracker",
    long_about = "Records expenses (date, amount, category, description) in \
                  expenses.json and lets you list, filter, summarize and \
                  delete them from a text menu."
)]
struct Cli {
    /// Directory holding expenses.json
    #[arg(long, env = "EXPENSE_TRACKER_DIR", default_value = ".")]
    dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut console = Console::stdio();

    let paths = TrackerPaths::with_base_dir(cli.dir);
    let settings = match Settings::load_or_default(&paths) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Falling back to default settings: {}", e);
            console.say(format!("Error loading settings: {}", e))?;
            Settings::default()
        }
    };
    info!("Using store file {}", paths.store_file().display());

    let mut store = ExpenseStore::new(paths, &settings);
    if let Err(e) = store.load_all() {
        console.say(format!("Error loading expenses: {}", e))?;
    }

    cli::run(&mut store, &settings, &mut console)?;

    Ok(())
}
