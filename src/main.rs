// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};

use spendbook::config::Config;
use spendbook::{cli, commands, Persistence, SqliteSlot, TransactionStore};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = Config::resolve(
        matches.get_one::<String>("db").map(PathBuf::from),
        matches.get_flag("strict"),
    )?;
    let slot = SqliteSlot::open(&config.db_path)
        .with_context(|| format!("Open DB at {}", config.db_path.display()))?;
    let mut store = TransactionStore::open(Persistence::new(slot), config.store_options());
    if config.seed_sample && store.is_empty() {
        store.seed_sample_data(chrono::Local::now().date_naive());
    }

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Data file at {} ({} transactions)",
                config.db_path.display(),
                store.len()
            );
        }
        Some(("tx", sub)) => commands::transactions::handle(&mut store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("categories", sub)) => commands::categories::handle(sub)?,
        Some(("months", sub)) => commands::months::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
