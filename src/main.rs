use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;

use transit_pass::args::Cli;
use transit_pass::clock::SystemClock;
use transit_pass::config::Config;
use transit_pass::logging::init_tracing;
use transit_pass::store::{FileStore, KeyValueStore, MemoryStore, PersistenceAdapter};
use transit_pass::ui::app::App;
use transit_pass::ui::runtime;
use transit_pass::ui::ticket::TicketController;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    cli.apply(&mut config);

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        tracing::info!("Using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let path = config.store.resolved_path();
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open store at {}", path.display()))?;
        tracing::info!(path = %path.display(), "Using file store");
        Arc::new(store)
    };

    let controller = TicketController::new(PersistenceAdapter::new(store), Box::new(SystemClock));
    let app = App::new(config, controller, Instant::now());
    runtime::run(app).context("Terminal UI failed")?;
    Ok(())
}
