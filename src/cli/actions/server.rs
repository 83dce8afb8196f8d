use crate::{api, cli::globals::GlobalArgs, store::PgStore};
use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub skip_migrations: bool,
    pub globals: GlobalArgs,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable, migrations fail, or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Global args: {:?}", args.globals);

    let dsn = args.globals.connection_url()?;

    let store = PgStore::connect(dsn.expose_secret(), args.globals.db_max_connections)
        .await
        .context("Failed to connect to database")?;

    if args.skip_migrations {
        info!("Skipping database migrations");
    } else {
        store
            .migrate()
            .await
            .context("Failed to apply database migrations")?;
    }

    api::new(args.port, Arc::new(store)).await
}
