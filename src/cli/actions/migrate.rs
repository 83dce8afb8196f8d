use crate::{cli::globals::GlobalArgs, store::PgStore};
use anyhow::{Context, Result};
use secrecy::ExposeSecret;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Apply pending migrations and return.
/// # Errors
/// Returns an error if the database is unreachable or a migration fails.
pub async fn execute(args: Args) -> Result<()> {
    debug!("Global args: {:?}", args.globals);

    let dsn = args.globals.connection_url()?;

    let store = PgStore::connect(dsn.expose_secret(), 1)
        .await
        .context("Failed to connect to database")?;

    store
        .migrate()
        .await
        .context("Failed to apply database migrations")?;

    store.pool().close().await;

    Ok(())
}
