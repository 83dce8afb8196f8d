use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use secrecy::SecretString;

use crate::cli::globals::GlobalArgs;

pub const ARG_DSN: &str = "dsn";
pub const ARG_DB_USERNAME: &str = "db-username";
pub const ARG_DB_PASSWORD: &str = "db-password";
pub const ARG_DB_MAX_CONNECTIONS: &str = "db-max-connections";
pub const ARG_SKIP_MIGRATIONS: &str = "skip-migrations";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_DSN)
                .short('d')
                .long("dsn")
                .help("Database connection string")
                .long_help(
                    "Database connection string. --db-username and --db-password, when given, replace the credentials in the DSN.",
                )
                .env("PRIME_DSN")
                .required(true),
        )
        .arg(
            Arg::new(ARG_DB_USERNAME)
                .long("db-username")
                .help("Database username, overrides the DSN user")
                .env("PRIME_DB_USERNAME"),
        )
        .arg(
            Arg::new(ARG_DB_PASSWORD)
                .long("db-password")
                .help("Database password, overrides the DSN password")
                .env("PRIME_DB_PASSWORD")
                .hide_env_values(true),
        )
        .arg(
            Arg::new(ARG_DB_MAX_CONNECTIONS)
                .long("db-max-connections")
                .help("Maximum number of pooled database connections")
                .default_value("5")
                .env("PRIME_DB_MAX_CONNECTIONS")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new(ARG_SKIP_MIGRATIONS)
                .long("skip-migrations")
                .help("Serve without applying pending migrations")
                .env("PRIME_SKIP_MIGRATIONS")
                .action(ArgAction::SetTrue),
        )
}

/// Collect the database options into [`GlobalArgs`].
///
/// # Errors
/// Returns an error if the DSN is missing.
pub fn parse(matches: &ArgMatches) -> Result<GlobalArgs> {
    let dsn = matches
        .get_one::<String>(ARG_DSN)
        .cloned()
        .context("missing required argument: --dsn")?;

    let mut globals = GlobalArgs::new(dsn);
    globals.db_username = matches.get_one::<String>(ARG_DB_USERNAME).cloned();
    globals.db_password = matches
        .get_one::<String>(ARG_DB_PASSWORD)
        .map(|password| SecretString::from(password.clone()));
    if let Some(max) = matches.get_one::<u32>(ARG_DB_MAX_CONNECTIONS) {
        globals.db_max_connections = *max;
    }

    Ok(globals)
}
