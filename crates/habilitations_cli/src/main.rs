//! CLI probe for the habilitations store.
//!
//! Loads configuration, starts logging, opens the store and prints the
//! profile list followed by every developer with its profile.

mod config;

use config::HabilitationsConfig;
use habilitations_core::db::open_db;
use habilitations_core::{
    init_logging, HabilitationsService, SqliteDeveloperRepository, SqliteProfileRepository,
};
use log::error;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("habilitations: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = HabilitationsConfig::load()?;
    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let service = HabilitationsService::new(
        SqliteDeveloperRepository::try_new(&conn)?,
        SqliteProfileRepository::try_new(&conn)?,
    );

    println!(
        "habilitations_core version={}",
        habilitations_core::core_version()
    );
    println!("db_path={}", config.db_path.display());
    for profile in service.list_profiles()? {
        println!("profile id={} name={}", profile.id, profile.display_name());
    }
    for developer in service.list_developers(None)? {
        println!(
            "developer id={} last={} first={} phone={} email={} profile={}",
            developer.id,
            developer.last_name.as_deref().unwrap_or(""),
            developer.first_name.as_deref().unwrap_or(""),
            developer.phone.as_deref().unwrap_or(""),
            developer.email.as_deref().unwrap_or(""),
            developer.profile.display_name()
        );
    }
    Ok(())
}
