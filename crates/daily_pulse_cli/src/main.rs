//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daily_pulse_core` linkage.
//! - Open the configured store and print today's evaluated check-in.

use daily_pulse_core::db::open_db;
use daily_pulse_core::{
    core_version, init_logging_from, CheckInSession, CoreConfig, SqliteKvStore,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CoreConfig::from_env().unwrap_or_else(|err| {
        eprintln!("daily_pulse_core config error={err}; using defaults");
        CoreConfig::default()
    });
    if let Err(err) = init_logging_from(&config) {
        eprintln!("daily_pulse_core logging disabled: {err}");
    }

    println!("daily_pulse_core version={}", core_version());
    println!("daily_pulse_core db_path={}", config.db_path.display());

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("daily_pulse_core db error={err}");
            return ExitCode::FAILURE;
        }
    };
    let session = match CheckInSession::open(SqliteKvStore::new(&conn)) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("daily_pulse_core store error={err}");
            return ExitCode::FAILURE;
        }
    };

    let summary = session.summary();
    println!(
        "daily_pulse_core today restored={} pulse={}/{}/{} score={} category={:?}",
        session.saved().is_some(),
        summary.pulse.energy,
        summary.pulse.focus,
        summary.pulse.stress,
        summary.score,
        summary.insight.category
    );
    println!("{}", summary.insight.message);
    ExitCode::SUCCESS
}
