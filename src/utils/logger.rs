/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Environment variable holding the log level (`ERROR`, `WARN`, `INFO`, `DEBUG`, `TRACE`)
pub const LOG_LEVEL_ENV: &str = "LOGLEVEL";

/// Installs a global `tracing` subscriber.
///
/// Safe to call many times; only the first call has an effect. The level is
/// read from `LOGLEVEL` and defaults to `INFO`.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var(LOG_LEVEL_ENV)
            .map(|value| parse_level(&value))
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(false)
            .finish();

        // Another subscriber may already be installed by the host application.
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Maps a level name to a `tracing::Level`, defaulting to `INFO`
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" | "WARNING" => Level::WARN,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}
