//! Binds the application config from the process environment.
//!
//! Every missing or invalid variable is reported in one message, then the
//! process exits with a failure code.

use std::{fmt, process::ExitCode};

use envbind::Record;
use tracing_subscriber::EnvFilter;

#[derive(Record, Default)]
pub struct Config {
    #[env(from = "DEBUG")]
    pub debug: bool,
    #[env(from = "APP_ENV", required)]
    pub environment: String,
    #[env(from = "DATABASE_DSN", required)]
    pub database_dsn: String,
    #[env(from = "LISTEN_ADDR")]
    pub listen_addr: String,
    #[env(from = "TLS_CERT_FILE")]
    pub tls_cert_file: String,
    #[env(from = "TLS_KEY_FILE")]
    pub tls_key_file: String,
}

// The DSN can carry credentials, keep it out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("debug", &self.debug)
            .field("environment", &self.environment)
            .field("database_dsn", &"<redacted>")
            .field("listen_addr", &self.listen_addr)
            .field("tls_cert_file", &self.tls_cert_file)
            .field("tls_key_file", &self.tls_key_file)
            .finish()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let mut config = Config::default();
    if let Err(errors) = config.bind_from_env() {
        tracing::error!("unable to make config:\n{errors}");
        tracing::info!("expected variables:\n{}", Config::requirements());
        return ExitCode::FAILURE;
    }

    tracing::info!(?config, "successfully made config");
    ExitCode::SUCCESS
}
