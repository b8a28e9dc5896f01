//! Service entry-point: load configuration, initialise tracing, serve.

use std::io;

use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use exercise_tracker::server::{run, ServerSettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::from_env_and_args()
        .map_err(|err| io::Error::other(format!("failed to load configuration: {err}")))?;
    run(settings).await
}
