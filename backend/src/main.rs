//! webnotes entry-point: wires the note routes, session middleware, and
//! default adapters.

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use webnotes::server::{create_server, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    info!(addr = %config.bind_addr, "starting webnotes");
    create_server(config)?.await
}
