//! Emotrash server binary
//!
//! Opens the database, bootstraps the schema, and serves the HTTP API.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use emotrash_api::{router, AppState};
use emotrash_core::logging::{self, Profile};
use emotrash_store::{db, schema};

#[derive(Debug, Parser)]
#[command(name = "emotrash")]
#[command(about = "Emotion record service", long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, env = "EMOTRASH_DB", default_value = "emotions.db")]
    db: PathBuf,

    /// Listen address
    #[arg(long, env = "EMOTRASH_LISTEN", default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// Emit JSON structured logs instead of human-readable output
    #[arg(long, env = "EMOTRASH_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(if cli.json_logs {
        Profile::Production
    } else {
        Profile::Development
    });

    let conn = db::open(&cli.db)?;
    db::configure(&conn)?;
    schema::init(&conn)?;

    let app = router(AppState::new(conn));

    tracing::info!(listen = %cli.listen, db = %cli.db.display(), "emotrash listening");
    let listener = tokio::net::TcpListener::bind(cli.listen).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
