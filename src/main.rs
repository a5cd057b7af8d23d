use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use wildbeat_application::prelude::ReviewModeration;
use wildbeat_db_sqlite::Connections;

mod config;
mod gateways;
mod seed;

use config::Config;

#[derive(Parser)]
#[command(version, about = "Wildbeat Safari backend")]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Insert sample data into empty tables
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite,
        cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    wildbeat_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Seed => {
            log::info!("Seeding sample data");
            seed::seed_sample_data(&connections)?;
        }
        Command::Serve => serve(connections, cfg, args.enable_cors).await?,
    }
    Ok(())
}

async fn serve(connections: Connections, cfg: Config, enable_cors: bool) -> Result<()> {
    let Config {
        webserver,
        auth,
        reviews,
        email,
        payments,
        ..
    } = cfg;

    let notify = gateways::notification_gateway(email.gateway, reviews.admin_email)?;
    let payment = gateways::payment_gateways(payments);

    let session_lifetime = time::Duration::try_from(auth.session_lifetime)?;
    let web_cfg = wildbeat_webserver::Cfg {
        admin_signup_code: auth.admin_signup_code,
        session_lifetime,
        review_moderation: ReviewModeration {
            require_approval: reviews.require_approval,
            public_base_url: webserver.public_base_url,
        },
        frontend_url: webserver.frontend_url,
    };

    wildbeat_webserver::run(
        connections,
        enable_cors || webserver.enable_cors,
        web_cfg,
        Arc::new(notify),
        payment,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seed_subcommand() {
        let args = Args::try_parse_from(["wildbeat", "--db-url", "test.db", "seed"]).unwrap();
        assert_eq!(args.db_url.as_deref(), Some("test.db"));
        assert!(!args.enable_cors);
        assert!(matches!(args.command, Some(Command::Seed)));
    }

    #[test]
    fn serve_without_subcommand() {
        let args = Args::try_parse_from(["wildbeat", "--enable-cors"]).unwrap();
        assert!(args.enable_cors);
        assert!(args.command.is_none());
    }
}
