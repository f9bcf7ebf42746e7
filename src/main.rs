use clap::{Parser, Subcommand};
use contacts_api::admin::{self, AdminCommands};
use contacts_api::config::Config;
use contacts_api::error::AppResult;
use contacts_api::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// contacts-api - REST backend for users and their contacts
#[derive(Parser, Debug)]
#[command(name = "contacts-api")]
#[command(version)]
#[command(about = "REST backend for users and their contacts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides SERVER_HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT env var)
        #[arg(long)]
        port: Option<u16>,

        /// Run migrations on startup
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        migrate: bool,
    },

    /// Administrative commands
    Admin {
        #[command(subcommand)]
        admin_command: AdminCommands,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // .env must be loaded before the log filter is read
    dotenvy::dotenv().ok();
    init_tracing();

    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Server {
            host,
            port,
            migrate,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            server::run_server(config, migrate).await
        }
        Commands::Admin { admin_command } => admin::run(config, admin_command).await,
    }
}
