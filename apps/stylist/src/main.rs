mod backend;
mod cli;
mod config;
mod errors;
mod knowledge;
mod models;
mod render;
mod routes;
mod session;
mod state;

use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::BackendClient;
use crate::cli::Outcome;
use crate::config::Config;
use crate::knowledge::parse_field;
use crate::models::{BodyType, StyleLabel};
use crate::routes::build_router;
use crate::state::AppState;

/// FashionStyleAI front end.
#[derive(Parser)]
#[command(name = "stylist", version, about = "FashionStyleAI front end")]
struct Cli {
    /// Backend base URL (overrides BACKEND_URL)
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web front end
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Ask for a style recommendation
    Recommend {
        /// Occasion, e.g. "wedding"
        #[arg(long, default_value = "")]
        occasion: String,
        /// Preferred color
        #[arg(long = "color", default_value = "")]
        preferred_color: String,
        /// hourglass, pear, apple, rectangle or "inverted triangle"
        #[arg(long)]
        body_type: Option<BodyType>,
    },

    /// Show current fashion trends
    Trends,

    /// Take the style quiz; repeat --answer once per question
    Quiz {
        /// classic, bohemian, minimalist, preppy, edgy or romantic
        #[arg(long = "answer")]
        answers: Vec<StyleLabel>,
    },

    /// Submit new fashion data as JSON
    Train {
        /// JSON text
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        data: Option<String>,
        /// Read the JSON text from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Analyze the style of an outfit photo
    Upload {
        /// Path to a png, jpg, jpeg or gif image
        image: PathBuf,
    },

    /// Update the knowledge base from NAME=VALUE fields
    Admin {
        /// `key[subkey]=value` sets a nested entry; `key=a, b` sets a list
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = BackendClient::new(config.backend_url.clone());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Commands::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            serve(config, client).await?;
            Outcome::Done
        }
        Commands::Recommend {
            occasion,
            preferred_color,
            body_type,
        } => cli::recommend(&client, &mut out, occasion, preferred_color, body_type).await?,
        Commands::Trends => cli::trends(&client, &mut out).await?,
        Commands::Quiz { answers } => cli::quiz(&client, &mut out, &answers).await?,
        Commands::Train { data, file } => {
            let text = match (data, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read '{}'", path.display()))?,
                (None, None) => String::new(),
            };
            cli::train(&client, &mut out, &text).await?
        }
        Commands::Upload { image } => cli::upload(&client, &mut out, &image).await?,
        Commands::Admin { fields } => cli::admin(&client, &mut out, &fields).await?,
    };
    out.flush()?;

    Ok(match outcome {
        Outcome::Done => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    })
}

async fn serve(config: Config, client: BackendClient) -> Result<()> {
    info!("Starting FashionStyleAI web front end v{}", env!("CARGO_PKG_VERSION"));
    info!("Backend: {}", client.base_url());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let state = AppState::new(Arc::new(client), config);

    let app = build_router(state).layer(TraceLayer::new_for_http());

    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
