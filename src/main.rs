use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use ugc_analyzer::analysis::Analyzer;
use ugc_analyzer::config::Config;
use ugc_analyzer::output::terminal;

/// UGC analyzer: moderation and engagement insights for user-generated content.
///
/// Sends text to a moderation service and a chat model, and combines both
/// answers into one verdict.
#[derive(Parser)]
#[command(name = "ugc-analyzer", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API (POST /analyze)
    Serve {
        /// Port to listen on (default: $PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Analyze a single piece of text and print the verdict
    Analyze {
        /// The text to analyze
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("ugc_analyzer=info,tower_http=debug")
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { port, bind } => {
            let analyzer = Analyzer::from_config(&config)?;
            let port = match port {
                Some(port) => port,
                None => ugc_analyzer::config::server_port()?,
            };
            info!(
                base_url = %config.openai_base_url,
                chat_model = %config.chat_model,
                timeout_secs = config.http_timeout.as_secs(),
                "Starting server"
            );
            ugc_analyzer::web::run_server(analyzer, port, &bind).await?;
        }

        Commands::Analyze { text } => {
            let analyzer = Analyzer::from_config(&config)?;
            let response = analyzer.analyze(&text).await;
            terminal::display_response(&response);
            if response.is_error() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
