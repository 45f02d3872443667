use anyhow::Context;
use clap::{Parser, Subcommand};

use bookalytic::api::create_router;
use bookalytic::client::SearchClient;
use bookalytic::config::CONFIG;
use bookalytic::controller::SearchController;
use bookalytic::render::render_card_text;

#[derive(Parser)]
#[command(name = "bookalytic", about = "Search books through the bookalytic search API")]
struct Cli {
    /// Base URL of the search API (defaults to SEARCH_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one search and print the result cards
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Serve the search page
    Serve {
        /// Address to listen on (defaults to BOOKALYTIC_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = CONFIG
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    // the fmt subscriber also picks up `log` records from the library
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url.unwrap_or_else(|| CONFIG.search_api_url.clone());
    let controller = SearchController::new(SearchClient::new(&api_url));

    match cli.command {
        Command::Search { query } => {
            controller.set_query(query.join(" ")).await;
            let outcome = controller.search().await;
            tracing::debug!(?outcome, "search finished");

            let view = controller.snapshot().await;
            let cards: Vec<String> = view.results().iter().map(render_card_text).collect();
            if !cards.is_empty() {
                println!("{}", cards.join("\n\n"));
            }
        }
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| CONFIG.bind_addr.clone());
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("failed to bind {bind}"))?;
            tracing::info!("serving search page on http://{bind} (search api: {api_url})");
            axum::serve(listener, create_router(controller)).await?;
        }
    }
    Ok(())
}
