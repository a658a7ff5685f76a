mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use codetype_lib::{validation, Client, Config, Route};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "codetype")]
#[command(about = "Browse CodeType Web: recipes, game servers, portfolio and platform info")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL; overrides CODETYPE_API_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Platform overview (/)
    Home,
    /// Cocktail recipe catalog (/codetype-bar)
    Bar(commands::bar::BarArgs),
    /// Plex streaming guide (/streaming)
    Streaming,
    /// Engineering portfolio (/portfolio)
    Portfolio(commands::portfolio::PortfolioArgs),
    /// Game server status board (/game-server)
    GameServer(commands::games::GamesArgs),
    /// Remote access overview (/access-info)
    AccessInfo,
    /// Render the view mounted at a route path, with default options
    Open {
        /// Route path, e.g. /game-server
        path: String,
    },
    /// List the route table
    Routes,
    /// Send a raw request to the API and print the response body.
    /// JSON bodies follow --output; text bodies print as received
    Request(commands::request::RequestArgs),
}

fn parse_format(value: &str) -> OutputFormat {
    match value {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    }
}

async fn mount(route: Route, client: &Client, format: &OutputFormat) -> Result<()> {
    output::print_route_banner(route);
    match route {
        Route::CodeTypeBar => commands::bar::run(&Default::default(), client, format).await,
        Route::Portfolio => commands::portfolio::run(&Default::default(), client, format).await,
        Route::GameServer => commands::games::run(&Default::default(), client, format).await,
        Route::Home | Route::Streaming | Route::AccessInfo => commands::info::run(route, format),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("codetype=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = parse_format(&cli.output);

    let config = Config::from_env().with_api_base_url(cli.base_url.clone());
    let client = config.client()?;
    tracing::debug!("Using API base {}", client.base_url());

    match &cli.command {
        Commands::Home => commands::info::run(Route::Home, &format)?,
        Commands::Bar(args) => commands::bar::run(args, &client, &format).await?,
        Commands::Streaming => commands::info::run(Route::Streaming, &format)?,
        Commands::Portfolio(args) => commands::portfolio::run(args, &client, &format).await?,
        Commands::GameServer(args) => commands::games::run(args, &client, &format).await?,
        Commands::AccessInfo => commands::info::run(Route::AccessInfo, &format)?,
        Commands::Open { path } => {
            mount(validation::validate_route(path)?, &client, &format).await?
        }
        Commands::Routes => output::print_routes(&format)?,
        Commands::Request(args) => commands::request::run(args, &client, &format).await?,
    }

    Ok(())
}
