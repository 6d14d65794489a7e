mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "venuescout")]
#[command(about = "Discover places near a location and enrich them with AI-derived ambiance labels")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Free-text or category search around a point.
    Search {
        /// Query text; a single category-like word routes to category search
        /// when --category is also given.
        query: String,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
        /// Search radius in meters (defaults to the configured radius).
        #[arg(long)]
        radius: Option<f64>,
        /// Provider place type hint, e.g. "cafe".
        #[arg(long)]
        category: Option<String>,
        /// Opaque pagination token from a previous page.
        #[arg(long)]
        page_token: Option<String>,
        /// Skip the AI enrichment pass.
        #[arg(long)]
        no_enrich: bool,
        /// Sub-filter group, e.g. --filter "Ambiyans=Retro,Modern". Repeatable.
        #[arg(long = "filter", value_parser = commands::parse_filter)]
        filters: Vec<(String, Vec<String>)>,
        /// Main category restriction on provider types. Repeatable.
        #[arg(long = "main-category")]
        main_categories: Vec<String>,
    },
    /// Concurrent multi-category discovery around a point.
    Discover {
        /// Category labels, e.g. "cafe restaurant bar" (Turkish UI labels
        /// such as "Kafe" are accepted too).
        #[arg(required = true)]
        categories: Vec<String>,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
        #[arg(long)]
        radius: Option<f64>,
        #[arg(long)]
        no_enrich: bool,
        #[arg(long = "filter", value_parser = commands::parse_filter)]
        filters: Vec<(String, Vec<String>)>,
        #[arg(long = "main-category")]
        main_categories: Vec<String>,
    },
    /// Extended details for one place id (bare or namespaced).
    Details { place_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = venuescout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            query,
            lat,
            lng,
            radius,
            category,
            page_token,
            no_enrich,
            filters,
            main_categories,
        } => {
            commands::run_search(
                &config,
                commands::SearchArgs {
                    query,
                    lat,
                    lng,
                    radius,
                    category,
                    page_token,
                    no_enrich,
                    filters,
                    main_categories,
                },
            )
            .await
        }
        Commands::Discover {
            categories,
            lat,
            lng,
            radius,
            no_enrich,
            filters,
            main_categories,
        } => {
            commands::run_discover(
                &config,
                commands::DiscoverArgs {
                    categories,
                    lat,
                    lng,
                    radius,
                    no_enrich,
                    filters,
                    main_categories,
                },
            )
            .await
        }
        Commands::Details { place_id } => commands::run_details(&config, &place_id).await,
    }
}
