use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;

use storefront_catalog::{ContentSource, ContentStore};
use storefront_cli::commands::{self, ShopArgs};
use storefront_cli::config::{BIND_ENV, CONTENT_ENV, DEFAULT_BIND, DEFAULT_CONTENT};
use storefront_cli::{StorefrontConfig, server};
use storefront_core::ProductId;
use storefront_shop::{PriceBucket, SortMode};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Render storefront pages from a content document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content document: a file path or an http(s) URL
    #[arg(long, global = true, env = CONTENT_ENV, default_value = DEFAULT_CONTENT)]
    content: ContentSource,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Home page sections (categories, new arrivals, bestsellers, lookbook)
    Home,

    /// Shop grid after URL entry parameters and sidebar filters
    Shop {
        /// URL query string, e.g. "cat=jackets" or "filter=new"
        #[arg(long)]
        query: Option<String>,

        /// Category to include (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Brand to include (repeatable)
        #[arg(long = "brand")]
        brands: Vec<String>,

        /// Price bucket: under-500, 500-to-1000, over-1000
        #[arg(long)]
        price: Option<PriceBucket>,

        /// Size to include (repeatable)
        #[arg(long = "size")]
        sizes: Vec<String>,

        /// featured, price-low, price-high or name; unknown values mean featured
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortMode>,
    },

    /// Product detail page
    Product {
        /// URL query string, e.g. "id=cp-shirt-001"
        #[arg(long)]
        query: Option<String>,

        /// Product id (overrides the query)
        #[arg(long)]
        id: Option<ProductId>,
    },

    /// About page copy
    About,

    /// Serve the content document over HTTP
    Serve {
        #[arg(long, env = BIND_ENV, default_value = DEFAULT_BIND)]
        bind: SocketAddr,
    },
}

fn parse_sort(token: &str) -> Result<SortMode, std::convert::Infallible> {
    Ok(SortMode::from_token(token))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to encode page view")?;
    println!("{out}");
    Ok(())
}

async fn load(config: &StorefrontConfig) -> Arc<ContentStore> {
    Arc::new(ContentStore::load_or_empty(&config.content).await)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let cli = Cli::parse();
    let mut config = StorefrontConfig {
        content: cli.content,
        ..StorefrontConfig::default()
    };

    match cli.command {
        Commands::Serve { bind } => {
            config.bind = bind;
            match &config.content {
                ContentSource::File(path) => server::serve(path.clone(), config.bind).await,
                other => bail!("serve needs a local content file, got {other}"),
            }
        }
        Commands::Home => print_json(&commands::home(&*load(&config).await)),
        Commands::About => print_json(&commands::about(&*load(&config).await)),
        Commands::Product { query, id } => {
            let page = commands::product(&*load(&config).await, query.as_deref(), id);
            if page.is_none() {
                tracing::warn!("catalog is empty; no product to show");
            }
            print_json(&page)
        }
        Commands::Shop {
            query,
            categories,
            brands,
            price,
            sizes,
            sort,
        } => {
            let args = ShopArgs {
                query,
                categories,
                brands,
                price,
                sizes,
                sort,
            };
            print_json(&commands::shop(load(&config).await, &args)?)
        }
    }
}
