//! frontline-routes CLI
//!
//! Inspects a route configuration: lists routes, resolves request paths and
//! builds URLs the way the application would.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use frontline_router::{Params, Router, RouterConfig};

/// Route table inspection tool.
#[derive(Parser)]
#[command(name = "frontline-routes")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route configuration file (JSON).
    #[arg(short, long, env = "FRONTLINE_ROUTES", default_value = "routes.json")]
    config: PathBuf,

    /// Override the URL prefix from the configuration.
    #[arg(short = 'p', long, env = "FRONTLINE_URL_PREFIX")]
    url_prefix: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in match order.
    List,

    /// Resolve a request path to its route and parameters.
    Resolve {
        /// Request path, e.g. `/user/42/alice/details.html`.
        path: String,
    },

    /// Build a URL.
    Url {
        /// Target route (defaults to the route matched by --from).
        #[arg(short, long)]
        route: Option<String>,

        /// Parameters as `name=value`.
        #[arg(short = 'P', long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Request path whose parameters serve as the base.
        #[arg(long)]
        from: Option<String>,

        /// Start from the framework defaults (true) or keep the current
        /// request's parameters (false).
        #[arg(long)]
        reset: Option<bool>,
    },
}

#[derive(Serialize)]
struct Resolution<'a> {
    route: &'a str,
    params: &'a Params,
}

fn parse_params(pairs: &[String]) -> anyhow::Result<Params> {
    let mut params = Params::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("parameter {pair:?} is not of the form NAME=VALUE");
        };
        params.insert(name, value);
    }
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = RouterConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(prefix) = cli.url_prefix {
        config = config.with_url_prefix(prefix);
    }
    let (table, url_prefix) = config.into_parts();

    match cli.command {
        Commands::List => {
            println!("{:<16} {:<40} DEFAULTS", "NAME", "PATTERN");
            for route in table.iter() {
                let defaults = serde_json::to_string(&route.defaults)?;
                println!("{:<16} {:<40} {}", route.name, route.pattern, defaults);
            }
        }

        Commands::Resolve { path } => {
            let router = Router::for_request(table, url_prefix, &path)?;
            let resolution = Resolution {
                route: router.current_route(),
                params: router.params(),
            };
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        }

        Commands::Url {
            route,
            params,
            from,
            reset,
        } => {
            let params = parse_params(&params)?;
            let router = match from {
                Some(path) => Router::for_request(table, url_prefix, &path)?,
                None => Router::new(table, url_prefix),
            };
            info!(current = router.current_route(), "building url");
            println!("{}", router.url(&params, route.as_deref(), reset)?);
        }
    }

    Ok(())
}
