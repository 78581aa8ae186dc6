use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vendex::{load_catalog, CatalogStats, Ranker, RankingConfig};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            catalog,
            query,
            geo,
            limit,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => RankingConfig::load(&path)
                    .with_context(|| format!("loading ranking config {}", path))?,
                None => RankingConfig::default(),
            };
            let records = load_catalog(&catalog)
                .with_context(|| format!("loading catalog {}", catalog))?;

            let ranker = Ranker::new(config);
            let ranked = ranker.rank(&records, &query, geo.to_context().as_ref());
            tracing::info!(
                records = records.len(),
                results = ranked.len(),
                "ranked catalog"
            );

            if json {
                let shown: Vec<_> = ranked.into_iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                display::print_results(&query, &ranked, limit);
            }
        }
        Commands::Inspect { catalog } => {
            let records = load_catalog(&catalog)
                .with_context(|| format!("loading catalog {}", catalog))?;
            display::print_stats(&catalog, &CatalogStats::collect(&records));
        }
    }
    Ok(())
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info,vendex=info",
        2 => "info,vendex=debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
