use anyhow::Result;
use clap::{Parser, Subcommand};
use dataset_queries::app::{self, AppConfig};
use dataset_queries::config::load_file_config;
use dataset_queries::output::OutputFormat;
use dataset_queries::QueryRegistry;
use std::path::PathBuf;
use tracing::debug;

/// Run named queries over the bundled datasets
#[derive(Parser)]
#[command(name = "dsq", version)]
#[command(about = "Query fixed in-memory datasets", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for line numbers)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (default: ./dsq.toml if present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Directory of fixture files overriding the builtin datasets
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Output format for query results
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available queries
    List {
        /// Only list queries of this group
        group: Option<String>,
    },
    /// Run a single query
    Run {
        /// Dataset group, e.g. "turing"
        group: String,
        /// Query name, e.g. "studentsForEachInstructor"
        query: String,
    },
    /// Run every query, keyed by group and name
    RunAll,
}

fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(error) = run(cli) {
        app::handle_fatal_error(error, verbose);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    app::init_logging(&config);
    debug!("Resolved configuration: {:?}", config);

    let datasets = app::load_datasets(&config)?;
    let registry = QueryRegistry::new(&datasets);

    match cli.command {
        Commands::List { group } => {
            let queries = match group {
                Some(group) => registry.group(&group)?,
                None => registry.list().iter().collect(),
            };
            for def in queries {
                println!("{:<14} {:<28} {}", def.group, def.name, def.description);
            }
        }
        Commands::Run { group, query } => {
            let value = registry.run(&group, &query)?;
            println!("{}", config.format.render(&value)?);
        }
        Commands::RunAll => {
            let value = registry.run_all()?;
            println!("{}", config.format.render(&value)?);
        }
    }

    Ok(())
}

/// Config file and environment first, then command-line flags
fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::new(cli.verbose)?;
    let file = load_file_config(cli.config.as_deref(), &config.working_dir)?;
    config = config.with_file_config(file);

    if let Some(dir) = &cli.fixtures {
        config = config.with_fixtures_dir(dir.clone());
    }
    if let Some(format) = cli.format {
        config = config.with_format(format);
    }
    Ok(config)
}
