mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, OutputFormat};
use repodescribe::model::PropertySet;
use repodescribe::util::to_properties_text;
use repodescribe::{DescribeEngine, Git2Repository, VcsBinding};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let repo = Git2Repository::open(&cli.repo_path)?;
    let start = repo
        .resolve_commit(&cli.reference)
        .with_context(|| format!("Could not resolve {}", cli.reference))?;

    let config = cli.describe_config();
    let descriptor = DescribeEngine::new()
        .describe(&repo, &start, &config)
        .with_context(|| format!("Could not describe {}", cli.reference))?;

    match cli.format {
        OutputFormat::Describe => println!("{}", descriptor),
        OutputFormat::Properties | OutputFormat::Json => {
            let git = PropertySet::from_descriptor(&cli.prefix, &descriptor, start.timestamp);
            let build = PropertySet::build_info(&cli.prefix);
            let props = PropertySet::merge([&git, &build])?;
            if cli.format == OutputFormat::Json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&props).context("Failed to serialize properties")?
                );
            } else {
                print!("{}", to_properties_text(&props));
            }
        }
    }

    Ok(())
}
