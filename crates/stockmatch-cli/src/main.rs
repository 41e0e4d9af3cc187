use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "stockmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dataset to search instead of the bundled catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Find images for a free-text title
    ///
    /// The title is split on whitespace and normalized the same way catalog
    /// tags are: lowercased, stop words removed, stemmed, deduplicated and
    /// sorted. The resulting signature is fuzzy-matched against every
    /// catalog entry.
    ///
    /// Output: one image reference per line, best match first. When nothing
    /// matches, the configured fallback image is printed instead.
    Title {
        /// Title words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Show distances and signatures instead of bare image references
        #[arg(long)]
        explain: bool,
    },
    /// Find images for a list of tags
    Tags {
        /// Tags to match
        #[arg(required = true, num_args = 1..)]
        tags: Vec<String>,

        /// Show distances and signatures instead of bare image references
        #[arg(long)]
        explain: bool,
    },
    /// Print the signature a query normalizes to
    Normalize {
        /// Treat the words as one title and split it on whitespace
        #[arg(long)]
        title: bool,

        /// Words to normalize
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
    /// Inspect image catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CatalogCommands {
    /// List every image with its tag signature
    List,
    /// Validate a dataset file without using it
    Check {
        /// Path to the JSON dataset
        path: PathBuf,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file if it doesn't exist
    Init,
}

fn init_logging(config: &Config) -> Result<()> {
    let opts = twyg::OptsBuilder::new()
        .coloured(true)
        .level(config.log_level.clone())
        .report_caller(false)
        .build()
        .map_err(|e| anyhow!("Failed to build logger options: {e:?}"))?;
    twyg::setup(opts).map_err(|e| anyhow!("Failed to set up logging: {e:?}"))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_overrides(cli.catalog, cli.log_level.as_deref())?;
    init_logging(&config)?;

    match cli.command {
        Commands::Title { text, explain } => {
            commands::search_title(&config, &text.join(" "), explain)?;
        }
        Commands::Tags { tags, explain } => {
            commands::search_tags(&config, &tags, explain)?;
        }
        Commands::Normalize { title, words } => {
            commands::show_signature(&words, title);
        }
        Commands::Catalog { command } => match command {
            CatalogCommands::List => commands::list_catalog(&config)?,
            CatalogCommands::Check { path } => commands::check_catalog(&path)?,
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::show_config(&config),
            ConfigCommands::Path => commands::config::show_path(),
            ConfigCommands::Example => commands::config::show_example(),
            ConfigCommands::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tags_with_global_flags() {
        let cli = Cli::try_parse_from([
            "stockmatch",
            "tags",
            "birthday",
            "cake",
            "--catalog",
            "/tmp/images.json",
            "--explain",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("/tmp/images.json")));
        match cli.command {
            Commands::Tags { tags, explain } => {
                assert_eq!(tags, vec!["birthday", "cake"]);
                assert!(explain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_title_requires_text() {
        assert!(Cli::try_parse_from(["stockmatch", "title"]).is_err());
    }

    #[test]
    fn test_parse_catalog_check() {
        let cli = Cli::try_parse_from(["stockmatch", "catalog", "check", "images.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Catalog {
                command: CatalogCommands::Check { .. }
            }
        ));
    }
}
