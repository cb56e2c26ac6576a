//! Command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use index_seeder_pipeline::seeder::{DEFAULT_BATCH_SIZE, DEFAULT_DOCUMENTS_PER_INDEX};
use index_seeder_pipeline::{SeedOptions, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "index-seeder")]
#[command(about = "Provision search indices and seed them with synthetic documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the indices configuration file
    #[arg(long, env = "INDICES_CONFIG", default_value = DEFAULT_CONFIG_PATH, global = true)]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create configured indices, recreating those marked for reindex
    SetupIndices,
    /// Bulk-insert generated documents into configured indices
    Seed(SeedArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SeedArgs {
    /// Documents per bulk request
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE, value_parser = parse_positive)]
    pub batch_size: usize,

    /// Documents written to each index
    #[arg(long, default_value_t = DEFAULT_DOCUMENTS_PER_INDEX, value_parser = parse_positive)]
    pub documents_per_index: usize,

    /// Only seed these indices (comma-separated, default: all configured indices)
    #[arg(long, value_delimiter = ',')]
    pub indices: Option<Vec<String>>,
}

impl From<SeedArgs> for SeedOptions {
    fn from(args: SeedArgs) -> Self {
        SeedOptions {
            batch_size: args.batch_size,
            documents_per_index: args.documents_per_index,
            indices: args.indices.map(|names| {
                names
                    .into_iter()
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            }),
        }
    }
}

/// Exit status for a rejected command line.
///
/// Help and version output exit 0. Usage errors exit 1 like any other failure.
pub fn parse_exit_code(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        1
    } else {
        0
    }
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_args(args: &[&str]) -> SeedArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Seed(seed) => seed,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_seed_defaults() {
        let args = seed_args(&["index-seeder", "seed"]);

        assert_eq!(args.batch_size, 1000);
        assert_eq!(args.documents_per_index, 10000);
        assert!(args.indices.is_none());
        assert_eq!(SeedOptions::from(args), SeedOptions::default());
    }

    #[test]
    fn test_seed_flags() {
        let args = seed_args(&[
            "index-seeder",
            "seed",
            "--batch-size",
            "4",
            "--documents-per-index",
            "10",
            "--indices",
            "alpha, beta,,",
        ]);

        let options = SeedOptions::from(args);
        assert_eq!(options.batch_size, 4);
        assert_eq!(options.documents_per_index, 10);
        assert_eq!(
            options.indices,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
    }

    #[test]
    fn test_seed_rejects_zero_and_garbage() {
        assert!(Cli::try_parse_from(["index-seeder", "seed", "--batch-size", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["index-seeder", "seed", "--documents-per-index", "ten"]).is_err()
        );
    }

    #[test]
    fn test_invalid_seed_values_exit_with_one() {
        let zero = Cli::try_parse_from(["index-seeder", "seed", "--batch-size", "0"]).unwrap_err();
        assert_eq!(parse_exit_code(&zero), 1);

        let garbage =
            Cli::try_parse_from(["index-seeder", "seed", "--documents-per-index", "ten"])
                .unwrap_err();
        assert_eq!(parse_exit_code(&garbage), 1);
    }

    #[test]
    fn test_help_exits_with_zero() {
        let help = Cli::try_parse_from(["index-seeder", "--help"]).unwrap_err();
        assert_eq!(parse_exit_code(&help), 0);
    }

    #[test]
    fn test_setup_indices_takes_no_flags() {
        let cli = Cli::try_parse_from(["index-seeder", "setup-indices"]).unwrap();
        assert!(matches!(cli.command, Commands::SetupIndices));

        assert!(Cli::try_parse_from(["index-seeder", "setup-indices", "--batch-size", "4"]).is_err());
    }

    #[test]
    fn test_config_path_flag() {
        let cli =
            Cli::try_parse_from(["index-seeder", "setup-indices", "--config", "other.json"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.json"));
    }
}
