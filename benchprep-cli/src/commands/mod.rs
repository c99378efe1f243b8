//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod combine;
pub mod compare;
pub mod filter;
pub mod generate_config;
pub mod json_mult;
pub mod strip;
pub mod xpath_test;

/// Tools for preparing Go benchmark reports and JSON parser fixtures
#[derive(Debug, Parser)]
#[command(name = "benchprep", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress logging and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Merge benchmark reports, keeping the first report's header and footer
    Combine(combine::CombineArgs),

    /// Drop benchmark result lines that contain every filter
    Filter(filter::FilterArgs),

    /// Replicate every key of a JSON object N times
    JsonMult(json_mult::JsonMultArgs),

    /// Remove strategy labels and write `<stem>_stat<ext>` copies
    Strip(strip::StripArgs),

    /// Remove strategy labels and compare the results with benchstat
    StripAndCompare(compare::CompareArgs),

    /// Run the fixed XPath queries against the query_xpath parser
    XpathTest(xpath_test::XPathTestArgs),

    /// Generate a configuration file with the default settings
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// State shared by every command
#[derive(Debug, Default)]
pub struct Context {
    /// Loaded configuration
    pub config: CliConfig,
    /// Suppress progress output
    pub quiet: bool,
}

impl Cli {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let ctx = Context {
            config: CliConfig::load(self.config.as_deref())?,
            quiet: self.quiet,
        };

        match &self.command {
            Commands::Combine(args) => args.execute(&ctx),
            Commands::Filter(args) => args.execute(&ctx),
            Commands::JsonMult(args) => args.execute(&ctx),
            Commands::Strip(args) => args.execute(&ctx),
            Commands::StripAndCompare(args) => args.execute(&ctx),
            Commands::XpathTest(args) => args.execute(&ctx),
            Commands::GenerateConfig(args) => args.execute(&ctx),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
