//! Generate config command implementation

use super::Context;
use crate::config::CliConfig;
use anyhow::{Context as _, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self, _ctx: &Context) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point the tool paths at your benchstat and query_xpath binaries");
        println!("2. Use it with any command:");
        println!(
            "   benchprep --config {} strip-and-compare copp.txt aopp.txt opp.txt out.txt",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        Ok(format!(
            "# benchprep configuration\n\
             #\n\
             # Command-line flags and the BENCHSTAT / QUERY_XPATH environment\n\
             # variables take precedence over these settings.\n\n{}",
            CliConfig::default().to_toml()?
        ))
    }
}
