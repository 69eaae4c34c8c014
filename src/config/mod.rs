use crate::core::ConfigProvider;
use crate::domain::model::{MalformedPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "league-rank")]
#[command(about = "Rank league teams from a stream of match results")]
pub struct CliConfig {
    /// Results file to read; reads stdin when omitted
    pub input: Option<String>,

    /// What to do with a line that does not parse
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Abort)]
    pub on_malformed: MalformedPolicy,

    /// Output format for the ranked table
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn malformed_policy(&self) -> MalformedPolicy {
        self.on_malformed
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.input {
            validation::validate_path("input", path)?;
            validation::validate_file_exists("input", path)?;
        }
        Ok(())
    }
}
