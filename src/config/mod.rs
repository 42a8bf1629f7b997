pub mod cli;

use crate::core::ConfigProvider;
use crate::domain::model::Species;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kegg-pathways")]
#[command(about = "Downloads KEGG pathway files for a fixed set of species")]
pub struct CliConfig {
    #[arg(long, default_value = "https://rest.kegg.jp")]
    pub api_endpoint: String,

    /// Base directory the per-species folders are created under. Appended to
    /// as a raw prefix, so include the trailing separator.
    #[arg(long, default_value = "../databases/kegg/")]
    pub base_path: String,

    #[arg(long, value_delimiter = ',', default_values_t = Species::ALL)]
    pub species: Vec<Species>,

    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }

    fn species(&self) -> &[Species] {
        &self.species
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("base_path", &self.base_path)?;
        validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        Ok(())
    }
}
