pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use self::core::{engine::KeggEngine, kegg::KeggDownloader};
pub use domain::model::{DownloadSummary, Species, SpeciesDirectoryMap};
pub use utils::error::{KeggError, Result};
