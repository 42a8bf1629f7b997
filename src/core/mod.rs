pub mod engine;
pub mod kegg;

pub use crate::domain::model::{
    DownloadSummary, PathwayEntry, Species, SpeciesDirectoryMap, SpeciesSummary,
};
pub use crate::domain::ports::{ConfigProvider, PathwayDownloader, Storage};
pub use crate::utils::error::Result;
