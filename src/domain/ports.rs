use crate::domain::model::{DownloadSummary, Species, SpeciesDirectoryMap};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn base_path(&self) -> &str;
    fn species(&self) -> &[Species];
    fn concurrent_requests(&self) -> usize;
}

/// Boundary to the pathway-fetching collaborator. Takes the finished
/// species-to-directory mapping and performs all network and file I/O,
/// so tests can substitute a stub.
#[async_trait]
pub trait PathwayDownloader: Send + Sync {
    async fn save_all_kegg_pathway_files(
        &self,
        directories: &SpeciesDirectoryMap,
    ) -> Result<DownloadSummary>;
}
