use crate::core::PathwayDownloader;
use crate::domain::model::{DownloadSummary, SpeciesDirectoryMap};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct KeggEngine<D: PathwayDownloader> {
    downloader: D,
    monitor: SystemMonitor,
}

impl<D: PathwayDownloader> KeggEngine<D> {
    pub fn new(downloader: D) -> Self {
        Self {
            downloader,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(downloader: D, monitor_enabled: bool) -> Self {
        Self {
            downloader,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Hands the species-to-directory mapping to the downloader in a single
    /// call. The mapping is not touched on the way through.
    pub async fn run(&self, directories: &SpeciesDirectoryMap) -> Result<DownloadSummary> {
        tracing::info!("Resolved {} species directories", directories.len());
        for (species, directory) in directories.iter() {
            tracing::debug!("{} ({}) -> {}", species, species.scientific_name(), directory);
        }
        self.monitor.log_stats("Resolve");

        let summary = self
            .downloader
            .save_all_kegg_pathway_files(directories)
            .await?;

        self.monitor.log_stats("Download");
        tracing::info!(
            "Saved {} pathway files across {} species",
            summary.total_pathways(),
            summary.species.len()
        );
        self.monitor.log_final_stats();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Species, SpeciesSummary};
    use std::sync::{Arc, Mutex};

    struct RecordingDownloader {
        received: Arc<Mutex<Option<SpeciesDirectoryMap>>>,
    }

    impl RecordingDownloader {
        fn new() -> Self {
            Self {
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait::async_trait]
    impl PathwayDownloader for RecordingDownloader {
        async fn save_all_kegg_pathway_files(
            &self,
            directories: &SpeciesDirectoryMap,
        ) -> Result<DownloadSummary> {
            *self.received.lock().unwrap() = Some(directories.clone());

            let species = directories
                .iter()
                .map(|(species, directory)| SpeciesSummary {
                    species,
                    directory: directory.to_string(),
                    pathways_saved: 1,
                })
                .collect();
            Ok(DownloadSummary { species })
        }
    }

    #[tokio::test]
    async fn test_downloader_receives_the_mapping_unmodified() {
        let downloader = RecordingDownloader::new();
        let received = Arc::clone(&downloader.received);
        let engine = KeggEngine::new(downloader);

        let directories = SpeciesDirectoryMap::for_base_path("../databases/kegg/");
        engine.run(&directories).await.unwrap();

        let seen = received.lock().unwrap().clone().unwrap();
        assert_eq!(seen, directories);
    }

    #[tokio::test]
    async fn test_run_reports_the_downloader_summary() {
        let engine = KeggEngine::new(RecordingDownloader::new());
        let directories =
            SpeciesDirectoryMap::for_species("out/", &[Species::Ath, Species::Hsa]);

        let summary = engine.run(&directories).await.unwrap();

        assert_eq!(summary.species.len(), 2);
        assert_eq!(summary.total_pathways(), 2);
        assert_eq!(
            summary.species[0].directory,
            "out/ath_pathway_files_from_api"
        );
    }
}
