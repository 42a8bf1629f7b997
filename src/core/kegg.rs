use crate::core::{
    ConfigProvider, DownloadSummary, PathwayDownloader, PathwayEntry, Species,
    SpeciesDirectoryMap, SpeciesSummary, Storage,
};
use crate::utils::error::{KeggError, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fetches pathway files from the KEGG REST API and saves them through the
/// configured storage, one directory per species.
pub struct KeggDownloader<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

#[derive(Debug, Serialize)]
struct PathwayManifest {
    species: String,
    scientific_name: String,
    directory: String,
    pathway_count: usize,
    source_url: String,
    downloaded_at: String,
}

impl<S: Storage, C: ConfigProvider> KeggDownloader<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    fn list_url(&self, species: Species) -> String {
        format!(
            "{}/list/pathway/{}",
            self.config.api_endpoint().trim_end_matches('/'),
            species.code()
        )
    }

    fn pathway_url(&self, pathway_id: &str) -> String {
        format!(
            "{}/get/{}",
            self.config.api_endpoint().trim_end_matches('/'),
            pathway_id
        )
    }

    async fn list_pathways(&self, species: Species) -> Result<Vec<PathwayEntry>> {
        let url = self.list_url(species);
        tracing::debug!("Listing pathways from: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;

        Ok(parse_pathway_list(&body))
    }
}

async fn fetch_pathway(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

/// Parses the tab-separated body of a `list/pathway/<org>` response.
/// Entries come back either as `path:ath00010` or as a bare `ath00010`
/// depending on API vintage; both are accepted.
pub(crate) fn parse_pathway_list(body: &str) -> Vec<PathwayEntry> {
    body.lines()
        .filter_map(|line| {
            let mut parts = line.splitn(2, '\t');
            let id = parts.next()?.trim();
            if id.is_empty() {
                return None;
            }
            let id = id.strip_prefix("path:").unwrap_or(id);
            let name = parts.next().unwrap_or("").trim();
            Some(PathwayEntry {
                id: id.to_string(),
                name: name.to_string(),
            })
        })
        .collect()
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> PathwayDownloader for KeggDownloader<S, C> {
    async fn save_all_kegg_pathway_files(
        &self,
        directories: &SpeciesDirectoryMap,
    ) -> Result<DownloadSummary> {
        let mut summaries = Vec::with_capacity(directories.len());

        for (species, directory) in directories.iter() {
            let entries = self.list_pathways(species).await?;
            if entries.is_empty() {
                tracing::warn!("KEGG returned no pathways for {}", species);
            }
            tracing::info!(
                "Fetching {} pathways for {} into {}",
                entries.len(),
                species,
                directory
            );

            let limit = self.config.concurrent_requests().max(1);
            let semaphore = Arc::new(Semaphore::new(limit));
            let mut join_set = JoinSet::new();

            for entry in &entries {
                let client = self.client.clone();
                let url = self.pathway_url(&entry.id);
                let pathway_id = entry.id.clone();
                let semaphore = Arc::clone(&semaphore);

                join_set.spawn(async move {
                    let _permit = semaphore.acquire_owned().await.map_err(|e| {
                        KeggError::ProcessingError {
                            message: format!("download limiter closed: {}", e),
                        }
                    })?;
                    let body = fetch_pathway(&client, &url).await?;
                    Ok::<_, KeggError>((pathway_id, body))
                });
            }

            let mut saved = 0usize;
            while let Some(joined) = join_set.join_next().await {
                let (pathway_id, body) = joined.map_err(|e| KeggError::ProcessingError {
                    message: format!("pathway download task failed: {}", e),
                })??;

                self.storage
                    .write_file(&format!("{}/{}.txt", directory, pathway_id), body.as_bytes())
                    .await?;
                saved += 1;
            }

            let manifest = PathwayManifest {
                species: species.code().to_string(),
                scientific_name: species.scientific_name().to_string(),
                directory: directory.to_string(),
                pathway_count: saved,
                source_url: self.list_url(species),
                downloaded_at: Utc::now().to_rfc3339(),
            };
            let manifest_bytes = serde_json::to_vec_pretty(&manifest)?;
            self.storage
                .write_file(&format!("{}/manifest.json", directory), &manifest_bytes)
                .await?;

            tracing::debug!("Saved {} pathway files for {}", saved, species);
            summaries.push(SpeciesSummary {
                species,
                directory: directory.to_string(),
                pathways_saved: saved,
            });
        }

        Ok(DownloadSummary { species: summaries })
    }
}
