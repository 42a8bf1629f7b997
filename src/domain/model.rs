use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::KeggError;

/// KEGG organism codes this tool downloads pathway files for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Ath,
    Zma,
    Osa,
    Mtr,
    Gmx,
    Sly,
    Hsa,
}

impl Species {
    pub const ALL: [Species; 7] = [
        Species::Ath,
        Species::Zma,
        Species::Osa,
        Species::Mtr,
        Species::Gmx,
        Species::Sly,
        Species::Hsa,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Species::Ath => "ath",
            Species::Zma => "zma",
            Species::Osa => "osa",
            Species::Mtr => "mtr",
            Species::Gmx => "gmx",
            Species::Sly => "sly",
            Species::Hsa => "hsa",
        }
    }

    pub fn scientific_name(&self) -> &'static str {
        match self {
            Species::Ath => "Arabidopsis thaliana",
            Species::Zma => "Zea mays",
            Species::Osa => "Oryza sativa",
            Species::Mtr => "Medicago truncatula",
            Species::Gmx => "Glycine max",
            Species::Sly => "Solanum lycopersicum",
            Species::Hsa => "Homo sapiens",
        }
    }

    pub fn directory_name(&self) -> String {
        format!("{}_pathway_files_from_api", self.code())
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Species {
    type Err = KeggError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ath" => Ok(Species::Ath),
            "zma" => Ok(Species::Zma),
            "osa" => Ok(Species::Osa),
            "mtr" => Ok(Species::Mtr),
            "gmx" => Ok(Species::Gmx),
            "sly" => Ok(Species::Sly),
            "hsa" => Ok(Species::Hsa),
            other => Err(KeggError::InvalidConfigValueError {
                field: "species".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unknown species code. Supported codes: {}",
                    Species::ALL.map(|s| s.code()).join(", ")
                ),
            }),
        }
    }
}

/// Mapping from species code to the directory its pathway files are saved in.
///
/// Built once at startup and handed unchanged to the downloader. The
/// directory path is the base path with `<code>_pathway_files_from_api`
/// appended as a raw string suffix, so the base path should carry its own
/// trailing separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesDirectoryMap {
    entries: BTreeMap<Species, String>,
}

impl SpeciesDirectoryMap {
    pub fn for_base_path(base_path: &str) -> Self {
        Self::for_species(base_path, &Species::ALL)
    }

    pub fn for_species(base_path: &str, species: &[Species]) -> Self {
        let entries = species
            .iter()
            .map(|s| (*s, format!("{}{}", base_path, s.directory_name())))
            .collect();
        Self { entries }
    }

    pub fn get(&self, species: Species) -> Option<&str> {
        self.entries.get(&species).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Species, &str)> {
        self.entries.iter().map(|(s, d)| (*s, d.as_str()))
    }
}

/// One row of a KEGG `list/pathway/<org>` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathwayEntry {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesSummary {
    pub species: Species,
    pub directory: String,
    pub pathways_saved: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub species: Vec<SpeciesSummary>,
}

impl DownloadSummary {
    pub fn total_pathways(&self) -> usize {
        self.species.iter().map(|s| s.pathways_saved).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_contains_all_seven_species() {
        let map = SpeciesDirectoryMap::for_base_path("../databases/kegg/");

        assert_eq!(map.len(), 7);
        for species in Species::ALL {
            assert!(map.get(species).is_some());
        }
    }

    #[test]
    fn test_directory_path_is_base_plus_code_suffix() {
        let map = SpeciesDirectoryMap::for_base_path("../databases/kegg/");

        assert_eq!(
            map.get(Species::Ath).unwrap(),
            "../databases/kegg/ath_pathway_files_from_api"
        );
        assert_eq!(
            map.get(Species::Hsa).unwrap(),
            "../databases/kegg/hsa_pathway_files_from_api"
        );
    }

    #[test]
    fn test_every_entry_has_a_non_empty_path() {
        let map = SpeciesDirectoryMap::for_base_path("out/");

        for (_, directory) in map.iter() {
            assert!(!directory.is_empty());
        }
    }

    #[test]
    fn test_map_construction_is_idempotent() {
        let first = SpeciesDirectoryMap::for_base_path("../databases/kegg/");
        let second = SpeciesDirectoryMap::for_base_path("../databases/kegg/");

        assert_eq!(first, second);
    }

    #[test]
    fn test_subset_map_only_contains_requested_species() {
        let map = SpeciesDirectoryMap::for_species("out/", &[Species::Ath, Species::Zma]);

        assert_eq!(map.len(), 2);
        assert!(map.get(Species::Ath).is_some());
        assert!(map.get(Species::Zma).is_some());
        assert!(map.get(Species::Hsa).is_none());
    }

    #[test]
    fn test_duplicate_species_collapse_to_one_entry() {
        let map = SpeciesDirectoryMap::for_species("out/", &[Species::Ath, Species::Ath]);

        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_species_code_round_trip() {
        for species in Species::ALL {
            assert_eq!(species.code().parse::<Species>().unwrap(), species);
        }
    }

    #[test]
    fn test_unknown_species_code_is_rejected() {
        assert!("eco".parse::<Species>().is_err());
        assert!("".parse::<Species>().is_err());
    }
}
