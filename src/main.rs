use clap::Parser;
use kegg_pathways::utils::{logger, validation::Validate};
use kegg_pathways::{CliConfig, KeggDownloader, KeggEngine, LocalStorage, SpeciesDirectoryMap};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kegg-pathways");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let directories = SpeciesDirectoryMap::for_species(&config.base_path, &config.species);
    let downloader = KeggDownloader::new(LocalStorage::new(), config);
    let engine = KeggEngine::new_with_monitoring(downloader, monitor_enabled);

    match engine.run(&directories).await {
        Ok(summary) => {
            tracing::info!("✅ KEGG pathway download completed successfully!");
            println!("✅ KEGG pathway download completed successfully!");
            for entry in &summary.species {
                println!(
                    "📁 {}: {} pathway files saved to {}",
                    entry.species, entry.pathways_saved, entry.directory
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ KEGG pathway download failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                kegg_pathways::utils::error::ErrorSeverity::Low => 0,
                kegg_pathways::utils::error::ErrorSeverity::Medium => 2,
                kegg_pathways::utils::error::ErrorSeverity::High => 1,
                kegg_pathways::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
