use log::info;

use crate::types::AppResult;
use crate::types::config::Config;

pub async fn execute(format: &str, cfg: &Config) -> AppResult<()> {
    let effective_config = cfg.to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    // Table format
    info!("Effective Configuration:");

    info!("");
    info!("Log:");
    let log = effective_config.log.unwrap_or_default();
    info!("  level: {}", log.level());
    match log.color {
        Some(true) => info!("  color: on"),
        Some(false) => info!("  color: off"),
        None => info!("  color: auto"),
    }

    info!("");
    info!("Report:");
    let report = effective_config.report.unwrap_or_default();
    info!("  required_only: {}", report.required_only());
    info!("  name_width: {}", report.name_width());
    match report.seed() {
        Some(seed) => info!("  seed: {}", seed),
        None => info!("  seed: (random)"),
    }
    info!("  badge: {}", report.badge());

    info!("");
    info!("Scope:");
    let scope = effective_config.scope.unwrap_or_default();
    if scope.repositories().is_empty() {
        info!("  repositories: all");
    } else {
        info!("  repositories: [{}]", scope.repositories().join(", "));
    }
    info!("  status: {}", scope.status().unwrap_or("any"));

    info!("");
    info!("Identities:");
    let identities = effective_config.identities.unwrap_or_default();
    if identities.is_empty() {
        info!("  (none)");
    }
    for (email, entry) in &identities {
        let name = entry.name.as_deref().unwrap_or("-");
        match &entry.handle {
            Some(handle) => info!("  {}: {} ({})", email, name, handle),
            None => info!("  {}: {}", email, name),
        }
    }

    Ok(())
}
