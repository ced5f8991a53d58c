use log::debug;
use tokio::io::AsyncReadExt;

use crate::core::engine::badges::{BadgePicker, RandomPicker};
use crate::core::engine::render::RenderOptions;
use crate::core::engine::report::{Report, ReportOptions, generate};
use crate::core::engine::scope::Scope;
use crate::core::identity::TableDirectory;
use crate::types::config::Config;
use crate::types::{AppError, AppResult, parse_pull_requests};

/// Read the raw JSON document from a path, or stdin for `-`/none.
async fn read_input(input: Option<&str>) -> AppResult<String> {
    match input {
        None | Some("-") => {
            debug!("Reading pull requests from stdin");
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
        Some(path) => {
            debug!("Reading pull requests from {path}");
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| AppError::Custom(format!("Failed to read {path}: {e}")))
        }
    }
}

/// Build a report from an in-memory JSON document using `cfg`.
pub fn build_report(json: &str, cfg: &Config) -> AppResult<Report> {
    let prs = parse_pull_requests(json)?;
    let report_cfg = cfg.report();
    let scope = Scope::from_config(&cfg.scope())?;
    let directory = TableDirectory::new(cfg.identities());

    let mut picker: Box<dyn BadgePicker> = match report_cfg.seed() {
        Some(seed) => Box::new(RandomPicker::seeded(seed)),
        None => Box::new(RandomPicker::from_os_rng()),
    };

    let options = ReportOptions {
        render: RenderOptions {
            required_only: report_cfg.required_only(),
            min_name_width: report_cfg.name_width(),
        },
        badge: report_cfg.badge(),
    };

    Ok(generate(prs, &scope, options, &directory, picker.as_mut()))
}

pub async fn execute_report(input: Option<String>, format: &str, cfg: &Config) -> AppResult<()> {
    let json = read_input(input.as_deref()).await?;
    let report = build_report(&json, cfg)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            print!("{}", report.text);
        }
        other => {
            return Err(AppError::InvalidInput(format!(
                "unknown format {other:?} (expected \"table\" or \"json\")"
            )));
        }
    }

    if report.reviewers.is_empty() {
        debug!("Nothing to report: no reviewers in scope");
    }
    Ok(())
}
