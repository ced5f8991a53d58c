use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult};

pub const CONFIG_FILENAME: &str = "revload.toml";
pub const DEFAULT_NAME_WIDTH: usize = 20;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportConfig {
    pub required_only: Option<bool>,
    pub name_width: Option<usize>,
    pub seed: Option<u64>, // None = fresh entropy per run
    pub badge: Option<bool>,
}

impl ReportConfig {
    pub fn required_only(&self) -> bool {
        self.required_only.unwrap_or(true)
    }

    pub fn name_width(&self) -> usize {
        self.name_width.unwrap_or(DEFAULT_NAME_WIDTH)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn badge(&self) -> bool {
        self.badge.unwrap_or(true)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            required_only: Some(self.required_only()),
            name_width: Some(self.name_width()),
            seed: self.seed,
            badge: Some(self.badge()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScopeConfig {
    pub repositories: Option<Vec<String>>, // globs, any match keeps the PR
    pub status: Option<String>,
}

impl ScopeConfig {
    pub fn repositories(&self) -> &[String] {
        self.repositories.as_deref().unwrap_or(&[])
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            repositories: Some(self.repositories().to_vec()),
            status: self.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct IdentityEntry {
    pub name: Option<String>,
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Nested sections
    pub log: Option<LogConfig>,
    pub report: Option<ReportConfig>,
    pub scope: Option<ScopeConfig>,
    pub identities: Option<BTreeMap<String, IdentityEntry>>,
}

impl Config {
    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn report(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    pub fn scope(&self) -> ScopeConfig {
        self.scope.clone().unwrap_or_default()
    }

    pub fn identities(&self) -> BTreeMap<String, IdentityEntry> {
        self.identities.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            log: Some(self.log().to_effective()),
            report: Some(self.report().to_effective()),
            scope: Some(self.scope().to_effective()),
            identities: Some(self.identities()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub all_reviewers: bool,
    pub name_width: Option<usize>,
    pub seed: Option<u64>,
    pub no_badge: bool,
    pub repositories: Option<String>, // csv
    pub status: Option<String>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_config_file()
            && let Ok(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    let cfg = load(overrides)?;
    let _ = CONFIG.set(cfg);
    Ok(())
}

/// Resolve config from file then CLI overrides, without touching the global.
pub fn load(overrides: &CliOverrides) -> AppResult<Config> {
    let mut cfg = Config::default();

    // 1) Config file: explicit path must load; a discovered one may vanish before it is read
    if let Some(path) = &overrides.config {
        let file_cfg = read_config_file(Path::new(path))?;
        apply_file_config(&mut cfg, &file_cfg);
    } else if let Some(path) = find_config_file() {
        match read_config_file(&path) {
            Ok(file_cfg) => apply_file_config(&mut cfg, &file_cfg),
            Err(e @ AppError::Config { .. }) => return Err(e),
            Err(e) => debug!("Skipping {}: {e}", path.display()),
        }
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    Ok(cfg)
}

fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::Custom(format!("Failed to read config {}: {e}", path.display()))
    })?;
    toml::from_str::<Config>(&contents).map_err(|source| AppError::Config {
        path: path.display().to_string(),
        source,
    })
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge report section
    if let Some(file_report) = &file.report {
        let mut report = cfg.report.clone().unwrap_or_default();
        if file_report.required_only.is_some() {
            report.required_only = file_report.required_only;
        }
        if file_report.name_width.is_some() {
            report.name_width = file_report.name_width;
        }
        if file_report.seed.is_some() {
            report.seed = file_report.seed;
        }
        if file_report.badge.is_some() {
            report.badge = file_report.badge;
        }
        cfg.report = Some(report);
    }

    // Merge scope section
    if let Some(file_scope) = &file.scope {
        let mut scope = cfg.scope.clone().unwrap_or_default();
        if let Some(repos) = &file_scope.repositories {
            scope.repositories = Some(
                scope
                    .repositories()
                    .iter()
                    .chain(repos.iter())
                    .cloned()
                    .collect(),
            );
        }
        if file_scope.status.is_some() {
            scope.status = file_scope.status.clone();
        }
        cfg.scope = Some(scope);
    }

    if let Some(file_ids) = &file.identities {
        let mut ids = cfg.identities();
        for (email, entry) in file_ids {
            ids.insert(email.trim().to_lowercase(), entry.clone());
        }
        cfg.identities = Some(ids);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Report overrides
    let mut report = cfg.report.clone().unwrap_or_default();
    if overrides.all_reviewers {
        report.required_only = Some(false);
    }
    if overrides.name_width.is_some() {
        report.name_width = overrides.name_width;
    }
    if overrides.seed.is_some() {
        report.seed = overrides.seed;
    }
    if overrides.no_badge {
        report.badge = Some(false);
    }
    if overrides.all_reviewers
        || overrides.name_width.is_some()
        || overrides.seed.is_some()
        || overrides.no_badge
    {
        cfg.report = Some(report);
    }

    // Scope overrides replace the file's values
    let mut scope = cfg.scope.clone().unwrap_or_default();
    if let Some(repos_csv) = &overrides.repositories {
        let list = parse_csv(repos_csv);
        if !list.is_empty() {
            scope.repositories = Some(list);
        }
    }
    if let Some(status) = &overrides.status
        && !status.trim().is_empty()
    {
        scope.status = Some(status.trim().to_string());
    }
    if overrides.repositories.is_some() || overrides.status.is_some() {
        cfg.scope = Some(scope);
    }
}

fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Nearest revload.toml walking up from cwd, else the user config dir.
fn find_config_file() -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        for dir in cwd.ancestors() {
            let candidate = dir.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
        }
    }
    let user = dirs_next::config_dir()?.join("revload").join(CONFIG_FILENAME);
    user.exists().then_some(user)
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled_stderr(),
    }
}
