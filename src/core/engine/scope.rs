use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

use crate::types::config::ScopeConfig;
use crate::types::{AppError, AppResult, PullRequestSummary};

/// Which pull requests a report covers.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    repositories: Option<GlobSet>,
    status: Option<String>,
}

impl Scope {
    /// Everything passes.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(repository_globs: &[String], status: Option<&str>) -> AppResult<Self> {
        let repositories = if repository_globs.is_empty() {
            None
        } else {
            let mut builder = GlobSetBuilder::new();
            for pattern in repository_globs {
                let glob = Glob::new(pattern).map_err(|source| AppError::Glob {
                    pattern: pattern.clone(),
                    source,
                })?;
                builder.add(glob);
            }
            Some(builder.build().map_err(|source| AppError::Glob {
                pattern: repository_globs.join(","),
                source,
            })?)
        };
        Ok(Self {
            repositories,
            status: status
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        })
    }

    pub fn from_config(scope: &ScopeConfig) -> AppResult<Self> {
        Self::new(scope.repositories(), scope.status())
    }

    /// A PR missing the field a constraint looks at is out of scope.
    pub fn contains(&self, pr: &PullRequestSummary) -> bool {
        if let Some(set) = &self.repositories {
            match pr.repository.as_deref() {
                Some(repo) if set.is_match(repo) => {}
                _ => return false,
            }
        }
        if let Some(status) = &self.status {
            match pr.status.as_deref() {
                Some(s) if s.trim().eq_ignore_ascii_case(status) => {}
                _ => return false,
            }
        }
        true
    }

    pub fn filter(&self, prs: Vec<PullRequestSummary>) -> Vec<PullRequestSummary> {
        let before = prs.len();
        let kept: Vec<PullRequestSummary> = prs.into_iter().filter(|pr| self.contains(pr)).collect();
        if kept.len() != before {
            debug!("Scope kept {} of {} pull requests", kept.len(), before);
        }
        kept
    }
}
