use log::{debug, info};
use serde::Serialize;

use crate::core::engine::aggregate::aggregate;
use crate::core::engine::badges::{BadgePicker, classify_badges, select_badge};
use crate::core::engine::render::{RenderOptions, render, sort_for_display};
use crate::core::engine::scope::Scope;
use crate::core::identity::{IdentityDirectory, apply_identities};
use crate::types::{Badge, PullRequestSummary, ReviewerStat};

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub render: RenderOptions,
    /// Surface a badge line under the table
    pub badge: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            badge: true,
        }
    }
}

/// The badge that made it into the report, detached from the stats it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedBadge {
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(flatten)]
    pub badge: Badge,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_pull_requests: usize,
    pub required_only: bool,
    /// Sorted for display
    pub reviewers: Vec<ReviewerStat>,
    pub badge: Option<FeaturedBadge>,
    #[serde(skip)]
    pub text: String,
}

/// Run the whole pipeline: scope, aggregate, rename, sort, classify, pick, render.
///
/// Every caller (CLI, hooks, scheduled jobs) goes through here so they all
/// see the same numbers for the same input.
pub fn generate(
    prs: Vec<PullRequestSummary>,
    scope: &Scope,
    options: ReportOptions,
    directory: &dyn IdentityDirectory,
    picker: &mut dyn BadgePicker,
) -> Report {
    let prs = scope.filter(prs);
    let total_pull_requests = prs.iter().filter(|pr| !pr.draft).count();
    let required_only = options.render.required_only;

    let mut aggregated = aggregate(&prs, required_only);
    apply_identities(aggregated.iter_mut(), directory);
    let mut reviewers = aggregated.into_vec();
    sort_for_display(&mut reviewers);

    let featured = if options.badge {
        select_badge(classify_badges(&reviewers), picker)
    } else {
        None
    };
    let text = render(&reviewers, total_pull_requests, options.render, featured.as_ref());

    let badge = featured.map(|award| {
        debug!("Featured badge: {} for {}", award.badge.title, award.reviewer.email);
        FeaturedBadge {
            email: award.reviewer.email.clone(),
            display_name: award.reviewer.display_name.clone(),
            handle: award.reviewer.handle.clone(),
            badge: award.badge,
        }
    });

    info!(
        "Report covers {} reviewers across {} pull requests",
        reviewers.len(),
        total_pull_requests
    );

    Report {
        total_pull_requests,
        required_only,
        reviewers,
        badge,
        text,
    }
}
