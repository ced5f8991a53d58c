use log::debug;

use crate::types::{PullRequestSummary, ReviewerStats, VoteOutcome};

/// Fold pull requests into per-reviewer statistics.
///
/// Drafts never count. With `required_only`, optional assignments are
/// dropped before they touch any counter. Assignments without an email
/// cannot be attributed and are skipped.
pub fn aggregate(prs: &[PullRequestSummary], required_only: bool) -> ReviewerStats {
    let mut stats = ReviewerStats::new();

    for pr in prs {
        if pr.draft {
            debug!("Skipping draft PR {}", pr.id);
            continue;
        }
        for assignment in &pr.reviewers {
            if required_only && !assignment.required {
                continue;
            }
            let email = normalize_email(&assignment.email);
            if email.is_empty() {
                debug!(
                    "PR {}: skipping reviewer {:?} without an email",
                    pr.id, assignment.display_name
                );
                continue;
            }
            stats.entry(&email, &assignment.display_name).record(
                pr.id,
                &pr.title,
                assignment.required,
                VoteOutcome::classify(assignment.vote),
            );
        }
    }

    debug!(
        "Aggregated {} reviewers from {} pull requests",
        stats.len(),
        prs.len()
    );
    stats
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
