use std::collections::HashMap;

use serde::Serialize;

use crate::types::VoteOutcome;

/// One assignment folded into a reviewer's statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewDetail {
    pub pr_id: i64,
    pub title: String,
    pub vote: VoteOutcome,
    pub required: bool,
}

/// Workload statistics for a single reviewer identity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewerStat {
    pub display_name: String,
    /// Normalized (trimmed, lower-cased) email; the identity key
    pub email: String,
    /// Chat handle from the identity directory, if one is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    pub required: usize,
    pub optional: usize,
    pub total: usize,
    pub approved: usize,
    pub waiting_for_author: usize,
    pub rejected: usize,
    pub pending: usize,
    pub details: Vec<ReviewDetail>,
}

impl ReviewerStat {
    pub fn new(email: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            handle: None,
            required: 0,
            optional: 0,
            total: 0,
            approved: 0,
            waiting_for_author: 0,
            rejected: 0,
            pending: 0,
            details: Vec::new(),
        }
    }

    pub fn record(&mut self, pr_id: i64, title: &str, required: bool, vote: VoteOutcome) {
        if required {
            self.required += 1;
        } else {
            self.optional += 1;
        }
        self.total += 1;
        match vote {
            VoteOutcome::Approved => self.approved += 1,
            VoteOutcome::WaitingForAuthor => self.waiting_for_author += 1,
            VoteOutcome::Rejected => self.rejected += 1,
            VoteOutcome::Pending => self.pending += 1,
        }
        self.details.push(ReviewDetail {
            pr_id,
            title: title.to_string(),
            vote,
            required,
        });
    }

    /// Sum of the four outcome buckets
    pub fn outcome_total(&self) -> usize {
        self.approved + self.waiting_for_author + self.rejected + self.pending
    }

    /// First whitespace-separated token of the display name, falling back to
    /// the local part of the email.
    pub fn first_name(&self) -> &str {
        if let Some(token) = self.display_name.split_whitespace().next() {
            return token;
        }
        match self.email.split('@').next() {
            Some(local) if !local.is_empty() => local,
            _ => "Someone",
        }
    }
}

/// Reviewer statistics keyed by normalized email, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ReviewerStats {
    entries: Vec<ReviewerStat>,
    index: HashMap<String, usize>,
}

impl ReviewerStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing entry for `email`, or a fresh one carrying `display_name`.
    pub fn entry(&mut self, email: &str, display_name: &str) -> &mut ReviewerStat {
        let idx = match self.index.get(email) {
            Some(&idx) => idx,
            None => {
                self.entries.push(ReviewerStat::new(email, display_name));
                let idx = self.entries.len() - 1;
                self.index.insert(email.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    pub fn get(&self, email: &str) -> Option<&ReviewerStat> {
        self.index.get(email).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReviewerStat> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ReviewerStat> {
        self.entries.iter_mut()
    }

    pub fn into_vec(self) -> Vec<ReviewerStat> {
        self.entries
    }
}
