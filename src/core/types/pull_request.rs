use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{AppError, AppResult};

/// One reviewer on one pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewerAssignment {
    pub email: String,
    pub display_name: String,
    pub required: bool,
    pub vote: i64,
}

/// A pull request as handed over by whatever fetched it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PullRequestSummary {
    pub id: i64,
    pub title: String,
    pub draft: bool,
    pub repository: Option<String>,
    pub status: Option<String>,
    pub reviewers: Vec<ReviewerAssignment>,
}

impl ReviewerAssignment {
    pub fn new(email: &str, display_name: &str, required: bool, vote: i64) -> Self {
        Self {
            email: email.to_string(),
            display_name: display_name.to_string(),
            required,
            vote,
        }
    }

    /// Build from a JSON object, defaulting anything missing or mistyped.
    pub fn from_json(value: &Value) -> Option<Self> {
        let Some(obj) = value.as_object() else {
            warn!("Skipping reviewer entry that is not an object: {value}");
            return None;
        };
        Some(Self {
            email: string_field(obj, &["email", "uniqueName", "unique_name"]).unwrap_or_default(),
            display_name: string_field(obj, &["displayName", "display_name", "name"])
                .unwrap_or_default(),
            required: bool_field(obj, &["isRequired", "is_required", "required"]).unwrap_or(false),
            vote: int_field(obj, &["vote"]).unwrap_or(0),
        })
    }
}

impl PullRequestSummary {
    /// Build from a JSON object. Only a non-object value is rejected; every
    /// field inside falls back to an empty/zero default.
    pub fn from_json(value: &Value) -> Option<Self> {
        let Some(obj) = value.as_object() else {
            warn!("Skipping pull request entry that is not an object: {value}");
            return None;
        };

        let id = int_field(obj, &["id", "pullRequestId", "pull_request_id"]).unwrap_or(0);
        let reviewers = match obj.get("reviewers") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(ReviewerAssignment::from_json)
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                warn!("Pull request {id}: ignoring non-array reviewers field: {other}");
                Vec::new()
            }
        };

        let repository = match obj.get("repository") {
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Object(repo)) => string_field(repo, &["name"]),
            _ => None,
        };

        Some(Self {
            id,
            title: string_field(obj, &["title"]).unwrap_or_default(),
            draft: bool_field(obj, &["isDraft", "is_draft", "draft"]).unwrap_or(false),
            repository,
            status: string_field(obj, &["status"]),
            reviewers,
        })
    }
}

/// Decode a JSON document into pull request summaries.
///
/// Accepts a bare array or a list envelope of the form `{"value": [...]}`.
/// Anything that is not JSON, or has neither shape, is an error: that is a
/// fetch problem, not an empty queue.
pub fn parse_pull_requests(json: &str) -> AppResult<Vec<PullRequestSummary>> {
    let document: Value = serde_json::from_str(json)?;
    let items = match &document {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("value") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(AppError::InvalidInput(
                    "expected an array of pull requests or an object with a \"value\" array"
                        .to_string(),
                ));
            }
        },
        _ => {
            return Err(AppError::InvalidInput(
                "expected an array of pull requests".to_string(),
            ));
        }
    };

    let prs: Vec<PullRequestSummary> = items
        .iter()
        .filter_map(PullRequestSummary::from_json)
        .collect();
    debug!("Decoded {} of {} pull request entries", prs.len(), items.len());
    Ok(prs)
}

fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

fn bool_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_bool))
}

fn int_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|k| match obj.get(*k)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}
