use std::collections::BTreeMap;

use crate::types::ReviewerStat;
use crate::types::config::IdentityEntry;

/// A person as known outside the review service.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub name: Option<String>,
    pub handle: Option<String>,
}

/// Email → identity lookup, injected by whoever builds the report.
pub trait IdentityDirectory {
    /// `email` is already normalized (trimmed, lower-cased).
    fn lookup(&self, email: &str) -> Option<Identity>;
}

/// Knows nobody; reports keep the service's display names.
pub struct NoDirectory;

impl IdentityDirectory for NoDirectory {
    fn lookup(&self, _email: &str) -> Option<Identity> {
        None
    }
}

/// Directory backed by the `[identities]` config table.
#[derive(Debug, Clone, Default)]
pub struct TableDirectory {
    entries: BTreeMap<String, IdentityEntry>,
}

impl TableDirectory {
    pub fn new(entries: BTreeMap<String, IdentityEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(email, entry)| (email.trim().to_lowercase(), entry))
            .collect();
        Self { entries }
    }
}

impl IdentityDirectory for TableDirectory {
    fn lookup(&self, email: &str) -> Option<Identity> {
        self.entries.get(email).map(|entry| Identity {
            name: entry.name.clone(),
            handle: entry.handle.clone(),
        })
    }
}

/// Replace display names and attach handles where the directory knows the reviewer.
pub fn apply_identities<'a>(
    stats: impl IntoIterator<Item = &'a mut ReviewerStat>,
    directory: &dyn IdentityDirectory,
) {
    for stat in stats {
        let Some(identity) = directory.lookup(&stat.email) else {
            continue;
        };
        if let Some(name) = identity.name.filter(|name| !name.trim().is_empty()) {
            stat.display_name = name;
        }
        stat.handle = identity
            .handle
            .map(|handle| handle.trim().to_string())
            .filter(|handle| !handle.is_empty());
    }
}
