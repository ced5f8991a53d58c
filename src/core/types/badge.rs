use serde::Serialize;
use strum::{Display, EnumIter};

use crate::types::ReviewerStat;

/// The badge catalogue, in rule-precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum BadgeKind {
    #[strum(serialize = "Super Reviewer")]
    SuperReviewer,
    #[strum(serialize = "Needs Backup")]
    NeedsBackup,
    #[strum(serialize = "Needs Coffee")]
    NeedsCoffee,
    #[strum(serialize = "Benchwarmer")]
    Benchwarmer,
    #[strum(serialize = "Flawless")]
    Flawless,
    #[strum(serialize = "Gatekeeper")]
    Gatekeeper,
    #[strum(serialize = "Waiting Room")]
    WaitingRoom,
    #[strum(serialize = "Speed Demon")]
    SpeedDemon,
}

impl BadgeKind {
    pub fn emoji(&self) -> &'static str {
        match self {
            BadgeKind::SuperReviewer => "🦸",
            BadgeKind::NeedsBackup => "🆘",
            BadgeKind::NeedsCoffee => "☕",
            BadgeKind::Benchwarmer => "🪑",
            BadgeKind::Flawless => "💎",
            BadgeKind::Gatekeeper => "🚧",
            BadgeKind::WaitingRoom => "⏳",
            BadgeKind::SpeedDemon => "⚡",
        }
    }

    /// Human-readable condition, as shown by `print badges`
    pub fn rule(&self) -> &'static str {
        match self {
            BadgeKind::SuperReviewer => "high volume and >= 80% approved",
            BadgeKind::NeedsBackup => "high volume and >= 50% untouched",
            BadgeKind::NeedsCoffee => "not high volume, >= 70% untouched and >= 2 pending",
            BadgeKind::Benchwarmer => "low volume and at most 1 required review",
            BadgeKind::Flawless => ">= 2 required reviews, all approved",
            BadgeKind::Gatekeeper => "rejected at least one PR",
            BadgeKind::WaitingRoom => "waiting on authors for >= 2 PRs",
            BadgeKind::SpeedDemon => "medium volume and >= 70% approved",
        }
    }

    fn describe(&self, stat: &ReviewerStat) -> String {
        let name = stat.first_name();
        match self {
            BadgeKind::SuperReviewer => format!(
                "{name} approved {} of {} required reviews while carrying the biggest load",
                stat.approved, stat.required
            ),
            BadgeKind::NeedsBackup => format!(
                "{name} has {} of {} required reviews still untouched, send help",
                stat.pending, stat.required
            ),
            BadgeKind::NeedsCoffee => format!(
                "{name} has {} reviews waiting for a first look",
                stat.pending
            ),
            BadgeKind::Benchwarmer => format!(
                "{name} is on {} required review, there is room on the roster",
                stat.required
            ),
            BadgeKind::Flawless => format!(
                "{name} approved every one of {} required reviews",
                stat.required
            ),
            BadgeKind::Gatekeeper => format!(
                "{name} rejected {} PR{} so far",
                stat.rejected,
                if stat.rejected == 1 { "" } else { "s" }
            ),
            BadgeKind::WaitingRoom => format!(
                "{name} is waiting on authors for {} PRs",
                stat.waiting_for_author
            ),
            BadgeKind::SpeedDemon => format!(
                "{name} already approved {} of {} required reviews",
                stat.approved, stat.required
            ),
        }
    }
}

/// A badge bound to one reviewer's numbers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub kind: BadgeKind,
    pub emoji: &'static str,
    pub title: String,
    pub description: String,
}

impl Badge {
    pub fn new(kind: BadgeKind, stat: &ReviewerStat) -> Self {
        Self {
            kind,
            emoji: kind.emoji(),
            title: kind.to_string(),
            description: kind.describe(stat),
        }
    }

    /// `<emoji> <Title>: <description>`
    pub fn display(&self) -> String {
        format!("{} {}: {}", self.emoji, self.title, self.description)
    }
}

/// A qualifying (reviewer, badge) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeAward<'a> {
    pub reviewer: &'a ReviewerStat,
    pub badge: Badge,
}
