use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Badge, BadgeAward, BadgeKind, ReviewerStat};

const HIGH_VOLUME_FACTOR: f64 = 1.5;
const LOW_VOLUME_FACTOR: f64 = 0.5;
const LOW_VOLUME_FLOOR: f64 = 1.0;

/// Volume and rate figures one reviewer is judged on.
#[derive(Debug, Clone, Copy)]
struct Workload {
    completion_rate: f64,
    unreviewed_rate: f64,
    high: bool,
    low: bool,
    medium: bool,
}

impl Workload {
    fn new(stat: &ReviewerStat, avg_required: f64) -> Self {
        let required = stat.required as f64;
        let high = required >= avg_required * HIGH_VOLUME_FACTOR;
        let low = required <= LOW_VOLUME_FLOOR.max(avg_required * LOW_VOLUME_FACTOR);
        Self {
            completion_rate: stat.approved as f64 / required,
            unreviewed_rate: stat.pending as f64 / required,
            high,
            low,
            medium: !high && !low,
        }
    }
}

/// Mean required-review count; 0 for an empty slice.
pub fn average_required(stats: &[ReviewerStat]) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    stats.iter().map(|s| s.required as f64).sum::<f64>() / stats.len() as f64
}

/// First rule in precedence order that `stat` satisfies.
fn first_matching_rule(stat: &ReviewerStat, w: &Workload) -> Option<BadgeKind> {
    if w.high && w.completion_rate >= 0.8 {
        Some(BadgeKind::SuperReviewer)
    } else if w.high && w.unreviewed_rate >= 0.5 {
        Some(BadgeKind::NeedsBackup)
    } else if (w.low || w.medium) && w.unreviewed_rate >= 0.7 && stat.pending >= 2 {
        Some(BadgeKind::NeedsCoffee)
    } else if w.low && stat.required <= 1 {
        Some(BadgeKind::Benchwarmer)
    } else if stat.required >= 2 && stat.approved == stat.required {
        Some(BadgeKind::Flawless)
    } else if stat.rejected >= 1 {
        Some(BadgeKind::Gatekeeper)
    } else if stat.waiting_for_author >= 2 {
        Some(BadgeKind::WaitingRoom)
    } else if w.medium && w.completion_rate >= 0.7 {
        Some(BadgeKind::SpeedDemon)
    } else {
        None
    }
}

/// Assign at most one badge per reviewer.
///
/// The volume average covers every stat passed in, but reviewers without
/// required reviews never receive a badge themselves.
pub fn classify_badges(stats: &[ReviewerStat]) -> Vec<BadgeAward<'_>> {
    let avg_required = average_required(stats);
    if avg_required == 0.0 {
        return Vec::new();
    }

    let mut awards = Vec::new();
    for stat in stats.iter().filter(|s| s.required > 0) {
        let workload = Workload::new(stat, avg_required);
        if let Some(kind) = first_matching_rule(stat, &workload) {
            debug!("{} qualifies for {}", stat.email, kind);
            awards.push(BadgeAward {
                reviewer: stat,
                badge: Badge::new(kind, stat),
            });
        }
    }
    awards
}

/// Source of the single random choice in a report.
pub trait BadgePicker {
    /// Index in `0..candidates`; [`select_badge`] only calls it with `candidates > 0`.
    fn pick_index(&mut self, candidates: usize) -> usize;
}

/// Uniform pick backed by any `rand` generator.
pub struct RandomPicker<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> BadgePicker for RandomPicker<R> {
    fn pick_index(&mut self, candidates: usize) -> usize {
        self.rng.random_range(0..candidates)
    }
}

/// Always picks the same position (clamped to the last candidate).
pub struct FixedPicker(pub usize);

impl BadgePicker for FixedPicker {
    fn pick_index(&mut self, candidates: usize) -> usize {
        self.0.min(candidates.saturating_sub(1))
    }
}

/// Surface one qualifying award, or none when nobody qualifies.
pub fn select_badge<'a>(
    mut awards: Vec<BadgeAward<'a>>,
    picker: &mut dyn BadgePicker,
) -> Option<BadgeAward<'a>> {
    if awards.is_empty() {
        return None;
    }
    let idx = picker.pick_index(awards.len()).min(awards.len() - 1);
    Some(awards.swap_remove(idx))
}
