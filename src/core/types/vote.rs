use serde::Serialize;
use strum::{Display, EnumIter};

/// Outcome bucket for a single reviewer assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum VoteOutcome {
    #[strum(serialize = "Approved")]
    Approved,
    #[strum(serialize = "Waiting for author")]
    WaitingForAuthor,
    #[strum(serialize = "Rejected")]
    Rejected,
    #[strum(serialize = "Pending")]
    Pending,
}

impl VoteOutcome {
    /// Map a raw service vote onto its bucket. First match wins; any value
    /// the service does not emit (e.g. 7) lands in `Pending`.
    pub fn classify(vote: i64) -> Self {
        if vote >= 10 {
            VoteOutcome::Approved
        } else if vote == -5 {
            VoteOutcome::WaitingForAuthor
        } else if vote <= -10 {
            VoteOutcome::Rejected
        } else {
            VoteOutcome::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn service_votes_map_to_buckets() {
        assert_eq!(VoteOutcome::classify(10), VoteOutcome::Approved);
        assert_eq!(VoteOutcome::classify(5), VoteOutcome::Pending);
        assert_eq!(VoteOutcome::classify(0), VoteOutcome::Pending);
        assert_eq!(VoteOutcome::classify(-5), VoteOutcome::WaitingForAuthor);
        assert_eq!(VoteOutcome::classify(-10), VoteOutcome::Rejected);
    }

    #[test]
    fn out_of_range_votes_still_classify() {
        assert_eq!(VoteOutcome::classify(7), VoteOutcome::Pending);
        assert_eq!(VoteOutcome::classify(-4), VoteOutcome::Pending);
        assert_eq!(VoteOutcome::classify(-6), VoteOutcome::Pending);
        assert_eq!(VoteOutcome::classify(i64::MAX), VoteOutcome::Approved);
        assert_eq!(VoteOutcome::classify(i64::MIN), VoteOutcome::Rejected);
    }

    #[test]
    fn labels_are_distinct() {
        let labels: Vec<String> = VoteOutcome::iter().map(|o| o.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Approved", "Waiting for author", "Rejected", "Pending"]
        );
    }
}
