use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use revload::types::{PullRequestSummary, ReviewerAssignment};
use revload::{aggregate, classify_badges, sort_for_display};

const VOTES: [i64; 6] = [10, 5, 0, -5, -10, 7];

/// A reproducible, messy queue: drafts, optional reviewers, odd votes,
/// mixed-case emails.
fn random_queue(seed: u64) -> Vec<PullRequestSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rng.random_range(0..40))
        .map(|id| {
            let reviewers = (0..rng.random_range(0..6))
                .map(|_| {
                    let who = rng.random_range(0..8);
                    let email = if rng.random_bool(0.2) {
                        format!("User{who}@Example.com")
                    } else {
                        format!("user{who}@example.com")
                    };
                    ReviewerAssignment::new(
                        &email,
                        &format!("User {who}"),
                        rng.random_bool(0.7),
                        VOTES[rng.random_range(0..VOTES.len())],
                    )
                })
                .collect();
            PullRequestSummary {
                id,
                title: format!("PR {id}"),
                draft: rng.random_bool(0.15),
                reviewers,
                ..Default::default()
            }
        })
        .collect()
}

#[test]
fn outcome_buckets_always_sum_to_required() {
    for seed in 0..50 {
        for stat in aggregate(&random_queue(seed), true).iter() {
            assert_eq!(stat.outcome_total(), stat.required, "seed {seed}");
            assert_eq!(stat.optional, 0, "seed {seed}");
            assert!(stat.required > 0, "seed {seed}");
        }
    }
}

#[test]
fn full_mode_buckets_sum_to_total() {
    for seed in 0..50 {
        for stat in aggregate(&random_queue(seed), false).iter() {
            assert_eq!(stat.total, stat.required + stat.optional, "seed {seed}");
            assert_eq!(stat.outcome_total(), stat.total, "seed {seed}");
        }
    }
}

#[test]
fn drafts_and_optional_only_reviewers_are_absent() {
    for seed in 0..50 {
        let prs = random_queue(seed);
        let counted: HashSet<String> = prs
            .iter()
            .filter(|pr| !pr.draft)
            .flat_map(|pr| pr.reviewers.iter())
            .filter(|r| r.required)
            .map(|r| r.email.to_lowercase())
            .collect();
        let stats = aggregate(&prs, true);
        let present: HashSet<String> = stats.iter().map(|s| s.email.clone()).collect();
        assert_eq!(present, counted, "seed {seed}");
    }
}

#[test]
fn display_order_is_descending() {
    for seed in 0..50 {
        let mut stats = aggregate(&random_queue(seed), false).into_vec();
        sort_for_display(&mut stats);
        for pair in stats.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.required > b.required || (a.required == b.required && a.total >= b.total),
                "seed {seed}: {} before {}",
                a.email,
                b.email
            );
        }
    }
}

#[test]
fn no_reviewer_holds_two_badges() {
    for seed in 0..50 {
        let stats = aggregate(&random_queue(seed), true).into_vec();
        let awards = classify_badges(&stats);
        let holders: HashSet<&str> = awards.iter().map(|a| a.reviewer.email.as_str()).collect();
        assert_eq!(holders.len(), awards.len(), "seed {seed}");
        assert!(awards.iter().all(|a| a.reviewer.required > 0));
    }
}
