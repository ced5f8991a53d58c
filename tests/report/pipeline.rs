use pretty_assertions::assert_eq;
use revload::types::{BadgeKind, parse_pull_requests};
use revload::{FixedPicker, NoDirectory, RandomPicker, RenderOptions, ReportOptions, Scope, generate};

use crate::QUEUE;

fn options(required_only: bool) -> ReportOptions {
    ReportOptions {
        render: RenderOptions {
            required_only,
            ..Default::default()
        },
        badge: true,
    }
}

#[test]
fn required_view_end_to_end() {
    let prs = parse_pull_requests(QUEUE).unwrap();
    let report = generate(
        prs,
        &Scope::all(),
        options(true),
        &NoDirectory,
        &mut FixedPicker(1),
    );

    let expected = "\
Reviewer workload across 4 PRs (required reviewers)
Name                  Required  Approved  WaitingForAuthor  Rejected  Pending
--------------------  --------  --------  ----------------  --------  -------
Ann Lee                      4         4                 0         0        0
Bo Chen                      3         0                 1         1        1
Cy Diaz                      1         0                 0         0        1

🚧 Gatekeeper: Bo rejected 1 PR so far
";
    assert_eq!(report.text, expected);
    assert_eq!(report.total_pull_requests, 4);

    let badge = report.badge.unwrap();
    assert_eq!(badge.email, "bo@example.com");
    assert_eq!(badge.badge.kind, BadgeKind::Gatekeeper);
}

#[test]
fn full_view_end_to_end() {
    let prs = parse_pull_requests(QUEUE).unwrap();
    let report = generate(
        prs,
        &Scope::all(),
        options(false),
        &NoDirectory,
        &mut FixedPicker(0),
    );

    let expected = "\
Reviewer workload across 4 PRs (all reviewers)
Name                  Required  Optional  Total  Approved  WaitingForAuthor  Rejected  Pending
--------------------  --------  --------  -----  --------  ----------------  --------  -------
Ann Lee                      4         0      4         4                 0         0        0
Bo Chen                      3         0      3         0                 1         1        1
Cy Diaz                      1         1      2         0                 1         0        1

🦸 Super Reviewer: Ann approved 4 of 4 required reviews while carrying the biggest load
";
    assert_eq!(report.text, expected);
}

#[test]
fn every_reviewer_gets_the_expected_badge() {
    let prs = parse_pull_requests(QUEUE).unwrap();
    let report = generate(
        prs,
        &Scope::all(),
        options(true),
        &NoDirectory,
        &mut FixedPicker(0),
    );
    let awards: Vec<(String, BadgeKind)> = revload::classify_badges(&report.reviewers)
        .into_iter()
        .map(|a| (a.reviewer.email.clone(), a.badge.kind))
        .collect();
    assert_eq!(
        awards,
        vec![
            ("ann@example.com".to_string(), BadgeKind::SuperReviewer),
            ("bo@example.com".to_string(), BadgeKind::Gatekeeper),
            ("cy@example.com".to_string(), BadgeKind::Benchwarmer),
        ]
    );
}

#[test]
fn scope_narrows_the_queue() {
    let prs = parse_pull_requests(QUEUE).unwrap();
    let scope = Scope::new(&["platform-*".to_string()], Some("active")).unwrap();
    let report = generate(prs, &scope, options(true), &NoDirectory, &mut FixedPicker(0));

    // 102 is a draft, 103 and 104 remain
    assert_eq!(report.total_pull_requests, 2);
    let names: Vec<&str> = report
        .reviewers
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();
    assert_eq!(names, vec!["Ann Lee", "Bo Chen", "Cy Diaz"]);
}

#[test]
fn nothing_in_scope_renders_the_empty_message() {
    let prs = parse_pull_requests(QUEUE).unwrap();
    let scope = Scope::new(&["mobile-*".to_string()], None).unwrap();
    let report = generate(prs, &scope, options(true), &NoDirectory, &mut FixedPicker(0));

    assert!(report.reviewers.is_empty());
    assert!(report.badge.is_none());
    assert_eq!(report.text, "No reviewers found.\n");
}

#[test]
fn seeded_runs_are_byte_identical() {
    let render = |seed| {
        let prs = parse_pull_requests(QUEUE).unwrap();
        generate(
            prs,
            &Scope::all(),
            options(true),
            &NoDirectory,
            &mut RandomPicker::seeded(seed),
        )
        .text
    };
    assert_eq!(render(2024), render(2024));
}
