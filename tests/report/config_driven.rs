use std::io::Write;

use pretty_assertions::assert_eq;
use revload::core::cmds::report::build_report;
use revload::types::config::{CliOverrides, Config, load};

use crate::QUEUE;

fn config_from(contents: &str, overrides: CliOverrides) -> Config {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    load(&CliOverrides {
        config: Some(file.path().display().to_string()),
        ..overrides
    })
    .unwrap()
}

#[test]
fn identities_rename_reviewers_in_the_table() {
    let cfg = config_from(
        r#"
[report]
seed = 3
badge = false

[identities."Bo@Example.com"]
name = "Robert Chen"
"#,
        CliOverrides::default(),
    );
    let report = build_report(QUEUE, &cfg).unwrap();
    assert_eq!(report.reviewers[1].display_name, "Robert Chen");
    assert!(report.text.contains("Robert Chen"));
    assert!(report.badge.is_none());
}

#[test]
fn cli_overrides_switch_to_full_view() {
    let cfg = config_from(
        "[report]\nrequired_only = true\nname_width = 8\n",
        CliOverrides {
            all_reviewers: true,
            no_badge: true,
            ..Default::default()
        },
    );
    let report = build_report(QUEUE, &cfg).unwrap();
    assert!(!report.required_only);
    let header = report.text.lines().nth(1).unwrap();
    assert_eq!(
        header,
        "Name      Required  Optional  Total  Approved  WaitingForAuthor  Rejected  Pending"
    );
}

#[test]
fn scope_from_config_file() {
    let cfg = config_from(
        "[scope]\nrepositories = [\"docs\"]\nstatus = \"completed\"\n",
        CliOverrides {
            seed: Some(1),
            ..Default::default()
        },
    );
    let report = build_report(QUEUE, &cfg).unwrap();
    assert_eq!(report.total_pull_requests, 1);
    assert_eq!(report.reviewers.len(), 1);
    assert_eq!(report.reviewers[0].email, "ann@example.com");
}

#[test]
fn same_config_same_output() {
    let cfg = config_from("[report]\nseed = 11\n", CliOverrides::default());
    let first = build_report(QUEUE, &cfg).unwrap();
    let second = build_report(QUEUE, &cfg).unwrap();
    assert_eq!(first.text, second.text);
}

#[test]
fn json_envelope_carries_sorted_reviewers() {
    let cfg = config_from("[report]\nseed = 11\n", CliOverrides::default());
    let report = build_report(QUEUE, &cfg).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_pull_requests"], 4);
    assert_eq!(json["required_only"], true);
    assert_eq!(json["reviewers"][0]["email"], "ann@example.com");
    assert!(json.get("text").is_none());
    assert!(json["badge"]["title"].is_string());
}

#[test]
fn handles_reach_the_json_output() {
    let cfg = config_from(
        r#"
[report]
seed = 5

[identities."bo@example.com"]
handle = "@bo"
"#,
        CliOverrides::default(),
    );
    let report = build_report(QUEUE, &cfg).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["reviewers"][1]["display_name"], "Bo Chen");
    assert_eq!(json["reviewers"][1]["handle"], "@bo");
    assert!(json["reviewers"][0].get("handle").is_none());
}

#[test]
fn garbage_input_is_an_error_not_an_empty_report() {
    let cfg = Config::default();
    assert!(build_report("<html>502 Bad Gateway</html>", &cfg).is_err());
    let empty = build_report("[]", &cfg).unwrap();
    assert!(empty.reviewers.is_empty());
    assert_eq!(empty.text, "No reviewers found.\n");
}
