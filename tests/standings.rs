use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use pickem_analyzer::scoring::Strategy;
use pickem_analyzer::standings::analyze;
use pickem_analyzer::state::AnalyzeOptions;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn names(report: &pickem_analyzer::state::AnalysisReport) -> Vec<&str> {
    report.rows.iter().map(|row| row.name.as_str()).collect()
}

#[test]
fn without_an_entry_everyone_uses_missing_numbers() {
    let report = analyze(&read_fixture("weekly_standings.txt"), &AnalyzeOptions::default());

    assert_eq!(names(&report), vec!["Bobby", "Alice", "Charlie"]);
    assert!(report.rows.iter().all(|r| r.strategy == Strategy::MissingNumbers));

    // Bobby used {3,4,5} of a 5-game week: 1 and 2 are still missing.
    let bobby = &report.rows[0];
    assert_eq!(bobby.points_remaining, 3);
    assert_eq!(bobby.total_possible, 73.0);
    assert_eq!(bobby.missing_confidences, vec![1, 2]);

    // Alice and Charlie used every value, sentinel slots included.
    assert_eq!(report.rows[1].points_remaining, 0);
    assert_eq!(report.rows[2].points_remaining, 0);
    assert!(report.entry.is_none());
}

#[test]
fn designated_entry_scores_by_undecided_teams() {
    let opts = AnalyzeOptions {
        entry_name: Some("Alice".to_string()),
        ..Default::default()
    };
    let report = analyze(&read_fixture("weekly_standings.txt"), &opts);

    // SF (3) and GB (2) are still in play for Alice: 5 points of ceiling.
    assert_eq!(names(&report), vec!["Alice", "Bobby", "Charlie"]);
    let alice = &report.rows[0];
    assert_eq!(alice.points_remaining, 5);
    assert_eq!(alice.total_possible, 77.0);
    assert_eq!(alice.strategy, Strategy::UndecidedTeams);

    let entry = report.entry.as_ref().expect("entry diagnostics");
    assert_eq!(entry.name, "Alice");
    assert_eq!(entry.pick_count, 5);
    // Other pick counts are 3 and 5: a tie, so the middle of the sorted
    // counts becomes the baseline.
    assert_eq!(entry.baseline_pick_count, 5);
    assert_eq!(entry.extra_picks, 0);
}

#[test]
fn manual_remaining_teams_extend_the_detected_set() {
    let opts = AnalyzeOptions {
        entry_name: Some("Bobby".to_string()),
        manual_remaining: BTreeSet::from(["MIA".to_string()]),
        ..Default::default()
    };
    let report = analyze(&read_fixture("weekly_standings.txt"), &opts);

    // Detected {ARI, GB, MIN, SF} plus manual MIA: Bobby keeps SF (3) and
    // gains MIA (4).
    let bobby = report
        .rows
        .iter()
        .find(|row| row.name == "Bobby")
        .expect("Bobby row");
    assert_eq!(bobby.points_remaining, 7);
    assert_eq!(bobby.strategy, Strategy::UndecidedTeams);

    let entry = report.entry.as_ref().expect("entry diagnostics");
    assert!(entry.remaining_teams.contains("MIA"));
    assert!(entry.remaining_teams.contains("SF"));
}

#[test]
fn entry_with_alias_pick_matches_canonical_detection() {
    let opts = AnalyzeOptions {
        entry_name: Some("Brandon".to_string()),
        ..Default::default()
    };
    let report = analyze(&read_fixture("pregame_only.txt"), &opts);

    // Brandon's "LA (14)" pick and the scoreboard's "STL" both mean LAR.
    let brandon = report
        .rows
        .iter()
        .find(|row| row.name == "Brandon")
        .expect("Brandon row");
    assert_eq!(brandon.points_remaining, 14);
    assert_eq!(brandon.strategy, Strategy::UndecidedTeams);
}

#[test]
fn count_diff_kicks_in_when_nothing_is_detected() {
    let raw = "\
1st
Marcus
50
AA (3)
BB (2)
CC (1)
2nd
Nathan
48
DD (3)
EE (2)
3rd
Olivia
47
FF (3)
GG (2)
";
    let opts = AnalyzeOptions {
        entry_name: Some("Marcus".to_string()),
        ..Default::default()
    };
    let report = analyze(raw, &opts);

    // No scoreboard block at all: Strategy B has nothing, so the trailing
    // extra pick past the group's mode of 2 supplies the ceiling.
    let marcus = &report.rows[0];
    assert_eq!(marcus.name, "Marcus");
    assert_eq!(marcus.points_remaining, 1);
    assert_eq!(marcus.strategy, Strategy::CountDiff);
    assert_eq!(marcus.total_possible, 51.0);

    let entry = report.entry.as_ref().expect("entry diagnostics");
    assert_eq!(entry.baseline_pick_count, 2);
    assert_eq!(entry.extra_picks, 1);
}

#[test]
fn equal_totals_keep_discovery_order() {
    let raw = "\
1st
Deltaa
10
AA (2)
BB (1)
2nd
Echoes
10
CC (2)
DD (1)
";
    let report = analyze(raw, &AnalyzeOptions::default());
    assert_eq!(names(&report), vec!["Deltaa", "Echoes"]);
    assert_eq!(report.rows[0].total_possible, report.rows[1].total_possible);
}

#[test]
fn analyze_is_idempotent() {
    let raw = read_fixture("weekly_standings.txt");
    let opts = AnalyzeOptions {
        entry_name: Some("Alice".to_string()),
        ..Default::default()
    };
    assert_eq!(analyze(&raw, &opts), analyze(&raw, &opts));
}
