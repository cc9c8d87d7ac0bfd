use std::collections::BTreeSet;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use pickem_analyzer::standings;
use pickem_analyzer::state::{AnalysisReport, AnalyzeOptions};
use pickem_analyzer::teams::normalize_team;

const VALUE_FLAGS: &[&str] = &["--max-conf", "--entry", "--remaining"];

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    if has_flag("--help") {
        print_usage();
        return Ok(());
    }

    let raw = read_input().context("failed to read standings text")?;
    if raw.trim().is_empty() {
        println!("Paste the weekly standings text into a file or stdin first.");
        return Ok(());
    }

    let opts = AnalyzeOptions {
        max_confidence_override: parse_u32_arg("--max-conf")
            .or_else(|| env_u32("PICKEM_MAX_CONF"))
            .unwrap_or(0),
        manual_remaining: parse_string_arg("--remaining")
            .or_else(|| std::env::var("PICKEM_REMAINING").ok())
            .map(|raw| parse_team_list(&raw))
            .unwrap_or_default(),
        entry_name: parse_string_arg("--entry").or_else(|| std::env::var("PICKEM_ENTRY").ok()),
    };

    let report = standings::analyze(&raw, &opts);

    if has_flag("--json") {
        let encoded =
            serde_json::to_string_pretty(&report).context("failed to encode report as JSON")?;
        println!("{encoded}");
        return Ok(());
    }

    if report.rows.is_empty() {
        println!("No participants parsed. Double-check your paste.");
        return Ok(());
    }

    render_table(&report);
    if has_flag("--debug") {
        render_debug(&report);
    }
    Ok(())
}

fn print_usage() {
    println!("Usage: pickem_analyzer [FILE] [options]");
    println!();
    println!("Reads the pasted weekly standings text from FILE (or stdin) and");
    println!("prints each entry's best-case remaining points and ceiling.");
    println!();
    println!("Options:");
    println!("  --max-conf N      Override the detected max confidence (0 = auto)");
    println!("  --entry NAME      Entry that gets game-aware remaining points");
    println!("  --remaining LIST  Comma-separated remaining team codes (adds to detected)");
    println!("  --json            Emit the full report as JSON");
    println!("  --debug           Show detected headers and per-entry breakdowns");
}

fn read_input() -> Result<String> {
    if let Some(path) = input_path() {
        return fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

/// First positional argument, skipping flag/value pairs.
fn input_path() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut skip_value = false;
    for arg in &args {
        if skip_value {
            skip_value = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_value = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        return Some(PathBuf::from(arg));
    }
    None
}

fn has_flag(name: &str) -> bool {
    std::env::args().skip(1).any(|arg| arg == name)
}

fn parse_string_arg(name: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&format!("{name}="))
            && !raw.trim().is_empty()
        {
            return Some(raw.trim().to_string());
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}

fn parse_u32_arg(name: &str) -> Option<u32> {
    parse_string_arg(name).and_then(|raw| raw.parse().ok())
}

fn env_u32(name: &str) -> Option<u32> {
    std::env::var(name).ok().and_then(|raw| raw.parse().ok())
}

fn parse_team_list(raw: &str) -> BTreeSet<String> {
    raw.split([',', ' '])
        .map(normalize_team)
        .filter(|team| !team.is_empty())
        .collect()
}

fn render_table(report: &AnalysisReport) {
    println!(
        "Week size (max confidence): {}",
        report.context.max_confidence
    );
    let detected: Vec<&str> = report
        .context
        .undecided_teams
        .iter()
        .map(String::as_str)
        .collect();
    if detected.is_empty() {
        println!("Detected pre-game teams: none");
    } else {
        println!("Detected pre-game teams: {}", detected.join(", "));
    }
    if let Some(entry) = &report.entry {
        println!(
            "{}: {} picks vs base {} (extra={})",
            entry.name, entry.pick_count, entry.baseline_pick_count, entry.extra_picks
        );
    }
    println!();

    let name_width = report
        .rows
        .iter()
        .map(|row| row.name.len())
        .max()
        .unwrap_or(4)
        .max(4);
    println!(
        "{:<5} {:<name_width$} {:>8} {:>10} {:>8}",
        "Rank", "Name", "Current", "Remaining", "Total"
    );
    for row in &report.rows {
        let rank = row
            .rank
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<5} {:<name_width$} {:>8.1} {:>10} {:>8.1}",
            rank, row.name, row.current_points, row.points_remaining, row.total_possible
        );
    }
}

fn render_debug(report: &AnalysisReport) {
    println!();
    println!("Pre-game header/code lines detected:");
    if report.context.headers.is_empty() {
        println!("  (none -- did the paste include the scoreboard?)");
    } else {
        for header in &report.context.headers {
            println!("  - {header}");
        }
    }
    let games: Vec<String> = report
        .context
        .undecided_games
        .iter()
        .map(|game| game.label())
        .collect();
    println!(
        "Undecided games: {}",
        if games.is_empty() {
            "none".to_string()
        } else {
            games.join(", ")
        }
    );
    println!();
    for row in &report.rows {
        println!(
            "{} -- used {:?} | missing {:?} | remaining {} via {:?}",
            row.name, row.used_confidences, row.missing_confidences, row.points_remaining, row.strategy
        );
    }
    if let Some(entry) = &report.entry {
        let picks: Vec<String> = entry
            .picks
            .iter()
            .map(|pick| format!("{} ({})", pick.team, pick.confidence))
            .collect();
        println!();
        println!("Your picks (normalized): {}", picks.join(", "));
    }
}
