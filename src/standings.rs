use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::lines::clean_lines;
use crate::participants;
use crate::scoreboard;
use crate::scoring::{self, Strategy};
use crate::state::{
    AnalysisReport, AnalyzeOptions, EntryDiagnostics, Participant, ParseResult, StandingsRow,
    WeekContext,
};

/// One full pass over the pasted text: normalize, scan the scoreboard block,
/// parse the ranked entries. Pure and stateless; the same input always yields
/// the same result.
pub fn parse(raw: &str) -> ParseResult {
    let seq = clean_lines(raw);
    let scan = scoreboard::scan(&seq);
    let participants = participants::parse(&seq, scan.boundary);
    let context = WeekContext {
        max_confidence: detect_max_confidence(&participants),
        undecided_teams: scan.teams,
        undecided_games: scan.games,
        headers: scan.headers,
    };
    ParseResult {
        participants,
        context,
    }
}

/// Parse, score every entry, and produce the final ordered standings with
/// best-case ceilings attached.
pub fn analyze(raw: &str, opts: &AnalyzeOptions) -> AnalysisReport {
    let parsed = parse(raw);
    let mut context = parsed.context;
    if opts.max_confidence_override > 0 {
        context.max_confidence = opts.max_confidence_override;
    }

    // Manual remaining teams extend the detected set; they never replace it.
    let remaining: BTreeSet<String> = if opts.manual_remaining.is_empty() {
        context.undecided_teams.clone()
    } else {
        context
            .undecided_teams
            .union(&opts.manual_remaining)
            .cloned()
            .collect()
    };

    let entry_idx = opts
        .entry_name
        .as_deref()
        .and_then(|name| parsed.participants.iter().position(|p| p.name == name));

    let mut rows: Vec<StandingsRow> = Vec::with_capacity(parsed.participants.len());
    for (idx, participant) in parsed.participants.iter().enumerate() {
        let (points_remaining, strategy) = match entry_idx {
            Some(entry) if entry == idx => scoring::entry_points_remaining(
                participant,
                &remaining,
                &others_of(&parsed.participants, idx),
            ),
            _ => (
                scoring::missing_numbers(participant, context.max_confidence),
                Strategy::MissingNumbers,
            ),
        };
        rows.push(StandingsRow {
            name: participant.name.clone(),
            rank: participant.rank,
            current_points: participant.current_points,
            points_remaining,
            total_possible: participant.current_points + f64::from(points_remaining),
            strategy,
            used_confidences: participant.used_confidences(),
            missing_confidences: participant.missing_confidences(context.max_confidence),
        });
    }

    // Stable: equal keys keep discovery order.
    rows.sort_by(|a, b| {
        b.total_possible
            .partial_cmp(&a.total_possible)
            .unwrap_or(Ordering::Equal)
            .then(
                b.current_points
                    .partial_cmp(&a.current_points)
                    .unwrap_or(Ordering::Equal),
            )
    });

    let entry = entry_idx.map(|idx| {
        let participant = &parsed.participants[idx];
        let baseline = scoring::baseline_pick_count(&others_of(&parsed.participants, idx));
        EntryDiagnostics {
            name: participant.name.clone(),
            pick_count: participant.picks.len(),
            baseline_pick_count: baseline,
            extra_picks: participant.picks.len().saturating_sub(baseline),
            remaining_teams: remaining,
            picks: participant.picks.clone(),
        }
    });

    AnalysisReport {
        rows,
        context,
        entry,
    }
}

fn detect_max_confidence(participants: &[Participant]) -> u32 {
    participants
        .iter()
        .flat_map(|p| p.picks.iter())
        .map(|pick| pick.confidence)
        .max()
        .unwrap_or(0)
}

fn others_of(participants: &[Participant], idx: usize) -> Vec<&Participant> {
    participants
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != idx)
        .map(|(_, p)| p)
        .collect()
}
