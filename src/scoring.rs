use std::collections::{BTreeSet, HashMap, HashSet};

use serde::Serialize;

use crate::state::{NO_PICK, Participant};
use crate::teams::normalize_team;

/// How a participant's best-case remaining points were computed. The
/// designated entry tries `UndecidedTeams` first and falls back to
/// `CountDiff` on zero; everyone else gets `MissingNumbers`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strategy {
    MissingNumbers,
    UndecidedTeams,
    CountDiff,
}

/// Strategy A: sum of every confidence value in 1..=max that the entry has
/// not used. Sentinel picks consume their value and yield no ceiling.
pub fn missing_numbers(participant: &Participant, max_confidence: u32) -> u32 {
    let used: HashSet<u32> = participant
        .picks
        .iter()
        .map(|pick| pick.confidence)
        .collect();
    (1..=max_confidence).filter(|c| !used.contains(c)).sum()
}

/// Strategy B: sum of confidences whose team is still undecided. Sentinel
/// picks never contribute.
pub fn undecided_teams(participant: &Participant, remaining: &BTreeSet<String>) -> u32 {
    participant
        .picks
        .iter()
        .filter(|pick| pick.team != NO_PICK && remaining.contains(&normalize_team(&pick.team)))
        .map(|pick| pick.confidence)
        .sum()
}

/// Most frequent pick count among the other entries (ignoring empty pick
/// lists). On a tie or no mode, the middle of the sorted counts; zero when no
/// other entry has picks.
pub fn baseline_pick_count(others: &[&Participant]) -> usize {
    let mut counts: Vec<usize> = others
        .iter()
        .filter(|p| !p.picks.is_empty())
        .map(|p| p.picks.len())
        .collect();
    if counts.is_empty() {
        return 0;
    }

    let mut freq: HashMap<usize, usize> = HashMap::new();
    for &count in &counts {
        *freq.entry(count).or_insert(0) += 1;
    }
    let best = freq.values().copied().max().unwrap_or(0);
    let modes: Vec<usize> = freq
        .iter()
        .filter(|&(_, &f)| f == best)
        .map(|(&count, _)| count)
        .collect();
    if modes.len() == 1 {
        return modes[0];
    }
    counts.sort_unstable();
    counts[counts.len() / 2]
}

/// Strategy C: an entry listing more picks than the group norm likely has
/// trailing games the others' pastes don't show yet. Sum the confidences of
/// those trailing picks, excluding sentinels.
pub fn count_diff(entry: &Participant, others: &[&Participant]) -> u32 {
    let base = baseline_pick_count(others);
    if base == 0 {
        return 0;
    }
    let diff = entry.picks.len().saturating_sub(base);
    if diff == 0 {
        return 0;
    }
    entry.picks[entry.picks.len() - diff..]
        .iter()
        .filter(|pick| pick.team != NO_PICK)
        .map(|pick| pick.confidence)
        .sum()
}

/// Fallback chain for the designated entry: undecided-teams first, then
/// count-difference when that finds nothing. Zero from Strategy B is
/// indistinguishable from "B found nothing" by design; real confidence
/// values are never zero.
pub fn entry_points_remaining(
    entry: &Participant,
    remaining: &BTreeSet<String>,
    others: &[&Participant],
) -> (u32, Strategy) {
    let by_teams = undecided_teams(entry, remaining);
    if by_teams > 0 {
        return (by_teams, Strategy::UndecidedTeams);
    }
    (count_diff(entry, others), Strategy::CountDiff)
}
