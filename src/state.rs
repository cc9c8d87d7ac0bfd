use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::scoring::Strategy;

/// Placeholder a participant leaves when a confidence slot was never assigned
/// to a team. It still consumes that slot.
pub const NO_PICK: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pick {
    pub team: String,
    pub confidence: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participant {
    pub rank: Option<u32>,
    pub name: String,
    pub current_points: f64,
    /// Insertion order = order encountered in the paste. Length may differ
    /// between participants; duplicate confidence values are preserved as-is.
    pub picks: Vec<Pick>,
}

impl Participant {
    /// Distinct confidence values this entry has assigned, sorted ascending.
    /// Sentinel picks count: a skipped pick still consumes its slot.
    pub fn used_confidences(&self) -> Vec<u32> {
        let mut used: Vec<u32> = self.picks.iter().map(|pick| pick.confidence).collect();
        used.sort_unstable();
        used.dedup();
        used
    }

    pub fn missing_confidences(&self, max_confidence: u32) -> Vec<u32> {
        let used: HashSet<u32> = self.picks.iter().map(|pick| pick.confidence).collect();
        (1..=max_confidence).filter(|c| !used.contains(c)).collect()
    }
}

/// One game whose outcome has not been determined at paste time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UndecidedGame {
    pub teams: [String; 2],
}

impl UndecidedGame {
    pub fn new(a: String, b: String) -> Self {
        Self { teams: [a, b] }
    }

    /// Order-independent dedup key: (KC, JAX) and (JAX, KC) are the same game.
    pub fn key(&self) -> (String, String) {
        let [a, b] = &self.teams;
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.teams[0], self.teams[1])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekContext {
    /// Upper bound of the confidence scale: highest value observed anywhere,
    /// or the caller's override.
    pub max_confidence: u32,
    pub undecided_teams: BTreeSet<String>,
    pub undecided_games: Vec<UndecidedGame>,
    /// Raw header/code lines that produced undecided pairs. Diagnostics only.
    pub headers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Discovery order, not yet the ranked output order.
    pub participants: Vec<Participant>,
    pub context: WeekContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub name: String,
    pub rank: Option<u32>,
    pub current_points: f64,
    pub points_remaining: u32,
    pub total_possible: f64,
    pub strategy: Strategy,
    pub used_confidences: Vec<u32>,
    pub missing_confidences: Vec<u32>,
}

/// Extra detail for the designated entry's debug view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDiagnostics {
    pub name: String,
    pub pick_count: usize,
    pub baseline_pick_count: usize,
    pub extra_picks: usize,
    /// The remaining-team set actually applied (detected plus manual override).
    pub remaining_teams: BTreeSet<String>,
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Final ranking order: total possible desc, then current points desc.
    pub rows: Vec<StandingsRow>,
    pub context: WeekContext,
    pub entry: Option<EntryDiagnostics>,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// 0 means auto-detect from the picks.
    pub max_confidence_override: u32,
    /// Empty means "use the detected set"; otherwise unioned with it.
    /// Applies only to the designated entry.
    pub manual_remaining: BTreeSet<String>,
    /// Participant name that gets game-aware scoring. None = everyone uses
    /// the missing-numbers strategy.
    pub entry_name: Option<String>,
}
