use std::collections::{BTreeSet, HashSet};

use crate::lines;
use crate::state::UndecidedGame;
use crate::teams::normalize_team;

/// How far past a pre-game header to look for its two team codes.
const TEAM_LOOKAHEAD_WINDOW: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct ScoreboardScan {
    /// Index of the first participant-block line (or the input length when no
    /// participant block was found).
    pub boundary: usize,
    pub games: Vec<UndecidedGame>,
    pub teams: BTreeSet<String>,
    /// Header/code lines that signalled an undecided game, in detection order.
    pub headers: Vec<String>,
}

/// Walk the line sequence from the start, accumulate undecided team pairs,
/// and stop where the participant-ranking block begins.
pub fn scan(seq: &[String]) -> ScoreboardScan {
    let n = seq.len();
    let mut games: Vec<UndecidedGame> = Vec::new();
    let mut headers: Vec<String> = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    let mut i = 0usize;
    while i < n && !is_participant_start(seq, i) {
        let line = &seq[i];

        // Decided game: skip its fixed-shape block when the shape holds.
        if lines::is_final_marker(line) || lines::is_live_marker(line) {
            if i + 2 < n && lines::is_team_token(&seq[i + 1]) && lines::is_team_token(&seq[i + 2]) {
                i += if i + 4 < n { 5 } else { 3 };
            } else {
                i += 1;
            }
            continue;
        }

        if lines::is_pregame_header(line) {
            if let Some((a, b)) = look_ahead_two_teams(seq, i, n) {
                push_pair(&mut games, &mut seen, &mut headers, a, b, line);
            }
            // The look-ahead does not consume lines; overlapping headers are
            // tolerated.
            i += 1;
            continue;
        }

        if let Some((a, b)) = lines::matchup_code(line) {
            push_pair(
                &mut games,
                &mut seen,
                &mut headers,
                normalize_team(a),
                normalize_team(b),
                line,
            );
            i += 1;
            continue;
        }

        // A tie/placeholder line sitting directly under two team codes marks
        // those teams as an undecided pair even without a time header.
        if lines::is_noise(line)
            && i >= 2
            && lines::is_team_token(&seq[i - 2])
            && lines::is_team_token(&seq[i - 1])
        {
            push_pair(
                &mut games,
                &mut seen,
                &mut headers,
                normalize_team(&seq[i - 2]),
                normalize_team(&seq[i - 1]),
                line,
            );
            i += 1;
            continue;
        }

        i += 1;
    }
    let boundary = i;

    // Redundancy pass: the priority ordering above routes "Sun 1:00 PM"-style
    // headers into the live branch (they carry a clock). If nothing was found,
    // re-scan the header region with the time-header rule alone, never looking
    // past the boundary.
    if games.is_empty() {
        for j in 0..boundary {
            if lines::is_pregame_header(&seq[j])
                && let Some((a, b)) = look_ahead_two_teams(seq, j, boundary)
            {
                push_pair(&mut games, &mut seen, &mut headers, a, b, &seq[j]);
            }
        }
    }

    let teams = games
        .iter()
        .flat_map(|game| game.teams.iter().cloned())
        .collect();

    ScoreboardScan {
        boundary,
        games,
        teams,
        headers,
    }
}

/// A rank marker starts the participant block only when the two lines after it
/// do not look like scoreboard content and the second one carries a digit (the
/// points line). A rank marker truncated by end of input is accepted; the
/// participant parser tolerates the partial block.
fn is_participant_start(seq: &[String], i: usize) -> bool {
    if lines::rank_marker(&seq[i]).is_none() {
        return false;
    }
    let (Some(name), Some(points)) = (seq.get(i + 1), seq.get(i + 2)) else {
        return true;
    };
    if looks_like_scoreboard(name) || looks_like_scoreboard(points) {
        return false;
    }
    points.chars().any(|c| c.is_ascii_digit())
}

fn looks_like_scoreboard(line: &str) -> bool {
    lines::is_team_token(line) || lines::is_pregame_header(line) || lines::matchup_code(line).is_some()
}

/// First two team tokens within the look-ahead window after `start`, skipping
/// noise/tie tokens, normalized. Never reads at or past `limit`.
fn look_ahead_two_teams(seq: &[String], start: usize, limit: usize) -> Option<(String, String)> {
    let end = limit.min(start + 1 + TEAM_LOOKAHEAD_WINDOW);
    let mut first: Option<String> = None;
    for token in &seq[(start + 1).min(end)..end] {
        if lines::is_noise(token) || !lines::is_team_token(token) {
            continue;
        }
        let team = normalize_team(token);
        match first.take() {
            None => first = Some(team),
            Some(a) => return Some((a, team)),
        }
    }
    None
}

fn push_pair(
    games: &mut Vec<UndecidedGame>,
    seen: &mut HashSet<(String, String)>,
    headers: &mut Vec<String>,
    a: String,
    b: String,
    header: &str,
) {
    headers.push(header.to_string());
    let game = UndecidedGame::new(a, b);
    if seen.insert(game.key()) {
        games.push(game);
    }
}
