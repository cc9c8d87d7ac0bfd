use crate::lines;
use crate::state::{NO_PICK, Participant, Pick};
use crate::teams::normalize_team;

/// Reconstruct one participant per rank marker, starting at `start` (the
/// boundary found by the scoreboard scan). Block shape: rank, display name,
/// points line, then picks until the next rank marker or end of input. There
/// is no explicit terminator and malformed blocks become partial participants
/// rather than errors.
pub fn parse(seq: &[String], start: usize) -> Vec<Participant> {
    let n = seq.len();
    let mut out: Vec<Participant> = Vec::new();
    let mut i = start;

    while i < n {
        let Some(rank) = lines::rank_marker(&seq[i]) else {
            i += 1;
            continue;
        };
        i += 1;
        if i >= n {
            break;
        }

        // Next line is the display name, unvalidated.
        let name = seq[i].clone();
        i += 1;
        if i >= n {
            break;
        }

        let current_points = lines::points_line(&seq[i]);
        i += 1;

        let mut picks: Vec<Pick> = Vec::new();
        while i < n && lines::rank_marker(&seq[i]).is_none() {
            let line = &seq[i];

            if let Some((team, confidence)) = lines::inline_pick(line) {
                picks.push(Pick {
                    team: normalize_team(team),
                    confidence,
                });
                i += 1;
                continue;
            }

            // Two-line form: team (or sentinel) on one line, "(N)" on the next.
            if (lines::is_team_token(line) || line == NO_PICK)
                && i + 1 < n
                && let Some(confidence) = lines::confidence_token(&seq[i + 1])
            {
                picks.push(Pick {
                    team: normalize_team(line),
                    confidence,
                });
                i += 2;
                continue;
            }

            // Stray labels, unmatched separators, matchup codes: skipped.
            i += 1;
        }

        out.push(Participant {
            rank: Some(rank),
            name,
            current_points,
            picks,
        });
    }

    out
}
