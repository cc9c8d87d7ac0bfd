//! Single-line pattern recognizers for the pasted standings text. The source
//! has no grammar, so each category is an independent predicate/extractor and
//! callers dispatch in priority order.

use once_cell::sync::Lazy;
use regex::Regex;

static RANK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(\d{1,2})(st|nd|rd|th)$").unwrap());
static TEAM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]{2,4}$").unwrap());
static INLINE_PICK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{2,4}|-)\s*\(\s*(\d{1,2})\s*\)$").unwrap());
static CONFIDENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(\s*(\d{1,2})\s*\)$").unwrap());
static TWO_INTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\s+(\d+)$").unwrap());
static FINAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bfinal\b").unwrap());
static LIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(q[1-4]|1st|2nd|3rd|4th|ot)\b|\b\d{1,2}:\d{2}\b").unwrap());
static PREGAME_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Mon|Tue|Tues|Wed|Thu|Thur|Fri|Sat|Sun|Today|Tonight)\s+\d{1,2}:\d{2}\s*[AP]M\b")
        .unwrap()
});
static MATCHUP_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,4}\s*-\s*[A-Za-z]{2,4}$").unwrap());
static NOISE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(tie|[–—-])$").unwrap());

/// Turn raw pasted text into trimmed, non-empty lines: control characters
/// dropped, non-breaking spaces flattened, blank lines removed.
pub fn clean_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| {
            line.chars()
                .map(|c| if c == '\u{a0}' { ' ' } else { c })
                .filter(|c| !c.is_control())
                .collect::<String>()
        })
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// "1st", "12th" and the like. Extracts the standing position.
pub fn rank_marker(line: &str) -> Option<u32> {
    let caps = RANK_RE.captures(line)?;
    caps[1].parse().ok()
}

/// 2-4 alphabetic characters. The sentinel `-` does not match.
pub fn is_team_token(line: &str) -> bool {
    TEAM_RE.is_match(line)
}

/// "LAR (14)" or "- (10)" on a single line. Checked before the two-line form.
pub fn inline_pick(line: &str) -> Option<(&str, u32)> {
    let caps = INLINE_PICK_RE.captures(line)?;
    let confidence = caps[2].parse().ok()?;
    Some((caps.get(1)?.as_str(), confidence))
}

/// A bare parenthesized confidence value, e.g. "(9)" or "( 12 )".
pub fn confidence_token(line: &str) -> Option<u32> {
    let caps = CONFIDENCE_RE.captures(line)?;
    caps[1].parse().ok()
}

/// Whole word "final"; overtime variants like "FINAL OT" match by substring.
pub fn is_final_marker(line: &str) -> bool {
    FINAL_RE.is_match(line)
}

/// Quarter/overtime abbreviation or a game-clock timestamp. Note a pre-game
/// header like "Sun 1:00 PM" also carries a clock and matches here; the
/// scanner's redundancy pass recovers those.
pub fn is_live_marker(line: &str) -> bool {
    LIVE_RE.is_match(line)
}

/// Weekday abbreviation or "Today"/"Tonight" followed by a clock time and an
/// AM/PM marker. A trailing time-zone abbreviation is tolerated.
pub fn is_pregame_header(line: &str) -> bool {
    PREGAME_TIME_RE.is_match(line)
}

/// Exactly two team tokens joined by a hyphen, e.g. "KC-JAX".
pub fn matchup_code(line: &str) -> Option<(&str, &str)> {
    if !MATCHUP_CODE_RE.is_match(line) {
        return None;
    }
    let (a, b) = line.split_once('-')?;
    Some((a.trim(), b.trim()))
}

/// "TIE" or a lone dash/en-dash/em-dash. Structurally meaningless on its own
/// but may confirm an adjacent matchup.
pub fn is_noise(line: &str) -> bool {
    NOISE_RE.is_match(line)
}

/// Current score from a participant's points line. Prefers the first of two
/// whitespace-separated integers; otherwise digits (and dots) are extracted
/// and parsed. A non-numeric line yields 0.0 rather than an error.
pub fn points_line(line: &str) -> f64 {
    if let Some(caps) = TWO_INTS_RE.captures(line)
        && let Ok(points) = caps[1].parse::<f64>()
    {
        return points;
    }
    let digits: String = line
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return 0.0;
    }
    digits.parse::<f64>().unwrap_or(0.0)
}
