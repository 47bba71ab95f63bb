// src/extractors/entries.rs

// --- Imports ---
use std::fmt;
use std::str::FromStr;

use crate::extractors::labels::Label;
use crate::extractors::models::OutageEntry;

// --- Look-ahead Policy ---

/// How far a block's look-ahead may run while searching for its time
/// window and reason lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookaheadPolicy {
    /// Stop before the next schedule-code line; that line opens the next block.
    #[default]
    StopAtNextCode,
    /// Keep looking until both fields are found or the lines run out,
    /// skipping over any schedule-code lines on the way.
    Unbounded,
}

impl FromStr for LookaheadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stop-at-next-code" | "bounded" => Ok(Self::StopAtNextCode),
            "unbounded" => Ok(Self::Unbounded),
            other => Err(format!(
                "unknown look-ahead policy '{}' (expected 'stop-at-next-code' or 'unbounded')",
                other
            )),
        }
    }
}

impl fmt::Display for LookaheadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopAtNextCode => write!(f, "stop-at-next-code"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

// --- Scanner State ---

/// A block whose code is known and whose other fields are still being filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    pub code: String,
    pub time_window: Option<String>,
    pub reason: Option<String>,
}

impl PendingEntry {
    pub fn new(code: String) -> Self {
        Self { code, time_window: None, reason: None }
    }

    pub fn is_complete(&self) -> bool {
        self.time_window.is_some() && self.reason.is_some()
    }

    /// Offers one line to the block. Both labels are tested; a field that is
    /// already set keeps its first value.
    pub fn absorb(&mut self, line: &str) {
        if self.time_window.is_none() {
            self.time_window = Label::TimeWindow.value_of(line);
        }
        if self.reason.is_none() {
            self.reason = Label::Reason.value_of(line);
        }
    }

    pub fn finish(self) -> OutageEntry {
        OutageEntry {
            code: self.code,
            time_window: self.time_window.unwrap_or_default(),
            reason: self.reason.unwrap_or_default(),
        }
    }
}

/// SEEK looks for the next code line; FILL gathers that block's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    Seek { cursor: usize },
    Fill { pending: PendingEntry, cursor: usize },
    Done,
}

impl ScanState {
    pub fn start() -> Self {
        ScanState::Seek { cursor: 0 }
    }

    /// One transition. Returns the next state and the entry completed by
    /// this transition, if any. The cursor never moves backwards.
    pub fn advance(self, lines: &[&str], policy: LookaheadPolicy) -> (ScanState, Option<OutageEntry>) {
        match self {
            ScanState::Seek { cursor } => {
                let found = lines
                    .get(cursor..)
                    .unwrap_or_default()
                    .iter()
                    .enumerate()
                    .find_map(|(offset, line)| {
                        Label::ScheduleCode.value_of(line).map(|code| (cursor + offset, code))
                    });
                match found {
                    Some((at, code)) => {
                        tracing::trace!("Schedule block '{}' opens at line {}", code, at);
                        (ScanState::Fill { pending: PendingEntry::new(code), cursor: at + 1 }, None)
                    }
                    None => (ScanState::Done, None),
                }
            }
            ScanState::Fill { mut pending, cursor } => match lines.get(cursor) {
                Some(line) if !pending.is_complete() && !closes_block(line, policy) => {
                    pending.absorb(line);
                    (ScanState::Fill { pending, cursor: cursor + 1 }, None)
                }
                _ => {
                    let entry = pending.finish();
                    tracing::trace!("Schedule block '{}' closes before line {}", entry.code, cursor);
                    (ScanState::Seek { cursor }, Some(entry))
                }
            },
            ScanState::Done => (ScanState::Done, None),
        }
    }
}

/// Whether `line` ends the look-ahead of the block before it.
fn closes_block(line: &str, policy: LookaheadPolicy) -> bool {
    policy == LookaheadPolicy::StopAtNextCode && Label::ScheduleCode.matches(line)
}

// --- Entry Scanner ---

/// Collects every schedule block in `lines`, in source order.
pub fn scan_entries(lines: &[&str], policy: LookaheadPolicy) -> Vec<OutageEntry> {
    let mut entries = Vec::new();
    let mut state = ScanState::start();

    while state != ScanState::Done {
        let (next, emitted) = state.advance(lines, policy);
        if let Some(entry) = emitted {
            entries.push(entry);
        }
        state = next;
    }

    tracing::debug!("Found {} schedule block(s) with {} look-ahead", entries.len(), policy);
    entries
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, time_window: &str, reason: &str) -> OutageEntry {
        OutageEntry {
            code: code.to_string(),
            time_window: time_window.to_string(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_single_block() {
        let lines = [
            "MÃ LỊCH: ABC123",
            "THỜI GIAN: 08:00-10:00",
            "LÝ DO NGỪNG CUNG CẤP ĐIỆN: Maintenance",
        ];
        let entries = scan_entries(&lines, LookaheadPolicy::default());
        assert_eq!(entries, vec![entry("ABC123", "08:00-10:00", "Maintenance")]);
    }

    #[test]
    fn test_fields_in_either_order() {
        let lines = [
            "MA LICH: 1",
            "LY DO NGUNG CUNG CAP DIEN: r1",
            "noise",
            "THOI GIAN: t1",
            "MA LICH: 2",
            "THOI GIAN: t2",
            "LY DO NGUNG CUNG CAP DIEN: r2",
        ];
        let entries = scan_entries(&lines, LookaheadPolicy::default());
        assert_eq!(entries, vec![entry("1", "t1", "r1"), entry("2", "t2", "r2")]);
    }

    #[test]
    fn test_missing_time_window_does_not_steal_next_block() {
        let lines = [
            "MÃ LỊCH: A",
            "LÝ DO NGỪNG CUNG CẤP ĐIỆN: r1",
            "MÃ LỊCH: B",
            "THỜI GIAN: t2",
            "LÝ DO NGỪNG CUNG CẤP ĐIỆN: r2",
        ];
        let entries = scan_entries(&lines, LookaheadPolicy::StopAtNextCode);
        assert_eq!(entries, vec![entry("A", "", "r1"), entry("B", "t2", "r2")]);
    }

    #[test]
    fn test_unbounded_lookahead_swallows_next_code() {
        let lines = [
            "MÃ LỊCH: A",
            "LÝ DO NGỪNG CUNG CẤP ĐIỆN: r1",
            "MÃ LỊCH: B",
            "THỜI GIAN: t2",
            "LÝ DO NGỪNG CUNG CẤP ĐIỆN: r2",
        ];
        let entries = scan_entries(&lines, LookaheadPolicy::Unbounded);
        assert_eq!(entries, vec![entry("A", "t2", "r1")]);
    }

    #[test]
    fn test_block_at_end_of_input() {
        let entries = scan_entries(&["MÃ LỊCH: LAST", "THỜI GIAN: 13:00"], LookaheadPolicy::default());
        assert_eq!(entries, vec![entry("LAST", "13:00", "")]);
    }

    #[test]
    fn test_no_blocks() {
        assert!(scan_entries(&[], LookaheadPolicy::default()).is_empty());
        assert!(scan_entries(&["KHÁCH HÀNG: A", "THỜI GIAN: x"], LookaheadPolicy::default()).is_empty());
    }

    #[test]
    fn test_fill_stops_once_complete() {
        let lines = ["MÃ LỊCH: A", "THỜI GIAN: t", "LÝ DO NGỪNG CUNG CẤP ĐIỆN: r", "THỜI GIAN: later"];
        let mut state = ScanState::start();
        state = state.advance(&lines, LookaheadPolicy::Unbounded).0;
        state = state.advance(&lines, LookaheadPolicy::Unbounded).0;
        state = state.advance(&lines, LookaheadPolicy::Unbounded).0;
        let (next, emitted) = state.advance(&lines, LookaheadPolicy::Unbounded);
        assert_eq!(next, ScanState::Seek { cursor: 3 });
        assert_eq!(emitted, Some(entry("A", "t", "r")));
    }

    #[test]
    fn test_first_field_value_wins_within_block() {
        let mut pending = PendingEntry::new("A".to_string());
        pending.absorb("THỜI GIAN: first");
        pending.absorb("THỜI GIAN: second");
        assert_eq!(pending.time_window.as_deref(), Some("first"));
        assert!(!pending.is_complete());
        assert_eq!(pending.finish(), entry("A", "first", ""));
    }

    #[test]
    fn test_done_is_terminal() {
        let (state, emitted) = ScanState::Done.advance(&["MÃ LỊCH: A"], LookaheadPolicy::default());
        assert_eq!(state, ScanState::Done);
        assert!(emitted.is_none());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("unbounded".parse::<LookaheadPolicy>(), Ok(LookaheadPolicy::Unbounded));
        assert_eq!("Stop-At-Next-Code".parse::<LookaheadPolicy>(), Ok(LookaheadPolicy::StopAtNextCode));
        assert!("sometimes".parse::<LookaheadPolicy>().is_err());
        assert_eq!(LookaheadPolicy::Unbounded.to_string(), "unbounded");
    }
}
