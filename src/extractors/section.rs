// src/extractors/section.rs

// --- Imports ---
use crate::extractors::labels::{SECTION_END_MARKERS, SECTION_START_MARKERS};

// --- Data Structures ---

/// View of the announcement section inside the page text.
/// `text` borrows the original input, casing preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub text: &'a str,
    pub start: usize, // Byte offset of the start marker, 0 on fallback
    pub end: usize,   // Byte offset of the end marker, or input length
    pub start_marker: Option<&'static str>,
    pub end_marker: Option<&'static str>,
}

impl Section<'_> {
    /// True when no start marker was found and the whole text is used.
    pub fn is_fallback(&self) -> bool {
        self.start_marker.is_none()
    }
}

/// Uppercased copy of a string that remembers, for each of its bytes, the
/// byte offset of the original char it came from. Uppercasing may change
/// byte lengths, so offsets found in the copy must be mapped back.
struct FoldedText {
    upper: String,
    origin: Vec<usize>,
}

impl FoldedText {
    fn new(text: &str) -> Self {
        let mut upper = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (offset, ch) in text.char_indices() {
            for up in ch.to_uppercase() {
                upper.push(up);
                origin.extend(std::iter::repeat(offset).take(up.len_utf8()));
            }
        }
        Self { upper, origin }
    }

    /// Finds the first marker (priority order) present at or after `from`
    /// in the folded copy. Returns the folded index and the marker.
    fn find_first_of(&self, markers: &[&'static str], from: usize) -> Option<(usize, &'static str)> {
        let haystack = self.upper.get(from..)?;
        markers
            .iter()
            .find_map(|marker| haystack.find(*marker).map(|idx| (from + idx, *marker)))
    }

    fn original_offset(&self, folded_idx: usize) -> usize {
        self.origin[folded_idx]
    }

    /// Folded index of the first char that comes from an original offset > `offset`.
    fn folded_after(&self, offset: usize) -> usize {
        self.origin.partition_point(|&o| o <= offset)
    }
}

// --- Section Isolation ---

/// Locates the announcement section. Falls back to the whole text when no
/// start heading is present; runs to the end when no end heading follows.
pub fn isolate(text: &str) -> Section<'_> {
    let folded = FoldedText::new(text);

    let Some((folded_start, start_marker)) = folded.find_first_of(SECTION_START_MARKERS, 0) else {
        tracing::debug!("No announcement heading found, using whole text ({} bytes)", text.len());
        return Section {
            text,
            start: 0,
            end: text.len(),
            start_marker: None,
            end_marker: None,
        };
    };
    let start = folded.original_offset(folded_start);
    tracing::debug!("Announcement heading '{}' at byte {}", start_marker, start);

    let search_from = folded.folded_after(start);
    let (end, end_marker) = match folded.find_first_of(SECTION_END_MARKERS, search_from) {
        Some((folded_end, marker)) => {
            let end = folded.original_offset(folded_end);
            tracing::debug!("Section end heading '{}' at byte {}", marker, end);
            (end, Some(marker))
        }
        None => {
            tracing::debug!("No section end heading after byte {}, running to end of text", start);
            (text.len(), None)
        }
    };

    Section {
        text: &text[start..end],
        start,
        end,
        start_marker: Some(start_marker),
        end_marker,
    }
}

// --- Line Normalization ---

/// Trimmed, non-empty lines of `section` in their original order.
pub fn normalize(section: &str) -> Vec<&str> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
