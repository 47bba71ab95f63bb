// src/report.rs
// Console rendering of an extraction result for a person reading the terminal.
use std::fmt::Write;

use crate::extractors::ExtractionResult;

pub const NO_OUTAGES_LINE: &str = "Không có lịch cúp điện.";

/// One header line per field, then one line per schedule entry.
pub fn render_report(result: &ExtractionResult) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "KHÁCH HÀNG: {}", result.customer.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "ĐỊA CHỈ: {}", result.address.as_deref().unwrap_or("-"));

    if result.entries.is_empty() {
        let _ = writeln!(out, "{}", NO_OUTAGES_LINE);
    }
    for entry in &result.entries {
        let _ = writeln!(
            out,
            "- Mã lịch: {} — {} — Lý do: {}",
            entry.code, entry.time_window, entry.reason
        );
    }
    out
}
