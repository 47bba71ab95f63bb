// src/utils/text_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extractors::{isolate, normalize, Label};
use crate::utils::error::AppError;

/// Renders the isolated section line by line, each line tagged with the
/// label it carries (`[CODE]`, `[TIME]`, ...) or `[-]` when it carries none.
pub fn render_debug_dump(text: &str) -> String {
    let section = isolate(text);
    let mut out = String::new();

    out.push_str(&format!(
        "# section bytes {}..{} of {}\n# start marker: {}\n# end marker: {}\n",
        section.start,
        section.end,
        text.len(),
        section.start_marker.unwrap_or("(none, whole text)"),
        section.end_marker.unwrap_or("(none, runs to end)"),
    ));

    for (idx, line) in normalize(section.text).iter().enumerate() {
        let tag = Label::classify(line).map(Label::tag).unwrap_or("-");
        out.push_str(&format!("{:>4} [{}] {}\n", idx, tag, line));
    }
    out
}

/// Saves the annotated dump of `text` to `filename`.
pub fn save_debug_dump<P: AsRef<Path>>(text: &str, filename: P) -> Result<(), AppError> {
    let path = filename.as_ref();
    let mut file = File::create(path)?;
    file.write_all(render_debug_dump(text).as_bytes())?;

    tracing::info!("Saved debug dump to {}", path.display());
    Ok(())
}
