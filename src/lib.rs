pub mod error;
pub mod stripper;

pub use error::StripError;
pub use stripper::{BlockRule, ScanState, StripOutcome, strip_lines};

use std::path::Path;

/// File patched by the `passfix` binary, relative to the backend root.
pub const TARGET_PATH: &str = "src/modules/assessments/services/assessment.service.ts";

/// Line printed to stdout after a successful run.
pub const CONFIRMATION: &str = "✅ Backend corrigido - passing_score removido";

/// Strip every `passing_score` block from `text`.
pub fn strip_text(text: &str) -> StripOutcome {
    strip_lines(text, &BlockRule::PASSING_SCORE)
}

/// Strip every `passing_score` block from the file at `path`, in place.
///
/// The file is read and decoded as UTF-8 before anything is written, so read
/// and decode failures leave it untouched. The result is written back with a
/// single write even when nothing matched. There is no backup or atomic
/// replace: a failure mid-write can leave the file truncated.
pub fn strip_file(path: impl AsRef<Path>) -> Result<StripOutcome, StripError> {
    let path = path.as_ref();

    let data = std::fs::read(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(data).map_err(|source| StripError::Utf8 {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = strip_text(&text);
    log::info!(
        "{}: removed {} block(s), {} line(s)",
        path.display(),
        outcome.blocks_removed,
        outcome.lines_removed
    );

    std::fs::write(path, &outcome.text).map_err(|source| StripError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(outcome)
}
