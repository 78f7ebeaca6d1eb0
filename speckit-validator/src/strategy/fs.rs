//! Filesystem validation source.
//!
//! Classifies paths by base name and reads recognized files for the rule
//! sets. When a size limit is set, reads are bounded with `Read::take` so an
//! oversized input is detected without loading it whole. Decoding is
//! tolerant: bytes that are not valid UTF-8 are dropped instead of failing
//! the file.

use std::io::Read;
use std::path::Path;

use crate::error::ScanError;
use crate::strategy::DocumentKind;

/// Determine the rule set for a path from its lower-cased base name.
///
/// Returns `None` for anything other than `spec.md`, `plan.md` or `tasks.md`.
#[must_use]
pub fn document_kind_for(path: &Path) -> Option<DocumentKind> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    match name.as_str() {
        "spec.md" => Some(DocumentKind::Spec),
        "plan.md" => Some(DocumentKind::Plan),
        "tasks.md" => Some(DocumentKind::Tasks),
        _ => None,
    }
}

/// Decode bytes as UTF-8, silently dropping invalid sequences.
#[must_use]
pub fn decode_tolerant(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Read a file whole, or with a bounded streaming read when `max_file_size`
/// is set.
///
/// A bounded read takes at most `max_file_size + 1` bytes so an oversized
/// file is detected by the same read that loads it.
///
/// # Errors
///
/// Returns `ScanError::Io` if the file cannot be opened or read, and
/// `ScanError::FileTooLarge` if it exceeds `max_file_size`.
pub fn read_file_tolerant(path: &Path, max_file_size: Option<u64>) -> Result<String, ScanError> {
    let io_error = |source| ScanError::Io {
        path: path.to_owned(),
        source,
    };
    let mut file = std::fs::File::open(path).map_err(io_error)?;

    let mut buffer = Vec::new();
    let Some(limit) = max_file_size else {
        file.read_to_end(&mut buffer).map_err(io_error)?;
        return Ok(decode_tolerant(&buffer));
    };

    file.take(limit.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(io_error)?;

    if buffer.len() as u64 > limit {
        return Err(ScanError::FileTooLarge {
            path: path.to_owned(),
            limit,
        });
    }

    Ok(decode_tolerant(&buffer))
}
