//! Output path selection that never overwrites an existing file.

use std::path::{Path, PathBuf};

/// Return `requested` if nothing exists there, otherwise the first free
/// `<stem>_<n>.<ext>` sibling with `n` counting up from 1.
///
/// ```text
/// results.jsonl -> results_1.jsonl -> results_2.jsonl ...
/// ```
pub fn safe_output_path(requested: &Path) -> PathBuf {
    if !requested.exists() {
        return requested.to_path_buf();
    }

    let parent = requested.parent().unwrap_or_else(|| Path::new(""));
    let stem = requested
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = requested
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|n| {
            let name = match &extension {
                Some(ext) => format!("{stem}_{n}.{ext}"),
                None => format!("{stem}_{n}"),
            };
            parent.join(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| requested.to_path_buf())
}
