//! Path utilities: expand ~, append a missing extension.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `timesheet` + `xlsx` → `timesheet.xlsx`; an existing matching extension
/// (any case) is kept as is.
pub fn with_extension(path: &str, ext: &str) -> PathBuf {
    let p = expand_tilde(path);
    let has_ext = p
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext));

    if has_ext {
        p
    } else {
        PathBuf::from(format!("{}.{ext}", p.display()))
    }
}

/// `out/timesheet.xlsx` → `out/filtered_timesheet.xlsx`.
pub fn prefixed_file_name(path: &Path, prefix: &str) -> PathBuf {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => path.with_file_name(format!("{prefix}{name}")),
        None => path.to_path_buf(),
    }
}
