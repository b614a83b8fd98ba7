mod check;
mod init;
mod render;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve a user-supplied path against the working directory.
pub(crate) fn resolve_input(path: &str, cwd: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        PathBuf::from(cwd).join(path)
    }
}

/// All .json documents under `dir`.
pub(crate) fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
