//! Writing finished libdefs to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// `<dir>/electron-<version>.js`
pub fn libdef_path(dir: &Path, version: &str) -> PathBuf {
    dir.join(format!("electron-{version}.js"))
}

/// Write a finished libdef, creating `dir` if needed.
pub fn write_libdef(dir: &Path, version: &str, contents: &str) -> Result<PathBuf, String> {
    fs::create_dir_all(dir)
        .map_err(|err| format!("Failed to create {}: {err}", dir.display()))?;
    let path = libdef_path(dir, version);
    fs::write(&path, contents)
        .map_err(|err| format!("Failed to write {}: {err}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote libdef.");
    Ok(path)
}
