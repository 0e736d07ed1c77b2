// src/executor/path.rs
// PATH splitting and executable lookup

use crate::env::Environment;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Current search path, in PATH order.
///
/// Segments are split on `:` and kept as given, empty ones included. A
/// missing PATH gives an empty search path.
pub fn search_path(env: &dyn Environment) -> Vec<PathBuf> {
    env.var("PATH")
        .map(|value| value.split(':').map(PathBuf::from).collect())
        .unwrap_or_default()
}

/// First `dir/name` in `search_path` that is an executable non-directory.
pub fn resolve(name: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
    for dir in search_path {
        let candidate = dir.join(name);
        if is_executable(&candidate) {
            trace!(command = name, path = %candidate.display(), "resolved");
            return Some(candidate);
        }
    }
    trace!(command = name, dirs = search_path.len(), "not on search path");
    None
}

/// Exists, is not a directory, and the current user may execute it.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    if path.is_dir() {
        return false;
    }
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
