// src/completion/mod.rs
// Tab completion engine - completes command names and file paths

use crate::env::Environment;
use crate::executor::builtin::Builtin;
use crate::executor::path;
use std::path::{Path, PathBuf};

/// Given a partial word, return a list of completions
pub fn complete(partial: &str, is_first_word: bool, env: &dyn Environment) -> Vec<String> {
    if partial.is_empty() {
        return vec![];
    }

    if is_first_word && !partial.contains('/') {
        complete_commands(partial, env)
    } else {
        complete_path(partial)
    }
}

/// Builtins plus executables on the current search path
pub fn complete_commands(partial: &str, env: &dyn Environment) -> Vec<String> {
    let mut commands: Vec<String> = Builtin::ALL
        .iter()
        .map(|b| b.name())
        .filter(|name| name.starts_with(partial))
        .map(String::from)
        .collect();

    for dir in path::search_path(env) {
        let Ok(entries) = std::fs::read_dir(&dir) else { continue };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with(partial) && path::is_executable(&entry.path()) {
                commands.push(name);
            }
        }
    }

    commands.sort();
    commands.dedup();
    commands
}

/// Complete file and directory names
pub fn complete_path(partial: &str) -> Vec<String> {
    // Split into directory part and file prefix
    let (dir, prefix) = match partial.rfind('/') {
        Some(slash) => {
            let dir = if slash == 0 { "/" } else { &partial[..slash] };
            (PathBuf::from(dir), &partial[slash + 1..])
        }
        None => (PathBuf::from("."), partial),
    };

    let Ok(read_dir) = std::fs::read_dir(&dir) else {
        return vec![];
    };

    let mut matches: Vec<String> = read_dir
        .flatten()
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.starts_with(prefix) {
                return None;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let trail = if is_dir { "/" } else { "" };
            Some(if partial.contains('/') {
                format!("{}{}", join_dir(&dir, &name), trail)
            } else {
                format!("{name}{trail}")
            })
        })
        .collect();

    matches.sort();
    matches
}

fn join_dir(dir: &Path, name: &str) -> String {
    let base = dir.display().to_string();
    let sep = if base.ends_with('/') { "" } else { "/" };
    format!("{base}{sep}{name}")
}
