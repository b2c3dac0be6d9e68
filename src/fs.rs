//! Filesystem queries and path handling
//!
//! This module provides the filesystem surface used by dataset loaders
//! and result writers: existence/kind queries, directory creation with
//! optional uniquification, home-directory expansion, and filename
//! pattern globbing. Query failures degrade to a warned default instead
//! of propagating, so callers can probe paths without error plumbing.

use std::fs;
use std::path::{Path, PathBuf};

/// True if `path` exists (any kind of entry).
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).is_ok()
}

/// True if `path` exists and is a regular file.
pub fn is_regular<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// True if `path` exists and is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Creates a directory, optionally uniquified with a numeric suffix.
///
/// With `try_unique == false` a single creation attempt is made and the
/// given path is returned on success. With `try_unique == true` the
/// candidates `"{path}-00000"`, `"{path}-00001"`, ... are attempted up
/// to `max_tries` times, and the first successfully created name wins.
/// Returns `None` when nothing could be created.
pub fn mkdir<P: AsRef<Path>>(path: P, try_unique: bool, max_tries: u32) -> Option<PathBuf> {
    let path = path.as_ref();

    if !try_unique {
        return match fs::create_dir(path) {
            Ok(()) => Some(path.to_path_buf()),
            Err(e) => {
                log::warn!("could not create directory {}: {e}", path.display());
                None
            }
        };
    }

    for n in 0..max_tries {
        let candidate = PathBuf::from(format!("{}-{n:05}", path.display()));
        if fs::create_dir(&candidate).is_ok() {
            return Some(candidate);
        }
    }

    log::warn!(
        "could not create a unique directory from {} after {max_tries} tries",
        path.display()
    );
    None
}

/// Replaces a leading `~` with the home directory.
///
/// If the home directory cannot be determined, warns and returns the
/// path unmodified. Only the bare-tilde prefix is handled; `~user`
/// forms are not supported.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => {
                log::warn!("could not determine the home directory; leaving '{path}' unexpanded");
                PathBuf::from(path)
            }
        },
        None => PathBuf::from(path),
    }
}

/// File-name extension of `path`, without the leading dot.
pub fn extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
}

/// Expands a filename pattern (e.g. `data/*.png`) into matching paths.
///
/// An invalid pattern warns and yields an empty vector; unreadable
/// matches are skipped with a warning.
pub fn glob_paths(pattern: &str) -> Vec<PathBuf> {
    match glob::glob(pattern) {
        Ok(entries) => entries
            .filter_map(|entry| match entry {
                Ok(p) => Some(p),
                Err(e) => {
                    log::warn!("skipping unreadable glob match: {e}");
                    None
                }
            })
            .collect(),
        Err(e) => {
            log::warn!("invalid glob pattern '{pattern}': {e}");
            Vec::new()
        }
    }
}
