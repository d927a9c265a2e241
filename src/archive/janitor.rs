use std::path::Path;

use tracing::{debug, warn};

use crate::utils::constants::{ARCHIVE_EXTENSION, ARCHIVE_PREFIX};

/// What a cleanup pass removed, and how many removals failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupStats {
    pub archives_removed: usize,
    pub directories_removed: usize,
    pub failures: usize,
}

/// Removes transient archives (`station_<id>.zip`) and extraction
/// directories (`station_<id>/`) after the dataset has been assembled.
/// Best-effort: failures are logged and counted, never propagated, and
/// anything else in the directory is left untouched.
pub struct WorkspaceJanitor;

impl WorkspaceJanitor {
    pub fn new() -> Self {
        Self
    }

    pub fn cleanup(&self, work_dir: &Path) -> CleanupStats {
        let mut stats = CleanupStats::default();

        let entries = match std::fs::read_dir(work_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return stats,
            Err(e) => {
                warn!(dir = %work_dir.display(), error = %e, "failed to read work directory");
                stats.failures += 1;
                return stats;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            if path.is_file() && is_station_archive(&name) {
                match std::fs::remove_file(&path) {
                    Ok(()) => {
                        debug!(path = %path.display(), "removed archive");
                        stats.archives_removed += 1;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to remove archive");
                        stats.failures += 1;
                    }
                }
            } else if path.is_dir() && is_station_directory(&name) {
                match std::fs::remove_dir_all(&path) {
                    Ok(()) => {
                        debug!(path = %path.display(), "removed extraction directory");
                        stats.directories_removed += 1;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "failed to remove directory");
                        stats.failures += 1;
                    }
                }
            }
        }

        stats
    }
}

impl Default for WorkspaceJanitor {
    fn default() -> Self {
        Self::new()
    }
}

fn is_station_archive(name: &str) -> bool {
    name.strip_prefix(ARCHIVE_PREFIX)
        .and_then(|rest| rest.strip_suffix(&format!(".{}", ARCHIVE_EXTENSION)))
        .is_some_and(is_station_number)
}

fn is_station_directory(name: &str) -> bool {
    name.strip_prefix(ARCHIVE_PREFIX)
        .is_some_and(is_station_number)
}

fn is_station_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
