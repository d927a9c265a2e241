use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::ZipArchive;

use crate::error::{CollectorError, Result};

/// Expands a fetched archive into a directory of the same base name.
/// Extraction is never cached: a stale directory from an earlier run is
/// replaced wholesale.
pub struct ArchiveExtractor;

impl ArchiveExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, archive: &Path) -> Result<PathBuf> {
        let dest = archive.with_extension("");
        if dest == archive {
            return Err(CollectorError::Extraction {
                path: archive.to_path_buf(),
                message: "archive has no extension to strip".to_string(),
            });
        }

        if dest.exists() {
            std::fs::remove_dir_all(&dest)?;
        }
        std::fs::create_dir_all(&dest)?;

        let file = File::open(archive)?;
        let mut zip = ZipArchive::new(file).map_err(|e| extraction_error(archive, &e))?;
        zip.extract(&dest).map_err(|e| extraction_error(archive, &e))?;

        debug!(archive = %archive.display(), entries = zip.len(), "archive extracted");

        Ok(dest)
    }
}

impl Default for ArchiveExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extraction_error(archive: &Path, error: &zip::result::ZipError) -> CollectorError {
    CollectorError::Extraction {
        path: archive.to_path_buf(),
        message: error.to_string(),
    }
}
