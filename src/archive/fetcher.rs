use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::{CollectorError, Result};
use crate::models::{ObservationDescriptor, StationId};
use crate::utils::constants::{ARCHIVE_EXTENSION, ARCHIVE_PREFIX, BOM_BASE_URL, CATALOG_PATH};

/// How a station's archive was obtained: from the local cache without any
/// network access, or downloaded fresh from the bureau.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Cached(PathBuf),
    Downloaded(PathBuf),
}

impl FetchOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FetchOutcome::Cached(path) | FetchOutcome::Downloaded(path) => path,
        }
    }

    pub fn was_cached(&self) -> bool {
        matches!(self, FetchOutcome::Cached(_))
    }
}

/// Resolves a station's download link on the bureau's catalog page and
/// retrieves the compressed archive to local storage.
pub struct ArchiveFetcher {
    client: Client,
    base_url: Url,
}

impl ArchiveFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("bom-collector/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CollectorError::Config(format!("failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(BOM_BASE_URL)?;

        Ok(Self { client, base_url })
    }

    /// Deterministic local path for a station's archive.
    pub fn archive_path(data_dir: &Path, station: StationId) -> PathBuf {
        data_dir.join(format!(
            "{}{}.{}",
            ARCHIVE_PREFIX, station, ARCHIVE_EXTENSION
        ))
    }

    /// Fetch one station's archive. With `skip_existing`, an archive already
    /// on disk is returned as a cache hit and no network access is made.
    pub async fn fetch(
        &self,
        station: StationId,
        descriptor: &ObservationDescriptor,
        data_dir: &Path,
        skip_existing: bool,
    ) -> Result<FetchOutcome> {
        let dest = Self::archive_path(data_dir, station);

        if skip_existing && dest.exists() {
            debug!(station = %station, path = %dest.display(), "archive cached, skipping fetch");
            return Ok(FetchOutcome::Cached(dest));
        }

        std::fs::create_dir_all(data_dir)?;

        let catalog_url = self.catalog_url(station, descriptor);
        debug!(station = %station, url = %catalog_url, "requesting catalog page");
        let page = self.get_text(&catalog_url, station).await?;

        let download_url = self.resolve_download_url(&page, station, descriptor)?;
        debug!(station = %station, url = %download_url, "downloading archive");
        let bytes = self.get_bytes(download_url.as_str(), station).await?;

        // Write via a temp file in the same directory so the deterministic
        // path never holds a partial archive.
        let mut temp = tempfile::NamedTempFile::new_in(data_dir)?;
        temp.write_all(&bytes)?;
        temp.persist(&dest).map_err(|e| CollectorError::Io(e.error))?;

        Ok(FetchOutcome::Downloaded(dest))
    }

    fn catalog_url(&self, station: StationId, descriptor: &ObservationDescriptor) -> String {
        format!(
            "{}{}?p_nccObsCode={}&p_display_type=dailyDataFile&p_startYear=&p_c=&p_stn_num={}",
            BOM_BASE_URL,
            CATALOG_PATH,
            descriptor.obs_code,
            station.padded()
        )
    }

    /// Find the single anchor whose `title` attribute matches the
    /// descriptor's marker text and resolve its href against the bureau host.
    pub fn resolve_download_url(
        &self,
        page: &str,
        station: StationId,
        descriptor: &ObservationDescriptor,
    ) -> Result<Url> {
        let selector = Selector::parse("a[title]").expect("Invalid CSS selector for anchors");

        let document = Html::parse_document(page);
        let hrefs: Vec<&str> = document
            .select(&selector)
            .filter(|element| element.value().attr("title") == Some(descriptor.link_marker))
            .filter_map(|element| element.value().attr("href"))
            .collect();

        if hrefs.len() != 1 {
            return Err(CollectorError::LinkResolution {
                station,
                marker: descriptor.link_marker.to_string(),
                matches: hrefs.len(),
            });
        }

        Ok(self.base_url.join(hrefs[0])?)
    }

    async fn get_text(&self, url: &str, station: StationId) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_error(station, &e))?;

        response.text().await.map_err(|e| fetch_error(station, &e))
    }

    async fn get_bytes(&self, url: &str, station: StationId) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| fetch_error(station, &e))?;

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| fetch_error(station, &e))
    }
}

fn fetch_error(station: StationId, error: &reqwest::Error) -> CollectorError {
    let message = if error.is_timeout() {
        format!("timed out: {}", error)
    } else {
        error.to_string()
    };
    CollectorError::Fetch { station, message }
}
