use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};
use crate::images::ImageKind;

pub const DEFAULT_BASE_URL: &str =
    "https://cdn.jsdelivr.net/gh/dungdinhmanh/blue-archive-data@main";
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Where each image kind lives on the CDN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnManifest {
    pub base_url: String,
    pub version: String,
    /// Seconds since the Unix epoch, UTC
    pub last_updated: u64,
    pub directories: BTreeMap<String, String>,
    pub url_format: BTreeMap<String, String>,
}

impl CdnManifest {
    pub fn new(base_url: &str, kinds: &[ImageKind], last_updated: u64) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let mut directories = BTreeMap::new();
        let mut url_format = BTreeMap::new();
        for kind in kinds {
            let dir = format!("/images/student/{}/", kind.as_str());
            url_format.insert(
                format!("student_{}", kind.as_str()),
                format!("{{base_url}}{dir}{{id}}.webp"),
            );
            directories.insert(format!("student_{}", kind.as_str()), dir);
        }
        Self {
            base_url,
            version: MANIFEST_VERSION.to_string(),
            last_updated,
            directories,
            url_format,
        }
    }

    /// Manifest for every kind, stamped now
    pub fn now(base_url: &str) -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self::new(base_url, &ImageKind::ALL, now)
    }

    /// Resolve a `url_format` entry for one student
    pub fn url_for(&self, kind: ImageKind, id: &str) -> Option<String> {
        self.url_format
            .get(&format!("student_{}", kind.as_str()))
            .map(|f| f.replace("{base_url}", &self.base_url).replace("{id}", id))
    }

    pub fn write(&self, path: &Path) -> SyncResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| SyncError::io(path, e))?;
        log::info!("wrote CDN manifest to {}", path.display());
        Ok(())
    }
}
