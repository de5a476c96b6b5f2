//! Student image downloads
//!
//! Files land at `{out_dir}/{kind}/{id}.webp`, the layout the roster page's
//! default path templates point at.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::ValueEnum;
use roster_core::{Student, StudentId};

use crate::error::{SyncError, SyncResult};
use crate::http::HttpClient;

pub const DEFAULT_MIRRORS: &[&str] = &[
    "https://schaledb.com/images/student",
    "https://raw.githubusercontent.com/SchaleDB/SchaleDB/main/images/student",
];
pub const DEFAULT_RETRIES: u32 = 3;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_RETRY_PAUSE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum ImageKind {
    Icon,
    Portrait,
    Collection,
    Lobby,
}

impl ImageKind {
    pub const ALL: [ImageKind; 4] = [
        ImageKind::Icon,
        ImageKind::Portrait,
        ImageKind::Collection,
        ImageKind::Lobby,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Icon => "icon",
            ImageKind::Portrait => "portrait",
            ImageKind::Collection => "collection",
            ImageKind::Lobby => "lobby",
        }
    }
}

/// What to download and how politely
#[derive(Debug, Clone)]
pub struct DownloadPlan {
    pub out_dir: PathBuf,
    pub kinds: Vec<ImageKind>,
    pub mirrors: Vec<String>,
    /// Attempts per mirror
    pub retries: u32,
    /// Pause after every file that hit the network
    pub delay: Duration,
    /// Pause between attempts against the same URL
    pub retry_pause: Duration,
}

impl DownloadPlan {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            kinds: vec![ImageKind::Icon, ImageKind::Portrait],
            mirrors: DEFAULT_MIRRORS.iter().map(|m| m.to_string()).collect(),
            retries: DEFAULT_RETRIES,
            delay: DEFAULT_DELAY,
            retry_pause: DEFAULT_RETRY_PAUSE,
        }
    }

    pub fn target(&self, kind: ImageKind, student: &Student) -> PathBuf {
        self.out_dir
            .join(kind.as_str())
            .join(format!("{}.webp", student.id))
    }
}

/// An id usable as a file stem under `out_dir`: non-empty, no path
/// separators, no `..`.
pub fn is_file_safe(id: &StudentId) -> bool {
    let id = id.as_str();
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

pub fn image_url(mirror: &str, kind: ImageKind, student: &Student) -> String {
    format!(
        "{}/{}/{}.webp",
        mirror.trim_end_matches('/'),
        kind.as_str(),
        student.id
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Try each mirror in order; retry a mirror only on transient errors.
fn fetch_from_mirrors(
    client: &HttpClient,
    plan: &DownloadPlan,
    kind: ImageKind,
    student: &Student,
) -> Option<Vec<u8>> {
    for mirror in &plan.mirrors {
        let url = image_url(mirror, kind, student);
        for attempt in 1..=plan.retries.max(1) {
            match client.get_bytes(&url) {
                Ok(bytes) => return Some(bytes),
                Err(err) => {
                    log::warn!("attempt {attempt} for {url} failed: {err}");
                    if !err.is_retryable() {
                        break;
                    }
                    if attempt < plan.retries {
                        thread::sleep(plan.retry_pause);
                    }
                }
            }
        }
    }
    None
}

/// Download every requested kind for every student.
///
/// Existing files are left alone. A file that no mirror can serve is counted
/// as failed and the run moves on; only local I/O errors abort.
pub fn download_images(
    client: &HttpClient,
    students: &[Student],
    plan: &DownloadPlan,
) -> SyncResult<DownloadReport> {
    for kind in &plan.kinds {
        let dir = plan.out_dir.join(kind.as_str());
        fs::create_dir_all(&dir).map_err(|e| SyncError::io(&dir, e))?;
    }

    let mut report = DownloadReport::default();
    for student in students {
        if !is_file_safe(&student.id) {
            log::error!("refusing unsafe student id {:?}", student.id.as_str());
            report.failed += plan.kinds.len();
            continue;
        }
        log::info!("processing {} ({})", student.name, student.id);
        for &kind in &plan.kinds {
            let target = plan.target(kind, student);
            if target.exists() {
                log::debug!("skipping existing {}", target.display());
                report.skipped += 1;
                continue;
            }

            match fetch_from_mirrors(client, plan, kind, student) {
                Some(bytes) => {
                    write_image(&target, &bytes)?;
                    log::info!("downloaded {} {}", kind.as_str(), student.id);
                    report.downloaded += 1;
                }
                None => {
                    log::error!("no mirror has {} {}", kind.as_str(), student.id);
                    report.failed += 1;
                }
            }

            thread::sleep(plan.delay);
        }
    }

    log::info!(
        "download complete: {} downloaded, {} skipped, {} failed",
        report.downloaded,
        report.skipped,
        report.failed
    );
    Ok(report)
}

fn write_image(target: &Path, bytes: &[u8]) -> SyncResult<()> {
    fs::write(target, bytes).map_err(|e| SyncError::io(target, e))
}
