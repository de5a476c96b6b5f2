use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use roster_sync::images::{self, DownloadPlan, ImageKind};
use roster_sync::manifest::{self, CdnManifest};
use roster_sync::schaledb;
use roster_sync::HttpClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster-sync", about = "Sync student data and images for the roster page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the upstream student list and write the roster document
    Fetch(FetchArgs),
    /// Download student images listed in a roster document
    Images(ImagesArgs),
    /// Write the CDN manifest
    Manifest(ManifestArgs),
    /// Run fetch, images and manifest in order
    All {
        #[command(flatten)]
        fetch: FetchArgs,
        /// Image output directory
        #[arg(long, default_value = "images/student")]
        out_dir: PathBuf,
        #[arg(long, default_value = manifest::DEFAULT_BASE_URL)]
        base_url: String,
        #[arg(long, default_value = "cdn_manifest.json")]
        manifest_out: PathBuf,
    },
}

#[derive(Args)]
struct FetchArgs {
    /// Upstream students.json
    #[arg(long, default_value = schaledb::DEFAULT_SOURCE)]
    source: String,
    /// Roster document the page loads
    #[arg(long, default_value = "data/students.json")]
    out: PathBuf,
}

#[derive(Args)]
struct ImagesArgs {
    #[arg(long, default_value = "data/students.json")]
    roster: PathBuf,
    #[arg(long, default_value = "images/student")]
    out_dir: PathBuf,
    /// Repeat for several kinds (default: icon and portrait)
    #[arg(long = "kind", value_enum)]
    kinds: Vec<ImageKind>,
    /// Base URL tried in order (default: SchaleDB, then its GitHub mirror)
    #[arg(long = "mirror")]
    mirrors: Vec<String>,
    /// Pause after each downloaded file
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,
    /// Attempts per mirror
    #[arg(long, default_value_t = images::DEFAULT_RETRIES)]
    retries: u32,
}

#[derive(Args)]
struct ManifestArgs {
    #[arg(long, default_value = manifest::DEFAULT_BASE_URL)]
    base_url: String,
    #[arg(long, default_value = "cdn_manifest.json")]
    out: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fetch(client: &HttpClient, args: &FetchArgs) -> Result<()> {
    let students = schaledb::fetch_students(client, &args.source)
        .with_context(|| format!("fetching {}", args.source))?;
    schaledb::write_roster(&args.out, &students)
        .with_context(|| format!("writing {}", args.out.display()))?;
    log::info!("wrote {} students to {}", students.len(), args.out.display());
    Ok(())
}

fn download(client: &HttpClient, args: &ImagesArgs) -> Result<()> {
    let students = schaledb::read_roster(&args.roster)
        .with_context(|| format!("reading {}", args.roster.display()))?;

    let mut plan = DownloadPlan::new(&args.out_dir);
    if !args.kinds.is_empty() {
        plan.kinds = args.kinds.clone();
    }
    if !args.mirrors.is_empty() {
        plan.mirrors = args.mirrors.clone();
    }
    plan.delay = Duration::from_millis(args.delay_ms);
    plan.retries = args.retries;

    let report = images::download_images(client, &students, &plan)?;
    if report.failed > 0 {
        log::warn!("{} images could not be downloaded", report.failed);
    }
    Ok(())
}

fn write_manifest(args: &ManifestArgs) -> Result<()> {
    CdnManifest::now(&args.base_url)
        .write(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let client = HttpClient::default();

    match cli.command {
        Command::Fetch(args) => fetch(&client, &args),
        Command::Images(args) => download(&client, &args),
        Command::Manifest(args) => write_manifest(&args),
        Command::All {
            fetch: fetch_args,
            out_dir,
            base_url,
            manifest_out,
        } => {
            fetch(&client, &fetch_args)?;
            download(
                &client,
                &ImagesArgs {
                    roster: fetch_args.out.clone(),
                    out_dir,
                    kinds: Vec::new(),
                    mirrors: Vec::new(),
                    delay_ms: images::DEFAULT_DELAY.as_millis() as u64,
                    retries: images::DEFAULT_RETRIES,
                },
            )?;
            write_manifest(&ManifestArgs {
                base_url,
                out: manifest_out,
            })
        }
    }
}
