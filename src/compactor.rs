use anyhow::{Context, Result};
use log::{debug, error, info};
use serde_json::Value;
use std::path::Path;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;

// @module: Compaction pass over the configured resource directories

/// File name suffix a source file must carry to be compacted.
/// The match is exact and case-sensitive, so `.JSON` files are not picked up.
pub const JSON_SUFFIX: &str = ".json";

/// Counters collected over one compaction run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompactionSummary {
    // @field: Files compacted
    pub files: usize,

    // @field: Files skipped after a parse failure (keep-going mode only)
    pub skipped: usize,

    // @field: Total bytes read from source files
    pub bytes_in: u64,

    // @field: Total bytes written to output files
    pub bytes_out: u64,
}

impl CompactionSummary {
    // @returns: Bytes shaved off across the whole run
    pub fn bytes_saved(&self) -> u64 {
        self.bytes_in.saturating_sub(self.bytes_out)
    }
}

/// Main compaction pass over the configured directories
pub struct Compactor {
    // @field: App configuration
    config: Config,
}

impl Compactor {
    // @method: Create a new compactor with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let compactor = Self { config };

        Ok(compactor)
    }

    /// Run the compaction pass: one linear sweep over the configured
    /// directories, in listed order. With `keep_going` set, a file that
    /// fails to parse is logged and skipped instead of aborting the run;
    /// read/write failures stay fatal either way.
    pub fn run(&self, keep_going: bool) -> Result<CompactionSummary> {
        let start_time = std::time::Instant::now();
        let mut summary = CompactionSummary::default();

        for dir in &self.config.directories {
            self.compact_directory(dir, keep_going, &mut summary)?;
        }

        info!(
            "Compacted {} file(s) in {:.2?}: {} -> {} bytes ({} saved)",
            summary.files,
            start_time.elapsed(),
            summary.bytes_in,
            summary.bytes_out,
            summary.bytes_saved()
        );
        if summary.skipped > 0 {
            error!("Skipped {} file(s) that failed to parse", summary.skipped);
        }

        Ok(summary)
    }

    /// Compact every matching file directly inside one configured directory
    fn compact_directory(
        &self,
        dir: &str,
        keep_going: bool,
        summary: &mut CompactionSummary,
    ) -> Result<()> {
        let source_dir = self.config.source_root.join(dir);
        let output_dir = self.config.output_root.join(dir);

        // Ensure the output directory exists before touching the source side
        FileManager::ensure_dir(&output_dir)?;

        if !FileManager::dir_exists(&source_dir) {
            return Err(AppError::directory_access(&source_dir, "not a directory").into());
        }

        let files = FileManager::list_files_with_suffix(&source_dir, JSON_SUFFIX)
            .map_err(|e| AppError::directory_access(&source_dir, e.to_string()))?;

        debug!("Found {} JSON file(s) in {:?}", files.len(), source_dir);

        for file in files {
            let target = output_dir.join(file.file_name().unwrap_or_default());

            match Self::compact_file(&file, &target) {
                Ok((bytes_in, bytes_out)) => {
                    debug!("Compacted {:?} ({} -> {} bytes)", file, bytes_in, bytes_out);
                    summary.files += 1;
                    summary.bytes_in += bytes_in;
                    summary.bytes_out += bytes_out;
                }
                Err(e) if keep_going && is_parse_error(&e) => {
                    error!("{:#}", e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Compact a single source file into the given target path.
    /// Returns the source and output sizes in bytes.
    fn compact_file(source: &Path, target: &Path) -> Result<(u64, u64)> {
        let content = FileManager::read_to_string(source)?;

        let compacted = compact_str(&content).map_err(|e| AppError::parse(source, e))?;

        FileManager::write_to_file(target, &compacted)
            .with_context(|| format!("Failed to write compacted file: {:?}", target))?;

        Ok((content.len() as u64, compacted.len() as u64))
    }
}

/// Parse JSON text and re-serialize it without insignificant whitespace.
///
/// Separators come out as bare `,` and `:`, there is no indentation and no
/// trailing newline. Object key order and numeric literals survive exactly
/// as written in the input.
pub fn compact_str(input: &str) -> serde_json::Result<String> {
    let document: Value = serde_json::from_str(input)?;
    serde_json::to_string(&document)
}

// @checks: Whether an error chain bottoms out in a JSON parse failure
fn is_parse_error(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<AppError>(),
        Some(AppError::Parse { .. })
    )
}
