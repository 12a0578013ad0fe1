use super::{control::RunControl, record::FileRecord, RunOptions, Stage};
use crate::{
    error::{Error, Result},
    ext::PathExt,
};
use globset::Glob;
use std::fs;
use walkdir::WalkDir;

/// Enumerates the files below the source base matching the source glob and
/// reads them into records, sorted by file name for deterministic runs.
///
/// A missing or unreadable source base fails the run; individual unreadable
/// files are skipped with a warning.
pub fn read_files(options: &RunOptions, control: &RunControl) -> Result<Vec<FileRecord>> {
    let base = options.source_base.as_path();
    if !base.is_dir() {
        return Err(Error::ReadError {
            path: base.display().to_string(),
            reason: "not an existing directory".to_string(),
        });
    }

    let matcher = Glob::new(&options.source_glob)?.compile_matcher();
    let mut records = Vec::new();

    for entry in WalkDir::new(base).min_depth(1).sort_by_file_name() {
        control.checkpoint(Stage::Read)?;
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry under '{}': {err}", base.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(base)
            .map_err(|err| {
                Error::Other(anyhow::anyhow!(
                    "Entry '{}' escapes '{}': {err}",
                    entry.path().display(),
                    base.display()
                ))
            })?
            .to_slash_string()?;
        if !matcher.is_match(&relative) {
            continue;
        }
        match fs::read(entry.path()) {
            Ok(content) => {
                log::debug!("Read '{relative}' ({} bytes)", content.len());
                records.push(FileRecord { source: entry.into_path(), relative, content });
            }
            Err(err) => {
                log::warn!("Skipping unreadable file '{}': {err}", entry.path().display());
            }
        }
    }

    Ok(records)
}
