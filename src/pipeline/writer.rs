use super::{control::RunControl, record::FileRecord, RunOptions, Stage};
use crate::error::{Error, Result};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A destination write that did not complete.
#[derive(Debug)]
pub struct WriteFailure {
    pub target: PathBuf,
    pub reason: String,
}

/// Writes every record below the destination root, creating intermediate
/// directories as needed.
///
/// Failures are collected so the remaining files still get written;
/// already-written files stay on disk. The run fails with
/// `PartialWriteError` when any write failed.
pub fn write_files(
    records: &[FileRecord],
    options: &RunOptions,
    control: &RunControl,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut failed = Vec::new();

    for record in records {
        control.checkpoint(Stage::Write)?;
        let target = options.destination_root.join(&record.relative);
        match write_one(record, &target, options.overwrite) {
            Ok(()) => {
                log::info!("Wrote '{}'", target.display());
                written.push(target);
            }
            Err(err) => {
                log::error!("Failed to write '{}': {err}", target.display());
                failed.push(WriteFailure { target, reason: err.to_string() });
            }
        }
    }

    if failed.is_empty() {
        Ok(written)
    } else {
        Err(Error::PartialWriteError { written, failed })
    }
}

fn write_one(record: &FileRecord, target: &Path, overwrite: bool) -> io::Result<()> {
    if !overwrite && target.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "destination file already exists",
        ));
    }
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(target, &record.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CancellationToken;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(relative: &str, content: &str) -> FileRecord {
        FileRecord {
            source: PathBuf::from("/templates").join(relative),
            relative: relative.to_string(),
            content: content.as_bytes().to_vec(),
        }
    }

    fn options(destination: &Path) -> RunOptions {
        RunOptions::new(PathBuf::from("/unused"), destination.to_path_buf(), json!({}))
    }

    fn control() -> RunControl {
        RunControl::new(CancellationToken::new(), None)
    }

    #[test]
    fn writes_records_creating_directories() {
        let dest = TempDir::new().unwrap();
        let records = vec![record("m-gallery.md", "# doc\n"), record("js/m-gallery.js", "js\n")];

        let written = write_files(&records, &options(dest.path()), &control()).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(dest.path().join("m-gallery.md")).unwrap(), "# doc\n");
        assert_eq!(fs::read_to_string(dest.path().join("js/m-gallery.js")).unwrap(), "js\n");
    }

    #[test]
    fn overwrites_existing_files_by_default() {
        let dest = TempDir::new().unwrap();
        fs::write(dest.path().join("a.txt"), "old").unwrap();

        write_files(&[record("a.txt", "new")], &options(dest.path()), &control()).unwrap();

        assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "new");
    }

    #[test]
    fn keep_existing_collects_failures_but_writes_the_rest() {
        let dest = TempDir::new().unwrap();
        fs::write(dest.path().join("a.txt"), "old").unwrap();
        let mut options = options(dest.path());
        options.overwrite = false;

        let records = [record("a.txt", "new"), record("b.txt", "fresh")];
        let err = write_files(&records, &options, &control()).unwrap_err();

        match err {
            Error::PartialWriteError { written, failed } => {
                assert_eq!(written, vec![dest.path().join("b.txt")]);
                assert_eq!(failed.len(), 1);
                assert_eq!(failed[0].target, dest.path().join("a.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(fs::read_to_string(dest.path().join("a.txt")).unwrap(), "old");
        assert_eq!(fs::read_to_string(dest.path().join("b.txt")).unwrap(), "fresh");
    }
}
