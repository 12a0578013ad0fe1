//! The scaffolding pipeline
//!
//! One run reads the template files into memory, renders their content,
//! rewrites their paths, drops excluded files, and writes the survivors to
//! the destination. The stages run strictly in order over the full record
//! set; only the write stage touches the filesystem, so any earlier failure
//! aborts the run with nothing written.

pub mod control;
pub mod filter;
pub mod reader;
pub mod record;
pub mod rename;
pub mod render;
pub mod writer;

pub use control::{CancellationToken, RunControl};
pub use record::FileRecord;
pub use rename::RenameRule;
pub use writer::WriteFailure;

use crate::{
    constants::DEFAULT_SOURCE_GLOB,
    error::{Error, Result},
    renderer::TemplateRenderer,
};
use regex::Regex;
use std::{fmt, path::PathBuf, time::Duration};

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Render,
    Rename,
    Remove,
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Read => "read",
            Stage::Render => "render",
            Stage::Rename => "rename",
            Stage::Remove => "remove",
            Stage::Write => "write",
        })
    }
}

/// Immutable configuration for a single scaffold run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the template files are read from.
    pub source_base: PathBuf,
    /// Glob selecting files below `source_base`.
    pub source_glob: String,
    /// Directory the generated files are written to.
    pub destination_root: PathBuf,
    /// Variables available to the templates.
    pub context: serde_json::Value,
    /// Ordered (pattern, replacement) rules applied to relative paths.
    pub rename_patterns: Vec<(String, String)>,
    /// Files whose relative path matches any of these are dropped.
    pub remove_patterns: Vec<String>,
    /// Overwrite files that already exist in the destination.
    pub overwrite: bool,
    /// Worker threads for per-file rendering; `None` uses the available
    /// parallelism.
    pub concurrency: Option<usize>,
    /// Fail the run once this much time has elapsed.
    pub timeout: Option<Duration>,
}

impl RunOptions {
    pub fn new(
        source_base: PathBuf,
        destination_root: PathBuf,
        context: serde_json::Value,
    ) -> Self {
        Self {
            source_base,
            source_glob: DEFAULT_SOURCE_GLOB.to_string(),
            destination_root,
            context,
            rename_patterns: Vec::new(),
            remove_patterns: Vec::new(),
            overwrite: true,
            concurrency: None,
            timeout: None,
        }
    }
}

/// Summary of a completed run.
#[derive(Debug)]
pub struct RunReport {
    /// Destination paths written by the write stage.
    pub written: Vec<PathBuf>,
}

/// Runs the five stages strictly in order over one in-memory record set.
pub struct Pipeline<'a> {
    engine: &'a dyn TemplateRenderer,
    options: &'a RunOptions,
    control: RunControl,
}

impl<'a> Pipeline<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, options: &'a RunOptions) -> Self {
        Self::with_token(engine, options, CancellationToken::new())
    }

    /// Builds a pipeline that observes an externally-held cancellation token.
    pub fn with_token(
        engine: &'a dyn TemplateRenderer,
        options: &'a RunOptions,
        token: CancellationToken,
    ) -> Self {
        let control = RunControl::new(token, options.timeout);
        Self { engine, options, control }
    }

    /// Executes one scaffold run.
    ///
    /// Patterns are compiled before any file is touched so a bad rule never
    /// produces a half-written destination.
    pub fn run(&self) -> Result<RunReport> {
        let rename_rules = self
            .options
            .rename_patterns
            .iter()
            .map(|(pattern, replacement)| RenameRule::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()
            .map_err(|err| err.with_stage(Stage::Rename))?;
        let remove_patterns = self
            .options
            .remove_patterns
            .iter()
            .map(|pattern| Regex::new(pattern).map_err(Error::from))
            .collect::<Result<Vec<_>>>()
            .map_err(|err| err.with_stage(Stage::Remove))?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.options.concurrency.unwrap_or(0))
            .build()?;

        let records =
            self.stage(Stage::Read, || reader::read_files(self.options, &self.control))?;
        log::info!(
            "Read {} file(s) from '{}'",
            records.len(),
            self.options.source_base.display()
        );

        let records = self.stage(Stage::Render, || {
            render::render_files(records, self.engine, &self.options.context, &pool, &self.control)
        })?;

        let records = self.stage(Stage::Rename, || {
            rename::rename_files(records, &rename_rules, &self.control)
        })?;

        let records =
            self.stage(Stage::Remove, || Ok(filter::remove_files(records, &remove_patterns)))?;

        let written =
            self.stage(Stage::Write, || writer::write_files(&records, self.options, &self.control))?;
        log::info!(
            "Wrote {} file(s) to '{}'",
            written.len(),
            self.options.destination_root.display()
        );

        Ok(RunReport { written })
    }

    fn stage<T>(&self, stage: Stage, body: impl FnOnce() -> Result<T>) -> Result<T> {
        self.control.checkpoint(stage)?;
        log::debug!("Entering {stage} stage");
        body().map_err(|err| err.with_stage(stage))
    }
}
