use super::{control::RunControl, record::FileRecord, Stage};
use crate::{
    error::{Error, Result},
    renderer::TemplateRenderer,
};
use rayon::prelude::*;

/// Renders every text record against the shared context on the given worker
/// pool. Binary records pass through unrendered.
///
/// The context is shared by reference and never mutated per file, so
/// per-file rendering is safe to parallelize. The first failure in input
/// order is reported, independent of scheduling.
pub fn render_files(
    records: Vec<FileRecord>,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
    pool: &rayon::ThreadPool,
    control: &RunControl,
) -> Result<Vec<FileRecord>> {
    let outcomes: Vec<Result<FileRecord>> = pool.install(|| {
        records
            .into_par_iter()
            .map(|record| render_one(record, engine, context, control))
            .collect()
    });

    outcomes.into_iter().collect()
}

fn render_one(
    mut record: FileRecord,
    engine: &dyn TemplateRenderer,
    context: &serde_json::Value,
    control: &RunControl,
) -> Result<FileRecord> {
    control.checkpoint(Stage::Render)?;

    let Some(text) = record.text_content() else {
        log::debug!("Passing '{}' through unrendered (binary content)", record.relative);
        return Ok(record);
    };

    let rendered =
        engine.render(text, context, Some(&record.relative)).map_err(|err| match err {
            Error::MiniJinjaError(source) => {
                Error::RenderError { file: record.relative.clone(), source }
            }
            other => other,
        })?;

    record.content = rendered.into_bytes();
    Ok(record)
}
