//! Report serialisation.

use std::fs;
use std::io::Write;

use camino::Utf8Path;
use faultmap_config::{OutputFormat, STDOUT_PATH};
use faultmap_report::HandlerReport;

use crate::AppError;

/// Serialises `reports` in the requested format.
pub(crate) fn render(reports: &[HandlerReport], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Yaml => serde_saphyr::to_string(&reports)
            .map_err(|error| AppError::Serialise(error.to_string())),
        OutputFormat::Json => serde_json::to_string_pretty(reports)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|error| AppError::Serialise(error.to_string())),
    }
}

/// Writes the rendered document to `destination`, or to `stdout` when no
/// destination is configured.
pub(crate) fn write<W: Write>(
    document: &str,
    destination: Option<&Utf8Path>,
    stdout: &mut W,
) -> Result<(), AppError> {
    match destination {
        Some(path) => fs::write(path, document).map_err(|source| AppError::WriteOutput {
            destination: path.to_string(),
            source,
        }),
        None => stdout
            .write_all(document.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|source| AppError::WriteOutput {
                destination: STDOUT_PATH.to_owned(),
                source,
            }),
    }
}
