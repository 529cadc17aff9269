//! Command-line runtime for the faultmap analyser.
//!
//! [`run`] loads configuration, installs telemetry, reads the error catalog,
//! the handler list and the call graph edge list, then writes one report per
//! HTTP route. The runtime takes its IO streams as parameters so tests can
//! capture output and substitute the configuration loader.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use camino::Utf8Path;
use faultmap_catalog::Catalog;
use faultmap_config::{Config, STDOUT_PATH};
use faultmap_report::{AnalysisOptions, HandlerReport, analyse};
use tracing::info;

mod config;
mod errors;
mod inputs;
mod output;
pub mod telemetry;

pub(crate) use config::{ConfigLoader, OrthoConfigLoader};
pub use errors::AppError;

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let arguments: Vec<OsString> = args.into_iter().collect();
    match execute(&arguments, stdout, loader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(stderr, "faultmap: {error}").ok();
            ExitCode::FAILURE
        }
    }
}

fn execute<W, L>(arguments: &[OsString], stdout: &mut W, loader: &L) -> Result<(), AppError>
where
    W: Write,
    L: ConfigLoader,
{
    let config = loader.load(arguments)?;
    telemetry::initialise(&config)?;
    let reports = analyse_inputs(&config)?;
    let document = output::render(&reports, config.output_format())?;
    output::write(&document, config.output_path(), stdout)?;
    info!(
        reports = reports.len(),
        format = %config.output_format(),
        destination = config.output_path().map_or(STDOUT_PATH, Utf8Path::as_str),
        "reports written"
    );
    Ok(())
}

/// Loads every input named by `config` and runs the analysis.
fn analyse_inputs(config: &Config) -> Result<Vec<HandlerReport>, AppError> {
    let catalog = Catalog::load(config.catalog_path())?;
    let handlers = inputs::load_handlers(config.handlers_path())?;
    let mut edges = inputs::open_edges(config.edges_path())?;
    let options = AnalysisOptions::new(config.error_code_dir()).with_parallel(config.parallel());
    Ok(analyse(&mut edges, &handlers, &catalog, &options)?)
}
