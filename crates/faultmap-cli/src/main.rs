//! CLI entrypoint for the faultmap analyser.
//!
//! The binary delegates to [`faultmap_cli::run`], which loads configuration,
//! reads the catalog, handler list and call graph, and writes one report per
//! HTTP route.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    faultmap_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
