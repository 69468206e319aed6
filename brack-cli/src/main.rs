//! Brack CLI - Command line interface
//!
//! Validates files given as arguments, or standard input when none are given.

use clap::Parser;
use std::io::{self, Read, Write};
use std::process;

mod args;
mod config;
mod driver;
mod logging;
mod platform;

use crate::args::Args;
use crate::config::{load_config_file, Settings};
use crate::driver::{run_paths, run_stdin, EXIT_FAILURE, EXIT_USAGE};
use brack_api::NativeLoader;
use tracing::debug;

fn main() {
    let args = Args::parse();

    // Read brack.json
    let file_config = match load_config_file(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_USAGE);
        }
    };

    let settings = Settings::resolve(&args, &file_config);

    if let Err(e) = logging::init_with_file(&settings.log, args.log_format, args.log_file.as_deref()) {
        eprintln!("Error: {e}");
        process::exit(EXIT_USAGE);
    }

    debug!(target: "brack::cli", ?settings, "configuration resolved");

    let stdout = io::stdout();
    let stderr = io::stderr();
    let (mut out, mut err) = (stdout.lock(), stderr.lock());

    let result = if args.paths.is_empty() {
        let mut input = Vec::new();
        match io::stdin().read_to_end(&mut input) {
            Ok(_) => run_stdin(input, &settings, &mut err),
            Err(e) => Err(e),
        }
    } else {
        run_paths(&NativeLoader, &args.paths, &settings, &mut out, &mut err)
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            EXIT_FAILURE
        }
    };

    let _ = out.flush();
    process::exit(code);
}
