//! 命令行参数

use crate::logging::LogFormat;
use brack_config::{LogLevel, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "brack",
    about = "Validate Brack files against the grammar.",
    version
)]
pub struct Args {
    /// Files to validate. Reads from stdin when omitted.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Configuration file (default: ./brack.json when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Also append logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Result format: text or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Maximum bracket nesting depth
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print the surrounding source lines for grammar errors
    #[arg(long)]
    pub context: bool,

    /// Do not print "<path>: OK" lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_paths_means_stdin() {
        let args = Args::parse_from(["brack"]);
        assert!(args.paths.is_empty());
        assert_eq!(args.log_format, LogFormat::Compact);
        assert!(!args.context);
    }

    #[test]
    fn test_all_options() {
        let args = Args::parse_from([
            "brack",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--format",
            "json",
            "--max-depth",
            "32",
            "--context",
            "-q",
            "a.brack",
            "b.brack",
        ]);
        assert_eq!(args.paths, vec![PathBuf::from("a.brack"), PathBuf::from("b.brack")]);
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert_eq!(args.log_format, LogFormat::Json);
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.max_depth, Some(32));
        assert!(args.context);
        assert!(args.quiet);
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert!(Args::try_parse_from(["brack", "--log-level", "loud"]).is_err());
    }
}
