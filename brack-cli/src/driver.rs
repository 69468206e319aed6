//! 校验驱动：标准输入模式与多文件模式
//!
//! 每个文件独立校验，一个文件失败不会中断后续文件，只影响最终退出码。

use crate::config::Settings;
use crate::platform::print_error_with_source;
use brack_api::{check_paths, check_source, BrackError, CheckSummary, SourceLoader};
use brack_config::OutputFormat;
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// 标准输入在报告中的名称
pub const STDIN_NAME: &str = "<stdin>";

/// 按输出格式写出结果
pub struct Reporter<'a> {
    settings: &'a Settings,
}

impl<'a> Reporter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    fn ok(&self, out: &mut dyn Write, path: &str, summary: &CheckSummary) -> io::Result<()> {
        if self.settings.quiet {
            return Ok(());
        }
        match self.settings.format {
            OutputFormat::Text => writeln!(out, "{path}: OK"),
            OutputFormat::Json => {
                let line = json!({
                    "path": path,
                    "status": "ok",
                    "values": summary.top_level_values,
                    "max_depth": summary.max_depth,
                });
                writeln!(out, "{line}")
            }
        }
    }

    fn failure(
        &self,
        err: &mut dyn Write,
        path: Option<&str>,
        error: &BrackError,
        source: Option<&str>,
    ) -> io::Result<()> {
        match self.settings.format {
            OutputFormat::Text => {
                let source = source.filter(|_| self.settings.check.show_context);
                print_error_with_source(err, path, error, source)
            }
            OutputFormat::Json => {
                let mut report = error.to_report();
                if let Some(path) = path {
                    report = report.with_path(path);
                }
                writeln!(err, "{}", report.to_json()?)
            }
        }
    }
}

/// 校验标准输入的全部内容
///
/// 成功时不输出任何内容。
pub fn run_stdin(input: Vec<u8>, settings: &Settings, err: &mut dyn Write) -> io::Result<i32> {
    let reporter = Reporter::new(settings);

    let source = match String::from_utf8(input) {
        Ok(source) => source,
        Err(e) => {
            let error = BrackError::invalid_utf8(Path::new(STDIN_NAME), &e);
            reporter.failure(err, None, &error, None)?;
            return Ok(EXIT_FAILURE);
        }
    };

    match check_source(&source, &settings.check) {
        Ok(summary) => {
            info!(target: "brack::cli", values = summary.top_level_values, "stdin is valid");
            Ok(EXIT_OK)
        }
        Err(error) => {
            debug!(target: "brack::cli", phase = error.phase(), "stdin failed validation");
            reporter.failure(err, None, &error, Some(&source))?;
            Ok(EXIT_FAILURE)
        }
    }
}

/// 逐个校验文件
pub fn run_paths(
    loader: &dyn SourceLoader,
    paths: &[PathBuf],
    settings: &Settings,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let reporter = Reporter::new(settings);
    let mut exit_code = EXIT_OK;

    for outcome in check_paths(loader, paths.iter().cloned(), &settings.check) {
        let name = outcome.path.display().to_string();
        match &outcome.result {
            Ok(summary) => reporter.ok(out, &name, summary)?,
            Err(error) => {
                debug!(target: "brack::cli", path = %name, phase = error.phase(), "validation failed");
                reporter.failure(err, Some(&name), error, outcome.source.as_deref())?;
                exit_code = EXIT_FAILURE;
            }
        }
    }

    Ok(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use brack_api::MemoryLoader;
    use crate::logging::{create_format_layer, targets, LogFormat};
    use brack_config::BrackConfig;
    use clap::Parser;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::{layer::SubscriberExt, Layer};

    /// 收集日志输出的缓冲区
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    /// 在安装了日志订阅者的情况下运行多文件模式
    fn run_files_logged(flags: &[&str]) -> (i32, String, String, String) {
        let logs = Captured::default();
        let writer = logs.clone();
        let layer = create_format_layer(LogFormat::Compact, move || writer.clone())
            .with_filter(targets(&settings(flags).log));
        let subscriber = tracing_subscriber::registry().with(layer);

        let (code, out, err) = tracing::subscriber::with_default(subscriber, || {
            run_files(
                &[("bad.brack", ")"), ("good.brack", "[]")],
                &["bad.brack", "good.brack"],
                flags,
            )
        });
        (code, out, err, logs.text())
    }

    fn settings(flags: &[&str]) -> Settings {
        let args = Args::parse_from(std::iter::once("brack").chain(flags.iter().copied()));
        Settings::resolve(&args, &BrackConfig::default())
    }

    fn run_files(files: &[(&str, &str)], paths: &[&str], flags: &[&str]) -> (i32, String, String) {
        let loader = MemoryLoader::with_files(files.iter().copied());
        let paths: Vec<PathBuf> = paths.iter().map(PathBuf::from).collect();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run_paths(&loader, &paths, &settings(flags), &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn run_input(input: &[u8], flags: &[&str]) -> (i32, String) {
        let mut err = Vec::new();
        let code = run_stdin(input.to_vec(), &settings(flags), &mut err).unwrap();
        (code, String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_stdin_valid() {
        let (code, err) = run_input(b"(add 1 2)", &[]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(err, "");
    }

    #[test]
    fn test_stdin_invalid() {
        let (code, err) = run_input(b"[1 2", &[]);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(err, "Line 1, column 5: Expected ']' before end of input\n");
    }

    #[test]
    fn test_stdin_invalid_utf8() {
        let (code, err) = run_input(&[b'[', 0xff, b']'], &[]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(err.starts_with("I/O error: file is not valid UTF-8"));
    }

    #[test]
    fn test_stdin_context() {
        let (code, err) = run_input(b"[1\n2)", &["--context"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(err.starts_with("Line 2, column 2: Unexpected closing bracket ')'\n"));
        assert!(err.contains("2 | 2)\n  |  ^\n"));
    }

    #[test]
    fn test_paths_mixed_results() {
        let (code, out, err) = run_files(
            &[("a.brack", "[1 2 3]"), ("b.brack", ")"), ("c.brack", "{ }")],
            &["a.brack", "b.brack", "c.brack"],
            &[],
        );
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(out, "a.brack: OK\nc.brack: OK\n");
        assert_eq!(err, "b.brack: Line 1, column 1: Unexpected closing bracket ')'\n");
    }

    #[test]
    fn test_paths_all_ok() {
        let (code, out, _) = run_files(&[("a.brack", "<meta (x)>")], &["a.brack"], &[]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "a.brack: OK\n");
    }

    #[test]
    fn test_missing_file_does_not_stop_others() {
        let (code, out, err) = run_files(&[("ok.brack", "x")], &["gone.brack", "ok.brack"], &[]);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(out, "ok.brack: OK\n");
        assert!(err.starts_with("gone.brack: I/O error:"));
    }

    #[test]
    fn test_quiet_suppresses_ok_lines() {
        let (code, out, _) = run_files(&[("a.brack", "[]")], &["a.brack"], &["--quiet"]);
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "");
    }

    #[test]
    fn test_json_format() {
        let (code, out, err) = run_files(
            &[("a.brack", "(f)"), ("b.brack", "()")],
            &["a.brack", "b.brack"],
            &["--format", "json"],
        );
        assert_eq!(code, EXIT_FAILURE);

        let ok: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(ok["path"], "a.brack");
        assert_eq!(ok["status"], "ok");
        assert_eq!(ok["values"], 1);

        let failed: serde_json::Value = serde_json::from_str(err.trim()).unwrap();
        assert_eq!(failed["path"], "b.brack");
        assert_eq!(failed["line"], 1);
        assert_eq!(failed["column"], 2);
        assert_eq!(failed["error_kind"], "StructuralError");
    }

    #[test]
    fn test_max_depth_flag() {
        let (code, _, err) = run_files(&[("deep.brack", "[[[x]]]")], &["deep.brack"], &["--max-depth", "2"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(err.contains("Maximum nesting depth of 2 exceeded"));
    }

    #[test]
    fn test_deep_file_does_not_stop_others() {
        let deep = format!("{}x{}", "(f ".repeat(20_000), ")".repeat(20_000));
        let (code, out, err) = run_files(
            &[("deep.brack", deep.as_str()), ("good.brack", "[]")],
            &["deep.brack", "good.brack"],
            &[],
        );
        assert_eq!(code, EXIT_OK);
        assert_eq!(out, "deep.brack: OK\ngood.brack: OK\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_default_logging_keeps_reports_exact() {
        let (code, out, err, logs) = run_files_logged(&[]);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(out, "good.brack: OK\n");
        assert_eq!(err, "bad.brack: Line 1, column 1: Unexpected closing bracket ')'\n");
        assert_eq!(logs, "");
    }

    #[test]
    fn test_debug_logging_goes_to_log_writer() {
        let (code, _, err, logs) = run_files_logged(&["--log-level", "debug"]);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(err, "bad.brack: Line 1, column 1: Unexpected closing bracket ')'\n");
        assert!(logs.contains("validation failed"));
    }
}
