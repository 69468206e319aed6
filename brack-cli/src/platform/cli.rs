//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use brack_api::BrackError;
use std::io::{self, Write};

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(
    out: &mut dyn Write,
    prefix: Option<&str>,
    e: &BrackError,
    source: Option<&str>,
) -> io::Result<()> {
    match prefix {
        Some(prefix) => writeln!(out, "{prefix}: {e}")?,
        None => writeln!(out, "{e}")?,
    }

    if let (Some(source), Some(line), Some(column)) = (source, e.line(), e.column()) {
        print_source_context(out, source, line, column)?;
    }
    Ok(())
}

/// 打印源代码上下文（显示错误行前后几行）
pub fn print_source_context(
    out: &mut dyn Write,
    source: &str,
    error_line: usize,
    error_col: usize,
) -> io::Result<()> {
    let lines: Vec<&str> = source.split('\n').collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return Ok(());
    }

    // 计算要显示的行范围
    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 计算行号的最大宽度用于对齐
    let width = end_line.to_string().len();

    writeln!(out, "{}|--", "-".repeat(width + 1))?;

    for line_idx in start_line..=end_line {
        let content = lines[line_idx - 1].trim_end_matches('\r');
        writeln!(out, "{line_idx:>width$} | {content}")?;

        if line_idx == error_line {
            // 指向错误位置的标记
            let marker = " ".repeat(error_col.saturating_sub(1));
            writeln!(out, "{} | {}^", " ".repeat(width), marker)?;
        }
    }

    writeln!(out, "{}|--", "-".repeat(width + 1))
}
