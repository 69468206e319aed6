//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。语法错误与 I/O 错误是两个独立的类别。

use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// 语法错误（结构化）
pub use brack_core::{ParseError, ParseErrorKind};

/// I/O 错误的细分类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IoErrorKind {
    NotFound,
    PermissionDenied,
    /// 文件内容不是合法的 UTF-8
    InvalidUtf8,
    Other,
}

impl IoErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IoErrorKind::NotFound => "NotFound",
            IoErrorKind::PermissionDenied => "PermissionDenied",
            IoErrorKind::InvalidUtf8 => "InvalidUtf8",
            IoErrorKind::Other => "Other",
        }
    }
}

impl From<io::ErrorKind> for IoErrorKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => IoErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => IoErrorKind::PermissionDenied,
            io::ErrorKind::InvalidData => IoErrorKind::InvalidUtf8,
            _ => IoErrorKind::Other,
        }
    }
}

/// Brack 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrackError {
    /// 语法错误（结构化）
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// 读取源文件失败
    #[error("I/O error: {message}")]
    Io {
        path: PathBuf,
        kind: IoErrorKind,
        message: String,
    },
}

impl BrackError {
    /// 从 `std::io::Error` 构造
    pub fn io(path: &Path, error: &io::Error) -> Self {
        BrackError::Io {
            path: path.to_path_buf(),
            kind: error.kind().into(),
            message: error.to_string(),
        }
    }

    /// 文件内容无法按 UTF-8 解码
    pub fn invalid_utf8(path: &Path, error: &FromUtf8Error) -> Self {
        BrackError::Io {
            path: path.to_path_buf(),
            kind: IoErrorKind::InvalidUtf8,
            message: format!("file is not valid UTF-8 ({})", error.utf8_error()),
        }
    }

    /// 获取错误行号（如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            BrackError::Parse(e) => Some(e.line),
            BrackError::Io { .. } => None,
        }
    }

    /// 获取错误列号（如果有）
    pub fn column(&self) -> Option<usize> {
        match self {
            BrackError::Parse(e) => Some(e.column),
            BrackError::Io { .. } => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            BrackError::Parse(_) => "grammar",
            BrackError::Io { .. } => "io",
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, BrackError::Parse(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, BrackError::Io { .. })
    }

    /// 转换为结构化错误报告
    ///
    /// 适用于 `--format json` 等需要结构化数据的场景。
    pub fn to_report(&self) -> ErrorReport {
        match self {
            BrackError::Parse(e) => ErrorReport {
                path: None,
                phase: self.phase(),
                line: Some(e.line),
                column: Some(e.column),
                error_kind: e.kind.as_str().to_string(),
                message: e.message.clone(),
            },
            BrackError::Io { path, kind, message } => ErrorReport {
                path: Some(path.display().to_string()),
                phase: self.phase(),
                line: None,
                column: None,
                error_kind: kind.as_str().to_string(),
                message: message.clone(),
            },
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 出错的文件（标准输入时为空）
    pub path: Option<String>,
    /// 错误阶段: grammar, io
    pub phase: &'static str,
    /// 错误行号（1-based，如果有）
    pub line: Option<usize>,
    /// 错误列号（1-based，如果有）
    pub column: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl ErrorReport {
    /// 附加文件路径
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// 转换为 JSON 格式
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "Line {}, column {}: {}", line, column, self.message)
            }
            _ => write!(f, "{} error: {}", self.phase, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> BrackError {
        BrackError::Parse(ParseError::new(
            ParseErrorKind::Structural,
            "Expected ']' but found ')'",
            3,
            7,
        ))
    }

    #[test]
    fn test_parse_error_line_column() {
        let err = parse_error();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.column(), Some(7));
        assert_eq!(err.phase(), "grammar");
        assert!(err.is_parse());
        assert!(!err.is_io());
    }

    #[test]
    fn test_parse_error_display_is_transparent() {
        assert_eq!(
            parse_error().to_string(),
            "Line 3, column 7: Expected ']' but found ')'"
        );
    }

    #[test]
    fn test_io_error_from_std() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = BrackError::io(Path::new("a.brack"), &io_err);

        assert!(err.is_io());
        assert_eq!(err.line(), None);
        assert_eq!(err.phase(), "io");
        assert_eq!(err.to_string(), "I/O error: no such file");
        match err {
            BrackError::Io { kind, path, .. } => {
                assert_eq!(kind, IoErrorKind::NotFound);
                assert_eq!(path, PathBuf::from("a.brack"));
            }
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let bad = String::from_utf8(vec![b'[', 0xff, b']']).unwrap_err();
        let err = BrackError::invalid_utf8(Path::new("bad.brack"), &bad);
        let report = err.to_report();

        assert_eq!(report.error_kind, "InvalidUtf8");
        assert!(report.message.contains("not valid UTF-8"));
        assert_eq!(report.path.as_deref(), Some("bad.brack"));
    }

    #[test]
    fn test_io_kind_mapping() {
        assert_eq!(
            IoErrorKind::from(io::ErrorKind::PermissionDenied),
            IoErrorKind::PermissionDenied
        );
        assert_eq!(IoErrorKind::from(io::ErrorKind::TimedOut), IoErrorKind::Other);
    }

    #[test]
    fn test_parse_error_to_report() {
        let report = parse_error().to_report().with_path("x.brack");

        assert_eq!(report.phase, "grammar");
        assert_eq!(report.line, Some(3));
        assert_eq!(report.column, Some(7));
        assert_eq!(report.error_kind, "StructuralError");
        assert_eq!(report.to_string(), "Line 3, column 7: Expected ']' but found ')'");
        assert_eq!(report.to_short(), "grammar: Expected ']' but found ')'");
    }

    #[test]
    fn test_error_report_to_json() {
        let report = parse_error().to_report().with_path("x.brack");
        let json = report.to_json().unwrap();

        assert!(json.contains("\"path\":\"x.brack\""));
        assert!(json.contains("\"phase\":\"grammar\""));
        assert!(json.contains("\"line\":3"));
        assert!(json.contains("\"column\":7"));
        assert!(json.contains("\"message\":\"Expected ']' but found ')'\""));
    }

    #[test]
    fn test_error_report_to_json_null_values() {
        let io_err = io::Error::new(io::ErrorKind::Other, "disk \"on fire\"");
        let json = BrackError::io(Path::new("f"), &io_err)
            .to_report()
            .to_json()
            .unwrap();

        assert!(json.contains("\"line\":null"));
        assert!(json.contains("\"column\":null"));
        assert!(json.contains("\\\"on fire\\\""));
    }
}
