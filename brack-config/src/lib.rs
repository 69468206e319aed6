//! Brack Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Brack crates.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Configuration for validation limits
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LimitConfig {
    /// Maximum bracket nesting depth (`None` = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Validation phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Cursor,
    Grammar,
    Api,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Cursor => "cursor",
            Phase::Grammar => "grammar",
            Phase::Api => "api",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("brack::{}", self.as_str())
    }
}

/// 日志级别
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 完全静默
    Silent,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "off" => Ok(LogLevel::Silent),
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Silent => "silent",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// How validation results are reported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<path>: OK` / `<path>: Line L, column C: message`
    #[default]
    Text,
    /// One JSON object per file
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Per-phase log level overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogTargets {
    pub cursor: Option<LogLevel>,
    pub grammar: Option<LogLevel>,
    pub api: Option<LogLevel>,
    pub cli: Option<LogLevel>,
}

/// `brack.json` 项目配置文件
///
/// 所有字段均可省略，省略时使用默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BrackConfig {
    /// 全局日志级别
    pub log_level: Option<LogLevel>,
    /// 分阶段日志级别
    pub log_targets: LogTargets,
    /// 输出格式
    pub format: Option<OutputFormat>,
    /// 出错时是否打印源码上下文
    pub show_context: Option<bool>,
    /// 校验限制
    pub limits: LimitConfig,
}

impl BrackConfig {
    /// Parse a configuration document from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
