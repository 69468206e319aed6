//! CLI 配置
//!
//! 包含 CLI 特有的配置：日志配置和校验配置的组合。
//! 优先级：命令行参数 > 配置文件 > 默认值

use crate::args::Args;
use brack_api::CheckConfig;
use brack_config::{BrackConfig, LogLevel, LogTargets, OutputFormat, Phase};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// 未指定 `--config` 时自动读取的文件
pub const DEFAULT_CONFIG_FILE: &str = "brack.json";

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub global: LevelFilter,
    pub cursor: Option<LevelFilter>,
    pub grammar: Option<LevelFilter>,
    pub api: Option<LevelFilter>,
    pub cli: Option<LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LevelFilter::WARN,
            cursor: None,
            grammar: None,
            api: None,
            cli: None,
        }
    }
}

impl LogConfig {
    pub fn from_levels(global: LogLevel, targets: &LogTargets) -> Self {
        Self {
            global: to_filter(global),
            cursor: targets.cursor.map(to_filter),
            grammar: targets.grammar.map(to_filter),
            api: targets.api.map(to_filter),
            cli: targets.cli.map(to_filter),
        }
    }

    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        match phase {
            Phase::Cursor => self.cursor.unwrap_or(self.global),
            Phase::Grammar => self.grammar.unwrap_or(self.global),
            Phase::Api => self.api.unwrap_or(self.global),
            Phase::Cli => self.cli.unwrap_or(self.global),
        }
    }
}

fn to_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Silent => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// 合并后的运行配置
#[derive(Debug, Clone)]
pub struct Settings {
    pub log: LogConfig,
    pub format: OutputFormat,
    pub check: CheckConfig,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(args: &Args, file: &BrackConfig) -> Self {
        let level = args.log_level.or(file.log_level).unwrap_or_default();
        let check = CheckConfig {
            limits: file.limits.clone(),
            show_context: args.context || file.show_context.unwrap_or(false),
        }
        .with_max_depth(args.max_depth.or(file.limits.max_depth));

        Self {
            log: LogConfig::from_levels(level, &file.log_targets),
            format: args.format.or(file.format).unwrap_or_default(),
            check,
            quiet: args.quiet,
        }
    }
}

/// 读取配置文件
///
/// 显式指定的文件必须存在；未指定时仅在 `./brack.json` 存在时读取。
pub fn load_config_file(explicit: Option<&Path>) -> Result<BrackConfig, String> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(BrackConfig::default());
            }
            default
        }
    };

    let content = std::fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read config '{}': {}", path.display(), e))?;

    BrackConfig::from_json(&content)
        .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))
}
