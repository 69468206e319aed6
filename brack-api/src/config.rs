//! API 层配置
//!
//! 校验配置 CheckConfig，由调用方显式传入

use brack_config::LimitConfig;
use brack_core::CheckOptions;

/// Validation configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    /// Validation limits
    pub limits: LimitConfig,
    /// Whether front ends should print source context around errors
    pub show_context: bool,
}

impl CheckConfig {
    /// Options handed to the grammar checker
    pub fn options(&self) -> CheckOptions {
        CheckOptions::from(&self.limits)
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.limits.max_depth = max_depth;
        self
    }
}
