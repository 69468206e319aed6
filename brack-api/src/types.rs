//! API 类型定义
//!
//! 校验的输入输出类型。

use crate::error::BrackError;
use brack_core::CheckSummary;
use std::path::PathBuf;

/// 单个文件的校验结果
#[derive(Debug, Clone, PartialEq)]
pub struct FileOutcome {
    /// 文件路径
    pub path: PathBuf,
    /// 成功时为统计信息，失败时为第一个错误
    pub result: Result<CheckSummary, BrackError>,
    /// 读取成功时保留源码，用于打印错误上下文
    pub source: Option<String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
