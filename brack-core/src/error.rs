//! 语法错误类型
//!
//! 校验器在第一次违反语法规则时立即停止，错误携带 1-based 的行列号与可读消息。

use crate::cursor::Position;
use thiserror::Error;

/// 错误类型
///
/// 分类只影响消息文本，不影响控制流。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// 缺失或不匹配的分隔符、多余的右括号、空调用
    Structural,
    /// 需要一个值但输入已结束
    UnexpectedEof,
    /// 长度为零的原子
    EmptyAtom,
    /// 括号嵌套超过配置的上限
    NestingTooDeep,
}

impl ParseErrorKind {
    /// 稳定的名称，用于结构化报告
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::Structural => "StructuralError",
            ParseErrorKind::UnexpectedEof => "UnexpectedEOF",
            ParseErrorKind::EmptyAtom => "EmptyAtom",
            ParseErrorKind::NestingTooDeep => "NestingTooDeep",
        }
    }
}

/// 语法错误，包含位置信息
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}, column {column}: {message}")]
pub struct ParseError {
    /// 错误类型
    pub kind: ParseErrorKind,
    /// 详细错误消息
    pub message: String,
    /// 行号（1-based）
    pub line: usize,
    /// 列号（1-based）
    pub column: usize,
}

impl ParseError {
    /// 在指定行列创建错误
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    /// 在指定位置创建错误
    pub fn at(kind: ParseErrorKind, message: impl Into<String>, position: Position) -> Self {
        Self::new(kind, message, position.line, position.column)
    }

    /// `expect` 失败：期望某个字符，但遇到了其他字符或输入结束
    pub fn expected(expected: char, found: Option<char>, position: Position) -> Self {
        let message = match found {
            Some(found) => format!("Expected '{expected}' but found '{found}'"),
            None => format!("Expected '{expected}' before end of input"),
        };
        Self::at(ParseErrorKind::Structural, message, position)
    }

    /// 值的位置上出现了右括号
    pub fn unexpected_closing(bracket: char, position: Position) -> Self {
        Self::at(
            ParseErrorKind::Structural,
            format!("Unexpected closing bracket '{bracket}'"),
            position,
        )
    }

    /// `()`：调用至少需要一个值
    pub fn empty_call(position: Position) -> Self {
        Self::at(
            ParseErrorKind::Structural,
            "Function call must contain at least one value",
            position,
        )
    }

    pub fn unexpected_eof(position: Position) -> Self {
        Self::at(
            ParseErrorKind::UnexpectedEof,
            "Unexpected end of input while reading a value",
            position,
        )
    }

    pub fn empty_atom(position: Position) -> Self {
        Self::at(ParseErrorKind::EmptyAtom, "Expected an atom", position)
    }

    pub fn nesting_too_deep(limit: usize, position: Position) -> Self {
        Self::at(
            ParseErrorKind::NestingTooDeep,
            format!("Maximum nesting depth of {limit} exceeded"),
            position,
        )
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 解析结果类型
pub type ParseResult<T> = Result<T, ParseError>;
