//! 测试辅助工具
//!
//! 提供语法校验测试的辅助函数

#![allow(dead_code)]

use brack_core::{validate_text, ParseError, ParseErrorKind};

/// 断言文本合法
pub fn assert_valid(text: &str) {
    if let Err(e) = validate_text(text) {
        panic!("expected {text:?} to be valid, got: {e}");
    }
}

/// 断言文本非法，并返回错误
pub fn expect_error(text: &str) -> ParseError {
    match validate_text(text) {
        Ok(()) => panic!("expected {text:?} to be rejected"),
        Err(e) => e,
    }
}

/// 断言错误的位置与消息片段
pub fn assert_error_at(text: &str, line: usize, column: usize, fragment: &str) -> ParseError {
    let err = expect_error(text);
    assert_eq!(
        (err.line, err.column),
        (line, column),
        "wrong position for {text:?}: {err}"
    );
    assert!(
        err.message.contains(fragment),
        "message {:?} for {text:?} does not contain {fragment:?}",
        err.message
    );
    err
}

/// 断言错误类型
pub fn assert_kind(text: &str, kind: ParseErrorKind) {
    let err = expect_error(text);
    assert_eq!(err.kind, kind, "wrong kind for {text:?}: {err}");
}

/// 文本末尾的 (line, column)
pub fn end_position(text: &str) -> (usize, usize) {
    let line = 1 + text.matches('\n').count();
    let tail = match text.rfind('\n') {
        Some(i) => &text[i + 1..],
        None => text,
    };
    (line, tail.chars().count() + 1)
}
