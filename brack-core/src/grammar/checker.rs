use super::form::{is_bracket, is_closing_bracket, Form};
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use brack_config::LimitConfig;
use tracing::{debug, trace};

/// 校验选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// 最大括号嵌套深度（`None` 表示不限制）
    pub max_depth: Option<usize>,
}

impl CheckOptions {
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}

impl From<&LimitConfig> for CheckOptions {
    fn from(limits: &LimitConfig) -> Self {
        Self {
            max_depth: limits.max_depth,
        }
    }
}

/// 一次成功校验的统计信息（不保留任何语法树）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// 顶层值的数量
    pub top_level_values: usize,
    /// 出现过的最大括号嵌套深度
    pub max_depth: usize,
    /// 消耗的字节数（成功时等于输入长度）
    pub bytes: usize,
}

/// Checker for Brack documents.
///
/// Fails fast: the first violation aborts the whole check. Open bracket forms
/// live on an explicit stack, so nesting depth never grows the call stack.
pub struct GrammarChecker<'a> {
    cursor: Cursor<'a>,
    options: CheckOptions,
    deepest: usize,
}

impl<'a> GrammarChecker<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, CheckOptions::default())
    }

    pub fn with_options(text: &'a str, options: CheckOptions) -> Self {
        Self {
            cursor: Cursor::new(text),
            options,
            deepest: 0,
        }
    }

    /// 校验整个文档
    pub fn check(&mut self) -> ParseResult<CheckSummary> {
        debug!(
            target: "brack::grammar",
            bytes = self.cursor.text().len(),
            max_depth = ?self.options.max_depth,
            "Starting grammar check"
        );

        match self.check_document() {
            Ok(top_level_values) => {
                let summary = CheckSummary {
                    top_level_values,
                    max_depth: self.deepest,
                    bytes: self.cursor.index(),
                };
                debug!(target: "brack::grammar", ?summary, "Grammar check passed");
                Ok(summary)
            }
            Err(error) => {
                debug!(
                    target: "brack::grammar",
                    kind = error.kind.as_str(),
                    line = error.line,
                    column = error.column,
                    "Grammar check failed: {}",
                    error.message
                );
                Err(error)
            }
        }
    }

    /// 当前游标
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// 尚未消费的文本（失败后可用于定位）
    pub fn remaining(&self) -> &'a str {
        self.cursor.remaining()
    }

    fn check_document(&mut self) -> ParseResult<usize> {
        let mut values = 0;
        self.consume_spacing();
        while !self.cursor.at_end() {
            self.parse_value()?;
            values += 1;
            self.consume_spacing();
        }
        Ok(values)
    }

    /// 跳过空白和行注释，二者可以任意交错
    fn consume_spacing(&mut self) {
        loop {
            let before = self.cursor.index();

            self.cursor.consume_while(char::is_whitespace);

            if self.at_comment() {
                self.cursor.advance(2);
                self.cursor.consume_while(|c| c != '\n' && c != '\r');
                // 注释的结束换行也属于注释
                if matches!(self.cursor.current(), Some('\n' | '\r')) {
                    self.cursor.bump();
                }
            }

            if self.cursor.index() == before {
                break;
            }
        }
    }

    fn at_comment(&self) -> bool {
        self.cursor.current() == Some('/') && self.cursor.peek(1) == Some('/')
    }

    /// 读取一个完整的值（原子或括号形式）
    fn parse_value(&mut self) -> ParseResult<()> {
        let mut open: Vec<Form> = Vec::new();

        'value: loop {
            if let Some(form) = self.begin_value(open.len())? {
                self.consume_spacing();
                open.push(form);
                self.deepest = self.deepest.max(open.len());

                if form.min_values() > 0 {
                    if self.cursor.current() == Some(form.close()) {
                        return Err(ParseError::empty_call(self.cursor.position()));
                    }
                    // operator
                    continue 'value;
                }
            }

            // 当前值已读完：关闭所有已经结束的形式
            while let Some(&form) = open.last() {
                self.consume_spacing();
                match self.cursor.current() {
                    Some(c) if c == form.close() => {
                        self.cursor.expect(c)?;
                        open.pop();
                    }
                    // 输入结束时由 expect 报告缺失的闭括号
                    None => return self.cursor.expect(form.close()),
                    Some(_) => continue 'value,
                }
            }
            return Ok(());
        }
    }

    /// 读取值的开头：原子整体读完，开括号只消费开括号本身
    fn begin_value(&mut self, depth: usize) -> ParseResult<Option<Form>> {
        let position = self.cursor.position();
        let Some(c) = self.cursor.current() else {
            return Err(ParseError::unexpected_eof(position));
        };

        trace!(
            target: "brack::grammar",
            line = position.line,
            column = position.column,
            lookahead = ?c,
            depth,
            "parse value"
        );

        match Form::from_open(c) {
            Some(form) => {
                self.enter(form, depth + 1)?;
                self.cursor.expect(form.open())?;
                Ok(Some(form))
            }
            None if is_closing_bracket(c) => Err(ParseError::unexpected_closing(c, position)),
            None => self.parse_atom().map(|()| None),
        }
    }

    fn enter(&self, form: Form, depth: usize) -> ParseResult<()> {
        if let Some(limit) = self.options.max_depth {
            if depth > limit {
                trace!(target: "brack::grammar", form = form.name(), depth, limit, "nesting too deep");
                return Err(ParseError::nesting_too_deep(limit, self.cursor.position()));
            }
        }
        Ok(())
    }

    /// 原子：不含空白、括号、且不以 `//` 开头的最长字符序列
    fn parse_atom(&mut self) -> ParseResult<()> {
        let start = self.cursor.index();
        while let Some(c) = self.cursor.current() {
            if c.is_whitespace() || is_bracket(c) || self.at_comment() {
                break;
            }
            self.cursor.bump();
        }

        if self.cursor.index() == start {
            return Err(ParseError::empty_atom(self.cursor.position()));
        }
        Ok(())
    }
}
