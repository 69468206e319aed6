//! 源代码位置追踪
//!
//! - index: 字节偏移，0-based，UTF-8编码
//! - line/column: 人类可读的错误显示（1-based，列按 Unicode 码点计数）

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// 字节偏移，0-based
    pub index: usize,
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based
    pub column: usize,
}

impl Position {
    /// 创建新位置
    pub fn new(index: usize, line: usize, column: usize) -> Self {
        Self {
            index,
            line,
            column,
        }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self {
            index: 0,
            line: 1,
            column: 1,
        }
    }

    /// 前进一个字符
    ///
    /// 换行符使行号加一并把列号重置为 1，其余字符（包括 `\r`）只增加列号。
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.index += c.len_utf8();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}
