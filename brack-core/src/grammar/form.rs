//! The four bracket forms and their delimiters.

/// A bracket-delimited value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    /// `[ ... ]`
    List,
    /// `( operator ... )`
    Call,
    /// `{ ... }`
    Block,
    /// `< ... >`
    Meta,
}

impl Form {
    /// The form introduced by an opening delimiter, if any.
    pub fn from_open(c: char) -> Option<Form> {
        match c {
            '[' => Some(Form::List),
            '(' => Some(Form::Call),
            '{' => Some(Form::Block),
            '<' => Some(Form::Meta),
            _ => None,
        }
    }

    pub fn open(&self) -> char {
        match self {
            Form::List => '[',
            Form::Call => '(',
            Form::Block => '{',
            Form::Meta => '<',
        }
    }

    pub fn close(&self) -> char {
        match self {
            Form::List => ']',
            Form::Call => ')',
            Form::Block => '}',
            Form::Meta => '>',
        }
    }

    /// Minimum number of contained values.
    pub fn min_values(&self) -> usize {
        match self {
            Form::Call => 1,
            Form::List | Form::Block | Form::Meta => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Form::List => "list",
            Form::Call => "call",
            Form::Block => "block",
            Form::Meta => "meta",
        }
    }
}

/// `]`, `)`, `}` or `>`
pub fn is_closing_bracket(c: char) -> bool {
    matches!(c, ']' | ')' | '}' | '>')
}

/// Any of `[](){}<>`
pub fn is_bracket(c: char) -> bool {
    Form::from_open(c).is_some() || is_closing_bracket(c)
}
