use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Option<Column>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Option<Column> {
        self.column
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    /// Errors raised in direct mode carry no line number.
    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn in_line_number(self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: Column) -> Error {
        debug_assert!(self.column.is_none());
        Error {
            column: Some(column),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError,
    UnknownStatement,
    UnknownFunction,
    BadArgumentCount,
    VariableNotFound,
    UndefinedLine,
    ProgramNotRunning,
    ReturnWithoutGosub,
    NextWithoutFor,
    LoopWithoutDo,
    InfiniteLoop,
    DivisionByZero,
    MalformedNumber,
    OutOfMemory,
    FileNotFound,
    DirectStatementInFile,
    IoError,
    InternalError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            SyntaxError => "Syntax error",
            UnknownStatement => "Unknown statement",
            UnknownFunction => "No such function",
            BadArgumentCount => "Bad argument count in call to",
            VariableNotFound => "Variable not found",
            UndefinedLine => "Line not found",
            ProgramNotRunning => "Program not running",
            ReturnWithoutGosub => "RETURN without GOSUB",
            NextWithoutFor => "NEXT without FOR",
            LoopWithoutDo => "LOOP without DO",
            InfiniteLoop => "Infinite loop",
            DivisionByZero => "Division by zero",
            MalformedNumber => "Malformed number",
            OutOfMemory => "Out of memory",
            FileNotFound => "File not found",
            DirectStatementInFile => "Direct statement in file",
            IoError => "I/O error",
            InternalError => "Internal error",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if !self.message.is_empty() {
            suffix.push_str(&format!(": {}", self.message));
        }
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" in line {}", line_number));
        }
        if let Some(column) = self.column {
            suffix.push_str(&format!(", column {}", column));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Error {
        match error.kind() {
            std::io::ErrorKind::NotFound => error!(FileNotFound; error.to_string()),
            _ => error!(IoError; error.to_string()),
        }
    }
}
