use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    /// Attach the program line the error happened in. An error that
    /// already carries a line number keeps it.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
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
    UnknownCommand,
    UndefinedVariable,
    ProtectedVariable,
    InvalidNumber,
    InvalidNumberExpression,
    MalformedString,
    InvalidStringExpression,
    LineNotFound,
    ArithmeticError,
    FileNotFound,
    TransferError,
    LineBufferOverflow,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        use ErrorCode::*;
        match self {
            SyntaxError => "Syntax error!",
            UnknownCommand => "Unknown command!",
            UndefinedVariable => "Variable not found!",
            ProtectedVariable => "Cannot change builtin!",
            InvalidNumber => "Invalid number!",
            InvalidNumberExpression => "Invalid number expression!",
            MalformedString => "Malformed string argument!",
            InvalidStringExpression => "String expected!",
            LineNotFound => "Line not found!",
            ArithmeticError => "Division by zero!",
            FileNotFound => "File not found!",
            TransferError => "Transfer error!",
            LineBufferOverflow => "Line too long!",
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if let Some(line_number) = self.line_number {
            write!(f, "{}: ", line_number)?;
        }
        write!(f, "{}", self.code.as_str())?;
        if !self.message.is_empty() {
            write!(f, " ({})", self.message)?;
        }
        Ok(())
    }
}
