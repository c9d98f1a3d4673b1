#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    line: Option<usize>,
    token: Option<usize>,
}

#[macro_export]
macro_rules! error {
    ($kind:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$kind)
    };
    ($kind:ident; $($arg:expr),+ $(,)?) => {
        $crate::lang::Error::new($crate::lang::ErrorKind::$kind($($arg.into()),+))
    };
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            kind,
            line: None,
            token: None,
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn token(&self) -> Option<usize> {
        self.token
    }

    /// Annotate with a zero-based line and token index. The innermost
    /// annotation wins; later calls on an already-annotated error are no-ops.
    pub fn in_line(mut self, line: usize, token: usize) -> Error {
        if self.line.is_none() {
            self.line = Some(line);
            self.token = Some(token);
        }
        self
    }

    pub fn is_stop(&self) -> bool {
        self.kind == ErrorKind::ProgramEndedManually
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    UnexpectedToken(String, String),
    BadFactor(String),
    BadStatement(String),
    DelegateNotSet,
    UninitializedSymbol(String),
    UnknownLabel(String),
    BadMath(String, String),
    BadComparison(String, String),
    Overflow(String),
    CannotSubscript,
    BadSubscript,
    BadFunctionArgument(String, String),
    CannotReturn,
    CannotIterate,
    BadIndex,
    BadRangeBound,
    UnknownSymbol(String),
    ProgramEndedManually,
    Internal(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(line) = self.line {
            write!(f, " IN LINE {}", line + 1)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;
        match self {
            UnexpectedToken(expected, actual) => {
                write!(f, "EXPECTED {}; FOUND {}", expected, actual)
            }
            BadFactor(text) => write!(f, "BAD FACTOR: {}", text),
            BadStatement(reason) => write!(f, "BAD STATEMENT: {}", reason),
            DelegateNotSet => write!(f, "DELEGATE NOT SET"),
            UninitializedSymbol(name) => write!(f, "UNINITIALIZED SYMBOL: {}", name),
            UnknownLabel(label) => write!(f, "UNKNOWN LABEL: {}", label),
            BadMath(op, reason) => write!(f, "BAD MATH IN {}: {}", op, reason),
            BadComparison(what, reason) => write!(f, "BAD COMPARISON {}: {}", what, reason),
            Overflow(op) => write!(f, "INTEGER OVERFLOW IN {}", op),
            CannotSubscript => write!(f, "CANNOT SUBSCRIPT"),
            BadSubscript => write!(f, "SUBSCRIPT OUT OF RANGE"),
            BadFunctionArgument(name, reason) => {
                write!(f, "BAD ARGUMENT TO {}: {}", name, reason)
            }
            CannotReturn => write!(f, "RETURN WITHOUT GOSUB"),
            CannotIterate => write!(f, "NEXT WITHOUT FOR"),
            BadIndex => write!(f, "BAD LOOP INDEX"),
            BadRangeBound => write!(f, "BAD RANGE BOUND"),
            UnknownSymbol(name) => write!(f, "UNKNOWN SYMBOL: {}", name),
            ProgramEndedManually => write!(f, "PROGRAM ENDED"),
            Internal(reason) => write!(f, "INTERNAL ERROR: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
