use crate::error::{ArithmeticError, ParseError};

#[derive(Debug)]
/// Represents every failure that evaluation can report.
///
/// Evaluation goes through two phases that can fail for different reasons:
/// turning text into tokens and reducing those tokens to a value. This enum
/// joins both kinds behind one type so callers can match on the kind of
/// failure without downcasting.
pub enum EvalError {
    /// The input could not be tokenized or parsed.
    Parse(ParseError),
    /// The expression is well formed but its computation failed.
    Arithmetic(ArithmeticError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Arithmetic(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ArithmeticError> for EvalError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}
