#[derive(Debug)]
/// Represents arithmetic failures raised while computing a result.
pub enum ArithmeticError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the offending division operator.
        position: usize,
    },
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}
