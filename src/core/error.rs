use std::fmt;

/// The editing operation that tripped an invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp {
    Insert,
    DeleteBackward,
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Insert => write!(f, "insert"),
            EditOp::DeleteBackward => write!(f, "delete"),
        }
    }
}

/// Errors raised by the buffer/caret model.
///
/// Every variant is a logic bug in the caller, never a user-facing condition,
/// so frontends stop the session when they see one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("tried to {op} out of range: caret {caret} is past buffer length {len}")]
    OutOfRange { op: EditOp, caret: usize, len: usize },
}
