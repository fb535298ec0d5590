use std::fmt;

/// Failure of a state-stack operation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StateError {
    /// The operation needs a state that can be removed, but only the root remains.
    EmptyStack,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::EmptyStack => write!(f, "state stack has no state above the root"),
        }
    }
}

impl std::error::Error for StateError {}

/// Failure of a drawing helper.
///
/// Drawing errors are cosmetic: callers log them and carry on with the frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    InvalidArgument { what: String },
}

impl DrawError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        Self::InvalidArgument { what: what.into() }
    }
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::InvalidArgument { what } => write!(f, "invalid draw argument: {what}"),
        }
    }
}

impl std::error::Error for DrawError {}
