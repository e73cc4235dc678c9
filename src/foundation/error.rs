/// Convenience result type used across displaywall.
pub type DisplayResult<T> = Result<T, DisplayError>;

/// Coarse fault category, stable across position tagging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// No display surface found where one was requested.
    Resolution,
    /// A parameter failed its type or range check.
    Validation,
    /// A resolution or grid bound was exceeded.
    Capacity,
    /// A stored line or token failed to parse.
    Encoding,
    /// Anything raised by a dependency or IO.
    Other,
}

/// Top-level error taxonomy used by display APIs.
#[derive(thiserror::Error, Debug)]
pub enum DisplayError {
    /// No surface at the location a binding points to.
    #[error("resolution error: {0}")]
    Resolution(String),

    /// Invalid caller-provided parameter.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resolution or buffer does not fit the target.
    #[error("capacity error: {0}")]
    Capacity(String),

    /// Malformed command line, paint token, color or mode string.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A fault raised on behalf of a script call, tagged with the caller's line.
    #[error("line {line}: {source}")]
    At {
        /// Script line the failing call was made from.
        line: u32,
        /// The underlying fault.
        source: Box<DisplayError>,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DisplayError {
    /// Build a [`DisplayError::Resolution`] value.
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    /// Build a [`DisplayError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DisplayError::Capacity`] value.
    pub fn capacity(msg: impl Into<String>) -> Self {
        Self::Capacity(msg.into())
    }

    /// Build a [`DisplayError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Tag this fault with the script line it surfaced at.
    ///
    /// Already-tagged faults keep their original line.
    pub fn at(self, line: u32) -> Self {
        match self {
            Self::At { .. } => self,
            other => Self::At {
                line,
                source: Box::new(other),
            },
        }
    }

    /// Category of this fault, looking through position tags.
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Resolution(_) => FaultKind::Resolution,
            Self::Validation(_) => FaultKind::Validation,
            Self::Capacity(_) => FaultKind::Capacity,
            Self::Encoding(_) => FaultKind::Encoding,
            Self::At { source, .. } => source.kind(),
            Self::Other(_) => FaultKind::Other,
        }
    }

    /// Script line this fault is tagged with, if any.
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::At { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
