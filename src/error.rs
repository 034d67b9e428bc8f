//! Crate-level error types.

use std::fmt;

/// Errors produced by the flypath crate.
#[derive(Debug)]
pub enum FlypathError {
    /// A keyframe set needs at least two points to define a path.
    TooFewKeyframes {
        /// Number of keyframes that were supplied.
        count: usize,
    },
    /// An option value is outside its accepted range.
    InvalidOption(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Keyframe file parsing failure.
    KeyframeParse(String),
}

impl fmt::Display for FlypathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewKeyframes { count } => write!(
                f,
                "keyframe set needs at least 2 keyframes, got {count}"
            ),
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::KeyframeParse(msg) => {
                write!(f, "keyframe parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for FlypathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FlypathError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_few_keyframes_message_names_count() {
        let err = FlypathError::TooFewKeyframes { count: 1 };
        assert_eq!(
            err.to_string(),
            "keyframe set needs at least 2 keyframes, got 1"
        );
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err: FlypathError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(FlypathError::InvalidOption("x".to_owned())
            .source()
            .is_none());
    }
}
