//! Wave construction errors
//!
//! Only malformed input is an error. Ship destruction, an empty asteroid
//! field and projectiles leaving the screen are ordinary state transitions
//! and are reported through [`crate::sim::WavePhase`].

use std::fmt;

/// Errors raised while building a wave from level data and settings
#[derive(Debug)]
pub enum WaveError {
    /// Level or settings JSON could not be parsed (missing field, unknown
    /// size tier, non-numeric coordinate, ...)
    Parse(serde_json::Error),

    /// A level value that must be finite was NaN or infinite
    NonFinite {
        /// Path of the offending field, e.g. `asteroids[2].direction`
        field: String,
    },

    /// A configuration value is outside its valid range
    InvalidSetting {
        name: &'static str,
        value: f32,
        expected: &'static str,
    },

    /// Level or settings file could not be read
    Io(std::io::Error),
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaveError::Parse(err) => write!(f, "malformed level data: {}", err),
            WaveError::NonFinite { field } => {
                write!(f, "level field '{}' is not a finite number", field)
            }
            WaveError::InvalidSetting {
                name,
                value,
                expected,
            } => write!(f, "setting '{}' = {} must be {}", name, value, expected),
            WaveError::Io(err) => write!(f, "failed to read input: {}", err),
        }
    }
}

impl std::error::Error for WaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WaveError::Parse(err) => Some(err),
            WaveError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WaveError {
    fn from(err: serde_json::Error) -> Self {
        WaveError::Parse(err)
    }
}

impl From<std::io::Error> for WaveError {
    fn from(err: std::io::Error) -> Self {
        WaveError::Io(err)
    }
}

/// Convenience alias: a `Result` using `WaveError` as the error type.
pub type WaveResult<T> = Result<T, WaveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = WaveError::NonFinite {
            field: "ship.angle".to_string(),
        };
        assert!(err.to_string().contains("ship.angle"));

        let err = WaveError::InvalidSetting {
            name: "ship_radius",
            value: -1.0,
            expected: ">= 0",
        };
        let text = err.to_string();
        assert!(text.contains("ship_radius"));
        assert!(text.contains("-1"));
    }

    #[test]
    fn test_parse_error_converts() {
        let err: WaveError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, WaveError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
