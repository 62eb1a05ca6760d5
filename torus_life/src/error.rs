// error.rs - Error types for the automaton core

use std::error::Error;
use std::fmt;

/// Invariant violations raised by the grid.
///
/// Neither variant is an expected runtime condition: wraparound arithmetic keeps
/// every internal coordinate in range, and the rule engine always produces a
/// generation of the grid's own size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    OutOfRange { x: usize, y: usize, width: usize, height: usize },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::OutOfRange { x, y, width, height } => {
                write!(f, "cell ({x}, {y}) is outside the {width}x{height} grid")
            }
            LifeError::SizeMismatch { expected, actual } => write!(
                f,
                "generation has {actual} cells but the grid holds {expected}"
            ),
        }
    }
}

impl Error for LifeError {}

/// Rejected `LifeConfig` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    ZeroInterval,
    TooManyCells { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "grid_width must be positive"),
            ConfigError::ZeroHeight => write!(f, "grid_height must be positive"),
            ConfigError::ZeroInterval => write!(f, "update_interval_millis must be positive"),
            ConfigError::TooManyCells { width, height } => {
                write!(f, "grid_width * grid_height ({width} * {height}) overflows usize")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = LifeError::OutOfRange { x: 50, y: 2, width: 48, height: 35 };
        assert_eq!(err.to_string(), "cell (50, 2) is outside the 48x35 grid");

        let err = LifeError::SizeMismatch { expected: 1680, actual: 3 };
        assert_eq!(err.to_string(), "generation has 3 cells but the grid holds 1680");
    }
}
