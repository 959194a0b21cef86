//! Construction-time errors.
//!
//! Nothing the engine does at runtime can fail; a bad command is simply a
//! no-op. The only way to get an error is to build a grid, shape or config
//! that can never be played.

/// Errors raised while building a grid, a shape or a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid must be between 1x1 and 255x255 cells (got {cols}x{rows})")]
    GridSize { cols: usize, rows: usize },

    #[error("malformed shape: {0}")]
    MalformedShape(String),

    #[error("lines per level must be greater than zero")]
    LinesPerLevel,

    #[error("starting grid already has {count} full row(s)")]
    FullRows { count: usize },

    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_display() {
        let err = ConfigError::GridSize { cols: 0, rows: 20 };
        assert_eq!(
            err.to_string(),
            "grid must be between 1x1 and 255x255 cells (got 0x20)"
        );
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "BLOCKFALL_SEED",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value \"abc\" for BLOCKFALL_SEED");
    }
}
