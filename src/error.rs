use thiserror::Error;

/// Errors raised at the editing boundary (session edits, parameter files,
/// CLI flags, the configurator server). Rendering itself never fails.
#[derive(Debug, Error)]
pub enum BubbleError {
    /// A pixel field was outside its allowed range.
    #[error("{field} must be between {min} and {max}px, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    /// A color string would not survive as a single CSS declaration value.
    #[error("invalid color for {field}: {value:?}")]
    InvalidColor { field: &'static str, value: String },
    #[error("unknown triangle position: {0} (expected top, bottom, left or right)")]
    UnknownPosition(String),
    #[error("unknown kind: {0} (expected bubble or tooltip)")]
    UnknownKind(String),
    /// Malformed parameter file or request body.
    #[error("invalid parameters: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, BubbleError>;

/// Shorthand constructors.
impl BubbleError {
    pub fn out_of_range(field: &'static str, value: i32, range: (i32, i32)) -> Self {
        Self::OutOfRange {
            field,
            value,
            min: range.0,
            max: range.1,
        }
    }

    pub fn invalid_color(field: &'static str, value: &str) -> Self {
        Self::InvalidColor {
            field,
            value: value.to_string(),
        }
    }

    pub fn server(msg: impl std::fmt::Display) -> Self {
        Self::Server(msg.to_string())
    }
}
