//! 构建错误：全部属于调用方可恢复的 “invalid input”，上层应映射为 400。

/// `Result` 别名。
pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("no data supplied")]
    NoData,
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("invalid column identifier `{0}`")]
    InvalidIdentifier(String),
    #[error("field `{field}` expects {expected}")]
    InvalidValue {
        field: String,
        expected: &'static str,
    },
    #[error("min employees ({min}) cannot exceed max employees ({max})")]
    EmployeeRange { min: i64, max: i64 },
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("fragment starts at ${found} but next placeholder is ${expected}")]
    PlaceholderMismatch { expected: usize, found: usize },
    #[error("{count} placeholders starting at ${start} overflow the position range")]
    PlaceholderOverflow { start: usize, count: usize },
}

impl BuildError {
    pub(crate) fn invalid_value(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidValue {
            field: field.into(),
            expected,
        }
    }
}
