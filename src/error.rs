use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    #[error("value at index {index} is not a finite number")]
    InvalidValue { index: usize },
    #[error("list must contain at least one value")]
    EmptyInput,
}
