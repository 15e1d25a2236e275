#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("node geometry field `{field}` is not finite")]
    NonFinite { field: &'static str },

    #[error("geometry option `{option}` must be a finite, non-negative number (got {value})")]
    InvalidOption { option: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
