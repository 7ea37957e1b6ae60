use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("state value {0} is outside the 8-bit channel")]
    StateValueOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, ModelError>;
