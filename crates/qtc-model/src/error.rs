use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },
}
