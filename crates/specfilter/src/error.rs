use thiserror::Error;

use crate::attributes::AttributeKind;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing item: a specification was evaluated against no item")]
    MissingItem,

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Attribute is not filterable: {0}")]
    NotFilterable(String),

    #[error("Attribute '{attr}' holds {expected:?} values, got {found:?}")]
    KindMismatch {
        attr: String,
        expected: AttributeKind,
        found: AttributeKind,
    },

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;
