//! Attribute value types.
//!
//! This module defines the runtime representation of attribute values, which
//! is what entities hand out through [`Attributes::get_attr`](super::Attributes::get_attr)
//! and what [`AttrFilter`](super::AttrFilter) compares against.

use serde::{Deserialize, Serialize};

use super::AttributeKind;
use crate::model::{Color, Size};

/// Runtime representation of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrValue {
    /// Free text (e.g., a product `name`)
    Text(String),

    /// Member of a closed set, carried by its canonical name (e.g., `color` = "Green")
    Enum(String),
}

impl AttrValue {
    /// The kind this value belongs to, used for type-level matching against a schema.
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttrValue::Text(_) => AttributeKind::Text,
            AttrValue::Enum(_) => AttributeKind::Enum,
        }
    }
}

impl From<Color> for AttrValue {
    fn from(color: Color) -> Self {
        AttrValue::Enum(color.as_str().to_string())
    }
}

impl From<Size> for AttrValue {
    fn from(size: Size) -> Self {
        AttrValue::Enum(size.as_str().to_string())
    }
}
