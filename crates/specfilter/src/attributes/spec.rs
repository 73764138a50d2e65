//! Attribute schemas and registries.
//!
//! An entity declares which attributes it exposes, what kind of value each one
//! holds, and whether it may be filtered on. [`AttrFilter::checked`](super::AttrFilter::checked)
//! validates against this declaration; nothing else in the crate consults it.

use serde::{Deserialize, Serialize};

use super::AttrValue;

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    /// Free text (e.g., `name`)
    Text,

    /// Enum with a fixed set of valid values (e.g., `color`, `size`)
    Enum,
}

/// Specification for a single attribute.
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// The attribute name used for lookups (e.g., "color")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Whether this attribute can be used in checked filters
    pub filterable: bool,
}

impl AttributeSpec {
    /// Create a new attribute spec, not filterable.
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            filterable: false,
        }
    }

    /// Set the filterable flag.
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}

/// Name-addressed attribute access for an entity type.
///
/// Implementing this is all an entity needs to be filtered by [`AttrFilter`](super::AttrFilter).
pub trait Attributes {
    /// The registry of attributes this entity exposes.
    fn schema() -> &'static [AttributeSpec];

    /// Current value of the named attribute, or `None` if the entity has no such attribute.
    fn get_attr(&self, name: &str) -> Option<AttrValue>;
}

/// Registry of product attributes.
pub const PRODUCT_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new("name", AttributeKind::Text).filterable(),
    AttributeSpec::new("color", AttributeKind::Enum).filterable(),
    AttributeSpec::new("size", AttributeKind::Enum).filterable(),
];

/// Look up an attribute spec by name.
pub fn get_spec<'a>(schema: &'a [AttributeSpec], name: &str) -> Option<&'a AttributeSpec> {
    schema.iter().find(|spec| spec.name == name)
}

/// Get all filterable attribute names.
pub fn filterable_attrs(schema: &[AttributeSpec]) -> impl Iterator<Item = &'static str> + '_ {
    schema
        .iter()
        .filter(|spec| spec.filterable)
        .map(|spec| spec.name)
}
