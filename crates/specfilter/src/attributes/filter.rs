//! Attribute filtering.
//!
//! `AttrFilter` is a leaf specification addressed by attribute name, so one
//! type covers every attribute of every [`Attributes`] entity.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{get_spec, AttrValue, Attributes};
use crate::error::{Result, SpecError};
use crate::spec::Specification;

/// Filter operation for comparing attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    /// Exact equality match.
    Eq,
    /// Not equal.
    Ne,
}

/// A filter condition on an attribute.
///
/// Combines an attribute name, an operation, and a value to match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrFilter {
    /// The attribute name (e.g., "color", "size", "name")
    pub attr: String,
    /// The filter operation
    pub op: FilterOp,
    /// The value to compare against
    pub value: AttrValue,
}

impl AttrFilter {
    /// Create a new filter condition without consulting any schema.
    pub fn new(attr: impl Into<String>, op: FilterOp, value: AttrValue) -> Self {
        Self {
            attr: attr.into(),
            op,
            value,
        }
    }

    /// Convenience: create an equality filter.
    pub fn eq(attr: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self::new(attr, FilterOp::Eq, value.into())
    }

    /// Convenience: create a not-equal filter.
    pub fn ne(attr: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        Self::new(attr, FilterOp::Ne, value.into())
    }

    /// Create a filter after validating it against `T`'s attribute registry.
    ///
    /// The attribute must exist, be filterable, and hold values of the same
    /// kind as `value`.
    pub fn checked<T: Attributes>(
        attr: impl Into<String>,
        op: FilterOp,
        value: AttrValue,
    ) -> Result<Self> {
        let attr = attr.into();
        let Some(spec) = get_spec(T::schema(), &attr) else {
            debug!(%attr, "rejected filter on unknown attribute");
            return Err(SpecError::UnknownAttribute(attr));
        };
        if !spec.filterable {
            debug!(%attr, "rejected filter on non-filterable attribute");
            return Err(SpecError::NotFilterable(attr));
        }
        if spec.kind != value.kind() {
            debug!(%attr, expected = ?spec.kind, found = ?value.kind(), "rejected filter value kind");
            return Err(SpecError::KindMismatch {
                attr,
                expected: spec.kind,
                found: value.kind(),
            });
        }
        Ok(Self::new(attr, op, value))
    }

    /// Check if this filter matches the given entity.
    ///
    /// Returns `false` if the attribute doesn't exist on the entity.
    pub fn matches<T: Attributes + ?Sized>(&self, item: &T) -> bool {
        let Some(attr_value) = item.get_attr(&self.attr) else {
            return false;
        };

        match self.op {
            FilterOp::Eq => attr_value == self.value,
            FilterOp::Ne => attr_value != self.value,
        }
    }
}

impl<T: Attributes + ?Sized> Specification<T> for AttrFilter {
    fn is_satisfied(&self, item: &T) -> bool {
        self.matches(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttributeKind, AttributeSpec};
    use crate::model::{Color, Product, Size};

    struct Part {
        label: String,
        serial: String,
    }

    impl Attributes for Part {
        fn schema() -> &'static [AttributeSpec] {
            const PART: &[AttributeSpec] = &[
                AttributeSpec::new("label", AttributeKind::Text).filterable(),
                AttributeSpec::new("serial", AttributeKind::Text),
            ];
            PART
        }

        fn get_attr(&self, name: &str) -> Option<AttrValue> {
            match name {
                "label" => Some(AttrValue::Text(self.label.clone())),
                "serial" => Some(AttrValue::Text(self.serial.clone())),
                _ => None,
            }
        }
    }

    fn apple() -> Product {
        Product::new("Apple", Color::Green, Size::Small)
    }

    #[test]
    fn filter_eq_color() {
        let filter = AttrFilter::eq("color", Color::Green);

        assert!(filter.matches(&apple()));
        assert!(!filter.matches(&Product::new("House", Color::Blue, Size::Large)));
    }

    #[test]
    fn filter_ne_size() {
        let filter = AttrFilter::ne("size", Size::Small);

        assert!(!filter.matches(&apple()));
        assert!(filter.matches(&Product::new("Tree", Color::Green, Size::Large)));
    }

    #[test]
    fn filter_eq_name() {
        let filter = AttrFilter::eq("name", AttrValue::Text("Apple".into()));
        assert!(filter.matches(&apple()));
    }

    #[test]
    fn filter_unknown_attr_returns_false() {
        assert!(!AttrFilter::eq("weight", Color::Green).matches(&apple()));
        assert!(!AttrFilter::ne("weight", Color::Green).matches(&apple()));
    }

    #[test]
    fn filter_type_mismatch_is_not_equal() {
        // "Green" as text is not the Green enum variant
        let eq = AttrFilter::eq("color", AttrValue::Text("Green".into()));
        let ne = AttrFilter::ne("color", AttrValue::Text("Green".into()));
        assert!(!eq.matches(&apple()));
        assert!(ne.matches(&apple()));
    }

    #[test]
    fn filter_is_a_specification() {
        let spec: &dyn Specification<Product> = &AttrFilter::eq("size", Size::Small);
        assert!(spec.is_satisfied(&apple()));
    }

    #[test]
    fn checked_accepts_valid_filter() {
        let filter = AttrFilter::checked::<Product>("size", FilterOp::Eq, Size::Large.into());
        assert_eq!(filter.unwrap(), AttrFilter::eq("size", Size::Large));
    }

    #[test]
    fn checked_rejects_unknown_attribute() {
        let err = AttrFilter::checked::<Product>("weight", FilterOp::Eq, Size::Large.into())
            .unwrap_err();
        assert!(matches!(err, SpecError::UnknownAttribute(attr) if attr == "weight"));
    }

    #[test]
    fn checked_rejects_kind_mismatch() {
        let err = AttrFilter::checked::<Product>(
            "color",
            FilterOp::Eq,
            AttrValue::Text("Green".into()),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::KindMismatch {
                expected: AttributeKind::Enum,
                found: AttributeKind::Text,
                ..
            }
        ));
    }

    #[test]
    fn checked_rejects_non_filterable_attribute() {
        let err = AttrFilter::checked::<Part>(
            "serial",
            FilterOp::Eq,
            AttrValue::Text("X-1".into()),
        )
        .unwrap_err();
        assert!(matches!(err, SpecError::NotFilterable(attr) if attr == "serial"));
    }

    #[test]
    fn filter_works_on_other_entities() {
        let part = Part {
            label: "bolt".into(),
            serial: "X-1".into(),
        };
        let filter = AttrFilter::checked::<Part>("label", FilterOp::Eq, AttrValue::Text("bolt".into()))
            .unwrap();
        assert!(filter.is_satisfied(&part));
    }
}
