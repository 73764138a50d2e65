//! # Attribute Filters
//!
//! Typed leaf specifications such as [`ColorSpecification`](crate::spec::ColorSpecification)
//! read one field directly. This module adds a name-addressed alternative: an
//! entity exposes its attributes through [`Attributes`], and an [`AttrFilter`]
//! compares one of them against a captured [`AttrValue`].
//!
//! | Kind | Examples | Description |
//! |------|----------|-------------|
//! | `Text` | `name` | Free text, compared exactly |
//! | `Enum` | `color`, `size` | Closed set, compared by variant name |
//!
//! ## Usage
//!
//! ```
//! use specfilter::attributes::{AttrFilter, FilterOp};
//! use specfilter::model::{Color, Product, Size};
//! use specfilter::spec::Specification;
//!
//! let filter = AttrFilter::checked::<Product>("color", FilterOp::Eq, Color::Green.into()).unwrap();
//! assert!(filter.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)));
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{AttrFilter, FilterOp};
pub use spec::{
    filterable_attrs, get_spec, AttributeKind, AttributeSpec, Attributes, PRODUCT_ATTRIBUTES,
};
pub use value::AttrValue;
