//! # specfilter Architecture
//!
//! specfilter expresses boolean criteria over items and applies them to
//! sequences without either side knowing about the other. New criteria are new
//! types; neither existing criteria nor the code that applies them change.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Engine (filter.rs)                                  │
//! │  - Lazy, order-preserving selection over borrowed items     │
//! │  - Knows only the Specification trait                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Combinators (spec/combinators.rs)                          │
//! │  - AND / OR over non-empty child lists, NOT                 │
//! │  - Short-circuit or exhaustive evaluation                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Leaves (spec/leaf.rs, attributes/)                         │
//! │  - One captured value, one attribute test                   │
//! │  - Typed (ColorSpecification) or by name (AttrFilter)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use specfilter::filter::filter;
//! use specfilter::model::{Color, Product, Size};
//! use specfilter::spec::{AndSpecification, ColorSpecification, SizeSpecification, SpecificationExt};
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("Tree", Color::Green, Size::Large),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//!
//! let large_green = AndSpecification::new(vec![
//!     SizeSpecification::new(Size::Large).boxed(),
//!     ColorSpecification::new(Color::Green).boxed(),
//! ])?;
//!
//! let names: Vec<_> = filter(&products, &large_green).map(|p| p.name.as_str()).collect();
//! assert_eq!(names, vec!["Tree"]);
//! # Ok::<(), specfilter::error::SpecError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`spec`]: The `Specification` trait, leaf specifications and combinators
//! - [`filter`]: The filter engine
//! - [`attributes`]: Name-addressed attribute filters and registries
//! - [`model`]: The reference entity (`Product`, `Color`, `Size`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod attributes;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod spec;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
