//! # Specifications
//!
//! A [`Specification`] answers one question about one item: does it satisfy
//! some criterion? Everything else in the crate is built on that single
//! capability.
//!
//! ## Kinds
//!
//! - **Leaves** capture a comparison value at construction and test one
//!   attribute: [`ColorSpecification`], [`SizeSpecification`],
//!   [`AttrFilter`](crate::attributes::AttrFilter), or any closure via [`predicate`].
//! - **Combinators** own child specifications and are specifications themselves:
//!   [`AndSpecification`], [`OrSpecification`], [`NotSpecification`].
//!
//! New criteria are new types implementing the trait. Neither the combinators
//! nor the [filter engine](crate::filter) change when one is added.
//!
//! ## Purity
//!
//! Evaluation never mutates the item and keeps no state between calls. A
//! specification built once can be reused for any number of items, and
//! shared across threads whenever it is `Sync`.
//!
//! ## Composing
//!
//! ```
//! use specfilter::model::{Color, Product, Size};
//! use specfilter::spec::{ColorSpecification, SizeSpecification, Specification, SpecificationExt};
//!
//! let large_green = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Green));
//! assert!(large_green.is_satisfied(&Product::new("Tree", Color::Green, Size::Large)));
//! assert!(!large_green.is_satisfied(&Product::new("House", Color::Blue, Size::Large)));
//! ```

mod combinators;
mod leaf;

use std::sync::Arc;

pub use combinators::{AndSpecification, Evaluation, NotSpecification, OrSpecification};
pub use leaf::{predicate, ColorSpecification, Predicate, SizeSpecification};

use crate::error::{Result, SpecError};

/// A pure predicate over items of type `T`.
pub trait Specification<T: ?Sized> {
    /// Whether `item` satisfies this specification.
    fn is_satisfied(&self, item: &T) -> bool;

    /// Evaluate against an item that may be absent.
    ///
    /// A missing item is a caller error, never a silent non-match.
    fn evaluate(&self, item: Option<&T>) -> Result<bool> {
        item.map(|item| self.is_satisfied(item))
            .ok_or(SpecError::MissingItem)
    }
}

/// Type-erased specification, as held by the combinators.
pub type BoxedSpec<T> = Box<dyn Specification<T> + Send + Sync>;

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Arc<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        (**self).is_satisfied(item)
    }
}

/// Combinator methods available on every specification.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// Satisfied when both `self` and `other` are.
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Send + Sync + 'static,
        S: Specification<T> + Send + Sync + 'static,
    {
        AndSpecification::pair(Box::new(self), Box::new(other))
    }

    /// Satisfied when `self` or `other` is.
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Send + Sync + 'static,
        S: Specification<T> + Send + Sync + 'static,
    {
        OrSpecification::pair(Box::new(self), Box::new(other))
    }

    /// Satisfied when `self` is not.
    fn not(self) -> NotSpecification<Self> {
        NotSpecification::new(self)
    }

    /// Erase the concrete type.
    fn boxed(self) -> BoxedSpec<T>
    where
        Self: Send + Sync + 'static,
    {
        Box::new(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}
