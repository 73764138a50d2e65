//! Leaf specifications: one captured value, one attribute test.

use std::fmt;

use super::Specification;
use crate::model::{Color, Product, Size};

/// Satisfied by products of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }
}

/// Satisfied by products of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }
}

/// Wraps a closure as a specification.
///
/// # Example
///
/// ```
/// use specfilter::model::{Color, Product, Size};
/// use specfilter::spec::{predicate, Specification};
///
/// let short_name = predicate(|p: &Product| p.name.len() <= 4);
/// assert!(short_name.is_satisfied(&Product::new("Tree", Color::Green, Size::Large)));
/// assert!(!short_name.is_satisfied(&Product::new("Apple", Color::Green, Size::Small)));
/// ```
pub fn predicate<T, F>(f: F) -> Predicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Predicate { f }
}

/// A specification backed by a closure. See [`predicate`].
#[derive(Clone, Copy)]
pub struct Predicate<F> {
    f: F,
}

impl<F> fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T, F> Specification<T> for Predicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline]
    fn is_satisfied(&self, item: &T) -> bool {
        (self.f)(item)
    }
}
