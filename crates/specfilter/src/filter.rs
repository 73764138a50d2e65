//! # Filter Engine
//!
//! Applies a [`Specification`] across a sequence of borrowed items and yields
//! the ones that satisfy it.
//!
//! ## Guarantees
//!
//! - **Lazy**: the specification runs only when the consumer pulls the next
//!   item, so stopping early (e.g. `take(n)` over an unbounded source) never
//!   scans the rest of the input.
//! - **Order preserving**: matches come out in input order.
//! - **No copies**: the output yields the same `&T` references the input did.
//! - **Stateless**: restarting a traversal is a matter of cloning the
//!   [`Filtered`] adapter, which is possible whenever the source iterator is `Clone`.
//!
//! ## Entry Points
//!
//! - [`filter`]: free function over anything iterable.
//! - [`FilterExt::satisfying`]: the same adapter as an iterator method.
//! - [`Filter`]: the engine as a trait, implemented by [`SpecFilter`].
//!
//! ```
//! use specfilter::filter::filter;
//! use specfilter::model::{Color, Product, Size};
//! use specfilter::spec::ColorSpecification;
//!
//! let products = vec![
//!     Product::new("Apple", Color::Green, Size::Small),
//!     Product::new("House", Color::Blue, Size::Large),
//! ];
//! let names: Vec<_> = filter(&products, &ColorSpecification::new(Color::Green))
//!     .map(|p| p.name.as_str())
//!     .collect();
//! assert_eq!(names, vec!["Apple"]);
//! ```

use std::iter::FusedIterator;

use tracing::trace;

use crate::spec::Specification;

/// Lazy iterator over the items of `I` satisfying `S`.
#[derive(Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'s, I, S: ?Sized> {
    items: I,
    spec: &'s S,
}

impl<I: Clone, S: ?Sized> Clone for Filtered<'_, I, S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            spec: self.spec,
        }
    }
}

impl<'a, 's, T, I, S> Iterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: Iterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.items.find(|item| {
            let matched = spec.is_satisfied(*item);
            trace!(matched, "evaluated item");
            matched
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.items.size_hint();
        (0, upper)
    }
}

impl<'a, 's, T, I, S> DoubleEndedIterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let spec = self.spec;
        self.items.rfind(|item| {
            let matched = spec.is_satisfied(*item);
            trace!(matched, "evaluated item");
            matched
        })
    }
}

impl<'a, 's, T, I, S> FusedIterator for Filtered<'s, I, S>
where
    T: ?Sized + 'a,
    I: FusedIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
}

/// Lazily select the items satisfying `spec`.
pub fn filter<'a, 's, T, I, S>(items: I, spec: &'s S) -> Filtered<'s, I::IntoIter, S>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
    S: Specification<T> + ?Sized,
{
    Filtered {
        items: items.into_iter(),
        spec,
    }
}

/// Adds [`satisfying`](FilterExt::satisfying) to iterators over borrowed items.
pub trait FilterExt<'a, T: ?Sized + 'a>: Iterator<Item = &'a T> + Sized {
    /// Keep only the items satisfying `spec`.
    fn satisfying<S>(self, spec: &S) -> Filtered<'_, Self, S>
    where
        S: Specification<T> + ?Sized,
    {
        Filtered { items: self, spec }
    }
}

impl<'a, T: ?Sized + 'a, I: Iterator<Item = &'a T>> FilterExt<'a, T> for I {}

/// The filter engine as a trait.
pub trait Filter<T: ?Sized> {
    fn filter<'a, 's, I, S>(&self, items: I, spec: &'s S) -> impl Iterator<Item = &'a T> + 's
    where
        T: 'a,
        'a: 's,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 's,
        S: Specification<T> + ?Sized;
}

/// The default, stateless filter engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecFilter;

impl<T: ?Sized> Filter<T> for SpecFilter {
    fn filter<'a, 's, I, S>(&self, items: I, spec: &'s S) -> impl Iterator<Item = &'a T> + 's
    where
        T: 'a,
        'a: 's,
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 's,
        S: Specification<T> + ?Sized,
    {
        filter(items, spec)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::model::{Color, Product, Size};
    use crate::spec::{predicate, ColorSpecification, SizeSpecification, SpecificationExt};
    use crate::test_utils::{full_catalog, sample_products};

    fn names<'a>(items: impl Iterator<Item = &'a Product>) -> Vec<&'a str> {
        items.map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn filter_by_color() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        assert_eq!(names(filter(&products, &green)), vec!["Apple", "Tree"]);
    }

    #[test]
    fn filter_by_size() {
        let products = sample_products();
        let large = SizeSpecification::new(Size::Large);
        assert_eq!(names(filter(&products, &large)), vec!["Tree", "House"]);
    }

    #[test]
    fn filter_by_composite() {
        let products = sample_products();
        let spec = SizeSpecification::new(Size::Large).and(ColorSpecification::new(Color::Green));
        assert_eq!(names(filter(&products, &spec)), vec!["Tree"]);
    }

    #[test]
    fn filter_yields_same_instances() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        let matched: Vec<_> = filter(&products, &green).collect();
        assert!(std::ptr::eq(matched[0], &products[0]));
        assert!(std::ptr::eq(matched[1], &products[1]));
    }

    #[test]
    fn filter_is_lazy() {
        let products = sample_products();
        let calls = Cell::new(0);
        let counting = predicate(|_: &Product| {
            calls.set(calls.get() + 1);
            true
        });

        let mut matched = filter(&products, &counting);
        assert_eq!(calls.get(), 0);
        matched.next();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn filter_takes_from_unbounded_source() {
        let products = sample_products();
        let large = SizeSpecification::new(Size::Large);
        let first: Vec<_> = products.iter().cycle().satisfying(&large).take(5).collect();
        assert_eq!(
            names(first.into_iter()),
            vec!["Tree", "House", "Tree", "House", "Tree"]
        );
    }

    #[test]
    fn filtered_clone_restarts_traversal() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        let matched = filter(&products, &green);
        let again = matched.clone();
        assert_eq!(names(matched), names(again));
    }

    #[test]
    fn filter_runs_backwards() {
        let products = sample_products();
        let large = SizeSpecification::new(Size::Large);
        assert_eq!(names(filter(&products, &large).rev()), vec!["House", "Tree"]);
    }

    #[test]
    fn size_hint_keeps_upper_bound() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        assert_eq!(filter(&products, &green).size_hint(), (0, Some(3)));
    }

    #[test]
    fn filter_accepts_trait_objects() {
        let products = sample_products();
        let spec: Box<dyn Specification<Product>> = Box::new(ColorSpecification::new(Color::Blue));
        assert_eq!(names(filter(&products, &*spec)), vec!["House"]);
    }

    #[test]
    fn spec_filter_matches_free_function() {
        let products = sample_products();
        let green = ColorSpecification::new(Color::Green);
        let engine = SpecFilter;
        assert_eq!(
            names(engine.filter(&products, &green)),
            names(filter(&products, &green))
        );
    }

    #[test]
    fn filter_full_catalog_by_leaf() {
        let products = full_catalog();
        let blue = ColorSpecification::new(Color::Blue);
        let matched: Vec<_> = filter(&products, &blue).collect();
        assert_eq!(matched.len(), Size::ALL.len());
        assert!(matched.iter().all(|p| p.color == Color::Blue));
        assert_eq!(matched[0].name, "Blue-Small");
    }

    #[test]
    fn filter_over_empty_input() {
        let products: Vec<Product> = Vec::new();
        let green = ColorSpecification::new(Color::Green);
        assert_eq!(filter(&products, &green).count(), 0);
    }
}
