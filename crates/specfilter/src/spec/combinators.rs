//! Logical combinators over specifications.
//!
//! AND and OR own an ordered, non-empty list of type-erased children, fixed at
//! construction. Building either from zero children is rejected with
//! [`SpecError::InvalidArgument`] rather than defaulting to a vacuous result.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{BoxedSpec, Specification};
use crate::error::{Result, SpecError};

/// How a composite visits its children.
///
/// Children are pure, so both modes always agree on the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// Stop at the first child that decides the outcome.
    #[default]
    ShortCircuit,
    /// Evaluate every child, then combine.
    Exhaustive,
}

fn non_empty<T: ?Sized>(
    kind: &'static str,
    children: impl IntoIterator<Item = BoxedSpec<T>>,
) -> Result<Vec<BoxedSpec<T>>> {
    let children: Vec<_> = children.into_iter().collect();
    if children.is_empty() {
        debug!(kind, "rejected composite without children");
        return Err(SpecError::InvalidArgument(format!(
            "{kind} specification needs at least one child"
        )));
    }
    Ok(children)
}

/// Satisfied iff every child is satisfied.
pub struct AndSpecification<T: ?Sized> {
    children: Vec<BoxedSpec<T>>,
    evaluation: Evaluation,
}

impl<T: ?Sized> AndSpecification<T> {
    /// Build from an ordered, non-empty set of children.
    pub fn new(children: impl IntoIterator<Item = BoxedSpec<T>>) -> Result<Self> {
        Ok(Self {
            children: non_empty("AND", children)?,
            evaluation: Evaluation::default(),
        })
    }

    pub(crate) fn pair(first: BoxedSpec<T>, second: BoxedSpec<T>) -> Self {
        Self {
            children: vec![first, second],
            evaluation: Evaluation::default(),
        }
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    pub fn children(&self) -> &[BoxedSpec<T>] {
        &self.children
    }
}

impl<T: ?Sized> Specification<T> for AndSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        match self.evaluation {
            Evaluation::ShortCircuit => {
                for (child, spec) in self.children.iter().enumerate() {
                    if !spec.is_satisfied(item) {
                        trace!(child, "AND short-circuited");
                        return false;
                    }
                }
                true
            }
            Evaluation::Exhaustive => self
                .children
                .iter()
                .map(|spec| spec.is_satisfied(item))
                .fold(true, |acc, satisfied| acc && satisfied),
        }
    }
}

impl<T: ?Sized> fmt::Debug for AndSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AndSpecification")
            .field("children", &self.children.len())
            .field("evaluation", &self.evaluation)
            .finish()
    }
}

/// Satisfied iff at least one child is satisfied.
pub struct OrSpecification<T: ?Sized> {
    children: Vec<BoxedSpec<T>>,
    evaluation: Evaluation,
}

impl<T: ?Sized> OrSpecification<T> {
    /// Build from an ordered, non-empty set of children.
    pub fn new(children: impl IntoIterator<Item = BoxedSpec<T>>) -> Result<Self> {
        Ok(Self {
            children: non_empty("OR", children)?,
            evaluation: Evaluation::default(),
        })
    }

    pub(crate) fn pair(first: BoxedSpec<T>, second: BoxedSpec<T>) -> Self {
        Self {
            children: vec![first, second],
            evaluation: Evaluation::default(),
        }
    }

    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }

    pub fn children(&self) -> &[BoxedSpec<T>] {
        &self.children
    }
}

impl<T: ?Sized> Specification<T> for OrSpecification<T> {
    fn is_satisfied(&self, item: &T) -> bool {
        match self.evaluation {
            Evaluation::ShortCircuit => {
                for (child, spec) in self.children.iter().enumerate() {
                    if spec.is_satisfied(item) {
                        trace!(child, "OR short-circuited");
                        return true;
                    }
                }
                false
            }
            Evaluation::Exhaustive => self
                .children
                .iter()
                .map(|spec| spec.is_satisfied(item))
                .fold(false, |acc, satisfied| acc || satisfied),
        }
    }
}

impl<T: ?Sized> fmt::Debug for OrSpecification<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrSpecification")
            .field("children", &self.children.len())
            .field("evaluation", &self.evaluation)
            .finish()
    }
}

/// Satisfied iff the inner specification is not.
#[derive(Debug, Clone, Copy)]
pub struct NotSpecification<S> {
    inner: S,
}

impl<S> NotSpecification<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<T: ?Sized, S: Specification<T>> Specification<T> for NotSpecification<S> {
    fn is_satisfied(&self, item: &T) -> bool {
        !self.inner.is_satisfied(item)
    }
}
