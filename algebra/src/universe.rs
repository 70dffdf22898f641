use std::{collections::HashMap, fmt::Debug, hash::Hash, slice};

use itertools::Itertools;

use crate::error::{AlgebraError, AlgebraResult};

/// A finite, non-empty set of distinct elements with a fixed iteration order.
///
/// Each element is labeled with its ordinal, the position it holds in the
/// canonical order. Ordinals exactly cover the range `0..len()`.
#[derive(Clone, Debug)]
pub struct Universe<T> {
  elements: Vec<T>,
  ords: HashMap<T, usize>,
}

impl<T> Universe<T>
where
  T: Clone + Eq + Hash,
{
  /// Builds a universe from `elements`, dropping duplicates and sorting what
  /// remains. The resulting order depends only on the set of elements given,
  /// not on the order or multiplicity they were given in.
  pub fn new(elements: impl IntoIterator<Item = T>) -> AlgebraResult<Self>
  where
    T: Ord,
  {
    Self::from_canonical(elements.into_iter().unique().sorted().collect())
  }

  /// Builds a universe for element types without a total order, keeping the
  /// first occurrence of each element in the order given.
  pub fn from_first_occurrence(elements: impl IntoIterator<Item = T>) -> AlgebraResult<Self> {
    Self::from_canonical(elements.into_iter().unique().collect())
  }

  fn from_canonical(elements: Vec<T>) -> AlgebraResult<Self> {
    if elements.is_empty() {
      return Err(AlgebraError::EmptyUniverse);
    }

    let ords = elements
      .iter()
      .enumerate()
      .map(|(ord, el)| (el.clone(), ord))
      .collect();
    Ok(Self { elements, ords })
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  /// Always false, universes are never empty.
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn contains(&self, el: &T) -> bool {
    self.ords.contains_key(el)
  }

  /// The position of `el` in the canonical order, or `None` if `el` is not a
  /// member.
  pub fn ord(&self, el: &T) -> Option<usize> {
    self.ords.get(el).copied()
  }

  /// The inverse of `ord`, returns the element with the given ordinal.
  pub fn from_ord(&self, ord: usize) -> Option<&T> {
    self.elements.get(ord)
  }

  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.elements.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.elements
  }

  pub(crate) fn check_member(&self, el: &T) -> AlgebraResult<usize>
  where
    T: Debug,
  {
    self.ord(el).ok_or_else(|| AlgebraError::not_in_universe(el))
  }
}

impl<T: PartialEq> PartialEq for Universe<T> {
  fn eq(&self, other: &Self) -> bool {
    self.elements == other.elements
  }
}

impl<T: Eq> Eq for Universe<T> {}

impl<'a, T> IntoIterator for &'a Universe<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.elements.iter()
  }
}
