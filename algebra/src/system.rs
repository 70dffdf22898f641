use std::{
  fmt::Debug,
  hash::Hash,
  sync::{Arc, OnceLock},
};

use itertools::iproduct;
use tracing::{debug, trace};

use crate::{
  error::{AlgebraError, AlgebraResult},
  modular::AddModN,
  operation::{BinaryOperation, BoxedOperation},
  universe::Universe,
};

/// A finite universe equipped with one or more closed binary operations.
///
/// Closure of every operation is verified when the system is constructed.
/// Associativity, commutativity and identity elements are computed on first
/// query and memoized per operation index.
pub struct AlgebraicSystem<T> {
  universe: Universe<T>,
  operations: Vec<Arc<dyn BinaryOperation<T>>>,
  associative: Vec<OnceLock<bool>>,
  commutative: Vec<OnceLock<bool>>,
  identity: Vec<OnceLock<Option<T>>>,
}

impl<T> AlgebraicSystem<T>
where
  T: Clone + Eq + Hash + Debug,
{
  /// Constructs a system over the elements of `elements`, which may be given
  /// in any order and may contain duplicates.
  pub fn new(
    elements: impl IntoIterator<Item = T>,
    operations: Vec<BoxedOperation<T>>,
  ) -> AlgebraResult<Self>
  where
    T: Ord,
  {
    Self::from_universe(Universe::new(elements)?, operations)
  }

  /// Constructs a system over an already canonicalized universe.
  pub fn from_universe(
    universe: Universe<T>,
    operations: Vec<BoxedOperation<T>>,
  ) -> AlgebraResult<Self> {
    Self::from_shared(universe, operations.into_iter().map(Arc::from).collect())
  }

  pub(crate) fn from_shared(
    universe: Universe<T>,
    operations: Vec<Arc<dyn BinaryOperation<T>>>,
  ) -> AlgebraResult<Self> {
    if operations.is_empty() {
      return Err(AlgebraError::NoOperations);
    }

    let num_operations = operations.len();
    let system = Self {
      universe,
      operations,
      associative: (0..num_operations).map(|_| OnceLock::new()).collect(),
      commutative: (0..num_operations).map(|_| OnceLock::new()).collect(),
      identity: (0..num_operations).map(|_| OnceLock::new()).collect(),
    };
    system.check_closure()?;

    debug!(
      elements = system.universe.len(),
      operations = num_operations,
      "constructed algebraic system"
    );
    Ok(system)
  }

  fn check_closure(&self) -> AlgebraResult<()> {
    for (op_idx, op) in self.operations.iter().enumerate() {
      for (a, b) in iproduct!(self.universe.iter(), self.universe.iter()) {
        let result = op.apply(a, b);
        if !self.universe.contains(&result) {
          return Err(AlgebraError::ClosureViolation {
            op_idx,
            lop: format!("{a:?}"),
            rop: format!("{b:?}"),
            result: format!("{result:?}"),
          });
        }
      }
    }
    Ok(())
  }

  pub fn universe(&self) -> &Universe<T> {
    &self.universe
  }

  /// The number of elements in the universe.
  pub fn len(&self) -> usize {
    self.universe.len()
  }

  pub fn is_empty(&self) -> bool {
    self.universe.is_empty()
  }

  pub fn contains(&self, el: &T) -> bool {
    self.universe.contains(el)
  }

  pub fn num_operations(&self) -> usize {
    self.operations.len()
  }

  pub(crate) fn op(&self, idx: usize) -> AlgebraResult<&Arc<dyn BinaryOperation<T>>> {
    self
      .operations
      .get(idx)
      .ok_or(AlgebraError::OperationIndexOutOfRange {
        idx,
        num_operations: self.operations.len(),
      })
  }

  /// Computes `lop * rop` under operation `idx`.
  pub fn operation(&self, lop: &T, rop: &T, idx: usize) -> AlgebraResult<T> {
    let op = self.op(idx)?;
    self.universe.check_member(lop)?;
    self.universe.check_member(rop)?;
    Ok(op.apply(lop, rop))
  }

  /// Returns true if `(a * b) * c == a * (b * c)` for every triple of
  /// elements. Takes O(n^3) time the first time it is called for an operation.
  pub fn is_associative(&self, idx: usize) -> AlgebraResult<bool> {
    let op = self.op(idx)?;
    Ok(*self.associative[idx].get_or_init(|| {
      let u = &self.universe;
      let counterexample = iproduct!(u.iter(), u.iter(), u.iter())
        .find(|&(a, b, c)| op.apply(&op.apply(a, b), c) != op.apply(a, &op.apply(b, c)));

      if let Some((a, b, c)) = counterexample {
        trace!(op_idx = idx, ?a, ?b, ?c, "associativity counterexample");
      }
      let associative = counterexample.is_none();
      debug!(op_idx = idx, associative, "checked associativity");
      associative
    }))
  }

  /// Returns true if `a * b == b * a` for every pair of elements.
  pub fn is_commutative(&self, idx: usize) -> AlgebraResult<bool> {
    let op = self.op(idx)?;
    Ok(*self.commutative[idx].get_or_init(|| {
      let u = &self.universe;
      let commutative = iproduct!(u.iter(), u.iter()).all(|(a, b)| op.apply(a, b) == op.apply(b, a));
      debug!(op_idx = idx, commutative, "checked commutativity");
      commutative
    }))
  }

  /// Returns the two-sided identity of operation `idx`, or `None` if there is
  /// none. The result, including its absence, is computed once.
  pub fn get_identity(&self, idx: usize) -> AlgebraResult<Option<&T>> {
    let op = self.op(idx)?;
    Ok(
      self.identity[idx]
        .get_or_init(|| {
          let identity = self
            .universe
            .iter()
            .find(|e| {
              self
                .universe
                .iter()
                .all(|a| op.apply(a, e) == *a && op.apply(e, a) == *a)
            })
            .cloned();
          debug!(op_idx = idx, ?identity, "searched for identity");
          identity
        })
        .as_ref(),
    )
  }

  /// Returns the first element `b`, in canonical order, for which
  /// `a * b` is the identity of operation `idx`. Without an identity no
  /// element has an inverse.
  pub fn get_inverse(&self, a: &T, idx: usize) -> AlgebraResult<Option<&T>> {
    let op = self.op(idx)?;
    self.universe.check_member(a)?;

    let Some(e) = self.get_identity(idx)? else {
      return Ok(None);
    };
    Ok(self.universe.iter().find(|b| op.apply(a, b) == *e))
  }

  /// Returns true if operation `idx` makes the universe a group: it is
  /// associative, has an identity, and every element has an inverse.
  pub fn is_group(&self, idx: usize) -> AlgebraResult<bool> {
    if !self.is_associative(idx)? || self.get_identity(idx)?.is_none() {
      return Ok(false);
    }
    for a in &self.universe {
      if self.get_inverse(a, idx)?.is_none() {
        return Ok(false);
      }
    }
    Ok(true)
  }

  /// Returns the elements generated by repeatedly applying operation `idx`
  /// to `a`, i.e. `{a, a^2, a^3, ...}`, in canonical order.
  pub fn cyclic_subgroup(&self, a: &T, idx: usize) -> AlgebraResult<Vec<T>> {
    let op = self.op(idx)?;
    let mut ord = self.universe.check_member(a)?;

    let mut seen = vec![false; self.universe.len()];
    let mut power = a.clone();
    while !seen[ord] {
      seen[ord] = true;
      power = op.apply(&power, a);
      ord = self.universe.check_member(&power)?;
    }

    Ok(
      self
        .universe
        .iter()
        .zip(seen)
        .filter_map(|(el, seen)| seen.then(|| el.clone()))
        .collect(),
    )
  }

  /// Returns the smallest `k >= 1` with `a^k` equal to the identity of
  /// operation `idx`, or `None` if no power of `a` reaches the identity.
  pub fn order_of(&self, a: &T, idx: usize) -> AlgebraResult<Option<usize>> {
    let op = self.op(idx)?;
    self.universe.check_member(a)?;

    let Some(e) = self.get_identity(idx)? else {
      return Ok(None);
    };

    // The powers of a cycle within len() steps, so if the identity is not
    // reached by then it never will be.
    let mut power = a.clone();
    for k in 1..=self.universe.len() {
      if power == *e {
        return Ok(Some(k));
      }
      power = op.apply(&power, a);
    }
    Ok(None)
  }
}

impl AlgebraicSystem<u64> {
  /// The integers mod `n` under addition.
  pub fn integers_mod(n: u64) -> AlgebraResult<Self> {
    if n == 0 {
      return Err(AlgebraError::EmptyUniverse);
    }
    Self::new(0..n, vec![Box::new(AddModN::new(n))])
  }
}
