use std::{fmt::Debug, hash::Hash, sync::Arc};

use itertools::iproduct;

use crate::{
  error::AlgebraResult,
  operation::{BinaryOperation, SharedOperation},
  system::AlgebraicSystem,
  universe::Universe,
};

/// The componentwise product of two operations, acting on pairs of elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectProduct<L, R> {
  left: L,
  right: R,
}

impl<L, R> DirectProduct<L, R> {
  pub const fn new(left: L, right: R) -> Self {
    Self { left, right }
  }

  pub const fn left(&self) -> &L {
    &self.left
  }

  pub const fn right(&self) -> &R {
    &self.right
  }
}

impl<A, B, L, R> BinaryOperation<(A, B)> for DirectProduct<L, R>
where
  L: BinaryOperation<A>,
  R: BinaryOperation<B>,
{
  fn apply(&self, lop: &(A, B), rop: &(A, B)) -> (A, B) {
    (
      self.left.apply(&lop.0, &rop.0),
      self.right.apply(&lop.1, &rop.1),
    )
  }
}

impl<T> AlgebraicSystem<T>
where
  T: Clone + Eq + Hash + Debug + Ord + 'static,
{
  /// Builds the direct product of operation `idx` of this system with
  /// operation `other_idx` of `other`. The product's universe is every pair
  /// of elements, ordered lexicographically, and has a single operation.
  pub fn direct_product<U>(
    &self,
    idx: usize,
    other: &AlgebraicSystem<U>,
    other_idx: usize,
  ) -> AlgebraResult<AlgebraicSystem<(T, U)>>
  where
    U: Clone + Eq + Hash + Debug + Ord + 'static,
  {
    let left = SharedOperation(self.op(idx)?.clone());
    let right = SharedOperation(other.op(other_idx)?.clone());

    let universe = Universe::new(iproduct!(
      self.universe().iter().cloned(),
      other.universe().iter().cloned()
    ))?;
    let product: Arc<dyn BinaryOperation<(T, U)>> = Arc::new(DirectProduct::new(left, right));
    AlgebraicSystem::from_shared(universe, vec![product])
  }
}
