use std::sync::Arc;

/// A binary operation over elements of type `T`.
///
/// Implementations must be total and deterministic over the universe they are
/// attached to. Plain closures `Fn(&T, &T) -> T` implement this trait, so
/// operations can be supplied inline.
pub trait BinaryOperation<T>: Send + Sync {
  /// Computes `lop * rop`.
  fn apply(&self, lop: &T, rop: &T) -> T;
}

impl<T, F> BinaryOperation<T> for F
where
  F: Fn(&T, &T) -> T + Send + Sync,
{
  fn apply(&self, lop: &T, rop: &T) -> T {
    self(lop, rop)
  }
}

pub type BoxedOperation<T> = Box<dyn BinaryOperation<T>>;

/// Boxes `op` for use in an operation list.
pub fn boxed<T>(op: impl BinaryOperation<T> + 'static) -> BoxedOperation<T> {
  Box::new(op)
}

/// An operation shared between several systems, e.g. a system and the direct
/// products built from it.
pub(crate) struct SharedOperation<T>(pub(crate) Arc<dyn BinaryOperation<T>>);

impl<T> BinaryOperation<T> for SharedOperation<T> {
  fn apply(&self, lop: &T, rop: &T) -> T {
    self.0.apply(lop, rop)
  }
}
