use std::fmt::Display;

use crate::{
  error::{AlgebraError, AlgebraResult},
  operation::BinaryOperation,
};

/// Addition of residues modulo `n`. Over `0..n` this is the cyclic group of
/// order `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddModN {
  n: u64,
}

impl AddModN {
  /// # Panics
  ///
  /// Panics if `n` is zero.
  pub const fn new(n: u64) -> Self {
    assert!(n > 0, "modulus must be positive");
    Self { n }
  }

  /// Like `new`, but reports a zero modulus as an error.
  pub const fn try_new(n: u64) -> AlgebraResult<Self> {
    if n == 0 {
      return Err(AlgebraError::ZeroModulus);
    }
    Ok(Self { n })
  }

  pub const fn modulus(&self) -> u64 {
    self.n
  }

  /// Every residue mod `n`, in increasing order.
  pub fn residues(&self) -> impl Iterator<Item = u64> {
    0..self.n
  }
}

impl BinaryOperation<u64> for AddModN {
  fn apply(&self, lop: &u64, rop: &u64) -> u64 {
    ((*lop as u128 + *rop as u128) % self.n as u128) as u64
  }
}

impl Display for AddModN {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "plus_mod_{}", self.n)
  }
}

/// Multiplication of residues modulo `n`. A monoid over `0..n`, whose units
/// form a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MulModN {
  n: u64,
}

impl MulModN {
  /// # Panics
  ///
  /// Panics if `n` is zero.
  pub const fn new(n: u64) -> Self {
    assert!(n > 0, "modulus must be positive");
    Self { n }
  }

  /// Like `new`, but reports a zero modulus as an error.
  pub const fn try_new(n: u64) -> AlgebraResult<Self> {
    if n == 0 {
      return Err(AlgebraError::ZeroModulus);
    }
    Ok(Self { n })
  }

  pub const fn modulus(&self) -> u64 {
    self.n
  }
}

impl BinaryOperation<u64> for MulModN {
  fn apply(&self, lop: &u64, rop: &u64) -> u64 {
    ((*lop as u128 * *rop as u128) % self.n as u128) as u64
  }
}

impl Display for MulModN {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "times_mod_{}", self.n)
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[rstest]
  fn test_ops(#[values(1, 2, 3, 4, 5, 6)] n: u64) {
    let add = AddModN::new(n);
    let mul = MulModN::new(n);
    for i in add.residues() {
      for j in add.residues() {
        assert_eq!(add.apply(&i, &j), (i + j) % n);
        assert_eq!(mul.apply(&i, &j), (i * j) % n);
      }
    }
  }

  #[test]
  fn test_no_overflow() {
    let add = AddModN::new(u64::MAX);
    assert_eq!(add.apply(&(u64::MAX - 1), &(u64::MAX - 1)), u64::MAX - 2);

    let mul = MulModN::new(u64::MAX);
    assert_eq!(mul.apply(&(u64::MAX - 1), &(u64::MAX - 1)), 1);
  }

  #[test]
  fn test_display() {
    assert_eq!(AddModN::new(7).to_string(), "plus_mod_7");
    assert_eq!(MulModN::new(4).to_string(), "times_mod_4");
  }

  #[test]
  #[should_panic]
  fn test_zero_modulus() {
    AddModN::new(0);
  }

  #[test]
  fn test_checked_constructors() {
    assert_eq!(AddModN::try_new(0), Err(AlgebraError::ZeroModulus));
    assert_eq!(MulModN::try_new(0), Err(AlgebraError::ZeroModulus));
    assert_eq!(AddModN::try_new(5), Ok(AddModN::new(5)));
    assert_eq!(MulModN::try_new(5).map(|op| op.modulus()), Ok(5));
  }
}
