use std::fmt::Display;

use crate::{
  error::{AlgebraError, AlgebraResult},
  operation::BinaryOperation,
};

/// A symmetry of the regular `n`-gon: either a rotation by `i` steps or the
/// reflection `s` composed after a rotation by `i` steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DihedralElement {
  Rot(u16),
  Rfl(u16),
}

impl Display for DihedralElement {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Rot(i) => write!(f, "r{i}"),
      Self::Rfl(i) => write!(f, "s{i}"),
    }
  }
}

/// Composition in the dihedral group of order `2n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DihedralComposition {
  n: u16,
}

impl DihedralComposition {
  /// # Panics
  ///
  /// Panics if `n` is zero.
  pub const fn new(n: u16) -> Self {
    assert!(n > 0, "dihedral group needs at least one rotation");
    Self { n }
  }

  /// Like `new`, but reports `n == 0` as an error.
  pub const fn try_new(n: u16) -> AlgebraResult<Self> {
    if n == 0 {
      return Err(AlgebraError::ZeroModulus);
    }
    Ok(Self { n })
  }

  /// The number of elements of the group.
  pub const fn order(&self) -> usize {
    2 * self.n as usize
  }

  /// All rotations followed by all reflections.
  pub fn elements(&self) -> impl Iterator<Item = DihedralElement> {
    let n = self.n;
    (0..n)
      .map(DihedralElement::Rot)
      .chain((0..n).map(DihedralElement::Rfl))
  }
}

impl BinaryOperation<DihedralElement> for DihedralComposition {
  fn apply(&self, lop: &DihedralElement, rop: &DihedralElement) -> DihedralElement {
    use DihedralElement::*;

    let n = self.n as u32;
    let compose = |i: u16, j: u16, sign: bool| {
      let (i, j) = (i as u32 % n, j as u32 % n);
      let k = if sign { i + j } else { n + i - j };
      (k % n) as u16
    };

    match (*lop, *rop) {
      (Rot(i), Rot(j)) => Rot(compose(i, j, true)),
      (Rot(i), Rfl(j)) => Rfl(compose(i, j, true)),
      (Rfl(i), Rot(j)) => Rfl(compose(i, j, false)),
      (Rfl(i), Rfl(j)) => Rot(compose(i, j, false)),
    }
  }
}

#[cfg(test)]
mod tests {
  use googletest::{expect_false, expect_true, gtest, prelude::*};
  use rstest::rstest;

  use super::*;
  use crate::{operation::boxed, system::AlgebraicSystem};

  fn dihedral(n: u16) -> AlgebraicSystem<DihedralElement> {
    let op = DihedralComposition::new(n);
    AlgebraicSystem::new(op.elements(), vec![boxed(op)]).unwrap()
  }

  #[rstest]
  fn test_ops(#[values(1, 2, 3, 4, 5, 6)] n: u16) {
    let op = DihedralComposition::new(n);
    for a in op.elements() {
      for b in op.elements() {
        let expected = match (a, b) {
          // r_i * r_j = r_i+j
          (DihedralElement::Rot(i), DihedralElement::Rot(j)) => DihedralElement::Rot((i + j) % n),
          // r_i * s_j = s_i+j
          (DihedralElement::Rot(i), DihedralElement::Rfl(j)) => DihedralElement::Rfl((i + j) % n),
          // s_i * r_j = s_i-j
          (DihedralElement::Rfl(i), DihedralElement::Rot(j)) => {
            DihedralElement::Rfl((n + i - j) % n)
          }
          // s_i * s_j = r_i-j
          (DihedralElement::Rfl(i), DihedralElement::Rfl(j)) => {
            DihedralElement::Rot((n + i - j) % n)
          }
        };
        assert_eq!(op.apply(&a, &b), expected);
      }
    }
  }

  #[gtest]
  fn test_canonical_order() {
    let d3 = dihedral(3);
    expect_that!(
      d3.universe().as_slice().to_vec(),
      elements_are![
        &DihedralElement::Rot(0),
        &DihedralElement::Rot(1),
        &DihedralElement::Rot(2),
        &DihedralElement::Rfl(0),
        &DihedralElement::Rfl(1),
        &DihedralElement::Rfl(2),
      ]
    );
  }

  #[rstest]
  #[gtest]
  fn test_group_properties(#[values(1, 2, 3, 4, 5, 6)] n: u16) {
    let d = dihedral(n);
    expect_that!(d.len(), eq(DihedralComposition::new(n).order()));
    expect_true!(d.is_associative(0).unwrap());
    expect_true!(d.is_group(0).unwrap());
    expect_that!(
      d.get_identity(0).unwrap().copied(),
      some(eq(DihedralElement::Rot(0)))
    );
  }

  #[gtest]
  fn test_non_commutative() {
    expect_true!(dihedral(2).is_commutative(0).unwrap());
    for n in 3..=6 {
      expect_false!(dihedral(n).is_commutative(0).unwrap());
    }
  }

  #[gtest]
  fn test_inverses() {
    let n = 6;
    let d6 = dihedral(n);
    for el in DihedralComposition::new(n).elements() {
      let expected = match el {
        DihedralElement::Rot(i) => DihedralElement::Rot((n - i) % n),
        DihedralElement::Rfl(i) => DihedralElement::Rfl(i),
      };
      expect_that!(d6.get_inverse(&el, 0).unwrap().copied(), some(eq(expected)));
    }
  }

  #[gtest]
  fn test_order() {
    let d6 = dihedral(6);
    expect_that!(d6.order_of(&DihedralElement::Rot(1), 0).unwrap(), some(eq(6)));
    expect_that!(d6.order_of(&DihedralElement::Rot(2), 0).unwrap(), some(eq(3)));
    expect_that!(d6.order_of(&DihedralElement::Rfl(4), 0).unwrap(), some(eq(2)));
  }

  #[test]
  fn test_checked_constructor() {
    assert_eq!(DihedralComposition::try_new(0), Err(AlgebraError::ZeroModulus));
    assert_eq!(
      DihedralComposition::try_new(4).map(|op| op.order()),
      Ok(8)
    );
  }

  #[test]
  fn test_display() {
    assert_eq!(DihedralElement::Rot(3).to_string(), "r3");
    assert_eq!(DihedralElement::Rfl(0).to_string(), "s0");
  }
}
