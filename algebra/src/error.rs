use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
  #[error("operation {op_idx} is not closed: {lop} * {rop} = {result} is not in the universe")]
  ClosureViolation {
    op_idx: usize,
    lop: String,
    rop: String,
    result: String,
  },

  #[error("operation index {idx} out of range, system has {num_operations} operation(s)")]
  OperationIndexOutOfRange { idx: usize, num_operations: usize },

  #[error("operand {operand} not in universe")]
  OperandNotInUniverse { operand: String },

  #[error("universe must contain at least one element")]
  EmptyUniverse,

  #[error("system must have at least one operation")]
  NoOperations,

  #[error("modulus must be positive")]
  ZeroModulus,
}

impl AlgebraError {
  pub(crate) fn not_in_universe<T: Debug>(operand: &T) -> Self {
    Self::OperandNotInUniverse {
      operand: format!("{operand:?}"),
    }
  }
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;
