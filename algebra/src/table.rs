use std::{
  fmt::{Debug, Display},
  hash::Hash,
};

use itertools::Itertools;

use crate::{error::AlgebraResult, system::AlgebraicSystem};

/// Header name used when a caller has no better name for an operation.
pub const DEFAULT_OPERATION_NAME: &str = "operation";

impl<T> AlgebraicSystem<T>
where
  T: Clone + Eq + Hash + Debug + Display,
{
  /// Renders the Cayley table of operation `idx` as comma-separated text.
  ///
  /// The header row is `name` followed by every element in canonical order.
  /// Each following row starts with an element `a` and lists `a * b` for
  /// every `b` in canonical order. Every row, including the last, ends in a
  /// newline.
  pub fn export_table(&self, idx: usize, name: &str) -> AlgebraResult<String> {
    let op = self.op(idx)?;
    let universe = self.universe();

    let mut table = format!("{name}, {}\n", universe.iter().join(", "));
    for a in universe {
      let row = universe.iter().map(|b| op.apply(a, b)).join(", ");
      table.push_str(&format!("{a}, {row}\n"));
    }
    Ok(table)
  }
}
