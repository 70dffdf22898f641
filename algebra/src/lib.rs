pub mod dihedral;
pub mod error;
pub mod modular;
pub mod operation;
pub mod product;
mod system;
pub mod table;
pub mod universe;

pub use error::{AlgebraError, AlgebraResult};
pub use modular::{AddModN, MulModN};
pub use operation::{boxed, BinaryOperation, BoxedOperation};
pub use system::AlgebraicSystem;
pub use table::DEFAULT_OPERATION_NAME;
pub use universe::Universe;
