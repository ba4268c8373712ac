//! AWA execution engine.
//!
//! The [`Machine`] runs a decoded [`awa_core::Program`] against the abyss, a
//! stack whose elements are either single values or flat collections
//! ([`Bubble`]). Output from `Print`/`PrintNum` goes to any [`std::io::Write`].
//!
//! # Example
//!
//! ```
//! use awa_core::Instruction::*;
//! use awa_vm::Machine;
//!
//! let mut machine = Machine::new(vec![Blow(5), Blow(3), Add, PrintNum, Terminate], Vec::new());
//! machine.run().unwrap();
//! assert_eq!(machine.output().as_slice(), b"8");
//! ```

mod arith;
mod awascii;
mod error;
mod execute;
mod machine;
mod stack;
mod value;

pub use arith::{BinaryOp, combine, merge};
pub use awascii::{AWASCII, PLACEHOLDER, awascii};
pub use error::{ArithmeticError, Fault, RuntimeError, StackError};
pub use execute::StepOutcome;
pub use machine::{Limits, Machine, NUM_LABELS};
pub use stack::Abyss;
pub use value::Bubble;
