use thiserror::Error;

use crate::instruction::Instruction;

/// Errors produced by the canonical encoder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The instruction has no awa spelling the decoder would read back.
    #[error("`{instruction}` cannot be written in awa (signed parameters only carry zero bits)")]
    Unrepresentable { instruction: Instruction },
}
