use std::io;

use awa_core::Instruction;
use thiserror::Error;

/// Abyss operation errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// An operation needed more bubbles than the abyss holds.
    #[error("abyss underflow: needed {needed} bubble(s), found {depth}")]
    Underflow { needed: usize, depth: usize },
    /// The configured depth limit was reached.
    #[error("abyss overflow: depth limit of {limit} reached")]
    Overflow { limit: usize },
}

/// Arithmetic errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// The cause of a runtime fault.
#[derive(Debug, Error)]
pub enum Fault {
    #[error(transparent)]
    Stack(#[from] StackError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("output failed: {0}")]
    Output(#[from] io::Error),
}

/// Runtime error during execution.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An instruction faulted. The run cannot continue.
    #[error("fault at pc {pc} ({instruction}): {source}")]
    Fault {
        pc: usize,
        instruction: Instruction,
        #[source]
        source: Fault,
    },
    /// The externally imposed step cap was reached.
    #[error("step limit of {limit} reached at pc {pc}")]
    StepLimit { limit: u64, pc: usize },
}

impl RuntimeError {
    /// Program counter at which execution stopped.
    pub fn pc(&self) -> usize {
        match self {
            RuntimeError::Fault { pc, .. } | RuntimeError::StepLimit { pc, .. } => *pc,
        }
    }
}
