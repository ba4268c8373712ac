use std::io::Write;

use awa_core::{Instruction, Program};

use crate::stack::Abyss;

/// Number of label slots.
pub const NUM_LABELS: usize = 32;

/// Optional resource limits for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    /// Stop with an error after this many executed instructions.
    pub max_steps: Option<u64>,
    /// Maximum number of bubbles in the abyss.
    pub max_depth: Option<usize>,
}

/// Interpreter state for one program run.
///
/// The machine owns the program, the abyss, the label bank and the program
/// counter. Printed output goes to `out`.
pub struct Machine<W: Write> {
    /// The decoded program. Immutable for the lifetime of the run.
    program: Program,
    /// The data stack.
    pub(crate) abyss: Abyss,
    /// Label slots, `None` while unset.
    pub(crate) labels: [Option<usize>; NUM_LABELS],
    /// Position of the next instruction.
    pub(crate) pc: usize,
    /// Set by `Terminate`.
    pub(crate) terminated: bool,
    /// Set when an instruction faults. A faulted machine never runs again.
    pub(crate) faulted: bool,
    /// Instructions executed so far.
    pub(crate) steps: u64,
    pub(crate) max_steps: Option<u64>,
    pub(crate) out: W,
}

impl<W: Write> Machine<W> {
    /// Create a machine with no limits.
    pub fn new(program: Program, out: W) -> Self {
        Self::with_limits(program, out, Limits::default())
    }

    /// Create a machine with the given limits.
    pub fn with_limits(program: Program, out: W, limits: Limits) -> Self {
        let abyss = match limits.max_depth {
            Some(max) => Abyss::with_max_depth(max),
            None => Abyss::new(),
        };
        Self {
            program,
            abyss,
            labels: [None; NUM_LABELS],
            pc: 0,
            terminated: false,
            faulted: false,
            steps: 0,
            max_steps: limits.max_steps,
            out,
        }
    }

    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// The instruction at the current program counter, if any.
    pub fn current(&self) -> Option<Instruction> {
        self.program.get(self.pc).copied()
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn abyss(&self) -> &Abyss {
        &self.abyss
    }

    /// The label bank. Set slots hold a program counter value.
    pub fn labels(&self) -> &[Option<usize>; NUM_LABELS] {
        &self.labels
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether `Terminate` has executed.
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Whether an instruction has faulted.
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }

    /// Whether execution is over, by `Terminate`, a fault, or running off
    /// the end.
    pub fn is_halted(&self) -> bool {
        self.terminated || self.faulted || self.pc >= self.program.len()
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Consume the machine, returning the output sink and the final abyss.
    pub fn finish(self) -> (W, Abyss) {
        (self.out, self.abyss)
    }
}
