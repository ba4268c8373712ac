//! Fetch, dispatch and advance.
//!
//! Each step runs the instruction at the program counter and then moves on
//! by one, unless the handler redirects control:
//! - `Jump` resumes at the position recorded by its `Label`, i.e. the label
//!   instruction itself runs again
//! - a comparison that does not hold skips the following instruction
//! - `Terminate` stops without advancing

use std::io::Write;

use awa_core::Instruction;
use log::{debug, trace, warn};

use crate::arith::{self, BinaryOp};
use crate::awascii::awascii;
use crate::error::{Fault, RuntimeError};
use crate::machine::Machine;
use crate::value::Bubble;

/// How control continues after an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DispatchResult {
    /// Advance by one.
    Ok,
    /// Advance by two, skipping the next instruction.
    Skip,
    /// Continue at the given position.
    Jump(usize),
    /// Stop execution.
    Halt,
}

/// Result of a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// More instructions remain.
    Continue,
    /// Execution is over.
    Halted,
}

impl<W: Write> Machine<W> {
    /// Execute one instruction.
    ///
    /// Stepping a halted machine does nothing, and a fault halts the
    /// machine for good. The step cap is not checked here; see
    /// [`Machine::run`].
    pub fn step(&mut self) -> Result<StepOutcome, RuntimeError> {
        if self.is_halted() {
            return Ok(StepOutcome::Halted);
        }
        let Some(instruction) = self.current() else {
            return Ok(StepOutcome::Halted);
        };
        let pc = self.pc;
        trace!(
            "{:>4}  {:<8} depth={}",
            pc,
            instruction.to_string(),
            self.abyss.depth()
        );

        let result = self.dispatch(instruction).map_err(|source| {
            self.faulted = true;
            warn!("fault at pc {} ({}): {}", pc, instruction, source);
            RuntimeError::Fault {
                pc,
                instruction,
                source,
            }
        })?;
        self.steps += 1;

        match result {
            DispatchResult::Ok => self.pc += 1,
            DispatchResult::Skip => self.pc += 2,
            DispatchResult::Jump(target) => self.pc = target,
            DispatchResult::Halt => self.terminated = true,
        }

        if self.is_halted() {
            Ok(StepOutcome::Halted)
        } else {
            Ok(StepOutcome::Continue)
        }
    }

    /// Run until the program terminates, runs off the end, faults, or hits
    /// the step cap.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while !self.is_halted() {
            if let Some(limit) = self.max_steps
                && self.steps >= limit
            {
                return Err(RuntimeError::StepLimit { limit, pc: self.pc });
            }
            self.step()?;
        }
        debug!(
            "halted at pc {} after {} steps (terminated: {})",
            self.pc, self.steps, self.terminated
        );
        Ok(())
    }

    fn dispatch(&mut self, instruction: Instruction) -> Result<DispatchResult, Fault> {
        match instruction {
            Instruction::NoOp => {}
            Instruction::Print => self.print()?,
            Instruction::PrintNum => self.print_num()?,
            Instruction::Read | Instruction::ReadNum => {
                debug!("input is not supported; {} ignored", instruction);
            }
            Instruction::Blow(v) => self.abyss.push(Bubble::Single(v as i32))?,
            Instruction::Submerge(n) => self.abyss.submerge(n as usize),
            Instruction::Pop => {
                if let Bubble::Double(values) = self.abyss.pop()? {
                    self.abyss.push_many(values.into_iter().map(Bubble::Single))?;
                }
            }
            Instruction::Duplicate => self.abyss.dup()?,
            Instruction::Surround(n) => {
                let popped = self.abyss.pop_many(n as usize)?;
                let mut values = Vec::with_capacity(popped.len());
                for bubble in popped {
                    bubble.flatten_into(&mut values);
                }
                self.abyss.push(Bubble::Double(values))?;
            }
            Instruction::Merge => {
                let (left, right) = self.abyss.pop_pair()?;
                self.abyss.push(arith::merge(left, right))?;
            }
            Instruction::Add => self.arithmetic(BinaryOp::Add)?,
            Instruction::Subtract => self.arithmetic(BinaryOp::Subtract)?,
            Instruction::Multiply => self.arithmetic(BinaryOp::Multiply)?,
            Instruction::Divide => self.arithmetic(BinaryOp::Divide)?,
            Instruction::Count => {
                let count = self.abyss.top()?.count();
                self.abyss.push(Bubble::Single(count as i32))?;
            }
            Instruction::Label(slot) => {
                if let Some(entry) = self.labels.get_mut(slot as usize) {
                    *entry = Some(self.pc);
                }
            }
            Instruction::Jump(slot) => {
                if let Some(Some(target)) = self.labels.get(slot as usize) {
                    return Ok(DispatchResult::Jump(*target));
                }
            }
            Instruction::EqualTo => return Ok(self.compare(|a, b| a == b)),
            Instruction::LessThan => return Ok(self.compare(|a, b| a < b)),
            Instruction::GreaterThan => return Ok(self.compare(|a, b| a > b)),
            Instruction::Terminate => return Ok(DispatchResult::Halt),
        }
        Ok(DispatchResult::Ok)
    }

    fn print(&mut self) -> Result<(), Fault> {
        match self.abyss.pop()? {
            Bubble::Single(v) => write!(self.out, "{}", awascii(v))?,
            Bubble::Double(values) => {
                let text: String = values.into_iter().map(awascii).collect();
                self.out.write_all(text.as_bytes())?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_num(&mut self) -> Result<(), Fault> {
        match self.abyss.pop()? {
            Bubble::Single(v) => write!(self.out, "{}", v)?,
            Bubble::Double(values) => {
                for (i, v) in values.into_iter().enumerate() {
                    if i > 0 {
                        self.out.write_all(b" ")?;
                    }
                    if v < 0 {
                        self.out.write_all(b"~")?;
                    }
                    write!(self.out, "{}", v.unsigned_abs())?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn arithmetic(&mut self, op: BinaryOp) -> Result<(), Fault> {
        let (left, right) = self.abyss.pop_pair()?;
        let result = arith::combine(op, left, right)?;
        self.abyss.push(result)?;
        Ok(())
    }

    /// Compare the top bubble against the one below it. Anything other than
    /// two singles does not hold.
    fn compare(&self, holds: fn(i32, i32) -> bool) -> DispatchResult {
        let single = |depth| self.abyss.peek(depth).ok().and_then(Bubble::as_single);
        match (single(0), single(1)) {
            (Some(top), Some(next)) if holds(top, next) => DispatchResult::Ok,
            _ => DispatchResult::Skip,
        }
    }
}
