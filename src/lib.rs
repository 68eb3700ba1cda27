// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Library providing a positional-mode Intcode interpreter and a noun/verb parameter search
//!
//! The interpreter understands the three opcodes of the original [Day 2] machine: `1` (add),
//! `2` (multiply) and `99` (halt). Every parameter is an address, and every address is
//! bounds-checked. Anything the machine cannot execute is a fault, reported as an
//! [`InterpreterError`].
//!
//! # Example
//!
//! ```rust
//! use gravity_assist::prelude::*;
//! let mut interpreter = Interpreter::new(vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
//!
//! assert_eq!(interpreter.run(), Ok(3500));
//! assert_eq!(interpreter.state(), State::Halted);
//! ```
//!
//! Searching for the noun and verb that produce a given output:
//!
//! ```rust
//! use gravity_assist::prelude::*;
//! let program = Memory::from(vec![1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50]);
//! let space = SearchSpace { target: 3500, range: 0..100 };
//!
//! assert_eq!(search(&program, &space), Some(NounVerb { noun: 9, verb: 10 }));
//! ```
//!
//! [Day 2]: https://adventofcode.com/2019/day/2

mod internals;
mod memory;
pub mod parse;
pub mod search;
pub mod trace;

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Index;

pub use memory::Memory;
use trace::Trace;

/// A small module that re-exports items needed when working with the interpreter
pub mod prelude {
    pub use crate::search::{NounVerb, SearchSpace, par_search, search};
    pub use crate::{Interpreter, InterpreterError, Memory, State};
}

/// The run state of an [Interpreter].
///
/// [Halted](State::Halted) and [Faulted](State::Faulted) are terminal: once either is reached, no
/// more instructions will be executed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum State {
    /// There are more instructions to execute
    Running,
    /// A `HALT` instruction has been executed
    Halted,
    /// An instruction could not be executed
    Faulted,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum StepOutcome {
    Running,
    Halted,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
/// An error occured when executing an intcode instruction
pub enum InterpreterError {
    /// An opcode other than `1`, `2` or `99` was encountered
    UnrecognizedOpcode {
        /// the offending int
        opcode: i64,
        /// where it was found
        ip: i64,
    },
    /// An address outside of memory was read from or written to
    OutOfBounds {
        /// the address that was accessed
        address: i64,
        /// the number of cells in memory at the time
        len: usize,
    },
    /// The result of an arithmetic instruction does not fit in an `i64`
    Overflow {
        /// address of the overflowing instruction
        ip: i64,
    },
    /// The interpreter previously faulted, and can't be resumed
    Poisoned,
}

impl Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedOpcode { opcode, ip } => {
                write!(f, "encountered unrecognized opcode {opcode} at address {ip}")
            }
            Self::OutOfBounds { address, len } => write!(
                f,
                "address {address} is out of bounds for memory of {len} cells"
            ),
            Self::Overflow { ip } => {
                write!(f, "arithmetic overflow in instruction at address {ip}")
            }
            Self::Poisoned => write!(f, "interpreter is poisoned after a previous fault"),
        }
    }
}

impl Error for InterpreterError {}

/// An opcode the machine knows how to execute
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum OpCode {
    /// `dest = a + b`
    Add = 1,
    /// `dest = a * b`
    Mul = 2,
    /// stop executing
    Halt = 99,
}

impl TryFrom<i64> for OpCode {
    type Error = i64;
    fn try_from(i: i64) -> Result<Self, Self::Error> {
        match i {
            1 => Ok(Self::Add),
            2 => Ok(Self::Mul),
            99 => Ok(Self::Halt),
            other => Err(other),
        }
    }
}

impl Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Halt => "HALT",
        })
    }
}

/// A decoded instruction.
///
/// The parameters of [Add](Instruction::Add) and [Mul](Instruction::Mul) are the raw addresses
/// `[a, b, dest]`, not yet resolved against memory.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Instruction {
    /// `mem[dest] = mem[a] + mem[b]`
    Add([i64; 3]),
    /// `mem[dest] = mem[a] * mem[b]`
    Mul([i64; 3]),
    /// stop with the value at address 0 as the result
    Halt,
    /// an int that is not a known opcode
    Invalid(i64),
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add([a, b, dest]) => write!(f, "{} {a}, {b}, {dest}", OpCode::Add),
            Self::Mul([a, b, dest]) => write!(f, "{} {a}, {b}, {dest}", OpCode::Mul),
            Self::Halt => write!(f, "{}", OpCode::Halt),
            Self::Invalid(n) => write!(f, "DATA {n}"),
        }
    }
}

#[derive(Debug, Clone)]
/// An intcode interpreter, which provides optional tracing of instructions executed.
pub struct Interpreter {
    index: i64,
    state: State,
    code: Memory,
    trace: Option<Trace>,
}

// ignore the trace field
impl PartialEq for Interpreter {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.state == other.state && self.code == other.code
    }
}

/// Panics on an out-of-bounds address, like slice indexing. Use [Interpreter::mem_get] for a
/// checked read.
impl Index<i64> for Interpreter {
    type Output = i64;

    fn index(&self, i: i64) -> &Self::Output {
        &self.code.as_slice()[usize::try_from(i).unwrap_or(usize::MAX)]
    }
}

impl Interpreter {
    /// Create a new interpreter. Collects `code` into the starting memory state.
    pub fn new(code: impl IntoIterator<Item = i64>) -> Self {
        Self {
            index: 0,
            state: State::Running,
            code: code.into_iter().collect(),
            trace: None,
        }
    }

    /// The current [State]
    pub fn state(&self) -> State {
        self.state
    }

    /// The current instruction pointer
    pub fn instr_ptr(&self) -> i64 {
        self.index
    }

    /// A view of the current memory
    pub fn memory(&self) -> &Memory {
        &self.code
    }

    /// Consume the interpreter, returning its memory
    pub fn into_memory(self) -> Memory {
        self.code
    }

    /// Get the memory at `address`
    #[doc(alias = "peek")]
    pub fn mem_get(&self, address: i64) -> Result<i64, InterpreterError> {
        self.code.get(address)
    }

    /// Manually set a memory location
    #[doc(alias("poke", "write"))]
    pub fn mem_override(&mut self, address: i64, value: i64) -> Result<(), InterpreterError> {
        self.code.set(address, value)
    }

    /// Write `noun` to address 1 and `verb` to address 2.
    ///
    /// If memory is too short to hold both, nothing is written.
    pub fn seed(&mut self, noun: i64, verb: i64) {
        if let [_, noun_cell, verb_cell, ..] = self.code.as_mut_slice() {
            *noun_cell = noun;
            *verb_cell = verb;
        } else {
            log::debug!(
                "memory has {} cells, not seeding noun {noun} and verb {verb}",
                self.code.len()
            );
        }
    }

    /// Decode the instruction at `ip` without executing it.
    ///
    /// Only the opcode cell is read for [Instruction::Halt] and [Instruction::Invalid]. The source
    /// and destination addresses of arithmetic instructions are not checked here: that happens
    /// when they are dereferenced.
    pub fn decode(&self, ip: i64) -> Result<Instruction, InterpreterError> {
        let op_int = self.code.get(ip)?;
        Ok(match OpCode::try_from(op_int) {
            Ok(OpCode::Add) => Instruction::Add(self.params(ip)?),
            Ok(OpCode::Mul) => Instruction::Mul(self.params(ip)?),
            Ok(OpCode::Halt) => Instruction::Halt,
            Err(n) => Instruction::Invalid(n),
        })
    }

    /// Execute a single instruction.
    ///
    /// Returns the resulting [State]. If the instruction faults, the interpreter is marked
    /// [Faulted](State::Faulted) and the cause is returned; any further call returns
    /// [`InterpreterError::Poisoned`].
    pub fn step(&mut self) -> Result<State, InterpreterError> {
        match self.state {
            State::Running => (),
            State::Halted => return Ok(State::Halted),
            State::Faulted => return Err(InterpreterError::Poisoned),
        }
        match self.exec_instruction() {
            Ok(StepOutcome::Running) => Ok(State::Running),
            Ok(StepOutcome::Halted) => {
                self.state = State::Halted;
                Ok(State::Halted)
            }
            Err(e) => {
                log::debug!("faulted at {}: {e}", self.index);
                self.state = State::Faulted;
                Err(e)
            }
        }
    }

    /// Execute until the program halts, returning the value at address 0.
    ///
    /// On a fault, returns the [`InterpreterError`] that caused it. Calling this on an interpreter
    /// that has already halted returns the value at address 0 again without executing anything.
    pub fn run(&mut self) -> Result<i64, InterpreterError> {
        let mut steps = 0_u64;
        while self.step()? == State::Running {
            steps += 1;
        }
        let value = self.code.get(0)?;
        log::debug!("halted after {steps} instructions with {value} at address 0");
        Ok(value)
    }

    /// [Seed](Interpreter::seed) `noun` and `verb`, then [run](Interpreter::run) to completion.
    pub fn run_with(mut self, noun: i64, verb: i64) -> Result<i64, InterpreterError> {
        self.seed(noun, verb);
        self.run()
    }
}
