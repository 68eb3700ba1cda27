// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Recording of executed instructions
//!
//! See [Interpreter::start_trace]
use std::fmt::{self, Debug, Display};

use super::{Interpreter, OpCode};

/// A parameter as written in memory, paired with what it resolved to
type Resolved = (i64, i64);

#[derive(Clone, Copy, PartialEq, Eq)]
enum TracedOp {
    Add(Resolved, Resolved, Resolved),
    Mul(Resolved, Resolved, Resolved),
    Halt,
}

#[derive(Clone, PartialEq, Eq)]
/// An opaque type containing information about what instruction was executed, which can be queried
/// with its various methods, or converted into a [String] using its [Display] impl.
pub struct TracedInstr {
    op: TracedOp,
    instr_ptr: i64,
}

impl TracedInstr {
    /// Return the instruction pointer's position when the traced instruction was executed
    pub fn instr_ptr(&self) -> i64 {
        self.instr_ptr
    }

    /// Return the actual integer of the traced instruction
    pub fn op_int(&self) -> i64 {
        self.op_code() as i64
    }

    /// Return the opcode of the traced instruction
    pub fn op_code(&self) -> OpCode {
        match self.op {
            TracedOp::Add(..) => OpCode::Add,
            TracedOp::Mul(..) => OpCode::Mul,
            TracedOp::Halt => OpCode::Halt,
        }
    }

    /// If the instruction stored a value, return that value
    pub fn stored_val(&self) -> Option<i64> {
        match self.op {
            TracedOp::Add(_, _, (_, val)) | TracedOp::Mul(_, _, (_, val)) => Some(val),
            TracedOp::Halt => None,
        }
    }

    fn build(opcode: OpCode, instr_ptr: i64, resolved_params: &[Resolved]) -> Self {
        let op = match (opcode, resolved_params) {
            (OpCode::Add, &[a, b, dest]) => TracedOp::Add(a, b, dest),
            (OpCode::Mul, &[a, b, dest]) => TracedOp::Mul(a, b, dest),
            (OpCode::Halt, &[]) => TracedOp::Halt,
            _ => unreachable!("{opcode} traced with {} params", resolved_params.len()),
        };
        Self { op, instr_ptr }
    }
}

impl Interpreter {
    /// Begin a [Trace] of executed instructions. If a trace is already running, this replaces that
    /// trace and returns in a [`Some`], otherwise, it returns [`None`].
    ///
    /// # Example
    /// ```
    ///# use gravity_assist::prelude::*;
    /// let mut interp = Interpreter::new([1, 0, 0, 0, 99]);
    /// assert!(interp.start_trace().is_none());
    /// interp.run().unwrap();
    /// let trace = interp.end_trace().unwrap();
    /// assert_eq!(trace.0.len(), 2);
    /// assert_eq!(trace.0[0].stored_val(), Some(2));
    /// ```
    pub fn start_trace(&mut self) -> Option<Trace> {
        self.trace.replace(Trace::new())
    }

    /// Stop tracing executed instructions into a [Trace]. If no trace was active, returns [`None`]
    ///
    /// see [Interpreter::start_trace]
    pub fn end_trace(&mut self) -> Option<Trace> {
        self.trace.take()
    }

    /// Get a view of the current trace
    pub fn show_trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A log of instructions that an [Interpreter] has executed since a call to
/// [Interpreter::start_trace]
///
/// see [Interpreter::start_trace]
pub struct Trace(pub Vec<TracedInstr>);

impl Trace {
    pub(crate) fn push(&mut self, opcode: OpCode, instr_ptr: i64, resolved_params: &[Resolved]) {
        self.0
            .push(TracedInstr::build(opcode, instr_ptr, resolved_params))
    }

    pub(crate) fn new() -> Self {
        Self(Vec::new())
    }
}

impl Debug for TracedOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        macro_rules! arg {
            ($arg: ident) => {
                format_args!("{} => {}", $arg.0, $arg.1)
            };
        }
        match self {
            Self::Add(a0, a1, a2) => f
                .debug_tuple("Add")
                .field(&arg!(a0))
                .field(&arg!(a1))
                .field(&arg!(a2))
                .finish(),
            Self::Mul(a0, a1, a2) => f
                .debug_tuple("Mul")
                .field(&arg!(a0))
                .field(&arg!(a1))
                .field(&arg!(a2))
                .finish(),
            Self::Halt => write!(f, "Halt"),
        }
    }
}

impl Debug for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedInstr")
            .field("op", &self.op)
            .field("instr_ptr", &self.instr_ptr)
            .finish()
    }
}

impl Display for TracedInstr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ran instruction at {:0>4}: op int {: <2} | ",
            self.instr_ptr,
            self.op_int()
        )?;
        match self.op {
            TracedOp::Add((pa, va), (pb, vb), (dest, val))
            | TracedOp::Mul((pa, va), (pb, vb), (dest, val)) => write!(
                f,
                "[{} {pa} (resolves to {va}), {pb} (resolves to {vb}), {dest} (stored {val})]",
                self.op_code(),
            ),
            TracedOp::Halt => write!(f, "[HALT]"),
        }
    }
}
