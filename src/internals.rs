// SPDX-FileCopyrightText: 2024 - 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::*;

impl Interpreter {
    /// Read the three parameter cells following the opcode at `ip`
    pub(crate) fn params(&self, ip: i64) -> Result<[i64; 3], InterpreterError> {
        Ok([
            self.code.get(ip + 1)?,
            self.code.get(ip + 2)?,
            self.code.get(ip + 3)?,
        ])
    }

    pub(crate) fn exec_instruction(&mut self) -> Result<StepOutcome, InterpreterError> {
        let ip = self.index;
        let instruction = self.decode(ip)?;
        log::trace!("ip: {ip:>8} | {instruction}");

        match instruction {
            Instruction::Add(params) => self.op3(OpCode::Add, params, i64::checked_add),
            Instruction::Mul(params) => self.op3(OpCode::Mul, params, i64::checked_mul),
            Instruction::Halt => {
                self.record(OpCode::Halt, &[]);
                Ok(StepOutcome::Halted)
            }
            Instruction::Invalid(opcode) => Err(InterpreterError::UnrecognizedOpcode { opcode, ip }),
        }
    }

    /// common logic of both arithmetic instructions
    ///
    /// Both operands are resolved and the result is computed before anything is written, so a
    /// fault leaves memory as it was.
    pub(crate) fn op3(
        &mut self,
        opcode: OpCode,
        [a, b, dest]: [i64; 3],
        operation: impl Fn(i64, i64) -> Option<i64>,
    ) -> Result<StepOutcome, InterpreterError> {
        let lhs = self.code.get(a)?;
        let rhs = self.code.get(b)?;
        let val = operation(lhs, rhs).ok_or(InterpreterError::Overflow { ip: self.index })?;
        self.code.set(dest, val)?;
        self.record(opcode, &[(a, lhs), (b, rhs), (dest, val)]);
        self.index += 4;
        Ok(StepOutcome::Running)
    }

    /// Push the instruction at the current `index` onto the active trace, if any
    fn record(&mut self, opcode: OpCode, resolved_params: &[(i64, i64)]) {
        if let Some(trace) = self.trace.as_mut() {
            trace.push(opcode, self.index, resolved_params);
        }
    }
}
