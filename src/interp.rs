use crate::{Error, stack};
use crate::stack::Stack;
use crate::types::{FunctionBody, Index};
use crate::opcode::*;

pub type InterpResult<T> = Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub stack_size: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            stack_size: 64,
        }
    }
}

/// Runs function bodies. Holds no per-call state, so one `Interp` may
/// serve any number of calls.
#[derive(Debug, Default, Clone)]
pub struct Interp {
    cfg: Config,
}

impl Interp {
    pub fn new(cfg: Config) -> Self {
        Interp { cfg }
    }

    /// Executes `body` with `args` bound to its leading locals and returns
    /// the value left on top of the operand stack.
    pub fn call(&self, body: &FunctionBody, args: &[i32]) -> InterpResult<i32> {
        let mut buf = vec![0i32; self.cfg.stack_size];
        let mut frame = Frame::new(body, args, Stack::new(&mut buf));
        frame.run()?;
        frame.result()
    }
}

/// Transient state for a single call. The body's side tables are read
/// through frame-local cursors and never modified.
pub struct Frame<'f> {
    body: &'f FunctionBody,
    args: &'f [i32],
    stack: Stack<'f, i32>,
    local_pos: usize,
    const_pos: usize,
}

impl<'f> Frame<'f> {
    pub fn new(body: &'f FunctionBody, args: &'f [i32], stack: Stack<'f, i32>) -> Self {
        Frame { body, args, stack, local_pos: 0, const_pos: 0 }
    }

    fn next_local(&mut self) -> InterpResult<Index> {
        let index = *self.body.locals.get(self.local_pos).ok_or(Error::MissingImmediate { opcode: LOCAL_GET })?;
        self.local_pos += 1;
        Ok(index)
    }

    fn next_constant(&mut self) -> InterpResult<i32> {
        let value = *self.body.constants.get(self.const_pos).ok_or(Error::MissingImmediate { opcode: I32_CONST })?;
        self.const_pos += 1;
        Ok(value)
    }

    /// Parameters come first, then the body's declared locals, which are
    /// always zero since nothing can write to them.
    fn local(&self, index: Index) -> InterpResult<i32> {
        let i = index as usize;
        if i < self.args.len() {
            Ok(self.args[i])
        } else if i - self.args.len() < self.body.local_count as usize {
            Ok(0)
        } else {
            Err(Error::InvalidLocal { index })
        }
    }

    pub fn run(&mut self) -> InterpResult<()> {
        let body = self.body;
        for &op in body.instructions.iter() {
            trace!("{:?} {}", self.stack, Opcode::from_code(op).map(|o| o.text).unwrap_or("?"));
            match op {
                NOP => {},
                END => break,
                LOCAL_GET => {
                    let index = self.next_local()?;
                    let value = self.local(index)?;
                    self.stack.push(value)?;
                },
                I32_CONST => {
                    let value = self.next_constant()?;
                    self.stack.push(value)?;
                },
                I32_ADD | I32_SUB | I32_MUL | I32_DIV_S => {
                    let res = fold(op, self.stack.as_slice())?;
                    trace!("{:?} => {}", self.stack.as_slice(), res);
                    self.stack.reset();
                    self.stack.push(res)?;
                },
                _ => return Err(Error::InvalidInstruction { opcode: op }),
            }
        }
        Ok(())
    }

    pub fn result(&self) -> InterpResult<i32> {
        self.stack.dump();
        self.stack.top().map_err(|_| Error::NoResult)
    }
}

/// Folds every operand on the stack, bottom first, into one value.
///
/// `i32.add` and `i32.mul` start from their identity and so accept an empty
/// stack. `i32.sub` and `i32.div_s` start from the bottom-most operand.
pub fn fold(op: u8, values: &[i32]) -> InterpResult<i32> {
    match op {
        I32_ADD => Ok(values.iter().fold(0i32, |acc, &v| acc.wrapping_add(v))),
        I32_MUL => Ok(values.iter().fold(1i32, |acc, &v| acc.wrapping_mul(v))),
        I32_SUB => {
            let (&first, rest) = values.split_first().ok_or(stack::Error::Underflow)?;
            Ok(rest.iter().fold(first, |acc, &v| acc.wrapping_sub(v)))
        },
        I32_DIV_S => {
            let (&first, rest) = values.split_first().ok_or(stack::Error::Underflow)?;
            rest.iter().try_fold(first, |acc, &v| div_s(acc, v))
        },
        _ => Err(Error::InvalidInstruction { opcode: op }),
    }
}

fn div_s(lhs: i32, rhs: i32) -> InterpResult<i32> {
    if rhs == 0 {
        return Err(Error::DivisionByZero)
    }
    lhs.checked_div(rhs).ok_or(Error::IntegerOverflow)
}
