//! Stack operations.
//!
//! `a` is the top of the stack and `b` the value beneath it. An operation
//! that finds too few values leaves the stack untouched.

use crate::error::{PietError, Result};
use crate::types::{DirectionState, Operation, Position};

use super::io::{InputSource, OutputSink};

/// Where an operation fires from, for error reporting.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Site {
    pub departure: Position,
    pub direction: DirectionState,
}

/// Apply `op` to `stack` and return the direction state afterwards.
pub(crate) fn execute(
    op: Operation,
    codel_size: usize,
    site: Site,
    stack: &mut Vec<i64>,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> Result<DirectionState> {
    let mut direction = site.direction;

    match op {
        Operation::Noop => {}
        Operation::Push => stack.push(i64::try_from(codel_size).unwrap_or(i64::MAX)),
        Operation::Pop => {
            stack.pop();
        }
        Operation::Add => binary(stack, |b, a| b.wrapping_add(a)),
        Operation::Subtract => binary(stack, |b, a| b.wrapping_sub(a)),
        Operation::Multiply => binary(stack, |b, a| b.wrapping_mul(a)),
        Operation::Divide => {
            if stack.last() == Some(&0) && stack.len() >= 2 {
                return Err(PietError::DivisionByZero {
                    position: site.departure,
                    direction: site.direction,
                });
            }
            binary(stack, floor_div);
        }
        Operation::Mod => modulo(stack),
        Operation::Not => {
            if let Some(a) = stack.last_mut() {
                *a = i64::from(*a == 0);
            }
        }
        Operation::Greater => binary(stack, |b, a| i64::from(b > a)),
        Operation::Pointer => {
            if let Some(a) = stack.pop() {
                direction.dp = direction.dp.rotate(a);
            }
        }
        Operation::Switch => {
            if let Some(a) = stack.pop() {
                if a.rem_euclid(2) == 1 {
                    direction.cc = direction.cc.toggled();
                }
            }
        }
        Operation::Duplicate => {
            if let Some(&a) = stack.last() {
                stack.push(a);
            }
        }
        Operation::Roll => roll(stack),
        Operation::InNumber => {
            if let Some(value) = input.read_integer() {
                stack.push(value);
            }
        }
        Operation::InChar => {
            if let Some(c) = input.read_character() {
                stack.push(i64::from(u32::from(c)));
            }
        }
        Operation::OutNumber => {
            if let Some(a) = stack.pop() {
                output.write_integer(a)?;
            }
        }
        Operation::OutChar => {
            let c = stack
                .last()
                .and_then(|&a| u32::try_from(a).ok())
                .and_then(char::from_u32);
            if let Some(c) = c {
                stack.pop();
                output.write_character(c)?;
            }
        }
    }

    Ok(direction)
}

/// Pop `a` and `b`, push `f(b, a)`.
fn binary(stack: &mut Vec<i64>, f: impl FnOnce(i64, i64) -> i64) {
    if let [.., b, a] = *stack.as_slice() {
        stack.truncate(stack.len() - 2);
        stack.push(f(b, a));
    }
}

/// `b mod a`. A zero divisor leaves the stack as it was; a zero dividend
/// consumes both values and pushes nothing.
fn modulo(stack: &mut Vec<i64>) {
    let [.., b, a] = *stack.as_slice() else {
        return;
    };
    if a == 0 {
        return;
    }
    stack.truncate(stack.len() - 2);
    if b != 0 {
        stack.push(floor_mod(b, a));
    }
}

/// Rotate the top `depth` values `rolls` times; a positive roll buries the
/// top value at `depth`.
fn roll(stack: &mut Vec<i64>) {
    let [.., depth, rolls] = *stack.as_slice() else {
        return;
    };
    let remaining = stack.len() - 2;
    let Ok(depth) = usize::try_from(depth) else {
        return;
    };
    if depth == 0 || depth > remaining || rolls == 0 {
        return;
    }

    stack.truncate(remaining);
    let turns = rolls.rem_euclid(depth as i64) as usize;
    stack[remaining - depth..].rotate_right(turns);
}

/// Division rounding towards negative infinity.
fn floor_div(b: i64, a: i64) -> i64 {
    let q = b.wrapping_div(a);
    if b.wrapping_rem(a) != 0 && ((b < 0) != (a < 0)) {
        q.wrapping_sub(1)
    } else {
        q
    }
}

/// Remainder taking the sign of the divisor.
fn floor_mod(b: i64, a: i64) -> i64 {
    let r = b.wrapping_rem(a);
    if r != 0 && ((r < 0) != (a < 0)) {
        r.wrapping_add(a)
    } else {
        r
    }
}
