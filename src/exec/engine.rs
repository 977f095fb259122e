//! The stepping engine.

use crate::error::{PietError, Result};
use crate::types::Token;

use super::io::{InputSource, OutputSink};
use super::ops::{self, Site};
use super::state::ProgramState;

/// Result of a successful step. Failures are returned as errors and end
/// the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Running(ProgramState),
    /// The current codel is a dead end; the state is unchanged.
    Terminated(ProgramState),
}

impl Status {
    pub fn state(&self) -> &ProgramState {
        match self {
            Status::Running(state) | Status::Terminated(state) => state,
        }
    }

    pub fn into_state(self) -> ProgramState {
        match self {
            Status::Running(state) | Status::Terminated(state) => state,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Status::Terminated(_))
    }
}

/// Execute the token for the current codel and direction state.
pub fn step(
    state: &ProgramState,
    input: &mut dyn InputSource,
    output: &mut dyn OutputSink,
) -> Result<Status> {
    let edge = state.next_edge().ok_or(PietError::StartsInBlack {
        position: state.position,
    })?;
    let dp = state.direction.dp;
    let advance = || {
        edge.departure
            .step(dp)
            .ok_or(PietError::StartsInBlack {
                position: edge.departure,
            })
    };

    let next = match edge.token {
        Token::Terminate => return Ok(Status::Terminated(state.clone())),
        Token::ToBlack => ProgramState {
            direction: state.direction.blocked(),
            ..state.clone()
        },
        Token::ToWhite => ProgramState {
            position: advance()?,
            ..state.clone()
        },
        Token::ToColor {
            operation,
            codel_size,
        } => {
            let mut stack = state.stack.clone();
            let site = Site {
                departure: edge.departure,
                direction: state.direction,
            };
            let direction = ops::execute(operation, codel_size, site, &mut stack, input, output)?;
            ProgramState {
                graph: state.graph.clone(),
                position: advance()?,
                direction,
                stack,
            }
        }
    };

    Ok(Status::Running(next))
}

/// Execution limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Stop after this many steps; `None` runs until termination.
    pub max_steps: Option<u64>,
}

/// Why a run stopped without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Terminated,
    StepLimit,
}

/// Final state of a run and how many steps it took.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub state: ProgramState,
    /// Steps executed; reaching a terminal codel is not a step.
    pub steps: u64,
    pub outcome: Outcome,
}

/// Runs programs against an input source and output sink.
#[derive(Debug)]
pub struct Interpreter<I, O> {
    input: I,
    output: O,
    limits: Limits,
}

impl<I: InputSource, O: OutputSink> Interpreter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            limits: Limits::default(),
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn into_output(self) -> O {
        self.output
    }

    /// Take a single step from `state`.
    pub fn step(&mut self, state: &ProgramState) -> Result<Status> {
        step(state, &mut self.input, &mut self.output)
    }

    /// Step until the program terminates, fails, or hits the step limit.
    pub fn run(&mut self, state: ProgramState) -> Result<RunReport> {
        self.run_with(state, |_, _| {})
    }

    /// Like [`Interpreter::run`], calling `observe` with every new state
    /// and the step count that produced it.
    pub fn run_with(
        &mut self,
        mut state: ProgramState,
        mut observe: impl FnMut(&ProgramState, u64),
    ) -> Result<RunReport> {
        let mut steps = 0;

        loop {
            if self.limits.max_steps.is_some_and(|max| steps >= max) {
                return Ok(RunReport {
                    state,
                    steps,
                    outcome: Outcome::StepLimit,
                });
            }

            match self.step(&state)? {
                Status::Terminated(last) => {
                    return Ok(RunReport {
                        state: last,
                        steps,
                        outcome: Outcome::Terminated,
                    })
                }
                Status::Running(next) => {
                    steps += 1;
                    observe(&next, steps);
                    state = next;
                }
            }
        }
    }
}
