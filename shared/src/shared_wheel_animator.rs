use serde::{Deserialize, Serialize};

use crate::constants::WheelConfig;

/// Follow-up spin queued after landing on an already answered wedge.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    /// Distance to the nearest unanswered wedge.
    pub increments: u32,
    /// The answered wedge the wheel stopped on; the next landing is computed from it.
    pub previous_final: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SpinTiming {
    pub increments_to_vary_delay: u32,
    pub initial_delay_ms: u32,
    pub delay_variance_ms: u32,
    pub continuation_pause_ms: u32,
}

impl From<&WheelConfig> for SpinTiming {
    fn from(config: &WheelConfig) -> Self {
        Self {
            increments_to_vary_delay: config.increments_to_vary_delay,
            initial_delay_ms: config.initial_delay_ms,
            delay_variance_ms: config.delay_variance_ms,
            continuation_pause_ms: config.continuation_pause_ms,
        }
    }
}

impl Default for SpinTiming {
    fn default() -> Self {
        Self::from(&WheelConfig::default())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum AnimatorState {
    Idle,
    Spinning {
        /// 1-based index of the next advance.
        step: u32,
        total_steps: u32,
        delay_ms: u32,
        destination: usize,
        continuation: bool,
    },
    Landed { destination: usize },
    AwaitingContinuation(Continuation),
    /// Every question has been answered.
    Finished,
}

/// Result of a single animator tick. Both variants mean the wheel moved by one wedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Advance { next_delay_ms: u32 },
    Land { destination: usize, continuation: bool },
}

/// Step scheduler for one spin: one wedge per tick, speeding up over the first
/// few steps and slowing down over the last few.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelAnimator {
    state: AnimatorState,
    timing: SpinTiming,
}

impl WheelAnimator {
    pub fn new(timing: SpinTiming) -> Self {
        Self {
            state: AnimatorState::Idle,
            timing,
        }
    }

    pub fn state(&self) -> &AnimatorState {
        &self.state
    }

    pub fn timing(&self) -> SpinTiming {
        self.timing
    }

    pub fn start(&mut self, total_steps: u32, destination: usize, continuation: bool) {
        self.state = AnimatorState::Spinning {
            step: 1,
            total_steps,
            delay_ms: self.timing.initial_delay_ms,
            destination,
            continuation,
        };
    }

    /// Performs one advance. Returns `None` when no spin is running.
    pub fn tick(&mut self) -> Option<Tick> {
        let AnimatorState::Spinning {
            step,
            total_steps,
            delay_ms,
            destination,
            continuation,
        } = self.state.clone()
        else {
            return None;
        };

        if step < total_steps {
            let next_delay_ms = self.next_delay(step, total_steps, delay_ms);
            log::debug!("wheel step {}/{}, next in {}ms", step, total_steps, next_delay_ms);
            self.state = AnimatorState::Spinning {
                step: step + 1,
                total_steps,
                delay_ms: next_delay_ms,
                destination,
                continuation,
            };
            Some(Tick::Advance { next_delay_ms })
        } else {
            self.state = AnimatorState::Landed { destination };
            Some(Tick::Land {
                destination,
                continuation,
            })
        }
    }

    // The adjustment accumulates: the wheel keeps accelerating through the
    // opening steps and keeps slowing through the closing ones.
    fn next_delay(&self, step: u32, total_steps: u32, delay_ms: u32) -> u32 {
        let vary = self.timing.increments_to_vary_delay;
        if step < vary {
            delay_ms.saturating_sub(self.timing.delay_variance_ms)
        } else if step + vary > total_steps {
            delay_ms.saturating_add(self.timing.delay_variance_ms)
        } else {
            delay_ms
        }
    }

    pub fn await_continuation(&mut self, continuation: Continuation) {
        self.state = AnimatorState::AwaitingContinuation(continuation);
    }

    pub fn take_continuation(&mut self) -> Option<Continuation> {
        match self.state {
            AnimatorState::AwaitingContinuation(continuation) => {
                self.state = AnimatorState::Idle;
                Some(continuation)
            }
            _ => None,
        }
    }

    pub fn rest(&mut self) {
        self.state = AnimatorState::Idle;
    }

    pub fn finish(&mut self) {
        self.state = AnimatorState::Finished;
    }
}
