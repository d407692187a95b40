use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: usize = 2;
pub const MAX_QUESTIONS: usize = 30;
pub const DEFAULT_QUESTIONS: usize = 12;

// Spin timing
pub const MIN_INCREMENTS: u32 = 30;
pub const MAX_INCREMENTS: u32 = 60; // exclusive
pub const INCREMENTS_TO_VARY_DELAY: u32 = 12;
pub const INITIAL_DELAY_MS: u32 = 470;
pub const DELAY_VARIANCE_MS: u32 = 35;
pub const CONTINUATION_PAUSE_MS: u32 = 2000;

// Wedge colors
pub const EVEN_WEDGE_COLOR: &str = "#000000";
pub const ODD_WEDGE_COLOR: &str = "#161616";
pub const JUST_ANSWERED_COLOR: &str = "#EBB238";
pub const VISITED_COLOR: &str = "#756F61";
pub const WEDGE_BORDER_COLOR: &str = "#D4B065";
pub const POINTER_COLOR: &str = "#E53935";

pub const QUESTION_COUNT_HINT: &str = "Enter a number between 2 and 30";
pub const QUESTION_COUNT_PROMPT: &str = "How many questions do you have prepared?";
pub const LAST_QUESTION_SUFFIX: &str = ". That's the last question - thanks for playing!";

/// Tunables for a wheel session. Every field falls back to the constants above.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub default_questions: usize,
    pub min_increments: u32,
    pub max_increments: u32,
    pub increments_to_vary_delay: u32,
    pub initial_delay_ms: u32,
    pub delay_variance_ms: u32,
    pub continuation_pause_ms: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            default_questions: DEFAULT_QUESTIONS,
            min_increments: MIN_INCREMENTS,
            max_increments: MAX_INCREMENTS,
            increments_to_vary_delay: INCREMENTS_TO_VARY_DELAY,
            initial_delay_ms: INITIAL_DELAY_MS,
            delay_variance_ms: DELAY_VARIANCE_MS,
            continuation_pause_ms: CONTINUATION_PAUSE_MS,
        }
    }
}

impl WheelConfig {
    /// Applies raw overrides (as read from a URL query). Values that don't parse,
    /// or a question count outside the playable range, are ignored.
    pub fn with_overrides(
        mut self,
        questions: Option<&str>,
        delay_ms: Option<&str>,
        pause_ms: Option<&str>,
    ) -> Self {
        if let Some(count) = questions.and_then(|q| q.trim().parse::<usize>().ok()) {
            if (MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
                self.default_questions = count;
            } else {
                log::warn!("Ignoring out of range question count override: {}", count);
            }
        }
        if let Some(delay) = delay_ms.and_then(|d| d.trim().parse::<u32>().ok()) {
            self.initial_delay_ms = delay;
        }
        if let Some(pause) = pause_ms.and_then(|p| p.trim().parse::<u32>().ok()) {
            self.continuation_pause_ms = pause;
        }
        self
    }
}
