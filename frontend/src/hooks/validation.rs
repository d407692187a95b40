use yew::prelude::*;
use wheel_shared::validation::{parse_question_count, validate_question_count};

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionCountValidationState {
    pub count: i64,
    pub in_range: bool,
}

impl QuestionCountValidationState {
    pub fn from_input(input: &str) -> Self {
        let count = parse_question_count(input);
        Self {
            count,
            in_range: validate_question_count(count).is_ok(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.in_range
    }

    /// The count to start a game with, when valid.
    pub fn question_count(&self) -> Option<usize> {
        validate_question_count(self.count).ok()
    }
}

#[hook]
pub fn use_question_count_validation(
    initial: String,
) -> (UseStateHandle<QuestionCountValidationState>, Callback<String>) {
    let validation = use_state_eq(|| QuestionCountValidationState::from_input(&initial));

    let validate = {
        let validation = validation.clone();
        Callback::from(move |current_input: String| {
            validation.set(QuestionCountValidationState::from_input(&current_input));
        })
    };

    (validation, validate)
}
