pub mod use_question_wheel;
pub mod validation;

pub use use_question_wheel::*;
