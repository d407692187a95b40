use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_QUESTIONS, MIN_QUESTIONS};

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("static regex is valid"));

/// Reads the question count the way a lenient number field does: leading
/// whitespace and sign are allowed, trailing junk is dropped, and anything
/// without leading digits counts as 0.
pub fn parse_question_count(input: &str) -> i64 {
    LEADING_INTEGER
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

pub fn validate_question_count(count: i64) -> Result<usize, ValidationError> {
    if count < MIN_QUESTIONS as i64 || count > MAX_QUESTIONS as i64 {
        let mut error = ValidationError::new("question_count_out_of_range");
        error.add_param("value".into(), &count);
        error.add_param("min".into(), &MIN_QUESTIONS);
        error.add_param("max".into(), &MAX_QUESTIONS);
        return Err(error);
    }
    Ok(count as usize)
}

pub fn validate_question_input(input: &str) -> Result<usize, ValidationError> {
    validate_question_count(parse_question_count(input))
}
