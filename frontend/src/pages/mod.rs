pub mod question_wheel;
