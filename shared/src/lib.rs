pub mod constants;
pub mod shared_wheel_animator;
pub mod shared_wheel_game;
pub mod validation;
